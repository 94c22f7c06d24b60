use std::error::Error;

#[macro_export]
macro_rules! unwrap_or_return_some_err {
    ($expression:expr) => {
        match $expression {
            Ok(v) => v,
            Err(e) => return Some(Err(e.into())),
        }
    };
}

/// Exit code for a failure with no more specific code.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the run parameters could not be collected, following the
/// `EX_USAGE` convention of `sysexits.h`.
pub const EXIT_USAGE: i32 = 64;

/// Maps an error to the process exit code used by the `dnamark` binary.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// IO errors exit with their OS error code when there is one, so a failed
/// FASTA write reports e.g. `ENOENT` or `EACCES` to the shell.
impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error()
            .or_else(|| {
                self.get_ref()
                    .and_then(|inner| inner.source())
                    .and_then(|source| source.downcast_ref::<std::io::Error>())
                    .and_then(std::io::Error::raw_os_error)
            })
            .unwrap_or(EXIT_FAILURE)
    }
}

/// Renders an error followed by each of its sources, one `caused by:` line
/// per level. Record errors keep the underlying IO error as their source, so
/// this shows both the file path and the system message.
#[must_use]
pub fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.ends_with(&cause_text) {
            message.push_str("\n  caused by: ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior in the binary: the full error chain is printed to stderr and the
/// process exits with the code from [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Error,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                log::error!("{e}");
                eprintln!("dnamark: {}", error_chain(&e));
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                log::error!("{msg}: {e}");
                eprintln!("dnamark: {msg}\n  {}", error_chain(&e));
                std::process::exit(e.get_code());
            }
        }
    }
}
