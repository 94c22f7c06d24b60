mod counts;
mod report;

pub use counts::*;
pub use report::*;
