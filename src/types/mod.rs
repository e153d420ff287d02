mod datetime;
pub use datetime::*;
mod duration;
pub use duration::*;
