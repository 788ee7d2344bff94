mod duration;
mod record;

pub use duration::*;
pub use record::*;
