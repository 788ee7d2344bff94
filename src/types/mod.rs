mod activity;
mod profile;
mod record;
mod summary;

pub use activity::*;
pub use profile::*;
pub use record::*;
pub use summary::*;
