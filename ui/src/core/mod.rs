//! Platform glue and presentation helpers shared by every view.

pub mod format;
pub mod platform;
pub mod timing;
