pub mod backup;
pub mod display;
pub mod log;
pub mod streak;
pub mod tracker;
pub mod watch;

pub use display::DisplayModel;
pub use tracker::{Tracker, TrackerSnapshot};
