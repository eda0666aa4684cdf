//! Periodic refresh. The tracker has no timer of its own; this loop is the
//! host-side schedule that calls `Tracker::refresh` on every tick.

use crate::core::display::DisplayModel;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::store::KeyValueStore;
use std::thread;
use std::time::Duration;

pub const DEFAULT_INTERVAL_SECS: u64 = 60;

pub struct WatchLogic;

impl WatchLogic {
    /// Refresh, render, sleep; repeat `ticks` times or forever when `None`.
    ///
    /// `clock` supplies "now" in milliseconds for each tick. Returns how many
    /// refreshes ran.
    pub fn run<S, C, R>(
        tracker: &mut Tracker<S>,
        interval: Duration,
        ticks: Option<u64>,
        mut clock: C,
        mut render: R,
    ) -> AppResult<u64>
    where
        S: KeyValueStore,
        C: FnMut() -> i64,
        R: FnMut(&DisplayModel),
    {
        let mut done = 0u64;

        loop {
            let model = tracker.refresh(clock())?;
            render(&model);
            done += 1;

            if ticks.is_some_and(|limit| done >= limit) {
                break;
            }
            thread::sleep(interval);
        }

        Ok(done)
    }
}
