use crate::cli::commands::open_tracker;
use crate::cli::commands::status::render;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::watch::WatchLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::now_millis;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { interval, ticks } = cmd {
        let secs = interval.unwrap_or(cfg.refresh_interval_secs);
        let mut tracker = open_tracker(cfg)?;

        info(format!("Refreshing every {secs}s (Ctrl+C to stop)"));

        let done = WatchLogic::run(
            &mut tracker,
            Duration::from_secs(secs),
            *ticks,
            now_millis,
            |model| render(model, cfg, 5),
        )?;

        info(format!("Stopped after {done} refresh(es)"));
    }
    Ok(())
}
