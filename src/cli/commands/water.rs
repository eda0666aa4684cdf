use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::{format_millis, resolve_now};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Water { at } = cmd {
        let now = resolve_now(at.as_deref())?;
        let mut tracker = open_tracker(cfg)?;

        tracker.record_water(now)?;

        let when = format_millis(now, &cfg.date_format);
        success(format!("💧 Water recorded at {when}"));
        audit(&tracker, "water", &now.to_string(), &format!("Water given at {when}"));
    }
    Ok(())
}
