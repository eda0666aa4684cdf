use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::date::{format_millis, resolve_now};
use crate::utils::formatting::days_label;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Incident { at } = cmd {
        let now = resolve_now(at.as_deref())?;
        let mut tracker = open_tracker(cfg)?;

        // settle the high score with the streak that is about to end
        if let Some(streak) = tracker.current_streak_days(now)? {
            let before = tracker.high_score()?;
            let best = tracker.refresh_high_score(streak)?;
            if best > before {
                audit(&tracker, "high_score", &best.to_string(), "New best streak");
            }
            info(format!("Streak ended at {}", days_label(streak)));
        }

        tracker.record_incident(now)?;

        let when = format_millis(now, &cfg.date_format);
        warning(format!("Incident recorded at {when}, streak reset to 0"));
        audit(&tracker, "incident", &now.to_string(), &format!("Incident at {when}"));
    }
    Ok(())
}
