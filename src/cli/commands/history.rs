use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::date::format_millis;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { limit } = cmd {
        let tracker = open_tracker(cfg)?;
        let history = tracker.water_history()?;

        if history.is_empty() {
            println!("No water recorded yet.");
            return Ok(());
        }

        let shown = limit.unwrap_or(history.len());
        println!("💧 Water history ({} total):", history.len());
        for (i, ts) in history.iter().take(shown).enumerate() {
            println!("{:>4}: {} | {}", i + 1, ts, format_millis(*ts, &cfg.date_format));
        }
    }
    Ok(())
}
