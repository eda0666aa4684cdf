use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::display::DisplayModel;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::colors::{CYAN, RESET, color_for_streak, colorize_optional};
use crate::utils::date::resolve_now;
use crate::utils::formatting::{bold, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { at, limit } = cmd {
        let now = resolve_now(at.as_deref())?;
        let mut tracker = open_tracker(cfg)?;

        let before = tracker.high_score()?;
        let model = tracker.refresh(now)?;

        if model.high_score > before {
            success(format!("🏆 New high score: {}", model.high_score_text()));
            audit(
                &tracker,
                "high_score",
                &model.high_score.to_string(),
                "New best streak",
            );
        }

        render(&model, cfg, *limit);
    }
    Ok(())
}

/// Terminal render sink for a refreshed display model.
pub(crate) fn render(model: &DisplayModel, cfg: &Config, limit: usize) {
    header("dogcare status");

    let label = |s: &str| bold(&pad_right(s, 16));

    println!(
        "{} {}",
        label("Last water:"),
        colorize_optional(
            &model.last_water_text(&cfg.date_format),
            model.last_water.is_some()
        )
    );
    println!(
        "{} {}{}{}",
        label("Current streak:"),
        color_for_streak(model.streak_days, model.high_score),
        model.streak_text(),
        RESET
    );
    println!("{} {}", label("High score:"), model.high_score_text());

    let history = model.history_texts(&cfg.date_format);
    if history.is_empty() {
        println!("{} {}", label("Water history:"), colorize_optional("empty", false));
        return;
    }

    println!("{} {} entries", label("Water history:"), history.len());
    let shown = if limit == 0 { history.len() } else { limit };
    for (i, entry) in history.iter().take(shown).enumerate() {
        println!("  {CYAN}{:>3}{RESET}. {entry}", i + 1);
    }
    if history.len() > shown {
        println!("  … {} more", history.len() - shown);
    }
}
