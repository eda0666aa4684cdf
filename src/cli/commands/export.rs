use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportTarget;
use crate::utils::date::resolve_now;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        dir,
        at,
        stdout,
        force,
    } = cmd
    {
        let now = resolve_now(at.as_deref())?;
        let tracker = open_tracker(cfg)?;

        if *stdout {
            print!("{}", tracker.build_export_with(&cfg.date_format)?);
            return Ok(());
        }

        let target = ExportTarget {
            file: file.as_deref().map(expand_tilde),
            dir: dir.as_deref().map(expand_tilde).or_else(|| cfg.export_dir()),
        };

        let path = ExportLogic::export(&tracker, &target, now, &cfg.date_format, *force)?;
        audit(&tracker, "export", &path.to_string_lossy(), "CSV export written");
    }
    Ok(())
}
