//! Tracker core: every read and write of the four persisted entities.

use crate::core::display::DisplayModel;
use crate::core::streak::days_between;
use crate::errors::AppResult;
use crate::store::{KeyValueStore, keys};

/// Owns the store handle and is the only writer of the tracker keys.
pub struct Tracker<S: KeyValueStore> {
    store: S,
}

/// Everything the export needs, read in one go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackerSnapshot {
    pub last_water: Option<i64>,
    pub water_history: Vec<i64>,
    pub last_incident: Option<i64>,
    pub high_score: i64,
}

/// Decimal integer string → value; anything else reads as absent.
fn parse_int(raw: Option<String>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ---------------------------
    // Reads
    // ---------------------------

    pub fn last_water(&self) -> AppResult<Option<i64>> {
        Ok(parse_int(self.store.get(keys::LAST_WATER)?))
    }

    pub fn last_incident(&self) -> AppResult<Option<i64>> {
        Ok(parse_int(self.store.get(keys::LAST_INCIDENT)?))
    }

    /// Water events, most recent first. A missing key or anything that is
    /// not a JSON array of integers reads as an empty history.
    pub fn water_history(&self) -> AppResult<Vec<i64>> {
        let history = self
            .store
            .get(keys::WATER_HISTORY)?
            .and_then(|raw| serde_json::from_str::<Vec<i64>>(&raw).ok())
            .unwrap_or_default();
        Ok(history)
    }

    /// Stored best streak, 0 when absent or unparsable.
    pub fn high_score(&self) -> AppResult<i64> {
        Ok(parse_int(self.store.get(keys::HIGH_SCORE)?).unwrap_or(0))
    }

    pub fn snapshot(&self) -> AppResult<TrackerSnapshot> {
        Ok(TrackerSnapshot {
            last_water: self.last_water()?,
            water_history: self.water_history()?,
            last_incident: self.last_incident()?,
            high_score: self.high_score()?,
        })
    }

    // ---------------------------
    // Recorders
    // ---------------------------

    /// Store `now` as the last water time and prepend it to the history.
    pub fn record_water(&mut self, now: i64) -> AppResult<()> {
        self.store.set(keys::LAST_WATER, &now.to_string())?;

        let mut history = self.water_history()?;
        history.insert(0, now);
        self.store
            .set(keys::WATER_HISTORY, &serde_json::to_string(&history)?)?;

        Ok(())
    }

    /// Overwrite the last incident time. The previous one is not kept.
    pub fn record_incident(&mut self, now: i64) -> AppResult<()> {
        self.store.set(keys::LAST_INCIDENT, &now.to_string())
    }

    // ---------------------------
    // Streak & high score
    // ---------------------------

    /// Whole days since the last incident, `None` if there never was one.
    pub fn current_streak_days(&self, now: i64) -> AppResult<Option<i64>> {
        Ok(self
            .last_incident()?
            .map(|incident| days_between(incident, now)))
    }

    /// Raise the stored high score to `current_streak` if it is strictly
    /// greater. Returns the high score after the comparison.
    pub fn refresh_high_score(&mut self, current_streak: i64) -> AppResult<i64> {
        let best = self.high_score()?;
        if current_streak > best {
            self.store
                .set(keys::HIGH_SCORE, &current_streak.to_string())?;
            return Ok(current_streak);
        }
        Ok(best)
    }

    /// Re-read everything the display shows. The high score is only
    /// compared when a streak exists.
    pub fn refresh(&mut self, now: i64) -> AppResult<DisplayModel> {
        let streak_days = self.current_streak_days(now)?;
        let high_score = match streak_days {
            Some(streak) => self.refresh_high_score(streak)?,
            None => self.high_score()?,
        };

        Ok(DisplayModel {
            last_water: self.last_water()?,
            streak_days,
            high_score,
            history: self.water_history()?,
        })
    }

    /// CSV text of the whole record set, with the default date format.
    pub fn build_export(&self) -> AppResult<String> {
        self.build_export_with(crate::utils::date::DEFAULT_DATE_FORMAT)
    }

    pub fn build_export_with(&self, date_format: &str) -> AppResult<String> {
        crate::export::csv::build_export(&self.snapshot()?, date_format)
    }
}
