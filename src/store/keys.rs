//! Persisted key layout. These names are the on-device format and must not change.

pub const LAST_WATER: &str = "dogcare_lastWaterTimestamp";
pub const LAST_INCIDENT: &str = "dogcare_lastIncidentTimestamp";
pub const WATER_HISTORY: &str = "dogcare_waterHistory";
pub const HIGH_SCORE: &str = "dogcare_highScore";
