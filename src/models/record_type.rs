/// Row kinds of the export table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Water,
    LastIncident,
    HighScore,
}

impl RecordType {
    /// Label written in the `Record Type` column.
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::Water => "Water",
            RecordType::LastIncident => "Last Incident",
            RecordType::HighScore => "High Score",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Water" => Some(Self::Water),
            "Last Incident" => Some(Self::LastIncident),
            "High Score" => Some(Self::HighScore),
            _ => None,
        }
    }
}
