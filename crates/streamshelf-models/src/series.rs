use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub id: u32,
    pub title: String,
    pub year: u32,
    pub genre: String, // Comma-separated labels
    pub rating: f32,
    pub episodes: u32,
    pub status: SeriesStatus,
    pub thumbnail: String,
    pub backdrop: String,
    pub description: String,
    pub trailer: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SeriesStatus {
    Ongoing,
    Completed,
}

impl fmt::Display for SeriesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesStatus::Ongoing => write!(f, "Ongoing"),
            SeriesStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for SeriesStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ongoing" => Ok(SeriesStatus::Ongoing),
            "completed" => Ok(SeriesStatus::Completed),
            _ => Err(format!(
                "Invalid series status: {}. Use 'ongoing' or 'completed'",
                s
            )),
        }
    }
}
