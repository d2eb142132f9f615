use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub year: u32,
    pub genre: String, // Comma-separated labels, e.g. "Action, Crime, Drama"
    pub rating: f32,
    pub duration: String,
    pub thumbnail: String,
    pub backdrop: String,
    pub description: String,
    pub trailer: String,
    #[serde(default)]
    pub featured: bool,
}
