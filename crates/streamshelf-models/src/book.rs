use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub year: u32,
    pub genre: String, // Comma-separated labels
    pub rating: f32,
    pub pages: u32,
    pub thumbnail: String,
    pub description: String,
    pub preview: String,
    #[serde(default)]
    pub featured: bool,
}
