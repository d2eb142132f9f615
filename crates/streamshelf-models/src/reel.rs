use serde::{Deserialize, Serialize};

/// Short-form clip. Reels carry no genre label and no rating; view and like
/// counts are stored as plain integers, not display strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reel {
    pub id: u32,
    pub title: String,
    pub creator: String,
    pub duration: String,
    pub views: u64,
    pub likes: u64,
    pub thumbnail: String,
    pub video: String,
    #[serde(default)]
    pub featured: bool,
}
