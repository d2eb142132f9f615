use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::ContentKind;

/// Cross-variant content reference. Bare ids collide across collections (a
/// movie and a book may both carry id 1), so user lists store (kind, id)
/// pairs rather than ids alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContentRef {
    pub kind: ContentKind,
    pub id: u32,
}

impl ContentRef {
    pub fn new(kind: ContentKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
