//! Session-scoped cache of player and tournament photos.
//!
//! Entries live for the life of the process and are never evicted; rosters and
//! leaderboard pages are small. Misses (no photo on the backend) are cached too.

use std::collections::HashMap;
use std::sync::RwLock;

/// Whose photo.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ImageKind {
    Player,
    Tournament,
}

/// Fetched image body and its content type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct ImageCache {
    entries: RwLock<HashMap<(ImageKind, i64), Option<Image>>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` if never fetched; `Some(None)` if the backend has no photo.
    pub fn get(&self, kind: ImageKind, id: i64) -> Option<Option<Image>> {
        let guard = self.entries.read().ok()?;
        guard.get(&(kind, id)).cloned()
    }

    pub fn insert(&self, kind: ImageKind, id: i64, image: Option<Image>) {
        if let Ok(mut guard) = self.entries.write() {
            guard.insert((kind, id), image);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
