//! Bookmark Manager for CozyTab.
//!
//! Bookmarks are independent of tabs; they keep insertion order.

use chrono::Utc;
use uuid::Uuid;

use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(&mut self, title: &str, url: &str) -> Result<String, BookmarkError>;
    fn remove_bookmark(&mut self, id: &str) -> Result<(), BookmarkError>;
    fn get(&self, id: &str) -> Option<&Bookmark>;
    fn list(&self) -> &[Bookmark];
    fn search(&self, query: &str) -> Vec<&Bookmark>;
    fn is_bookmarked(&self, url: &str) -> bool;
}

/// In-memory bookmark collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkManager {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self { bookmarks }
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    /// Adds a bookmark after trimming both fields. Returns the generated ID.
    fn add_bookmark(&mut self, title: &str, url: &str) -> Result<String, BookmarkError> {
        let title = title.trim();
        let url = url.trim();
        if title.is_empty() {
            return Err(BookmarkError::InvalidInput("title is empty".to_string()));
        }
        if url.is_empty() {
            return Err(BookmarkError::InvalidInput("url is empty".to_string()));
        }

        let id = Uuid::new_v4().to_string();
        self.bookmarks.push(Bookmark {
            id: id.clone(),
            title: title.to_string(),
            url: url.to_string(),
            created_at: Utc::now().timestamp_millis(),
        });
        Ok(id)
    }

    fn remove_bookmark(&mut self, id: &str) -> Result<(), BookmarkError> {
        let pos = self
            .bookmarks
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| BookmarkError::NotFound(id.to_string()))?;
        self.bookmarks.remove(pos);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Case-insensitive match on title or URL, in insertion order.
    fn search(&self, query: &str) -> Vec<&Bookmark> {
        let needle = query.to_lowercase();
        self.bookmarks
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle) || b.url.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b.url == url)
    }
}
