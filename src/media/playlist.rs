use super::{MediaError, MediaItem};

/// A list of items where exactly one is always playing.
///
/// The first item is selected on construction. Choosing another item
/// replaces the current one; there is no way back to an empty selection.
/// An empty playlist is allowed and simply has nothing to play.
#[derive(Debug, Clone)]
pub struct Playlist<T: MediaItem> {
    items: Vec<T>,
    current: usize,
}

impl<T: MediaItem> Playlist<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, current: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current().is_some_and(|item| item.id() == id)
    }

    pub fn select(&mut self, id: &str) -> Result<&T, MediaError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| MediaError::UnknownItem(id.to_string()))?;
        self.current = index;
        Ok(&self.items[index])
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
