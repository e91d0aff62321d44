/// The watch-later list: an insertion-ordered set of movie ids
///
/// Stored as a JSON array of ids so the persisted value keeps the order the
/// user added movies in.
use super::data::MovieId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchLater {
    ids: Vec<MovieId>,
}

impl WatchLater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`. Returns true if it is now in the list.
    pub fn toggle(&mut self, id: MovieId) -> bool {
        if let Some(pos) = self.ids.iter().position(|&existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Ids in insertion order
    pub fn ids(&self) -> &[MovieId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Convert to JSON string for the local store
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.ids)
    }

    /// Parse from JSON string (from the local store).
    /// Duplicate ids collapse to their first occurrence.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: Vec<MovieId> = serde_json::from_str(json)?;
        let mut list = Self::new();
        for id in raw {
            if !list.contains(id) {
                list.ids.push(id);
            }
        }
        Ok(list)
    }
}
