use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_CAPACITY: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// Data URL or path of the photo
    pub image: String,
}

/// Most-recent-first list of photos the user has tried on.
///
/// Owned by the caller and passed around explicitly; persisting it is the
/// caller's business.
///
/// Deserializing keeps at most `capacity` entries, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct UploadHistory {
    capacity: usize,
    entries: Vec<HistoryEntry>,
}

#[derive(Deserialize)]
struct StoredHistory {
    capacity: usize,
    entries: Vec<HistoryEntry>,
}

impl From<StoredHistory> for UploadHistory {
    fn from(stored: StoredHistory) -> Self {
        let mut entries = stored.entries;
        entries.truncate(stored.capacity);
        Self {
            capacity: stored.capacity,
            entries,
        }
    }
}

impl Default for UploadHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl UploadHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Put an entry first, dropping an older entry for the same image
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.retain(|e| e.image != entry.image);
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    /// Returns true when an entry was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, image: &str) -> HistoryEntry {
        HistoryEntry {
            id: id.to_string(),
            image: image.to_string(),
        }
    }

    #[test]
    fn test_most_recent_first_and_bounded() {
        let mut history = UploadHistory::with_capacity(3);
        for i in 0..5 {
            history.record(entry(&i.to_string(), &format!("img{}", i)));
        }
        let ids: Vec<&str> = history.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "3", "2"]);
    }

    #[test]
    fn test_same_image_moves_to_front() {
        let mut history = UploadHistory::default();
        history.record(entry("1", "a.png"));
        history.record(entry("2", "b.png"));
        history.record(entry("3", "a.png"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0], entry("3", "a.png"));
        assert_eq!(history.entries()[1], entry("2", "b.png"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut history = UploadHistory::default();
        history.record(entry("1", "a.png"));
        history.record(entry("2", "b.png"));

        assert!(history.remove("1"));
        assert!(!history.remove("1"));
        assert_eq!(history.len(), 1);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_serde_roundtrip_keeps_capacity() {
        let mut history = UploadHistory::with_capacity(2);
        history.record(entry("1", "a.png"));
        let json = serde_json::to_string(&history).unwrap();
        let parsed: UploadHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, history);
    }

    #[test]
    fn test_deserialize_truncates_to_capacity() {
        let json = r#"{"capacity": 2, "entries": [
            {"id": "1", "image": "a.png"},
            {"id": "2", "image": "b.png"},
            {"id": "3", "image": "c.png"},
            {"id": "4", "image": "d.png"},
            {"id": "5", "image": "e.png"}
        ]}"#;
        let mut history: UploadHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].id, "1");
        assert_eq!(history.entries()[1].id, "2");

        history.record(entry("6", "f.png"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].id, "6");
    }
}
