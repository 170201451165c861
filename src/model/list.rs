// File: ./src/model/list.rs
// Ordered entry collection backing both screen lists.
use crate::model::item::{Entry, EntryId};
use serde::{Deserialize, Serialize};

/// Insertion-ordered sequence of entries. Order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends at the end and returns the id assigned to the new entry.
    pub fn push(&mut self, text: impl Into<String>) -> EntryId {
        let entry = Entry::new(text);
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Removes the entry at `index`, shifting later entries left.
    /// Out-of-range indices leave the list untouched.
    pub fn remove_at(&mut self, index: usize) -> Option<Entry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn remove_by_id(&mut self, id: EntryId) -> Option<Entry> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Entry texts in display order.
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
