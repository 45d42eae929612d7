//! Append-only transcript

use super::entities::ConversationMessage;
use super::message::Message;

/// An ordered, append-only log (Entity)
///
/// There is no way to remove or edit an entry once it has been pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript<T = Message> {
    entries: Vec<T>,
}

impl<T> Transcript<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T> Default for Transcript<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript<ConversationMessage> {
    /// Render as `speaker: content` lines, oldest first
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
