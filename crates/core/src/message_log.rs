//! Append-only player-facing message history.

use std::mem;

use serde::{Deserialize, Serialize};

use crate::types::MessageCategory;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub category: MessageCategory,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>, category: MessageCategory) {
        self.messages.push(Message { text: text.into(), category });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Greedy word wrap used by the log panels. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word;
            while word.chars().count() > width {
                if !line.is_empty() {
                    lines.push(mem::take(&mut line));
                }
                let split = word.char_indices().nth(width).map_or(word.len(), |(idx, _)| idx);
                lines.push(word[..split].to_string());
                word = &word[split..];
            }
            let word_width = word.chars().count();
            let line_width = line.chars().count();
            let needed = if line.is_empty() { word_width } else { line_width + 1 + word_width };
            if needed > width && !line.is_empty() {
                lines.push(mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_keep_insertion_order() {
        let mut log = MessageLog::new();
        log.add("first", MessageCategory::Default);
        log.add("second", MessageCategory::Impossible);
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].text, "first");
        assert_eq!(log.last().map(|m| m.category), Some(MessageCategory::Impossible));
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap("the orc attacks the player for 3 hit points", 12);
        assert_eq!(lines, vec!["the orc", "attacks the", "player for 3", "hit points"]);
    }

    #[test]
    fn wrap_measures_characters_not_bytes() {
        assert_eq!(wrap("орк бьёт игрока", 8), vec!["орк бьёт", "игрока"]);
    }

    #[test]
    fn wrap_splits_words_longer_than_width() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }
}
