//! Serializable shapes for words.
//!
//! Decks, entries and card records serialize directly through derived impls.
//! A [Word] goes through [WordDef] so that deserialized subfields are range
//! checked exactly like [Word::new].

use serde::{Deserialize, Serialize};

use crate::{errors::WordError, word::Word};

/// A word as its four 12-bit groups.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct WordDef {
    /// Command code, bits 1-12.
    pub command: u16,
    /// A address group, bits 13-24.
    pub a: u16,
    /// B address group, bits 25-36.
    pub b: u16,
    /// C address group, bits 37-48.
    pub c: u16,
}

impl From<Word> for WordDef {
    fn from(word: Word) -> Self {
        WordDef {
            command: word.command(),
            a: word.a(),
            b: word.b(),
            c: word.c(),
        }
    }
}

impl TryFrom<WordDef> for Word {
    type Error = WordError;

    fn try_from(def: WordDef) -> Result<Self, Self::Error> {
        Word::new(def.command, def.a, def.b, def.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn test_word_json_shape() {
        let word = Word::new(1, 2, 3, 4095).unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, r#"{"command":1,"a":2,"b":3,"c":4095}"#);
        assert_eq!(serde_json::from_str::<Word>(&json).unwrap(), word);
    }

    #[test]
    fn test_word_rejects_wide_field() {
        let err = serde_json::from_str::<Word>(r#"{"command":4096,"a":0,"b":0,"c":0}"#).unwrap_err();
        assert!(err.to_string().contains("does not fit in 12 bits"));
    }

    #[test]
    fn test_deck_json_shape() {
        let deck = Deck::build(["L       TITLE", " 0981   BACKUP     TS"]);
        let json = serde_json::to_value(&deck).unwrap();

        assert_eq!(json["entries"][0]["type"], "directive");
        assert_eq!(json["entries"][0]["kind"], "Title");
        assert_eq!(json["entries"][1]["type"], "statement");
        assert_eq!(json["entries"][1]["primary"]["lognum"], "0981");
        assert_eq!(json["entries"][1]["continuations"], serde_json::json!([]));
    }
}
