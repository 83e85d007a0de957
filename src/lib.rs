//! # h800
//!
//! Tools for reading transcribed Honeywell H-800/H-1800 assembly listings and
//! for working with the machine's 48-bit instruction word.
//!
//! A listing line is cut into ten fixed column fields ([card::Card]). A whole
//! listing is grouped into numbered statements with their continuation rows,
//! and title, remark and page-header directives ([deck::Deck]). Independently,
//! [word::Word] packs the four 12-bit groups of an instruction word using the
//! manuals' MSB-first bit numbering.
//!
//! ## Example
//!
//! ```
//! use h800::deck::Deck;
//! use h800::word::Word;
//!
//! let deck = Deck::build([
//!     " 0981   BACKUP     TS           S ZERO        COMMON        SET UP GPB     C",
//!     "                   TS           Z,SC,4        N,SH          MON WAKE       C",
//! ]);
//! let statement = deck.statement("0981").unwrap();
//! assert_eq!(statement.primary().label.as_deref(), Some("BACKUP"));
//! assert_eq!(statement.row_count(), 2);
//!
//! let mut word = Word::new(0, 4095, 0, 4095).unwrap();
//! assert_eq!(word.value(), 68702703615);
//! word.set_command(0o7777).unwrap();
//! assert_eq!(word.to_string(), "7777 7777 0000 7777");
//! ```

pub mod bits;
pub mod card;
pub mod deck;
pub mod directive;
pub mod errors;
pub mod field;
#[cfg(feature = "serde")]
pub mod serde;
pub mod word;
