//! The H-800/H-1800 48-bit instruction word.
//!
//! A word is four 12-bit groups. Bits 1-12 hold the command code; bits 13-24,
//! 25-36 and 37-48 are the A, B and C address groups. Address groups usually
//! name operand and result locations, but some commands use them for counts,
//! shift amounts or sequence-counter changes instead.
//!
//! ```text
//!  MSB                                                             LSB
//! +----------------+----------------+----------------+----------------+
//! | 1           12 | 13          24 | 25          36 | 37          48 |
//! +----------------+----------------+----------------+----------------+
//! | COMMAND        |   A ADDRESS    |   B ADDRESS    |   C ADDRESS    |
//! +----------------+----------------+----------------+----------------+
//! ```

use std::fmt;

use crate::{
    bits::{BitRange, low_mask},
    errors::WordError,
};

/// Width of a machine word in bits.
pub const WORD_BITS: u32 = 48;

/// Largest value a word can hold, `2^48 - 1`.
pub const WORD_MAX: u64 = low_mask(WORD_BITS);

/// Largest value a 12-bit subfield can hold.
pub const FIELD_MAX: u16 = 4095;

/// One of the four 12-bit groups of a [Word].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WordField {
    Command,
    A,
    B,
    C,
}

impl WordField {
    /// All groups, most significant first.
    pub const ALL: [WordField; 4] = [WordField::Command, WordField::A, WordField::B, WordField::C];

    /// Bit span of the group within the word.
    pub const fn bits(self) -> BitRange {
        match self {
            WordField::Command => Word::COMMAND,
            WordField::A => Word::A,
            WordField::B => Word::B,
            WordField::C => Word::C,
        }
    }
}

impl fmt::Display for WordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordField::Command => "command",
            WordField::A => "A address",
            WordField::B => "B address",
            WordField::C => "C address",
        };
        f.write_str(name)
    }
}

const fn span(first: u32, last: u32) -> BitRange {
    match BitRange::new(first, last) {
        Some(range) => range,
        None => panic!("invalid word field span"),
    }
}

/// A 48-bit word held as its four subfields.
///
/// The composite value is always derived from the subfields, so the two views
/// can never disagree. Words are plain `Copy` values; changing one never shows
/// through another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "crate::serde::WordDef", into = "crate::serde::WordDef")
)]
pub struct Word {
    command: u16,
    a: u16,
    b: u16,
    c: u16,
}

impl Word {
    pub const COMMAND: BitRange = span(1, 12);
    pub const A: BitRange = span(13, 24);
    pub const B: BitRange = span(25, 36);
    pub const C: BitRange = span(37, 48);

    /// Builds a word from its subfields. Fails if any of them exceeds 4095.
    pub fn new(command: u16, a: u16, b: u16, c: u16) -> Result<Self, WordError> {
        Ok(Word {
            command: check(WordField::Command, command)?,
            a: check(WordField::A, a)?,
            b: check(WordField::B, b)?,
            c: check(WordField::C, c)?,
        })
    }

    /// Builds a word from its 48-bit value.
    pub fn from_value(value: u64) -> Result<Self, WordError> {
        let mut word = Word::default();
        word.set_value(value)?;
        Ok(word)
    }

    /// The composite value, `command·2^36 + a·2^24 + b·2^12 + c`.
    pub fn value(&self) -> u64 {
        pack(self.command, self.a, self.b, self.c)
    }

    /// Replaces the whole word and re-derives all four subfields.
    pub fn set_value(&mut self, value: u64) -> Result<(), WordError> {
        if value > WORD_MAX {
            return Err(WordError::ValueOutOfRange(value));
        }

        let [command, a, b, c] = unpack(value);
        *self = Word { command, a, b, c };

        Ok(())
    }

    pub fn command(&self) -> u16 {
        self.command
    }

    pub fn a(&self) -> u16 {
        self.a
    }

    pub fn b(&self) -> u16 {
        self.b
    }

    pub fn c(&self) -> u16 {
        self.c
    }

    pub fn set_command(&mut self, value: u16) -> Result<(), WordError> {
        self.set_field(WordField::Command, value)
    }

    pub fn set_a(&mut self, value: u16) -> Result<(), WordError> {
        self.set_field(WordField::A, value)
    }

    pub fn set_b(&mut self, value: u16) -> Result<(), WordError> {
        self.set_field(WordField::B, value)
    }

    pub fn set_c(&mut self, value: u16) -> Result<(), WordError> {
        self.set_field(WordField::C, value)
    }

    /// Reads one subfield.
    pub fn field(&self, field: WordField) -> u16 {
        match field {
            WordField::Command => self.command,
            WordField::A => self.a,
            WordField::B => self.b,
            WordField::C => self.c,
        }
    }

    /// Replaces one subfield, leaving the other three untouched. On error the
    /// word is unchanged.
    pub fn set_field(&mut self, field: WordField, value: u16) -> Result<(), WordError> {
        let value = check(field, value)?;
        let slot = match field {
            WordField::Command => &mut self.command,
            WordField::A => &mut self.a,
            WordField::B => &mut self.b,
            WordField::C => &mut self.c,
        };
        *slot = value;

        Ok(())
    }
}

fn check(field: WordField, value: u16) -> Result<u16, WordError> {
    debug_assert_eq!(field.bits().max_value(), u64::from(FIELD_MAX));
    if field.bits().fits(u64::from(value)) {
        Ok(value)
    } else {
        Err(WordError::InvalidFieldValue { field, value })
    }
}

/// Packs four subfields into a 48-bit value. Subfield bits above 12 are dropped.
pub fn pack(command: u16, a: u16, b: u16, c: u16) -> u64 {
    [command, a, b, c]
        .into_iter()
        .zip(WordField::ALL)
        .fold(0, |word, (part, field)| {
            field.bits().deposit(word, WORD_BITS, u64::from(part))
        })
}

/// Splits a value into `[command, a, b, c]`. Bits beyond the 48-bit word are ignored.
pub fn unpack(value: u64) -> [u16; 4] {
    WordField::ALL.map(|field| field.bits().extract(value, WORD_BITS) as u16)
}

impl TryFrom<u64> for Word {
    type Error = WordError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Word::from_value(value)
    }
}

impl From<Word> for u64 {
    fn from(word: Word) -> Self {
        word.value()
    }
}

/// Four groups of four octal digits, e.g. `0000 7777 0000 7777`.
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04o} {:04o} {:04o} {:04o}",
            self.command, self.a, self.b, self.c
        )
    }
}

impl fmt::Octal for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.value(), f)
    }
}
