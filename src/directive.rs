//! Control characters that mark listing lines as directives rather than statements.
//!
//! Only the letters seen in transcribed listings are recognised. Anything else
//! in a control column is treated as ordinary line content by the deck builder.

use std::fmt;

/// What a directive line announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DirectiveKind {
    /// `L`: listing title line.
    Title,
    /// `R`: remark or section header.
    Remark,
    /// `P`: page-continuation header.
    PageHeader,
}

/// Recognised control characters and the directive each introduces.
const CONTROL_TABLE: [(char, DirectiveKind); 3] = [
    ('L', DirectiveKind::Title),
    ('R', DirectiveKind::Remark),
    ('P', DirectiveKind::PageHeader),
];

impl DirectiveKind {
    /// Looks up the directive introduced by control character `c`.
    pub fn from_control(c: char) -> Option<Self> {
        CONTROL_TABLE
            .iter()
            .find(|(control, _)| *control == c)
            .map(|(_, kind)| *kind)
    }

    /// The control character for this directive.
    pub fn control(self) -> char {
        CONTROL_TABLE
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(control, _)| *control)
            .unwrap_or_default()
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.control())
    }
}

/// Returns the control character held by a stripped column, if it holds exactly
/// one alphabetic character.
pub fn control_char(column: Option<&str>) -> Option<char> {
    let mut chars = column?.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}
