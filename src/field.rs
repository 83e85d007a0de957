//! Column layout of a transcribed listing line.
//!
//! Each printed listing line is cut into ten fixed column ranges. Columns are
//! 1-based and counted in characters, so a transcription glyph such as `█`
//! occupies a single column.

use std::fmt;

/// Name of one of the ten listing column ranges, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldName {
    Column1,
    Lognum,
    Column8,
    Label,
    Operation,
    Operand1,
    Operand2,
    Operand3,
    Misc,
    Remarks,
}

impl FieldName {
    /// All field names in layout order.
    pub const ALL: [FieldName; FIELD_COUNT] = [
        FieldName::Column1,
        FieldName::Lognum,
        FieldName::Column8,
        FieldName::Label,
        FieldName::Operation,
        FieldName::Operand1,
        FieldName::Operand2,
        FieldName::Operand3,
        FieldName::Misc,
        FieldName::Remarks,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::Column1 => "column1",
            FieldName::Lognum => "lognum",
            FieldName::Column8 => "column8",
            FieldName::Label => "label",
            FieldName::Operation => "operation",
            FieldName::Operand1 => "operand1",
            FieldName::Operand2 => "operand2",
            FieldName::Operand3 => "operand3",
            FieldName::Misc => "misc",
            FieldName::Remarks => "remarks",
        }
    }

    /// Position of the field in [LAYOUT].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column range of the field.
    pub const fn spec(self) -> FieldSpec {
        LAYOUT[self.index()]
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named column range: `len` columns starting at 1-based column `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    pub start: usize,
    pub len: usize,
}

impl FieldSpec {
    const fn new(name: FieldName, start: usize, len: usize) -> Self {
        FieldSpec { name, start, len }
    }

    /// The `(start, length)` pair of the field.
    pub const fn columns(&self) -> (usize, usize) {
        (self.start, self.len)
    }

    /// Last column covered, inclusive.
    pub const fn end(&self) -> usize {
        self.start + self.len - 1
    }

    /// Zero-based character offset of the first column.
    pub const fn offset(&self) -> usize {
        self.start - 1
    }
}

/// Number of fields on a listing line.
pub const FIELD_COUNT: usize = 10;

/// The listing column layout. Ranges are contiguous and cover columns 1 to [LINE_WIDTH].
pub const LAYOUT: [FieldSpec; FIELD_COUNT] = [
    FieldSpec::new(FieldName::Column1, 1, 1),
    FieldSpec::new(FieldName::Lognum, 2, 6),
    FieldSpec::new(FieldName::Column8, 8, 1),
    FieldSpec::new(FieldName::Label, 9, 11),
    FieldSpec::new(FieldName::Operation, 20, 13),
    FieldSpec::new(FieldName::Operand1, 33, 14),
    FieldSpec::new(FieldName::Operand2, 47, 14),
    FieldSpec::new(FieldName::Operand3, 61, 15),
    FieldSpec::new(FieldName::Misc, 76, 5),
    FieldSpec::new(FieldName::Remarks, 81, 40),
];

/// Width of the column layout; text past this column is not part of any field.
pub const LINE_WIDTH: usize = LAYOUT[FIELD_COUNT - 1].end();

/// The layout as plain `(start, length)` pairs.
pub fn layout_pairs() -> [(usize, usize); FIELD_COUNT] {
    LAYOUT.map(|spec| spec.columns())
}
