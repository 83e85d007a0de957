//! One transcribed listing line cut into its ten [crate::field::LAYOUT] fields.

use std::iter;

use crate::field::{FIELD_COUNT, FieldName, LAYOUT, LINE_WIDTH};

/// The ten named fields of a card, each trimmed and `None` when blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardRecord {
    pub column1: Option<String>,
    pub lognum: Option<String>,
    pub column8: Option<String>,
    pub label: Option<String>,
    pub operation: Option<String>,
    pub operand1: Option<String>,
    pub operand2: Option<String>,
    pub operand3: Option<String>,
    pub misc: Option<String>,
    pub remarks: Option<String>,
}

impl CardRecord {
    fn from_fields(fields: [Option<String>; FIELD_COUNT]) -> Self {
        let [
            column1,
            lognum,
            column8,
            label,
            operation,
            operand1,
            operand2,
            operand3,
            misc,
            remarks,
        ] = fields;

        CardRecord {
            column1,
            lognum,
            column8,
            label,
            operation,
            operand1,
            operand2,
            operand3,
            misc,
            remarks,
        }
    }

    /// The field called `name`.
    pub fn get(&self, name: FieldName) -> Option<&str> {
        let field = match name {
            FieldName::Column1 => &self.column1,
            FieldName::Lognum => &self.lognum,
            FieldName::Column8 => &self.column8,
            FieldName::Label => &self.label,
            FieldName::Operation => &self.operation,
            FieldName::Operand1 => &self.operand1,
            FieldName::Operand2 => &self.operand2,
            FieldName::Operand3 => &self.operand3,
            FieldName::Misc => &self.misc,
            FieldName::Remarks => &self.remarks,
        };
        field.as_deref()
    }

    /// Number of named fields; always ten.
    pub const fn len(&self) -> usize {
        FIELD_COUNT
    }

    /// Fields paired with their names, in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, Option<&str>)> + '_ {
        FieldName::ALL.into_iter().map(|name| (name, self.get(name)))
    }
}

/// A parsed listing line.
///
/// Parsing never fails: lines shorter than the layout are padded with blanks and
/// anything past column [LINE_WIDTH] is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    line: String,
    fields: [String; FIELD_COUNT],
    stripped_fields: [Option<String>; FIELD_COUNT],
    record: CardRecord,
}

impl Card {
    pub fn parse(line: &str) -> Self {
        let columns: Vec<char> = line
            .chars()
            .chain(iter::repeat(' '))
            .take(LINE_WIDTH)
            .collect();

        let fields: [String; FIELD_COUNT] = LAYOUT.map(|spec| {
            columns[spec.offset()..spec.offset() + spec.len]
                .iter()
                .collect()
        });

        let stripped_fields = fields.clone().map(|field| {
            let trimmed = field.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        });

        Card {
            line: line.to_string(),
            record: CardRecord::from_fields(stripped_fields.clone()),
            fields,
            stripped_fields,
        }
    }

    /// The line exactly as given to [Card::parse].
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Raw field text, blank-padded to each field's width.
    pub fn fields(&self) -> &[String; FIELD_COUNT] {
        &self.fields
    }

    /// Trimmed field text; blank fields are `None`.
    pub fn stripped_fields(&self) -> &[Option<String>; FIELD_COUNT] {
        &self.stripped_fields
    }

    pub fn record(&self) -> &CardRecord {
        &self.record
    }

    pub fn into_record(self) -> CardRecord {
        self.record
    }

    /// Raw text of the field called `name`.
    pub fn field(&self, name: FieldName) -> &str {
        &self.fields[name.index()]
    }

    /// Whether every field is blank.
    pub fn is_blank(&self) -> bool {
        self.stripped_fields.iter().all(Option::is_none)
    }
}
