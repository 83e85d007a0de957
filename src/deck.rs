//! Grouping of listing lines into statements and directives.
//!
//! A listing is read line by line. Blank lines and `#` annotations are dropped.
//! A line with a lognum opens a [Statement]; following lines without a lognum
//! but with operation or operand text are its continuation rows. Lines whose
//! control column holds a known directive letter become [Directive]s and end
//! the open statement.
//!
//! Classification is best effort and never fails. Transcribed listings have
//! gaps, so a line that fits no rule is skipped rather than reported.

use tracing::{debug, trace};

use crate::{
    card::{Card, CardRecord},
    directive::{DirectiveKind, control_char},
    field::FieldName,
};

/// Operation and operand columns of one listing row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContinuationRow {
    pub operation: Option<String>,
    pub operand1: Option<String>,
    pub operand2: Option<String>,
    pub operand3: Option<String>,
    pub misc: Option<String>,
    pub remarks: Option<String>,
}

impl ContinuationRow {
    /// Whether every column is blank.
    pub fn is_empty(&self) -> bool {
        self.operation.is_none()
            && self.operand1.is_none()
            && self.operand2.is_none()
            && self.operand3.is_none()
            && self.misc.is_none()
            && self.remarks.is_none()
    }
}

impl From<CardRecord> for ContinuationRow {
    fn from(record: CardRecord) -> Self {
        ContinuationRow {
            operation: record.operation,
            operand1: record.operand1,
            operand2: record.operand2,
            operand3: record.operand3,
            misc: record.misc,
            remarks: record.remarks,
        }
    }
}

impl From<&CardRecord> for ContinuationRow {
    fn from(record: &CardRecord) -> Self {
        record.clone().into()
    }
}

/// A logical statement: the numbered line that introduced it plus its continuations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statement {
    primary: CardRecord,
    continuations: Vec<ContinuationRow>,
}

impl Statement {
    fn open(primary: CardRecord) -> Self {
        Statement {
            primary,
            continuations: Vec::new(),
        }
    }

    /// The lognum identifying the statement.
    pub fn lognum(&self) -> &str {
        self.primary.lognum.as_deref().unwrap_or_default()
    }

    /// All ten fields of the introducing line.
    pub fn primary(&self) -> &CardRecord {
        &self.primary
    }

    pub fn continuations(&self) -> &[ContinuationRow] {
        &self.continuations
    }

    /// Operation rows in source order, the introducing line first.
    pub fn rows(&self) -> impl Iterator<Item = ContinuationRow> + '_ {
        std::iter::once(ContinuationRow::from(&self.primary))
            .chain(self.continuations.iter().cloned())
    }

    /// Number of listing lines making up the statement.
    pub fn row_count(&self) -> usize {
        1 + self.continuations.len()
    }
}

/// A title, remark header or page header line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Line text after the control column, with trailing blanks removed.
    pub text: String,
}

/// One top-level item of a [Deck].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Entry {
    Statement(Statement),
    Directive(Directive),
}

impl Entry {
    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Entry::Statement(statement) => Some(statement),
            Entry::Directive(_) => None,
        }
    }

    pub fn as_directive(&self) -> Option<&Directive> {
        match self {
            Entry::Directive(directive) => Some(directive),
            Entry::Statement(_) => None,
        }
    }
}

/// How a single listing line is read, independent of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace only.
    Blank,
    /// Starts with `#`.
    Comment,
    /// Control column holds a directive letter and there is no lognum.
    Directive(DirectiveKind),
    /// Carries a lognum and so starts a statement.
    Numbered,
    /// Anything else: a continuation candidate.
    Unnumbered,
}

enum Parsed {
    Blank,
    Comment,
    Directive(Directive),
    Numbered(Card),
    Unnumbered(Card),
}

/// Classifies one line without grouping it.
pub fn classify(line: &str) -> LineClass {
    match parse_line(line) {
        Parsed::Blank => LineClass::Blank,
        Parsed::Comment => LineClass::Comment,
        Parsed::Directive(directive) => LineClass::Directive(directive.kind),
        Parsed::Numbered(_) => LineClass::Numbered,
        Parsed::Unnumbered(_) => LineClass::Unnumbered,
    }
}

fn parse_line(line: &str) -> Parsed {
    if line.trim().is_empty() {
        return Parsed::Blank;
    }

    if line.starts_with('#') {
        return Parsed::Comment;
    }

    let card = Card::parse(line);
    let record = card.record();

    if record.lognum.is_none() {
        if let Some(directive) = directive(&card) {
            return Parsed::Directive(directive);
        }
        return Parsed::Unnumbered(card);
    }

    Parsed::Numbered(card)
}

/// Reads a directive from a card without a lognum. Exactly one of the two
/// control columns may hold a letter, and it must be a known directive letter.
fn directive(card: &Card) -> Option<Directive> {
    let record = card.record();
    let (control, column) = match (
        control_char(record.column1.as_deref()),
        control_char(record.column8.as_deref()),
    ) {
        (Some(c), None) => (c, FieldName::Column1),
        (None, Some(c)) => (c, FieldName::Column8),
        _ => return None,
    };

    let Some(kind) = DirectiveKind::from_control(control) else {
        debug!(
            control = %control,
            column = %column,
            "unrecognised control character, treating line as content"
        );
        return None;
    };

    let text: String = card.line().chars().skip(column.spec().end()).collect();

    Some(Directive {
        kind,
        text: text.trim_end().to_string(),
    })
}

/// Entries completed by one line: at most a closed statement followed by a directive.
#[derive(Debug, Default)]
pub struct Emitted {
    closed: Option<Entry>,
    directive: Option<Entry>,
}

impl Iterator for Emitted {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.closed.take().or_else(|| self.directive.take())
    }
}

/// Forward-only grouping state: the statement still collecting continuations.
#[derive(Debug, Default)]
pub struct DeckBuilder {
    open: Option<Statement>,
    line_no: usize,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a statement is waiting for continuation lines.
    pub fn has_open_statement(&self) -> bool {
        self.open.is_some()
    }

    /// Feeds the next line and returns the entries it completed.
    pub fn push_line(&mut self, line: &str) -> Emitted {
        self.line_no += 1;

        match parse_line(line) {
            Parsed::Blank | Parsed::Comment => Emitted::default(),
            Parsed::Directive(directive) => {
                trace!(line = self.line_no, kind = ?directive.kind, "directive");
                Emitted {
                    closed: self.close(),
                    directive: Some(Entry::Directive(directive)),
                }
            }
            Parsed::Numbered(card) => {
                let closed = self.close();
                self.open = Some(Statement::open(card.into_record()));
                Emitted {
                    closed,
                    directive: None,
                }
            }
            Parsed::Unnumbered(card) => {
                let row = ContinuationRow::from(card.into_record());
                match &mut self.open {
                    Some(statement) if !row.is_empty() => statement.continuations.push(row),
                    _ => {
                        trace!(line = self.line_no, "ignoring unattached line");
                    }
                }
                Emitted::default()
            }
        }
    }

    /// Ends the input, returning the statement still open, if any.
    pub fn finish(mut self) -> Option<Entry> {
        self.close()
    }

    fn close(&mut self) -> Option<Entry> {
        self.open.take().map(Entry::Statement)
    }
}

/// Lazily groups `lines`, yielding entries as soon as they are complete.
pub fn entries<I, S>(lines: I) -> Entries<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Entries {
        lines: lines.into_iter(),
        builder: Some(DeckBuilder::new()),
        pending: Emitted::default(),
    }
}

/// Iterator returned by [entries].
#[derive(Debug)]
pub struct Entries<I> {
    lines: I,
    builder: Option<DeckBuilder>,
    pending: Emitted,
}

impl<I, S> Iterator for Entries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            if let Some(entry) = self.pending.next() {
                return Some(entry);
            }

            let builder = self.builder.as_mut()?;
            match self.lines.next() {
                Some(line) => self.pending = builder.push_line(line.as_ref()),
                None => return self.builder.take()?.finish(),
            }
        }
    }
}

/// Statements and directives of a listing, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Deck {
    entries: Vec<Entry>,
}

impl Deck {
    /// Groups `lines` into a deck.
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Deck {
            entries: entries(lines).collect(),
        }
    }

    /// Splits `text` on line breaks and groups the lines.
    pub fn from_text(text: &str) -> Self {
        Self::build(text.lines())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.entries.iter().filter_map(Entry::as_statement)
    }

    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.entries.iter().filter_map(Entry::as_directive)
    }

    /// First statement with the given lognum.
    pub fn statement(&self, lognum: &str) -> Option<&Statement> {
        self.statements().find(|statement| statement.lognum() == lognum)
    }
}

impl IntoIterator for Deck {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
