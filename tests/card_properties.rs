use h800::card::Card;
use h800::deck::{Deck, Entry};
use h800::field::{FIELD_COUNT, LAYOUT, LINE_WIDTH};
use proptest::prelude::*;

fn padded(line: &str) -> String {
    line.chars()
        .chain(std::iter::repeat(' '))
        .take(LINE_WIDTH)
        .collect()
}

fn listing_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("# Page 110".to_string()),
        Just("L      @YUL SYSTEM PASS 0 SERVICE MODULE".to_string()),
        Just("R       ALPHABETIC ARRAYS.".to_string()),
        Just(" 0981   BACKUP     TS           S ZERO        COMMON".to_string()),
        Just("                   TS           Z,SC,4        N,SH".to_string()),
        Just("        STRAY".to_string()),
        "[ A-Z0-9,.]{0,130}",
    ]
}

proptest! {
    #[test]
    fn fields_rebuild_padded_line(line in "\\PC{0,160}") {
        let card = Card::parse(&line);
        prop_assert_eq!(card.fields().len(), FIELD_COUNT);
        prop_assert_eq!(card.stripped_fields().len(), FIELD_COUNT);
        prop_assert_eq!(card.record().len(), FIELD_COUNT);
        prop_assert_eq!(card.fields().concat(), padded(&line));
    }

    #[test]
    fn fields_keep_layout_widths(line in "\\PC{0,160}") {
        let card = Card::parse(&line);
        for (field, spec) in card.fields().iter().zip(LAYOUT) {
            prop_assert_eq!(field.chars().count(), spec.len);
        }
    }

    #[test]
    fn stripped_absent_iff_blank(line in "[ \\tA-Z0-9]{0,130}") {
        let card = Card::parse(&line);
        for (raw, stripped) in card.fields().iter().zip(card.stripped_fields()) {
            prop_assert_eq!(stripped.is_none(), raw.trim().is_empty());
            if let Some(stripped) = stripped {
                prop_assert_eq!(stripped.as_str(), raw.trim());
            }
        }
    }

    #[test]
    fn build_is_idempotent(lines in prop::collection::vec(listing_line(), 0..40)) {
        prop_assert_eq!(Deck::build(&lines), Deck::build(&lines));
    }

    #[test]
    fn every_statement_has_a_lognum(lines in prop::collection::vec(listing_line(), 0..40)) {
        let deck = Deck::build(&lines);
        let numbered = lines
            .iter()
            .filter(|line| !line.starts_with('#') && Card::parse(line).record().lognum.is_some())
            .count();

        prop_assert_eq!(deck.statements().count(), numbered);
        for entry in &deck {
            if let Entry::Statement(statement) = entry {
                prop_assert!(!statement.lognum().is_empty());
                prop_assert!(statement.continuations().iter().all(|row| !row.is_empty()));
            }
        }
    }
}
