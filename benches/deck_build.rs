use criterion::{Criterion, criterion_group, criterion_main};
use h800::{card::Card, deck::Deck, word::Word};

fn gen_listing(statement_count: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(statement_count * 3);

    for i in 0..statement_count {
        // A page header every fifty statements, two continuation rows each.
        if i % 50 == 0 {
            lines.push(format!("L      @YUL SYSTEM PASS 0 SERVICE MODULE       PAGE {}", i / 50));
        }
        lines.push(format!(
            " {:04}   LABEL{:<5} TS           S ZERO        COMMON        SET UP GPB     C    REMARK",
            i % 10000,
            i % 1000
        ));
        lines.push("                   TX           L BANK 1      -             Z,X0".to_string());
        lines.push("                   TS           YUL MASKS     Z,MXR         LIST LABL".to_string());
    }

    lines
}

fn bench_card_parse(c: &mut Criterion) {
    let line = " 0981   BACKUP     TS           S ZERO        COMMON        SET UP GPB     C    COMMUNICATION FLAG FOR END.";

    c.bench_function("card_parse", |b| {
        b.iter(|| Card::parse(line));
    });
}

fn bench_deck_build(c: &mut Criterion) {
    for &statement_count in &[10usize, 100, 1000] {
        let lines = gen_listing(statement_count);

        c.bench_function(&format!("deck_build_{}_statements", statement_count), |b| {
            b.iter(|| Deck::build(&lines));
        });
    }
}

fn bench_word_pack(c: &mut Criterion) {
    c.bench_function("word_set_value", |b| {
        let mut word = Word::default();
        let mut value = 0u64;
        b.iter(|| {
            value = (value + 0o1234_5670_1234_5671) & ((1 << 48) - 1);
            word.set_value(value).unwrap();
            word.a()
        });
    });
}

criterion_group!(benches, bench_card_parse, bench_deck_build, bench_word_pack);
criterion_main!(benches);
