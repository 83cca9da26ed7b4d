//! tests/api/pipeline.rs
use crate::helpers::{read_test_file, run_mapper, run_reducer, sort_lines, stdout_lines};
use claims::assert_ok;
use proptest::prelude::*;
use std::collections::BTreeMap;
use wordcount::functions::{Mapper, Reducer, VecEmitter};
use wordcount::mappers::Tokenizer;
use wordcount::record::{Record, is_separator};
use wordcount::reducers::Aggregator;

fn count_in_process(lines: &[String]) -> Vec<(String, i64)> {
    let mut tokenizer = Tokenizer::build(VecEmitter::new());
    for (i, line) in lines.iter().enumerate() {
        assert_ok!(tokenizer.map(i as u64 + 1, line));
    }
    let mut records = tokenizer.into_emitter().into_records();
    records.sort_by(|a, b| a.word().cmp(b.word()));

    let mut aggregator = Aggregator::build(VecEmitter::new());
    for record in records {
        assert_ok!(aggregator.reduce(record));
    }
    assert_ok!(aggregator.finish())
        .into_records()
        .into_iter()
        .map(Record::into_parts)
        .collect()
}

proptest! {
    #[test]
    fn map_sort_reduce_counts_every_occurrence(
        lines in prop::collection::vec("[abcAB,. \t\u{1c}-\u{1f}]{0,30}", 0..25)
    ) {
        let mut expected = BTreeMap::<String, i64>::new();
        let words = lines
            .iter()
            .flat_map(|l| l.split(is_separator))
            .filter(|w| !w.is_empty());
        for word in words {
            *expected.entry(word.to_string()).or_default() += 1;
        }

        let counted = count_in_process(&lines);
        prop_assert_eq!(counted, expected.into_iter().collect::<Vec<_>>());
    }
}

#[test]
fn map_sort_reduce_counts_every_word() {
    let text = read_test_file("small_test.txt");

    let mapped = run_mapper(text.as_bytes());
    assert!(mapped.status.success());

    let reduced = run_reducer(&sort_lines(&mapped.stdout));
    assert!(reduced.status.success());

    let mut expected = BTreeMap::<&str, i64>::new();
    for word in text.split(is_separator).filter(|w| !w.is_empty()) {
        *expected.entry(word).or_default() += 1;
    }
    let expected: Vec<String> = expected
        .into_iter()
        .map(|(word, count)| format!("{word}\t{count}"))
        .collect();

    assert_eq!(stdout_lines(&reduced), expected);
}

#[test]
fn map_sort_reduce_keeps_case_and_punctuation() {
    let mapped = run_mapper(b"It was, it was\nIt\n");
    let reduced = run_reducer(&sort_lines(&mapped.stdout));

    assert!(reduced.status.success());
    assert_eq!(
        stdout_lines(&reduced),
        ["It\t2", "it\t1", "was\t1", "was,\t1"]
    );
}
