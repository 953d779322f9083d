use crate::harness::{
    chunk_size_from_env, feed_chars, feed_chunks, get_test_cases, random_chunks, split_at,
    split_every, tokenizer, TestCase,
};
use drip_xml::Event;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_chunks(test: &TestCase, chunks: &[&str]) {
    let tokenizer = tokenizer(test.strict_quotes, test.attribute_capacity);
    let actual = feed_chunks(&tokenizer, chunks.iter().copied());

    assert_eq!(
        actual,
        test.expected_events(),
        "{}\n  chunks: [{}]",
        test.description,
        chunks.iter().map(|c| format!("{c:?}")).join(", ")
    );
}

#[test]
fn every_split_point() {
    for test in get_test_cases() {
        let char_count = test.input.chars().count();

        for idx in 0..=char_count {
            assert_chunks(&test, &split_at(&test.input, idx));
        }
    }
}

#[test]
fn char_by_char() {
    for test in get_test_cases() {
        assert_chunks(&test, &split_every(&test.input, 1));
    }
}

#[test]
fn fixed_size_chunks() {
    let sizes = match chunk_size_from_env() {
        Some(size) => vec![size],
        None => vec![2, 3, 7],
    };

    for test in get_test_cases() {
        for &size in &sizes {
            assert_chunks(&test, &split_every(&test.input, size));
        }
    }
}

#[test]
fn random_chunking() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for test in get_test_cases() {
        for _ in 0..10 {
            assert_chunks(&test, &random_chunks(&test.input, &mut rng));
        }
    }
}

#[test]
fn char_buffer_windows() {
    for test in get_test_cases() {
        let tokenizer = tokenizer(test.strict_quotes, test.attribute_capacity);

        for chunk_len in [1, 4, usize::MAX] {
            assert_eq!(
                feed_chars(&tokenizer, &test.input, chunk_len),
                test.expected_events(),
                "{} (chunks of {} chars)",
                test.description,
                chunk_len
            );
        }
    }
}

#[test]
fn empty_chunks_are_noop() {
    let tokenizer = tokenizer(false, None);
    let actual = feed_chunks(&tokenizer, ["", "<a", "", "", ">x", "", "</a>", ""]);

    assert_eq!(
        actual,
        [
            Event::start_element("a", []),
            Event::Cdata("x".into()),
            Event::EndElement("a".into()),
        ]
    );
}
