use drip_xml::{Event, EventCollector, Tokenizer};
use rand::Rng;
use std::env;

/// Feeds `chunks` one after another through a single collector. Like a real
/// caller would, stops at the first error instead of restarting the stream.
pub fn feed_chunks<'c>(
    tokenizer: &Tokenizer,
    chunks: impl IntoIterator<Item = &'c str>,
) -> Vec<Event> {
    let mut collector = EventCollector::default();

    for chunk in chunks {
        tokenizer.parse(&mut collector, chunk);

        if collector.events().last() == Some(&Event::Error) {
            break;
        }
    }

    collector.take_events()
}

/// Same as [`feed_chunks`], but goes through [`Tokenizer::parse_chars`] with a
/// single character buffer, moving the offset forward.
pub fn feed_chars(tokenizer: &Tokenizer, input: &str, chunk_len: usize) -> Vec<Event> {
    let buffer: Vec<char> = input.chars().collect();
    let mut collector = EventCollector::default();
    let mut offset = 0;

    while offset < buffer.len() {
        let length = chunk_len.min(buffer.len() - offset);

        tokenizer.parse_chars(&mut collector, &buffer, offset, length);
        offset += length;

        if collector.events().last() == Some(&Event::Error) {
            break;
        }
    }

    collector.take_events()
}

/// Splits input in two at the given char index.
pub fn split_at(input: &str, char_idx: usize) -> [&str; 2] {
    let byte_idx = input
        .char_indices()
        .nth(char_idx)
        .map_or(input.len(), |(idx, _)| idx);

    let (head, tail) = input.split_at(byte_idx);

    [head, tail]
}

/// Splits input into chunks of `chunk_len` chars (the last one may be shorter).
pub fn split_every(input: &str, chunk_len: usize) -> Vec<&str> {
    assert!(chunk_len > 0, "Chunk length should be positive");

    let mut chunks = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        let [head, tail] = split_at(rest, chunk_len);

        chunks.push(head);
        rest = tail;
    }

    chunks
}

/// Splits input into chunks of random length.
pub fn random_chunks<'i>(input: &'i str, rng: &mut impl Rng) -> Vec<&'i str> {
    let char_count = input.chars().count();
    let mut chunks = Vec::new();
    let mut rest = input;
    let mut rest_count = char_count;

    while rest_count > 0 {
        let len = rng.gen_range(1..=rest_count);
        let [head, tail] = split_at(rest, len);

        chunks.push(head);
        rest = tail;
        rest_count -= len;
    }

    chunks
}

/// Chunk size forced with the `CHUNK_SIZE` environment variable, if any.
pub fn chunk_size_from_env() -> Option<usize> {
    env::var("CHUNK_SIZE")
        .ok()
        .and_then(|val| val.parse().ok())
        .filter(|&size| size > 0)
}
