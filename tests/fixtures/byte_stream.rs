use drip_xml::{
    parse_bytes, ByteStream, Event, EventCollector, MemoryLimitExceededError, MemorySettings,
    StreamError, StreamSettings, Tokenizer,
};

const DOCUMENT: &str = concat!(
    "<?xml version=\"1.0\"?>",
    "<catalog lang=\"uk\">",
    "<book title=\"Кобзар\" year=\"1840\">Тарас Шевченко</book>",
    "<note>価格 € 12</note>",
    "<empty/>",
    "</catalog>"
);

fn expected() -> Vec<Event> {
    vec![
        Event::OtherXml("?xml version=\"1.0\"?".into()),
        Event::start_element("catalog", [("lang", "uk")]),
        Event::start_element("book", [("title", "Кобзар"), ("year", "1840")]),
        Event::Cdata("Тарас Шевченко".into()),
        Event::EndElement("book".into()),
        Event::start_element("note", []),
        Event::Cdata("価格 € 12".into()),
        Event::EndElement("note".into()),
        Event::start_element("empty", []),
        Event::EndElement("empty".into()),
        Event::EndElement("catalog".into()),
    ]
}

fn stream_in_chunks(tokenizer: &Tokenizer, bytes: &[u8], chunk_size: usize) -> Vec<Event> {
    let mut stream =
        ByteStream::try_new(tokenizer, EventCollector::default(), StreamSettings::default())
            .unwrap();

    for chunk in bytes.chunks(chunk_size) {
        stream.write(chunk).unwrap();
    }

    stream.end().unwrap();
    stream.into_sink().take_events()
}

#[test]
fn whole_document() {
    let mut collector = EventCollector::default();

    parse_bytes(&Tokenizer::new(), &mut collector, DOCUMENT.as_bytes()).unwrap();

    assert_eq!(collector.take_events(), expected());
}

#[test]
fn byte_level_chunks() {
    let tokenizer = Tokenizer::new();
    let bytes = DOCUMENT.as_bytes();

    for chunk_size in 1..=bytes.len() {
        assert_eq!(
            stream_in_chunks(&tokenizer, bytes, chunk_size),
            expected(),
            "chunk size: {chunk_size}"
        );
    }
}

#[test]
fn legacy_encoding() {
    let tokenizer = Tokenizer::new();
    let (bytes, _, had_errors) = encoding_rs::WINDOWS_1251.encode(DOCUMENT);

    // NOTE: CJK chars have no windows-1251 representation.
    assert!(had_errors);

    let mut stream = ByteStream::try_new(
        &tokenizer,
        EventCollector::default(),
        StreamSettings {
            encoding: "windows-1251",
            ..StreamSettings::default()
        },
    )
    .unwrap();

    for chunk in bytes.chunks(5) {
        stream.write(chunk).unwrap();
    }

    stream.end().unwrap();

    let events = stream.into_sink().take_events();

    assert_eq!(events[2], expected()[2]);
    assert_eq!(events[3], expected()[3]);
}

#[test]
fn malformed_input_is_reported() {
    let tokenizer = Tokenizer::new();
    let mut stream =
        ByteStream::try_new(&tokenizer, EventCollector::default(), StreamSettings::default())
            .unwrap();

    stream.write(b"<a>x").unwrap();

    assert_eq!(stream.write(b"</b?>"), Err(StreamError::MalformedInput));
    assert!(!stream.sink().has_pending_state());

    // NOTE: the stream starts over after an error.
    stream.write(b"<c/>").unwrap();
    stream.end().unwrap();

    assert_eq!(
        stream.into_sink().take_events(),
        [
            Event::start_element("a", []),
            Event::Cdata("x".into()),
            Event::Error,
            Event::start_element("c", []),
            Event::EndElement("c".into()),
        ]
    );
}

#[test]
fn memory_limit_on_long_text() {
    let tokenizer = Tokenizer::new();
    let mut stream = ByteStream::try_new(
        &tokenizer,
        EventCollector::default(),
        StreamSettings {
            memory_settings: MemorySettings {
                max_buffered_bytes: 16,
                ..MemorySettings::default()
            },
            ..StreamSettings::default()
        },
    )
    .unwrap();

    stream.write(b"<a>0123456789").unwrap();

    let err = stream.write(b"0123456789").unwrap_err();

    assert_eq!(
        err,
        StreamError::MemoryLimitExceeded(MemoryLimitExceededError {
            current_usage: 20,
            max: 16,
        })
    );
}
