use crate::harness::split_every;
use drip_xml::{Event, EventCollector, Tokenizer, TokenizerSettings};
use std::thread;

fn document(idx: usize) -> String {
    format!("<doc id=\"{idx}\"><item n=\"{idx}\">value {idx}</item><item/></doc>")
}

fn expected(idx: usize) -> Vec<Event> {
    let id = idx.to_string();

    vec![
        Event::start_element("doc", [("id", id.as_str())]),
        Event::start_element("item", [("n", id.as_str())]),
        Event::Cdata(format!("value {idx}")),
        Event::EndElement("item".into()),
        Event::start_element("item", []),
        Event::EndElement("item".into()),
        Event::EndElement("doc".into()),
    ]
}

#[test]
fn shared_tokenizer() {
    let tokenizer = Tokenizer::try_new(TokenizerSettings {
        attribute_capacity: 1,
        ..TokenizerSettings::default()
    })
    .unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|idx| {
                let tokenizer = &tokenizer;

                scope.spawn(move || {
                    let input = document(idx);
                    let mut collector = EventCollector::default();

                    for chunk in split_every(&input, idx + 1) {
                        tokenizer.parse(&mut collector, chunk);
                    }

                    (idx, collector.take_events())
                })
            })
            .collect();

        for handle in handles {
            let (idx, events) = handle.join().unwrap();

            assert_eq!(events, expected(idx));
        }
    });
}

#[test]
fn interleaved_streams() {
    let tokenizer = Tokenizer::new();
    let inputs: Vec<_> = (0..3).map(document).collect();
    let chunked: Vec<_> = inputs.iter().map(|input| split_every(input, 3)).collect();
    let mut collectors: Vec<_> = (0..3).map(|_| EventCollector::default()).collect();
    let max_chunks = chunked.iter().map(Vec::len).max().unwrap_or(0);

    for chunk_idx in 0..max_chunks {
        for (chunks, collector) in chunked.iter().zip(&mut collectors) {
            if let Some(chunk) = chunks.get(chunk_idx) {
                tokenizer.parse(collector, chunk);
            }
        }
    }

    for (idx, collector) in collectors.iter_mut().enumerate() {
        assert_eq!(collector.take_events(), expected(idx));
    }
}
