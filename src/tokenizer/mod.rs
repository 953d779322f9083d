mod attributes;
mod phase;
mod sink;
mod state;
mod transitions;

use crate::errors::SettingsError;
use crate::settings::TokenizerSettings;

pub use self::attributes::{Attribute, Attributes, AttributesIter};
pub use self::phase::Phase;
pub use self::sink::TokenSink;
pub use self::state::TokenizerState;

/// Incremental tokenizer for a restricted XML-like grammar.
///
/// The tokenizer itself only holds immutable settings: the state of each stream
/// lives in its [`TokenSink`]. So a single instance can be shared between any
/// number of threads and streams, as long as a sink is not used by two
/// [`parse`] calls at once.
///
/// Input may be split at any character boundary: feeding a document in several
/// slices through the same sink produces exactly the same events as feeding it
/// at once.
///
/// # Example
///
/// ```
/// use drip_xml::{EventCollector, Event, Tokenizer};
///
/// let tokenizer = Tokenizer::new();
/// let mut collector = EventCollector::default();
///
/// tokenizer.parse(&mut collector, "<greeting lang=\"en\">Hel");
/// tokenizer.parse(&mut collector, "lo</greeting>");
///
/// assert_eq!(
///     collector.take_events(),
///     [
///         Event::start_element("greeting", [("lang", "en")]),
///         Event::Cdata("Hello".into()),
///         Event::EndElement("greeting".into()),
///     ]
/// );
/// ```
///
/// [`parse`]: Tokenizer::parse
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    settings: TokenizerSettings,
}

impl Tokenizer {
    /// Creates a tokenizer with the default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer with the given settings.
    pub fn try_new(settings: TokenizerSettings) -> Result<Self, SettingsError> {
        if settings.attribute_capacity == 0 {
            return Err(SettingsError::ZeroAttributeCapacity);
        }

        Ok(Tokenizer { settings })
    }

    #[inline]
    pub fn settings(&self) -> &TokenizerSettings {
        &self.settings
    }

    /// Creates a state for a new stream. The tokenizer does the same on its own
    /// when a sink has no state to load.
    #[inline]
    pub fn new_state(&self) -> TokenizerState {
        TokenizerState::new(self.settings.attribute_capacity)
    }

    /// Scans the next slice of a stream, emitting events to `sink`.
    ///
    /// Malformed input is reported with [`TokenSink::error`]: scanning stops
    /// at the offending character and the state of the stream is dropped.
    pub fn parse<S: TokenSink>(&self, sink: &mut S, input: &str) {
        trace!(@chunk input);

        let mut state = self.load_state(sink);
        let mut pos = 0;

        while state.phase != Phase::Error {
            pos += self.consume_run(&mut state, &input[pos..]);

            let Some(ch) = input[pos..].chars().next() else {
                break;
            };

            self.step(&mut state, sink, ch);
            pos += ch.len_utf8();
        }

        self.finish(sink, state);
    }

    /// Scans `length` characters of `buffer` starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + length` is out of the `buffer` bounds.
    pub fn parse_chars<S: TokenSink>(
        &self,
        sink: &mut S,
        buffer: &[char],
        offset: usize,
        length: usize,
    ) {
        let chunk = &buffer[offset..offset + length];

        trace!(@chunk chunk);

        let mut state = self.load_state(sink);

        for &ch in chunk {
            if state.phase == Phase::Error {
                break;
            }

            self.step(&mut state, sink, ch);
        }

        self.finish(sink, state);
    }

    #[inline]
    fn load_state<S: TokenSink>(&self, sink: &mut S) -> TokenizerState {
        sink.load_state().unwrap_or_else(|| self.new_state())
    }

    #[inline]
    fn finish<S: TokenSink>(&self, sink: &mut S, state: TokenizerState) {
        if state.phase == Phase::Error {
            trace!(@emit "error");

            // NOTE: the state is dropped here, so that the stream can't
            // silently continue from a corrupted position.
            sink.error();
        } else {
            sink.save_state(state);
        }
    }
}
