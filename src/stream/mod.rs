mod sink_guard;

use self::sink_guard::SinkGuard;
use crate::errors::{EncodingError, MemoryLimitExceededError, StreamError};
use crate::settings::{MemorySettings, StreamSettings};
use crate::tokenizer::{TokenSink, Tokenizer};
use encoding_rs::{CoderResult, Decoder, Encoding, UTF_8};
use std::fmt::{self, Debug};

/// Feeds raw bytes of a single stream into a shared [`Tokenizer`].
///
/// Bytes are decoded with the encoding given in [`StreamSettings`]. A
/// multi-byte character split between two writes is carried over, so the
/// input can be cut at any byte.
///
/// # Example
///
/// ```
/// use drip_xml::{ByteStream, Event, EventCollector, StreamSettings, Tokenizer};
///
/// let tokenizer = Tokenizer::new();
/// let mut stream = ByteStream::try_new(
///     &tokenizer,
///     EventCollector::default(),
///     StreamSettings {
///         encoding: "windows-1251",
///         ..StreamSettings::default()
///     },
/// )
/// .unwrap();
///
/// stream.write(b"<p>\xcf\xf0\xe8").unwrap();
/// stream.write(b"\xe2\xe5\xf2</p>").unwrap();
/// stream.end().unwrap();
///
/// assert_eq!(
///     stream.into_sink().take_events(),
///     [
///         Event::start_element("p", []),
///         Event::Cdata("Привет".into()),
///         Event::EndElement("p".into()),
///     ]
/// );
/// ```
pub struct ByteStream<'t, S: TokenSink> {
    tokenizer: &'t Tokenizer,
    sink: SinkGuard<S>,
    decoder: Decoder,
    decoded: String,
    memory_settings: MemorySettings,
    finished: bool,
}

impl<'t, S: TokenSink> ByteStream<'t, S> {
    /// Creates a stream, resolving the encoding label of `settings`.
    pub fn try_new(
        tokenizer: &'t Tokenizer,
        sink: S,
        settings: StreamSettings<'_>,
    ) -> Result<Self, EncodingError> {
        let encoding = Encoding::for_label_no_replacement(settings.encoding.as_bytes())
            .ok_or(EncodingError::UnknownEncoding)?;

        if !encoding.is_ascii_compatible() {
            return Err(EncodingError::NonAsciiCompatibleEncoding);
        }

        Ok(Self::with_encoding(
            tokenizer,
            sink,
            encoding,
            settings.memory_settings,
        ))
    }

    fn with_encoding(
        tokenizer: &'t Tokenizer,
        sink: S,
        encoding: &'static Encoding,
        memory_settings: MemorySettings,
    ) -> Self {
        ByteStream {
            tokenizer,
            sink: SinkGuard::new(sink),
            decoder: encoding.new_decoder_with_bom_removal(),
            decoded: String::with_capacity(memory_settings.preallocated_decode_buffer_size),
            memory_settings,
            finished: false,
        }
    }

    #[inline]
    pub fn encoding(&self) -> &'static Encoding {
        self.decoder.encoding()
    }

    /// Decodes and tokenizes the next chunk of the stream.
    ///
    /// On [`StreamError::MalformedInput`] the sink has already been notified
    /// with [`TokenSink::error`]; writing may continue, in which case the
    /// stream starts over from scratch.
    ///
    /// # Panics
    ///
    /// Panics if the stream has already been ended.
    pub fn write(&mut self, data: &[u8]) -> Result<(), StreamError> {
        assert!(
            !self.finished,
            "Data was written into the stream after it has ended."
        );

        trace!(@write data);

        self.decode(data, false);
        self.tokenize_decoded()
    }

    /// Flushes the decoder. Character data that is not followed by a tag is
    /// never emitted: whatever is pending stays in the sink's saved state.
    ///
    /// # Panics
    ///
    /// Panics if the stream has already been ended.
    pub fn end(&mut self) -> Result<(), StreamError> {
        assert!(!self.finished, "Stream was ended twice.");

        trace!(@end);

        self.finished = true;
        self.decode(&[], true);
        self.tokenize_decoded()
    }

    #[inline]
    pub fn sink(&self) -> &S {
        self.sink.inner()
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        self.sink.inner_mut()
    }

    #[inline]
    pub fn into_sink(self) -> S {
        self.sink.into_inner()
    }

    fn decode(&mut self, mut data: &[u8], last: bool) {
        self.decoded.clear();

        loop {
            let reserve = self
                .decoder
                .max_utf8_buffer_length(data.len())
                .unwrap_or(data.len());

            self.decoded.reserve(reserve);

            let (result, read, _) = self.decoder.decode_to_string(data, &mut self.decoded, last);

            data = &data[read..];

            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => continue,
            }
        }
    }

    fn tokenize_decoded(&mut self) -> Result<(), StreamError> {
        if self.decoded.is_empty() {
            return Ok(());
        }

        self.sink.reset_report();
        self.tokenizer.parse(&mut self.sink, &self.decoded);

        let report = self.sink.report();

        if report.malformed {
            return Err(StreamError::MalformedInput);
        }

        // NOTE: the limit bounds what is carried over between writes. The
        // state only exists as a whole once `parse` returns, so a single
        // write is checked after it has been tokenized.
        let max = self.memory_settings.max_buffered_bytes;

        if report.buffered_bytes > max {
            // NOTE: drop the state, so that a runaway construct doesn't keep
            // growing with the following writes.
            drop(self.sink.load_state());

            return Err(MemoryLimitExceededError {
                current_usage: report.buffered_bytes,
                max,
            }
            .into());
        }

        Ok(())
    }
}

// NOTE: this opaque Debug implementation is required to make
// `.unwrap()` and `.expect()` methods available on Result
// returned by the `ByteStream::try_new` method.
impl<S: TokenSink> Debug for ByteStream<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteStream({})", self.encoding().name())
    }
}

/// Feeds a complete UTF-8 document through `tokenizer`.
pub fn parse_bytes<S: TokenSink>(
    tokenizer: &Tokenizer,
    sink: &mut S,
    data: &[u8],
) -> Result<(), StreamError> {
    let mut stream = ByteStream::with_encoding(tokenizer, sink, UTF_8, MemorySettings::default());

    stream.write(data)?;
    stream.end()
}
