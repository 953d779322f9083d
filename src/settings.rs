/// Number of attribute slots a fresh [`TokenizerState`] preallocates, and the
/// number of slots added each time they run out.
///
/// [`TokenizerState`]: crate::TokenizerState
pub const DEFAULT_ATTRIBUTE_CAPACITY: usize = 6;

/// Specifies how a [`Tokenizer`] scans its input.
///
/// [`Tokenizer`]: crate::Tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerSettings {
    /// Initial number of attribute slots in a fresh state, also used as the
    /// growth increment once every slot is filled.
    ///
    /// ### Default
    ///
    /// [`DEFAULT_ATTRIBUTE_CAPACITY`].
    pub attribute_capacity: usize,

    /// If enabled, an attribute value is only closed by the same quote
    /// character that opened it. Otherwise any of `'` or `"` closes it, so
    /// `a="it's"` yields the value `it`.
    ///
    /// ### Default
    ///
    /// `false`.
    pub strict_quotes: bool,
}

impl Default for TokenizerSettings {
    #[inline]
    fn default() -> Self {
        TokenizerSettings {
            attribute_capacity: DEFAULT_ATTRIBUTE_CAPACITY,
            strict_quotes: false,
        }
    }
}

/// Specifies the memory settings for a [`ByteStream`].
///
/// [`ByteStream`]: crate::ByteStream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySettings {
    /// Capacity, in bytes, reserved upfront for decoded characters of a single write.
    ///
    /// ### Default
    ///
    /// `1024` bytes.
    pub preallocated_decode_buffer_size: usize,

    /// Maximum number of bytes a pending tokenizer state may hold between
    /// writes: the partial element name, attributes and character data.
    ///
    /// An extremely long attribute value or text run split across many writes
    /// grows the state without bound, so network-facing callers should lower it.
    ///
    /// ### Default
    ///
    /// [`usize::MAX`] (i.e. no limit).
    pub max_buffered_bytes: usize,
}

impl Default for MemorySettings {
    #[inline]
    fn default() -> Self {
        MemorySettings {
            preallocated_decode_buffer_size: 1024,
            max_buffered_bytes: usize::MAX,
        }
    }
}

/// Specifies settings for a [`ByteStream`].
///
/// [`ByteStream`]: crate::ByteStream
#[derive(Debug, Clone)]
pub struct StreamSettings<'s> {
    /// The [character encoding] of the incoming bytes.
    ///
    /// Only ASCII-compatible encodings are supported.
    ///
    /// ### Default
    ///
    /// `"utf-8"`.
    ///
    /// [character encoding]: https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Content-Type
    pub encoding: &'s str,

    /// Memory settings.
    pub memory_settings: MemorySettings,
}

impl Default for StreamSettings<'_> {
    #[inline]
    fn default() -> Self {
        StreamSettings {
            encoding: "utf-8",
            memory_settings: MemorySettings::default(),
        }
    }
}
