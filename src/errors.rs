//! Error types that can be returned while constructing a [`Tokenizer`] or
//! driving a [`ByteStream`].
//!
//! Malformed markup is never an error at the [`Tokenizer`] level: it's reported
//! through [`TokenSink::error`] instead.
//!
//! [`Tokenizer`]: crate::Tokenizer
//! [`ByteStream`]: crate::ByteStream
//! [`TokenSink::error`]: crate::TokenSink::error

use thiserror::Error;

/// An error that occurs when invalid [`TokenizerSettings`] are provided.
///
/// [`TokenizerSettings`]: crate::TokenizerSettings
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum SettingsError {
    /// Attribute storage can't grow by zero slots.
    #[error("Attribute capacity should be greater than zero.")]
    ZeroAttributeCapacity,
}

/// An error that occurs if an incorrect [`encoding`] label was provided
/// in [`StreamSettings`].
///
/// [`encoding`]: crate::StreamSettings::encoding
/// [`StreamSettings`]: crate::StreamSettings
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum EncodingError {
    /// The provided value doesn't match any of the [labels specified in the standard].
    ///
    /// [labels specified in the standard]: https://encoding.spec.whatwg.org/#names-and-labels
    #[error("Unknown character encoding has been provided.")]
    UnknownEncoding,

    /// The provided label is for one of the non-ASCII-compatible encodings (`UTF-16LE`, `UTF-16BE`,
    /// `ISO-2022-JP` and `replacement`). These encodings are not supported.
    #[error("Expected ASCII-compatible encoding.")]
    NonAsciiCompatibleEncoding,
}

/// An error that occurs when the state of a stream holds more data than
/// [`MemorySettings::max_buffered_bytes`] allows.
///
/// [`MemorySettings::max_buffered_bytes`]: crate::MemorySettings::max_buffered_bytes
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
#[error("Memory limit of {max} bytes has been exceeded: {current_usage} bytes were used.")]
pub struct MemoryLimitExceededError {
    pub current_usage: usize,
    pub max: usize,
}

/// An error that occurs while writing into a [`ByteStream`].
///
/// [`ByteStream`]: crate::ByteStream
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum StreamError {
    /// Pending tokenizer state outgrew the configured memory limit. The state
    /// is dropped and the stream restarts from scratch on the next write.
    #[error(transparent)]
    MemoryLimitExceeded(#[from] MemoryLimitExceededError),

    /// The written data contained markup the grammar doesn't accept. Events
    /// emitted before the offending character are not retracted.
    #[error("Malformed markup has been encountered, the stream state was reset.")]
    MalformedInput,
}
