//! drip_xml is an incremental tokenizer for a restricted XML-like grammar.
//!
//! It's designed to scan documents that arrive in arbitrarily small,
//! arbitrarily split pieces (e.g. network reads) and to report structural
//! events as soon as they are recognized. The grammar is intentionally partial:
//! start tags with attributes, end tags, self-closing tags, character data and
//! opaque `<?...>`/`<!...>` constructs. There are no comments, CDATA sections,
//! entities, namespaces or DTDs.
//!
//! The [`Tokenizer`] holds no per-stream data. The state of a stream is owned
//! by its [`TokenSink`], so one tokenizer can be shared between many threads
//! and streams without any locking.
//!
//! # Example
//!
//! ```
//! use drip_xml::{collect_events, Event};
//!
//! assert_eq!(
//!     collect_events(r#"<?xml version="1.0"?><root/>"#),
//!     [
//!         Event::OtherXml(r#"?xml version="1.0"?"#.into()),
//!         Event::start_element("root", []),
//!         Event::EndElement("root".into()),
//!     ]
//! );
//! ```

#[macro_use]
mod debug_trace;

mod base;
mod collector;
mod settings;
mod stream;
mod tokenizer;

pub mod errors;

pub use self::collector::{collect_events, Event, EventCollector};
pub use self::errors::{EncodingError, MemoryLimitExceededError, SettingsError, StreamError};
pub use self::settings::{
    MemorySettings, StreamSettings, TokenizerSettings, DEFAULT_ATTRIBUTE_CAPACITY,
};
pub use self::stream::{parse_bytes, ByteStream};
pub use self::tokenizer::{
    Attribute, Attributes, AttributesIter, Phase, TokenSink, Tokenizer, TokenizerState,
};
