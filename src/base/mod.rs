mod whitespace;

pub use self::whitespace::{is_whitespace, trim_end_whitespace};
