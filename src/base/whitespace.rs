/// Whitespace as understood by the grammar: space, tab, CR and LF. Other
/// Unicode spaces are regular content.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

#[inline]
pub fn trim_end_whitespace(text: &mut String) {
    let trimmed_len = text.trim_end_matches(is_whitespace).len();

    text.truncate(trimmed_len);
}
