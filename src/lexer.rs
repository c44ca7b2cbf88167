//! String primitives shared by every command kind.
//!
//! Keywords (`then`, `else`, `catch`) are matched as plain substrings, not as
//! whole words: `if true thenx` still splits after `true `.

/// Split `text` around the first literal occurrence of `keyword`.
pub(crate) fn split_once_keyword<'a>(text: &'a str, keyword: &str) -> Option<(&'a str, &'a str)> {
    text.split_once(keyword)
}

/// The suffix of `text` that starts `n` characters in, or `""` if it is shorter.
///
/// Counts characters rather than bytes so a multi-byte separator never lands
/// the cut inside a code point.
pub(crate) fn skip_chars(text: &str, n: usize) -> &str {
    text.char_indices()
        .nth(n)
        .map(|(i, _)| &text[i..])
        .unwrap_or("")
}

/// First whitespace-delimited word of `text`.
pub(crate) fn first_word(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// Take up to `n` leading whitespace-delimited words from `text`.
///
/// Returns the words and whatever follows them with its leading whitespace
/// removed, or `None` if nothing follows.
pub(crate) fn split_leading_words(text: &str, n: usize) -> (Vec<&str>, Option<&str>) {
    let mut words = Vec::with_capacity(n);
    let mut rest = text.trim_start();
    while words.len() < n && !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        words.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }
    let rest = if rest.is_empty() { None } else { Some(rest) };
    (words, rest)
}
