use crate::lexer::{first_word, skip_chars, split_leading_words, split_once_keyword};
use std::borrow::Cow;
use std::num::IntErrorKind;

/// Command kinds that can come back malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    If,
    Loop,
    Try,
}

/// A command string split into the pieces its kind needs.
///
/// Every input parses into something; forms that cannot be answered are
/// [`Command::Malformed`] and get a usage hint from the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Empty,
    Print {
        text: &'a str,
    },
    If {
        condition: &'a str,
        yes: &'a str,
        no: &'a str,
    },
    Loop {
        count: i64,
        body: &'a str,
    },
    Try {
        attempt: &'a str,
        fallback: &'a str,
    },
    Unknown {
        keyword: &'a str,
    },
    Malformed(Kind),
}

/// Parse a command string. Surrounding whitespace is ignored.
pub(crate) fn parse(code: &str) -> Command<'_> {
    let code = code.trim();
    let Some(keyword) = first_word(code) else {
        return Command::Empty;
    };

    match keyword {
        // offsets skip the keyword plus one separator
        "print" => Command::Print {
            text: skip_chars(code, 6),
        },
        "if" => parse_if(skip_chars(code, 3)),
        "loop" => parse_loop(code),
        "try" => parse_try(code),
        _ => Command::Unknown { keyword },
    }
}

/// `<condition> then <yes> [else <no>]`
fn parse_if(args: &str) -> Command<'_> {
    let Some((condition, rest)) = split_once_keyword(args, "then") else {
        return Command::Malformed(Kind::If);
    };
    let (yes, no) = split_once_keyword(rest, "else").unwrap_or((rest, ""));
    Command::If {
        condition,
        yes: yes.trim(),
        no: no.trim(),
    }
}

/// `loop <n> <action>`; a bad count and a missing action are the same failure.
fn parse_loop(code: &str) -> Command<'_> {
    let (words, body) = split_leading_words(code, 2);
    match (words.get(1).and_then(|word| parse_count(word)), body) {
        (Some(count), Some(body)) => Command::Loop { count, body },
        _ => Command::Malformed(Kind::Loop),
    }
}

/// Base-10 integer with optional sign and `_` between digits.
///
/// Out-of-range values saturate, so a huge count still hits the repetition
/// limit and a hugely negative one still repeats nothing.
fn parse_count(word: &str) -> Option<i64> {
    let digits = strip_digit_separators(word)?;
    match digits.parse::<i64>() {
        Ok(count) => Some(count),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Drop `_` separators, rejecting any that are not between two digits.
fn strip_digit_separators(word: &str) -> Option<Cow<'_, str>> {
    if !word.contains('_') {
        return Some(Cow::Borrowed(word));
    }
    let bytes = word.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !matches!(before, Some(c) if c.is_ascii_digit()) || !matches!(after, Some(c) if c.is_ascii_digit()) {
            return None;
        }
    }
    Some(Cow::Owned(word.replace('_', "")))
}

/// `try <attempt> catch <fallback>`
fn parse_try(code: &str) -> Command<'_> {
    if !code.contains("catch") {
        return Command::Malformed(Kind::Try);
    }
    match split_once_keyword(skip_chars(code, 4), "catch") {
        Some((attempt, fallback)) => Command::Try {
            attempt: attempt.trim(),
            fallback: fallback.trim(),
        },
        None => Command::Malformed(Kind::Try),
    }
}
