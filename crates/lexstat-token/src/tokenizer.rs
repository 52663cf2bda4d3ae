//! Line tokenizer.
//!
//! Scans one line character by character and emits normalized tokens:
//! ASCII-lowercased, apostrophe-bracketed words unwrapped, decimal numbers
//! kept whole, and anything between `<` and `>` dropped.

use lexstat_core::config::MAX_TOKEN_BYTES;
use lexstat_core::{Token, TokenizeError};

/// Tokens produced from one line, plus the tokens that were refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedLine {
    pub tokens: Vec<Token>,
    pub rejected: Vec<TokenizeError>,
}

/// Stateless line scanner; all scan state lives for one `tokenize` call.
#[derive(Debug, Clone, Copy)]
pub struct LineTokenizer {
    max_token_bytes: usize,
}

impl Default for LineTokenizer {
    fn default() -> Self {
        Self::new(MAX_TOKEN_BYTES)
    }
}

impl LineTokenizer {
    pub fn new(max_token_bytes: usize) -> Self {
        Self { max_token_bytes }
    }

    /// Tokenize a single line (without its line terminator).
    pub fn tokenize(&self, line: &str) -> TokenizedLine {
        let mut scan = Scan::new(self.max_token_bytes);
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '<' => scan.ignoring = true,
                '>' => scan.ignoring = false,
                '.' => {
                    if scan.buffer.is_empty() && !scan.overflowed {
                        continue;
                    }
                    let next_is_digit = chars.peek().is_some_and(|n| n.is_ascii_digit());
                    if scan.overflowed && next_is_digit && scan.overflow_numeric {
                        // The rejected number continues past its decimal point.
                        scan.overflow_numeric = false;
                    } else if !scan.overflowed && next_is_digit && is_numeric(&scan.buffer) {
                        scan.push('.');
                    } else {
                        scan.flush(false);
                    }
                }
                ',' | '!' | ' ' | '(' | ')' | '/' => scan.flush(true),
                _ if scan.ignoring => {}
                _ => scan.push(c.to_ascii_lowercase()),
            }
        }

        scan.flush(true);
        scan.out
    }
}

struct Scan {
    limit: usize,
    buffer: String,
    ignoring: bool,
    // Set once the current token has blown the limit; cleared at the next flush.
    overflowed: bool,
    // Whether the rejected token would still pass `is_numeric`.
    overflow_numeric: bool,
    out: TokenizedLine,
}

impl Scan {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            buffer: String::new(),
            ignoring: false,
            overflowed: false,
            overflow_numeric: false,
            out: TokenizedLine::default(),
        }
    }

    fn push(&mut self, c: char) {
        if self.overflowed {
            self.overflow_numeric &= c.is_ascii_digit();
            return;
        }
        if self.buffer.len() + c.len_utf8() > self.limit {
            self.out
                .rejected
                .push(TokenizeError::overflow(&self.buffer, self.limit));
            self.overflow_numeric = is_numeric(&self.buffer) && c.is_ascii_digit();
            self.buffer.clear();
            self.overflowed = true;
            return;
        }
        self.buffer.push(c);
    }

    fn flush(&mut self, trim: bool) {
        if self.overflowed {
            self.overflowed = false;
            self.buffer.clear();
            return;
        }
        if self.buffer.is_empty() {
            return;
        }

        let text = if trim {
            trim_apostrophes(&self.buffer)
        } else {
            self.buffer.as_str()
        };
        if !text.is_empty() {
            self.out.tokens.push(Token::new(text));
        }
        self.buffer.clear();
    }
}

/// Strip one leading and one trailing `'` when both are present.
pub fn trim_apostrophes(text: &str) -> &str {
    if text.starts_with('\'') && text.ends_with('\'') {
        text.get(1..text.len().saturating_sub(1)).unwrap_or("")
    } else {
        text
    }
}

/// True when every character after the first is an ASCII digit.
///
/// The first character is not checked, so `"a"` and `"-5"` both count.
pub fn is_numeric(text: &str) -> bool {
    text.chars().skip(1).all(|c| c.is_ascii_digit())
}
