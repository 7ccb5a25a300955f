//! Token formatting for `TimeOfDay`
//!
//! | Token | Output                         |
//! |-------|--------------------------------|
//! | `HH`  | 24-hour hour, two digits       |
//! | `H`   | 24-hour hour                   |
//! | `hh`  | 12-hour hour, two digits       |
//! | `h`   | 12-hour hour                   |
//! | `mm`  | minute, two digits             |
//! | `m`   | minute                         |
//! | `ss`  | second, two digits             |
//! | `s`   | second                         |
//! | `fff` | millisecond, three digits      |
//! | `tt`  | `AM` / `PM`                    |
//!
//! The format is scanned once, left to right, taking the longest token at each
//! position. Everything else is copied verbatim. There is no escape syntax:
//! a literal `h` or `s` in the format is always substituted.

use std::fmt;

use crate::TimeOfDay;

/// Format used by `TimeOfDay`'s `Display`
pub const DEFAULT_FORMAT: &str = "hh:mm:ss:fff tt";

/// A recognized format token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Hour24Padded,
    Hour24,
    Hour12Padded,
    Hour12,
    MinutePadded,
    Minute,
    SecondPadded,
    Second,
    Millisecond,
    Suffix,
}

// Longest first so that "HH" wins over "H" at the same position
const TOKENS: [(&str, Token); 10] = [
    ("fff", Token::Millisecond),
    ("HH", Token::Hour24Padded),
    ("hh", Token::Hour12Padded),
    ("mm", Token::MinutePadded),
    ("ss", Token::SecondPadded),
    ("tt", Token::Suffix),
    ("H", Token::Hour24),
    ("h", Token::Hour12),
    ("m", Token::Minute),
    ("s", Token::Second),
];

impl Token {
    /// Longest token at the start of `input`, with its byte length
    fn match_prefix(input: &str) -> Option<(Token, usize)> {
        TOKENS
            .iter()
            .find(|(text, _)| input.starts_with(*text))
            .map(|(text, token)| (*token, text.len()))
    }

    fn write(self, time: TimeOfDay, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Hour24Padded => write!(f, "{:02}", time.hour()),
            Token::Hour24 => write!(f, "{}", time.hour()),
            Token::Hour12Padded => write!(f, "{:02}", time.hour_12()),
            Token::Hour12 => write!(f, "{}", time.hour_12()),
            Token::MinutePadded => write!(f, "{:02}", time.minute()),
            Token::Minute => write!(f, "{}", time.minute()),
            Token::SecondPadded => write!(f, "{:02}", time.second()),
            Token::Second => write!(f, "{}", time.second()),
            Token::Millisecond => write!(f, "{:03}", time.millisecond()),
            Token::Suffix => f.write_str(time.time_suffix()),
        }
    }
}

/// One piece of a scanned format string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece<'a> {
    Literal(&'a str),
    Token(Token),
}

/// Iterator over the pieces of a format string
#[derive(Clone, Debug)]
pub struct Pieces<'a> {
    rest: &'a str,
}

impl<'a> Pieces<'a> {
    pub fn new(format: &'a str) -> Self {
        Pieces { rest: format }
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some((token, len)) = Token::match_prefix(self.rest) {
            self.rest = &self.rest[len..];
            return Some(Piece::Token(token));
        }

        // Literal run up to the next token start
        let end = self
            .rest
            .char_indices()
            .skip(1)
            .find(|(i, _)| Token::match_prefix(&self.rest[*i..]).is_some())
            .map_or(self.rest.len(), |(i, _)| i);
        let (literal, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Piece::Literal(literal))
    }
}

/// A `TimeOfDay` paired with a format, rendered on `Display`
#[derive(Clone, Copy, Debug)]
pub struct Formatted<'a> {
    time: TimeOfDay,
    format: &'a str,
}

impl<'a> Formatted<'a> {
    pub fn new(time: TimeOfDay, format: &'a str) -> Self {
        Formatted { time, format }
    }
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in Pieces::new(self.format) {
            match piece {
                Piece::Literal(text) => f.write_str(text)?,
                Piece::Token(token) => token.write(self.time, f)?,
            }
        }
        Ok(())
    }
}
