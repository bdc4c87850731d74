//! Tolerant parser for literal-encoded attribute values.
//!
//! Business attributes arrive as text that encodes booleans, numbers, quoted
//! strings, sequences and mappings, e.g. `{'romantic': False, 'casual': True}`
//! or `u'free'`. The parser accepts that literal dialect and nothing more; it
//! never evaluates expressions.

use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

use super::AttributeValue;

/// Errors raised while parsing a literal.
///
/// Callers in the attribute pipeline treat every variant as "keep the raw
/// text"; the variants exist so diagnostics and tests can tell failures apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Input ended before a complete literal was read.
    #[error("unexpected end of literal input")]
    UnexpectedEnd,
    /// A character appeared where no literal can start or continue.
    #[error("unexpected character {found:?} at byte {position}")]
    UnexpectedChar {
        /// Offending character.
        found: char,
        /// Byte offset of the character.
        position: usize,
    },
    /// Numeric text could not be interpreted as a number.
    #[error("invalid number {raw:?} at byte {position}")]
    InvalidNumber {
        /// Raw numeric text.
        raw: String,
        /// Byte offset where the number starts.
        position: usize,
    },
    /// A bare word that is not `True`, `False` or `None`.
    #[error("unknown identifier {name:?} at byte {position}")]
    UnknownIdentifier {
        /// The identifier that was read.
        name: String,
        /// Byte offset where the identifier starts.
        position: usize,
    },
    /// A mapping key was a sequence or mapping.
    #[error("mapping key at byte {position} must be a scalar")]
    UnsupportedKey {
        /// Byte offset where the key starts.
        position: usize,
    },
    /// A complete literal was followed by more text.
    #[error("unexpected trailing input at byte {position}")]
    TrailingInput {
        /// Byte offset of the first trailing character.
        position: usize,
    },
    /// The literal parsed, but a mapping was required.
    #[error("expected a mapping literal, found {kind}")]
    NotAMapping {
        /// Kind of value that was found instead.
        kind: &'static str,
    },
}

/// Parse a single literal value from `source`.
///
/// Surrounding whitespace is ignored. Anything after the first complete
/// literal is rejected.
///
/// # Errors
/// Returns [`LiteralError`] when `source` is not a well-formed literal.
///
/// # Examples
/// ```
/// use dinewise_core::{AttributeValue, parse_literal};
///
/// assert_eq!(parse_literal("True"), Ok(AttributeValue::Bool(true)));
/// assert_eq!(
///     parse_literal("u'free'"),
///     Ok(AttributeValue::Text("free".to_owned()))
/// );
/// assert!(parse_literal("free").is_err());
/// ```
pub fn parse_literal(source: &str) -> Result<AttributeValue, LiteralError> {
    let mut parser = LiteralParser::new(source);
    let value = parser.value()?;
    parser.skip_whitespace();
    match parser.peek() {
        Some((position, _)) => Err(LiteralError::TrailingInput { position }),
        None => Ok(value),
    }
}

struct LiteralParser<'src> {
    chars: Peekable<CharIndices<'src>>,
}

impl<'src> LiteralParser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Result<(usize, char), LiteralError> {
        self.chars.next().ok_or(LiteralError::UnexpectedEnd)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, ch)| ch.is_whitespace()).is_some() {}
    }

    fn value(&mut self) -> Result<AttributeValue, LiteralError> {
        self.skip_whitespace();
        let (position, ch) = self.peek().ok_or(LiteralError::UnexpectedEnd)?;
        match ch {
            '{' => self.mapping(),
            '[' => self.sequence(']'),
            '(' => self.sequence(')'),
            '\'' | '"' => self.string(false).map(AttributeValue::Text),
            '+' | '-' | '.' | '0'..='9' => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.word(),
            found => Err(LiteralError::UnexpectedChar { found, position }),
        }
    }

    fn word(&mut self) -> Result<AttributeValue, LiteralError> {
        let (position, _) = self.peek().ok_or(LiteralError::UnexpectedEnd)?;
        let mut name = String::new();
        while let Some((_, ch)) = self
            .chars
            .next_if(|(_, ch)| ch.is_ascii_alphanumeric() || *ch == '_')
        {
            name.push(ch);
        }

        if matches!(self.peek(), Some((_, '\'' | '"'))) && is_string_prefix(&name) {
            let raw = name.contains(['r', 'R']);
            return self.string(raw).map(AttributeValue::Text);
        }

        match name.as_str() {
            "True" => Ok(AttributeValue::Bool(true)),
            "False" => Ok(AttributeValue::Bool(false)),
            "None" => Ok(AttributeValue::Null),
            _ => Err(LiteralError::UnknownIdentifier { name, position }),
        }
    }

    fn string(&mut self, raw: bool) -> Result<String, LiteralError> {
        let (_, quote) = self.bump()?;
        let mut text = String::new();
        loop {
            let (_, ch) = self.bump()?;
            if ch == quote {
                return Ok(text);
            }
            if ch != '\\' {
                text.push(ch);
                continue;
            }
            let (_, escaped) = self.bump()?;
            if raw {
                text.push('\\');
                text.push(escaped);
                continue;
            }
            match escaped {
                'n' => text.push('\n'),
                't' => text.push('\t'),
                'r' => text.push('\r'),
                '\\' | '\'' | '"' => text.push(escaped),
                // Escaped newline continues the literal on the next line.
                '\n' => {}
                other => {
                    text.push('\\');
                    text.push(other);
                }
            }
        }
    }

    fn number(&mut self) -> Result<AttributeValue, LiteralError> {
        let (position, _) = self.peek().ok_or(LiteralError::UnexpectedEnd)?;
        let mut raw = String::new();
        let mut previous: Option<char> = None;
        while let Some((_, ch)) = self.chars.next_if(|&(_, ch)| {
            let signed = matches!(ch, '+' | '-')
                && matches!(previous, None | Some('e' | 'E'));
            signed || ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '_')
        }) {
            raw.push(ch);
            previous = Some(ch);
        }

        let digits: String = raw.chars().filter(|ch| *ch != '_').collect();
        digits
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(AttributeValue::Number)
            .ok_or(LiteralError::InvalidNumber { raw, position })
    }

    fn sequence(&mut self, close: char) -> Result<AttributeValue, LiteralError> {
        self.bump()?;
        let mut items = Vec::new();
        let mut saw_comma = false;
        loop {
            self.skip_whitespace();
            if self.chars.next_if(|(_, ch)| *ch == close).is_some() {
                break;
            }
            items.push(self.value()?);
            self.skip_whitespace();
            match self.bump()? {
                (_, ',') => saw_comma = true,
                (_, ch) if ch == close => break,
                (position, found) => return Err(LiteralError::UnexpectedChar { found, position }),
            }
        }

        // `(x)` is a parenthesised value rather than a one-element tuple.
        if close == ')' && !saw_comma && items.len() == 1 {
            return items.pop().ok_or(LiteralError::UnexpectedEnd);
        }
        Ok(AttributeValue::List(items))
    }

    fn mapping(&mut self) -> Result<AttributeValue, LiteralError> {
        self.bump()?;
        let mut entries: Vec<(String, AttributeValue)> = Vec::new();
        loop {
            self.skip_whitespace();
            if self.chars.next_if(|(_, ch)| *ch == '}').is_some() {
                break;
            }
            let (key_position, _) = self.peek().ok_or(LiteralError::UnexpectedEnd)?;
            let key = mapping_key(self.value()?, key_position)?;
            self.skip_whitespace();
            match self.bump()? {
                (_, ':') => {}
                (position, found) => return Err(LiteralError::UnexpectedChar { found, position }),
            }
            let value = self.value()?;

            // Repeated keys keep their first position but take the last value.
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }

            self.skip_whitespace();
            match self.bump()? {
                (_, ',') => {}
                (_, '}') => break,
                (position, found) => return Err(LiteralError::UnexpectedChar { found, position }),
            }
        }
        Ok(AttributeValue::Map(entries))
    }
}

fn is_string_prefix(word: &str) -> bool {
    matches!(
        word.to_ascii_lowercase().as_str(),
        "u" | "b" | "r" | "br" | "rb"
    )
}

fn mapping_key(value: AttributeValue, position: usize) -> Result<String, LiteralError> {
    match value {
        AttributeValue::Text(text) => Ok(text),
        AttributeValue::Bool(true) => Ok("True".to_owned()),
        AttributeValue::Bool(false) => Ok("False".to_owned()),
        AttributeValue::Null => Ok("None".to_owned()),
        AttributeValue::Number(number) => Ok(number.to_string()),
        AttributeValue::List(_) | AttributeValue::Map(_) => {
            Err(LiteralError::UnsupportedKey { position })
        }
    }
}
