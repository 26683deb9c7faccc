//! Tokenizer for a single expression.
//!
//! Character classes decide the token kind:
//! - `A-Z` and `_` runs are variables
//! - `+` and `-` are operators
//! - digit runs are numbers
//! - `a-z` runs are units
//!
//! Whitespace between tokens is optional, so `DATE+2days` and
//! `DATE + 2 days` tokenize the same way. Unit text is not checked here.

use std::fmt;

use super::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Variable,
    Operator,
    Number,
    Unit,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Variable => "variable",
            TokenKind::Operator => "operator",
            TokenKind::Number => "number",
            TokenKind::Unit => "unit",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A token borrowed from the trimmed expression source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// Character offset into the trimmed expression.
    pub offset: usize,
}

/// Tokenize `input` after trimming surrounding whitespace.
///
/// The result always ends with a [`TokenKind::EndOfInput`] token.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let input = input.trim();
    let mut tokens = Vec::new();
    // (char position, (byte index, char)): slices need bytes, offsets count chars
    let mut chars = input.char_indices().enumerate().peekable();

    while let Some((offset, (start, c))) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        let kind = classify(c).ok_or(ParseError::UnexpectedChar { ch: c, offset })?;

        let mut end = start + c.len_utf8();
        while let Some(&(_, (i, next))) = chars.peek() {
            if !continues(kind, next) {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }

        tokens.push(Token { kind, text: &input[start..end], offset });
    }

    let eoi = input.chars().count();
    tokens.push(Token { kind: TokenKind::EndOfInput, text: "", offset: eoi });
    Ok(tokens)
}

fn classify(c: char) -> Option<TokenKind> {
    match c {
        'A'..='Z' | '_' => Some(TokenKind::Variable),
        '+' | '-' => Some(TokenKind::Operator),
        '0'..='9' => Some(TokenKind::Number),
        'a'..='z' => Some(TokenKind::Unit),
        _ => None,
    }
}

fn continues(kind: TokenKind, c: char) -> bool {
    match kind {
        TokenKind::Variable => c.is_ascii_uppercase() || c == '_',
        TokenKind::Number => c.is_ascii_digit(),
        TokenKind::Unit => c.is_ascii_lowercase(),
        // Operators are always a single character.
        TokenKind::Operator | TokenKind::EndOfInput => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<(TokenKind, &str)> {
        tokenize(input).unwrap().into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_single_variable() {
        assert_eq!(
            kinds("START_DATE"),
            vec![(TokenKind::Variable, "START_DATE"), (TokenKind::EndOfInput, "")]
        );
    }

    #[test]
    fn test_full_expression() {
        assert_eq!(
            kinds("DATE + 1 month - 2 days"),
            vec![
                (TokenKind::Variable, "DATE"),
                (TokenKind::Operator, "+"),
                (TokenKind::Number, "1"),
                (TokenKind::Unit, "month"),
                (TokenKind::Operator, "-"),
                (TokenKind::Number, "2"),
                (TokenKind::Unit, "days"),
                (TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_whitespace_is_optional() {
        assert_eq!(kinds("A+2days"), kinds("A + 2 days"));
        assert_eq!(kinds("  A\t+\n2   days  "), kinds("A + 2 days"));
    }

    #[test]
    fn test_offsets() {
        let tokens = tokenize("  DATE + 10 weeks").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        // Offsets are relative to the trimmed input.
        assert_eq!(offsets, vec![0, 5, 7, 10, 15]);
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        // U+00A0 is two bytes in UTF-8 but one position.
        let tokens = tokenize("DATE\u{a0}+\u{a0}2 days").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![0, 5, 7, 9, 13]);

        let err = tokenize("D\u{e9}TE").unwrap_err();
        assert_eq!(err.offset(), Some(1));
        let err = tokenize("\u{e9}\u{e9} + 1 day").unwrap_err();
        assert_eq!(err.offset(), Some(0));
    }

    #[test]
    fn test_consecutive_operators_are_separate_tokens() {
        assert_eq!(
            kinds("A+-5"),
            vec![
                (TokenKind::Variable, "A"),
                (TokenKind::Operator, "+"),
                (TokenKind::Operator, "-"),
                (TokenKind::Number, "5"),
                (TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_mixed_case_splits() {
        assert_eq!(
            kinds("Date"),
            vec![
                (TokenKind::Variable, "D"),
                (TokenKind::Unit, "ate"),
                (TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_unit_text_not_validated() {
        assert_eq!(kinds("A + 1 fortnight")[3], (TokenKind::Unit, "fortnight"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(kinds("   "), vec![(TokenKind::EndOfInput, "")]);
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("DATE * 2 days").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedChar { ch: '*', offset: 5 });

        let err = tokenize("DATE.1").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedChar { ch: '.', offset: 4 });

        let err = tokenize("DATÉ").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedChar { ch: 'É', offset: 3 });
    }
}
