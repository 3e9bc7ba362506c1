//! CSS value tokenizer.
//!
//! Splits a raw CSS value string into top-level [`Part`]s using the
//! `cssparser` lexer. Nested constructs (function arguments, bracketed
//! blocks) and quoted strings are atomic: a part keeps their source text
//! byte-for-byte. Only top-level whitespace splits parts; a top-level comma
//! is recorded as a flag (multi-layer values are detected, not decomposed),
//! and a top-level slash is recorded and optionally emitted as a dedicated
//! `"/"` separator part.

use cssparser::{ParseError, Parser, ParserInput, Token};

/// Options controlling tokenization.
#[derive(Debug, Clone, Copy)]
pub struct TokenizeOptions {
    /// Whether a top-level `/` flushes the current part and becomes a
    /// dedicated separator part. Disabled for values where the slash is
    /// internal to a single component (`font-size/line-height`).
    pub split_on_slash: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self { split_on_slash: true }
    }
}

/// Kind of a single lexical token inside a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier (`solid`, `no-repeat`).
    Ident,
    /// A function call or bracketed block, consumed whole (`url(...)`,
    /// `calc(...)`, `[a]`).
    Function,
    /// A bare number (`1.5`).
    Number,
    /// A number with a unit (`16px`).
    Dimension,
    /// A percentage (`50%`).
    Percentage,
    /// A hash token (`#ff0`).
    Hash,
    /// A quoted string, quotes preserved in the text.
    QuotedString,
    /// The `/` separator.
    Slash,
    /// Any other delimiter.
    Delim,
}

/// A single token with its raw source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueToken {
    pub kind: TokenKind,
    pub text: String,
}

/// A maximal run of tokens between top-level whitespace boundaries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Part {
    /// Raw source text of the part.
    pub text: String,
    /// The tokens making up the part.
    pub tokens: Vec<ValueToken>,
}

impl Part {
    /// Whether this part is the dedicated `/` separator.
    pub fn is_slash(&self) -> bool {
        self.tokens.len() == 1 && self.tokens[0].kind == TokenKind::Slash
    }

    /// Kind of the first token, if any.
    pub fn first_kind(&self) -> Option<TokenKind> {
        self.tokens.first().map(|t| t.kind)
    }
}

/// Result of tokenizing a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenizedValue {
    /// Top-level parts, in source order.
    pub parts: Vec<Part>,
    /// A comma was seen at the top level.
    pub has_top_level_comma: bool,
    /// A slash was seen at the top level.
    pub has_top_level_slash: bool,
}

/// Tokenize a raw CSS value into top-level parts.
///
/// This is a single linear pass; depth handling falls out of the lexer
/// consuming nested blocks whole, so there is no backtracking.
pub fn tokenize(value: &str, opts: TokenizeOptions) -> TokenizedValue {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    let mut out = TokenizedValue::default();
    let mut current = Part::default();

    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) => flush(&mut out.parts, &mut current),

            Token::Comma => {
                // Detected but not a part boundary: layered values keep
                // their commas inside the surrounding part.
                out.has_top_level_comma = true;
                push_token(&mut current, TokenKind::Delim, ",");
            }

            Token::Delim('/') => {
                out.has_top_level_slash = true;
                if opts.split_on_slash {
                    flush(&mut out.parts, &mut current);
                    let mut sep = Part::default();
                    push_token(&mut sep, TokenKind::Slash, "/");
                    out.parts.push(sep);
                } else {
                    push_token(&mut current, TokenKind::Slash, "/");
                }
            }

            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                // Consume the whole nested block, then recover its raw text.
                let _ = parser.parse_nested_block(|p| {
                    while p.next_including_whitespace().is_ok() {}
                    Ok::<(), ParseError<'_, ()>>(())
                });
                let text = parser.slice_from(start).to_string();
                push_token(&mut current, TokenKind::Function, &text);
            }

            other => {
                let kind = classify(&other);
                let text = parser.slice_from(start).to_string();
                push_token(&mut current, kind, &text);
            }
        }
    }

    flush(&mut out.parts, &mut current);
    out
}

fn classify(token: &Token<'_>) -> TokenKind {
    match token {
        Token::Ident(_) => TokenKind::Ident,
        Token::Number { .. } => TokenKind::Number,
        Token::Dimension { .. } => TokenKind::Dimension,
        Token::Percentage { .. } => TokenKind::Percentage,
        Token::Hash(_) | Token::IDHash(_) => TokenKind::Hash,
        Token::QuotedString(_) => TokenKind::QuotedString,
        Token::UnquotedUrl(_) => TokenKind::Function,
        _ => TokenKind::Delim,
    }
}

fn push_token(part: &mut Part, kind: TokenKind, text: &str) {
    part.text.push_str(text);
    part.tokens.push(ValueToken { kind, text: text.to_string() });
}

fn flush(parts: &mut Vec<Part>, current: &mut Part) {
    if !current.tokens.is_empty() {
        parts.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(value: &str) -> Vec<String> {
        tokenize(value, TokenizeOptions::default())
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(parts("10px 12px 13px 14px"), ["10px", "12px", "13px", "14px"]);
    }

    #[test]
    fn functions_are_atomic() {
        assert_eq!(
            parts("calc(100% - 10px) url(\"a b.jpg\")"),
            ["calc(100% - 10px)", "url(\"a b.jpg\")"]
        );
    }

    #[test]
    fn quoted_strings_are_atomic() {
        assert_eq!(parts("\"Helvetica Neue\" serif"), ["\"Helvetica Neue\"", "serif"]);
    }

    #[test]
    fn top_level_comma_sets_flag_without_splitting() {
        let result = tokenize("url(a.png), url(b.png)", TokenizeOptions::default());
        assert!(result.has_top_level_comma);
        assert_eq!(result.parts.len(), 2);
        assert_eq!(result.parts[0].text, "url(a.png),");
    }

    #[test]
    fn nested_comma_does_not_set_flag() {
        let result = tokenize("rgb(1, 2, 3)", TokenizeOptions::default());
        assert!(!result.has_top_level_comma);
        assert_eq!(result.parts.len(), 1);
    }

    #[test]
    fn slash_becomes_separator_part() {
        let result = tokenize("center / cover", TokenizeOptions::default());
        assert!(result.has_top_level_slash);
        let texts: Vec<_> = result.parts.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["center", "/", "cover"]);
        assert!(result.parts[1].is_slash());
    }

    #[test]
    fn slash_without_spaces_still_splits() {
        let texts = parts("1/3");
        assert_eq!(texts, ["1", "/", "3"]);
    }

    #[test]
    fn slash_kept_inline_when_split_disabled() {
        let result = tokenize("16px/1.5", TokenizeOptions { split_on_slash: false });
        assert!(result.has_top_level_slash);
        assert_eq!(result.parts.len(), 1);
        assert_eq!(result.parts[0].text, "16px/1.5");
        assert_eq!(result.parts[0].tokens.len(), 3);
    }

    #[test]
    fn nested_slash_does_not_set_flag() {
        let result = tokenize("calc(1/3)", TokenizeOptions::default());
        assert!(!result.has_top_level_slash);
    }

    #[test]
    fn empty_value_has_no_parts() {
        let result = tokenize("   ", TokenizeOptions::default());
        assert!(result.parts.is_empty());
    }

    #[test]
    fn token_kinds() {
        let result = tokenize("#ff0 solid 1px 50% 1.5", TokenizeOptions::default());
        let kinds: Vec<_> = result.parts.iter().filter_map(|p| p.first_kind()).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Hash,
                TokenKind::Ident,
                TokenKind::Dimension,
                TokenKind::Percentage,
                TokenKind::Number,
            ]
        );
    }
}
