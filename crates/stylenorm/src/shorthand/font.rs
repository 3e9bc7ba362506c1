//! Font shorthand decomposition.
//!
//! The first part recognized as a font-size anchors the value: parts before
//! it are optional style/variant/weight keywords (each from a disjoint
//! set), parts after it join into the font family. A `/` inside the size
//! part splits `fontSize` from `lineHeight`; the value is tokenized with
//! slash splitting disabled so the size part stays whole at the top level.

use super::{Decomposition, value_parts};
use crate::tokenizer::{Part, TokenKind};

const SIZE_KEYWORDS: &[&str] = &[
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "xxx-large",
    "larger", "smaller",
];
const STYLE_KEYWORDS: &[&str] = &["italic", "oblique"];
const VARIANT_KEYWORDS: &[&str] = &["small-caps"];
const WEIGHT_KEYWORDS: &[&str] = &["bold", "bolder", "lighter"];

fn is_size_token(kind: TokenKind, text: &str) -> bool {
    match kind {
        TokenKind::Dimension | TokenKind::Percentage => true,
        TokenKind::Ident => SIZE_KEYWORDS.contains(&text.to_ascii_lowercase().as_str()),
        _ => false,
    }
}

/// A size part split at its `/`, when present.
struct SizeSplit {
    size: String,
    line_height: Option<String>,
    /// The part ends in a `/` with nothing after it (`16px/ 1.5`); the
    /// line height lives in a later part.
    dangling_slash: bool,
}

/// Split a size part: `16px/1.5` becomes (`16px`, `1.5`). Returns `None`
/// when the part is not a size.
fn split_size(part: &Part) -> Option<SizeSplit> {
    let slash = part.tokens.iter().position(|t| t.kind == TokenKind::Slash);
    match slash {
        Some(i) => {
            let size: String = part.tokens[..i].iter().map(|t| t.text.as_str()).collect();
            let line_height: String = part.tokens[i + 1..].iter().map(|t| t.text.as_str()).collect();
            let first = part.tokens.first()?;
            if i == 0 || !is_size_token(first.kind, &size) {
                return None;
            }
            Some(SizeSplit {
                size,
                dangling_slash: line_height.is_empty(),
                line_height: (!line_height.is_empty()).then_some(line_height),
            })
        }
        None => {
            let first = part.tokens.first()?;
            is_size_token(first.kind, &part.text).then(|| SizeSplit {
                size: part.text.clone(),
                line_height: None,
                dangling_slash: false,
            })
        }
    }
}

fn is_numeric_weight(text: &str) -> bool {
    text.len() == 3 && text.ends_with("00") && text.as_bytes()[0].is_ascii_digit()
        && text.as_bytes()[0] != b'0'
}

/// Expand a font shorthand value.
pub fn expand(key: &str, value: &str) -> Decomposition {
    let tok = value_parts(value, false);
    if tok.parts.len() <= 1 {
        return Decomposition::unchanged(key, value);
    }

    let Some(size_index) = tok.parts.iter().position(|p| split_size(p).is_some()) else {
        return Decomposition::CannotFix;
    };
    // Position matched just above, so this cannot miss.
    let Some(split) = split_size(&tok.parts[size_index]) else {
        return Decomposition::CannotFix;
    };
    let font_size = split.size;
    let mut line_height = split.line_height;

    // Whitespace around the slash is valid: `16px / 1.5`, `16px/ 1.5`,
    // and `16px /1.5` all split into size and line height.
    let mut rest = size_index + 1;
    let mut expect_line_height = split.dangling_slash;
    if let Some(next) = tok.parts.get(rest) {
        if next.first_kind() == Some(TokenKind::Slash) {
            if line_height.is_some() || expect_line_height {
                return Decomposition::CannotFix;
            }
            let after: String = next.tokens[1..].iter().map(|t| t.text.as_str()).collect();
            rest += 1;
            if after.is_empty() {
                expect_line_height = true;
            } else {
                line_height = Some(after);
            }
        }
    }
    if expect_line_height {
        let Some(part) = tok.parts.get(rest) else {
            return Decomposition::CannotFix;
        };
        if part.first_kind() == Some(TokenKind::Slash) {
            return Decomposition::CannotFix;
        }
        line_height = Some(part.text.clone());
        rest += 1;
    }

    let mut style: Option<String> = None;
    let mut variant: Option<String> = None;
    let mut weight: Option<String> = None;

    for part in &tok.parts[..size_index] {
        let lower = part.text.to_ascii_lowercase();
        if lower == "normal" {
            // Belongs to all three prefix roles; consumed as a no-op.
            continue;
        }
        let slot = if STYLE_KEYWORDS.contains(&lower.as_str()) {
            &mut style
        } else if VARIANT_KEYWORDS.contains(&lower.as_str()) {
            &mut variant
        } else if WEIGHT_KEYWORDS.contains(&lower.as_str()) || is_numeric_weight(&lower) {
            &mut weight
        } else {
            return Decomposition::CannotFix;
        };
        if slot.replace(part.text.clone()).is_some() {
            return Decomposition::CannotFix;
        }
    }

    if tok.parts[rest..].iter().any(|p| p.first_kind() == Some(TokenKind::Slash)) {
        return Decomposition::CannotFix;
    }
    let family: Vec<&str> = tok.parts[rest..].iter().map(|p| p.text.as_str()).collect();

    let mut entries = vec![];
    if !family.is_empty() {
        entries.push(("fontFamily".to_string(), family.join(" ")));
    }
    if let Some(v) = style {
        entries.push(("fontStyle".to_string(), v));
    }
    if let Some(v) = variant {
        entries.push(("fontVariant".to_string(), v));
    }
    if let Some(v) = weight {
        entries.push(("fontWeight".to_string(), v));
    }
    entries.push(("fontSize".to_string(), font_size));
    if let Some(v) = line_height {
        entries.push(("lineHeight".to_string(), v));
    }
    Decomposition::Entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_font_value() {
        let result = expand("font", "italic small-caps bold 16px/1.5 \"Helvetica Neue\"");
        assert_eq!(
            result.entries().unwrap(),
            [
                ("fontFamily".to_string(), "\"Helvetica Neue\"".to_string()),
                ("fontStyle".to_string(), "italic".to_string()),
                ("fontVariant".to_string(), "small-caps".to_string()),
                ("fontWeight".to_string(), "bold".to_string()),
                ("fontSize".to_string(), "16px".to_string()),
                ("lineHeight".to_string(), "1.5".to_string()),
            ]
        );
    }

    #[test]
    fn size_and_family_only() {
        let result = expand("font", "16px serif");
        assert_eq!(
            result.entries().unwrap(),
            [
                ("fontFamily".to_string(), "serif".to_string()),
                ("fontSize".to_string(), "16px".to_string()),
            ]
        );
    }

    #[test]
    fn size_keyword_anchors() {
        let result = expand("font", "bold large serif");
        assert_eq!(
            result.entries().unwrap(),
            [
                ("fontFamily".to_string(), "serif".to_string()),
                ("fontWeight".to_string(), "bold".to_string()),
                ("fontSize".to_string(), "large".to_string()),
            ]
        );
    }

    #[test]
    fn numeric_weight() {
        let result = expand("font", "700 16px serif");
        assert_eq!(
            result.entries().unwrap(),
            [
                ("fontFamily".to_string(), "serif".to_string()),
                ("fontWeight".to_string(), "700".to_string()),
                ("fontSize".to_string(), "16px".to_string()),
            ]
        );
    }

    #[test]
    fn normal_is_a_filler() {
        let result = expand("font", "normal normal 16px serif");
        assert_eq!(
            result.entries().unwrap(),
            [
                ("fontFamily".to_string(), "serif".to_string()),
                ("fontSize".to_string(), "16px".to_string()),
            ]
        );
    }

    #[test]
    fn spaced_slash_splits_size_and_line_height() {
        let expected = [
            ("fontFamily".to_string(), "serif".to_string()),
            ("fontStyle".to_string(), "italic".to_string()),
            ("fontSize".to_string(), "16px".to_string()),
            ("lineHeight".to_string(), "1.5".to_string()),
        ];
        for value in [
            "italic 16px / 1.5 serif",
            "italic 16px/ 1.5 serif",
            "italic 16px /1.5 serif",
        ] {
            assert_eq!(expand("font", value).entries().unwrap(), expected, "{value}");
        }
    }

    #[test]
    fn slash_without_line_height_cannot_fix() {
        assert!(expand("font", "16px / serif /").is_cannot_fix());
        assert!(expand("font", "italic 16px /").is_cannot_fix());
        assert!(expand("font", "16px/1.5 / 2 serif").is_cannot_fix());
    }

    #[test]
    fn duplicate_role_cannot_fix() {
        assert!(expand("font", "italic oblique 16px serif").is_cannot_fix());
        assert!(expand("font", "bold 700 16px serif").is_cannot_fix());
    }

    #[test]
    fn unrecognized_prefix_cannot_fix() {
        assert!(expand("font", "shiny 16px serif").is_cannot_fix());
    }

    #[test]
    fn missing_size_cannot_fix() {
        assert!(expand("font", "bold italic serif").is_cannot_fix());
    }

    #[test]
    fn single_part_is_unchanged() {
        let result = expand("font", "caption");
        assert_eq!(result.entries().unwrap(), [("font".to_string(), "caption".to_string())]);
    }

    #[test]
    fn multi_word_family_with_commas() {
        let result = expand("font", "16px Helvetica, sans-serif");
        assert_eq!(
            result.entries().unwrap(),
            [
                ("fontFamily".to_string(), "Helvetica, sans-serif".to_string()),
                ("fontSize".to_string(), "16px".to_string()),
            ]
        );
    }
}
