//! Border triple decomposition (`border`, `borderTop`, ..., `outline`).
//!
//! Classification is by content, not position: each part is assigned to
//! exactly one of width/style/color using fixed keyword sets, and anything
//! neither a style nor a width is assumed to be a color. Two parts landing
//! on the same role is fatal for the family.

use super::{Decomposition, value_parts};
use crate::grammar::properties::BORDER_STYLE_KEYWORDS;
use crate::tokenizer::{Part, TokenKind};

const WIDTH_KEYWORDS: &[&str] = &["thin", "medium", "thick"];
const MATH_FUNCTIONS: &[&str] = &["calc(", "min(", "max(", "clamp("];

/// The role a border-shorthand part plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderRole {
    Width,
    Style,
    Color,
}

/// Classify a single part into its role.
pub fn classify_part(part: &Part) -> BorderRole {
    let lower = part.text.to_ascii_lowercase();
    if BORDER_STYLE_KEYWORDS.contains(&lower.as_str()) {
        return BorderRole::Style;
    }
    if WIDTH_KEYWORDS.contains(&lower.as_str()) {
        return BorderRole::Width;
    }
    match part.first_kind() {
        Some(TokenKind::Dimension | TokenKind::Number) => BorderRole::Width,
        Some(TokenKind::Function) if MATH_FUNCTIONS.iter().any(|f| lower.starts_with(f)) => {
            BorderRole::Width
        }
        _ => BorderRole::Color,
    }
}

/// Classify an entire value into `(role, text)` pairs. `None` when two
/// parts claim the same role or the value has more than three parts.
pub fn classify_value(value: &str) -> Option<Vec<(BorderRole, String)>> {
    let tok = value_parts(value, true);
    if tok.has_top_level_comma || tok.has_top_level_slash || tok.parts.len() > 3 {
        return None;
    }

    let mut roles: Vec<(BorderRole, String)> = vec![];
    for part in &tok.parts {
        let role = classify_part(part);
        if roles.iter().any(|(r, _)| *r == role) {
            return None;
        }
        roles.push((role, part.text.clone()));
    }
    Some(roles)
}

fn longhands(key: &str) -> (&'static str, &'static str, &'static str) {
    match key {
        "borderTop" => ("borderTopWidth", "borderTopStyle", "borderTopColor"),
        "borderRight" => ("borderRightWidth", "borderRightStyle", "borderRightColor"),
        "borderBottom" => ("borderBottomWidth", "borderBottomStyle", "borderBottomColor"),
        "borderLeft" => ("borderLeftWidth", "borderLeftStyle", "borderLeftColor"),
        "borderBlock" => ("borderBlockWidth", "borderBlockStyle", "borderBlockColor"),
        "borderInline" => ("borderInlineWidth", "borderInlineStyle", "borderInlineColor"),
        "outline" => ("outlineWidth", "outlineStyle", "outlineColor"),
        _ => ("borderWidth", "borderStyle", "borderColor"),
    }
}

/// Expand a border triple into width/style/color longhands, in that order,
/// for the roles actually present in the source value.
pub fn expand(key: &str, value: &str) -> Decomposition {
    let tok = value_parts(value, true);
    if tok.has_top_level_comma || tok.has_top_level_slash {
        return Decomposition::CannotFix;
    }
    if tok.parts.len() <= 1 {
        return Decomposition::unchanged(key, value);
    }

    let Some(roles) = classify_value(value) else {
        return Decomposition::CannotFix;
    };

    let (width_key, style_key, color_key) = longhands(key);
    let mut entries = vec![];
    for wanted in [BorderRole::Width, BorderRole::Style, BorderRole::Color] {
        if let Some((_, text)) = roles.iter().find(|(r, _)| *r == wanted) {
            let longhand = match wanted {
                BorderRole::Width => width_key,
                BorderRole::Style => style_key,
                BorderRole::Color => color_key,
            };
            entries.push((longhand.to_string(), text.clone()));
        }
    }
    Decomposition::Entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_and_values(result: &Decomposition) -> Vec<(String, String)> {
        result.entries().unwrap().to_vec()
    }

    #[test]
    fn order_independent_classification() {
        let expected = vec![
            ("borderWidth".to_string(), "1px".to_string()),
            ("borderStyle".to_string(), "solid".to_string()),
            ("borderColor".to_string(), "blue".to_string()),
        ];
        for value in ["solid blue 1px", "blue 1px solid", "1px blue solid"] {
            assert_eq!(keys_and_values(&expand("border", value)), expected, "{value}");
        }
    }

    #[test]
    fn partial_triples_emit_present_roles_only() {
        assert_eq!(
            keys_and_values(&expand("border", "1px solid")),
            [
                ("borderWidth".to_string(), "1px".to_string()),
                ("borderStyle".to_string(), "solid".to_string()),
            ]
        );
    }

    #[test]
    fn side_families_use_side_longhands() {
        assert_eq!(
            keys_and_values(&expand("borderTop", "2px dashed red")),
            [
                ("borderTopWidth".to_string(), "2px".to_string()),
                ("borderTopStyle".to_string(), "dashed".to_string()),
                ("borderTopColor".to_string(), "red".to_string()),
            ]
        );
    }

    #[test]
    fn duplicate_role_cannot_fix() {
        assert!(expand("border", "1px 2px solid").is_cannot_fix());
        assert!(expand("border", "solid dashed").is_cannot_fix());
    }

    #[test]
    fn single_part_is_unchanged() {
        assert_eq!(
            keys_and_values(&expand("border", "solid")),
            [("border".to_string(), "solid".to_string())]
        );
    }

    #[test]
    fn width_keywords_and_math_functions_are_widths() {
        assert_eq!(
            keys_and_values(&expand("outline", "thick solid")),
            [
                ("outlineWidth".to_string(), "thick".to_string()),
                ("outlineStyle".to_string(), "solid".to_string()),
            ]
        );
        assert_eq!(
            keys_and_values(&expand("border", "calc(1px + 1px) solid")),
            [
                ("borderWidth".to_string(), "calc(1px + 1px)".to_string()),
                ("borderStyle".to_string(), "solid".to_string()),
            ]
        );
    }

    #[test]
    fn unclassified_parts_are_colors() {
        assert_eq!(
            keys_and_values(&expand("border", "rgb(1, 2, 3) solid")),
            [
                ("borderStyle".to_string(), "solid".to_string()),
                ("borderColor".to_string(), "rgb(1, 2, 3)".to_string()),
            ]
        );
    }

    #[test]
    fn too_many_parts_cannot_fix() {
        assert!(expand("border", "1px solid red extra").is_cannot_fix());
    }
}
