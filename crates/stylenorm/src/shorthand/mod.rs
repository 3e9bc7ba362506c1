//! Shorthand decomposition into RTL-safe longhand properties.
//!
//! Dispatch is by property family. Every family shares the same shape:
//! strip and record a trailing `!important`, tokenize, and fast-path a
//! value with at most one part (not actually shorthand usage). Families
//! that cannot decompose a value safely return [`Decomposition::CannotFix`]
//! rather than a partial rewrite; partial data loss is never acceptable.

pub mod background;
pub mod border;
pub mod font;
pub mod grid;
pub mod quad;

use crate::legacy;
use crate::tokenizer::{TokenizeOptions, TokenizedValue, tokenize};
use crate::value::LiteralValue;

/// One emitted longhand: `(property, value)`.
pub type LonghandEntry = (String, String);

/// Result of decomposing one shorthand value.
///
/// `CannotFix` is terminal: it is a variant rather than a sentinel entry,
/// so it can never be mixed with real entries.
#[derive(Debug, Clone, PartialEq)]
pub enum Decomposition {
    /// Ordered longhand entries. A value that is not actually shorthand
    /// usage comes back as a single entry for the original property.
    Entries(Vec<LonghandEntry>),
    /// Safe decomposition is not possible.
    CannotFix,
}

impl Decomposition {
    /// The original property, unchanged.
    pub(crate) fn unchanged(key: &str, value: &str) -> Self {
        Decomposition::Entries(vec![(key.to_string(), value.to_string())])
    }

    /// The entries, when decomposition succeeded.
    pub fn entries(&self) -> Option<&[LonghandEntry]> {
        match self {
            Decomposition::Entries(e) => Some(e),
            Decomposition::CannotFix => None,
        }
    }

    /// Whether decomposition failed.
    pub fn is_cannot_fix(&self) -> bool {
        matches!(self, Decomposition::CannotFix)
    }
}

/// Decompose a shorthand property value.
///
/// Legacy names are mapped to their logical equivalents first
/// (`marginHorizontal` runs the `marginInline` family). `allow_important`
/// keeps a trailing `!important` on every emitted entry; without it the
/// suffix is dropped. `prefer_inline` selects logical start/end longhands
/// over physical left/right ones.
pub fn decompose(
    key: &str,
    value: &LiteralValue,
    allow_important: bool,
    prefer_inline: bool,
) -> Decomposition {
    let key = legacy::legacy_name_mapping(key).unwrap_or(key);

    let raw = value.to_css_text();
    let (stripped, had_important) = strip_important(&raw);

    let result = dispatch(key, stripped, prefer_inline);

    if had_important && allow_important {
        match result {
            Decomposition::Entries(entries) => Decomposition::Entries(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, format!("{v} !important")))
                    .collect(),
            ),
            other => other,
        }
    } else {
        result
    }
}

fn dispatch(key: &str, value: &str, prefer_inline: bool) -> Decomposition {
    match key {
        "margin" => quad::expand_sides(&quad::MARGIN, key, value, prefer_inline),
        "padding" => quad::expand_sides(&quad::PADDING, key, value, prefer_inline),
        "inset" => quad::expand_sides(&quad::INSET, key, value, prefer_inline),
        "borderWidth" => quad::expand_sides(&quad::BORDER_WIDTH, key, value, prefer_inline),
        "borderStyle" => quad::expand_sides(&quad::BORDER_STYLE, key, value, prefer_inline),
        "borderColor" => quad::expand_sides(&quad::BORDER_COLOR, key, value, prefer_inline),

        "borderRadius" => quad::expand_corners(&quad::BORDER_RADIUS, key, value, prefer_inline),
        "cornerShape" => quad::expand_corners(&quad::CORNER_SHAPE, key, value, prefer_inline),

        "marginBlock" => quad::expand_pair("marginBlockStart", "marginBlockEnd", key, value),
        "marginInline" => quad::expand_pair("marginInlineStart", "marginInlineEnd", key, value),
        "paddingBlock" => quad::expand_pair("paddingBlockStart", "paddingBlockEnd", key, value),
        "paddingInline" => quad::expand_pair("paddingInlineStart", "paddingInlineEnd", key, value),
        "insetBlock" => quad::expand_pair("insetBlockStart", "insetBlockEnd", key, value),
        "insetInline" => quad::expand_pair("insetInlineStart", "insetInlineEnd", key, value),
        "overflow" => quad::expand_pair("overflowX", "overflowY", key, value),
        "overscrollBehavior" => {
            quad::expand_pair("overscrollBehaviorX", "overscrollBehaviorY", key, value)
        }
        "gap" => quad::expand_pair("rowGap", "columnGap", key, value),
        "containIntrinsicSize" => {
            quad::expand_pair("containIntrinsicWidth", "containIntrinsicHeight", key, value)
        }

        "border" | "borderTop" | "borderRight" | "borderBottom" | "borderLeft"
        | "borderBlock" | "borderInline" | "outline" => border::expand(key, value),

        "background" => background::expand(key, value),
        "font" => font::expand(key, value),

        "gridArea" => grid::expand_area(key, value),
        "gridRow" => grid::expand_line(key, "gridRowStart", "gridRowEnd", value),
        "gridColumn" => grid::expand_line(key, "gridColumnStart", "gridColumnEnd", value),
        "gridTemplate" => grid::expand_template(key, value),

        _ => {
            tracing::debug!(property = key, "not a registered shorthand family");
            Decomposition::unchanged(key, value)
        }
    }
}

/// Strip a trailing `!important`, returning the trimmed value and whether
/// the suffix was present.
pub(crate) fn strip_important(value: &str) -> (&str, bool) {
    let trimmed = value.trim();
    let lower = trimmed.to_ascii_lowercase();
    if let Some(prefix_len) = lower.strip_suffix("!important").map(|p| p.len()) {
        (trimmed[..prefix_len].trim_end(), true)
    } else {
        (trimmed, false)
    }
}

/// Tokenize a shorthand value.
pub(crate) fn value_parts(value: &str, split_on_slash: bool) -> TokenizedValue {
    tokenize(value, TokenizeOptions { split_on_slash })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn str_value(v: &str) -> LiteralValue {
        LiteralValue::Str(v.to_string())
    }

    #[test]
    fn strip_important_variants() {
        assert_eq!(strip_important("10px !important"), ("10px", true));
        assert_eq!(strip_important("10px!important"), ("10px", true));
        assert_eq!(strip_important("10px !IMPORTANT"), ("10px", true));
        assert_eq!(strip_important("10px"), ("10px", false));
    }

    #[test]
    fn important_dropped_without_permission() {
        let result = decompose("margin", &str_value("10px 20px !important"), false, false);
        let entries = result.entries().unwrap();
        assert!(entries.iter().all(|(_, v)| !v.contains("!important")));
    }

    #[test]
    fn important_reapplied_to_every_entry() {
        let result = decompose("margin", &str_value("1px 2px 3px 4px !important"), true, false);
        let entries = result.entries().unwrap();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|(_, v)| v.ends_with("!important")));
    }

    #[test]
    fn numeric_value_is_not_shorthand_usage() {
        let result = decompose("margin", &LiteralValue::Num(10.0), false, false);
        assert_eq!(result.entries().unwrap(), [("margin".to_string(), "10".to_string())]);
    }

    #[test]
    fn legacy_names_run_their_logical_family() {
        let result = decompose("marginHorizontal", &str_value("10em 1em"), false, false);
        assert_eq!(
            result.entries().unwrap(),
            [
                ("marginInlineStart".to_string(), "10em".to_string()),
                ("marginInlineEnd".to_string(), "1em".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_family_passes_through() {
        let result = decompose("textAlign", &str_value("center"), false, false);
        assert_eq!(result.entries().unwrap(), [("textAlign".to_string(), "center".to_string())]);
    }
}
