//! Background shorthand decomposition.
//!
//! Before-slash parts are scanned greedily against an ordered priority:
//! image, then repeat keyword, then attachment keyword, then color;
//! whatever matches none of those accumulates into the position. The
//! slash-delimited remainder becomes `backgroundSize`. Comma-separated
//! multi-layer values are unsupported: layering semantics are not preserved
//! by per-property decomposition.

use super::{Decomposition, value_parts};
use crate::grammar::properties::NAMED_COLORS;
use crate::tokenizer::{Part, TokenKind};

const REPEAT_KEYWORDS: &[&str] = &["repeat", "repeat-x", "repeat-y", "no-repeat", "space", "round"];
const ATTACHMENT_KEYWORDS: &[&str] = &["scroll", "fixed", "local"];
const IMAGE_FUNCTIONS: &[&str] = &[
    "url(",
    "image-set(",
    "linear-gradient(",
    "radial-gradient(",
    "conic-gradient(",
    "repeating-linear-gradient(",
    "repeating-radial-gradient(",
    "repeating-conic-gradient(",
];
const COLOR_FUNCTIONS: &[&str] = &[
    "rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(", "color(",
    "color-mix(", "light-dark(",
];

fn is_image(part: &Part) -> bool {
    let lower = part.text.to_ascii_lowercase();
    lower == "none" || IMAGE_FUNCTIONS.iter().any(|f| lower.starts_with(f))
}

fn is_color(part: &Part) -> bool {
    if part.first_kind() == Some(TokenKind::Hash) {
        return true;
    }
    let lower = part.text.to_ascii_lowercase();
    COLOR_FUNCTIONS.iter().any(|f| lower.starts_with(f))
        || NAMED_COLORS.iter().any(|c| c.eq_ignore_ascii_case(&lower))
}

/// Expand a single-layer background value.
pub fn expand(key: &str, value: &str) -> Decomposition {
    let tok = value_parts(value, true);
    if tok.has_top_level_comma {
        // Multiple layers; decomposition would lose the layering.
        return Decomposition::CannotFix;
    }
    if tok.parts.len() <= 1 && !tok.has_top_level_slash {
        return Decomposition::unchanged(key, value);
    }

    let mut color: Option<String> = None;
    let mut image: Option<String> = None;
    let mut repeat: Option<String> = None;
    let mut attachment: Option<String> = None;
    let mut position: Vec<String> = vec![];
    let mut size: Vec<String> = vec![];
    let mut after_slash = false;

    for part in &tok.parts {
        if part.is_slash() {
            if after_slash {
                return Decomposition::CannotFix;
            }
            after_slash = true;
            continue;
        }
        if after_slash {
            size.push(part.text.clone());
            continue;
        }

        let lower = part.text.to_ascii_lowercase();
        if is_image(part) {
            if image.replace(part.text.clone()).is_some() {
                return Decomposition::CannotFix;
            }
        } else if REPEAT_KEYWORDS.contains(&lower.as_str()) {
            if repeat.replace(part.text.clone()).is_some() {
                return Decomposition::CannotFix;
            }
        } else if ATTACHMENT_KEYWORDS.contains(&lower.as_str()) {
            if attachment.replace(part.text.clone()).is_some() {
                return Decomposition::CannotFix;
            }
        } else if is_color(part) {
            if color.replace(part.text.clone()).is_some() {
                return Decomposition::CannotFix;
            }
        } else {
            position.push(part.text.clone());
        }
    }

    if after_slash && size.is_empty() {
        return Decomposition::CannotFix;
    }

    let mut entries = vec![];
    if let Some(v) = color {
        entries.push(("backgroundColor".to_string(), v));
    }
    if let Some(v) = image {
        entries.push(("backgroundImage".to_string(), v));
    }
    if let Some(v) = repeat {
        entries.push(("backgroundRepeat".to_string(), v));
    }
    if let Some(v) = attachment {
        entries.push(("backgroundAttachment".to_string(), v));
    }
    if !position.is_empty() {
        entries.push(("backgroundPosition".to_string(), position.join(" ")));
    }
    if !size.is_empty() {
        entries.push(("backgroundSize".to_string(), size.join(" ")));
    }
    Decomposition::Entries(entries)
}
