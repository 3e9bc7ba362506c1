//! Grid placement and template shorthand decomposition.
//!
//! `gridArea` and `gridRow`/`gridColumn` group their value on top-level
//! slashes; each group is a grid line. A lone custom-ident names an area
//! and broadcasts to every line property, while reserved keywords and
//! numeric lines are left for the longhand defaulting rules to handle.

use super::{Decomposition, LonghandEntry, value_parts};
use crate::tokenizer::{Part, TokenKind};

const RESERVED: &[&str] = &["auto", "none", "initial", "inherit", "unset", "revert"];

/// A slash-delimited group of parts, joined back into one value string.
fn slash_groups(value: &str) -> Option<Vec<String>> {
    let tok = value_parts(value, true);
    if tok.has_top_level_comma {
        return None;
    }
    if tok.parts.is_empty() {
        return Some(vec![]);
    }
    let mut groups: Vec<Vec<&Part>> = vec![vec![]];
    for part in &tok.parts {
        if part.is_slash() {
            groups.push(vec![]);
        } else if let Some(last) = groups.last_mut() {
            last.push(part);
        }
    }
    if groups.iter().any(|g| g.is_empty()) {
        return None;
    }
    Some(
        groups
            .iter()
            .map(|g| g.iter().map(|p| p.text.as_str()).collect::<Vec<_>>().join(" "))
            .collect(),
    )
}

/// A group is a custom-ident line when it is a single bare identifier
/// that is neither a reserved keyword nor a `span` prefix.
fn is_custom_ident(group: &str) -> bool {
    let mut words = group.split_ascii_whitespace();
    let (Some(word), None) = (words.next(), words.next()) else {
        return false;
    };
    let lower = word.to_ascii_lowercase();
    if RESERVED.contains(&lower.as_str()) || lower == "span" {
        return false;
    }
    let tok = value_parts(word, false);
    matches!(tok.parts.first().and_then(Part::first_kind), Some(TokenKind::Ident))
}

fn sorted(mut entries: Vec<LonghandEntry>) -> Decomposition {
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Decomposition::Entries(entries)
}

/// Expand `gridArea` into row/column start/end lines.
pub fn expand_area(key: &str, value: &str) -> Decomposition {
    let Some(groups) = slash_groups(value) else {
        return Decomposition::CannotFix;
    };
    let infer = |g: &str| if is_custom_ident(g) { g.to_string() } else { "auto".to_string() };
    let entries = match groups.as_slice() {
        [] => return Decomposition::unchanged(key, value),
        [only] => {
            if !is_custom_ident(only) {
                return Decomposition::unchanged(key, value);
            }
            vec![
                ("gridRowStart".to_string(), only.clone()),
                ("gridColumnStart".to_string(), only.clone()),
                ("gridRowEnd".to_string(), only.clone()),
                ("gridColumnEnd".to_string(), only.clone()),
            ]
        }
        [row_start, column_start] => vec![
            ("gridRowStart".to_string(), row_start.clone()),
            ("gridColumnStart".to_string(), column_start.clone()),
            ("gridRowEnd".to_string(), infer(row_start)),
            ("gridColumnEnd".to_string(), infer(column_start)),
        ],
        [row_start, column_start, row_end] => vec![
            ("gridRowStart".to_string(), row_start.clone()),
            ("gridColumnStart".to_string(), column_start.clone()),
            ("gridRowEnd".to_string(), row_end.clone()),
            ("gridColumnEnd".to_string(), infer(column_start)),
        ],
        [row_start, column_start, row_end, column_end] => vec![
            ("gridRowStart".to_string(), row_start.clone()),
            ("gridColumnStart".to_string(), column_start.clone()),
            ("gridRowEnd".to_string(), row_end.clone()),
            ("gridColumnEnd".to_string(), column_end.clone()),
        ],
        _ => return Decomposition::CannotFix,
    };
    sorted(entries)
}

/// Expand `gridRow` or `gridColumn` into its start/end pair.
pub fn expand_line(key: &str, start_key: &str, end_key: &str, value: &str) -> Decomposition {
    let Some(groups) = slash_groups(value) else {
        return Decomposition::CannotFix;
    };
    match groups.as_slice() {
        [] => Decomposition::unchanged(key, value),
        [only] => {
            if !is_custom_ident(only) {
                return Decomposition::unchanged(key, value);
            }
            Decomposition::Entries(vec![
                (start_key.to_string(), only.clone()),
                (end_key.to_string(), only.clone()),
            ])
        }
        [start, end] => Decomposition::Entries(vec![
            (start_key.to_string(), start.clone()),
            (end_key.to_string(), end.clone()),
        ]),
        _ => Decomposition::CannotFix,
    }
}

/// Expand `gridTemplate` into rows and columns. The named-areas form
/// (quoted row strings) changes meaning under decomposition and is not
/// rewritten.
pub fn expand_template(key: &str, value: &str) -> Decomposition {
    let tok = value_parts(value, true);
    if tok.parts.iter().any(|p| {
        p.tokens.iter().any(|t| t.kind == TokenKind::QuotedString)
    }) {
        return Decomposition::CannotFix;
    }
    let Some(groups) = slash_groups(value) else {
        return Decomposition::CannotFix;
    };
    match groups.as_slice() {
        [] | [_] => Decomposition::unchanged(key, value),
        [rows, columns] => Decomposition::Entries(vec![
            ("gridTemplateRows".to_string(), rows.clone()),
            ("gridTemplateColumns".to_string(), columns.clone()),
        ]),
        _ => Decomposition::CannotFix,
    }
}
