//! Minimal glob matching for property-limit override patterns.
//!
//! Supports `*` (any run, including empty) and `?` (any single character)
//! over short camelCase property names.

use crate::{Error, Result};

/// Validate a pattern before use. Rejects empty patterns and characters
/// that cannot occur in a property name or a wildcard.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(Error::invalid_limit_pattern(pattern, "pattern is empty"));
    }
    for c in pattern.chars() {
        if !(c.is_ascii_alphanumeric() || matches!(c, '*' | '?' | '-' | '_')) {
            return Err(Error::invalid_limit_pattern(
                pattern,
                format!("unsupported character '{c}'"),
            ));
        }
    }
    Ok(())
}

/// Match `name` against `pattern`.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let n: Vec<char> = name.chars().collect();

    let (mut pi, mut ni) = (0usize, 0usize);
    // Position to resume from after a failed `*` expansion.
    let mut star: Option<(usize, usize)> = None;

    while ni < n.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == n[ni]) {
            pi += 1;
            ni += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some((pi, ni));
            pi += 1;
        } else if let Some((sp, sn)) = star {
            pi = sp + 1;
            ni = sn + 1;
            star = Some((sp, sn + 1));
        } else {
            return false;
        }
    }

    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }
    pi == p.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        assert!(glob_match("margin", "margin"));
        assert!(!glob_match("margin", "marginTop"));
    }

    #[test]
    fn star_prefix_families() {
        assert!(glob_match("grid*", "gridArea"));
        assert!(glob_match("grid*", "grid"));
        assert!(glob_match("mask*", "maskImage"));
        assert!(!glob_match("grid*", "margin"));
    }

    #[test]
    fn star_in_middle() {
        assert!(glob_match("border*Width", "borderTopWidth"));
        assert!(glob_match("border*Width", "borderWidth"));
        assert!(!glob_match("border*Width", "borderTopStyle"));
    }

    #[test]
    fn question_mark() {
        assert!(glob_match("overflow?", "overflowX"));
        assert!(!glob_match("overflow?", "overflow"));
    }

    #[test]
    fn pattern_validation() {
        assert!(validate_pattern("grid*").is_ok());
        assert!(validate_pattern("").is_err());
        assert!(validate_pattern("grid+([a-z])").is_err());
    }
}
