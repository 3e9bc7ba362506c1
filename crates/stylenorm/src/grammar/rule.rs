//! Rule combinators for per-property value grammars.
//!
//! A [`Rule`] is a small composable predicate over resolved literal values.
//! The property table composes these into one grammar per property;
//! [`Rule::Union`] succeeds when any branch succeeds, evaluated in order,
//! and on total failure reports the *first* branch's message. Table authors
//! therefore order branches from most- to least-specific.

use regex::Regex;

use super::suggest::{closest_match, quote_aware_replacement};
use crate::value::LiteralValue;

/// Edit-distance threshold for value near-miss suggestions.
const VALUE_SUGGESTION_DISTANCE: usize = 4;

/// A composable value predicate.
#[derive(Debug, Clone)]
pub enum Rule {
    /// An exact keyword.
    Keyword(&'static str),
    /// The `null` literal.
    Null,
    /// Any numeric value.
    Number { message: String },
    /// A numeric value in `[min, max]`.
    Range {
        min: f64,
        max: f64,
        message: String,
    },
    /// A string matching a regex. The regex is compiled once at table
    /// construction.
    Pattern { regex: Regex, message: String },
    /// A set of interchangeable keywords sharing one message.
    OneOf {
        words: Vec<String>,
        message: String,
    },
    /// Ordered alternatives; first success wins.
    Union(Vec<Rule>),
}

impl Rule {
    /// Build a keyword-set rule.
    pub fn one_of(words: &[&str], message: impl Into<String>) -> Rule {
        Rule::OneOf {
            words: words.iter().map(|w| w.to_string()).collect(),
            message: message.into(),
        }
    }

    /// Build a number rule.
    pub fn number(message: impl Into<String>) -> Rule {
        Rule::Number { message: message.into() }
    }

    /// Build a numeric-range rule.
    pub fn range(min: f64, max: f64, message: impl Into<String>) -> Rule {
        Rule::Range { min, max, message: message.into() }
    }

    /// Build a pattern rule. Fails only on a malformed regex, which is a
    /// table-construction (programmer) error.
    pub fn pattern(regex: &str, message: impl Into<String>) -> Result<Rule, regex::Error> {
        Ok(Rule::Pattern {
            regex: Regex::new(regex)?,
            message: message.into(),
        })
    }

    /// Build a union rule.
    pub fn union(branches: Vec<Rule>) -> Rule {
        Rule::Union(branches)
    }

    /// Whether `value` satisfies this rule.
    pub fn matches(&self, value: &LiteralValue) -> bool {
        match self {
            Rule::Keyword(kw) => matches!(value, LiteralValue::Str(s) if s == kw),
            Rule::Null => matches!(value, LiteralValue::Null),
            Rule::Number { .. } => value.as_number().is_some(),
            Rule::Range { min, max, .. } => value
                .as_number()
                .is_some_and(|n| n >= *min && n <= *max),
            Rule::Pattern { regex, .. } => {
                matches!(value, LiteralValue::Str(s) if regex.is_match(s))
            }
            Rule::OneOf { words, .. } => {
                matches!(value, LiteralValue::Str(s) if words.iter().any(|w| w == s))
            }
            Rule::Union(branches) => branches.iter().any(|b| b.matches(value)),
        }
    }

    /// Failure message for this rule. For a union this is the first
    /// branch's message, a fixed tie-break rather than an aggregate.
    pub fn message(&self) -> String {
        match self {
            Rule::Keyword(kw) => format!("expected '{kw}'"),
            Rule::Null => "expected null".to_string(),
            Rule::Number { message } | Rule::Range { message, .. } => message.clone(),
            Rule::Pattern { message, .. } => message.clone(),
            Rule::OneOf { message, .. } => message.clone(),
            Rule::Union(branches) => branches
                .first()
                .map(|b| b.message())
                .unwrap_or_else(|| "no value is accepted".to_string()),
        }
    }

    /// The keyword closest to `input` across all literal branches, within
    /// the near-miss threshold.
    pub fn nearest_keyword(&self, input: &str) -> Option<String> {
        let mut words: Vec<&str> = vec![];
        self.collect_keywords(&mut words);
        closest_match(input, words, VALUE_SUGGESTION_DISTANCE)
            .filter(|m| *m != input)
            .map(|m| m.to_string())
    }

    fn collect_keywords<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Rule::Keyword(kw) => out.push(kw),
            Rule::OneOf { words, .. } => out.extend(words.iter().map(|w| w.as_str())),
            Rule::Union(branches) => {
                for b in branches {
                    b.collect_keywords(out);
                }
            }
            _ => {}
        }
    }
}

/// A structured fix attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub description: String,
    /// Replacement source text.
    pub replacement: String,
}

/// A failed validation, as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable message.
    pub message: String,
    /// Optional structured fix.
    pub suggestion: Option<Suggestion>,
}

/// Outcome of checking one property/value pair.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// The value satisfies the property's grammar.
    Valid,
    /// The value depends on a dynamic-style function argument; not an error
    /// by itself.
    Dynamic,
    /// The value could not be statically resolved.
    Unresolvable,
    /// The value fails the property's grammar.
    Invalid(Diagnostic),
}

impl ValidationResult {
    /// Whether the result is `Valid`.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The diagnostic, when invalid.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            ValidationResult::Invalid(d) => Some(d),
            _ => None,
        }
    }
}

/// Evaluate `rule` against a resolved literal for `property`, building the
/// failure diagnostic (with a near-miss suggestion where one exists).
pub fn check_rule(
    rule: &Rule,
    property: &str,
    value: &LiteralValue,
    raw: Option<&str>,
) -> ValidationResult {
    if rule.matches(value) {
        return ValidationResult::Valid;
    }

    let shown = value.to_css_text();
    let suggestion = match value {
        LiteralValue::Str(s) => rule.nearest_keyword(s).map(|kw| Suggestion {
            description: format!("Did you mean '{kw}'?"),
            replacement: quote_aware_replacement(raw, &kw),
        }),
        _ => None,
    };

    ValidationResult::Invalid(Diagnostic {
        message: format!("'{shown}' is not a valid value for '{property}': {}", rule.message()),
        suggestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw_set() -> Rule {
        Rule::one_of(&["solid", "dashed", "dotted"], "expected a border style keyword")
    }

    #[test]
    fn keyword_match() {
        assert!(Rule::Keyword("auto").matches(&LiteralValue::Str("auto".into())));
        assert!(!Rule::Keyword("auto").matches(&LiteralValue::Str("none".into())));
    }

    #[test]
    fn range_match() {
        let r = Rule::range(0.0, 1.0, "expected a number between 0 and 1");
        assert!(r.matches(&LiteralValue::Num(0.5)));
        assert!(r.matches(&LiteralValue::Str("0.25".into())));
        assert!(!r.matches(&LiteralValue::Num(2.0)));
    }

    #[test]
    fn union_short_circuits_and_reports_first_branch() {
        let union = Rule::union(vec![Rule::number("expected a number"), kw_set()]);
        assert!(union.matches(&LiteralValue::Num(3.0)));
        assert!(union.matches(&LiteralValue::Str("dashed".into())));

        let result = check_rule(&union, "borderTopStyle", &LiteralValue::Str("wavy".into()), None);
        let diag = result.diagnostic().unwrap();
        assert!(diag.message.contains("expected a number"), "{}", diag.message);
    }

    #[test]
    fn near_miss_suggestion() {
        let result = check_rule(&kw_set(), "borderTopStyle", &LiteralValue::Str("soild".into()), None);
        let diag = result.diagnostic().unwrap();
        let s = diag.suggestion.as_ref().unwrap();
        assert_eq!(s.replacement, "solid");
    }

    #[test]
    fn near_miss_suggestion_preserves_quotes() {
        let result = check_rule(
            &kw_set(),
            "borderTopStyle",
            &LiteralValue::Str("soild".into()),
            Some("'soild'"),
        );
        let s = result.diagnostic().unwrap().suggestion.clone().unwrap();
        assert_eq!(s.replacement, "'solid'");
    }

    #[test]
    fn far_miss_has_no_suggestion() {
        let result = check_rule(&kw_set(), "borderTopStyle", &LiteralValue::Str("zzzzzzzzzz".into()), None);
        assert!(result.diagnostic().unwrap().suggestion.is_none());
    }

    #[test]
    fn null_rule() {
        assert!(Rule::Null.matches(&LiteralValue::Null));
        assert!(!Rule::Null.matches(&LiteralValue::Str("null".into())));
    }
}
