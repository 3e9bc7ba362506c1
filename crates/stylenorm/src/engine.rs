//! The validation engine: one immutable grammar table plus the host
//! configuration, shared freely across per-file analyses.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::grammar::{
    Diagnostic, PropertyTable, Suggestion, ValidationResult, check_rule, closest_match,
    replacement_for,
};
use crate::legacy::legacy_name_mapping;
use crate::shorthand::{self, Decomposition, border::BorderRole};
use crate::value::{LiteralValue, Resolution, ResolutionEnv, ValueRef, resolve};

/// Maximum edit distance for property-name suggestions. Property names are
/// short, so this is tighter than the value-keyword bound.
const PROPERTY_NAME_DISTANCE: usize = 2;

/// A property validator and shorthand decomposer, built once from host
/// configuration and then read-only.
#[derive(Debug)]
pub struct Engine {
    table: PropertyTable,
    config: EngineConfig,
}

impl Engine {
    /// Build an engine. Fails only on invalid host configuration, such as a
    /// malformed prop-limit pattern or an empty allowlist.
    pub fn new(config: EngineConfig) -> Result<Engine> {
        let mut table = PropertyTable::build()?;
        table.apply_limits(&config.prop_limits)?;
        table.finalize();
        Ok(Engine { table, config })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether `key` names a property in the grammar table.
    pub fn knows_property(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Validate one property/value pair against the grammar table.
    ///
    /// Shorthands with a replacement table (the border family) and
    /// deprecated physical names are rejected with a rename suggestion
    /// before any grammar runs. Dynamic and unresolvable values short-
    /// circuit to their own results; folded arithmetic is accepted as is.
    pub fn check_property(
        &self,
        key: &str,
        value: &ValueRef,
        env: &ResolutionEnv,
    ) -> ValidationResult {
        if let Some(replacement) = replacement_for(key) {
            return self.replace_border_shorthand(key, value, env, replacement);
        }

        if let Some(logical) = legacy_name_mapping(key) {
            return ValidationResult::Invalid(Diagnostic {
                message: format!("'{key}' is a deprecated property; use '{logical}' instead"),
                suggestion: Some(Suggestion {
                    description: format!("Rename to '{logical}'"),
                    replacement: logical.to_string(),
                }),
            });
        }

        let Some(rule) = self.table.rule(key) else {
            let suggestion = self.suggest_property_name(key).map(|name| Suggestion {
                description: format!("Did you mean '{name}'?"),
                replacement: name.to_string(),
            });
            return ValidationResult::Invalid(Diagnostic {
                message: format!("'{key}' is not a recognized style property"),
                suggestion,
            });
        };

        match resolve(value, env) {
            Resolution::Dynamic => ValidationResult::Dynamic,
            Resolution::Unresolvable => ValidationResult::Unresolvable,
            Resolution::Numeric => ValidationResult::Valid,
            Resolution::Literal(literal) => {
                let (literal, important) = split_important(literal);
                if important && !self.config.allow_important {
                    return ValidationResult::Invalid(Diagnostic {
                        message: format!("'!important' is not allowed on '{key}'"),
                        suggestion: Some(Suggestion {
                            description: "Remove '!important'".to_string(),
                            replacement: literal.to_css_text(),
                        }),
                    });
                }
                check_rule(rule, key, &literal, value.raw())
            }
        }
    }

    /// Decompose a shorthand value into ordered longhand entries. The
    /// engine's `allow_important` and `prefer_inline` settings apply.
    pub fn decompose(&self, key: &str, value: &LiteralValue) -> Decomposition {
        shorthand::decompose(
            key,
            value,
            self.config.allow_important,
            self.config.prefer_inline,
        )
    }

    /// Closest known property name within a small edit distance, or `None`
    /// when nothing plausible exists. Candidates are scanned in sorted
    /// order so ties resolve deterministically.
    pub fn suggest_property_name(&self, key: &str) -> Option<&'static str> {
        let mut names: Vec<&'static str> = self.table.property_names().collect();
        names.sort_unstable();
        closest_match(key, names.into_iter(), PROPERTY_NAME_DISTANCE)
    }

    /// Border-family shorthands are never validated as single values; the
    /// diagnostic names the longhands and, when the value classifies
    /// cleanly, carries the concrete per-longhand rewrite.
    fn replace_border_shorthand(
        &self,
        key: &str,
        value: &ValueRef,
        env: &ResolutionEnv,
        replacement: crate::grammar::Replacement,
    ) -> ValidationResult {
        let suggestion = match resolve(value, env) {
            Resolution::Literal(literal) => {
                let raw = literal.to_css_text();
                let (stripped, _) = shorthand::strip_important(&raw);
                shorthand::border::classify_value(stripped).map(|roles| {
                    let rewrite = roles
                        .iter()
                        .map(|(role, text)| {
                            let longhand = match role {
                                BorderRole::Width => replacement.width,
                                BorderRole::Style => replacement.style,
                                BorderRole::Color => replacement.color,
                            };
                            format!("{longhand}: {text}")
                        })
                        .collect::<Vec<_>>()
                        .join("; ");
                    Suggestion {
                        description: format!(
                            "Split into '{}', '{}' and '{}'",
                            replacement.width, replacement.style, replacement.color
                        ),
                        replacement: rewrite,
                    }
                })
            }
            _ => None,
        };
        ValidationResult::Invalid(Diagnostic {
            message: format!(
                "'{key}' is not supported; use '{}', '{}' and '{}' instead",
                replacement.width, replacement.style, replacement.color
            ),
            suggestion,
        })
    }
}

/// Detach a trailing `!important` from a resolved string literal.
fn split_important(literal: LiteralValue) -> (LiteralValue, bool) {
    match literal {
        LiteralValue::Str(s) => {
            let (stripped, important) = shorthand::strip_important(&s);
            if important {
                (LiteralValue::Str(stripped.to_string()), true)
            } else {
                (LiteralValue::Str(s), false)
            }
        }
        other => (other, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn valid_keyword_value() {
        let env = ResolutionEnv::new();
        let result = engine().check_property("display", &ValueRef::str("flex"), &env);
        assert!(result.is_valid());
    }

    #[test]
    fn invalid_value_carries_message() {
        let env = ResolutionEnv::new();
        let result = engine().check_property("display", &ValueRef::str("flexx"), &env);
        let diag = result.diagnostic().unwrap();
        assert!(diag.message.contains("'flexx' is not a valid value for 'display'"));
        assert_eq!(diag.suggestion.as_ref().unwrap().replacement, "flex");
    }

    #[test]
    fn unknown_property_suggests_rename() {
        let env = ResolutionEnv::new();
        let result = engine().check_property("textAlin", &ValueRef::str("center"), &env);
        let diag = result.diagnostic().unwrap();
        assert_eq!(diag.suggestion.as_ref().unwrap().replacement, "textAlign");
    }

    #[test]
    fn legacy_property_suggests_logical_name() {
        let env = ResolutionEnv::new();
        let result = engine().check_property("marginStart", &ValueRef::str("4px"), &env);
        let diag = result.diagnostic().unwrap();
        assert_eq!(diag.suggestion.as_ref().unwrap().replacement, "marginInlineStart");
    }

    #[test]
    fn border_shorthand_is_replaced() {
        let env = ResolutionEnv::new();
        let result = engine().check_property("border", &ValueRef::str("1px solid red"), &env);
        let diag = result.diagnostic().unwrap();
        assert!(diag.message.contains("'borderWidth', 'borderStyle' and 'borderColor'"));
        let replacement = &diag.suggestion.as_ref().unwrap().replacement;
        assert!(replacement.contains("borderWidth: 1px"));
        assert!(replacement.contains("borderStyle: solid"));
        assert!(replacement.contains("borderColor: red"));
    }

    #[test]
    fn dynamic_binding_short_circuits() {
        let mut env = ResolutionEnv::new();
        env.define_dynamic("w");
        let result = engine().check_property("width", &ValueRef::ident("w"), &env);
        assert_eq!(result, ValidationResult::Dynamic);
    }

    #[test]
    fn unresolvable_binding_short_circuits() {
        let env = ResolutionEnv::new();
        let result = engine().check_property("width", &ValueRef::ident("missing"), &env);
        assert_eq!(result, ValidationResult::Unresolvable);
    }

    #[test]
    fn important_rejected_by_default() {
        let env = ResolutionEnv::new();
        let result =
            engine().check_property("color", &ValueRef::str("red !important"), &env);
        let diag = result.diagnostic().unwrap();
        assert!(diag.message.contains("!important"));
        assert_eq!(diag.suggestion.as_ref().unwrap().replacement, "red");
    }

    #[test]
    fn important_accepted_when_allowed() {
        let config = EngineConfig {
            allow_important: true,
            ..EngineConfig::default()
        };
        let engine = Engine::new(config).unwrap();
        let env = ResolutionEnv::new();
        let result = engine.check_property("color", &ValueRef::str("red !important"), &env);
        assert!(result.is_valid());
    }

    #[test]
    fn suggest_property_name_bounds() {
        assert_eq!(engine().suggest_property_name("textAlin"), Some("textAlign"));
        assert_eq!(engine().suggest_property_name("zzzzqq"), None);
    }
}
