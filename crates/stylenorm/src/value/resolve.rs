//! Resolution of symbolic values against per-file bindings.
//!
//! The host builds one [`ResolutionEnv`] per source file while walking it,
//! and clears it at the file boundary. The env is a plain owned value: no
//! globals, no sharing between in-flight analyses.

use std::collections::{HashMap, HashSet};

use super::{ComputedKind, LiteralValue, TemplatePart, ValueRef, format_number};

/// Math functions whose results are known to be numeric without evaluation.
const ALLOWED_MATH_CALLS: &[&str] = &["abs", "ceil", "floor", "round"];

/// What a local name is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A value the host saw assigned to the name.
    Value(ValueRef),
    /// A dynamic-style function parameter: unresolvable at analysis time,
    /// but a legitimate usage pattern.
    Dynamic,
}

/// Per-file variable bindings, owned by the host during one file's traversal.
#[derive(Debug, Clone, Default)]
pub struct ResolutionEnv {
    bindings: HashMap<String, Binding>,
}

impl ResolutionEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a name to a value.
    pub fn define(&mut self, name: impl Into<String>, value: ValueRef) {
        self.bindings.insert(name.into(), Binding::Value(value));
    }

    /// Bind a name to a dynamic-style function parameter.
    pub fn define_dynamic(&mut self, name: impl Into<String>) {
        self.bindings.insert(name.into(), Binding::Dynamic);
    }

    /// Look up a binding.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Drop all bindings. Called by the host at the end of a file scan.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Number of bindings currently defined.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no bindings are defined.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The outcome of resolving a [`ValueRef`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Resolved to a concrete literal.
    Literal(LiteralValue),
    /// Statically known to be numeric, exact value unknown (folded
    /// arithmetic or an allowed math call).
    Numeric,
    /// Depends on a dynamic-style function argument.
    Dynamic,
    /// Could not be resolved (unknown name, unclassifiable expression).
    Unresolvable,
}

/// Resolve a value reference against the environment.
///
/// Identifier chains are followed until a literal, a dynamic marker, or a
/// dead end. Template literals resolve when every embedded expression
/// resolves; any dynamic segment makes the whole template dynamic.
pub fn resolve(value: &ValueRef, env: &ResolutionEnv) -> Resolution {
    let mut seen = HashSet::new();
    resolve_inner(value, env, &mut seen)
}

fn resolve_inner(value: &ValueRef, env: &ResolutionEnv, seen: &mut HashSet<String>) -> Resolution {
    match value {
        ValueRef::Literal { value, .. } => Resolution::Literal(value.clone()),

        ValueRef::Identifier(name) => {
            // Cyclic bindings are a dead end, not an infinite loop.
            if !seen.insert(name.clone()) {
                return Resolution::Unresolvable;
            }
            match env.get(name) {
                Some(Binding::Value(inner)) => resolve_inner(inner, env, seen),
                Some(Binding::Dynamic) => Resolution::Dynamic,
                None => Resolution::Unresolvable,
            }
        }

        ValueRef::Computed(expr) => match &expr.kind {
            ComputedKind::Arithmetic => Resolution::Numeric,
            ComputedKind::MathCall(name) if ALLOWED_MATH_CALLS.contains(&name.as_str()) => {
                Resolution::Numeric
            }
            _ => Resolution::Unresolvable,
        },

        ValueRef::Template(parts) => resolve_template(parts, env, seen),
    }
}

fn resolve_template(
    parts: &[TemplatePart],
    env: &ResolutionEnv,
    seen: &mut HashSet<String>,
) -> Resolution {
    let mut text = String::new();
    let mut has_dynamic = false;

    for part in parts {
        match part {
            TemplatePart::Text(t) => text.push_str(t),
            TemplatePart::Expr(inner) => match resolve_inner(inner, env, seen) {
                Resolution::Literal(LiteralValue::Str(s)) => text.push_str(&s),
                Resolution::Literal(LiteralValue::Num(n)) => text.push_str(&format_number(n)),
                Resolution::Literal(LiteralValue::Null) => return Resolution::Unresolvable,
                Resolution::Numeric | Resolution::Dynamic => has_dynamic = true,
                Resolution::Unresolvable => return Resolution::Unresolvable,
            },
        }
    }

    if has_dynamic {
        Resolution::Dynamic
    } else {
        Resolution::Literal(LiteralValue::Str(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ComputedExpr;

    #[test]
    fn literal_resolves_to_itself() {
        let env = ResolutionEnv::new();
        assert_eq!(
            resolve(&ValueRef::str("red"), &env),
            Resolution::Literal(LiteralValue::Str("red".into()))
        );
    }

    #[test]
    fn identifier_chain() {
        let mut env = ResolutionEnv::new();
        env.define("a", ValueRef::ident("b"));
        env.define("b", ValueRef::num(10.0));

        assert_eq!(
            resolve(&ValueRef::ident("a"), &env),
            Resolution::Literal(LiteralValue::Num(10.0))
        );
    }

    #[test]
    fn unknown_identifier_is_unresolvable() {
        let env = ResolutionEnv::new();
        assert_eq!(resolve(&ValueRef::ident("missing"), &env), Resolution::Unresolvable);
    }

    #[test]
    fn dynamic_binding() {
        let mut env = ResolutionEnv::new();
        env.define_dynamic("prop");
        assert_eq!(resolve(&ValueRef::ident("prop"), &env), Resolution::Dynamic);
    }

    #[test]
    fn cyclic_bindings_dead_end() {
        let mut env = ResolutionEnv::new();
        env.define("a", ValueRef::ident("b"));
        env.define("b", ValueRef::ident("a"));
        assert_eq!(resolve(&ValueRef::ident("a"), &env), Resolution::Unresolvable);
    }

    #[test]
    fn arithmetic_is_numeric() {
        let env = ResolutionEnv::new();
        let expr = ValueRef::Computed(ComputedExpr {
            kind: ComputedKind::Arithmetic,
            source: "a + b".into(),
        });
        assert_eq!(resolve(&expr, &env), Resolution::Numeric);
    }

    #[test]
    fn math_call_allowlist() {
        let env = ResolutionEnv::new();
        let round = ValueRef::Computed(ComputedExpr {
            kind: ComputedKind::MathCall("round".into()),
            source: "Math.round(x)".into(),
        });
        assert_eq!(resolve(&round, &env), Resolution::Numeric);

        let random = ValueRef::Computed(ComputedExpr {
            kind: ComputedKind::MathCall("random".into()),
            source: "Math.random()".into(),
        });
        assert_eq!(resolve(&random, &env), Resolution::Unresolvable);
    }

    #[test]
    fn template_with_literal_parts() {
        let mut env = ResolutionEnv::new();
        env.define("size", ValueRef::num(4.0));

        let template = ValueRef::Template(vec![
            TemplatePart::Expr(ValueRef::ident("size")),
            TemplatePart::Text("px".into()),
        ]);
        assert_eq!(
            resolve(&template, &env),
            Resolution::Literal(LiteralValue::Str("4px".into()))
        );
    }

    #[test]
    fn template_with_dynamic_part() {
        let mut env = ResolutionEnv::new();
        env.define_dynamic("width");

        let template = ValueRef::Template(vec![
            TemplatePart::Expr(ValueRef::ident("width")),
            TemplatePart::Text("%".into()),
        ]);
        assert_eq!(resolve(&template, &env), Resolution::Dynamic);
    }

    #[test]
    fn env_clear_drops_bindings() {
        let mut env = ResolutionEnv::new();
        env.define("a", ValueRef::num(1.0));
        assert!(!env.is_empty());
        env.clear();
        assert!(env.is_empty());
        assert_eq!(resolve(&ValueRef::ident("a"), &env), Resolution::Unresolvable);
    }
}
