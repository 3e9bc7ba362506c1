//! Symbolic style values as authored in source.
//!
//! A [`ValueRef`] represents a property value before resolution: a literal,
//! a reference to a local binding, a computed expression, or a template
//! literal with embedded expressions. Resolution against a
//! [`ResolutionEnv`](crate::value::resolve::ResolutionEnv) happens in
//! [`resolve`](crate::value::resolve::resolve).

pub mod resolve;

pub use resolve::{Binding, Resolution, ResolutionEnv, resolve};

/// A concrete literal value: string, number, or the `null` literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A string value, without surrounding quotes.
    Str(String),
    /// A numeric value.
    Num(f64),
    /// The `null` literal (one of the CSS-wide keywords in this system).
    Null,
}

impl LiteralValue {
    /// Render the literal the way it would appear in a CSS value position.
    pub fn to_css_text(&self) -> String {
        match self {
            LiteralValue::Str(s) => s.clone(),
            LiteralValue::Num(n) => format_number(*n),
            LiteralValue::Null => "null".to_string(),
        }
    }

    /// The numeric value, if this literal is a number or a numeric string.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            LiteralValue::Num(n) => Some(*n),
            LiteralValue::Str(s) => s.trim().parse().ok(),
            LiteralValue::Null => None,
        }
    }
}

/// Format a number without a trailing `.0` for integral values.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// How a computed expression was classified by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputedKind {
    /// Arithmetic over resolvable operands (`a + b`, `x * 2`).
    Arithmetic,
    /// A call to a math function, by name (`Math.round(x)` style).
    MathCall(String),
    /// Anything else the host could not classify.
    Other,
}

/// A computed expression, carried opaquely with its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedExpr {
    pub kind: ComputedKind,
    /// Source text, for diagnostics only.
    pub source: String,
}

/// One segment of a template literal.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    /// A fixed text chunk.
    Text(String),
    /// An embedded expression.
    Expr(ValueRef),
}

/// A value as authored, before resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueRef {
    /// A literal value. `raw` preserves the authored source text (including
    /// quotes) when the host has it, so suggestions can be quote-aware.
    Literal {
        value: LiteralValue,
        raw: Option<String>,
    },
    /// A reference to a local binding by name.
    Identifier(String),
    /// A computed expression.
    Computed(ComputedExpr),
    /// A template literal.
    Template(Vec<TemplatePart>),
}

impl ValueRef {
    /// A string literal.
    pub fn str(value: impl Into<String>) -> Self {
        ValueRef::Literal {
            value: LiteralValue::Str(value.into()),
            raw: None,
        }
    }

    /// A string literal with its authored source text.
    pub fn str_raw(value: impl Into<String>, raw: impl Into<String>) -> Self {
        ValueRef::Literal {
            value: LiteralValue::Str(value.into()),
            raw: Some(raw.into()),
        }
    }

    /// A numeric literal.
    pub fn num(value: f64) -> Self {
        ValueRef::Literal {
            value: LiteralValue::Num(value),
            raw: None,
        }
    }

    /// The `null` literal.
    pub fn null() -> Self {
        ValueRef::Literal {
            value: LiteralValue::Null,
            raw: None,
        }
    }

    /// An identifier reference.
    pub fn ident(name: impl Into<String>) -> Self {
        ValueRef::Identifier(name.into())
    }

    /// The authored source text, if the host supplied it.
    pub fn raw(&self) -> Option<&str> {
        match self {
            ValueRef::Literal { raw, .. } => raw.as_deref(),
            _ => None,
        }
    }
}
