//! Host-supplied configuration, consumed once at engine construction.

/// A value allowed by a property-limit override.
#[derive(Debug, Clone, PartialEq)]
pub enum LimitValue {
    /// An exact string value.
    Str(String),
    /// An exact numeric value.
    Num(f64),
}

impl From<&str> for LimitValue {
    fn from(s: &str) -> Self {
        LimitValue::Str(s.to_string())
    }
}

impl From<f64> for LimitValue {
    fn from(n: f64) -> Self {
        LimitValue::Num(n)
    }
}

/// An override restricting the accepted values of every property matching a
/// glob pattern. The CSS-wide keywords remain accepted regardless.
#[derive(Debug, Clone, PartialEq)]
pub struct PropLimit {
    /// Glob pattern over camelCase property names (`grid*`, `overflow?`).
    pub pattern: String,
    /// The values the matched properties may take.
    pub allowed: Vec<LimitValue>,
    /// Message shown when a value falls outside the allowlist.
    pub reason: String,
}

impl PropLimit {
    /// Create a limit from a pattern, allowed values, and a reason.
    pub fn new(
        pattern: impl Into<String>,
        allowed: Vec<LimitValue>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            allowed,
            reason: reason.into(),
        }
    }
}

/// Engine configuration, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Whether `!important` suffixes are accepted and carried through
    /// shorthand decomposition.
    pub allow_important: bool,
    /// Whether decomposition emits logical (`*InlineStart`/`*InlineEnd`)
    /// longhands instead of physical (`*Left`/`*Right`) ones.
    pub prefer_inline: bool,
    /// Per-property value allowlists merged into the grammar table.
    pub prop_limits: Vec<PropLimit>,
}
