//! Rule-combinator grammar system.
//!
//! Small composable predicates ([`Rule`]) define per-property value
//! grammars; [`PropertyTable`] maps every known property to one. The fuzzy
//! suggestion engine and the glob matcher used by prop-limit overrides live
//! here too.

pub mod glob;
pub mod properties;
pub mod rule;
pub mod suggest;

pub use properties::{PropertyTable, Replacement, global_keywords_rule, replacement_for};
pub use rule::{Diagnostic, Rule, Suggestion, ValidationResult, check_rule};
pub use suggest::{bounded_distance, closest_match, quote_aware_replacement};
