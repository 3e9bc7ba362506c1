//! Style declaration validation and shorthand normalization.
//!
//! This crate checks CSS-in-JS style declarations against a fixed property
//! grammar and rewrites shorthand properties into RTL-safe longhands:
//!
//! - **Tokenizer**: splits raw values into top-level parts, depth- and
//!   quote-aware
//! - **Value resolver**: turns symbolic value references into literals
//!   against a per-file [`ResolutionEnv`](value::ResolutionEnv)
//! - **Grammar table**: ~250 properties, each mapped to a composed rule
//!   and unioned with the CSS-wide keywords
//! - **Shorthand decomposer**: per-family expansion (quads, pairs, border
//!   triples, background, font, grid) with a hard `CannotFix` result for
//!   anything ambiguous
//! - **Legacy mapper**: deprecated physical names to logical equivalents
//!
//! # Example
//!
//! ```
//! use stylenorm::prelude::*;
//!
//! let engine = Engine::new(EngineConfig::default())?;
//!
//! let env = ResolutionEnv::new();
//! let result = engine.check_property("display", &ValueRef::str("flex"), &env);
//! assert!(result.is_valid());
//!
//! let expanded = engine.decompose("margin", &LiteralValue::Str("10em 1em".into()));
//! assert_eq!(
//!     expanded.entries().unwrap(),
//!     [
//!         ("marginBlock".to_string(), "10em".to_string()),
//!         ("marginInline".to_string(), "1em".to_string()),
//!     ]
//! );
//! # Ok::<(), stylenorm::Error>(())
//! ```

pub mod config;
pub mod engine;
pub mod grammar;
pub mod legacy;
pub mod shorthand;
pub mod tokenizer;
pub mod value;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{EngineConfig, LimitValue, PropLimit};
    pub use crate::engine::Engine;
    pub use crate::grammar::{Diagnostic, Suggestion, ValidationResult};
    pub use crate::legacy::legacy_name_mapping;
    pub use crate::shorthand::Decomposition;
    pub use crate::tokenizer::{TokenizeOptions, TokenizedValue, tokenize};
    pub use crate::value::{Binding, LiteralValue, ResolutionEnv, ValueRef};
}
