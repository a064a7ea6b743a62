//! Fuzzy query matcher with Cyrillic/Latin awareness.
//!
//! Decides whether a candidate string contains a short user-typed query,
//! with configurable leniency:
//!
//! - `strict`: matched characters must be contiguous; otherwise arbitrary
//!   text may sit between them
//! - `ignorecase`: Unicode case-insensitive matching
//! - `translit`: query characters also match their Cyrillic/Latin
//!   transliteration counterparts (`авария` finds `avarija`)
//! - `multi`: query characters also match what the same physical key
//!   produces under the other keyboard layout (`Lbcrjntrf` finds
//!   `Дискотека`)
//! - `smart`: transliterates the layout-mapped character too, for queries
//!   typed under both a wrong layout and a wrong script
//!
//! # Design
//!
//! - The query and options compile into one regex of escaped literal
//!   alternatives; recompilation is lazy, driven by a dirty flag that every
//!   mutation clears.
//! - An empty query compiles to a pattern that matches nothing.
//! - The substitution tables are process-wide immutable data; characters
//!   without an entry fall back to themselves, so arbitrary Unicode input
//!   never fails to compile.
//!
//! ```
//! use multifind::{Matcher, MatcherConfig};
//!
//! let mut matcher = Matcher::with_config("авария", MatcherConfig {
//!     translit: true,
//!     ..Default::default()
//! });
//! assert!(matcher.test("Diskoteka avarija"));
//! assert!(matcher.test("Дискотека авария"));
//! ```

mod config;
mod error;
mod matcher;
mod pattern;
mod tables;

pub use config::MatcherConfig;
pub use error::{Error, Result};
pub use matcher::Matcher;
pub use tables::{LAYOUT, TRANSLIT};
