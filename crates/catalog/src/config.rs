//! Catalog build configuration.
//!
//! This module defines the options that control how strictly a definition set
//! is validated. It provides:
//! 1. **Defaults:** Baseline validation settings.
//! 2. **Structures:** `BuildConfig`, deserializable from JSON with per-field defaults.
//! 3. **Enums:** `AmbiguityScope`, selecting which instruction pairs are compared.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    use super::AmbiguityScope;

    /// Syntax, description, and operation steps must be non-empty.
    pub const REQUIRE_DOCUMENTATION: bool = true;

    /// Compare every pair of instructions, regardless of format.
    ///
    /// This is what makes `decode` independent of insertion order.
    pub const AMBIGUITY_SCOPE: AmbiguityScope = AmbiguityScope::AllFormats;
}

/// Which instruction pairs the ambiguity check compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityScope {
    /// Only instructions that share a format.
    SameFormat,
    /// Every pair of instructions.
    #[default]
    AllFormats,
}

/// Validation options for `Catalog::build_with`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    /// Reject definitions whose syntax, description, or operation steps are empty.
    #[serde(default = "BuildConfig::default_require_documentation")]
    pub require_documentation: bool,

    /// Pairs compared by the ambiguity check.
    #[serde(default = "BuildConfig::default_ambiguity_scope")]
    pub ambiguity_scope: AmbiguityScope,
}

impl BuildConfig {
    /// Parses a configuration from JSON; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the parser error for malformed JSON or unknown enum values.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Encoding-only validation: documentation entries may be empty.
    pub fn encodings_only() -> Self {
        Self {
            require_documentation: false,
            ..Self::default()
        }
    }

    fn default_require_documentation() -> bool {
        defaults::REQUIRE_DOCUMENTATION
    }

    fn default_ambiguity_scope() -> AmbiguityScope {
        defaults::AMBIGUITY_SCOPE
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            require_documentation: defaults::REQUIRE_DOCUMENTATION,
            ambiguity_scope: defaults::AMBIGUITY_SCOPE,
        }
    }
}
