//! Instruction definitions as supplied by the caller.
//!
//! A definition is unvalidated input: a mnemonic, a format tag, a fixed-bit
//! assignment keyed by field name, and the descriptive payload. Definitions can
//! be assembled with the builder methods or deserialized from JSON:
//!
//! ```json
//! {
//!   "mnemonic": "ADD",
//!   "format": "R",
//!   "category": "Arithmetic",
//!   "fixed": { "funct7": "0000000", "funct3": "000", "opcode": "0110011" },
//!   "syntax": "ADD rd, rs1, rs2",
//!   "description": "Adds two registers",
//!   "operation": ["rd = rs1 + rs2"]
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::encoding::{FieldLiteral, FixedBits, InstructionFormat};

/// Instruction grouping used by reference pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Integer addition and subtraction.
    Arithmetic,
    /// Bitwise AND / OR / XOR.
    Logical,
    /// Logical and arithmetic shifts.
    Shift,
    /// Set-less-than comparisons.
    Compare,
    /// Memory loads.
    Load,
    /// Memory stores.
    Store,
    /// Conditional branches.
    Branch,
    /// Unconditional jumps.
    Jump,
    /// Upper-immediate construction (`LUI`, `AUIPC`).
    UpperImmediate,
    /// Environment calls, breakpoints, and fences.
    System,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Human-readable payload of an instruction. Opaque to the encoding model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Documentation {
    /// Assembly syntax, e.g. `ADD rd, rs1, rs2`.
    pub syntax: String,
    /// One-line summary.
    pub description: String,
    /// Ordered operation steps.
    pub operation: Vec<String>,
    /// Usage notes.
    pub usage: Vec<String>,
    /// Assembly examples.
    pub examples: Vec<String>,
    /// Exceptions the instruction can raise, as prose.
    pub exceptions: String,
    /// Typical use cases.
    pub use_cases: Vec<String>,
    /// Free-form remark.
    pub note: String,
}

impl Documentation {
    /// Starts a payload with its syntax line and summary.
    pub fn new(syntax: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            syntax: syntax.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Appends an operation step.
    #[must_use]
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.operation.push(step.into());
        self
    }

    /// Appends a usage note.
    #[must_use]
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage.push(usage.into());
        self
    }

    /// Appends an example.
    #[must_use]
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Sets the exceptions text.
    #[must_use]
    pub fn exceptions(mut self, exceptions: impl Into<String>) -> Self {
        self.exceptions = exceptions.into();
        self
    }

    /// Appends a use case.
    #[must_use]
    pub fn use_case(mut self, use_case: impl Into<String>) -> Self {
        self.use_cases.push(use_case.into());
        self
    }

    /// Sets the note.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Names of required entries that are blank: syntax, description, and the
    /// operation steps.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.syntax.trim().is_empty() {
            missing.push("syntax");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.operation.iter().all(|s| s.trim().is_empty()) {
            missing.push("operation");
        }
        missing
    }
}

/// One unvalidated instruction definition.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct InstructionDef {
    /// Instruction name; compared case-insensitively.
    #[serde(alias = "name")]
    pub mnemonic: String,
    /// Layout class.
    pub format: InstructionFormat,
    /// Optional grouping.
    #[serde(default)]
    pub category: Option<Category>,
    /// Literal values of the identifying fields.
    #[serde(default)]
    pub fixed: FixedBits,
    /// Descriptive payload.
    #[serde(flatten)]
    pub docs: Documentation,
}

impl InstructionDef {
    /// Starts a definition with no fixed bits and an empty payload.
    pub fn new(mnemonic: impl Into<String>, format: InstructionFormat) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            format,
            category: None,
            fixed: FixedBits::new(),
            docs: Documentation::default(),
        }
    }

    /// Assigns a literal to `field`, replacing any earlier assignment.
    #[must_use]
    pub fn fixed(mut self, field: impl Into<String>, value: impl Into<FieldLiteral>) -> Self {
        let _ = self.fixed.insert(field.into(), value.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the descriptive payload.
    #[must_use]
    pub fn docs(mut self, docs: Documentation) -> Self {
        self.docs = docs;
        self
    }
}

/// A complete definition set: catalog metadata plus its instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogDefinition {
    /// Catalog title.
    #[serde(default)]
    pub name: String,
    /// Catalog summary.
    #[serde(default)]
    pub description: String,
    /// Instruction definitions in presentation order.
    pub instructions: Vec<InstructionDef>,
}

impl CatalogDefinition {
    /// Parses a definition set from JSON.
    ///
    /// # Errors
    ///
    /// Returns the parser error for malformed JSON, unknown formats, or
    /// malformed bit literals.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
