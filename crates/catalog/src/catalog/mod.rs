//! Instruction catalog.
//!
//! The catalog owns every validated instruction record and answers lookups.
//! It is built once from a definition set, rejecting the whole set if any
//! definition is defective, and is read-only afterwards:
//! 1. **Build:** Per-definition encoding and documentation checks, then
//!    collection checks (unique mnemonics, no ambiguous encodings).
//! 2. **Queries:** By mnemonic, by format, by category, and by raw word.
//! 3. **Sharing:** [`SharedCatalog`] swaps whole catalogs for hot reload.

/// Definition records consumed by the build step.
pub mod definition;

/// Validated instruction records.
pub mod instruction;

/// Shared handle and definition sources.
pub mod shared;

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

pub use definition::{Category, CatalogDefinition, Documentation, InstructionDef};
pub use instruction::Instruction;
pub use shared::{DefinitionSource, JsonSource, SharedCatalog};

use crate::common::constants::OPCODE_MASK;
use crate::common::{BuildError, CatalogError, LoadError};
use crate::config::{AmbiguityScope, BuildConfig};
use crate::encoding::{self, InstructionFormat};

/// An immutable, validated set of instructions.
///
/// Records are stored by value in insertion order and indexed by position.
#[derive(Clone, Debug)]
pub struct Catalog {
    name: String,
    description: String,
    instructions: Vec<Instruction>,
    by_mnemonic: HashMap<String, usize>,
    by_opcode: HashMap<u32, Vec<usize>>,
}

/// Serialized form of a catalog.
#[derive(Serialize)]
struct CatalogView<'a> {
    name: &'a str,
    description: &'a str,
    instructions: &'a [Instruction],
}

impl Catalog {
    /// Builds a catalog with the default [`BuildConfig`].
    ///
    /// # Errors
    ///
    /// Returns every defect found; see [`Catalog::build_with`].
    pub fn build<I>(definitions: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = InstructionDef>,
    {
        Self::build_with(definitions, &BuildConfig::default())
    }

    /// Builds a catalog, validating every definition and the set as a whole.
    ///
    /// Validation does not stop at the first defect. The returned error lists
    /// every [`CatalogError::InvalidEncoding`],
    /// [`CatalogError::MissingDocumentation`],
    /// [`CatalogError::DuplicateMnemonic`], and
    /// [`CatalogError::AmbiguousEncoding`] in definition order.
    ///
    /// Each definition reports its mnemonic defect first, then documentation
    /// and encoding defects. Entries with a blank mnemonic are labelled
    /// `#<index>`. Entries rejected for their mnemonic take no part in the
    /// ambiguity check.
    ///
    /// # Errors
    ///
    /// [`BuildError`] when at least one defect is found.
    pub fn build_with<I>(definitions: I, config: &BuildConfig) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = InstructionDef>,
    {
        let definitions: Vec<InstructionDef> = definitions.into_iter().collect();
        debug!(
            definitions = definitions.len(),
            "building instruction catalog"
        );

        let mut errors = Vec::new();
        let mut instructions: Vec<Instruction> = Vec::with_capacity(definitions.len());
        let mut seen = HashSet::with_capacity(definitions.len());

        for (index, def) in definitions.into_iter().enumerate() {
            let mnemonic = def.mnemonic.trim().to_string();
            // Rejected mnemonics still get field checks but never reach the index.
            let accepted = if mnemonic.is_empty() {
                errors.push(CatalogError::EmptyMnemonic(index));
                false
            } else if !seen.insert(mnemonic.to_ascii_uppercase()) {
                errors.push(CatalogError::DuplicateMnemonic(mnemonic.clone()));
                false
            } else {
                true
            };
            let label = if mnemonic.is_empty() {
                format!("#{index}")
            } else {
                mnemonic.clone()
            };

            if config.require_documentation {
                errors.extend(def.docs.missing_required().into_iter().map(|field| {
                    CatalogError::MissingDocumentation {
                        mnemonic: label.clone(),
                        field,
                    }
                }));
            }
            match encoding::resolve_fixed_bits(def.format, &def.fixed) {
                Ok(fixed) if accepted => instructions.push(Instruction::new(
                    mnemonic,
                    def.format,
                    def.category,
                    fixed,
                    def.docs,
                )),
                Ok(_) => {}
                Err(defects) => errors.extend(
                    defects
                        .into_iter()
                        .map(|e| CatalogError::InvalidEncoding(label.clone(), e)),
                ),
            }
        }

        let by_opcode = index_by_opcode(&instructions, config.ambiguity_scope, &mut errors);

        if !errors.is_empty() {
            for error in &errors {
                warn!(%error, "rejected instruction definition");
            }
            return Err(BuildError::new(errors));
        }

        let by_mnemonic = instructions
            .iter()
            .enumerate()
            .map(|(index, instruction)| (instruction.mnemonic().to_ascii_uppercase(), index))
            .collect();

        debug!(
            instructions = instructions.len(),
            "instruction catalog built"
        );
        Ok(Self {
            name: String::new(),
            description: String::new(),
            instructions,
            by_mnemonic,
            by_opcode,
        })
    }

    /// Builds a catalog from a full definition set, keeping its metadata.
    ///
    /// # Errors
    ///
    /// See [`Catalog::build_with`].
    pub fn from_definition(
        definition: CatalogDefinition,
        config: &BuildConfig,
    ) -> Result<Self, BuildError> {
        let mut catalog = Self::build_with(definition.instructions, config)?;
        catalog.name = definition.name;
        catalog.description = definition.description;
        Ok(catalog)
    }

    /// Parses a JSON definition set and builds it with the default config.
    ///
    /// # Errors
    ///
    /// [`LoadError::Parse`] for malformed input, [`LoadError::Build`] for
    /// definitions that fail validation.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let definition = CatalogDefinition::from_json(text)?;
        Ok(Self::from_definition(definition, &BuildConfig::default())?)
    }

    /// Catalog title (empty when built from bare definitions).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Catalog summary.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True for a catalog with no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// All instructions in insertion order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Iterates over all instructions in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Instruction at insertion position `index`.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Case-insensitive mnemonic lookup. Surrounding whitespace is not
    /// ignored.
    pub fn by_mnemonic(&self, mnemonic: &str) -> Option<&Instruction> {
        self.by_mnemonic
            .get(&mnemonic.to_ascii_uppercase())
            .map(|&index| &self.instructions[index])
    }

    /// Instructions of `format`, in insertion order.
    ///
    /// The iterator is lazy and can be cloned to restart it.
    pub fn by_format(
        &self,
        format: InstructionFormat,
    ) -> impl Iterator<Item = &Instruction> + Clone + '_ {
        self.instructions
            .iter()
            .filter(move |instruction| instruction.format() == format)
    }

    /// Instructions in `category`, in insertion order.
    pub fn by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &Instruction> + Clone + '_ {
        self.instructions
            .iter()
            .filter(move |instruction| instruction.category() == Some(category))
    }

    /// Finds the instruction whose fixed bits match `word`.
    ///
    /// Candidates are scanned in insertion order. Every entry fixes its opcode,
    /// so only entries sharing the word's opcode are tested. Returns `None`
    /// for words the catalog does not cover.
    pub fn decode(&self, word: u32) -> Option<&Instruction> {
        self.by_opcode
            .get(&(word & OPCODE_MASK))?
            .iter()
            .map(|&index| &self.instructions[index])
            .find(|instruction| instruction.matches(word))
    }

    /// Serializes the catalog (metadata, fixed fields, template words, and
    /// documentation) as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&CatalogView {
            name: &self.name,
            description: &self.description,
            instructions: &self.instructions,
        })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// Groups instructions by opcode, reporting every pair that some word would
/// match both of.
///
/// Two fixed-bit sets are indistinguishable when they agree on every bit they
/// both fix. Each instruction is compared against the earlier entries of its
/// opcode bucket, so errors come out in definition order.
fn index_by_opcode(
    instructions: &[Instruction],
    scope: AmbiguityScope,
    errors: &mut Vec<CatalogError>,
) -> HashMap<u32, Vec<usize>> {
    let mut by_opcode: HashMap<u32, Vec<usize>> = HashMap::new();
    for (index, instruction) in instructions.iter().enumerate() {
        let bucket = by_opcode
            .entry(instruction.template() & OPCODE_MASK)
            .or_default();
        for &earlier in bucket.iter() {
            let other = &instructions[earlier];
            if scope == AmbiguityScope::SameFormat && other.format() != instruction.format() {
                continue;
            }
            let shared = other.mask() & instruction.mask();
            if (other.template() ^ instruction.template()) & shared == 0 {
                errors.push(CatalogError::AmbiguousEncoding(
                    other.mnemonic().to_string(),
                    instruction.mnemonic().to_string(),
                ));
            }
        }
        bucket.push(index);
    }
    by_opcode
}
