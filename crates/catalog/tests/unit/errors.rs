//! Error rendering and conversion tests.

use pretty_assertions::assert_eq;
use rvref_core::encoding::InstructionFormat;
use rvref_core::{Catalog, CatalogError, EncodingError, LoadError};

use crate::common::harness::r_def;

#[test]
fn encoding_errors_render_field_context() {
    let err = EncodingError::UnknownField {
        format: InstructionFormat::SystemNoArgs,
        field: "rs2".into(),
    };
    assert_eq!(err.to_string(), "format SYSTEM has no field named `rs2`");

    let err = EncodingError::ValueOutOfRange {
        field: "funct3",
        value: 0b10101,
        width: 3,
    };
    assert_eq!(
        err.to_string(),
        "value 0b10101 does not fit in the 3-bit field `funct3`"
    );
}

#[test]
fn invalid_encoding_keeps_its_source() {
    use std::error::Error;

    let err = CatalogError::InvalidEncoding("ADD".into(), EncodingError::MissingOpcode);
    assert_eq!(
        err.to_string(),
        "invalid encoding for `ADD`: fixed bits do not include the opcode field"
    );
    let source = err.source().map(ToString::to_string);
    assert_eq!(
        source.as_deref(),
        Some("fixed bits do not include the opcode field")
    );
}

#[test]
fn build_error_lists_every_defect() {
    let err = Catalog::build(vec![
        r_def("ADD", "0000000", "000", "0110011"),
        r_def("add", "0000000", "000", "0110011"),
    ])
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "catalog has 1 defect(s)\n  - duplicate mnemonic `add`"
    );
    assert_eq!(
        err.clone().into_errors(),
        vec![CatalogError::DuplicateMnemonic("add".into())]
    );

    let load: LoadError = err.into();
    assert!(load.to_string().starts_with("catalog has 1 defect(s)"));
}
