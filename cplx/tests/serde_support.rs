#![cfg(feature = "serde")]

use cplx::{ComplexMatrix, ComplexNumber};

#[test]
fn matrix_serializes_as_nested_rows() {
    let m = ComplexMatrix::diagonal(&[ComplexNumber::new(1.0, -1.0), ComplexNumber::I]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(
        json,
        r#"[[{"real":1.0,"imaginary":-1.0},{"real":0.0,"imaginary":0.0}],[{"real":0.0,"imaginary":0.0},{"real":0.0,"imaginary":1.0}]]"#
    );
    let back: ComplexMatrix = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn ragged_json_is_rejected() {
    let json = r#"[[{"real":1.0,"imaginary":0.0}],[]]"#;
    assert!(serde_json::from_str::<ComplexMatrix>(json).is_err());
}
