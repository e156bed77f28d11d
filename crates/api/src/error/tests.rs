use super::*;

#[test]
fn test_with_context_keeps_lengths() {
    let err = Error::InvalidLength {
        context: "inner",
        expected: 65,
        actual: 64,
    }
    .with_context("G1 decode");

    assert_eq!(
        err,
        Error::InvalidLength {
            context: "G1 decode",
            expected: 65,
            actual: 64,
        }
    );
}

#[test]
fn test_result_ext_context() {
    let r: core::result::Result<(), Error> = Err(Error::NonResidue { context: "sqrt" });
    let e = r.with_context("decompress").unwrap_err();
    assert_eq!(e, Error::NonResidue { context: "decompress" });
}

#[test]
fn test_rejected_input_classification() {
    assert!(Error::InvalidLength { context: "x", expected: 1, actual: 2 }.is_rejected_input());
    assert!(!Error::DegeneratePairing { context: "ate" }.is_rejected_input());
    assert!(!Error::NonResidue { context: "sqrt" }.is_rejected_input());
}

#[cfg(feature = "std")]
#[test]
fn test_display_with_message() {
    let e = Error::InvalidPoint {
        context: "G2 decode",
        message: String::new(),
    }
    .with_message("not on twist");
    assert_eq!(e.to_string(), "Invalid point: G2 decode: not on twist");

    let d = Error::DegeneratePairing { context: "pairing" };
    assert_eq!(d.to_string(), "pairing: pairing input is the point at infinity");
}
