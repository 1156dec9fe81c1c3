use crate::{extract_der, pem_to_der, PemError};

/// `SEQUENCE { INTEGER 5, PrintableString "hi" }`, also used by the walker
/// tests.
const DER: &[u8] = &[0x30, 0x07, 0x02, 0x01, 0x05, 0x13, 0x02, b'h', b'i'];

const PEM: &str = "-----BEGIN CERTIFICATE-----\nMAcCAQUTAmhp\n-----END CERTIFICATE-----\n";

#[test]
fn pem_decodes_to_der() {
    assert_eq!(pem_to_der(PEM.as_bytes()).unwrap(), DER);
}

#[test]
fn body_may_span_multiple_lines() {
    let pem = "-----BEGIN CERTIFICATE-----\r\nMAcCAQ\r\nUTAmhp\r\n-----END CERTIFICATE-----\r\n";
    assert_eq!(pem_to_der(pem.as_bytes()).unwrap(), DER);
}

#[test]
fn extract_der_passes_raw_der_through() {
    assert_eq!(extract_der(DER).unwrap(), DER);
    assert_eq!(extract_der(PEM.as_bytes()).unwrap(), DER);
}

#[test]
fn missing_begin_marker_is_rejected() {
    assert_eq!(
        pem_to_der(b"MAcCAQUTAmhp\n"),
        Err(PemError::MissingArmor)
    );
}

#[test]
fn missing_end_marker_is_rejected() {
    assert_eq!(
        pem_to_der(b"-----BEGIN CERTIFICATE-----\nMAcCAQUTAmhp\n"),
        Err(PemError::TruncatedArmor)
    );
}

#[test]
fn invalid_base64_is_rejected() {
    let pem = "-----BEGIN CERTIFICATE-----\n!!!!\n-----END CERTIFICATE-----\n";
    assert!(matches!(
        pem_to_der(pem.as_bytes()),
        Err(PemError::Base64(_))
    ));
}

#[test]
fn non_text_input_is_rejected() {
    assert_eq!(pem_to_der(&[0xff, 0xfe, 0x00]), Err(PemError::NotText));
}
