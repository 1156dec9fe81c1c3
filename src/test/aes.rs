//! Known-answer tests for the AES state engine, taken from Appendix C of
//! FIPS 197 and cross-checked CBC vectors from an independent software AES.

use crate::{
    Aes128,
    Aes192,
    Aes256,
    BlockDecrypt,
    BlockEncrypt,
    Cbc,
    CipherDecrypt,
    CipherEncrypt,
    Ciphertext,
    Key,
    NoPadding,
    Pkcs7,
    Plaintext,
};

/// The example plaintext used throughout Appendix C.
const FIPS_PLAINTEXT: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];

#[test]
fn fips_example_aes128() {
    let key: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    let encrypted = Aes128::default().encrypt(Plaintext(FIPS_PLAINTEXT), Key(key));
    assert_eq!(
        encrypted.0.to_vec(),
        hex::decode("69c4e0d86a7b0430d8cdb78070b4c55a").unwrap()
    );
    let decrypted = Aes128::default().decrypt(encrypted, Key(key));
    assert_eq!(decrypted.0, FIPS_PLAINTEXT);
}

#[test]
fn fips_example_aes192() {
    let key: [u8; 24] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17,
    ];
    let encrypted = Aes192::default().encrypt(Plaintext(FIPS_PLAINTEXT), Key(key));
    assert_eq!(
        encrypted.0.to_vec(),
        hex::decode("dda97ca4864cdfe06eaf70a0ec0d7191").unwrap()
    );
    let decrypted = Aes192::default().decrypt(encrypted, Key(key));
    assert_eq!(decrypted.0, FIPS_PLAINTEXT);
}

#[test]
fn fips_example_aes256() {
    let key: [u8; 32] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d,
        0x1e, 0x1f,
    ];
    let encrypted = Aes256::default().encrypt(Plaintext(FIPS_PLAINTEXT), Key(key));
    assert_eq!(
        encrypted.0.to_vec(),
        hex::decode("8ea2b7ca516745bfeafc49904b496089").unwrap()
    );
    let decrypted = Aes256::default().decrypt(encrypted, Key(key));
    assert_eq!(decrypted.0, FIPS_PLAINTEXT);
}

#[test]
fn aes128_cbc_vector() {
    let key: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    let iv: [u8; 16] = [
        0xfe, 0x5b, 0xf0, 0x4a, 0x23, 0x1c, 0xa7, 0x79, 0x5a, 0xee, 0x7e, 0xc2, 0xe4, 0x3b, 0x14,
        0x4a,
    ];
    let cip = Cbc::new(Aes128::default(), NoPadding, iv);
    let ciphertext = cip.encrypt(Plaintext(vec![0xff; 16]), Key(key)).unwrap();
    assert_eq!(
        ciphertext.0,
        hex::decode("f83b595b490a7464eea1644afb31b52e").unwrap()
    );
    let plaintext = cip.decrypt(ciphertext, Key(key)).unwrap();
    assert_eq!(plaintext.0, vec![0xff; 16]);
}

#[test]
fn aes128_cbc_vector_with_padding() {
    let key: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    let iv: [u8; 16] = [
        0xfe, 0x5b, 0xf0, 0x4a, 0x23, 0x1c, 0xa7, 0x79, 0x5a, 0xee, 0x7e, 0xc2, 0xe4, 0x3b, 0x14,
        0x4a,
    ];
    let data: Vec<u8> = (0x01..=0x14).collect();
    let cip = Cbc::new(Aes128::default(), Pkcs7, iv);
    let ciphertext = cip.encrypt(Plaintext(data.clone()), Key(key)).unwrap();
    assert_eq!(
        ciphertext.0,
        hex::decode("42649c72f60ff91448db75862fe2788514e8a5e69270f2c37a62cf7006187aea")
            .unwrap()
    );
    let plaintext = cip
        .decrypt(Ciphertext(ciphertext.0), Key(key))
        .unwrap();
    assert_eq!(plaintext.0, data);
}

/// Flipping one byte at the end of an AES-256 key must change the
/// ciphertext; this exercises the second half of the key schedule.
#[test]
fn aes256_uses_the_whole_key() {
    let mut key = [0u8; 32];
    let first = Aes256::default().encrypt(Plaintext(FIPS_PLAINTEXT), Key(key));
    key[31] = 1;
    let second = Aes256::default().encrypt(Plaintext(FIPS_PLAINTEXT), Key(key));
    assert_ne!(first.0, second.0);
}
