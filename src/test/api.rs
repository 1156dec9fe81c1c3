//! Tests for the facade entry points, covering the dispatch over IV
//! presence and padding as well as the interoperability vectors end to end.

use {
    crate::{
        aes128_decrypt,
        aes128_encrypt,
        aes192_decrypt,
        aes192_encrypt,
        aes256_decrypt,
        aes256_encrypt,
        des_decrypt,
        des_encrypt,
        triple_des_decrypt,
        triple_des_encrypt,
        CipherError,
    },
    rand::Rng,
};

const PLAINTEXT: &[u8] = b"abcdefghijklmnop";
const DES_KEY: [u8; 8] = *b"password";
const TRIPLE_KEY: [u8; 24] = *b"twentyfourcharacterinput";
const IV: [u8; 8] = *b"initialz";

#[test]
fn des_vectors() {
    let cbc = des_encrypt(PLAINTEXT, &DES_KEY, Some(&IV), false).unwrap();
    assert_eq!(cbc, hex::decode("f1f2e97256b5b2d0ff69d49969d17309").unwrap());
    assert_eq!(
        des_decrypt(&cbc, &DES_KEY, Some(&IV), false).unwrap(),
        PLAINTEXT
    );

    let ecb = des_encrypt(PLAINTEXT, &DES_KEY, None, false).unwrap();
    assert_eq!(ecb, hex::decode("160b3b0eea65624975c9f667139a0d2e").unwrap());
    assert_eq!(des_decrypt(&ecb, &DES_KEY, None, false).unwrap(), PLAINTEXT);
}

#[test]
fn triple_des_vectors() {
    let cbc = triple_des_encrypt(PLAINTEXT, &TRIPLE_KEY, Some(&IV), false).unwrap();
    assert_eq!(cbc, hex::decode("a475a0c22a11caa4e929476bc7b3989e").unwrap());
    assert_eq!(
        triple_des_decrypt(&cbc, &TRIPLE_KEY, Some(&IV), false).unwrap(),
        PLAINTEXT
    );

    let ecb = triple_des_encrypt(PLAINTEXT, &TRIPLE_KEY, None, false).unwrap();
    assert_eq!(ecb, hex::decode("c87ce07c0bf0d36bc61c15dbdc251c3f").unwrap());
    assert_eq!(
        triple_des_decrypt(&ecb, &TRIPLE_KEY, None, false).unwrap(),
        PLAINTEXT
    );
}

/// Padding round-trip at lengths straddling the block boundary, for every
/// algorithm and both chaining choices.
#[test]
fn padded_round_trips() {
    let des_key = DES_KEY;
    let triple_key = TRIPLE_KEY;
    let aes128_key = [0x42; 16];
    let aes192_key = [0x42; 24];
    let aes256_key = [0x42; 32];
    let iv8 = IV;
    let iv16 = [0x24; 16];

    for len in [1, 7, 8, 9, 15, 16, 17, 33] {
        let data: Vec<u8> = (0..len).map(|_| rand::thread_rng().gen()).collect();

        let c = des_encrypt(&data, &des_key, Some(&iv8), true).unwrap();
        assert_eq!(des_decrypt(&c, &des_key, Some(&iv8), true).unwrap(), data);
        let c = des_encrypt(&data, &des_key, None, true).unwrap();
        assert_eq!(des_decrypt(&c, &des_key, None, true).unwrap(), data);

        let c = triple_des_encrypt(&data, &triple_key, Some(&iv8), true).unwrap();
        assert_eq!(
            triple_des_decrypt(&c, &triple_key, Some(&iv8), true).unwrap(),
            data
        );

        let c = aes128_encrypt(&data, &aes128_key, Some(&iv16), true).unwrap();
        assert_eq!(
            aes128_decrypt(&c, &aes128_key, Some(&iv16), true).unwrap(),
            data
        );

        let c = aes192_encrypt(&data, &aes192_key, Some(&iv16), true).unwrap();
        assert_eq!(
            aes192_decrypt(&c, &aes192_key, Some(&iv16), true).unwrap(),
            data
        );

        let c = aes256_encrypt(&data, &aes256_key, None, true).unwrap();
        assert_eq!(aes256_decrypt(&c, &aes256_key, None, true).unwrap(), data);
    }
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(
        des_encrypt(b"", &DES_KEY, Some(&IV), true),
        Err(CipherError::EmptyInput)
    );
    assert_eq!(
        aes256_decrypt(b"", &[0; 32], None, false),
        Err(CipherError::EmptyInput)
    );
}

#[test]
fn unaligned_input_without_padding_is_rejected() {
    assert_eq!(
        des_encrypt(b"abc", &DES_KEY, Some(&IV), false),
        Err(CipherError::NotAligned)
    );
    assert_eq!(
        aes128_decrypt(&[0; 17], &[0; 16], None, false),
        Err(CipherError::NotAligned)
    );
}

/// Decrypting with the wrong key must not return the plaintext, and with
/// padding enabled it overwhelmingly fails outright.
#[test]
fn wrong_key_does_not_round_trip() {
    let ciphertext = des_encrypt(PLAINTEXT, &DES_KEY, Some(&IV), false).unwrap();
    let decrypted = des_decrypt(&ciphertext, b"passw0rd", Some(&IV), false).unwrap();
    assert_ne!(decrypted, PLAINTEXT);
}

/// The caller's IV must not be consumed or altered by a call.
#[test]
fn iv_is_left_untouched() {
    let iv = IV;
    let first = des_encrypt(PLAINTEXT, &DES_KEY, Some(&iv), false).unwrap();
    let second = des_encrypt(PLAINTEXT, &DES_KEY, Some(&iv), false).unwrap();
    assert_eq!(first, second);
}
