//! One-call encryption and decryption entry points.
//!
//! Each algorithm gets an encrypt/decrypt pair over plain byte slices. The
//! key width is part of the signature, the IV is optional (omitting it
//! degrades [CBC](crate::Cbc) to [ECB](crate::Ecb)), and the final flag
//! selects PKCS#7 padding. The caller's IV is only read; the running chain
//! value lives inside the mode.
//!
//! These functions are conveniences over the trait machinery; anything they
//! can do can also be spelled out with [`Cbc`], [`Ecb`], and the cipher
//! types directly.

use {
    crate::{
        Aes128,
        Aes192,
        Aes256,
        BadPadding,
        BlockCipher,
        Cbc,
        CipherDecrypt,
        CipherEncrypt,
        Ciphertext,
        DecryptError,
        Des,
        Ecb,
        Key,
        NoPadding,
        NotAligned,
        Pkcs7,
        Plaintext,
        TripleDes,
    },
    std::{error, fmt},
};

/// Failure of a facade encryption or decryption call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// The input was empty.
    EmptyInput,
    /// The input length is not a multiple of the cipher block size and no
    /// padding was requested.
    NotAligned,
    /// The decrypted data does not end in valid padding.
    BadPadding,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("input is empty"),
            Self::NotAligned => {
                f.write_str("input length is not a multiple of the block size")
            }
            Self::BadPadding => f.write_str("invalid padding"),
        }
    }
}

impl error::Error for CipherError {}

impl From<BadPadding> for CipherError {
    fn from(_: BadPadding) -> Self {
        Self::BadPadding
    }
}

impl From<NotAligned> for CipherError {
    fn from(_: NotAligned) -> Self {
        Self::NotAligned
    }
}

impl<E: Into<CipherError>> From<DecryptError<E>> for CipherError {
    fn from(e: DecryptError<E>) -> Self {
        match e {
            DecryptError::NotAligned => Self::NotAligned,
            DecryptError::Padding(e) => e.into(),
        }
    }
}

/// DES-CBC encryption; ECB when `iv` is omitted.
pub fn des_encrypt(
    plaintext: &[u8],
    key: &[u8; 8],
    iv: Option<&[u8; 8]>,
    pad: bool,
) -> Result<Vec<u8>, CipherError> {
    encrypt_blocks(Des::default(), plaintext, *key, iv.copied(), pad)
}

/// DES-CBC decryption; ECB when `iv` is omitted.
pub fn des_decrypt(
    ciphertext: &[u8],
    key: &[u8; 8],
    iv: Option<&[u8; 8]>,
    padded: bool,
) -> Result<Vec<u8>, CipherError> {
    decrypt_blocks(Des::default(), ciphertext, *key, iv.copied(), padded)
}

/// Triple-DES-CBC encryption under three independent subkeys; ECB when `iv`
/// is omitted.
pub fn triple_des_encrypt(
    plaintext: &[u8],
    key: &[u8; 24],
    iv: Option<&[u8; 8]>,
    pad: bool,
) -> Result<Vec<u8>, CipherError> {
    encrypt_blocks(TripleDes::default(), plaintext, *key, iv.copied(), pad)
}

/// Triple-DES-CBC decryption; ECB when `iv` is omitted.
pub fn triple_des_decrypt(
    ciphertext: &[u8],
    key: &[u8; 24],
    iv: Option<&[u8; 8]>,
    padded: bool,
) -> Result<Vec<u8>, CipherError> {
    decrypt_blocks(TripleDes::default(), ciphertext, *key, iv.copied(), padded)
}

/// AES-128-CBC encryption; ECB when `iv` is omitted.
pub fn aes128_encrypt(
    plaintext: &[u8],
    key: &[u8; 16],
    iv: Option<&[u8; 16]>,
    pad: bool,
) -> Result<Vec<u8>, CipherError> {
    encrypt_blocks(Aes128::default(), plaintext, *key, iv.copied(), pad)
}

/// AES-128-CBC decryption; ECB when `iv` is omitted.
pub fn aes128_decrypt(
    ciphertext: &[u8],
    key: &[u8; 16],
    iv: Option<&[u8; 16]>,
    padded: bool,
) -> Result<Vec<u8>, CipherError> {
    decrypt_blocks(Aes128::default(), ciphertext, *key, iv.copied(), padded)
}

/// AES-192-CBC encryption; ECB when `iv` is omitted.
pub fn aes192_encrypt(
    plaintext: &[u8],
    key: &[u8; 24],
    iv: Option<&[u8; 16]>,
    pad: bool,
) -> Result<Vec<u8>, CipherError> {
    encrypt_blocks(Aes192::default(), plaintext, *key, iv.copied(), pad)
}

/// AES-192-CBC decryption; ECB when `iv` is omitted.
pub fn aes192_decrypt(
    ciphertext: &[u8],
    key: &[u8; 24],
    iv: Option<&[u8; 16]>,
    padded: bool,
) -> Result<Vec<u8>, CipherError> {
    decrypt_blocks(Aes192::default(), ciphertext, *key, iv.copied(), padded)
}

/// AES-256-CBC encryption; ECB when `iv` is omitted.
pub fn aes256_encrypt(
    plaintext: &[u8],
    key: &[u8; 32],
    iv: Option<&[u8; 16]>,
    pad: bool,
) -> Result<Vec<u8>, CipherError> {
    encrypt_blocks(Aes256::default(), plaintext, *key, iv.copied(), pad)
}

/// AES-256-CBC decryption; ECB when `iv` is omitted.
pub fn aes256_decrypt(
    ciphertext: &[u8],
    key: &[u8; 32],
    iv: Option<&[u8; 16]>,
    padded: bool,
) -> Result<Vec<u8>, CipherError> {
    decrypt_blocks(Aes256::default(), ciphertext, *key, iv.copied(), padded)
}

fn encrypt_blocks<C: BlockCipher>(
    cipher: C,
    plaintext: &[u8],
    key: C::Key,
    iv: Option<C::Block>,
    pad: bool,
) -> Result<Vec<u8>, CipherError> {
    if plaintext.is_empty() {
        return Err(CipherError::EmptyInput);
    }
    let data = Plaintext(plaintext.to_vec());
    let key = Key(key);
    let result = match (iv, pad) {
        (Some(iv), true) => Cbc::new(cipher, Pkcs7, iv)
            .encrypt(data, key)
            .map_err(CipherError::from)?,
        (Some(iv), false) => Cbc::new(cipher, NoPadding, iv)
            .encrypt(data, key)
            .map_err(CipherError::from)?,
        (None, true) => Ecb::new(cipher, Pkcs7)
            .encrypt(data, key)
            .map_err(CipherError::from)?,
        (None, false) => Ecb::new(cipher, NoPadding)
            .encrypt(data, key)
            .map_err(CipherError::from)?,
    };
    Ok(result.0)
}

fn decrypt_blocks<C: BlockCipher>(
    cipher: C,
    ciphertext: &[u8],
    key: C::Key,
    iv: Option<C::Block>,
    padded: bool,
) -> Result<Vec<u8>, CipherError> {
    if ciphertext.is_empty() {
        return Err(CipherError::EmptyInput);
    }
    let data = Ciphertext(ciphertext.to_vec());
    let key = Key(key);
    let result = match (iv, padded) {
        (Some(iv), true) => Cbc::new(cipher, Pkcs7, iv)
            .decrypt(data, key)
            .map_err(CipherError::from)?,
        (Some(iv), false) => Cbc::new(cipher, NoPadding, iv)
            .decrypt(data, key)
            .map_err(CipherError::from)?,
        (None, true) => Ecb::new(cipher, Pkcs7)
            .decrypt(data, key)
            .map_err(CipherError::from)?,
        (None, false) => Ecb::new(cipher, NoPadding)
            .decrypt(data, key)
            .map_err(CipherError::from)?,
    };
    Ok(result.0)
}
