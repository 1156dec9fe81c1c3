use crate::{Ciphertext, Key, Plaintext};

mod api;
mod block;

pub use {
    api::{
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
    block::{
        aes,
        des,
        Aes128,
        Aes192,
        Aes256,
        BadPadding,
        BlockCipher,
        BlockDecrypt,
        BlockEncrypt,
        BlockMode,
        Cbc,
        DecryptError,
        Des,
        Ecb,
        NoPadding,
        NotAligned,
        Padding,
        Pkcs7,
        TripleDes,
    },
};

/// A cipher encrypts and decrypts data of arbitrary length under a key.
///
/// Note that a [block cipher](BlockCipher) alone does not fulfill this
/// definition, because it can only handle a single block of data. A block
/// cipher becomes a cipher when driven by a [block mode](BlockMode).
pub trait Cipher:
    CipherEncrypt<EncryptionKey = Self::Key> + CipherDecrypt<DecryptionKey = Self::Key>
{
    type Key;
}

/// The encryption half of a [cipher](Cipher).
pub trait CipherEncrypt {
    type EncryptionErr;
    type EncryptionKey;

    /// Encrypt the plaintext.
    fn encrypt(
        &self,
        data: Plaintext<Vec<u8>>,
        key: Key<Self::EncryptionKey>,
    ) -> Result<Ciphertext<Vec<u8>>, Self::EncryptionErr>;
}

/// The decryption half of a [cipher](Cipher).
pub trait CipherDecrypt {
    type DecryptionErr;
    type DecryptionKey;

    /// Decrypt the ciphertext. This operation can fail, for example, if the
    /// ciphertext was not created by this cipher.
    fn decrypt(
        &self,
        data: Ciphertext<Vec<u8>>,
        key: Key<Self::DecryptionKey>,
    ) -> Result<Plaintext<Vec<u8>>, Self::DecryptionErr>;
}
