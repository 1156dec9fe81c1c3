use crate::{Bytes, Ciphertext, Key, Plaintext};

pub mod aes;
pub mod des;
mod modes;
mod padding;

pub use {
    aes::{Aes128, Aes192, Aes256},
    des::{Des, TripleDes},
    modes::{BlockMode, Cbc, DecryptError, Ecb},
    padding::{BadPadding, NoPadding, NotAligned, Padding, Pkcs7},
};

/// A block cipher encrypts and decrypts data in blocks of fixed size.
///
/// Note that a block cipher alone does not fulfill the definition of a
/// [cipher](crate::Cipher), because it can't handle inputs of arbitrary
/// length. To be a cipher, a block cipher must be used with a
/// [block mode](BlockMode).
pub trait BlockCipher:
    BlockEncrypt<EncryptionBlock = Self::Block, EncryptionKey = Self::Key>
    + BlockDecrypt<DecryptionBlock = Self::Block, DecryptionKey = Self::Key>
{
    type Block: Bytes;
    type Key: Bytes;
}

/// The encryption half of a [block cipher](BlockCipher).
pub trait BlockEncrypt {
    type EncryptionBlock;
    type EncryptionKey;

    /// Encrypt a single block of plaintext.
    fn encrypt(
        &self,
        data: Plaintext<Self::EncryptionBlock>,
        key: Key<Self::EncryptionKey>,
    ) -> Ciphertext<Self::EncryptionBlock>;
}

/// The decryption half of a [block cipher](BlockCipher).
pub trait BlockDecrypt {
    type DecryptionBlock;
    type DecryptionKey;

    /// Decrypt a single block of ciphertext.
    fn decrypt(
        &self,
        data: Ciphertext<Self::DecryptionBlock>,
        key: Key<Self::DecryptionKey>,
    ) -> Plaintext<Self::DecryptionBlock>;
}
