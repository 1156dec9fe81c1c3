use {
    crate::Cipher,
    std::{error, fmt},
};

mod cbc;
mod ecb;

/// A way to execute a [block cipher](crate::BlockCipher) on data of
/// arbitrary length.
///
/// A block cipher can only encrypt or decrypt one block at a time. In order
/// to handle arbitrary amounts of data, there needs to be a way to ensure
/// that the data is a multiple of the block size
/// ([padding](crate::Padding)) and a way to map input blocks of plaintext to
/// output blocks of ciphertext. The "mode of operation" usually refers to
/// the combination of these two requirements.
pub trait BlockMode: Cipher {}

pub use {cbc::Cbc, ecb::Ecb};

/// Failure while decrypting under a [block mode](BlockMode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecryptError<E> {
    /// The ciphertext length is not a multiple of the block size, so it was
    /// not produced by this cipher.
    NotAligned,
    /// The decrypted data ends in invalid padding.
    Padding(E),
}

impl<E: fmt::Display> fmt::Display for DecryptError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAligned => {
                f.write_str("ciphertext length is not a multiple of the block size")
            }
            Self::Padding(e) => write!(f, "invalid plaintext padding: {e}"),
        }
    }
}

impl<E: error::Error + 'static> error::Error for DecryptError<E> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::NotAligned => None,
            Self::Padding(e) => Some(e),
        }
    }
}
