use {
    crate::{
        cipher::block::modes::DecryptError,
        BlockCipher,
        BlockMode,
        Cipher,
        CipherDecrypt,
        CipherEncrypt,
        Ciphertext,
        Key,
        Padding,
        Plaintext,
    },
    std::mem,
};

/// The electronic codebook mode: each block is encrypted independently.
///
/// Identical plaintext blocks produce identical ciphertext blocks, which
/// leaks the large-scale structure of the message. Prefer [CBC](crate::Cbc)
/// unless a protocol demands unchained blocks.
pub struct Ecb<C, P> {
    cipher: C,
    padding: P,
}

impl<C: BlockCipher, P> Ecb<C, P> {
    pub fn new(cipher: C, padding: P) -> Self {
        Self { cipher, padding }
    }
}

impl<C: BlockCipher, P: Padding> Cipher for Ecb<C, P> {
    type Key = C::Key;
}

impl<C: BlockCipher, P: Padding> BlockMode for Ecb<C, P> {}

impl<C: BlockCipher, P: Padding> CipherEncrypt for Ecb<C, P> {
    type EncryptionErr = P::Err;
    type EncryptionKey = C::Key;

    fn encrypt(
        &self,
        data: Plaintext<Vec<u8>>,
        key: Key<Self::EncryptionKey>,
    ) -> Result<Ciphertext<Vec<u8>>, Self::EncryptionErr> {
        let n = mem::size_of::<C::Block>();
        let data = self.padding.pad(data, n)?;
        let mut result = Vec::with_capacity(data.0.len());
        for chunk in data.0.chunks(n) {
            let block =
                C::Block::try_from(chunk).expect("padded data is a multiple of the block size");
            let encrypted = self.cipher.encrypt(Plaintext(block), key).0;
            result.extend_from_slice(encrypted.as_ref());
        }
        Ok(Ciphertext(result))
    }
}

impl<C: BlockCipher, P: Padding> CipherDecrypt for Ecb<C, P> {
    type DecryptionErr = DecryptError<P::Err>;
    type DecryptionKey = C::Key;

    fn decrypt(
        &self,
        data: Ciphertext<Vec<u8>>,
        key: Key<Self::DecryptionKey>,
    ) -> Result<Plaintext<Vec<u8>>, Self::DecryptionErr> {
        let n = mem::size_of::<C::Block>();
        if data.0.len() % n != 0 {
            return Err(DecryptError::NotAligned);
        }
        let mut result = Vec::with_capacity(data.0.len());
        for chunk in data.0.chunks(n) {
            let block =
                C::Block::try_from(chunk).expect("ciphertext is a multiple of the block size");
            let decrypted = self.cipher.decrypt(Ciphertext(block), key).0;
            result.extend_from_slice(decrypted.as_ref());
        }
        self.padding
            .unpad(Plaintext(result), n)
            .map_err(DecryptError::Padding)
    }
}
