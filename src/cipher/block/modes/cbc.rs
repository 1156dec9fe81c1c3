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

/// Cipher block chaining.
///
/// Every block of plaintext is XORed with the previous block of ciphertext
/// before encryption, and the first block is XORed with the initialization
/// vector. Identical plaintext blocks therefore encrypt to different
/// ciphertext blocks, unlike in [ECB mode](crate::Ecb), and two encryptions
/// of the same message under different IVs share no ciphertext at all.
///
/// The IV does not need to be secret, but it should be unpredictable to an
/// attacker who can choose plaintexts.
pub struct Cbc<C: BlockCipher, P> {
    cipher: C,
    padding: P,
    iv: C::Block,
}

impl<C: BlockCipher, P> Cbc<C, P> {
    pub fn new(cipher: C, padding: P, iv: C::Block) -> Self {
        Self { cipher, padding, iv }
    }
}

impl<C: BlockCipher, P: Padding> Cipher for Cbc<C, P> {
    type Key = C::Key;
}

impl<C: BlockCipher, P: Padding> BlockMode for Cbc<C, P> {}

impl<C: BlockCipher, P: Padding> CipherEncrypt for Cbc<C, P> {
    type EncryptionErr = P::Err;
    type EncryptionKey = C::Key;

    fn encrypt(
        &self,
        data: Plaintext<Vec<u8>>,
        key: Key<Self::EncryptionKey>,
    ) -> Result<Ciphertext<Vec<u8>>, Self::EncryptionErr> {
        let n = mem::size_of::<C::Block>();
        let data = self.padding.pad(data, n)?;
        let mut chain = self.iv;
        let mut result = Vec::with_capacity(data.0.len());
        for chunk in data.0.chunks(n) {
            let mut block =
                C::Block::try_from(chunk).expect("padded data is a multiple of the block size");
            block
                .as_mut()
                .iter_mut()
                .zip(chain.as_ref())
                .for_each(|(b, c)| *b ^= c);
            let encrypted = self.cipher.encrypt(Plaintext(block), key).0;
            result.extend_from_slice(encrypted.as_ref());
            // The ciphertext block just produced chains into the next block.
            chain = encrypted;
        }
        Ok(Ciphertext(result))
    }
}

impl<C: BlockCipher, P: Padding> CipherDecrypt for Cbc<C, P> {
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
        let mut chain = self.iv;
        let mut result = Vec::with_capacity(data.0.len());
        for chunk in data.0.chunks(n) {
            let block =
                C::Block::try_from(chunk).expect("ciphertext is a multiple of the block size");
            let mut decrypted = self.cipher.decrypt(Ciphertext(block), key).0;
            decrypted
                .as_mut()
                .iter_mut()
                .zip(chain.as_ref())
                .for_each(|(b, c)| *b ^= c);
            result.extend_from_slice(decrypted.as_ref());
            // The next block was chained with this ciphertext block, not
            // with the plaintext just recovered.
            chain = block;
        }
        self.padding
            .unpad(Plaintext(result), n)
            .map_err(DecryptError::Padding)
    }
}
