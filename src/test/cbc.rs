//! CBC chaining tests against a transparent block cipher.
//!
//! The toy cipher below adds the key into the block byte-wise, so its
//! decryption has to subtract rather than repeat the encryption. That
//! asymmetry matters: an XOR-style cipher is its own inverse and would let
//! a mode that chains on the wrong side of the block operation pass a
//! round-trip test.

use {
    crate::{
        BlockCipher,
        BlockDecrypt,
        BlockEncrypt,
        Cbc,
        CipherDecrypt,
        CipherEncrypt,
        Ciphertext,
        Key,
        NoPadding,
        Plaintext,
    },
    std::mem,
};

#[test]
fn chains_each_block_into_the_next() {
    let iv = [0x10, 0x20, 0x30, 0x40];
    let key = Key([1, 2, 3, 4]);
    let cip = Cbc::new(WrapAdd, NoPadding, iv);
    let data = Plaintext(vec![5, 6, 7, 8, 9, 10, 11, 12]);

    // Worked by hand: each output byte is (data XOR chain) + key, where the
    // chain is the IV for the first block and the previous ciphertext block
    // afterward.
    //
    //   block 0: (5 ^ 0x10) + 1, (6 ^ 0x20) + 2, (7 ^ 0x30) + 3, (8 ^ 0x40) + 4
    //   block 1: (9 ^ 0x16) + 1, (10 ^ 0x28) + 2, (11 ^ 0x3a) + 3, (12 ^ 0x4c) + 4
    let expected = vec![0x16, 0x28, 0x3a, 0x4c, 0x20, 0x24, 0x34, 0x44];

    let ciphertext = cip.encrypt(data.clone(), key).unwrap();
    assert_eq!(ciphertext.0, expected, "cbc chain produced unexpected bytes");

    let plaintext = cip.decrypt(ciphertext, key).unwrap();
    assert_eq!(plaintext, data, "cbc decryption lost the original data");
}

/// The whole point of chaining: repeating plaintext blocks must not repeat
/// in the ciphertext.
#[test]
fn identical_plaintext_blocks_diverge() {
    let cip = Cbc::new(WrapAdd, NoPadding, [7; 4]);
    let ciphertext = cip
        .encrypt(Plaintext(vec![42; 12]), Key([1, 2, 3, 4]))
        .unwrap();
    assert_ne!(ciphertext.0[..4], ciphertext.0[4..8]);
    assert_ne!(ciphertext.0[4..8], ciphertext.0[8..12]);
}

/// Decryption must chain on the ciphertext blocks it consumes, not on the
/// plaintext it recovers. A corrupted block therefore garbles itself and
/// the block after it, and nothing else.
#[test]
fn corruption_stays_local() {
    let iv = [9, 9, 9, 9];
    let key = Key([3, 5, 7, 11]);
    let cip = Cbc::new(WrapAdd, NoPadding, iv);
    let data = Plaintext((1..=16).collect::<Vec<u8>>());

    let mut ciphertext = cip.encrypt(data.clone(), key).unwrap();
    ciphertext.0[5] ^= 0xff;
    let plaintext = cip.decrypt(ciphertext, key).unwrap();

    let block = mem::size_of::<<WrapAdd as BlockCipher>::Block>();
    assert_eq!(plaintext.0[..block], data.0[..block]);
    assert_ne!(plaintext.0[block..3 * block], data.0[block..3 * block]);
    assert_eq!(plaintext.0[3 * block..], data.0[3 * block..]);
}

/// Four-byte block cipher that adds the key into the block. Trivially
/// breakable, but every byte of its output is easy to predict by hand,
/// which is exactly what a mode test needs.
struct WrapAdd;

impl BlockEncrypt for WrapAdd {
    type EncryptionBlock = [u8; 4];
    type EncryptionKey = [u8; 4];

    fn encrypt(
        &self,
        data: Plaintext<Self::EncryptionBlock>,
        key: Key<Self::EncryptionKey>,
    ) -> Ciphertext<Self::EncryptionBlock> {
        let mut block = data.0;
        block
            .iter_mut()
            .zip(key.0)
            .for_each(|(b, k)| *b = b.wrapping_add(k));
        Ciphertext(block)
    }
}

impl BlockDecrypt for WrapAdd {
    type DecryptionBlock = [u8; 4];
    type DecryptionKey = [u8; 4];

    fn decrypt(
        &self,
        data: Ciphertext<Self::DecryptionBlock>,
        key: Key<Self::DecryptionKey>,
    ) -> Plaintext<Self::DecryptionBlock> {
        let mut block = data.0;
        block
            .iter_mut()
            .zip(key.0)
            .for_each(|(b, k)| *b = b.wrapping_sub(k));
        Plaintext(block)
    }
}

impl BlockCipher for WrapAdd {
    type Block = [u8; 4];
    type Key = [u8; 4];
}
