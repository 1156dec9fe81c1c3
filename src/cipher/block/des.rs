//! DES is a Feistel-network block cipher from the 1970s, kept here for the
//! protocols that still speak it.
//!
//! DES works on 64-bit blocks under a 64-bit key (of which only 56 bits
//! participate). Each of 16 rounds expands the right half of the block to 48
//! bits, mixes in a round subkey carved out of a rotating 56-bit key
//! register, substitutes the result through eight S-boxes, permutes it, and
//! folds it into the left half. Encryption and decryption differ only in the
//! direction the key register rotates.
//!
//! [`TripleDes`] composes three DES passes under three independent subkeys,
//! which stretches the effective key to 168 bits without touching the round
//! function.
//!
//! The tables below come from the cipher specification, FIPS 46-3, where
//! they are defined 1-based; the [bit helpers](bits) apply them as written.
//! The S-box tables are stored flat, with the row/column interleaving of the
//! specification already folded into the entry order. The S-box input
//! extraction preserves the exact byte arithmetic of the reference
//! implementation this cipher must interoperate with, which is the behavior
//! the fixed test vectors pin down.

use crate::{BlockCipher, BlockDecrypt, BlockEncrypt, Ciphertext, Key, Plaintext};

pub(crate) mod bits;

/// DES block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// DES key size in bytes.
pub const KEY_SIZE: usize = 8;

/// Triple-DES key size in bytes: three independent single-DES keys.
pub const TRIPLE_KEY_SIZE: usize = 3 * KEY_SIZE;

/// Size of the rotating PC-1 key register in bytes (56 bits).
const PC1_KEY_SIZE: usize = 7;

/// Size of the expanded right half and of each round subkey in bytes (48
/// bits).
const SUBKEY_SIZE: usize = 6;

/// The initial permutation IP.
const INITIAL_PERM: [usize; 64] = [
    58, 50, 42, 34, 26, 18, 10, 2, //
    60, 52, 44, 36, 28, 20, 12, 4, //
    62, 54, 46, 38, 30, 22, 14, 6, //
    64, 56, 48, 40, 32, 24, 16, 8, //
    57, 49, 41, 33, 25, 17, 9, 1, //
    59, 51, 43, 35, 27, 19, 11, 3, //
    61, 53, 45, 37, 29, 21, 13, 5, //
    63, 55, 47, 39, 31, 23, 15, 7,
];

/// The final permutation FP, the inverse of [IP](INITIAL_PERM).
const FINAL_PERM: [usize; 64] = [
    40, 8, 48, 16, 56, 24, 64, 32, //
    39, 7, 47, 15, 55, 23, 63, 31, //
    38, 6, 46, 14, 54, 22, 62, 30, //
    37, 5, 45, 13, 53, 21, 61, 29, //
    36, 4, 44, 12, 52, 20, 60, 28, //
    35, 3, 43, 11, 51, 19, 59, 27, //
    34, 2, 42, 10, 50, 18, 58, 26, //
    33, 1, 41, 9, 49, 17, 57, 25,
];

/// Permuted choice 1, dropping the key parity bits into the 56-bit register.
const PC1: [usize; 56] = [
    57, 49, 41, 33, 25, 17, 9, 1, //
    58, 50, 42, 34, 26, 18, 10, 2, //
    59, 51, 43, 35, 27, 19, 11, 3, //
    60, 52, 44, 36, //
    63, 55, 47, 39, 31, 23, 15, 7, //
    62, 54, 46, 38, 30, 22, 14, 6, //
    61, 53, 45, 37, 29, 21, 13, 5, //
    28, 20, 12, 4,
];

/// Permuted choice 2, selecting the 48-bit round subkey from the register.
const PC2: [usize; 48] = [
    14, 17, 11, 24, 1, 5, //
    3, 28, 15, 6, 21, 10, //
    23, 19, 12, 4, 26, 8, //
    16, 7, 27, 20, 13, 2, //
    41, 52, 31, 37, 47, 55, //
    30, 40, 51, 45, 33, 48, //
    44, 49, 39, 56, 34, 53, //
    46, 42, 50, 36, 29, 32,
];

/// The expansion permutation E, stretching the 32-bit right half to 48 bits
/// by repeating 16 of them.
const EXPANSION: [usize; 48] = [
    32, 1, 2, 3, 4, 5, //
    4, 5, 6, 7, 8, 9, //
    8, 9, 10, 11, 12, 13, //
    12, 13, 14, 15, 16, 17, //
    16, 17, 18, 19, 20, 21, //
    20, 21, 22, 23, 24, 25, //
    24, 25, 26, 27, 28, 29, //
    28, 29, 30, 31, 32, 1,
];

/// The eight S-boxes, each consuming 6 bits and emitting 4.
const S_BOX: [[u8; 64]; 8] = [
    [
        14, 0, 4, 15, 13, 7, 1, 4, 2, 14, 15, 2, 11, 13, 8, 1, //
        3, 10, 10, 6, 6, 12, 12, 11, 5, 9, 9, 5, 0, 3, 7, 8, //
        4, 15, 1, 12, 14, 8, 8, 2, 13, 4, 6, 9, 2, 1, 11, 7, //
        15, 5, 12, 11, 9, 3, 7, 14, 3, 10, 10, 0, 5, 6, 0, 13,
    ],
    [
        15, 3, 1, 13, 8, 4, 14, 7, 6, 15, 11, 2, 3, 8, 4, 14, //
        9, 12, 7, 0, 2, 1, 13, 10, 12, 6, 0, 9, 5, 11, 10, 5, //
        0, 13, 14, 8, 7, 10, 11, 1, 10, 3, 4, 15, 13, 4, 1, 2, //
        5, 11, 8, 6, 12, 7, 6, 12, 9, 0, 3, 5, 2, 14, 15, 9,
    ],
    [
        10, 13, 0, 7, 9, 0, 14, 9, 6, 3, 3, 4, 15, 6, 5, 10, //
        1, 2, 13, 8, 12, 5, 7, 14, 11, 12, 4, 11, 2, 15, 8, 1, //
        13, 1, 6, 10, 4, 13, 9, 0, 8, 6, 15, 9, 3, 8, 0, 7, //
        11, 4, 1, 15, 2, 14, 12, 3, 5, 11, 10, 5, 14, 2, 7, 12,
    ],
    [
        7, 13, 13, 8, 14, 11, 3, 5, 0, 6, 6, 15, 9, 0, 10, 3, //
        1, 4, 2, 7, 8, 2, 5, 12, 11, 1, 12, 10, 4, 14, 15, 9, //
        10, 3, 6, 15, 9, 0, 0, 6, 12, 10, 11, 1, 7, 13, 13, 8, //
        15, 9, 1, 4, 3, 5, 14, 11, 5, 12, 2, 7, 8, 2, 4, 14,
    ],
    [
        2, 14, 12, 11, 4, 2, 1, 12, 7, 4, 10, 7, 11, 13, 6, 1, //
        8, 5, 5, 0, 3, 15, 15, 10, 13, 3, 0, 9, 14, 8, 9, 6, //
        4, 11, 2, 8, 1, 12, 11, 7, 10, 1, 13, 14, 7, 2, 8, 13, //
        15, 6, 9, 15, 12, 0, 5, 9, 6, 10, 3, 4, 0, 5, 14, 3,
    ],
    [
        12, 10, 1, 15, 10, 4, 15, 2, 9, 7, 2, 12, 6, 9, 8, 5, //
        0, 6, 13, 1, 3, 13, 4, 14, 14, 0, 7, 11, 5, 3, 11, 8, //
        9, 4, 14, 3, 15, 2, 5, 12, 2, 9, 8, 5, 12, 15, 3, 10, //
        7, 11, 0, 14, 4, 1, 10, 7, 1, 6, 13, 0, 11, 8, 6, 13,
    ],
    [
        4, 13, 11, 0, 2, 11, 14, 7, 15, 4, 0, 9, 8, 1, 13, 10, //
        3, 14, 12, 3, 9, 5, 7, 12, 5, 2, 10, 15, 6, 8, 1, 6, //
        1, 6, 4, 11, 11, 13, 13, 8, 12, 1, 3, 4, 7, 10, 14, 7, //
        10, 9, 15, 5, 6, 0, 8, 15, 0, 14, 5, 2, 9, 3, 2, 12,
    ],
    [
        13, 1, 2, 15, 8, 13, 4, 8, 6, 10, 15, 3, 11, 7, 1, 4, //
        10, 12, 9, 5, 3, 6, 14, 11, 5, 0, 0, 14, 12, 9, 7, 2, //
        7, 2, 11, 1, 4, 14, 1, 7, 9, 4, 12, 10, 14, 8, 2, 13, //
        0, 15, 6, 12, 10, 9, 13, 0, 15, 3, 3, 5, 5, 6, 8, 11,
    ],
];

/// The permutation P applied to the S-box output.
const P: [usize; 32] = [
    16, 7, 20, 21, 29, 12, 28, 17, //
    1, 15, 23, 26, 5, 18, 31, 10, //
    2, 8, 24, 14, 32, 27, 3, 9, //
    19, 13, 30, 6, 22, 11, 4, 25,
];

/// [DES block cipher](self).
#[derive(Debug, Default, Clone, Copy)]
pub struct Des(());

impl BlockEncrypt for Des {
    type EncryptionBlock = [u8; BLOCK_SIZE];
    type EncryptionKey = [u8; KEY_SIZE];

    fn encrypt(
        &self,
        data: Plaintext<Self::EncryptionBlock>,
        key: Key<Self::EncryptionKey>,
    ) -> Ciphertext<Self::EncryptionBlock> {
        Ciphertext(block_operate(Direction::Encrypt, data.0, key.0))
    }
}

impl BlockDecrypt for Des {
    type DecryptionBlock = [u8; BLOCK_SIZE];
    type DecryptionKey = [u8; KEY_SIZE];

    fn decrypt(
        &self,
        data: Ciphertext<Self::DecryptionBlock>,
        key: Key<Self::DecryptionKey>,
    ) -> Plaintext<Self::DecryptionBlock> {
        Plaintext(block_operate(Direction::Decrypt, data.0, key.0))
    }
}

impl BlockCipher for Des {
    type Block = [u8; BLOCK_SIZE];
    type Key = [u8; KEY_SIZE];
}

/// [Triple-DES block cipher](self) with three independent 8-byte subkeys.
///
/// Encryption runs the block through single DES under the first, second, and
/// third subkey in that order; decryption reverses the passes. The
/// composition is a [block cipher](BlockCipher) in its own right, so any
/// block mode chains whole triple passes rather than individual DES passes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TripleDes(());

impl BlockEncrypt for TripleDes {
    type EncryptionBlock = [u8; BLOCK_SIZE];
    type EncryptionKey = [u8; TRIPLE_KEY_SIZE];

    fn encrypt(
        &self,
        data: Plaintext<Self::EncryptionBlock>,
        key: Key<Self::EncryptionKey>,
    ) -> Ciphertext<Self::EncryptionBlock> {
        let (k1, k2, k3) = split_key(&key.0);
        let mut block = block_operate(Direction::Encrypt, data.0, k1);
        block = block_operate(Direction::Encrypt, block, k2);
        block = block_operate(Direction::Encrypt, block, k3);
        Ciphertext(block)
    }
}

impl BlockDecrypt for TripleDes {
    type DecryptionBlock = [u8; BLOCK_SIZE];
    type DecryptionKey = [u8; TRIPLE_KEY_SIZE];

    fn decrypt(
        &self,
        data: Ciphertext<Self::DecryptionBlock>,
        key: Key<Self::DecryptionKey>,
    ) -> Plaintext<Self::DecryptionBlock> {
        let (k1, k2, k3) = split_key(&key.0);
        let mut block = block_operate(Direction::Decrypt, data.0, k3);
        block = block_operate(Direction::Decrypt, block, k2);
        block = block_operate(Direction::Decrypt, block, k1);
        Plaintext(block)
    }
}

impl BlockCipher for TripleDes {
    type Block = [u8; BLOCK_SIZE];
    type Key = [u8; TRIPLE_KEY_SIZE];
}

fn split_key(key: &[u8; TRIPLE_KEY_SIZE]) -> ([u8; KEY_SIZE], [u8; KEY_SIZE], [u8; KEY_SIZE]) {
    let k1 = key[..KEY_SIZE].try_into().expect("first subkey is 8 bytes");
    let k2 = key[KEY_SIZE..2 * KEY_SIZE]
        .try_into()
        .expect("second subkey is 8 bytes");
    let k3 = key[2 * KEY_SIZE..]
        .try_into()
        .expect("third subkey is 8 bytes");
    (k1, k2, k3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Run one 64-bit block through the 16-round Feistel network.
///
/// The key register rotation is the only place where the direction matters.
/// Encryption rotates the register left before PC-2 selects the subkey,
/// twice per round except in rounds 0, 1, 8, and 15, for 28 bits in total, a
/// full cycle of each register half. Decryption selects the subkey first and
/// rotates right afterward on the mirrored schedule, so round `r` of
/// decryption sees the subkey of round `15 - r` of encryption.
fn block_operate(
    direction: Direction,
    block: [u8; BLOCK_SIZE],
    key: [u8; KEY_SIZE],
) -> [u8; BLOCK_SIZE] {
    let mut ip_block = [0u8; BLOCK_SIZE];
    bits::permute(&mut ip_block, &block, &INITIAL_PERM);

    let mut pc1_key = [0u8; PC1_KEY_SIZE];
    bits::permute(&mut pc1_key, &key, &PC1);

    for round in 0..16 {
        // Feistel function of the right half: expansion, key mixing,
        // substitution, permutation.
        let mut expansion = [0u8; SUBKEY_SIZE];
        bits::permute(&mut expansion, &ip_block[4..], &EXPANSION);

        if direction == Direction::Encrypt {
            rotate_left(&mut pc1_key);
            if !(round <= 1 || round == 8 || round == 15) {
                rotate_left(&mut pc1_key);
            }
        }

        let mut sub_key = [0u8; SUBKEY_SIZE];
        bits::permute(&mut sub_key, &pc1_key, &PC2);

        if direction == Direction::Decrypt {
            rotate_right(&mut pc1_key);
            if !(round == 0 || round == 7 || round >= 14) {
                rotate_right(&mut pc1_key);
            }
        }

        bits::xor_into(&mut expansion, &sub_key);

        let sub_block = substitute(&expansion);

        let mut pbox_target = [0u8; BLOCK_SIZE / 2];
        bits::permute(&mut pbox_target, &sub_block, &P);

        // XOR the permuted output into the left half, then swap halves.
        for i in 0..BLOCK_SIZE / 2 {
            let recombined = ip_block[i] ^ pbox_target[i];
            ip_block[i] = ip_block[i + BLOCK_SIZE / 2];
            ip_block[i + BLOCK_SIZE / 2] = recombined;
        }
    }

    // Undo the last round's swap.
    for i in 0..BLOCK_SIZE / 2 {
        ip_block.swap(i, i + BLOCK_SIZE / 2);
    }

    let mut output = [0u8; BLOCK_SIZE];
    bits::permute(&mut output, &ip_block, &FINAL_PERM);
    output
}

/// Substitute the 48-bit expansion block through the eight S-boxes, packing
/// the eight 4-bit outputs high-nibble-first into four bytes.
///
/// The index arithmetic matches the reference implementation byte for byte;
/// the interoperability vectors depend on it.
fn substitute(e: &[u8; SUBKEY_SIZE]) -> [u8; BLOCK_SIZE / 2] {
    let mut sub = [0u8; BLOCK_SIZE / 2];
    sub[0] = S_BOX[0][usize::from((e[0] & 0xfc) >> 2)] << 4;
    sub[0] |= S_BOX[1][usize::from((e[0] & 0x03) << 4 | (e[1] & 0x0f) >> 4)];
    sub[1] = S_BOX[2][usize::from((e[1] & 0x0f) << 2 | (e[2] & 0xc0) >> 6)] << 4;
    sub[1] |= S_BOX[3][usize::from(e[2] & 0x3f)];
    sub[2] = S_BOX[4][usize::from((e[3] & 0xfc) >> 2)] << 4;
    sub[2] |= S_BOX[5][usize::from((e[3] & 0x03) << 4 | (e[4] & 0x0f) >> 4)];
    sub[3] = S_BOX[6][usize::from((e[4] & 0x0f) << 2 | (e[5] & 0xc0) >> 6)] << 4;
    sub[3] |= S_BOX[7][usize::from(e[5] & 0x3f)];
    sub
}

/// Rotate the two 28-bit halves of the key register left by one bit.
///
/// The halves are packed into seven bytes, so the boundary between them runs
/// through the middle of byte 3: bits 0..28 are the first half, bits 28..56
/// the second. Each half wraps into itself.
fn rotate_left(target: &mut [u8; PC1_KEY_SIZE]) {
    // The bit falling off the front of the first half re-enters at bit 27,
    // and the bit falling off the front of the second half re-enters at the
    // very end.
    let carry_left = (target[0] & 0x80) >> 3;
    let carry_right = (target[3] & 0x08) >> 3;

    target[0] = (target[0] << 1) | ((target[1] & 0x80) >> 7);
    target[1] = (target[1] << 1) | ((target[2] & 0x80) >> 7);
    target[2] = (target[2] << 1) | ((target[3] & 0x80) >> 7);
    target[3] = (((target[3] << 1) | ((target[4] & 0x80) >> 7)) & !0x10) | carry_left;
    target[4] = (target[4] << 1) | ((target[5] & 0x80) >> 7);
    target[5] = (target[5] << 1) | ((target[6] & 0x80) >> 7);
    target[6] = (target[6] << 1) | carry_right;
}

/// Rotate the two 28-bit halves of the key register right by one bit,
/// undoing [`rotate_left`].
fn rotate_right(target: &mut [u8; PC1_KEY_SIZE]) {
    let carry_right = (target[6] & 0x01) << 3;
    let carry_left = (target[3] & 0x10) << 3;

    target[6] = (target[6] >> 1) | ((target[5] & 0x01) << 7);
    target[5] = (target[5] >> 1) | ((target[4] & 0x01) << 7);
    target[4] = (target[4] >> 1) | ((target[3] & 0x01) << 7);
    target[3] = (((target[3] >> 1) | ((target[2] & 0x01) << 7)) & !0x08) | carry_right;
    target[2] = (target[2] >> 1) | ((target[1] & 0x01) << 7);
    target[1] = (target[1] >> 1) | ((target[0] & 0x01) << 7);
    target[0] = (target[0] >> 1) | carry_left;
}
