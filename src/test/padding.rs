//! Padding scheme tests: padded data must land on a block boundary with
//! the original bytes untouched in front, and stripping the padding must
//! give back exactly the bytes that went in.

use {
    crate::{BadPadding, NoPadding, NotAligned, Padding, Pkcs7, Plaintext},
    rand::Rng,
};

#[test]
fn pkcs7() {
    pad_round_trip(Pkcs7, 16, 13);
    pad_round_trip(Pkcs7, 16, 16);
    pad_round_trip(Pkcs7, 16, 17);
    pad_round_trip(Pkcs7, 16, 18);
    pad_round_trip(Pkcs7, 8, 0);
    pad_round_trip(Pkcs7, 8, 7);
    pad_round_trip(Pkcs7, 8, 8);
}

#[test]
fn pkcs7_pads_with_the_pad_length() {
    let padded = Pkcs7.pad(Plaintext(vec![1, 2, 3]), 8).unwrap();
    assert_eq!(padded.0, vec![1, 2, 3, 5, 5, 5, 5, 5]);

    // Aligned data gains a whole block so the final byte is always a pad
    // length.
    let padded = Pkcs7.pad(Plaintext(vec![1, 2]), 2).unwrap();
    assert_eq!(padded.0, vec![1, 2, 2, 2]);
}

#[test]
fn pkcs7_rejects_corrupt_padding() {
    // Final byte out of range.
    assert_eq!(Pkcs7.unpad(Plaintext(vec![1, 2, 3, 0]), 4), Err(BadPadding));
    assert_eq!(Pkcs7.unpad(Plaintext(vec![1, 2, 3, 9]), 4), Err(BadPadding));
    // Trailing run shorter than the final byte claims.
    assert_eq!(Pkcs7.unpad(Plaintext(vec![1, 2, 7, 3]), 4), Err(BadPadding));
    // Not aligned or empty.
    assert_eq!(Pkcs7.unpad(Plaintext(vec![1, 2, 2]), 4), Err(BadPadding));
    assert_eq!(Pkcs7.unpad(Plaintext(vec![]), 4), Err(BadPadding));
}

#[test]
fn no_padding_requires_aligned_data() {
    assert_eq!(
        NoPadding.pad(Plaintext(vec![1, 2, 3, 4]), 4).unwrap().0,
        vec![1, 2, 3, 4]
    );
    assert_eq!(NoPadding.pad(Plaintext(vec![1, 2, 3]), 4), Err(NotAligned));
    assert_eq!(NoPadding.unpad(Plaintext(vec![1, 2, 3]), 4), Err(NotAligned));
}

/// Pad random bytes of length `data_len` out to a multiple of `n`, check
/// the alignment and that the original bytes survive as a prefix, then
/// strip the padding and check nothing was lost.
fn pad_round_trip<P: Padding>(scheme: P, n: usize, data_len: usize)
where
    P::Err: std::fmt::Debug,
{
    let data: Vec<u8> = (0..data_len).map(|_| rand::thread_rng().gen()).collect();

    let padded = scheme.pad(Plaintext(data.clone()), n).unwrap();
    assert_eq!(
        padded.0.len() % n,
        0,
        "padded length {} is not a multiple of {n}",
        padded.0.len()
    );
    assert_eq!(
        padded.0[..data.len()],
        data[..],
        "padding must leave the original bytes in place"
    );

    let restored = scheme.unpad(padded, n).unwrap();
    assert_eq!(restored.0, data, "unpad did not restore the original bytes");
}
