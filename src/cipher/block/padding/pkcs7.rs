use {
    crate::{Padding, Plaintext},
    docext::docext,
    std::{error, fmt},
};

/// Pkcs7 is a simple approach to padding.
///
/// If the message is $p$ bytes short of a block boundary and the block size
/// is $B$, this scheme appends $p$ bytes with the value $p$. If the message
/// already ends on a boundary, an entire block of padding is added, i.e. $B$
/// bytes with the value $B$, so that the final byte of a padded message
/// always states how much padding to remove.
#[docext]
#[derive(Debug, Default, Clone, Copy)]
pub struct Pkcs7;

impl Padding for Pkcs7 {
    type Err = BadPadding;

    fn pad(&self, data: Plaintext<Vec<u8>>, n: usize) -> Result<Plaintext<Vec<u8>>, Self::Err> {
        let mut data = data.0;
        let pad = n - data.len() % n;
        data.resize(data.len() + pad, pad as u8);
        Ok(Plaintext(data))
    }

    fn unpad(&self, data: Plaintext<Vec<u8>>, n: usize) -> Result<Plaintext<Vec<u8>>, Self::Err> {
        let mut data = data.0;
        if data.is_empty() || data.len() % n != 0 {
            return Err(BadPadding);
        }
        let pad = usize::from(*data.last().expect("data is non-empty"));
        if pad == 0 || pad > n || pad > data.len() {
            return Err(BadPadding);
        }
        if data[data.len() - pad..].iter().any(|&b| usize::from(b) != pad) {
            return Err(BadPadding);
        }
        data.truncate(data.len() - pad);
        Ok(Plaintext(data))
    }
}

/// The trailing bytes of the data do not form valid padding.
///
/// Deliberately carries no detail about how the padding was malformed; see
/// the note on padding oracles in [`Padding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadPadding;

impl fmt::Display for BadPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid padding")
    }
}

impl error::Error for BadPadding {}
