/// A fixed-size byte array, such as a cipher block or key.
///
/// Block ciphers are defined over arrays whose width is known at compile
/// time. This trait is the bound placed on those arrays: it lets generic code
/// (the block modes, the facade functions) view them as slices, rebuild them
/// from slices, and copy them around without caring about the concrete width.
pub trait Bytes:
    for<'a> TryFrom<&'a [u8], Error = std::array::TryFromSliceError>
    + AsRef<[u8]>
    + AsMut<[u8]>
    + Clone
    + Copy
    + Sized
    + std::fmt::Debug
{
}

impl<const N: usize> Bytes for [u8; N] {}
