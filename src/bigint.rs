//! Arbitrary-precision unsigned integer arithmetic.
//!
//! The workhorse here is [`BigUint`], a heap-allocated unsigned integer that
//! grows as needed. Nothing in this module is clever: the algorithms are the
//! ones taught in school, carried out in base 256 instead of base 10, which
//! keeps every operation easy to audit against a paper example.

use {
    docext::docext,
    std::{cmp, error, fmt, ops, str},
};

/// A variable-length unsigned integer, stored most-significant byte first.
///
/// A value with byte vector $b_0 b_1 \ldots b_{n-1}$ represents
///
/// $$
/// \sum_{i=0}^{n-1} b_i \cdot 256^{n-1-i}
/// $$
///
/// The representation is canonical: the vector is never empty, and the
/// leading byte is only zero when the whole value is zero (a single `0x00`
/// byte). Every public operation re-establishes this invariant, which is
/// what allows [comparison](Self::cmp) to look at lengths before looking at
/// bytes.
#[docext]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigUint {
    data: Vec<u8>,
}

impl BigUint {
    /// The value zero.
    pub fn zero() -> Self {
        Self { data: vec![0] }
    }

    /// The value one.
    pub fn one() -> Self {
        Self { data: vec![1] }
    }

    pub fn is_zero(&self) -> bool {
        self.data == [0]
    }

    /// Build a value from big-endian bytes. Leading zeros are dropped, and
    /// an empty slice is zero.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut result = Self {
            data: if bytes.is_empty() {
                vec![0]
            } else {
                bytes.to_vec()
            },
        };
        result.contract();
        result
    }

    /// The canonical big-endian bytes of the value.
    pub fn as_be_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Subtract `rhs`, failing with [`NegativeResult`] when `rhs` is larger
    /// than `self`.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, NegativeResult> {
        if rhs.data.len() > self.data.len() {
            return Err(NegativeResult);
        }
        // Subtraction on paper, least significant byte first, borrowing
        // from the next byte up whenever a digit goes below zero. The
        // shorter operand is treated as if it were padded with leading
        // zeros.
        let mut data = self.data.clone();
        let pad = data.len() - rhs.data.len();
        let mut borrow = false;
        for (i, b) in data.iter_mut().enumerate().rev() {
            let r = if i >= pad { rhs.data[i - pad] } else { 0 };
            let (diff, underflow) = b.overflowing_sub(r);
            // If the subtraction underflowed, the difference is at least 1,
            // so consuming the borrow bit here cannot underflow again.
            let (diff, borrow_underflow) = diff.overflowing_sub(borrow as u8);
            *b = diff;
            borrow = underflow || borrow_underflow;
        }
        if borrow {
            return Err(NegativeResult);
        }
        let mut result = Self { data };
        result.contract();
        Ok(result)
    }

    /// Divide by `divisor`, returning the quotient and the remainder.
    ///
    /// # Panics
    ///
    /// Panics when `divisor` is zero; use [`Self::checked_div_rem`] when the
    /// divisor is not known to be non-zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        self.checked_div_rem(divisor)
            .expect("attempt to divide by zero")
    }

    /// Divide by `divisor`, returning `None` when it is zero.
    ///
    /// This is long division in base 2. The divisor is first shifted left
    /// until it exceeds the dividend, counting the shifts. Then, walking the
    /// counted positions back down, the shifted divisor is subtracted from
    /// the running remainder wherever it fits, and each fit appends a 1 bit
    /// to the quotient where a miss appends a 0.
    #[must_use]
    pub fn checked_div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        let mut remainder = self.clone();
        let mut divisor = divisor.clone();
        let mut bit_size = 0;
        while divisor <= remainder {
            divisor.shl_bit();
            bit_size += 1;
        }
        // The divisor now exceeds the remainder, so the first iteration
        // always appends a 0 and shifts the divisor back into range.
        let mut quotient = Self::zero();
        for _ in 0..=bit_size {
            quotient.shl_bit();
            if divisor <= remainder {
                remainder = remainder
                    .checked_sub(&divisor)
                    .expect("divisor fits into the remainder");
                *quotient.data.last_mut().expect("data is never empty") |= 1;
            }
            divisor.shr_bit();
        }
        Some((quotient, remainder))
    }

    /// Raise to the power of `exp` by square-and-multiply.
    ///
    /// The accumulator picks up the running square of the base at every set
    /// bit of the exponent, walking the bits from least to most significant.
    /// Anything to the power of zero is one.
    #[must_use]
    pub fn pow(&self, exp: &Self) -> Self {
        let mut result = Self::one();
        let mut square = self.clone();
        let significant = 8 * exp.data.len() - exp.data[0].leading_zeros() as usize;
        for (i, bit) in exp.bits_lsb_first().take(significant).enumerate() {
            if bit {
                result = &result * &square;
            }
            if i + 1 < significant {
                square = &square * &square;
            }
        }
        result
    }

    /// Grow by one byte on the most-significant side to absorb a carry out
    /// of the top byte.
    fn expand(&mut self) {
        self.data.insert(0, 0x01);
    }

    /// Strip leading zero bytes, leaving at least one byte.
    fn contract(&mut self) {
        let lead = self
            .data
            .iter()
            .take_while(|&&b| b == 0)
            .count()
            .min(self.data.len() - 1);
        self.data.drain(..lead);
    }

    /// Shift left by one bit, growing by a byte when the top bit falls off.
    fn shl_bit(&mut self) {
        let mut carry = 0;
        for b in self.data.iter_mut().rev() {
            let next = (*b & 0x80) >> 7;
            *b = (*b << 1) | carry;
            carry = next;
        }
        if carry != 0 {
            self.expand();
        }
    }

    /// Shift right by one bit, dropping the low bit and contracting.
    fn shr_bit(&mut self) {
        let mut carry = 0;
        for b in self.data.iter_mut() {
            let next = (*b & 0x01) << 7;
            *b = (*b >> 1) | carry;
            carry = next;
        }
        self.contract();
    }

    /// The bits of the value, least significant first, including the unset
    /// high bits of the top byte.
    fn bits_lsb_first(&self) -> impl Iterator<Item = bool> + '_ {
        self.data
            .iter()
            .rev()
            .flat_map(|&byte| (0..8).map(move |i| byte & (1 << i) != 0))
    }
}

impl From<u32> for BigUint {
    /// Store the value in the fewest bytes that reach its most significant
    /// non-zero byte; zero takes a single byte.
    fn from(n: u32) -> Self {
        let bytes = n.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count().min(3);
        Self {
            data: bytes[skip..].to_vec(),
        }
    }
}

impl Ord for BigUint {
    /// The canonical form makes comparison cheap: a longer vector is a
    /// larger value, and equal-length vectors compare lexicographically
    /// from the most significant byte down.
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.data
            .len()
            .cmp(&other.data.len())
            .then_with(|| self.data.cmp(&other.data))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl ops::Add for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: Self) -> BigUint {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl ops::AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        // Addition on paper: pad the shorter operand up to the longer one,
        // then ripple the carry from the least significant byte to the most
        // significant, growing by one byte if a carry falls out of the top.
        if rhs.data.len() > self.data.len() {
            let mut grown = vec![0; rhs.data.len()];
            grown[rhs.data.len() - self.data.len()..].copy_from_slice(&self.data);
            self.data = grown;
        }
        let pad = self.data.len() - rhs.data.len();
        let mut carry = false;
        for (i, b) in self.data.iter_mut().enumerate().rev() {
            let r = if i >= pad { rhs.data[i - pad] } else { 0 };
            let (sum, overflow) = b.overflowing_add(r);
            let (sum, carry_overflow) = sum.overflowing_add(carry as u8);
            *b = sum;
            carry = overflow || carry_overflow;
        }
        if carry {
            self.expand();
        }
    }
}

impl ops::Sub for &BigUint {
    type Output = BigUint;

    /// # Panics
    ///
    /// Panics when `rhs` is larger than `self`; use
    /// [`BigUint::checked_sub`] for fallible subtraction.
    fn sub(self, rhs: Self) -> BigUint {
        self.checked_sub(rhs)
            .expect("attempt to subtract a larger value")
    }
}

impl ops::SubAssign<&BigUint> for BigUint {
    fn sub_assign(&mut self, rhs: &BigUint) {
        *self = &*self - rhs;
    }
}

impl ops::Mul for &BigUint {
    type Output = BigUint;

    /// Shift-and-add multiplication: for every set bit of `rhs`, the
    /// product picks up `self` shifted left by that bit's position.
    fn mul(self, rhs: Self) -> BigUint {
        let mut product = BigUint::zero();
        let mut term = self.clone();
        let significant = 8 * rhs.data.len() - rhs.data[0].leading_zeros() as usize;
        for (i, bit) in rhs.bits_lsb_first().take(significant).enumerate() {
            if bit {
                product += &term;
            }
            if i + 1 < significant {
                term.shl_bit();
            }
        }
        product
    }
}

impl ops::MulAssign<&BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: &BigUint) {
        *self = &*self * rhs;
    }
}

impl fmt::Display for BigUint {
    /// Decimal rendering by repeated division by ten.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let ten = Self::from(10);
        let mut digits = Vec::new();
        let mut value = self.clone();
        while !value.is_zero() {
            let (quotient, remainder) = value.div_rem(&ten);
            digits.push(b'0' + remainder.data[0]);
            value = quotient;
        }
        digits.reverse();
        f.write_str(str::from_utf8(&digits).expect("decimal digits are ascii"))
    }
}

impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, rest) = self.data.split_first().expect("data is never empty");
        write!(f, "{first:x}")?;
        for b in rest {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// The subtraction would produce a value below zero, which an unsigned
/// integer cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeResult;

impl fmt::Display for NegativeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("subtraction result would be negative")
    }
}

impl error::Error for NegativeResult {}
