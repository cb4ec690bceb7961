//! Signals.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use thiserror::Error;

use crate::*;

/// Bit-representable values.
pub trait Signal: 'static + fmt::Debug + Clone {
    /// Signal's bit width.
    ///
    /// # Note
    ///
    /// `Self::WIDTH` and `self.transl().len()` should be equal.
    const WIDTH: usize;

    /// Bits of the value, least significant bit first.
    fn transl(self) -> Vec<bool>;
}

impl Signal for bool {
    const WIDTH: usize = 1;

    fn transl(self) -> Vec<bool> { vec![self] }
}

macro_rules! impl_signal {
    ($typ:ty) => {
        impl Signal for $typ {
            const WIDTH: usize = ::std::mem::size_of::<$typ>() * 8;

            fn transl(self) -> Vec<bool> {
                (0..(::std::mem::size_of::<$typ>() * 8)).map(|i| (self & (1 << i)) != 0).collect::<Vec<_>>()
            }
        }
    };
}

impl_signal!(u8);
impl_signal!(u16);
impl_signal!(u32);

#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignalError {
    #[error("value {value} does not fit in {width} bits")]
    Overflow { value: u32, width: usize },
}

/// Unsigned value of `N::WIDTH` bits (at most 32).
pub struct Bits<N: Num> {
    value: u32,
    _marker: PhantomData<N>,
}

impl<N: Num> Bits<N> {
    /// Mask covering the low `N::WIDTH` bits.
    pub fn mask() -> u32 {
        assert!(N::WIDTH <= 32, "Bits wider than 32 are not supported");
        if N::WIDTH == 32 {
            u32::MAX
        } else {
            (1 << N::WIDTH) - 1
        }
    }

    /// Creates new bits, discarding everything above `N::WIDTH` like a narrower wire would.
    pub fn new(value: u32) -> Self { Self { value: value & Self::mask(), _marker: PhantomData } }

    /// Returns the unsigned value.
    pub fn value(self) -> u32 { self.value }

    /// Zero-extends or truncates to another width.
    pub fn resize<M: Num>(self) -> Bits<M> { Bits::new(self.value) }

    /// Returns `true` if any bit at or above `lsb` is set.
    pub fn any_above(self, lsb: usize) -> bool { lsb < 32 && (self.value >> lsb) != 0 }
}

impl<N: Num> TryFrom<u32> for Bits<N> {
    type Error = SignalError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value & !Self::mask() != 0 {
            return Err(SignalError::Overflow { value, width: N::WIDTH });
        }
        Ok(Self::new(value))
    }
}

impl<N: Num> From<Bits<N>> for u32 {
    fn from(bits: Bits<N>) -> u32 { bits.value }
}

impl<N: Num> Clone for Bits<N> {
    fn clone(&self) -> Self { *self }
}

impl<N: Num> Copy for Bits<N> {}

impl<N: Num> Default for Bits<N> {
    fn default() -> Self { Self::new(0) }
}

impl<N: Num> PartialEq for Bits<N> {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl<N: Num> Eq for Bits<N> {}

impl<N: Num> Hash for Bits<N> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.value.hash(state) }
}

impl<N: Num> fmt::Debug for Bits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}'d{}", N::WIDTH, self.value) }
}

impl<N: Num> Signal for Bits<N> {
    const WIDTH: usize = N::WIDTH;

    fn transl(self) -> Vec<bool> { usize_to_bitvec(N::WIDTH, self.value as usize) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_truncates_to_width() {
        assert_eq!(Bits::<U<3>>::new(0b1101).value(), 0b101);
        assert_eq!(Bits::<U<2>>::new(7).value(), 3);
    }

    #[test]
    fn try_from_rejects_wide_values() {
        assert_eq!(Bits::<U<3>>::try_from(7).map(Bits::value), Ok(7));
        assert_eq!(Bits::<U<3>>::try_from(8), Err(SignalError::Overflow { value: 8, width: 3 }));
    }

    #[test]
    fn resize_truncates_and_extends() {
        let wide = Bits::<Sum<U<8>, U<8>>>::new(0x1234);
        assert_eq!(wide.resize::<U<8>>().value(), 0x34);
        assert_eq!(Bits::<U<8>>::new(0xff).resize::<U<16>>().value(), 0xff);
        assert!(wide.any_above(8));
        assert!(!Bits::<U<16>>::new(0xff).any_above(8));
    }

    #[test]
    fn transl_is_lsb_first() {
        assert_eq!(Bits::<U<3>>::new(1).transl(), vec![true, false, false]);
        assert_eq!(6u8.transl().len(), 8);
        assert_eq!(<Bits<Log2<U<8>>> as Signal>::WIDTH, 3);
    }
}
