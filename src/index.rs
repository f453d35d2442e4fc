//! Type-level indices used to address alternatives of a
//! [`UnionValue`](crate::UnionValue) at compile time.
//!
//! An index is a Peano-style natural number: [`UTerm`] is zero and
//! [`UInt<U>`] is the successor of `U`. The aliases [`U0`] to [`U12`] cover
//! the common cases.

#![allow(missing_docs)]

use core::marker::PhantomData;

pub struct UTerm;

pub struct UInt<U>(PhantomData<U>);

/// A compile-time index into a type catalog.
pub trait Index {
    /// The numeric position this index stands for.
    const TAG: usize;
}

impl Index for UTerm {
    const TAG: usize = 0;
}

impl<U: Index> Index for UInt<U> {
    const TAG: usize = 1 + U::TAG;
}

pub type U0 = UTerm;
pub type U1 = UInt<U0>;
pub type U2 = UInt<U1>;
pub type U3 = UInt<U2>;
pub type U4 = UInt<U3>;
pub type U5 = UInt<U4>;
pub type U6 = UInt<U5>;
pub type U7 = UInt<U6>;
pub type U8 = UInt<U7>;
pub type U9 = UInt<U8>;

pub type U10 = UInt<U9>;
pub type U11 = UInt<U10>;
pub type U12 = UInt<U11>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_count_up_from_zero() {
        assert_eq!(U0::TAG, 0);
        assert_eq!(U1::TAG, 1);
        assert_eq!(U7::TAG, 7);
        assert_eq!(U12::TAG, 12);
    }
}
