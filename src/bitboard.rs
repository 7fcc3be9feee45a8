//! A fixed-size coordinate set backed by a single unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` board
//! is packed row-major into `T`, one bit per [`Coordinate`]. The grid uses it
//! to track reserved and targeted cells.

use core::fmt;
use core::ops::BitOr;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coordinate;

/// A set of coordinates on an N×N board stored in the unsigned integer `T`.
///
/// Coordinates off the board are never members.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns `true` if `coord` is on the board and in the set.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match Self::bit(coord) {
            Some(bit) => !(self.bits & bit).is_zero(),
            None => false,
        }
    }

    /// Adds `coord`, returning `true` if it was newly added. Coordinates
    /// off the board are ignored.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let Some(bit) = Self::bit(coord) else {
            return false;
        };
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        fresh
    }

    #[inline]
    fn bit(coord: Coordinate) -> Option<T> {
        if !coord.in_bounds(N) {
            return None;
        }
        Some(T::one() << (coord.y as usize * N + coord.x as usize))
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for y in 0..N {
            for x in 0..N {
                let bit = if self.contains(Coordinate::new(x as i32, y as i32)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Set union.
impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}
