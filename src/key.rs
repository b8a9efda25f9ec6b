//! Numeric key types
//!
//! A key is both the identity of an entry and the starting point of its
//! priority, so it has to be hashable, totally ordered, and able to step down
//! by one. Signed integers qualify directly. Floats qualify only through
//! [`OrderedFloat`](ordered_float::OrderedFloat) (with the `float-keys`
//! feature), and then only when finite.
//!
//! Unsigned integers are deliberately not keys: inserting `0` twice must give
//! it priority `-1`.

use std::fmt;
use std::hash::Hash;

/// A numeric value that can be stored in the heap
pub trait Key: Copy + Eq + Hash + Ord + fmt::Debug {
    /// Whether this value is inside the heap's input contract
    fn is_valid(&self) -> bool {
        true
    }

    /// Returns `self - 1`, or `None` if that is not representable
    fn checked_decrement(self) -> Option<Self>;
}

/// A key that maps onto a dense array position
///
/// Used by [`DenseSlots`](crate::slots::DenseSlots). Negative values have no
/// position.
pub trait DenseKey: Key {
    fn to_index(&self) -> Option<usize>;
}

macro_rules! impl_integer_key {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                #[inline]
                fn checked_decrement(self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }

            impl DenseKey for $t {
                #[inline]
                fn to_index(&self) -> Option<usize> {
                    usize::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_integer_key!(i8, i16, i32, i64, i128, isize);

#[cfg(feature = "float-keys")]
mod float {
    use super::Key;
    use ordered_float::OrderedFloat;

    macro_rules! impl_float_key {
        ($($t:ty),*) => {
            $(
                impl Key for OrderedFloat<$t> {
                    fn is_valid(&self) -> bool {
                        self.0.is_finite()
                    }

                    // Past 2^53 (f64) a step of one is lost to rounding; the
                    // priority then stays put rather than failing.
                    fn checked_decrement(self) -> Option<Self> {
                        let next = self.0 - 1.0;
                        next.is_finite().then_some(OrderedFloat(next))
                    }
                }
            )*
        };
    }

    impl_float_key!(f32, f64);
}
