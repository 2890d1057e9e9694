use std::fmt::Debug;

use num_traits::Bounded;

/// A trait for types that can be used as coordinates in a [`KdTree`][crate::kdtree::KdTree].
///
/// The tree only ever compares coordinates, so any ordered, copyable type works. Region searches
/// start from the box spanned by [`lowest`][Coordinate::lowest] and
/// [`highest`][Coordinate::highest], which must bound every value the type can hold. For
/// integers these are the [`Bounded`] limits, for floats they are the infinities.
///
/// The order must be total over the values actually stored. Floating point coordinates are
/// accepted, but inserting `NaN` breaks every search invariant.
pub trait Coordinate: Copy + PartialOrd + Debug + Bounded {
    /// A value less than or equal to every value of this type.
    fn lowest() -> Self;

    /// A value greater than or equal to every value of this type.
    fn highest() -> Self;
}

macro_rules! impl_integer_coordinate {
    ($($ty:ty),*) => {
        $(
            impl Coordinate for $ty {
                #[inline]
                fn lowest() -> Self {
                    <$ty as Bounded>::min_value()
                }

                #[inline]
                fn highest() -> Self {
                    <$ty as Bounded>::max_value()
                }
            }
        )*
    };
}

impl_integer_coordinate!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

impl Coordinate for f32 {
    #[inline]
    fn lowest() -> Self {
        f32::NEG_INFINITY
    }

    #[inline]
    fn highest() -> Self {
        f32::INFINITY
    }
}

impl Coordinate for f64 {
    #[inline]
    fn lowest() -> Self {
        f64::NEG_INFINITY
    }

    #[inline]
    fn highest() -> Self {
        f64::INFINITY
    }
}

/// The discriminator used one level below a node split on `axis`.
#[inline]
pub(crate) fn next_axis<const K: usize>(axis: usize) -> usize {
    (axis + 1) % K
}

#[cfg(test)]
mod test {
    use super::{next_axis, Coordinate};

    #[test]
    fn sentinels_are_ordered() {
        assert!(u32::lowest() < u32::highest());
        assert!(i16::lowest() < i16::highest());
        assert!(f64::lowest() < f64::highest());
    }

    #[test]
    fn sentinels_span_the_domain() {
        assert_eq!(u32::lowest(), 0);
        assert_eq!(i16::highest(), i16::MAX);
        assert!(f64::lowest() <= f64::NEG_INFINITY);
        assert!(f64::highest() >= f64::INFINITY);
        assert!(f32::lowest() <= f32::MIN);
        assert!(f32::highest() >= f32::INFINITY);
    }

    #[test]
    fn axis_cycles() {
        assert_eq!(next_axis::<2>(0), 1);
        assert_eq!(next_axis::<2>(1), 0);
        assert_eq!(next_axis::<3>(2), 0);
        assert_eq!(next_axis::<1>(0), 0);
    }
}
