use geo_traits::{CoordTrait, RectTrait};
use num_traits::{Num, NumCast};

use crate::error::{KdIndexError, Result};
use crate::r#type::Coordinate;

/// An axis-aligned, closed box in `K` dimensions.
///
/// A point `p` lies inside when `min[i] <= p[i] <= max[i]` for every axis `i`. A box whose `min`
/// equals its `max` is a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<N: Coordinate, const K: usize> {
    min: [N; K],
    max: [N; K],
}

impl<N: Coordinate, const K: usize> Bounds<N, K> {
    /// Create a box from its low and high corners.
    ///
    /// The corners are not validated. A box that is inverted on some axis contains nothing.
    pub fn new(min: [N; K], max: [N; K]) -> Self {
        Self { min, max }
    }

    /// Create a box from its low and high corners, rejecting corners that are inverted on any
    /// axis.
    pub fn try_new(min: [N; K], max: [N; K]) -> Result<Self> {
        if let Some(axis) = (0..K).find(|&axis| min[axis] > max[axis]) {
            return Err(KdIndexError::InvertedBounds { axis });
        }
        Ok(Self { min, max })
    }

    /// Create a box from corner slices, which must each hold exactly `K` coordinates.
    pub fn try_from_slices(min: &[N], max: &[N]) -> Result<Self> {
        let min = to_array::<N, K>(min)?;
        let max = to_array::<N, K>(max)?;
        Self::try_new(min, max)
    }

    /// The degenerate box holding only `point`.
    pub fn point(point: [N; K]) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// The box spanning the whole coordinate domain, from [`Coordinate::lowest`] to
    /// [`Coordinate::highest`] on every axis. Float boxes include both infinities.
    pub fn everything() -> Self {
        Self {
            min: [N::lowest(); K],
            max: [N::highest(); K],
        }
    }

    /// The low corner.
    #[inline]
    pub fn min(&self) -> &[N; K] {
        &self.min
    }

    /// The high corner.
    #[inline]
    pub fn max(&self) -> &[N; K] {
        &self.max
    }

    /// Returns `true` if `point` lies inside this box on every axis.
    #[inline]
    pub fn contains(&self, point: &[N; K]) -> bool {
        (0..K).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    /// Returns `true` if the two closed boxes share at least one point.
    #[inline]
    pub fn intersects(&self, other: &Bounds<N, K>) -> bool {
        (0..K).all(|axis| self.min[axis] <= other.max[axis] && other.min[axis] <= self.max[axis])
    }

    /// Split this box at `value` on `axis`.
    ///
    /// The first box keeps everything up to and including `value`, the second everything from
    /// `value` upwards. Both keep `value` itself, so the pair is conservative for the strict
    /// `hi` side of a node.
    pub fn split(&self, axis: usize, value: N) -> (Bounds<N, K>, Bounds<N, K>) {
        let mut lo = *self;
        let mut hi = *self;
        lo.max[axis] = value;
        hi.min[axis] = value;
        (lo, hi)
    }
}

impl<N: Coordinate + Num + NumCast> Bounds<N, 2> {
    /// Create a box from any geo-traits rectangle.
    pub fn from_rect(rect: &impl RectTrait<T = N>) -> Self {
        let min = rect.min();
        let max = rect.max();
        Self {
            min: [min.x(), min.y()],
            max: [max.x(), max.y()],
        }
    }
}

pub(crate) fn to_array<N: Coordinate, const K: usize>(slice: &[N]) -> Result<[N; K]> {
    slice
        .try_into()
        .map_err(|_| KdIndexError::DimensionMismatch {
            expected: K,
            actual: slice.len(),
        })
}

/// A single two-dimensional coordinate.
///
/// Used in the implementation of RectTrait for [`Bounds`] and
/// [`Cursor`][crate::kdtree::Cursor].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord<N: Coordinate> {
    x: N,
    y: N,
}

impl<N: Coordinate> From<[N; 2]> for Coord<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self { x, y }
    }
}

impl<N: Coordinate + Num + NumCast> CoordTrait for Coord<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

/// Implement [`GeometryTrait`][geo_traits::GeometryTrait] for a two-dimensional box type whose
/// only geometry is itself, as a [`RectTrait`].
macro_rules! impl_rect_geometry {
    ($($ty:tt)*) => {
        impl<N> geo_traits::GeometryTrait for $($ty)*
        where
            N: $crate::r#type::Coordinate + num_traits::Num + num_traits::NumCast,
        {
            type T = N;
            type PointType<'b>
                = geo_traits::UnimplementedPoint<N>
            where
                Self: 'b;
            type LineStringType<'b>
                = geo_traits::UnimplementedLineString<N>
            where
                Self: 'b;
            type PolygonType<'b>
                = geo_traits::UnimplementedPolygon<N>
            where
                Self: 'b;
            type MultiPointType<'b>
                = geo_traits::UnimplementedMultiPoint<N>
            where
                Self: 'b;
            type MultiLineStringType<'b>
                = geo_traits::UnimplementedMultiLineString<N>
            where
                Self: 'b;
            type MultiPolygonType<'b>
                = geo_traits::UnimplementedMultiPolygon<N>
            where
                Self: 'b;
            type GeometryCollectionType<'b>
                = geo_traits::UnimplementedGeometryCollection<N>
            where
                Self: 'b;
            type RectType<'b>
                = Self
            where
                Self: 'b;
            type TriangleType<'b>
                = geo_traits::UnimplementedTriangle<N>
            where
                Self: 'b;
            type LineType<'b>
                = geo_traits::UnimplementedLine<N>
            where
                Self: 'b;

            fn dim(&self) -> geo_traits::Dimensions {
                geo_traits::Dimensions::Xy
            }

            fn as_type(
                &self,
            ) -> geo_traits::GeometryType<
                '_,
                Self::PointType<'_>,
                Self::LineStringType<'_>,
                Self::PolygonType<'_>,
                Self::MultiPointType<'_>,
                Self::MultiLineStringType<'_>,
                Self::MultiPolygonType<'_>,
                Self::GeometryCollectionType<'_>,
                Self::RectType<'_>,
                Self::TriangleType<'_>,
                Self::LineType<'_>,
            > {
                geo_traits::GeometryType::Rect(self)
            }
        }
    };
}

pub(crate) use impl_rect_geometry;

impl_rect_geometry!(Bounds<N, 2>);

impl<N: Coordinate + Num + NumCast> RectTrait for Bounds<N, 2> {
    type CoordType<'a>
        = Coord<N>
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        self.min.into()
    }

    fn max(&self) -> Self::CoordType<'_> {
        self.max.into()
    }
}
