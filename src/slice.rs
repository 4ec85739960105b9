// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Selectors and the [`s![]`](crate::s!) macro for slicing arrays.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::{Dim, Dimension, Ix};

/// How one axis of an array is sliced: keep a range of it, or collapse it
/// to a single index.
///
/// Selectors are usually created by the [`s![]`](crate::s!) macro through
/// the `From` impls:
///
/// - `Selector::from(..)` is `All`, the full axis.
/// - `Selector::from(a..b)` is `Range { start: a, end: Some(b) }`; the
///   inclusive `a..=b` is stored as `a..b + 1`.
/// - `Selector::from(a..)` is `Range { start: a, end: None }`, up to the
///   end of the axis.
/// - `Selector::from(a)` is `Index(a)`, which removes the axis from the
///   result.
///
/// Bounds are signed so that a negative value can be written down; it is
/// rejected with `OutOfBounds` when the array is sliced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector
{
    /// The whole axis.
    All,
    /// The half-open range `start..end` of the axis. If `end` is `None`,
    /// the range extends to the end of the axis.
    Range
    {
        start: isize,
        end: Option<isize>,
    },
    /// A single index; the axis is removed from the result.
    Index(isize),
}

impl Selector
{
    /// Returns `true` if `self` is an `Index` value.
    pub fn is_index(&self) -> bool
    {
        matches!(self, Selector::Index(_))
    }

    /// Returns `true` if `self` keeps its axis (`All` or `Range`).
    pub fn is_range(&self) -> bool
    {
        !self.is_index()
    }

    /// Check the selector against an axis of length `axis_len` and return
    /// the first selected index and the number of selected indices (1 for
    /// an `Index`).
    ///
    /// **Errors** with `OutOfBounds` if a bound is negative, the start or
    /// index is not less than `axis_len`, the end is greater than
    /// `axis_len`, or the range is empty.
    ///
    /// ```
    /// use cowarray::{ErrorKind, Selector};
    ///
    /// assert_eq!(Selector::from(1..=2).resolve(3), Ok((1, 2)));
    /// assert_eq!(Selector::from(..).resolve(3), Ok((0, 3)));
    /// assert_eq!(Selector::from(2).resolve(3), Ok((2, 1)));
    /// assert_eq!(Selector::from(3..).resolve(3).unwrap_err().kind(), ErrorKind::OutOfBounds);
    /// ```
    pub fn resolve(&self, axis_len: Ix) -> Result<(Ix, Ix), ArrayError>
    {
        let oob = || from_kind(ErrorKind::OutOfBounds);
        match *self {
            Selector::All => Ok((0, axis_len)),
            Selector::Index(i) => {
                let i = usize::try_from(i).map_err(|_| oob())?;
                if i >= axis_len {
                    return Err(oob());
                }
                Ok((i, 1))
            }
            Selector::Range { start, end } => {
                let start = usize::try_from(start).map_err(|_| oob())?;
                let end = match end {
                    Some(e) => usize::try_from(e).map_err(|_| oob())?,
                    None => axis_len,
                };
                if start >= axis_len || end > axis_len || start >= end {
                    return Err(oob());
                }
                Ok((start, end - start))
            }
        }
    }
}

impl fmt::Display for Selector
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match *self {
            Selector::All => write!(f, "..")?,
            Selector::Index(index) => write!(f, "{}", index)?,
            Selector::Range { start, end } => {
                if start != 0 {
                    write!(f, "{}", start)?;
                }
                write!(f, "..")?;
                if let Some(i) = end {
                    write!(f, "{}", i)?;
                }
            }
        }
        Ok(())
    }
}

macro_rules! impl_selector_from_index_type {
    ($index:ty) => {
        impl From<$index> for Selector
        {
            #[inline]
            fn from(r: $index) -> Selector
            {
                Selector::Index(r as isize)
            }
        }

        impl From<Range<$index>> for Selector
        {
            #[inline]
            fn from(r: Range<$index>) -> Selector
            {
                Selector::Range {
                    start: r.start as isize,
                    end: Some(r.end as isize),
                }
            }
        }

        impl From<RangeInclusive<$index>> for Selector
        {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Selector
            {
                Selector::Range {
                    start: *r.start() as isize,
                    end: Some((*r.end() as isize).saturating_add(1)),
                }
            }
        }

        impl From<RangeFrom<$index>> for Selector
        {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Selector
            {
                Selector::Range {
                    start: r.start as isize,
                    end: None,
                }
            }
        }

        impl From<RangeTo<$index>> for Selector
        {
            #[inline]
            fn from(r: RangeTo<$index>) -> Selector
            {
                Selector::Range {
                    start: 0,
                    end: Some(r.end as isize),
                }
            }
        }

        impl From<RangeToInclusive<$index>> for Selector
        {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> Selector
            {
                Selector::Range {
                    start: 0,
                    end: Some((r.end as isize).saturating_add(1)),
                }
            }
        }
    };
}

impl_selector_from_index_type!(isize);
impl_selector_from_index_type!(usize);
impl_selector_from_index_type!(i32);

impl From<RangeFull> for Selector
{
    #[inline]
    fn from(_: RangeFull) -> Selector
    {
        Selector::All
    }
}

/// Check that `indices` has one selector per axis of `Din` and one range
/// selector per axis of `Dout`.
pub(crate) fn check_ranks<Din, Dout>(indices: &[Selector]) -> Result<(), ArrayError>
where
    Din: Dimension,
    Dout: Dimension,
{
    let out_ndim = indices.iter().filter(|s| s.is_range()).count();
    if indices.len() != Din::NDIM || out_ndim != Dout::NDIM {
        return Err(from_kind(ErrorKind::RankMismatch));
    }
    Ok(())
}

/// Represents all of the necessary information to perform a slice.
///
/// The type `T` is typically `[Selector; n]`, `&[Selector]`, or
/// `Vec<Selector>`. `Din` is the dimension of the array to slice and `Dout`
/// the dimension of the result of [`.slice()`](crate::Array::slice).
///
/// The [`s![]`](crate::s!) macro computes both dimension types from the
/// selector expressions. A hand built `SliceInfo` is checked by
/// [`SliceInfo::new`].
#[derive(Debug)]
pub struct SliceInfo<T, Din, Dout>
{
    in_dim: PhantomData<Din>,
    out_dim: PhantomData<Dout>,
    indices: T,
}

impl<T, Din, Dout> Deref for SliceInfo<T, Din, Dout>
{
    type Target = T;
    fn deref(&self) -> &Self::Target
    {
        &self.indices
    }
}

impl<T, Din, Dout> SliceInfo<T, Din, Dout>
{
    /// Returns a new `SliceInfo` instance without checking the ranks.
    ///
    /// The ranks are checked again by `.slice()`; an inconsistent instance
    /// makes it fail with `RankMismatch`.
    #[doc(hidden)]
    pub fn new_unchecked(indices: T, in_dim: PhantomData<Din>, out_dim: PhantomData<Dout>)
        -> SliceInfo<T, Din, Dout>
    {
        SliceInfo {
            in_dim,
            out_dim,
            indices,
        }
    }
}

impl<T, Din, Dout> SliceInfo<T, Din, Dout>
where
    T: AsRef<[Selector]>,
    Din: Dimension,
    Dout: Dimension,
{
    /// Returns a new `SliceInfo` instance.
    ///
    /// **Errors** with `RankMismatch` if the number of selectors is not
    /// `Din::NDIM` or the number of range selectors is not `Dout::NDIM`.
    ///
    /// ```
    /// use cowarray::{ErrorKind, Ix2, Ix3, Selector, SliceInfo};
    ///
    /// let info = SliceInfo::<_, Ix3, Ix2>::new([Selector::All, Selector::Index(0), Selector::All]);
    /// assert!(info.is_ok());
    ///
    /// let info = SliceInfo::<_, Ix3, Ix2>::new([Selector::All, Selector::All]);
    /// assert_eq!(info.unwrap_err().kind(), ErrorKind::RankMismatch);
    /// ```
    pub fn new(indices: T) -> Result<SliceInfo<T, Din, Dout>, ArrayError>
    {
        check_ranks::<Din, Dout>(indices.as_ref())?;
        Ok(SliceInfo {
            in_dim: PhantomData,
            out_dim: PhantomData,
            indices,
        })
    }

    /// Returns the number of dimensions of the input array.
    pub fn in_ndim(&self) -> usize
    {
        Din::NDIM
    }

    /// Returns the number of dimensions after calling
    /// [`.slice()`](crate::Array::slice).
    pub fn out_ndim(&self) -> usize
    {
        Dout::NDIM
    }
}

impl<T, Din, Dout> AsRef<[Selector]> for SliceInfo<T, Din, Dout>
where T: AsRef<[Selector]>
{
    fn as_ref(&self) -> &[Selector]
    {
        self.indices.as_ref()
    }
}

impl<T, Din, Dout> Copy for SliceInfo<T, Din, Dout> where T: Copy {}

impl<T, Din, Dout> Clone for SliceInfo<T, Din, Dout>
where T: Clone
{
    fn clone(&self) -> Self
    {
        SliceInfo {
            in_dim: PhantomData,
            out_dim: PhantomData,
            indices: self.indices.clone(),
        }
    }
}

/// The dimension type with one more axis.
///
/// Implemented from `Ix0` up to `Ix5`, so that `s![]` accepts at most six
/// selectors.
#[doc(hidden)]
pub trait NextRank
{
    type Larger;
}

macro_rules! impl_next_rank {
    ($($n:tt => $m:tt),*) => {
        $(
        impl NextRank for Dim<[Ix; $n]>
        {
            type Larger = Dim<[Ix; $m]>;
        }
        )*
    };
}

impl_next_rank!(0 => 1, 1 => 2, 2 => 3, 3 => 4, 4 => 5, 5 => 6);

/// Count one more input axis.
#[doc(hidden)]
pub fn next_in_dim<D>(_: PhantomData<D>) -> PhantomData<D::Larger>
where D: NextRank
{
    PhantomData
}

/// Compute the output dimension after one more selector: ranges add an
/// axis, indices do not.
#[doc(hidden)]
pub trait SliceNextDim<D1, D2>
{
    fn next_dim(&self, _: PhantomData<D1>) -> PhantomData<D2>;
}

macro_rules! impl_slicenextdim_larger {
    ($($range:ty),*) => {
        $(
        impl<D1: NextRank> SliceNextDim<D1, D1::Larger> for $range
        {
            fn next_dim(&self, _: PhantomData<D1>) -> PhantomData<D1::Larger>
            {
                PhantomData
            }
        }
        )*
    };
}

macro_rules! impl_slicenextdim_for_index_type {
    ($index:ty) => {
        impl<D1> SliceNextDim<D1, D1> for $index
        {
            fn next_dim(&self, _: PhantomData<D1>) -> PhantomData<D1>
            {
                PhantomData
            }
        }

        impl_slicenextdim_larger!(
            Range<$index>,
            RangeInclusive<$index>,
            RangeFrom<$index>,
            RangeTo<$index>,
            RangeToInclusive<$index>
        );
    };
}

impl_slicenextdim_for_index_type!(isize);
impl_slicenextdim_for_index_type!(usize);
impl_slicenextdim_for_index_type!(i32);

impl_slicenextdim_larger!(RangeFull);

/// Slice argument constructor.
///
/// `s![]` takes a list of ranges and indices, separated by comma, one per
/// axis of the array, and is converted into a [`&SliceInfo`](SliceInfo)
/// instance for [`.slice()`](crate::Array::slice).
///
/// Each item is any of the following:
///
/// * *index*: an index to collapse that axis at; the axis is removed from
///   the result
/// * *range*: a range of that axis to keep: `a..b`, `a..=b`, `a..`, `..b`,
///   `..=b`, or `..` for the whole axis
///
/// *index* and range bounds can be expressions of type `usize`, `isize`, or
/// `i32`. The number of items must match the number of axes of the array,
/// and at least one item must be a range; both are checked at compile time.
/// The bounds themselves are checked against the array by `.slice()`.
///
/// For example `s![0..2, 6, 1..=4]` keeps the indices 0 and 1 of the first
/// axis, collapses the second axis at index 6, and keeps the indices 1 to 4
/// of the third axis. The input array must have 3 dimensions; the result
/// has shape `(2, 4)`.
///
/// ```
/// use cowarray::{s, Array2};
///
/// let a = Array2::from_shape_fn((3, 4), |(i, j)| 10 * i + j);
/// let corner = a.slice(s![1.., ..=1]).unwrap();
/// assert_eq!(corner.to_vec(), vec![10, 11, 20, 21]);
///
/// let column = a.slice(s![.., 3]).unwrap();
/// assert_eq!(column.to_vec(), vec![3, 13, 23]);
/// ```
#[macro_export]
macro_rules! s(
    (@parse $in_dim:expr, $out_dim:expr, []) => {
        compile_error!("s![] needs at least one selector")
    };
    // final item
    (@parse $in_dim:expr, $out_dim:expr, [$($stack:tt)*] $r:expr) => {
        &$crate::SliceInfo::new_unchecked(
            [$($stack)* $crate::s!(@convert $r)],
            $crate::slice::next_in_dim($in_dim),
            $crate::SliceNextDim::next_dim(&$r, $out_dim),
        )
    };
    // final item, trailing comma
    (@parse $in_dim:expr, $out_dim:expr, [$($stack:tt)*] $r:expr ,) => {
        &$crate::SliceInfo::new_unchecked(
            [$($stack)* $crate::s!(@convert $r)],
            $crate::slice::next_in_dim($in_dim),
            $crate::SliceNextDim::next_dim(&$r, $out_dim),
        )
    };
    (@parse $in_dim:expr, $out_dim:expr, [$($stack:tt)*] $r:expr, $($t:tt)*) => {
        $crate::s![@parse
            $crate::slice::next_in_dim($in_dim),
            $crate::SliceNextDim::next_dim(&$r, $out_dim),
            [$($stack)* $crate::s!(@convert $r),]
            $($t)*
        ]
    };
    // convert range/index into Selector
    (@convert $r:expr) => {
        <$crate::Selector as ::core::convert::From<_>>::from($r)
    };
    ($($t:tt)*) => {
        $crate::s![@parse
            ::core::marker::PhantomData::<$crate::Ix0>,
            ::core::marker::PhantomData::<$crate::Ix0>,
            []
            $($t)*
        ]
    };
);
