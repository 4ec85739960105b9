// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::IndexMut;

use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::IntoDimension;
use crate::{Dim, Ix, Ix1};

/// Array shape and index trait.
///
/// This trait defines the shape/stride arithmetic shared by the array,
/// its iterators and slicing. It is implemented for `Ix1` through `Ix6`;
/// the rank of an array is always known from its type.
///
/// Strides are always the row-major ("C order") strides of the shape: the
/// last axis varies fastest and has stride 1.
///
/// **Note:** *This trait can not be implemented outside the crate*
pub trait Dimension:
    Clone + Eq + Debug + Hash + Default + IndexMut<usize, Output = usize> + private::Sealed
{
    /// The number of axes.
    const NDIM: usize;
    /// Pattern matching friendly form of the dimension value.
    ///
    /// - For `Ix1`: `usize`,
    /// - For `Ix2`: `(usize, usize)`
    /// - and so on..
    type Pattern: IntoDimension<Dim = Self> + Clone + Debug + PartialEq + Eq;

    /// Returns the number of dimensions (number of axes).
    #[inline]
    fn ndim(&self) -> usize
    {
        Self::NDIM
    }

    /// Convert the dimension into a pattern matching friendly value.
    fn into_pattern(self) -> Self::Pattern;

    /// Compute the size of the dimension (number of elements)
    fn size(&self) -> usize
    {
        self.slice().iter().product()
    }

    /// Compute the size while checking for overflow.
    fn size_checked(&self) -> Option<usize>
    {
        self.slice()
            .iter()
            .try_fold(1usize, |s, &a| s.checked_mul(a))
    }

    #[doc(hidden)]
    fn slice(&self) -> &[Ix];

    #[doc(hidden)]
    fn slice_mut(&mut self) -> &mut [Ix];

    /// Creates a dimension of all zeros.
    fn zeros() -> Self
    {
        Self::default()
    }

    /// Returns the row-major strides for an array with this shape.
    ///
    /// Shape (a, b, c) gives strides (b * c, c, 1).
    fn default_strides(&self) -> Self
    {
        let mut strides = Self::zeros();
        {
            let mut it = strides.slice_mut().iter_mut().rev();
            // Set first element to 1
            if let Some(rs) = it.next() {
                *rs = 1;
            }
            let mut cum_prod = 1;
            for (rs, dim) in it.zip(self.slice().iter().rev()) {
                cum_prod *= *dim;
                *rs = cum_prod;
            }
        }
        strides
    }

    /// Return the flat offset of `index` for the given `strides`:
    /// the sum of `index[i] * strides[i]` over all axes.
    ///
    /// The index is not bounds checked.
    #[inline]
    fn stride_offset(index: &Self, strides: &Self) -> usize
    {
        let mut offset = 0;
        for (&i, &s) in index.slice().iter().zip(strides.slice()) {
            offset += i * s;
        }
        offset
    }

    /// Return the flat offset of `index` if every component is within
    /// the axis lengths of `self`, or an `OutOfBounds` error.
    #[inline]
    fn stride_offset_checked(&self, strides: &Self, index: &Self) -> Result<usize, ArrayError>
    {
        let mut offset = 0;
        for ((&d, &i), &s) in self.slice().iter().zip(index.slice()).zip(strides.slice()) {
            if i >= d {
                return Err(from_kind(ErrorKind::OutOfBounds));
            }
            offset += i * s;
        }
        Ok(offset)
    }

    /// Recover the multi-index of the flat `offset` for the given `strides`.
    ///
    /// Axis 0 takes the quotient by `strides[0]`, the remainder feeds the
    /// next axis, and the last axis takes what remains.
    #[inline]
    fn offset_to_index(offset: usize, strides: &Self) -> Self
    {
        let mut index = Self::zeros();
        let mut rem = offset;
        for (ix, &s) in index.slice_mut().iter_mut().zip(strides.slice()) {
            *ix = rem / s;
            rem %= s;
        }
        index
    }

    /// Recover the multi-index of `offset` if it is less than the number of
    /// elements of `self`, or return an `OutOfBounds` error.
    fn offset_to_index_checked(&self, strides: &Self, offset: usize) -> Result<Self, ArrayError>
    {
        if offset >= self.size() {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        Ok(Self::offset_to_index(offset, strides))
    }

    #[doc(hidden)]
    #[inline]
    fn first_index(&self) -> Option<Self>
    {
        if self.slice().iter().any(|&ax| ax == 0) {
            return None;
        }
        Some(Self::zeros())
    }

    /// Iteration -- Use self as size, and return next index after `index`
    /// in row-major order, or None if there are no more.
    #[inline]
    fn next_for(&self, index: Self) -> Option<Self>
    {
        let mut index = index;
        let mut done = false;
        for (&dim, ix) in self.slice().iter().zip(index.slice_mut()).rev() {
            *ix += 1;
            if *ix == dim {
                *ix = 0;
            } else {
                done = true;
                break;
            }
        }
        if done {
            Some(index)
        } else {
            None
        }
    }
}

// One axis: the offset is the index itself and the stride is always 1.
impl Dimension for Dim<[Ix; 1]>
{
    const NDIM: usize = 1;
    type Pattern = Ix;

    #[inline]
    fn into_pattern(self) -> Ix
    {
        get!(&self, 0)
    }
    #[inline]
    fn size(&self) -> usize
    {
        get!(self, 0)
    }
    #[inline]
    fn size_checked(&self) -> Option<usize>
    {
        Some(get!(self, 0))
    }
    #[inline]
    fn slice(&self) -> &[Ix]
    {
        self.ix()
    }
    #[inline]
    fn slice_mut(&mut self) -> &mut [Ix]
    {
        self.ixm()
    }
    #[inline]
    fn default_strides(&self) -> Self
    {
        Ix1::new([1])
    }
    #[inline]
    fn stride_offset(index: &Self, _strides: &Self) -> usize
    {
        get!(index, 0)
    }
    #[inline]
    fn stride_offset_checked(&self, _strides: &Self, index: &Self) -> Result<usize, ArrayError>
    {
        let i = get!(index, 0);
        if i < get!(self, 0) {
            Ok(i)
        } else {
            Err(from_kind(ErrorKind::OutOfBounds))
        }
    }
    #[inline]
    fn offset_to_index(offset: usize, _strides: &Self) -> Self
    {
        Ix1::new([offset])
    }
    #[inline]
    fn next_for(&self, index: Self) -> Option<Self>
    {
        let next = get!(&index, 0) + 1;
        if next < get!(self, 0) {
            Some(Ix1::new([next]))
        } else {
            None
        }
    }
}

macro_rules! large_dim {
    ($($n:tt)*) => ($(
        impl Dimension for Dim<[Ix; $n]> {
            const NDIM: usize = $n;
            type Pattern = index!(tuple_type [Ix] $n);
            #[inline]
            fn into_pattern(self) -> Self::Pattern {
                index!(tuple_expr [self] $n)
            }
            #[inline]
            fn slice(&self) -> &[Ix] { self.ix() }
            #[inline]
            fn slice_mut(&mut self) -> &mut [Ix] { self.ixm() }
        }
    )*)
}

large_dim!(2 3 4 5 6);

mod private
{
    use crate::{Dim, Ix};

    pub trait Sealed {}

    macro_rules! sealed {
        ($($n:tt)*) => {
            $(impl Sealed for Dim<[Ix; $n]> {})*
        }
    }

    sealed!(1 2 3 4 5 6);
}
