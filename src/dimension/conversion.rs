// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tuple to array conversion, IntoDimension, and related things

use core::ops::{Index, IndexMut};

use crate::{Dim, Dimension, Ix, Ix1};

/// Argument conversion into a dimension.
///
/// Implemented for `usize` (one axis), tuples and fixed size arrays of
/// `usize` with one to six elements, and the `Dim` types themselves.
pub trait IntoDimension
{
    type Dim: Dimension;
    fn into_dimension(self) -> Self::Dim;
}

impl IntoDimension for Ix
{
    type Dim = Ix1;
    #[inline(always)]
    fn into_dimension(self) -> Ix1
    {
        Dim::new([self])
    }
}

impl<D> IntoDimension for D
where D: Dimension
{
    type Dim = D;
    #[inline(always)]
    fn into_dimension(self) -> Self
    {
        self
    }
}

macro_rules! tuple_to_array {
    ([] $($n:tt)*) => {
        $(
        impl IntoDimension for [Ix; $n] {
            type Dim = Dim<[Ix; $n]>;
            #[inline(always)]
            fn into_dimension(self) -> Self::Dim {
                Dim::new(self)
            }
        }

        impl IntoDimension for index!(tuple_type [Ix] $n) {
            type Dim = Dim<[Ix; $n]>;
            #[inline(always)]
            fn into_dimension(self) -> Self::Dim {
                Dim::new(index!(array_expr [self] $n))
            }
        }

        impl Index<usize> for Dim<[Ix; $n]> {
            type Output = usize;
            #[inline(always)]
            fn index(&self, index: usize) -> &Self::Output {
                &self.ix()[index]
            }
        }

        impl IndexMut<usize> for Dim<[Ix; $n]> {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.ixm()[index]
            }
        }
        )*
    }
}

tuple_to_array!([] 1 2 3 4 5 6);
