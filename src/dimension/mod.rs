// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shapes, strides and the conversion between flat offsets and indices.

use crate::error::{from_kind, ArrayError, ErrorKind};

pub use self::conversion::IntoDimension;
pub use self::dim::*;
pub use self::dimension_trait::Dimension;
pub use self::ndindex::NdIndex;

#[macro_use]
mod macros;
mod conversion;
pub mod dim;
mod dimension_trait;
mod ndindex;

/// Returns the number of elements of a valid array shape.
///
/// A shape is valid if every axis length is positive and the product of
/// the axis lengths fits in `isize` (so that the buffer can be allocated).
/// Otherwise an `InvalidShape` error is returned.
pub fn size_of_shape_checked<D: Dimension>(dim: &D) -> Result<usize, ArrayError>
{
    if dim.slice().iter().any(|&d| d == 0) {
        return Err(from_kind(ErrorKind::InvalidShape));
    }
    let size = dim
        .size_checked()
        .ok_or_else(|| from_kind(ErrorKind::InvalidShape))?;
    if size > isize::MAX as usize {
        Err(from_kind(ErrorKind::InvalidShape))
    } else {
        Ok(size)
    }
}

#[cfg(test)]
mod test
{
    use super::{size_of_shape_checked, Dimension, IntoDimension};
    use crate::error::{from_kind, ErrorKind};
    use crate::{Dim, Ix1, Ix2, Ix3, Ix4, Ix6};
    use alloc::vec;
    use alloc::vec::Vec;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn default_strides_row_major()
    {
        assert_eq!(Dim([2, 3, 4]).default_strides(), Dim([12, 4, 1]));
        assert_eq!(Dim([5, 1]).default_strides(), Dim([1, 1]));
        assert_eq!(Dim(7).default_strides(), Dim([1]));
        let dim = Dim([3, 2, 5, 4]);
        let strides = dim.default_strides();
        // element count equals extent 0 times stride 0
        assert_eq!(dim[0] * strides[0], dim.size());
    }

    #[test]
    fn stride_offset_is_dot_product()
    {
        let strides = Dim([12, 4, 1]);
        assert_eq!(Ix3::stride_offset(&Dim([1, 2, 3]), &strides), 12 + 8 + 3);
        assert_eq!(Ix1::stride_offset(&Dim([9]), &Dim([1])), 9);
    }

    #[test]
    fn stride_offset_checked_bounds()
    {
        let dim = Dim([2, 3]);
        let strides = dim.default_strides();
        assert_eq!(dim.stride_offset_checked(&strides, &Dim([1, 2])), Ok(5));
        assert_eq!(
            dim.stride_offset_checked(&strides, &Dim([2, 0])),
            Err(from_kind(ErrorKind::OutOfBounds))
        );
        assert_eq!(
            dim.stride_offset_checked(&strides, &Dim([0, 3])),
            Err(from_kind(ErrorKind::OutOfBounds))
        );
        let dim = Dim(5);
        assert_eq!(
            dim.stride_offset_checked(&Dim([1]), &Dim(5)),
            Err(from_kind(ErrorKind::OutOfBounds))
        );
    }

    #[test]
    fn offset_to_index_checked_bounds()
    {
        let dim = Dim([2, 3, 4]);
        let strides = dim.default_strides();
        assert_eq!(dim.offset_to_index_checked(&strides, 23), Ok(Dim([1, 2, 3])));
        assert_eq!(
            dim.offset_to_index_checked(&strides, 24),
            Err(from_kind(ErrorKind::OutOfBounds))
        );
    }

    #[test]
    fn next_for_walks_row_major()
    {
        let dim = Dim([2, 2]);
        let mut index = dim.first_index();
        let mut seen = Vec::new();
        while let Some(ix) = index {
            seen.push(ix.into_pattern());
            index = dim.next_for(ix);
        }
        assert_eq!(seen, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn shape_validation()
    {
        assert_eq!(size_of_shape_checked(&Dim([2, 3])), Ok(6));
        assert_eq!(size_of_shape_checked(&Dim([2, 0])), Err(from_kind(ErrorKind::InvalidShape)));
        assert_eq!(
            size_of_shape_checked(&Dim([usize::MAX, 2])),
            Err(from_kind(ErrorKind::InvalidShape))
        );
        assert_eq!(
            size_of_shape_checked(&Dim([isize::MAX as usize, 2])),
            Err(from_kind(ErrorKind::InvalidShape))
        );
    }

    fn round_trip<D: Dimension>(dim: D) -> bool
    {
        let strides = dim.default_strides();
        (0..dim.size()).all(|offset| {
            let index = D::offset_to_index(offset, &strides);
            dim.stride_offset_checked(&strides, &index) == Ok(offset)
        })
    }

    quickcheck! {
        fn offset_index_round_trip_1(a: u8) -> bool {
            round_trip(Dim(a as usize % 64 + 1))
        }

        fn offset_index_round_trip_2(a: u8, b: u8) -> bool {
            round_trip::<Ix2>((a as usize % 16 + 1, b as usize % 16 + 1).into_dimension())
        }

        fn offset_index_round_trip_3(a: u8, b: u8, c: u8) -> bool {
            round_trip(Dim([a as usize % 8 + 1, b as usize % 8 + 1, c as usize % 8 + 1]))
        }

        fn offset_index_round_trip_4(a: u8, b: u8, c: u8, d: u8) -> bool {
            round_trip::<Ix4>(Dim([a as usize % 5 + 1, b as usize % 5 + 1,
                                   c as usize % 5 + 1, d as usize % 5 + 1]))
        }

        fn offset_index_round_trip_6(dims: Vec<u8>) -> TestResult {
            if dims.len() < 6 {
                return TestResult::discard();
            }
            let mut dim = Ix6::zeros();
            for (d, &n) in dim.slice_mut().iter_mut().zip(&dims) {
                *d = n as usize % 3 + 1;
            }
            TestResult::from_bool(round_trip(dim))
        }
    }
}
