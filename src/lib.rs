// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/cowarray/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::len_without_is_empty, // an array is never empty unless invalid
)]
#![doc(test(attr(allow(unused_variables))))]
#![cfg_attr(not(feature = "std"), no_std)]

//! The `cowarray` crate provides a fixed-rank *n*-dimensional container
//! with value semantics.
//!
//! In *n*-dimensional we include, for example, 1-dimensional rows or
//! columns, 2-dimensional matrices, and higher dimensional arrays, up to
//! six axes. The rank of an array is part of its type.
//!
//! ## Highlights
//!
//! - Generic *n*-dimensional array, [`Array`], stored as one contiguous
//!   buffer in row-major order (the last axis varies fastest).
//! - Cheap copies: cloning an array shares its buffer. The first write
//!   through either copy forks a private buffer (*copy-on-write*), so
//!   copies never observe each other's mutations.
//! - Constant time multi-index access with explicit errors for out of
//!   bounds indices and for arrays that have no storage.
//! - Iteration in row-major order, with or without the multi-index of
//!   each element ([`.indexed_iter()`](Array::indexed_iter)).
//! - Slicing with the [`s![]`](s!) macro: ranges keep an axis, integer
//!   indices collapse it, and the rank of the result is computed at
//!   compile time.
//!
//! ## Crate Feature Flags
//!
//! - `std`: Rust standard library (enabled by default). Without it the
//!   crate is `no_std` and only needs `alloc`.
//!
//! ## Example
//!
//! ```
//! use cowarray::{s, Array2};
//!
//! let mut a = Array2::<i32>::zeros((2, 3));
//! for ((i, j), elt) in a.indexed_iter_mut().unwrap() {
//!     *elt = (i * 3 + j) as i32;
//! }
//! assert_eq!(a[(1, 2)], 5);
//!
//! let b = a.clone();
//! assert!(a.shares_storage(&b));
//! a[(0, 0)] = 100;
//! assert!(!a.shares_storage(&b));
//! assert_eq!(b[(0, 0)], 0);
//!
//! let c = b.slice(s![.., 1..=2]).unwrap();
//! assert_eq!(c.shape(), &[2, 2]);
//! assert_eq!(c.as_slice().unwrap(), &[1, 2, 4, 5]);
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use crate::dimension::{Dim, Dimension, IntoDimension, NdIndex};
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::iterators::{Cursor, IndexedIter, IndexedIterMut, Iter, IterMut};
pub use crate::slice::{Selector, SliceInfo, SliceNextDim};

pub use crate::aliases::*;

mod aliases;
mod arrayformat;
mod arraytraits;
mod data_repr;
pub mod dimension;
mod error;
mod impl_1d;
mod impl_clone;
mod impl_constructors;
mod impl_methods;
pub mod iterators;
pub mod prelude;
pub mod slice;

use crate::data_repr::OwnedRcRepr;

/// Array index type
pub type Ix = usize;

/// An *n*-dimensional array with copy-on-write value semantics.
///
/// The array owns (a share of) a contiguous buffer of elements of type
/// `A`. Its rank is fixed by the dimension type `D` (`Ix1` to `Ix6`), and
/// its shape is fixed for the life of the value.
///
/// ## Storage and copying
///
/// Elements are stored in row-major order: the strides of an array with
/// shape `(a, b, c)` are `(b * c, c, 1)`. Cloning an array is *O(1)*: the
/// clone shares the buffer with the original. Every method that gives
/// mutable access to elements first checks whether the buffer is shared
/// and, if it is, copies it into a fresh buffer owned by this array alone.
///
/// ```
/// use cowarray::Array1;
///
/// let mut a = Array1::from_vec(vec![1, 2, 3]);
/// let b = a.clone();
/// assert_eq!(a.as_ptr(), b.as_ptr());
///
/// a.set(0, 10).unwrap();
/// assert_ne!(a.as_ptr(), b.as_ptr());
/// assert_eq!(a.to_vec(), vec![10, 2, 3]);
/// assert_eq!(b.to_vec(), vec![1, 2, 3]);
/// ```
///
/// ## Valid and empty arrays
///
/// An array is either *valid* (it has storage and at least one element) or
/// *empty*: created by [`Array::empty`] or [`Default`], or left behind by
/// [`.take()`](Array::take). Indexing, iteration and slicing of an empty
/// array fail with [`ErrorKind::InvalidArray`].
///
/// ## Indexing
///
/// Arrays are indexed with `D` itself, fixed size arrays `[i, j]`, tuples
/// `(i, j)`, or a plain `usize` for one dimensional arrays. The number of
/// components must match the rank, which is checked at compile time.
/// [`.get()`](Array::get) and [`.get_mut()`](Array::get_mut) return a
/// `Result`; the `Index` and `IndexMut` operators panic on error.
///
/// ## Slicing
///
/// [`.slice()`](Array::slice) takes one selector per axis, built with the
/// [`s![]`](s!) macro, and returns a new, independent array:
///
/// ```
/// use cowarray::{s, Array2, Array3};
///
/// let a = Array3::from_shape_fn((2, 3, 4), |(i, j, k)| 100 * i + 10 * j + k);
/// let b: Array2<_> = a.slice(s![.., 0..2, 1]).unwrap();
/// assert_eq!(b.dim(), (2, 2));
/// assert_eq!(b.to_vec(), vec![1, 11, 101, 111]);
/// ```
pub struct Array<A, D>
{
    /// `None` for an empty array.
    data: Option<OwnedRcRepr<A>>,
    /// The lengths of the axes.
    dim: D,
    /// The element count to step along each axis.
    strides: D,
}

/// Private Methods
impl<A, D> Array<A, D>
where D: Dimension
{
    /// Return the storage, or an `InvalidArray` error for an empty array.
    #[inline]
    fn repr(&self) -> Result<&OwnedRcRepr<A>, ArrayError>
    {
        self.data
            .as_ref()
            .ok_or_else(|| error::from_kind(ErrorKind::InvalidArray))
    }
}
