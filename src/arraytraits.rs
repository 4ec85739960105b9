// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::hash;
use core::ops::{Index, IndexMut};

use crate::error::ArrayError;
use crate::{Array, Dimension, NdIndex};

#[cold]
#[inline(never)]
fn index_error(err: ArrayError) -> !
{
    panic!("cowarray: {}", err)
}

/// Access the element at **index**.
///
/// **Panics** if the array is empty or the index is out of bounds.
impl<A, D, I> Index<I> for Array<A, D>
where
    D: Dimension,
    I: NdIndex<D>,
{
    type Output = A;
    #[inline]
    fn index(&self, index: I) -> &A
    {
        match self.get(index) {
            Ok(elt) => elt,
            Err(e) => index_error(e),
        }
    }
}

/// Access the element at **index** mutably, copying the storage first if
/// it is shared.
///
/// **Panics** if the array is empty or the index is out of bounds.
impl<A, D, I> IndexMut<I> for Array<A, D>
where
    D: Dimension,
    I: NdIndex<D>,
    A: Clone,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut A
    {
        match self.get_mut(index) {
            Ok(elt) => elt,
            Err(e) => index_error(e),
        }
    }
}

/// Return `true` if the array shapes and all elements of `self` and
/// `other` are equal. Two empty arrays are equal; an empty array is not
/// equal to a valid one.
impl<A, D> PartialEq for Array<A, D>
where
    A: PartialEq,
    D: Dimension,
{
    fn eq(&self, other: &Array<A, D>) -> bool
    {
        self.shape() == other.shape() && self.as_slice() == other.as_slice()
    }
}

impl<A, D> Eq for Array<A, D>
where
    A: Eq,
    D: Dimension,
{
}

impl<A, D> hash::Hash for Array<A, D>
where
    A: hash::Hash,
    D: Dimension,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H)
    {
        self.shape().hash(state);
        if let Some(data) = self.as_slice() {
            data.hash(state);
        }
    }
}

/// Create an empty (invalid) array; see [`Array::empty`].
impl<A, D> Default for Array<A, D>
where D: Dimension
{
    fn default() -> Self
    {
        Array::empty()
    }
}

#[cfg(test)]
mod tests
{
    use crate::{Array2, Array3};

    #[test]
    fn index_and_index_mut()
    {
        let mut a = Array3::<i32>::zeros((2, 3, 4));
        a[(1, 2, 3)] = 7;
        a[[0, 1, 2]] += 2;
        assert_eq!(a[(1, 2, 3)], 7);
        assert_eq!(a[[0, 1, 2]], 2);
        assert_eq!(a.as_slice().unwrap()[23], 7);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics()
    {
        let a = Array2::<i32>::zeros((2, 3));
        let _ = a[(2, 0)];
    }

    #[test]
    #[should_panic]
    fn index_empty_panics()
    {
        let mut a: Array2<i32> = Default::default();
        a[(0, 0)] = 1;
    }

    #[test]
    fn eq_compares_shape_and_elements()
    {
        let a = Array2::from_elem((2, 3), 1);
        let b = Array2::from_elem((3, 2), 1);
        assert_ne!(a, b);
        let mut c = a.clone();
        assert_eq!(a, c);
        c[(0, 0)] = 2;
        assert_ne!(a, c);
        let empty: Array2<i32> = Default::default();
        assert_eq!(Array2::<i32>::empty(), empty);
        assert_ne!(a, empty);
    }
}
