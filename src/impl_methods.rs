// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;
use core::mem;
use core::ptr;

use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::iterators::{Cursor, IndexedIter, IndexedIterMut, Iter, IterMut};
use crate::slice::{Selector, SliceInfo};
use crate::{Array, Dimension, Ix, NdIndex};

/// # Methods For All Arrays
impl<A, D> Array<A, D>
where D: Dimension
{
    /// Return the total number of elements in the array, or zero for an
    /// empty (invalid) array.
    pub fn len(&self) -> usize
    {
        if self.data.is_some() {
            self.dim.size()
        } else {
            0
        }
    }

    /// Return the number of dimensions (axes) in the array.
    pub fn ndim(&self) -> usize
    {
        D::NDIM
    }

    /// Return the shape of the array in its “pattern” form,
    /// an integer in the one-dimensional case, tuple in the n-dimensional cases.
    pub fn dim(&self) -> D::Pattern
    {
        self.dim.clone().into_pattern()
    }

    /// Return the shape of the array as it stored in the array.
    pub fn raw_dim(&self) -> D
    {
        self.dim.clone()
    }

    /// Return the shape of the array as a slice.
    ///
    /// An empty array reports zero for every axis.
    pub fn shape(&self) -> &[Ix]
    {
        self.dim.slice()
    }

    /// Return the strides of the array as a slice.
    pub fn strides(&self) -> &[Ix]
    {
        self.strides.slice()
    }

    /// Return `true` if the array has storage, `false` if it is empty
    /// (default constructed or taken from).
    pub fn is_valid(&self) -> bool
    {
        self.data.is_some()
    }

    /// Return `true` if the array is the sole owner of its storage, so that
    /// writing to it will not copy the elements.
    ///
    /// An empty array has no storage and returns `false`.
    pub fn is_unique(&self) -> bool
    {
        match self.data {
            Some(ref repr) => repr.is_unique(),
            None => false,
        }
    }

    /// Return `true` if `self` and `other` are backed by the same storage,
    /// for example right after one was cloned from the other.
    pub fn shares_storage(&self, other: &Self) -> bool
    {
        match (&self.data, &other.data) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Return a pointer to the first element in the array, or a null
    /// pointer for an empty array.
    pub fn as_ptr(&self) -> *const A
    {
        match self.data {
            Some(ref repr) => repr.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Return a reference to the element at `index`.
    ///
    /// **Errors** with `InvalidArray` if the array is empty, and with
    /// `OutOfBounds` if any component of the index is out of bounds.
    ///
    /// ```
    /// use cowarray::{Array2, ErrorKind};
    ///
    /// let a = Array2::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
    ///
    /// assert_eq!(a.get((0, 1)), Ok(&2.));
    /// assert_eq!(a.get([1, 1]), Ok(&4.));
    /// assert_eq!(a.get((0, 2)).unwrap_err().kind(), ErrorKind::OutOfBounds);
    /// ```
    pub fn get<I>(&self, index: I) -> Result<&A, ArrayError>
    where I: NdIndex<D>
    {
        let data = self.repr()?.as_slice();
        let offset = index.index_checked(&self.dim, &self.strides)?;
        Ok(&data[offset])
    }

    /// Return a mutable reference to the element at `index`.
    ///
    /// If the storage is shared with another array, it is copied first so
    /// that the write is only visible through `self`.
    ///
    /// **Errors** with `InvalidArray` if the array is empty, and with
    /// `OutOfBounds` if any component of the index is out of bounds.
    pub fn get_mut<I>(&mut self, index: I) -> Result<&mut A, ArrayError>
    where
        I: NdIndex<D>,
        A: Clone,
    {
        self.repr()?;
        let offset = index.index_checked(&self.dim, &self.strides)?;
        let data = self.data_mut()?;
        Ok(&mut data[offset])
    }

    /// Write `value` to the element at `index`.
    ///
    /// This is the same as `*self.get_mut(index)? = value`.
    pub fn set<I>(&mut self, index: I, value: A) -> Result<(), ArrayError>
    where
        I: NdIndex<D>,
        A: Clone,
    {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Return the flat (row-major) offset of `index`.
    ///
    /// ```
    /// use cowarray::Array3;
    ///
    /// let a = Array3::<u8>::zeros((2, 3, 4));
    /// assert_eq!(a.offset_of((1, 2, 3)), Ok(23));
    /// assert_eq!(a.index_of(23), Ok((1, 2, 3)));
    /// ```
    pub fn offset_of<I>(&self, index: I) -> Result<usize, ArrayError>
    where I: NdIndex<D>
    {
        self.repr()?;
        index.index_checked(&self.dim, &self.strides)
    }

    /// Return the index of the element at the flat (row-major) `offset`.
    ///
    /// **Errors** with `OutOfBounds` if `offset` is not less than the
    /// number of elements.
    pub fn index_of(&self, offset: usize) -> Result<D::Pattern, ArrayError>
    {
        self.repr()?;
        self.dim
            .offset_to_index_checked(&self.strides, offset)
            .map(|index| index.into_pattern())
    }

    /// Return the array’s elements as a slice in row-major order, or `None`
    /// for an empty array.
    pub fn as_slice(&self) -> Option<&[A]>
    {
        self.data.as_ref().map(|repr| repr.as_slice())
    }

    /// Return the array’s elements as a mutable slice in row-major order,
    /// or `None` for an empty array.
    ///
    /// Copies the elements first if the storage is shared.
    pub fn as_slice_mut(&mut self) -> Option<&mut [A]>
    where A: Clone
    {
        self.data_mut().ok()
    }

    /// Return a vector of the elements in row-major order (empty for an
    /// empty array).
    pub fn to_vec(&self) -> Vec<A>
    where A: Clone
    {
        self.as_slice().map(<[A]>::to_vec).unwrap_or_default()
    }

    /// Return a vector of the elements in row-major order.
    ///
    /// The buffer is reused if the storage is not shared; otherwise the
    /// elements are cloned.
    pub fn into_raw_vec(self) -> Vec<A>
    where A: Clone
    {
        match self.data {
            Some(repr) => repr.into_vec(),
            None => Vec::new(),
        }
    }

    /// Move the storage out of `self` into a new array, leaving `self`
    /// empty (invalid).
    ///
    /// ```
    /// use cowarray::Array1;
    ///
    /// let mut a = Array1::from_vec(vec![1, 2, 3]);
    /// let b = a.take();
    /// assert!(!a.is_valid());
    /// assert_eq!(b.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> Self
    {
        mem::replace(self, Self::empty())
    }

    /// Return an iterator of references to the elements of the array, in
    /// row-major order.
    ///
    /// Iterator element type is `&A`.
    ///
    /// **Errors** with `InvalidArray` if the array is empty.
    pub fn iter(&self) -> Result<Iter<'_, A>, ArrayError>
    {
        Ok(Iter::new(self.repr()?.as_slice()))
    }

    /// Return an iterator of mutable references to the elements of the
    /// array, in row-major order.
    ///
    /// Iterator element type is `&mut A`. Copies the elements first if the
    /// storage is shared.
    ///
    /// **Errors** with `InvalidArray` if the array is empty.
    pub fn iter_mut(&mut self) -> Result<IterMut<'_, A>, ArrayError>
    where A: Clone
    {
        Ok(IterMut::new(self.data_mut()?))
    }

    /// Return an iterator of indexes and references to the elements of the
    /// array, in row-major order.
    ///
    /// Iterator element type is `(D::Pattern, &A)`.
    ///
    /// ```
    /// use cowarray::Array2;
    ///
    /// let a = Array2::from_shape_fn((2, 2), |(i, j)| 10 * i + j);
    /// for ((i, j), &elt) in a.indexed_iter().unwrap() {
    ///     assert_eq!(elt, 10 * i + j);
    /// }
    /// ```
    pub fn indexed_iter(&self) -> Result<IndexedIter<'_, A, D>, ArrayError>
    {
        Ok(IndexedIter::new(self.repr()?.as_slice(), self.strides.clone()))
    }

    /// Return an iterator of indexes and mutable references to the elements
    /// of the array, in row-major order.
    ///
    /// Iterator element type is `(D::Pattern, &mut A)`. Copies the elements
    /// first if the storage is shared.
    pub fn indexed_iter_mut(&mut self) -> Result<IndexedIterMut<'_, A, D>, ArrayError>
    where A: Clone
    {
        let strides = self.strides.clone();
        Ok(IndexedIterMut::new(self.data_mut()?, strides))
    }

    /// Return a cursor at the first element of the array.
    ///
    /// See [`Cursor`] for the position semantics.
    pub fn cursor(&self) -> Result<Cursor<'_, A, D>, ArrayError>
    {
        self.repr()?;
        Ok(Cursor::new(self, 0))
    }

    /// Return a cursor one past the last element of the array.
    pub fn cursor_end(&self) -> Result<Cursor<'_, A, D>, ArrayError>
    {
        self.repr()?;
        Ok(Cursor::new(self, self.len()))
    }

    /// Return a new array containing the elements selected by `info`, one
    /// selector per axis.
    ///
    /// Axes with a range selector are kept (with the range's length), axes
    /// with an index selector are removed. The result does not share
    /// storage with `self`; its elements are cloned in row-major order of
    /// the new shape.
    ///
    /// Every selector is checked before any element is read.
    ///
    /// **Errors** with `InvalidArray` if the array is empty, with
    /// `OutOfBounds` if an index or a range bound is outside its axis or a
    /// range is empty, and with `RankMismatch` if `info` does not have one
    /// selector per axis or its output rank does not match `Do`.
    ///
    /// ```
    /// use cowarray::{s, Array2, ErrorKind};
    ///
    /// let a = Array2::from_shape_vec((2, 3), vec![0, 1, 2, 3, 4, 5]).unwrap();
    ///
    /// let b: Array2<_> = a.slice(s![.., 1..=2]).unwrap();
    /// assert_eq!(b.dim(), (2, 2));
    /// assert_eq!(b.to_vec(), vec![1, 2, 4, 5]);
    ///
    /// let row = a.slice(s![1, ..]).unwrap();
    /// assert_eq!(row.to_vec(), vec![3, 4, 5]);
    ///
    /// assert_eq!(a.slice(s![.., 3..]).unwrap_err().kind(), ErrorKind::OutOfBounds);
    /// ```
    pub fn slice<T, Do>(&self, info: &SliceInfo<T, D, Do>) -> Result<Array<A, Do>, ArrayError>
    where
        T: AsRef<[Selector]>,
        Do: Dimension,
        A: Clone,
    {
        let data = self.repr()?.as_slice();
        let selectors = info.as_ref();
        crate::slice::check_ranks::<D, Do>(selectors)?;

        // Resolve every axis before touching any element.
        let mut start = D::zeros();
        let mut out_dim = Do::zeros();
        let mut out_axes = Do::zeros();
        let mut n_out = 0;
        for (axis, selector) in selectors.iter().enumerate() {
            let (begin, len) = selector.resolve(self.dim[axis])?;
            start[axis] = begin;
            if !selector.is_index() {
                out_dim[n_out] = len;
                out_axes[n_out] = axis;
                n_out += 1;
            }
        }

        let size = out_dim.size();
        let out_strides = out_dim.default_strides();
        log::trace!(
            "slicing {:?} with {:?}: copying {} elements into shape {:?}",
            self.dim,
            selectors,
            size,
            out_dim
        );
        let mut v = Vec::with_capacity(size);
        for offset in 0..size {
            let out_index = Do::offset_to_index(offset, &out_strides);
            let mut index = start.clone();
            for (k, &axis) in out_axes.slice().iter().enumerate() {
                index[axis] += out_index[k];
            }
            v.push(data[D::stride_offset(&index, &self.strides)].clone());
        }
        Ok(Array::from_shape_vec_unchecked(out_dim, v))
    }

    /// Return the elements for writing, copying the storage first if it is
    /// shared with another array.
    fn data_mut(&mut self) -> Result<&mut [A], ArrayError>
    where A: Clone
    {
        match self.data {
            Some(ref mut repr) => Ok(repr.make_mut()),
            None => Err(from_kind(ErrorKind::InvalidArray)),
        }
    }
}
