// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Iterators and cursors over the elements of an array.
//!
//! Every iterator visits the elements in row-major order: the order of
//! increasing flat offset, where the last axis varies fastest.

mod cursor;

pub use self::cursor::Cursor;

use core::iter::Enumerate;
use core::slice;

use crate::Dimension;

/// An iterator over the elements of an array.
///
/// Iterator element type is `&'a A`.
///
/// See [`.iter()`](crate::Array::iter) for more information.
#[derive(Clone, Debug)]
pub struct Iter<'a, A>
{
    inner: slice::Iter<'a, A>,
}

/// An iterator over the elements of an array (mutable).
///
/// Iterator element type is `&'a mut A`.
///
/// See [`.iter_mut()`](crate::Array::iter_mut) for more information.
#[derive(Debug)]
pub struct IterMut<'a, A>
{
    inner: slice::IterMut<'a, A>,
}

impl<'a, A> Iter<'a, A>
{
    pub(crate) fn new(data: &'a [A]) -> Self
    {
        Iter { inner: data.iter() }
    }
}

impl<'a, A> IterMut<'a, A>
{
    pub(crate) fn new(data: &'a mut [A]) -> Self
    {
        IterMut { inner: data.iter_mut() }
    }
}

impl<'a, A> Iterator for Iter<'a, A>
{
    type Item = &'a A;
    #[inline]
    fn next(&mut self) -> Option<&'a A>
    {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        self.inner.size_hint()
    }

    fn fold<Acc, G>(self, init: Acc, g: G) -> Acc
    where G: FnMut(Acc, Self::Item) -> Acc
    {
        self.inner.fold(init, g)
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A>
{
    #[inline]
    fn next_back(&mut self) -> Option<&'a A>
    {
        self.inner.next_back()
    }
}

impl<A> ExactSizeIterator for Iter<'_, A>
{
    fn len(&self) -> usize
    {
        self.inner.len()
    }
}

impl<'a, A> Iterator for IterMut<'a, A>
{
    type Item = &'a mut A;
    #[inline]
    fn next(&mut self) -> Option<&'a mut A>
    {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        self.inner.size_hint()
    }

    fn fold<Acc, G>(self, init: Acc, g: G) -> Acc
    where G: FnMut(Acc, Self::Item) -> Acc
    {
        self.inner.fold(init, g)
    }
}

impl<'a, A> DoubleEndedIterator for IterMut<'a, A>
{
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut A>
    {
        self.inner.next_back()
    }
}

impl<A> ExactSizeIterator for IterMut<'_, A>
{
    fn len(&self) -> usize
    {
        self.inner.len()
    }
}

/// An iterator over the indexes and elements of an array.
///
/// The index of each element is recovered from its flat offset when the
/// element is produced.
///
/// See [`.indexed_iter()`](crate::Array::indexed_iter) for more information.
#[derive(Clone, Debug)]
pub struct IndexedIter<'a, A, D>
{
    inner: Enumerate<slice::Iter<'a, A>>,
    strides: D,
}

/// An iterator over the indexes and elements of an array (mutable).
///
/// See [`.indexed_iter_mut()`](crate::Array::indexed_iter_mut) for more information.
#[derive(Debug)]
pub struct IndexedIterMut<'a, A, D>
{
    inner: Enumerate<slice::IterMut<'a, A>>,
    strides: D,
}

impl<'a, A, D> IndexedIter<'a, A, D>
where D: Dimension
{
    pub(crate) fn new(data: &'a [A], strides: D) -> Self
    {
        IndexedIter {
            inner: data.iter().enumerate(),
            strides,
        }
    }
}

impl<'a, A, D> IndexedIterMut<'a, A, D>
where D: Dimension
{
    pub(crate) fn new(data: &'a mut [A], strides: D) -> Self
    {
        IndexedIterMut {
            inner: data.iter_mut().enumerate(),
            strides,
        }
    }
}

impl<'a, A, D: Dimension> Iterator for IndexedIter<'a, A, D>
{
    type Item = (D::Pattern, &'a A);
    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        let (offset, elt) = self.inner.next()?;
        Some((D::offset_to_index(offset, &self.strides).into_pattern(), elt))
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        self.inner.size_hint()
    }
}

impl<'a, A, D: Dimension> DoubleEndedIterator for IndexedIter<'a, A, D>
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item>
    {
        let (offset, elt) = self.inner.next_back()?;
        Some((D::offset_to_index(offset, &self.strides).into_pattern(), elt))
    }
}

impl<A, D> ExactSizeIterator for IndexedIter<'_, A, D>
where D: Dimension
{
    fn len(&self) -> usize
    {
        self.inner.len()
    }
}

impl<'a, A, D: Dimension> Iterator for IndexedIterMut<'a, A, D>
{
    type Item = (D::Pattern, &'a mut A);
    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        let (offset, elt) = self.inner.next()?;
        Some((D::offset_to_index(offset, &self.strides).into_pattern(), elt))
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        self.inner.size_hint()
    }
}

impl<'a, A, D: Dimension> DoubleEndedIterator for IndexedIterMut<'a, A, D>
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item>
    {
        let (offset, elt) = self.inner.next_back()?;
        Some((D::offset_to_index(offset, &self.strides).into_pattern(), elt))
    }
}

impl<A, D> ExactSizeIterator for IndexedIterMut<'_, A, D>
where D: Dimension
{
    fn len(&self) -> usize
    {
        self.inner.len()
    }
}
