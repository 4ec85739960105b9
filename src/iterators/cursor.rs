// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt;
use core::ptr;

use crate::{Array, Dimension};

/// A position in an array: a reference to the array and a flat offset.
///
/// A cursor is at one of the array's elements, or at the *end* position,
/// one past the last element. The multi-index of the position is computed
/// when asked for, from the offset and the array's strides.
///
/// Two cursors compare equal only if they refer to the same array value
/// and are at the same offset. Cursors of two arrays that share storage
/// (a clone and its original) are never equal.
///
/// ```
/// use cowarray::Array2;
///
/// let a = Array2::from_shape_fn((2, 2), |(i, j)| 10 * i + j);
/// let mut c = a.cursor().unwrap();
/// c.advance();
/// c.advance();
/// assert_eq!(c.index(), Some((1, 0)));
/// assert_eq!(c.get(), Some(&10));
///
/// c.advance();
/// c.advance();
/// assert!(c.is_end());
/// assert_eq!(c, a.cursor_end().unwrap());
/// assert_eq!(c.get(), None);
/// ```
pub struct Cursor<'a, A, D>
{
    array: &'a Array<A, D>,
    offset: usize,
}

impl<'a, A, D> Cursor<'a, A, D>
where D: Dimension
{
    pub(crate) fn new(array: &'a Array<A, D>, offset: usize) -> Self
    {
        debug_assert!(offset <= array.len());
        Cursor { array, offset }
    }

    /// Return the flat (row-major) offset of the position.
    #[inline]
    pub fn offset(&self) -> usize
    {
        self.offset
    }

    /// Return the multi-index of the position, or `None` at the end.
    pub fn index(&self) -> Option<D::Pattern>
    {
        if self.is_end() {
            return None;
        }
        Some(D::offset_to_index(self.offset, &self.array.strides).into_pattern())
    }

    /// Return the element at the position, or `None` at the end.
    pub fn get(&self) -> Option<&'a A>
    {
        self.array.as_slice()?.get(self.offset)
    }

    /// Step to the next position in row-major order.
    ///
    /// The cursor stays at the end once it got there.
    #[inline]
    pub fn advance(&mut self)
    {
        if !self.is_end() {
            self.offset += 1;
        }
    }

    /// Return `true` if the cursor is one past the last element.
    #[inline]
    pub fn is_end(&self) -> bool
    {
        self.offset >= self.array.len()
    }
}

impl<A, D> Iterator for Cursor<'_, A, D>
where D: Dimension
{
    type Item = D::Pattern;

    /// Return the index at the position, then advance.
    fn next(&mut self) -> Option<D::Pattern>
    {
        let index = self.index()?;
        self.advance();
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let len = self.array.len() - self.offset;
        (len, Some(len))
    }
}

impl<A, D> ExactSizeIterator for Cursor<'_, A, D> where D: Dimension {}

impl<A, D> Clone for Cursor<'_, A, D>
{
    fn clone(&self) -> Self
    {
        *self
    }
}

impl<A, D> Copy for Cursor<'_, A, D> {}

impl<A, D> PartialEq for Cursor<'_, A, D>
{
    fn eq(&self, other: &Self) -> bool
    {
        ptr::eq(self.array, other.array) && self.offset == other.offset
    }
}

impl<A, D> Eq for Cursor<'_, A, D> {}

impl<A, D> fmt::Debug for Cursor<'_, A, D>
where D: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Cursor")
            .field("array", &(self.array as *const Array<A, D>))
            .field("shape", &self.array.dim)
            .field("offset", &self.offset)
            .finish()
    }
}

#[cfg(test)]
mod tests
{
    use crate::{Array1, Array3};
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn cursor_walks_every_position()
    {
        let a = Array3::from_shape_fn((2, 3, 4), |ix| ix);
        let mut c = a.cursor().unwrap();
        let mut n = 0;
        while !c.is_end() {
            assert_eq!(c.offset(), n);
            assert_eq!(c.index().as_ref(), c.get());
            c.advance();
            n += 1;
        }
        assert_eq!(n, 24);
        assert_eq!(c, a.cursor_end().unwrap());
        c.advance();
        assert_eq!(c.offset(), 24);
        assert_eq!(c.index(), None);
    }

    #[test]
    fn cursor_as_index_iterator()
    {
        let a = Array1::from_vec((0..5).collect::<Vec<i32>>());
        let c = a.cursor().unwrap();
        assert_eq!(c.len(), 5);
        assert_eq!(c.collect::<Vec<_>>(), (0..5).collect::<Vec<usize>>());
    }

    #[test]
    fn cursors_of_clones_differ()
    {
        let a = Array1::from_vec(vec![1, 2, 3]);
        let b = a.clone();
        assert!(a.shares_storage(&b));
        assert_ne!(a.cursor().unwrap(), b.cursor().unwrap());
        assert_eq!(a.cursor().unwrap(), a.cursor().unwrap());
    }
}
