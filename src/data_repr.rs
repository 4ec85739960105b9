// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::rc::Rc;
use alloc::vec::Vec;

/// Array's storage: a reference counted, contiguous buffer.
///
/// Cloning the representation only bumps the reference count. Mutable
/// access goes through [`make_mut`](OwnedRcRepr::make_mut), which first
/// forks a private copy of the buffer if it is shared (copy-on-write).
#[derive(Debug)]
pub struct OwnedRcRepr<A>(Rc<Vec<A>>);

impl<A> OwnedRcRepr<A>
{
    pub(crate) fn from(v: Vec<A>) -> Self
    {
        OwnedRcRepr(Rc::new(v))
    }

    pub(crate) fn as_slice(&self) -> &[A]
    {
        &self.0
    }

    pub(crate) fn len(&self) -> usize
    {
        self.0.len()
    }

    pub(crate) fn as_ptr(&self) -> *const A
    {
        self.0.as_ptr()
    }

    /// Return `true` if no other representation shares the buffer.
    pub(crate) fn is_unique(&self) -> bool
    {
        Rc::strong_count(&self.0) == 1
    }

    /// Return `true` if both representations share the same buffer.
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool
    {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Return the elements for writing, cloning the buffer first if it is
    /// shared with another array.
    pub(crate) fn make_mut(&mut self) -> &mut [A]
    where A: Clone
    {
        if !self.is_unique() {
            log::trace!(
                "copy-on-write: forking shared buffer of {} elements ({} owners)",
                self.len(),
                Rc::strong_count(&self.0)
            );
        }
        Rc::make_mut(&mut self.0).as_mut_slice()
    }

    /// Return the elements as a vector, reusing the buffer when it is not
    /// shared.
    pub(crate) fn into_vec(self) -> Vec<A>
    where A: Clone
    {
        Rc::try_unwrap(self.0).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<A> Clone for OwnedRcRepr<A>
{
    fn clone(&self) -> Self
    {
        OwnedRcRepr(Rc::clone(&self.0))
    }
}

#[cfg(test)]
mod tests
{
    use super::OwnedRcRepr;
    use alloc::vec;

    #[test]
    fn clone_shares_and_make_mut_forks()
    {
        let a = OwnedRcRepr::from(vec![1, 2, 3]);
        let mut b = a.clone();
        assert!(a.ptr_eq(&b));
        assert!(!a.is_unique());

        b.make_mut()[0] = 10;
        assert!(!a.ptr_eq(&b));
        assert!(a.is_unique() && b.is_unique());
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[10, 2, 3]);
    }

    #[test]
    fn make_mut_unique_keeps_buffer()
    {
        let mut a = OwnedRcRepr::from(vec![1, 2, 3]);
        let ptr = a.as_ptr();
        a.make_mut()[2] = 7;
        assert_eq!(a.as_ptr(), ptr);
        assert_eq!(a.into_vec(), vec![1, 2, 7]);
    }

    #[test]
    fn into_vec_of_shared_clones()
    {
        let a = OwnedRcRepr::from(vec![4, 5]);
        let b = a.clone();
        assert_eq!(b.into_vec(), vec![4, 5]);
        assert!(a.is_unique());
    }
}
