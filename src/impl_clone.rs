// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::Array;

/// Cloning an array is *O(1)*: the clone shares the storage of `self`
/// until either of them is written to.
impl<A, D: Clone> Clone for Array<A, D>
{
    fn clone(&self) -> Array<A, D>
    {
        Array {
            data: self.data.clone(),
            dim: self.dim.clone(),
            strides: self.strides.clone(),
        }
    }

    /// Release the storage of `self` and share the storage of `other`
    /// instead. Semantically equivalent to `*self = other.clone()`.
    fn clone_from(&mut self, other: &Self)
    {
        self.data.clone_from(&other.data);
        self.dim.clone_from(&other.dim);
        self.strides.clone_from(&other.strides);
    }
}
