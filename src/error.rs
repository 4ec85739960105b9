// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

/// An error related to array access, shape or slicing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ArrayError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Create a new `ArrayError`
    pub fn from_kind(error: ErrorKind) -> Self
    {
        from_kind(error)
    }
}

/// Error code for an error related to array access, shape or slicing.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind
{
    /// the array has no storage (default constructed or taken from)
    InvalidArray,
    /// index or selector bound out of bounds
    OutOfBounds,
    /// number of index components or selectors does not match the rank
    RankMismatch,
    /// an axis length is zero or the element count overflows
    InvalidShape,
    /// incompatible shapes
    IncompatibleShapes,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ArrayError
{
    ArrayError { repr: k }
}

#[cfg(feature = "std")]
impl std::error::Error for ArrayError {}

impl fmt::Display for ArrayError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::InvalidArray => "access on an invalid (empty) array",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::RankMismatch => "number of indices does not match the array rank",
            ErrorKind::InvalidShape => "axis length is zero or element count overflows",
            ErrorKind::IncompatibleShapes => "incompatible shapes",
        };
        write!(f, "ArrayError/{:?}: {}", self.kind(), description)
    }
}
