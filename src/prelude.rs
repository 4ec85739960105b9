// Copyright 2026 cowarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! cowarray prelude.
//!
//! This module contains the most used types, type aliases, traits, and
//! macros that you can import easily as a group.
//!
//! ```
//! use cowarray::prelude::*;
//!
//! let a = Array2::<f64>::zeros((3, 4));
//! let b: Array1<f64> = a.slice(s![1, ..]).unwrap();
//! assert_eq!(b.dim(), 4);
//! ```

#[doc(no_inline)]
pub use crate::Array;

#[doc(no_inline)]
pub use crate::{Dim, Dimension, IntoDimension};

#[doc(no_inline)]
pub use crate::{Array1, Array2, Array3, Array4, Array5, Array6};

#[doc(no_inline)]
pub use crate::{Ix1, Ix2, Ix3, Ix4, Ix5, Ix6};

#[doc(no_inline)]
pub use crate::{ArrayError, ErrorKind, Selector};

pub use crate::s;
