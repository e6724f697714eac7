// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Coefficient Numeric Trait
//!
//! Unified numeric bounds for column values and objective coefficients.
//! Solver output carries reals, so the alias is built on `num_traits::Float`
//! rather than the integer traits an exact search core would use; `FromStr`
//! is required because every coefficient enters the pipeline through a text
//! record.

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use num_traits::Float;

/// A trait alias for numeric types that can carry column coefficients.
/// In practice this is `f64` (or `f32` where memory matters); the pipeline
/// stays generic so tests can pin down exact-equality behavior per type.
pub trait CoefficientNum: Float + FromStr + Debug + Display + Send + Sync {}

impl<T> CoefficientNum for T where T: Float + FromStr + Debug + Display + Send + Sync {}
