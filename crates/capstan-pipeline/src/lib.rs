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

//! # Capstan Pipeline
//!
//! **Stage Orchestration for the Capstan Column Screening Pipeline.**
//!
//! This crate wires the model and screening crates into one synchronous,
//! single-threaded run keyed to a problem instance, and owns the
//! serialization boundary (relation and classification records).
//!
//! ## Usage
//!
//! ```no_run
//! use capstan_core::diag::StderrSink;
//! use capstan_pipeline::pipeline::ScreeningPipeline;
//!
//! let pipeline = ScreeningPipeline::<f64>::new("AS65-2");
//! let mut sink = StderrSink;
//! let outcome = pipeline
//!     .run("log_AS65-2.txt", "out", &mut sink)
//!     .expect("screening failed");
//! println!("{}", outcome);
//! ```

pub mod outcome;
pub mod pipeline;
pub mod records;
pub mod stats;
