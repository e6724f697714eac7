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

//! # Capstan Screen
//!
//! **The Combinatorial Core of the Capstan Column Screening Pipeline.**
//!
//! Given a loaded solution and its cover map, this crate scores how much
//! each selected column disagrees with the adjacency structure of the
//! working basis, derives the compatibility relation among the columns that
//! fully agree, and partitions every column's coefficients into compatible
//! and incompatible buckets.
//!
//! * **`degree`**: The directional incompatibility degree and its
//!   orientation policies.
//! * **`policy`**: Pluggable interpretations of what links two candidates
//!   (`BasisSharedCompatibility`, `DirectPairwise`).
//! * **`relation`**: The compatibility relation and its builder.
//! * **`classify`**: The coefficient classifier.

pub mod classify;
pub mod degree;
pub mod policy;
pub mod relation;
