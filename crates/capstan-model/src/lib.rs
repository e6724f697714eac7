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

//! # Capstan Model
//!
//! **The Core Domain Model for the Capstan Column Screening Pipeline.**
//!
//! This crate defines the fundamental data structures used to represent a
//! solver-produced solution of a set-partitioning-style integer program. It
//! serves as the data interchange layer between the persisted solver output
//! (text records) and the screening engine (`capstan_screen`).
//!
//! ## Architecture
//!
//! * **`index`**: The strongly-typed `RowIndex` identifying covered rows.
//! * **`column`**: Column identity (`ColumnId`) and solver coefficients
//!   (`Column`).
//! * **`cover`**: Identifier parsing into ordered covered-row sequences
//!   (`CoverParser`, `CoverSequence`, `CoverMap`).
//! * **`solution`**: The immutable `Solution` map and working-basis
//!   extraction.
//! * **`loading`**: The text-record `SolutionLoader`.
//! * **`num`**: The numeric trait alias bounding coefficient types.
//!
//! ## Design Philosophy
//!
//! 1.  **Derived, immutable artifacts**: Everything here is built in a single
//!     pass from a persisted input and never mutated afterwards.
//! 2.  **Recoverable by default**: Loading skips what it cannot read and
//!     reports it; identifier parsing surfaces failures per column so the
//!     caller decides between exclusion and abort.
//! 3.  **Order is meaning**: A cover sequence preserves the traversal order
//!     encoded in the identifier; it is never sorted.

pub mod column;
pub mod cover;
pub mod index;
pub mod loading;
pub mod num;
pub mod solution;
