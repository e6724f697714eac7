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

//! # Diagnostic Sink
//!
//! Reporting seam for recoverable events. Lossy operations (record loaders,
//! pipeline stages) take a `&mut impl DiagnosticSink` argument and report
//! every event they recover from (a skipped malformed line, a missing input
//! file, an excluded column). Callers choose the backend: discard
//! (`NoOpSink`), print (`StderrSink`), or capture for inspection
//! (`MemorySink`).
//!
//! Sinks are passed into operations explicitly, never installed globally,
//! so two loads in the same process can report to different places.

/// A recoverable event reported by a lossy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    stage: &'static str,
    message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic attributed to `stage`.
    #[inline]
    pub fn new(stage: &'static str, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }

    /// The pipeline stage that reported the event.
    #[inline]
    pub fn stage(&self) -> &'static str {
        self.stage
    }

    /// The human-readable description of the event.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)
    }
}

/// A destination for diagnostics.
pub trait DiagnosticSink {
    /// Receives one recoverable event.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// A sink that discards every diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpSink;

impl DiagnosticSink for NoOpSink {
    #[inline]
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// A sink that prints every diagnostic to standard error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        eprintln!("capstan: {}", diagnostic);
    }
}

/// A sink that stores every diagnostic in memory.
///
/// Mainly useful in tests and in callers that want to render all recovered
/// events after a run finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    diagnostics: Vec<Diagnostic>,
}

impl MemorySink {
    /// Creates a new, empty `MemorySink`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of captured diagnostics.
    #[inline]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if nothing was captured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterates over the captured diagnostics in report order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl DiagnosticSink for MemorySink {
    #[inline]
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// A sink adapter that forwards to an inner sink while counting reports.
///
/// Operations that need a tally of recovered events (e.g. run statistics)
/// wrap the caller-provided sink for the duration of one load.
#[derive(Debug)]
pub struct CountingSink<'a, S> {
    inner: &'a mut S,
    reported: u64,
}

impl<'a, S> CountingSink<'a, S>
where
    S: DiagnosticSink,
{
    /// Wraps `inner`, starting the tally at zero.
    #[inline]
    pub fn new(inner: &'a mut S) -> Self {
        Self { inner, reported: 0 }
    }

    /// Returns how many diagnostics passed through this adapter.
    #[inline]
    pub fn reported(&self) -> u64 {
        self.reported
    }
}

impl<S> DiagnosticSink for CountingSink<'_, S>
where
    S: DiagnosticSink,
{
    #[inline]
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        self.inner.report(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_accessors_and_display() {
        let d = Diagnostic::new("loader", "skipping malformed line 3");
        assert_eq!(d.stage(), "loader");
        assert_eq!(d.message(), "skipping malformed line 3");
        assert_eq!(format!("{}", d), "[loader] skipping malformed line 3");
    }

    #[test]
    fn test_memory_sink_captures_in_order() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.report(Diagnostic::new("a", "first"));
        sink.report(Diagnostic::new("b", "second"));

        assert_eq!(sink.len(), 2);
        let messages: Vec<&str> = sink.iter().map(|d| d.message()).collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn test_counting_sink_forwards_and_counts() {
        let mut inner = MemorySink::new();
        let mut counting = CountingSink::new(&mut inner);

        counting.report(Diagnostic::new("x", "one"));
        counting.report(Diagnostic::new("x", "two"));
        assert_eq!(counting.reported(), 2);

        assert_eq!(inner.len(), 2);
    }

    #[test]
    fn test_noop_sink_accepts_reports() {
        let mut sink = NoOpSink;
        sink.report(Diagnostic::new("x", "ignored"));
    }
}
