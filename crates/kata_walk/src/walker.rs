//! String leaf extraction.

use std::ops::ControlFlow;

use crate::Value;
use crate::visitor::{VisitResult, Visitor, walk_value};

/// Forwards every string leaf to a callback.
struct StringSink<F> {
    on_string: F,
}

impl<F> Visitor for StringSink<F>
where
    F: FnMut(&str),
{
    fn visit_string(&mut self, value: &str) -> VisitResult {
        (self.on_string)(value);
        ControlFlow::Continue(())
    }
}

/// Walks `value` and calls `on_string` once for every string leaf.
///
/// Records are walked in field order and sequences in index order. Channels
/// are drained in arrival order, which blocks until the channel closes.
/// Mapping values are visited in unspecified order and their keys are
/// skipped. Unsupported shapes produce no calls.
pub fn walk<F>(value: &Value, on_string: F)
where
    F: FnMut(&str),
{
    let mut sink = StringSink { on_string };
    let _ = walk_value(&mut sink, value);
}

/// Returns every string leaf of `value` in walk order.
pub fn collect_strings(value: &Value) -> Vec<String> {
    let mut leaves = Vec::new();
    walk(value, |s| leaves.push(s.to_string()));
    leaves
}
