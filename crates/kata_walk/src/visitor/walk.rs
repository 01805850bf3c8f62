//! Walk functions for value traversal.
//!
//! These functions provide the traversal logic for the Visitor pattern.
//! They are used by the default implementations in the `Visitor` trait.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::{ChannelProducer, FunctionProducer, Record, Value};

use super::visit::{VisitResult, Visitor};

/// Walks a value by dispatching to the appropriate shape-specific method.
///
/// This function:
/// 1. Calls `enter_value` on the visitor
/// 2. Dispatches to the `visit_*` method for the value's shape
/// 3. Calls `exit_value` on the visitor
///
/// The match is exhaustive over [`Value`], so every shape has exactly one
/// handler.
pub fn walk_value<V>(visitor: &mut V, value: &Value) -> VisitResult
where
    V: Visitor,
{
    visitor.enter_value(value)?;

    trace!(shape = %value.shape(), "visiting value");

    let result = match value {
        Value::String(s) => visitor.visit_string(s),
        Value::Struct(record) => visitor.visit_struct(record),
        Value::Pointer(target) => visitor.visit_pointer(target.as_deref()),
        Value::Sequence(items) => visitor.visit_sequence(items),
        Value::Mapping(entries) => visitor.visit_mapping(entries),
        Value::Channel(channel) => visitor.visit_channel(channel),
        Value::Function(function) => visitor.visit_function(function),
        Value::Other(scalar) => visitor.visit_other(scalar),
    };

    result?;

    visitor.exit_value(value)
}

/// Walks all children of a value.
///
/// Terminal shapes have no children. Producers are drained or invoked.
pub fn walk_children<V>(visitor: &mut V, value: &Value) -> VisitResult
where
    V: Visitor,
{
    match value {
        Value::Struct(record) => walk_record(visitor, record),
        Value::Pointer(target) => walk_pointer(visitor, target.as_deref()),
        Value::Sequence(items) => walk_sequence(visitor, items),
        Value::Mapping(entries) => walk_mapping(visitor, entries),
        Value::Channel(channel) => walk_channel(visitor, channel),
        Value::Function(function) => walk_function(visitor, function),
        Value::String(_) | Value::Other(_) => ControlFlow::Continue(()),
    }
}

/// Walks each field of a record in declaration order.
#[inline]
pub fn walk_record<V>(visitor: &mut V, record: &Record) -> VisitResult
where
    V: Visitor,
{
    for field in record.fields() {
        visitor.visit_value(&field.value)?;
    }
    ControlFlow::Continue(())
}

/// Walks the referent of a pointer. A null pointer has no children.
#[inline]
pub fn walk_pointer<V>(visitor: &mut V, target: Option<&Value>) -> VisitResult
where
    V: Visitor,
{
    match target {
        Some(value) => visitor.visit_value(value),
        None => {
            debug!("skipping null pointer");
            ControlFlow::Continue(())
        }
    }
}

/// Walks each element of a sequence in index order.
#[inline]
pub fn walk_sequence<V>(visitor: &mut V, items: &[Value]) -> VisitResult
where
    V: Visitor,
{
    for item in items {
        visitor.visit_value(item)?;
    }
    ControlFlow::Continue(())
}

/// Walks the values of a mapping. Keys are never visited.
#[inline]
pub fn walk_mapping<V>(visitor: &mut V, entries: &[(Value, Value)]) -> VisitResult
where
    V: Visitor,
{
    for (_, value) in entries {
        visitor.visit_value(value)?;
    }
    ControlFlow::Continue(())
}

/// Drains a channel, walking each value in arrival order.
///
/// Blocks the calling thread until every sender has been dropped. On
/// `Break` the remaining values are left in the channel.
pub fn walk_channel<V>(visitor: &mut V, channel: &ChannelProducer) -> VisitResult
where
    V: Visitor,
{
    let mut received = 0usize;
    for item in channel.iter() {
        received += 1;
        visitor.visit_value(&item)?;
    }
    debug!("Drained {} values from channel", received);
    ControlFlow::Continue(())
}

/// Invokes a function once and walks each returned value.
pub fn walk_function<V>(visitor: &mut V, function: &FunctionProducer) -> VisitResult
where
    V: Visitor,
{
    let results = function.call();
    trace!("function produced {} values", results.len());
    for item in &results {
        visitor.visit_value(item)?;
    }
    ControlFlow::Continue(())
}
