//! Visitor trait for traversing values.
//!
//! Each `visit_*` method has a default implementation that walks the
//! children of that shape, so a visitor only overrides the shapes it cares
//! about. Most visitors only need [`Visitor::visit_string`].

use std::ops::ControlFlow;

use crate::{ChannelProducer, FunctionProducer, Record, Scalar, Value};

use super::walk::{
    walk_channel, walk_function, walk_mapping, walk_pointer, walk_record, walk_sequence,
    walk_value,
};

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting children
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing a [`Value`] without modification.
///
/// # Control Flow
///
/// Return `ControlFlow::Continue(())` to continue traversal, or
/// `ControlFlow::Break(())` to stop early. Use the `?` operator
/// for convenient propagation.
pub trait Visitor: Sized {
    /// Called before visiting any value.
    #[inline]
    fn enter_value(&mut self, _value: &Value) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after visiting a value and all its children.
    #[inline]
    fn exit_value(&mut self, _value: &Value) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visits any value by dispatching to the shape-specific method.
    ///
    /// Override this if you need custom dispatch logic.
    #[inline]
    fn visit_value(&mut self, value: &Value) -> VisitResult {
        walk_value(self, value)
    }

    /// Visit a string leaf.
    #[inline]
    fn visit_string(&mut self, _value: &str) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a record. Fields are walked in declaration order.
    fn visit_struct(&mut self, record: &Record) -> VisitResult {
        walk_record(self, record)
    }

    /// Visit a pointer. `None` is a null pointer.
    fn visit_pointer(&mut self, target: Option<&Value>) -> VisitResult {
        walk_pointer(self, target)
    }

    /// Visit a sequence. Elements are walked in index order.
    fn visit_sequence(&mut self, items: &[Value]) -> VisitResult {
        walk_sequence(self, items)
    }

    /// Visit a mapping. Only values are walked.
    fn visit_mapping(&mut self, entries: &[(Value, Value)]) -> VisitResult {
        walk_mapping(self, entries)
    }

    /// Visit a channel. The default drains it until it closes.
    fn visit_channel(&mut self, channel: &ChannelProducer) -> VisitResult {
        walk_channel(self, channel)
    }

    /// Visit a function. The default invokes it once.
    fn visit_function(&mut self, function: &FunctionProducer) -> VisitResult {
        walk_function(self, function)
    }

    /// Visit a value that carries no strings.
    #[inline]
    fn visit_other(&mut self, _scalar: &Scalar) -> VisitResult {
        ControlFlow::Continue(())
    }
}
