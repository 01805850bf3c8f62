//! Visitor pattern for value traversal.
//!
//! This module provides the trait and functions that drive a walk over a
//! [`Value`](crate::Value).
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait with one method per shape
//! - [`walk_value`] - Dispatch function for shape-specific visitors
//! - [`walk_children`] - Traverse all children of a value
//!
//! # Examples
//!
//! ## Counting Leaves
//!
//! ```rust
//! use kata_walk::{IntoValue, Record};
//! use kata_walk::visitor::{Visitor, VisitResult, walk_value};
//! use std::ops::ControlFlow;
//!
//! struct LeafCounter(usize);
//!
//! impl Visitor for LeafCounter {
//!     fn visit_string(&mut self, _value: &str) -> VisitResult {
//!         self.0 += 1;
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let value = Record::new("Person")
//!     .field("Name", "Chris")
//!     .field("City", "London")
//!     .into_value();
//!
//! let mut counter = LeafCounter(0);
//! let _ = walk_value(&mut counter, &value);
//! assert_eq!(counter.0, 2);
//! ```
//!
//! ## Early Termination
//!
//! ```rust
//! use kata_walk::Value;
//! use kata_walk::visitor::{Visitor, VisitResult, walk_value};
//! use std::ops::ControlFlow;
//!
//! struct FirstLeaf(Option<String>);
//!
//! impl Visitor for FirstLeaf {
//!     fn visit_string(&mut self, value: &str) -> VisitResult {
//!         self.0 = Some(value.to_string());
//!         ControlFlow::Break(()) // Stop traversal
//!     }
//! }
//!
//! let value = Value::sequence(["first", "second"]);
//! let mut finder = FirstLeaf(None);
//! assert!(walk_value(&mut finder, &value).is_break());
//! assert_eq!(finder.0.as_deref(), Some("first"));
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{
    walk_channel, walk_children, walk_function, walk_mapping, walk_pointer, walk_record,
    walk_sequence, walk_value,
};
