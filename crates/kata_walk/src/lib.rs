//! # kata_walk
//!
//! A value walker that extracts every string leaf from an arbitrary value.
//!
//! Values entering the walker are converted into [`Value`], a closed tagged
//! union over the shapes the walker understands. Conversion happens once at
//! the boundary through [`IntoValue`]; after that, dispatch is an exhaustive
//! `match` and never needs runtime type inspection.
//!
//! ## Shapes
//!
//! - strings are leaves
//! - structs, pointers, sequences and mappings are walked recursively
//! - channels are drained until they close (this blocks the caller)
//! - zero-argument functions are invoked once and their results walked
//! - everything else is skipped silently
//!
//! ## Example
//!
//! ```rust
//! use kata_walk::{IntoValue, Record, walk};
//!
//! let person = Record::new("Person")
//!     .field("Name", "Chris")
//!     .field("Age", 33)
//!     .field("Profile", Record::new("Profile").field("City", "London"));
//!
//! let mut got = Vec::new();
//! walk(&person.into_value(), |s| got.push(s.to_string()));
//! assert_eq!(got, vec!["Chris", "London"]);
//! ```

mod convert;
mod shape;
mod value;
pub mod visitor;
mod walker;

pub use convert::{IntoResults, IntoValue};
pub use shape::Shape;
pub use value::{ChannelProducer, Field, FunctionProducer, Record, Scalar, Value};
pub use walker::{collect_strings, walk};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor, walk_value};
