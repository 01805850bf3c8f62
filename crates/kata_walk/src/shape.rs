//! Shape classification for walked values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The structural category of a [`Value`](crate::Value).
///
/// The set is closed: every value the walker sees falls into exactly one
/// of these shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// A string leaf.
    String,
    /// A record with ordered, named fields.
    Struct,
    /// A reference to a single value, possibly null.
    Pointer,
    /// An ordered sequence (slice or array).
    Sequence,
    /// Key/value pairs. Only values are walked.
    Mapping,
    /// A stream of values terminated by a close signal.
    Channel,
    /// A zero-argument callable returning zero or more values.
    Function,
    /// Numbers, bools and anything else that carries no strings.
    Other,
}

impl Shape {
    /// Returns true if values of this shape contain other values.
    #[inline]
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            Shape::Struct | Shape::Pointer | Shape::Sequence | Shape::Mapping
        )
    }

    /// Returns true if values of this shape produce their children on demand.
    #[inline]
    pub const fn is_producer(&self) -> bool {
        matches!(self, Shape::Channel | Shape::Function)
    }

    /// Returns true if this shape is a terminal that never yields children.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Shape::String | Shape::Other)
    }

    /// Returns the lowercase name of the shape.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::Struct => "struct",
            Shape::Pointer => "pointer",
            Shape::Sequence => "sequence",
            Shape::Mapping => "mapping",
            Shape::Channel => "channel",
            Shape::Function => "function",
            Shape::Other => "other",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
