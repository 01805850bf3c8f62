//! Value definition.
//!
//! The closed set of shapes the walker dispatches on.

use std::fmt;
use std::sync::Arc;

use crossbeam_channel::Receiver;

use crate::convert::{IntoResults, IntoValue};
use crate::Shape;

/// A value of any supported shape.
///
/// External data is converted into a `Value` once, at the boundary, through
/// [`IntoValue`]. The walker then dispatches on the variant.
///
/// # Example
///
/// ```rust
/// use kata_walk::{Shape, Value};
///
/// let value = Value::sequence(["London", "Reykjavík"]);
/// assert_eq!(value.shape(), Shape::Sequence);
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// A string leaf.
    String(String),
    /// A record with ordered, named fields.
    Struct(Record),
    /// A reference to a single value. `None` is a null pointer.
    Pointer(Option<Arc<Value>>),
    /// Ordered elements.
    Sequence(Vec<Value>),
    /// Key/value pairs in unspecified order.
    Mapping(Vec<(Value, Value)>),
    /// A stream of values, drained until it closes.
    Channel(ChannelProducer),
    /// A zero-argument callable producing zero or more values.
    Function(FunctionProducer),
    /// A value that never carries strings.
    Other(Scalar),
}

impl Value {
    /// Creates a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Creates a pointer to the given value.
    pub fn pointer(target: impl IntoValue) -> Self {
        Self::Pointer(Some(Arc::new(target.into_value())))
    }

    /// Creates a null pointer.
    pub const fn null() -> Self {
        Self::Pointer(None)
    }

    /// Creates a sequence from the given items.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoValue,
    {
        Self::Sequence(items.into_iter().map(IntoValue::into_value).collect())
    }

    /// Creates a mapping from the given key/value pairs.
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoValue,
        V: IntoValue,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into_value(), v.into_value()))
                .collect(),
        )
    }

    /// Creates a channel value that drains the given receiver.
    pub fn channel<T>(receiver: Receiver<T>) -> Self
    where
        T: IntoValue + Send + 'static,
    {
        Self::Channel(ChannelProducer::new(receiver))
    }

    /// Creates a function value from a zero-argument closure.
    ///
    /// The closure may return `()`, a tuple of values, or a `Vec<Value>`.
    ///
    /// ```rust
    /// use kata_walk::{Value, collect_strings};
    ///
    /// let value = Value::function(|| ("Berlin", "Katowice"));
    /// assert_eq!(collect_strings(&value), vec!["Berlin", "Katowice"]);
    /// ```
    pub fn function<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoResults,
    {
        Self::Function(FunctionProducer::new(f))
    }

    /// Returns the shape of this value.
    #[inline]
    pub const fn shape(&self) -> Shape {
        match self {
            Value::String(_) => Shape::String,
            Value::Struct(_) => Shape::Struct,
            Value::Pointer(_) => Shape::Pointer,
            Value::Sequence(_) => Shape::Sequence,
            Value::Mapping(_) => Shape::Mapping,
            Value::Channel(_) => Shape::Channel,
            Value::Function(_) => Shape::Function,
            Value::Other(_) => Shape::Other,
        }
    }

    /// Returns the string if this value is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this value is a null pointer.
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Pointer(None))
    }
}

/// A record: an optional type name and fields in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Record {
    name: Option<String>,
    fields: Vec<Field>,
}

/// A named field of a [`Record`].
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: Value,
}

impl Record {
    /// Creates an empty record with a type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    /// Creates an empty record without a type name.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Appends a field and returns the record.
    pub fn field(mut self, name: impl Into<String>, value: impl IntoValue) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a field.
    pub fn push(&mut self, name: impl Into<String>, value: impl IntoValue) {
        self.fields.push(Field {
            name: name.into(),
            value: value.into_value(),
        });
    }

    /// Returns the type name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A value with no string content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
}

/// The receiving half of a closeable channel.
///
/// Each call to [`recv`](Self::recv) blocks until a value arrives or every
/// sender has been dropped.
#[derive(Clone)]
pub struct ChannelProducer {
    recv: Arc<dyn Fn() -> Option<Value> + Send + Sync>,
}

impl ChannelProducer {
    /// Wraps a receiver whose items convert into values.
    pub fn new<T>(receiver: Receiver<T>) -> Self
    where
        T: IntoValue + Send + 'static,
    {
        Self {
            recv: Arc::new(move || receiver.recv().ok().map(IntoValue::into_value)),
        }
    }

    /// Blocks for the next value. Returns `None` once the channel is closed.
    pub fn recv(&self) -> Option<Value> {
        (self.recv)()
    }

    /// Returns a blocking iterator over the remaining values.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        std::iter::from_fn(|| self.recv())
    }
}

impl fmt::Debug for ChannelProducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelProducer").finish_non_exhaustive()
    }
}

/// A zero-argument callable producing zero or more values.
#[derive(Clone)]
pub struct FunctionProducer {
    call: Arc<dyn Fn() -> Vec<Value> + Send + Sync>,
}

impl FunctionProducer {
    /// Wraps a closure whose return value converts into a list of values.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoResults,
    {
        Self {
            call: Arc::new(move || f().into_results()),
        }
    }

    /// Invokes the function and returns its results.
    pub fn call(&self) -> Vec<Value> {
        (self.call)()
    }
}

impl fmt::Debug for FunctionProducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionProducer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_builder_keeps_declaration_order() {
        let record = Record::new("Person")
            .field("Name", "Chris")
            .field("Age", 33)
            .field("City", "London");

        assert_eq!(record.name(), Some("Person"));
        assert_eq!(record.len(), 3);

        let names: Vec<_> = record.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Name", "Age", "City"]);
    }

    #[test]
    fn test_record_get() {
        let record = Record::anonymous().field("Name", "Chris");

        assert_eq!(record.name(), None);
        assert_eq!(record.get("Name").and_then(Value::as_str), Some("Chris"));
        assert!(record.get("Missing").is_none());
    }

    #[test]
    fn test_shape_of_each_variant() {
        let (tx, rx) = crossbeam_channel::unbounded::<String>();
        drop(tx);

        assert_eq!(Value::string("a").shape(), Shape::String);
        assert_eq!(Value::Struct(Record::anonymous()).shape(), Shape::Struct);
        assert_eq!(Value::pointer("a").shape(), Shape::Pointer);
        assert_eq!(Value::null().shape(), Shape::Pointer);
        assert_eq!(Value::sequence(["a"]).shape(), Shape::Sequence);
        assert_eq!(Value::mapping([("k", "v")]).shape(), Shape::Mapping);
        assert_eq!(Value::channel(rx).shape(), Shape::Channel);
        assert_eq!(Value::function(|| ()).shape(), Shape::Function);
        assert_eq!(Value::Other(Scalar::Bool(true)).shape(), Shape::Other);
    }

    #[test]
    fn test_channel_producer_stops_when_closed() {
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send("a").unwrap();
        tx.send("b").unwrap();
        drop(tx);

        let producer = ChannelProducer::new(rx);
        let got: Vec<_> = producer
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();

        assert_eq!(got, vec!["a", "b"]);
        assert!(producer.recv().is_none());
    }

    #[test]
    fn test_function_producer_is_called_on_demand() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let producer = FunctionProducer::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            ("x",)
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(producer.call().len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_null_pointer() {
        assert!(Value::null().is_null());
        assert!(!Value::pointer("x").is_null());
    }
}
