//! Conversions into [`Value`].
//!
//! This is the only place where the static type of external data matters.
//! Everything past this boundary is a [`Value`].

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::sync::Arc;

use crossbeam_channel::Receiver;

use crate::{Record, Scalar, Value};

/// Conversion of a typed value into a walkable [`Value`].
///
/// User structs opt in with [`impl_into_value!`](crate::impl_into_value),
/// which lists the fields in declaration order.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Conversion of a function's return value into the list of values it
/// produced.
///
/// `()` produces nothing. Tuples produce one value per element.
pub trait IntoResults {
    fn into_results(self) -> Vec<Value>;
}

/// Implements [`IntoValue`] for a struct by listing its fields.
///
/// Fields are walked in the order they are listed here, so list them in
/// declaration order.
///
/// ```rust
/// use kata_walk::{collect_strings, impl_into_value, IntoValue};
///
/// struct Profile {
///     age: u32,
///     city: String,
/// }
///
/// impl_into_value!(Profile { age, city });
///
/// let profile = Profile { age: 33, city: "London".into() };
/// assert_eq!(collect_strings(&profile.into_value()), vec!["London"]);
/// ```
#[macro_export]
macro_rules! impl_into_value {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::IntoValue for $ty {
            fn into_value(self) -> $crate::Value {
                $crate::Value::Struct(
                    $crate::Record::new(stringify!($ty))
                        $(.field(stringify!($field), self.$field))*
                )
            }
        }
    };
}

impl IntoValue for Value {
    #[inline]
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for Record {
    fn into_value(self) -> Value {
        Value::Struct(self)
    }
}

impl IntoValue for Scalar {
    fn into_value(self) -> Value {
        Value::Other(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoValue for &String {
    fn into_value(self) -> Value {
        Value::String(self.clone())
    }
}

impl IntoValue for Cow<'_, str> {
    fn into_value(self) -> Value {
        Value::String(self.into_owned())
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Other(Scalar::Bool(self))
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::Other(Scalar::Char(self))
    }
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::Other(Scalar::Int(self as i64))
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::Other(Scalar::UInt(self as u64))
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Other(Scalar::Float(f64::from(self)))
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Other(Scalar::Float(self))
    }
}

impl<T: IntoValue> IntoValue for Box<T> {
    fn into_value(self) -> Value {
        Value::pointer(*self)
    }
}

impl<T: IntoValue + Clone> IntoValue for Arc<T> {
    fn into_value(self) -> Value {
        Value::pointer(Arc::unwrap_or_clone(self))
    }
}

/// `None` is a null pointer.
impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(target) => Value::pointer(target),
            None => Value::null(),
        }
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::sequence(self)
    }
}

impl<T: IntoValue> IntoValue for VecDeque<T> {
    fn into_value(self) -> Value {
        Value::sequence(self)
    }
}

impl<T: IntoValue, const N: usize> IntoValue for [T; N] {
    fn into_value(self) -> Value {
        Value::sequence(self)
    }
}

impl<K, V, S> IntoValue for HashMap<K, V, S>
where
    K: IntoValue,
    V: IntoValue,
    S: BuildHasher,
{
    fn into_value(self) -> Value {
        Value::mapping(self)
    }
}

impl<K: IntoValue, V: IntoValue> IntoValue for BTreeMap<K, V> {
    fn into_value(self) -> Value {
        Value::mapping(self)
    }
}

impl<T: IntoValue + Send + 'static> IntoValue for Receiver<T> {
    fn into_value(self) -> Value {
        Value::channel(self)
    }
}

/// JSON objects become anonymous records keyed by property name.
impl IntoValue for serde_json::Value {
    fn into_value(self) -> Value {
        use serde_json::Value as Json;

        match self {
            Json::Null => Value::Other(Scalar::Null),
            Json::Bool(b) => Value::Other(Scalar::Bool(b)),
            Json::Number(n) => {
                let scalar = n
                    .as_i64()
                    .map(Scalar::Int)
                    .or_else(|| n.as_u64().map(Scalar::UInt))
                    .unwrap_or_else(|| Scalar::Float(n.as_f64().unwrap_or_default()));
                Value::Other(scalar)
            }
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::sequence(items),
            Json::Object(map) => {
                let mut record = Record::anonymous();
                for (key, value) in map {
                    record.push(key, value);
                }
                Value::Struct(record)
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        json.into_value()
    }
}

impl IntoResults for () {
    fn into_results(self) -> Vec<Value> {
        Vec::new()
    }
}

impl IntoResults for Vec<Value> {
    fn into_results(self) -> Vec<Value> {
        self
    }
}

macro_rules! impl_results_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: IntoValue),+> IntoResults for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_results(self) -> Vec<Value> {
                let ($($name,)+) = self;
                vec![$($name.into_value()),+]
            }
        }
    };
}

impl_results_for_tuple!(A);
impl_results_for_tuple!(A, B);
impl_results_for_tuple!(A, B, C);
impl_results_for_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::str("x".into_value(), Shape::String)]
    #[case::owned_string(String::from("x").into_value(), Shape::String)]
    #[case::int(33_i32.into_value(), Shape::Other)]
    #[case::unsigned(7_usize.into_value(), Shape::Other)]
    #[case::float(1.5_f64.into_value(), Shape::Other)]
    #[case::bool(true.into_value(), Shape::Other)]
    #[case::char('c'.into_value(), Shape::Other)]
    #[case::boxed(Box::new("x").into_value(), Shape::Pointer)]
    #[case::some(Some("x").into_value(), Shape::Pointer)]
    #[case::vec(vec!["a", "b"].into_value(), Shape::Sequence)]
    #[case::array(["a", "b"].into_value(), Shape::Sequence)]
    #[case::btree(BTreeMap::from([("k", "v")]).into_value(), Shape::Mapping)]
    fn test_shape_after_conversion(#[case] value: Value, #[case] expected: Shape) {
        assert_eq!(value.shape(), expected);
    }

    #[test]
    fn test_none_is_null_pointer() {
        let value = Option::<String>::None.into_value();
        assert!(value.is_null());
    }

    #[test]
    fn test_integer_scalars() {
        match (-4_i8).into_value() {
            Value::Other(Scalar::Int(n)) => assert_eq!(n, -4),
            other => panic!("Expected Int scalar, got {:?}", other),
        }
        match 4_u16.into_value() {
            Value::Other(Scalar::UInt(n)) => assert_eq!(n, 4),
            other => panic!("Expected UInt scalar, got {:?}", other),
        }
    }

    #[test]
    fn test_tuple_results() {
        assert!(().into_results().is_empty());
        assert_eq!(("a",).into_results().len(), 1);
        assert_eq!(("a", 1, "b").into_results().len(), 3);
        assert_eq!(("a", "b", "c", "d").into_results().len(), 4);
    }

    #[test]
    fn test_json_conversion() {
        let json = serde_json::json!({
            "name": "Chris",
            "age": 33,
            "tags": ["a", null, 1.5],
        });

        let value = Value::from(json);
        let Value::Struct(record) = value else {
            panic!("Expected JSON object to become a record");
        };

        assert_eq!(record.name(), None);
        assert_eq!(record.get("name").and_then(Value::as_str), Some("Chris"));
        assert_eq!(record.get("age").map(Value::shape), Some(Shape::Other));

        match record.get("tags") {
            Some(Value::Sequence(items)) => {
                let shapes: Vec<_> = items.iter().map(Value::shape).collect();
                assert_eq!(shapes, vec![Shape::String, Shape::Other, Shape::Other]);
            }
            other => panic!("Expected tags to be a sequence, got {:?}", other),
        }
    }

    #[test]
    fn test_json_large_unsigned_number() {
        let value = serde_json::json!(u64::MAX).into_value();
        match value {
            Value::Other(Scalar::UInt(n)) => assert_eq!(n, u64::MAX),
            other => panic!("Expected UInt scalar, got {:?}", other),
        }
    }
}
