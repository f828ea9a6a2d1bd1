//! Scalar attribute values
//!
//! Message attributes hold one of a small, closed set of scalar variants.
//! Equality is per variant, so `Int(1)`, `Float(1.0)` and `String("1")` are
//! three different values and never match each other when filtering.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute map attached to every message
///
/// Lookup is by key; iteration (and therefore serialization) follows
/// insertion order.
pub type Attributes = IndexMap<String, Value>;

/// A scalar attribute value
///
/// # Examples
///
/// ```
/// use alerts_core::Value;
///
/// assert_eq!(Value::from("1"), Value::String("1".to_string()));
/// assert_ne!(Value::from("1"), Value::from(1));
/// assert_ne!(Value::from(1), Value::from(1.0));
/// assert_eq!(Value::from(None::<i64>), Value::Null);
/// assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	String(String),
}

impl Value {
	/// Returns true for `Value::Null`
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Returns the string slice for `Value::String`
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the flag for `Value::Bool`
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the integer for `Value::Int`; floats are not converted
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::Int(i) => Some(*i),
			_ => None,
		}
	}

	/// Returns the float for `Value::Float`; integers are not converted
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Float(f) => Some(*f),
			_ => None,
		}
	}

	/// Converts into a JSON value
	///
	/// Non-finite floats have no JSON representation and become `null`.
	///
	/// # Examples
	///
	/// ```
	/// use alerts_core::Value;
	/// use serde_json::json;
	///
	/// assert_eq!(Value::from("x").to_json(), json!("x"));
	/// assert_eq!(Value::from(f64::NAN).to_json(), json!(null));
	/// ```
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Value::Null => serde_json::Value::Null,
			Value::Bool(b) => serde_json::Value::Bool(*b),
			Value::Int(i) => serde_json::Value::from(*i),
			Value::Float(f) => serde_json::Number::from_f64(*f)
				.map(serde_json::Value::Number)
				.unwrap_or(serde_json::Value::Null),
			Value::String(s) => serde_json::Value::String(s.clone()),
		}
	}
}

/// Same variant and same payload
///
/// Two NaN floats compare equal so that `pluck` collects NaN once and a NaN
/// criterion matches a stored NaN.
impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Null, Value::Null) => true,
			(Value::Bool(a), Value::Bool(b)) => a == b,
			(Value::Int(a), Value::Int(b)) => a == b,
			(Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
			(Value::String(a), Value::String(b)) => a == b,
			_ => false,
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => Ok(()),
			Value::Bool(b) => write!(f, "{}", b),
			Value::Int(i) => write!(f, "{}", i),
			Value::Float(x) => write!(f, "{}", x),
			Value::String(s) => f.write_str(s),
		}
	}
}

macro_rules! impl_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Value::Int(i64::from(value))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers saturate at the bounds of `i64`

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Value::Int(i64::try_from(value).unwrap_or(i64::MAX))
	}
}

impl From<usize> for Value {
	fn from(value: usize) -> Self {
		Value::Int(i64::try_from(value).unwrap_or(i64::MAX))
	}
}

impl From<isize> for Value {
	fn from(value: isize) -> Self {
		Value::Int(i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX }))
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Value::Float(f64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<&String> for Value {
	fn from(value: &String) -> Self {
		Value::String(value.clone())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Value::Null)
	}
}

/// Builds an [`Attributes`] map
///
/// # Examples
///
/// ```
/// use alerts_core::{attributes, Value};
///
/// let attrs = attributes! { "overlay" => true, "title" => "Winner!" };
/// assert_eq!(attrs.get("overlay"), Some(&Value::Bool(true)));
/// assert_eq!(attributes! {}.len(), 0);
/// ```
#[macro_export]
macro_rules! attributes {
	() => {
		$crate::Attributes::new()
	};
	($($key:expr => $value:expr),+ $(,)?) => {{
		let mut attrs = $crate::Attributes::new();
		$(
			attrs.insert(::std::string::String::from($key), $crate::Value::from($value));
		)+
		attrs
	}};
}
