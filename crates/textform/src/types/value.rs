use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Text;

/// A runtime value accepted by [`Text`] construction, compose hooks and
/// interpolation components.
///
/// Scalars (numbers and strings) become a single text value; lists become a
/// multi-value text. A list with exactly one element collapses to that
/// element.
///
/// # Example
///
/// ```
/// use textform::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Alice".into();
/// let names: Value = vec!["a", "b", "c"].into();
///
/// assert_eq!(count.as_number(), Some(42));
/// assert_eq!(name.as_string(), Some("Alice"));
/// assert_eq!(names.as_list().map(<[Value]>::len), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// An ordered collection of values.
    List(Vec<Value>),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the scalar text of this value, or `None` for lists.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Value::Number(n) => Some(n.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::List(_) => None,
        }
    }

    /// Interprets this value as an integer the way printf `%d` does.
    ///
    /// Strings are parsed after trimming; anything unparsable is zero.
    pub fn to_integer(&self) -> i64 {
        match self {
            Value::Number(n) => *n,
            Value::Float(f) => f.trunc() as i64,
            Value::String(s) => {
                let trimmed = s.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().map(|f| f.trunc() as i64))
                    .unwrap_or(0)
            }
            Value::List(items) => i64::from(!items.is_empty()),
        }
    }

    /// Interprets this value as a float the way printf `%f` does.
    pub fn to_float(&self) -> f64 {
        match self {
            Value::Number(n) => *n as f64,
            Value::Float(f) => *f,
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Value::List(items) => {
                if items.is_empty() {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Text> for Value {
    fn from(text: Text) -> Self {
        Value::String(text.to_string())
    }
}

impl From<&Text> for Value {
    fn from(text: &Text) -> Self {
        Value::String(text.to_string())
    }
}
