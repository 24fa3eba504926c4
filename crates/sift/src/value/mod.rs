//! Runtime values for the matcher.
//!
//! Subjects, captures, and pattern literals all flow through one closed
//! `Value` algebra. All heap allocations go through factory methods on
//! `Value`; the `Heap<T>` wrapper has a private constructor, so external
//! code cannot create heap values directly.
//!
//! The engine never mutates a value: matching borrows subjects and clones
//! only what it captures, and every heap variant is an `Arc` underneath,
//! so cloning is a reference-count bump.

mod heap;

#[cfg(test)]
mod tests;

use crate::errors::MatchError;
use std::fmt;

pub use heap::Heap;

/// Built-in callable value.
///
/// Takes its arguments positionally; a returned `Err` propagates through
/// the engine as a fault.
pub type NativeFn = fn(&[Value]) -> Result<Value, MatchError>;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Null / absent value.
    Null,

    // Heap types (use Heap<T> for enforced Arc usage)
    /// String value.
    Str(Heap<String>),
    /// Ordered list of values.
    List(Heap<Vec<Value>>),
    /// Keyed mapping with insertion-ordered entries.
    ///
    /// Entry order is observable: the map matcher walks subject entries
    /// greedily in this order, so identical inputs always pair up the
    /// same way.
    Map(Heap<Vec<(String, Value)>>),

    // Composite types
    /// Nominal record instance.
    Record(RecordValue),
    /// Built-in callable with a display name.
    Native(NativeFn, &'static str),
}

/// Record instance: a nominal type name plus ordered fields.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordValue {
    /// Type name of the record.
    pub type_name: Heap<String>,
    /// Field values in declaration order.
    pub fields: Heap<Vec<(String, Value)>>,
}

impl RecordValue {
    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }
}

// Factory methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a floating-point value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a map value from insertion-ordered entries.
    #[inline]
    pub fn map<K: Into<String>>(entries: Vec<(K, Value)>) -> Self {
        Value::Map(Heap::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Create a record instance.
    #[inline]
    pub fn record<K: Into<String>>(type_name: impl Into<String>, fields: Vec<(K, Value)>) -> Self {
        Value::Record(RecordValue {
            type_name: Heap::new(type_name.into()),
            fields: Heap::new(fields.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        })
    }

    /// Create a native callable value.
    #[inline]
    pub fn native(f: NativeFn, name: &'static str) -> Self {
        Value::Native(f, name)
    }
}

// Value methods

impl Value {
    /// Try to read as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to read as a float; integers convert with f64 rounding.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "numeric comparison follows f64 semantics"
                )]
                let converted = *n as f64;
                Some(converted)
            }
            _ => None,
        }
    }

    /// Try to read as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to read as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to read as a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to read as ordered map entries.
    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Record(_) => "record",
            Value::Native(_, _) => "native",
        }
    }

    /// Structural equality as literal patterns see it.
    ///
    /// Unlike `PartialEq`, numeric values compare across representations:
    /// a `3.0` literal matches the subject `3`. The comparison is exact,
    /// never tolerance-based; distinct floats stay distinct. Everything
    /// else is recursive structural equality.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            #[expect(clippy::float_cmp, reason = "literal matching wants exact equality")]
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                match (self.as_float(), other.as_float()) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            }
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| {
                        b.iter()
                            .find(|(bk, _)| bk == k)
                            .is_some_and(|(_, bv)| v.equals(bv))
                    })
            }
            (Value::Record(a), Value::Record(b)) => {
                a.type_name == b.type_name
                    && a.fields.len() == b.fields.len()
                    && a.fields
                        .iter()
                        .zip(b.fields.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va.equals(vb))
            }
            (Value::Native(_, a), Value::Native(_, b)) => a == b,
            _ => false,
        }
    }
}

// Trait implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Null => write!(f, "Null"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Map(entries) => write!(f, "Map({:?})", &**entries),
            Value::Record(r) => write!(f, "Record({:?}, {:?})", &*r.type_name, &*r.fields),
            Value::Native(_, name) => write!(f, "Native({name})"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{k}\": {v}")?;
                }
                write!(f, "}}")
            }
            Value::Record(r) => write!(f, "<record {}>", &*r.type_name),
            Value::Native(_, name) => write!(f, "<native {name}>"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| {
                        b.iter().find(|(bk, _)| bk == k).is_some_and(|(_, bv)| v == bv)
                    })
            }
            (Value::Record(a), Value::Record(b)) => a == b,
            // Natives are equal by display name
            (Value::Native(_, a), Value::Native(_, b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}
