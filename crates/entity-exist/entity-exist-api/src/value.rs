use std::fmt;

use serde::{Deserialize, Serialize};

/// A generic wrapper enum to hold any value submitted for validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    Boolean(bool),
    Decimal(rust_decimal::Decimal),
    Int64(i64),
    Null,
    Text(String),
    Uint64(u64),
    Uuid(uuid::Uuid),
}

// macro rules for implementing From trait for Value enum variants
macro_rules! impl_conv_for_value {
    ($variant:ident, $ty:ty, $name:ident, $test_name:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }

        impl Value {
            /// Attempts to extract a reference to the inner value if it matches the variant.
            pub fn $name(&self) -> Option<&$ty> {
                if let Value::$variant(v) = self {
                    Some(v)
                } else {
                    None
                }
            }
        }

        #[cfg(test)]
        mod $test_name {
            use super::*;

            #[test]
            fn test_value_conversion() {
                let value_instance: $ty = Default::default();
                let value: Value = value_instance.clone().into();
                assert_eq!(value.$name(), Some(&value_instance));
            }
        }
    };
}

// widening conversions from the primitives which don't have their own variant
macro_rules! value_from_primitive {
    ($variant:ident, $wide:ty, $primitive:ty, $test_name:ident) => {
        impl From<$primitive> for Value {
            fn from(value: $primitive) -> Self {
                Value::$variant(<$wide>::from(value))
            }
        }

        #[cfg(test)]
        mod $test_name {
            use super::*;

            #[test]
            fn test_value_from_primitive() {
                let primitive_value: $primitive = 7;
                assert_eq!(
                    Value::from(primitive_value),
                    Value::$variant(<$wide>::from(primitive_value))
                );
            }
        }
    };
}

impl_conv_for_value!(Boolean, bool, as_boolean, tests_boolean);
impl_conv_for_value!(Decimal, rust_decimal::Decimal, as_decimal, tests_decimal);
impl_conv_for_value!(Int64, i64, as_int64, tests_int64);
impl_conv_for_value!(Text, String, as_text, tests_text);
impl_conv_for_value!(Uint64, u64, as_uint64, tests_uint64);
impl_conv_for_value!(Uuid, uuid::Uuid, as_uuid, tests_uuid);

value_from_primitive!(Int64, i64, i8, tests_int8_primitive);
value_from_primitive!(Int64, i64, i16, tests_int16_primitive);
value_from_primitive!(Int64, i64, i32, tests_int32_primitive);
value_from_primitive!(Uint64, u64, u8, tests_uint8_primitive);
value_from_primitive!(Uint64, u64, u16, tests_uint16_primitive);
value_from_primitive!(Uint64, u64, u32, tests_uint32_primitive);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl Value {
    /// Checks if the value is [`Value::Null`] or an empty [`Value::Text`].
    ///
    /// Blank values are considered as "not provided" by validators.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(text) => text.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::Int64(i) => write!(f, "{i}"),
            Value::Null => Ok(()),
            Value::Text(text) => f.write_str(text),
            Value::Uint64(u) => write!(f, "{u}"),
            Value::Uuid(uuid) => write!(f, "{}", uuid.hyphenated()),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_blank() {
        assert!(Value::Null.is_blank());
        assert!(Value::from("").is_blank());
        assert!(!Value::from(" ").is_blank());
        assert!(!Value::from("foobar").is_blank());
        assert!(!Value::from(0i64).is_blank());
        assert!(!Value::from(false).is_blank());
    }

    #[test]
    fn test_value_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(1i32)), Value::Int64(1));
        assert_eq!(Value::from(Some("user")), Value::Text("user".to_string()));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(1i32).to_string(), "1");
        assert_eq!(Value::from(-12i64).to_string(), "-12");
        assert_eq!(Value::from(42u8).to_string(), "42");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from("foobar").to_string(), "foobar");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(
            Value::from(rust_decimal::Decimal::new(12345, 2)).to_string(),
            "123.45"
        );

        let uuid = uuid::Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000")
            .expect("failed to parse uuid");
        assert_eq!(
            Value::from(uuid).to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }
}
