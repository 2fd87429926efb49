//! String identifiers used by the allocation domain.

use serde::{Deserialize, Serialize};

use stockline_core::ValueObject;

/// Identifier of a customer order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

/// Stock-keeping unit: identifies a product type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

/// Reference of a batch of stock (the batch's identity).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchRef(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            /// Wrap a raw identifier. No validation is performed; see
            /// [`Self::is_blank`].
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when the identifier is empty or whitespace only.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_newtype!(OrderId);
impl_string_newtype!(Sku);
impl_string_newtype!(BatchRef);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_compare_by_value() {
        assert_eq!(Sku::from("RED-CHAIR"), Sku::new(String::from("RED-CHAIR")));
        assert_ne!(Sku::from("RED-CHAIR"), Sku::from("BLUE-CHAIR"));
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(OrderId::from("   ").is_blank());
        assert!(BatchRef::from("").is_blank());
        assert!(!BatchRef::from("batch-001").is_blank());
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&BatchRef::from("batch-001")).unwrap();
        assert_eq!(json, "\"batch-001\"");
    }

    #[test]
    fn displays_raw_value() {
        assert_eq!(OrderId::from("order-1").to_string(), "order-1");
    }
}
