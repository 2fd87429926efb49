use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A person's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    first_name: String,
    surname: String,
}

impl Name {
    pub fn new(first_name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }
}

impl ValueObject for Name {}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.first_name, self.surname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_differing_in_surname_are_different_values() {
        assert_ne!(Name::new("Harry", "One"), Name::new("Harry", "Two"));
        assert_eq!(Name::new("Harry", "One"), Name::new("Harry", "One"));
    }

    #[test]
    fn displays_full_name() {
        assert_eq!(Name::new("Harry", "One").to_string(), "Harry One");
    }
}
