//! People

use std::fmt;

/// Details shared by everyone the dealership keeps on record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Full name
    pub name: String,

    /// National identity document number
    pub national_id: String,
}

impl Person {
    /// Create a new person.
    pub fn new(name: impl Into<String>, national_id: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            national_id: national_id.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, National ID: {}", self.name, self.national_id)
    }
}
