//! Clients

use std::fmt;

use crate::{
    entities::{Displayable, person::Person},
    ids::TypedId,
    repository::Record,
};

/// Client identifier
pub type ClientId = TypedId<Client>;

/// Client classification, which decides the discount a client gets.
///
/// The label is stored exactly as it was entered and displayed verbatim. Only the VIP
/// check ignores case, so `"vip"` earns the VIP discount but still renders as `vip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTier(String);

impl ClientTier {
    /// Label of the discounted tier.
    pub const VIP: &'static str = "VIP";

    /// Label of the standard tier.
    pub const REGULAR: &'static str = "Regular";

    /// Create a tier from its label.
    pub fn new(label: impl Into<String>) -> Self {
        ClientTier(label.into())
    }

    /// The standard tier.
    #[must_use]
    pub fn regular() -> Self {
        Self::new(Self::REGULAR)
    }

    /// The VIP tier.
    #[must_use]
    pub fn vip() -> Self {
        Self::new(Self::VIP)
    }

    /// Whether the label names the VIP tier, ignoring case.
    pub fn is_vip(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::VIP)
    }

    /// The label as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientTier {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for ClientTier {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// New Client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    /// Name and national id
    pub person: Person,

    /// Contact phone number
    pub phone: String,

    /// Client tier
    pub tier: ClientTier,
}

/// Client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    person: Person,
    phone: String,
    tier: ClientTier,
}

impl Client {
    /// Client identifier
    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Name and national id
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Full name
    pub fn name(&self) -> &str {
        &self.person.name
    }

    /// National identity document number
    pub fn national_id(&self) -> &str {
        &self.person.national_id
    }

    /// Contact phone number
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Client tier
    pub fn tier(&self) -> &ClientTier {
        &self.tier
    }
}

impl Record for Client {
    type Draft = NewClient;

    fn from_draft(id: ClientId, draft: NewClient) -> Self {
        Client {
            id,
            person: draft.person,
            phone: draft.phone,
            tier: draft.tier,
        }
    }

    fn id(&self) -> ClientId {
        self.id
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, {}, Phone: {}, Tier: {}",
            self.id, self.person, self.phone, self.tier
        )
    }
}

impl Displayable for Client {
    fn greeting(&self) -> String {
        format!("Hi, I'm {}, a {} client.", self.name(), self.tier)
    }
}
