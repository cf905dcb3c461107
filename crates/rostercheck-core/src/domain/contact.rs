use crate::domain::email::normalize_email;
use crate::domain::name::normalize_name;
use crate::domain::phone::normalize_phone;
use serde::Serialize;

/// A contact as handed over by an ingestion layer. Fields may be empty or messy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl RawContact {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn normalize(&self) -> CanonicalContact {
        CanonicalContact::normalize(&self.name, &self.email, &self.phone)
    }
}

/// Normalized contact used for comparison. Identity is `name` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalContact {
    name: String,
    email: String,
    phone: String,
}

impl CanonicalContact {
    pub fn normalize(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: normalize_name(name),
            email: normalize_email(email),
            phone: normalize_phone(phone),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Contacts without a name cannot be indexed or matched.
    pub fn is_indexable(&self) -> bool {
        !self.name.is_empty()
    }
}

impl From<&RawContact> for CanonicalContact {
    fn from(raw: &RawContact) -> Self {
        raw.normalize()
    }
}
