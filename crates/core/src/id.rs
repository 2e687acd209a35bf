//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a catalogue product.
///
/// Opaque to the application: the storage layer decides its shape (UUID,
/// serial, ...) and hands it back as text. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Generate a fresh identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Only stores without their own key
    /// generator should call this.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProductId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: must not be empty"));
        }
        Ok(Self(value))
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_non_empty() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn blank_ids_are_rejected() {
        assert!(matches!("".parse::<ProductId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!(ProductId::try_from("   ".to_string()), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
        assert_eq!(id.to_string(), "42");
    }
}
