// Identifier value objects

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

const MAX_PLAYER_ID_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Player ids double as storage keys, so only `[A-Za-z0-9_-]` is accepted.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidPlayerId("player id is empty".to_string()));
        }
        if trimmed.len() > MAX_PLAYER_ID_LEN {
            return Err(DomainError::InvalidPlayerId(format!(
                "player id longer than {} characters",
                MAX_PLAYER_ID_LEN
            )));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(DomainError::InvalidPlayerId(format!(
                "player id '{}' contains invalid characters",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BannerId(pub String);

impl BannerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source-assigned pull id. Monotonic per account, so it is the ordering key
/// of record. Serialized as a decimal string to survive JSON consumers that
/// only have doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PullId(pub u64);

impl FromStr for PullId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::MalformedRecord {
                field: "id",
                reason: format!("'{}' is not a decimal id", trimmed),
            });
        }
        trimmed
            .parse::<u64>()
            .map(PullId)
            .map_err(|err| DomainError::MalformedRecord {
                field: "id",
                reason: format!("'{}' out of range: {}", trimmed, err),
            })
    }
}

impl fmt::Display for PullId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PullId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PullId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PullIdVisitor;

        impl<'de> Visitor<'de> for PullIdVisitor {
            type Value = PullId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a decimal pull id as string or integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<PullId, E> {
                Ok(PullId(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<PullId, E> {
                u64::try_from(v)
                    .map(PullId)
                    .map_err(|_| E::custom("negative pull id"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<PullId, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PullIdVisitor)
    }
}
