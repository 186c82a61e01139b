// Rarity value object

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rarity {
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rarity {
    pub fn stars(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rarity {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Rarity::Three),
            4 => Ok(Rarity::Four),
            5 => Ok(Rarity::Five),
            other => Err(DomainError::MalformedRecord {
                field: "rarity",
                reason: format!("unsupported rarity {}", other),
            }),
        }
    }
}

impl From<Rarity> for u8 {
    fn from(value: Rarity) -> Self {
        value.stars()
    }
}
