// Category (gacha_type) value object and its rule table

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Rarity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Standard,
    Departure,
    CharacterEvent,
    LightConeEvent,
    FateCharacter,
    FateLightCone,
}

/// Everything that varies per category. All category branching reads this
/// table instead of comparing raw codes.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRule {
    pub category: Category,
    pub code: &'static str,
    pub name: &'static str,
    pub top_rarity: Rarity,
    /// Hard pity as advertised by the game. Informational only.
    pub pity_cap: Option<u32>,
    /// Whether featured items exist at all for this pool.
    pub rate_up: bool,
    /// When false, pulls carry a `gacha_id` that does not identify the
    /// catalog banner and membership falls back to the time window.
    pub stable_banner_ids: bool,
}

pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Standard,
        code: "1",
        name: "Standard",
        top_rarity: Rarity::Five,
        pity_cap: Some(90),
        rate_up: false,
        stable_banner_ids: true,
    },
    CategoryRule {
        category: Category::Departure,
        code: "2",
        name: "Departure",
        top_rarity: Rarity::Five,
        pity_cap: Some(50),
        rate_up: true,
        stable_banner_ids: false,
    },
    CategoryRule {
        category: Category::CharacterEvent,
        code: "11",
        name: "Character Event",
        top_rarity: Rarity::Five,
        pity_cap: Some(90),
        rate_up: true,
        stable_banner_ids: true,
    },
    CategoryRule {
        category: Category::LightConeEvent,
        code: "12",
        name: "Light Cone Event",
        top_rarity: Rarity::Five,
        pity_cap: Some(80),
        rate_up: true,
        stable_banner_ids: true,
    },
    CategoryRule {
        category: Category::FateCharacter,
        code: "21",
        name: "Fate Character",
        top_rarity: Rarity::Five,
        pity_cap: Some(90),
        rate_up: true,
        stable_banner_ids: true,
    },
    CategoryRule {
        category: Category::FateLightCone,
        code: "22",
        name: "Fate Light Cone",
        top_rarity: Rarity::Five,
        pity_cap: Some(80),
        rate_up: true,
        stable_banner_ids: true,
    },
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Standard,
        Category::Departure,
        Category::CharacterEvent,
        Category::LightConeEvent,
        Category::FateCharacter,
        Category::FateLightCone,
    ];

    pub fn rule(&self) -> &'static CategoryRule {
        // The table holds one row per variant in declaration order.
        &CATEGORY_RULES[*self as usize]
    }

    pub fn code(&self) -> &'static str {
        self.rule().code
    }

    pub fn top_rarity(&self) -> Rarity {
        self.rule().top_rarity
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "Standard",
            Category::Departure => "Departure",
            Category::CharacterEvent => "CharacterEvent",
            Category::LightConeEvent => "LightConeEvent",
            Category::FateCharacter => "FateCharacter",
            Category::FateLightCone => "FateLightCone",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        CATEGORY_RULES
            .iter()
            .find(|rule| rule.code == code)
            .map(|rule| rule.category)
    }

    /// Accepts either the raw source code ("11") or the variant name, case-insensitively.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if let Some(category) = Self::from_code(value) {
            return Ok(category);
        }
        let wanted = value.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().to_lowercase() == wanted)
            .ok_or_else(|| DomainError::UnknownCategory(value.trim().to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
