// Item kind value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Character,
    LightCone,
}

impl ItemKind {
    /// Maps the localized `item_type` label emitted by the source.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "character" | "characters" | "ตัวละคร" | "角色" | "キャラクター" | "캐릭터" => {
                Some(ItemKind::Character)
            }
            "lightcone" | "lightcones" | "光锥" | "光錐" | "光円錐" | "광추" => {
                Some(ItemKind::LightCone)
            }
            _ => None,
        }
    }

    /// Characters carry 4-digit ids and light cones 5-digit ids.
    pub fn from_item_id(item_id: &str) -> Option<Self> {
        let digits = item_id.trim();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        match digits.len() {
            4 => Some(ItemKind::Character),
            5 => Some(ItemKind::LightCone),
            _ => None,
        }
    }
}
