// Import report entity

use serde::{Deserialize, Serialize};

use crate::value_objects::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub import_id: String,
    pub player_id: PlayerId,
    pub received: usize,
    pub imported: usize,
    pub duplicates: usize,
    pub skipped: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDeletion {
    pub player_id: PlayerId,
    pub removed_pulls: usize,
}
