//! Pity accounting.
//!
//! Every pity figure in the system comes out of [`scan`]: per-category
//! history, per-banner views and carry-over at a banner's close all feed it a
//! different slice of the same id-ordered pull sequence.

use crate::entities::{ClassifiedPull, PityRecord, PityReport};
use crate::value_objects::Category;

/// Output of one pass over an id-ordered pull sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PityScan {
    /// Oldest first.
    pub records: Vec<PityRecord>,
    /// Pulls after the last top-rarity pull (the whole sequence if none).
    pub current_pity: u32,
    pub total_pulls: u32,
}

/// The pulls of one category, ascending by id.
pub fn category_history(classified: &[ClassifiedPull], category: Category) -> Vec<&ClassifiedPull> {
    let mut history: Vec<&ClassifiedPull> = classified
        .iter()
        .filter(|pull| pull.category() == category)
        .collect();
    history.sort_by_key(|pull| pull.id());
    history
}

/// Single left-to-right pass. `pulls` must belong to one category and be in
/// ascending id order.
pub fn scan(pulls: &[&ClassifiedPull]) -> PityScan {
    let mut records = Vec::new();
    let mut since_pity: u32 = 0;
    let mut window_start = 0usize;

    for (index, pull) in pulls.iter().enumerate() {
        since_pity += 1;
        if !pull.is_top_rarity() {
            continue;
        }
        let window = &pulls[window_start..=index];
        let banner_local_count = match pull.resolved_banner.as_deref() {
            Some(banner) => window
                .iter()
                .filter(|member| banner.contains(member.time()))
                .count() as u32,
            None => 0,
        };
        records.push(PityRecord {
            pull: (*pull).clone(),
            pity_count: since_pity,
            banner_local_count,
        });
        since_pity = 0;
        window_start = index + 1;
    }

    PityScan {
        records,
        current_pity: since_pity,
        total_pulls: pulls.len() as u32,
    }
}

/// Pity still open after the last pull of `pulls`.
pub fn current_pity(pulls: &[&ClassifiedPull]) -> u32 {
    scan(pulls).current_pity
}

pub fn compute_pity(classified: &[ClassifiedPull], category: Category) -> PityReport {
    let history = category_history(classified, category);
    let PityScan {
        records,
        current_pity,
        total_pulls,
    } = scan(&history);
    PityReport {
        category,
        records,
        current_pity,
        total_pulls,
    }
}
