use crate::entities::{BannerDefinition, ClassifiedPull, PullRecord};
use crate::services::{AmbiguousBannerWindow, BannerCatalog, BannerResolver};
use crate::value_objects::Outcome;

/// Classified pulls plus the data-quality warnings found along the way.
#[derive(Debug, Default)]
pub struct Classification {
    /// Ascending by pull id.
    pub pulls: Vec<ClassifiedPull>,
    pub ambiguities: Vec<AmbiguousBannerWindow>,
}

pub fn classify(pull: &PullRecord, resolved: Option<&BannerDefinition>) -> Outcome {
    let rule = pull.category.rule();
    if pull.rarity < rule.top_rarity {
        return Outcome::Lose;
    }
    if !rule.rate_up {
        return Outcome::Lose;
    }
    match resolved {
        Some(banner) if !banner.featured_items.is_empty() && banner.is_featured(&pull.item_id) => {
            Outcome::Win
        }
        _ => Outcome::Lose,
    }
}

pub fn classify_all(pulls: &[PullRecord], catalog: &BannerCatalog) -> Vec<ClassifiedPull> {
    classify_all_with_report(pulls, catalog).pulls
}

pub fn classify_all_with_report(pulls: &[PullRecord], catalog: &BannerCatalog) -> Classification {
    let resolver = BannerResolver::new(catalog);
    let mut ordered: Vec<&PullRecord> = pulls.iter().collect();
    ordered.sort_by_key(|pull| pull.id);

    let mut classification = Classification {
        pulls: Vec::with_capacity(ordered.len()),
        ambiguities: Vec::new(),
    };
    for pull in ordered {
        let resolution = resolver.resolve_detailed(pull.category, pull.time);
        if let Some(chosen) = resolution.banner.filter(|_| resolution.is_ambiguous()) {
            classification.ambiguities.push(AmbiguousBannerWindow {
                pull_id: pull.id,
                category: pull.category,
                chosen: chosen.banner_id.clone(),
                also_matched: resolution
                    .also_matched
                    .iter()
                    .map(|banner| banner.banner_id.clone())
                    .collect(),
            });
        }
        let outcome = classify(pull, resolution.banner.map(|banner| &**banner));
        classification.pulls.push(ClassifiedPull {
            pull: pull.clone(),
            outcome,
            resolved_banner: resolution.banner.cloned(),
        });
    }
    classification
}
