use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::entities::{
    BannerDefinition, BannerStats, BannerSummary, CategoryStats, ClassifiedPull, PityRecord,
    PlayerOverview,
};
use crate::services::{category_history, scan, BannerCatalog};
use crate::value_objects::{Category, Outcome, PlayerId, Rarity};

#[derive(Debug, Clone, Copy)]
pub enum AggregateScope<'a> {
    Category(Category),
    Banner(&'a BannerDefinition),
}

/// Banner membership: matching banner id, or for categories whose pulls do
/// not carry a stable banner id, a pull time inside the window.
pub fn belongs_to_banner(pull: &ClassifiedPull, banner: &BannerDefinition) -> bool {
    if pull.category() != banner.category {
        return false;
    }
    pull.pull.banner_id == banner.banner_id
        || (!banner.category.rule().stable_banner_ids && banner.contains(pull.time()))
}

pub fn aggregate(classified: &[ClassifiedPull], scope: AggregateScope<'_>) -> BannerStats {
    let (stats, _) = derive(classified, scope);
    stats
}

pub fn summarize_banner(
    classified: &[ClassifiedPull],
    banner: &Arc<BannerDefinition>,
    now: NaiveDateTime,
) -> BannerSummary {
    let (stats, mut five_stars) = derive(classified, AggregateScope::Banner(banner));
    five_stars.reverse();
    BannerSummary {
        banner: Arc::clone(banner),
        active: banner.is_active_at(now),
        carry_over_pity: stats.current_pity,
        stats,
        five_stars,
    }
}

/// Summaries for every catalog banner (optionally one category), newest
/// start first. Banners without a single member pull are dropped unless
/// `include_empty` is set.
pub fn summarize_banners(
    classified: &[ClassifiedPull],
    catalog: &BannerCatalog,
    category: Option<Category>,
    include_empty: bool,
    now: NaiveDateTime,
) -> Vec<BannerSummary> {
    let mut summaries: Vec<BannerSummary> = catalog
        .definitions()
        .iter()
        .filter(|banner| category.map_or(true, |category| banner.category == category))
        .map(|banner| summarize_banner(classified, banner, now))
        .filter(|summary| include_empty || summary.stats.total_pulls > 0)
        .collect();
    summaries.sort_by(|a, b| b.banner.start_time.cmp(&a.banner.start_time));
    summaries
}

pub fn overview(player_id: &PlayerId, classified: &[ClassifiedPull]) -> PlayerOverview {
    let categories = Category::ALL
        .iter()
        .copied()
        .filter(|category| classified.iter().any(|pull| pull.category() == *category))
        .map(|category| CategoryStats {
            category,
            name: category.rule().name,
            stats: aggregate(classified, AggregateScope::Category(category)),
        })
        .collect();
    PlayerOverview {
        player_id: player_id.clone(),
        total_pulls: classified.len() as u32,
        categories,
    }
}

/// Both scopes run the full category scan so banner views keep pity carried
/// in from earlier banners. Records come back oldest first.
fn derive(classified: &[ClassifiedPull], scope: AggregateScope<'_>) -> (BannerStats, Vec<PityRecord>) {
    match scope {
        AggregateScope::Category(category) => {
            let history = category_history(classified, category);
            let result = scan(&history);
            let stats = rollup(category, &history, &result.records, result.current_pity);
            (stats, result.records)
        }
        AggregateScope::Banner(banner) => {
            let history = category_history(classified, banner.category);
            let members: Vec<&ClassifiedPull> = history
                .iter()
                .copied()
                .filter(|pull| belongs_to_banner(pull, banner))
                .collect();
            let records: Vec<PityRecord> = scan(&history)
                .records
                .into_iter()
                .filter(|record| belongs_to_banner(&record.pull, banner))
                .collect();
            let until_close: Vec<&ClassifiedPull> = history
                .iter()
                .copied()
                .filter(|pull| pull.time() <= banner.end_time)
                .collect();
            let open_pity = scan(&until_close).current_pity;
            let stats = rollup(banner.category, &members, &records, open_pity);
            (stats, records)
        }
    }
}

fn rollup(
    category: Category,
    members: &[&ClassifiedPull],
    records: &[PityRecord],
    current_pity: u32,
) -> BannerStats {
    let mut stats = BannerStats {
        total_pulls: members.len() as u32,
        current_pity,
        ..BannerStats::default()
    };
    for pull in members {
        if pull.is_top_rarity() {
            stats.five_star_pulls += 1;
            match pull.outcome {
                Outcome::Win => stats.win_count += 1,
                Outcome::Lose => stats.lose_count += 1,
            }
        } else if pull.rarity() == Rarity::Four {
            stats.four_star_pulls += 1;
        }
    }
    if stats.five_star_pulls > 0 {
        stats.win_rate = f64::from(stats.win_count) / f64::from(stats.five_star_pulls) * 100.0;
    }
    if !records.is_empty() {
        let total: u32 = records.iter().map(|record| record.pity_count).sum();
        stats.average_pity = f64::from(total) / records.len() as f64;
    }
    stats.shortest_pity = records.iter().map(|record| record.pity_count).min();
    stats.longest_pity = records.iter().map(|record| record.pity_count).max();
    stats.pity_cap = category.rule().pity_cap;
    stats.pulls_until_cap = stats.pity_cap.map(|cap| cap.saturating_sub(current_pity));
    stats
}
