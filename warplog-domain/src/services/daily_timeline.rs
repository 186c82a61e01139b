use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::entities::{ClassifiedPull, TimelineBanner, TimelineBucket};
use crate::value_objects::{Category, Outcome, Rarity};

/// Per-day activity in source-local dates, oldest day first. Days without
/// pulls are not emitted. Each day is tagged with the banner of its first
/// resolved pull in id order.
pub fn build_timeline(
    classified: &[ClassifiedPull],
    categories: Option<&[Category]>,
    since: Option<NaiveDate>,
) -> Vec<TimelineBucket> {
    let mut buckets: BTreeMap<NaiveDate, TimelineBucket> = BTreeMap::new();
    for pull in classified {
        if let Some(wanted) = categories {
            if !wanted.contains(&pull.category()) {
                continue;
            }
        }
        let date = pull.time().date();
        if since.is_some_and(|since| date < since) {
            continue;
        }
        let bucket = buckets
            .entry(date)
            .or_insert_with(|| TimelineBucket::empty(date));
        bucket.pulls += 1;
        if bucket.banner.is_none() {
            bucket.banner = pull.resolved_banner.as_deref().map(|banner| TimelineBanner {
                banner_id: banner.banner_id.clone(),
                name: banner.name.clone(),
                category: banner.category,
            });
        }
        if pull.is_top_rarity() {
            bucket.five_stars += 1;
            match pull.outcome {
                Outcome::Win => bucket.wins += 1,
                Outcome::Lose => bucket.losses += 1,
            }
        } else if pull.rarity() == Rarity::Four {
            bucket.four_stars += 1;
        }
    }
    buckets.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{banner, pull, trash};
    use crate::services::{classify_all, BannerCatalog};

    fn classified() -> Vec<ClassifiedPull> {
        let catalog = BannerCatalog::new(vec![banner(
            "b1",
            Category::CharacterEvent,
            "2024-01-01",
            "2024-01-31",
            &["1308"],
        )]);
        let pulls = vec![
            trash(1, Category::CharacterEvent, "b1", "2024-01-03 23:59:59"),
            pull(2, Category::CharacterEvent, "b1", Rarity::Five, "1308", "2024-01-03 10:00:00"),
            pull(3, Category::CharacterEvent, "b1", Rarity::Four, "1111", "2024-01-01 08:00:00"),
            pull(4, Category::Standard, "std", Rarity::Five, "1003", "2024-01-03 11:00:00"),
            trash(5, Category::LightConeEvent, "lc", "2024-01-05 00:00:00"),
        ];
        classify_all(&pulls, &catalog)
    }

    #[test]
    fn groups_by_day_in_date_order() {
        let timeline = build_timeline(&classified(), None, None);
        let dates: Vec<String> = timeline.iter().map(|b| b.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-03", "2024-01-05"]);
        let busy = &timeline[1];
        assert_eq!(busy.pulls, 3);
        assert_eq!(busy.five_stars, 2);
        assert_eq!(busy.wins, 1);
        assert_eq!(busy.losses, 1);
        assert_eq!(timeline[0].four_stars, 1);
    }

    #[test]
    fn tags_days_with_their_banner() {
        let timeline = build_timeline(&classified(), None, None);
        let banners: Vec<Option<&str>> = timeline
            .iter()
            .map(|bucket| bucket.banner.as_ref().map(|banner| banner.banner_id.as_str()))
            .collect();
        assert_eq!(banners, vec![Some("b1"), Some("b1"), None]);
        let tag = timeline[1].banner.as_ref().expect("banner");
        assert_eq!(tag.category, Category::CharacterEvent);
    }

    #[test]
    fn filters_by_category_and_since() {
        let only_event = [Category::CharacterEvent];
        let since = NaiveDate::from_ymd_opt(2024, 1, 2);
        let timeline = build_timeline(&classified(), Some(&only_event), since);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].pulls, 2);
        assert_eq!(timeline[0].losses, 0);
    }

    #[test]
    fn empty_history_has_no_buckets() {
        assert!(build_timeline(&[], None, None).is_empty());
    }
}
