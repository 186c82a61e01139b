use crate::clock::source_now;
use crate::queries::snapshot::{load_snapshot, parse_category};
use crate::AppError;
use crate::AppState;
use warplog_domain::{summarize_banner, summarize_banners, BannerId, BannerListQuery, BannerSummary};

pub async fn list_banners(
    state: &AppState,
    player: &str,
    query: BannerListQuery,
) -> Result<Vec<BannerSummary>, AppError> {
    let category = parse_category(query.category.as_deref())?;
    let snapshot = load_snapshot(state, player).await?;
    Ok(summarize_banners(
        &snapshot.classified,
        &snapshot.catalog,
        category,
        query.include_empty,
        source_now(&state.config),
    ))
}

pub async fn get_banner(
    state: &AppState,
    player: &str,
    banner_id: &str,
) -> Result<BannerSummary, AppError> {
    let snapshot = load_snapshot(state, player).await?;
    let banner = snapshot
        .catalog
        .get(&BannerId(banner_id.trim().to_string()))
        .ok_or_else(|| AppError::NotFound(format!("banner '{}'", banner_id)))?;
    Ok(summarize_banner(
        &snapshot.classified,
        banner,
        source_now(&state.config),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{seeded_state, PLAYER};

    #[tokio::test]
    async fn lists_banners_newest_first_without_empty_ones() {
        let state = seeded_state().await;
        let listed = list_banners(
            &state,
            PLAYER,
            BannerListQuery { category: None, include_empty: false },
        )
        .await
        .expect("banners");
        let ids: Vec<&str> = listed.iter().map(|s| s.banner.banner_id.as_str()).collect();
        assert_eq!(ids, vec!["b2", "b1"]);

        let everything = list_banners(
            &state,
            PLAYER,
            BannerListQuery { category: None, include_empty: true },
        )
        .await
        .expect("banners");
        assert_eq!(everything.len(), 3);
    }

    #[tokio::test]
    async fn banner_detail_and_missing_banner() {
        let state = seeded_state().await;
        let summary = get_banner(&state, PLAYER, "b2").await.expect("b2");
        assert_eq!(summary.stats.total_pulls, 2);
        assert_eq!(summary.stats.lose_count, 1);
        assert_eq!(summary.five_stars[0].pity_count, 2);
        assert_eq!(summary.five_stars[0].carried_in(), 1);
        assert_eq!(summary.carry_over_pity, 1);
        assert!(!summary.active);

        assert!(matches!(
            get_banner(&state, PLAYER, "nope").await,
            Err(AppError::NotFound(_))
        ));
    }
}
