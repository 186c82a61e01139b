use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::entities::BannerDefinition;
use crate::services::BannerCatalog;
use crate::value_objects::{BannerId, Category, PullId};

/// Result of a lookup, with every other banner whose window also matched.
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    pub banner: Option<&'a Arc<BannerDefinition>>,
    pub also_matched: Vec<&'a Arc<BannerDefinition>>,
}

impl Resolution<'_> {
    pub fn is_ambiguous(&self) -> bool {
        !self.also_matched.is_empty()
    }
}

/// Data-quality warning: a pull fell inside more than one window of its
/// category. The first banner in catalog order was used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmbiguousBannerWindow {
    pub pull_id: PullId,
    pub category: Category,
    pub chosen: BannerId,
    pub also_matched: Vec<BannerId>,
}

/// Category-indexed view over a catalog.
#[derive(Debug)]
pub struct BannerResolver<'a> {
    by_category: HashMap<Category, Vec<&'a Arc<BannerDefinition>>>,
}

impl<'a> BannerResolver<'a> {
    pub fn new(catalog: &'a BannerCatalog) -> Self {
        let mut by_category: HashMap<Category, Vec<&'a Arc<BannerDefinition>>> = HashMap::new();
        for banner in catalog.definitions() {
            by_category.entry(banner.category).or_default().push(banner);
        }
        Self { by_category }
    }

    pub fn resolve(&self, category: Category, time: NaiveDateTime) -> Option<&'a Arc<BannerDefinition>> {
        self.candidates(category)
            .iter()
            .copied()
            .find(|banner| banner.contains(time))
    }

    pub fn resolve_detailed(&self, category: Category, time: NaiveDateTime) -> Resolution<'a> {
        let mut matches = self
            .candidates(category)
            .iter()
            .copied()
            .filter(|banner| banner.contains(time));
        let banner = matches.next();
        Resolution {
            banner,
            also_matched: matches.collect(),
        }
    }

    fn candidates(&self, category: Category) -> &[&'a Arc<BannerDefinition>] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub fn resolve(
    catalog: &BannerCatalog,
    category: Category,
    time: NaiveDateTime,
) -> Option<Arc<BannerDefinition>> {
    BannerResolver::new(catalog).resolve(category, time).cloned()
}
