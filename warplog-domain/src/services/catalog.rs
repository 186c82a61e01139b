use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::entities::{BannerDefinition, BannerOverlap, CatalogDiagnostics};
use crate::value_objects::{BannerId, Category};

/// Ordered banner table. Catalog order is significant: it breaks ties when
/// windows overlap.
#[derive(Debug, Clone, Default)]
pub struct BannerCatalog {
    definitions: Vec<Arc<BannerDefinition>>,
    revision: Option<String>,
}

impl BannerCatalog {
    pub fn new(definitions: Vec<BannerDefinition>) -> Self {
        Self {
            definitions: definitions.into_iter().map(Arc::new).collect(),
            revision: None,
        }
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    pub fn definitions(&self) -> &[Arc<BannerDefinition>] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn get(&self, banner_id: &BannerId) -> Option<&Arc<BannerDefinition>> {
        self.definitions
            .iter()
            .find(|banner| &banner.banner_id == banner_id)
    }

    pub fn for_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &Arc<BannerDefinition>> + '_ {
        self.definitions
            .iter()
            .filter(move |banner| banner.category == category)
    }

    pub fn active_at(&self, now: NaiveDateTime) -> Vec<Arc<BannerDefinition>> {
        self.definitions
            .iter()
            .filter(|banner| banner.is_active_at(now))
            .cloned()
            .collect()
    }

    pub fn diagnostics(&self) -> CatalogDiagnostics {
        CatalogDiagnostics {
            revision: self.revision.clone(),
            banners: self.len(),
            overlaps: self.overlaps(),
        }
    }

    /// Pairs of same-category banners whose windows intersect, in catalog order.
    pub fn overlaps(&self) -> Vec<BannerOverlap> {
        let mut overlaps = Vec::new();
        for (index, first) in self.definitions.iter().enumerate() {
            for second in &self.definitions[index + 1..] {
                if first.overlaps(second) {
                    overlaps.push(BannerOverlap {
                        category: first.category.to_string(),
                        first: first.banner_id.to_string(),
                        second: second.banner_id.to_string(),
                    });
                }
            }
        }
        overlaps
    }
}
