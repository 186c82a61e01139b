// Classified pull
// A pull with its resolved banner and WIN/LOSE outcome. Derived, never stored.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::entities::{BannerDefinition, PullRecord};
use crate::value_objects::{BannerId, Category, Outcome, PullId, Rarity};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedPull {
    #[serde(flatten)]
    pub pull: PullRecord,
    pub outcome: Outcome,
    #[serde(serialize_with = "serialize_banner_ref")]
    pub resolved_banner: Option<Arc<BannerDefinition>>,
}

impl ClassifiedPull {
    pub fn id(&self) -> PullId {
        self.pull.id
    }

    pub fn category(&self) -> Category {
        self.pull.category
    }

    pub fn rarity(&self) -> Rarity {
        self.pull.rarity
    }

    pub fn time(&self) -> NaiveDateTime {
        self.pull.time
    }

    pub fn is_top_rarity(&self) -> bool {
        self.pull.is_top_rarity()
    }
}

#[derive(Serialize)]
struct BannerRef<'a> {
    banner_id: &'a BannerId,
    name: &'a str,
}

fn serialize_banner_ref<S>(
    banner: &Option<Arc<BannerDefinition>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    banner
        .as_deref()
        .map(|banner| BannerRef {
            banner_id: &banner.banner_id,
            name: &banner.name,
        })
        .serialize(serializer)
}
