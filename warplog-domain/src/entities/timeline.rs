// Timeline entity

use chrono::NaiveDate;
use serde::Serialize;

use crate::value_objects::{BannerId, Category};

/// Banner a day's first resolved pull went to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineBanner {
    pub banner_id: BannerId,
    pub name: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineBucket {
    pub date: NaiveDate,
    pub pulls: u32,
    pub five_stars: u32,
    pub four_stars: u32,
    pub wins: u32,
    pub losses: u32,
    pub banner: Option<TimelineBanner>,
}

impl TimelineBucket {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            pulls: 0,
            five_stars: 0,
            four_stars: 0,
            wins: 0,
            losses: 0,
            banner: None,
        }
    }
}
