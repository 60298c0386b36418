//! Services Layer
//!
//! Aggregation over repository data: listings, searches and detail views with
//! their past/upcoming show splits. Results are plain view models that the
//! HTML pages and the JSON API both render.

pub mod artist_service;
pub mod show_service;
pub mod venue_service;

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ScheduleEntry, count_upcoming};

/// One row of a name search
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Search response: matching records and how many there are
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl SearchResults {
    fn new(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Upcoming-show count per owner id; owners without shows are absent
pub(crate) fn upcoming_counts(now: NaiveDateTime, schedule: &[ScheduleEntry]) -> HashMap<i32, usize> {
    let mut by_owner: HashMap<i32, Vec<NaiveDateTime>> = HashMap::new();
    for entry in schedule {
        by_owner.entry(entry.owner_id).or_default().push(entry.start_time);
    }

    by_owner
        .into_iter()
        .map(|(owner_id, times)| (owner_id, count_upcoming(now, &times)))
        .collect()
}
