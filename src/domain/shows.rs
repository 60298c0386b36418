//! Past/upcoming classification of shows.
//!
//! Both comparisons are strict: a show starting exactly at `now` is neither
//! past nor upcoming and is left out of both buckets and both counts.

use chrono::NaiveDateTime;

/// Where a show sits relative to the evaluation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Past,
    Upcoming,
    /// Starts exactly at the evaluation time
    Now,
}

impl ShowTiming {
    pub fn classify(now: NaiveDateTime, start_time: NaiveDateTime) -> Self {
        if start_time < now {
            ShowTiming::Past
        } else if start_time > now {
            ShowTiming::Upcoming
        } else {
            ShowTiming::Now
        }
    }
}

/// Shows split into the two buckets, each in input order
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedShows<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> PartitionedShows<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    /// Convert every entry, keeping the bucket it landed in
    pub fn map<U, F>(self, mut f: F) -> PartitionedShows<U>
    where
        F: FnMut(T) -> U,
    {
        PartitionedShows {
            past: self.past.into_iter().map(&mut f).collect(),
            upcoming: self.upcoming.into_iter().map(&mut f).collect(),
        }
    }
}

/// Single pass over `shows`, sorting each into past or upcoming
pub fn partition_shows<T, F>(now: NaiveDateTime, shows: Vec<T>, start_time: F) -> PartitionedShows<T>
where
    F: Fn(&T) -> NaiveDateTime,
{
    let mut past = Vec::new();
    let mut upcoming = Vec::new();

    for show in shows {
        match ShowTiming::classify(now, start_time(&show)) {
            ShowTiming::Past => past.push(show),
            ShowTiming::Upcoming => upcoming.push(show),
            ShowTiming::Now => {}
        }
    }

    PartitionedShows { past, upcoming }
}

/// Number of start times strictly after `now`
pub fn count_upcoming<'a, I>(now: NaiveDateTime, start_times: I) -> usize
where
    I: IntoIterator<Item = &'a NaiveDateTime>,
{
    start_times
        .into_iter()
        .filter(|start| ShowTiming::classify(now, **start) == ShowTiming::Upcoming)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_classify_strict_both_sides() {
        let now = at(2030, 6, 1, 20);
        assert_eq!(ShowTiming::classify(now, now - Duration::seconds(1)), ShowTiming::Past);
        assert_eq!(ShowTiming::classify(now, now + Duration::seconds(1)), ShowTiming::Upcoming);
        assert_eq!(ShowTiming::classify(now, now), ShowTiming::Now);
    }

    #[test]
    fn test_partition_keeps_input_order() {
        let now = at(2030, 6, 1, 20);
        let shows = vec![
            ("a", at(2029, 1, 1, 20)),
            ("b", at(2031, 1, 1, 20)),
            ("c", at(2030, 1, 1, 20)),
            ("d", at(2032, 1, 1, 20)),
        ];

        let result = partition_shows(now, shows, |s| s.1);
        let past: Vec<&str> = result.past.iter().map(|s| s.0).collect();
        let upcoming: Vec<&str> = result.upcoming.iter().map(|s| s.0).collect();

        assert_eq!(past, vec!["a", "c"]);
        assert_eq!(upcoming, vec!["b", "d"]);
        assert_eq!(result.past_count(), 2);
        assert_eq!(result.upcoming_count(), 2);
    }

    #[test]
    fn test_show_at_now_is_in_neither_bucket() {
        let now = at(2030, 6, 1, 20);
        let shows = vec![now, now - Duration::hours(1), now + Duration::hours(1)];

        let result = partition_shows(now, shows, |s| *s);
        assert_eq!(result.past, vec![now - Duration::hours(1)]);
        assert_eq!(result.upcoming, vec![now + Duration::hours(1)]);
        assert!(!result.past.contains(&now));
        assert!(!result.upcoming.contains(&now));
    }

    #[test]
    fn test_partition_empty() {
        let result = partition_shows(at(2030, 1, 1, 0), Vec::<NaiveDateTime>::new(), |s| *s);
        assert_eq!(result.past_count(), 0);
        assert_eq!(result.upcoming_count(), 0);
    }

    #[test]
    fn test_count_upcoming_matches_partition() {
        let now = at(2030, 6, 1, 20);
        let times = vec![
            now,
            now + Duration::minutes(5),
            now - Duration::minutes(5),
            now + Duration::days(30),
        ];

        let partitioned = partition_shows(now, times.clone(), |s| *s);
        assert_eq!(count_upcoming(now, &times), 2);
        assert_eq!(count_upcoming(now, &times), partitioned.upcoming_count());
    }

    #[test]
    fn test_map_keeps_buckets() {
        let now = at(2030, 6, 1, 20);
        let result = partition_shows(now, vec![at(2029, 1, 1, 0), at(2031, 1, 1, 0)], |s| *s)
            .map(|s| s.format("%Y").to_string());

        assert_eq!(result.past, vec!["2029".to_string()]);
        assert_eq!(result.upcoming, vec!["2031".to_string()]);
    }
}
