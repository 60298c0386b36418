//! Show booking submissions

use super::{FormData, FormError, ValidationErrors, finish};
use crate::domain::NewShow;
use crate::utils::time::parse_datetime;

pub fn parse_new_show(form: &FormData) -> Result<NewShow, ValidationErrors> {
    let mut errors: Vec<FormError> = Vec::new();

    let artist_id = parse_id(form, "artist_id", &mut errors);
    let venue_id = parse_id(form, "venue_id", &mut errors);
    let start_time = match form.value("start_time").filter(|v| !v.is_empty()) {
        None => {
            errors.push(FormError::Missing { field: "start_time" });
            None
        }
        Some(raw) => {
            let parsed = parse_datetime(raw);
            if parsed.is_none() {
                errors.push(FormError::invalid(
                    "start_time",
                    format!("'{}' is not a date and time (YYYY-MM-DD HH:MM:SS)", raw),
                ));
            }
            parsed
        }
    };

    let show = match (artist_id, venue_id, start_time) {
        (Some(artist_id), Some(venue_id), Some(start_time)) => Some(NewShow {
            artist_id,
            venue_id,
            start_time,
        }),
        _ => None,
    };

    finish(show, errors)
}

fn parse_id(form: &FormData, field: &'static str, errors: &mut Vec<FormError>) -> Option<i32> {
    match form.value(field).filter(|v| !v.is_empty()) {
        None => {
            errors.push(FormError::Missing { field });
            None
        }
        Some(raw) => match raw.parse::<i32>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                errors.push(FormError::invalid(field, format!("'{}' is not a valid id", raw)));
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_show() {
        let form: FormData = [
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01 20:00:00"),
        ]
        .into_iter()
        .collect();

        let show = parse_new_show(&form).unwrap();
        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(
            show.start_time,
            NaiveDate::from_ymd_opt(2035, 4, 1)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_show_field_errors() {
        let form: FormData = [("artist_id", "abc"), ("venue_id", "0"), ("start_time", "soon")]
            .into_iter()
            .collect();
        assert_eq!(
            parse_new_show(&form).unwrap_err().fields(),
            vec!["artist_id", "venue_id", "start_time"]
        );
    }

    #[test]
    fn test_show_missing_fields() {
        let errors = parse_new_show(&FormData::default()).unwrap_err();
        assert_eq!(errors.0.len(), 3);
        assert!(errors.0.iter().all(|e| matches!(e, FormError::Missing { .. })));
    }
}
