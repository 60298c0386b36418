//! Form intake: urlencoded name/value pairs to typed, validated inputs.
//!
//! Browsers send multi-selects as repeated keys and omit unchecked boxes, so
//! submissions arrive as an ordered list of pairs instead of a flat struct.

pub mod artist;
pub mod choices;
pub mod show;
pub mod venue;

use thiserror::Error;
use url::Url;

pub use artist::{parse_artist_patch, parse_new_artist};
pub use show::parse_new_show;
pub use venue::{parse_new_venue, parse_venue_patch};

/// A single field problem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field}: {message}")]
    Invalid { field: &'static str, message: String },
}

impl FormError {
    pub fn field(&self) -> &'static str {
        match self {
            FormError::Missing { field } | FormError::Invalid { field, .. } => field,
        }
    }

    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        FormError::Invalid {
            field,
            message: message.into(),
        }
    }
}

/// Every problem found in one submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<FormError>);

impl ValidationErrors {
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(FormError::field).collect()
    }
}

fn join_messages(errors: &[FormError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Submitted name/value pairs in the order the browser sent them
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Whether the field was submitted at all
    pub fn has(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    /// Last submitted value, trimmed
    pub fn value(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.trim())
    }

    /// Every non-empty value submitted under `name`
    pub fn values(&self, name: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, v)| k == name && !v.trim().is_empty())
            .map(|(_, v)| v.trim().to_string())
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Field set shared by venue and artist listings
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Profile {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking: bool,
    pub seeking_description: Option<String>,
}

/// Partial [`Profile`]; `None` means the field was not submitted
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ProfilePatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub website_link: Option<Option<String>>,
    pub seeking: Option<bool>,
    pub seeking_description: Option<Option<String>>,
}

pub(crate) fn parse_profile(
    form: &FormData,
    seeking_field: &'static str,
    errors: &mut Vec<FormError>,
) -> Option<Profile> {
    let name = required_text(form, "name", errors);
    let city = required_text(form, "city", errors);
    let state = required_text(form, "state", errors).and_then(|s| check_state(s, errors));
    let phone = optional_text(form, "phone").and_then(|p| check_phone(p, errors));
    let genres = check_genres(form.values("genres"), errors);
    let image_link = optional_url(form, "image_link", errors);
    let facebook_link = optional_url(form, "facebook_link", errors);
    let website_link = optional_url(form, "website_link", errors);
    let seeking = form.value(seeking_field).map(parse_flag).unwrap_or(false);
    let seeking_description = optional_text(form, "seeking_description");

    Some(Profile {
        name: name?,
        city: city?,
        state: state?,
        phone,
        genres: genres?,
        image_link: image_link?,
        facebook_link: facebook_link?,
        website_link: website_link?,
        seeking,
        seeking_description,
    })
}

pub(crate) fn parse_profile_patch(
    form: &FormData,
    seeking_field: &'static str,
    errors: &mut Vec<FormError>,
) -> ProfilePatch {
    let mut patch = ProfilePatch::default();

    if form.has("name") {
        patch.name = required_text(form, "name", errors);
    }
    if form.has("city") {
        patch.city = required_text(form, "city", errors);
    }
    if form.has("state") {
        patch.state = required_text(form, "state", errors).and_then(|s| check_state(s, errors));
    }
    if form.has("phone") {
        patch.phone = match optional_text(form, "phone") {
            Some(phone) => check_phone(phone, errors).map(Some),
            None => Some(None),
        };
    }
    if form.has("genres") {
        patch.genres = check_genres(form.values("genres"), errors);
    }
    if form.has("image_link") {
        patch.image_link = optional_url(form, "image_link", errors);
    }
    if form.has("facebook_link") {
        patch.facebook_link = optional_url(form, "facebook_link", errors);
    }
    if form.has("website_link") {
        patch.website_link = optional_url(form, "website_link", errors);
    }
    patch.seeking = form.value(seeking_field).map(parse_flag);
    if form.has("seeking_description") {
        patch.seeking_description = Some(optional_text(form, "seeking_description"));
    }

    patch
}

/// Trimmed, non-empty text or a `Missing` error
pub(crate) fn required_text(
    form: &FormData,
    field: &'static str,
    errors: &mut Vec<FormError>,
) -> Option<String> {
    match form.value(field) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            errors.push(FormError::Missing { field });
            None
        }
    }
}

/// Trimmed text, empty counts as absent
pub(crate) fn optional_text(form: &FormData, field: &'static str) -> Option<String> {
    form.value(field)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `Some(None)` for an empty value, `None` when the URL is invalid
fn optional_url(
    form: &FormData,
    field: &'static str,
    errors: &mut Vec<FormError>,
) -> Option<Option<String>> {
    match optional_text(form, field) {
        None => Some(None),
        Some(raw) => match validate_url(&raw) {
            Ok(()) => Some(Some(raw)),
            Err(reason) => {
                errors.push(FormError::invalid(field, reason));
                None
            }
        },
    }
}

pub(crate) fn validate_url(raw: &str) -> Result<(), String> {
    match Url::parse(raw) {
        Ok(url) => match url.scheme() {
            "http" | "https" if url.host_str().is_some() => Ok(()),
            "http" | "https" => Err("URL has no host".to_string()),
            scheme => Err(format!("Unsupported URL scheme: {}", scheme)),
        },
        Err(e) => Err(format!("Invalid URL format: {}", e)),
    }
}

fn check_state(state: String, errors: &mut Vec<FormError>) -> Option<String> {
    let upper = state.to_ascii_uppercase();
    if choices::is_state(&upper) {
        Some(upper)
    } else {
        errors.push(FormError::invalid("state", format!("Unknown state '{}'", state)));
        None
    }
}

/// Ten digits once common separators are stripped
fn check_phone(phone: String, errors: &mut Vec<FormError>) -> Option<String> {
    let mut digits = 0;
    for c in phone.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => {
                errors.push(FormError::invalid("phone", "Phone may only contain digits and separators"));
                return None;
            }
        }
    }

    if digits == 10 {
        Some(phone)
    } else {
        errors.push(FormError::invalid("phone", "Phone must have 10 digits"));
        None
    }
}

fn check_genres(genres: Vec<String>, errors: &mut Vec<FormError>) -> Option<Vec<String>> {
    if genres.is_empty() {
        errors.push(FormError::Missing { field: "genres" });
        return None;
    }

    let unknown: Vec<&str> = genres
        .iter()
        .map(String::as_str)
        .filter(|g| !choices::is_genre(g))
        .collect();
    if !unknown.is_empty() {
        errors.push(FormError::invalid(
            "genres",
            format!("Unknown genre(s): {}", unknown.join(", ")),
        ));
        return None;
    }

    let mut unique = Vec::with_capacity(genres.len());
    for genre in genres {
        if !unique.contains(&genre) {
            unique.push(genre);
        }
    }
    Some(unique)
}

/// Checkbox semantics: `y`, `on`, `true`, `1` are true
pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "y" | "on" | "true" | "1")
}

pub(crate) fn finish<T>(value: Option<T>, errors: Vec<FormError>) -> Result<T, ValidationErrors> {
    match value {
        Some(v) if errors.is_empty() => Ok(v),
        _ => Err(ValidationErrors(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormData {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_form_data_last_value_wins() {
        let data = form(&[("seeking_talent", "n"), ("seeking_talent", "y")]);
        assert_eq!(data.value("seeking_talent"), Some("y"));
        assert!(data.has("seeking_talent"));
        assert!(!data.has("name"));
    }

    #[test]
    fn test_form_data_values_skip_blanks() {
        let data = form(&[("genres", "Jazz"), ("genres", " "), ("genres", "Blues")]);
        assert_eq!(data.values("genres"), vec!["Jazz", "Blues"]);
    }

    #[test]
    fn test_parse_flag() {
        for v in ["y", "Y", "on", "true", "1"] {
            assert!(parse_flag(v), "{v}");
        }
        for v in ["n", "off", "false", "0", "", "yes"] {
            assert!(!parse_flag(v), "{v}");
        }
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://www.facebook.com/thebluenote").is_ok());
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("www.example.com").is_err());
        assert!(validate_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_phone_rules() {
        let mut errors = Vec::new();
        assert_eq!(
            check_phone("415-555-0199".to_string(), &mut errors),
            Some("415-555-0199".to_string())
        );
        assert_eq!(
            check_phone("(415) 555.0199".to_string(), &mut errors),
            Some("(415) 555.0199".to_string())
        );
        assert!(errors.is_empty());

        assert_eq!(check_phone("555-0199".to_string(), &mut errors), None);
        assert_eq!(check_phone("415-555-01a9".to_string(), &mut errors), None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_genres_deduplicated_and_checked() {
        let mut errors = Vec::new();
        let genres = check_genres(
            vec!["Jazz".to_string(), "Jazz".to_string(), "Soul".to_string()],
            &mut errors,
        );
        assert_eq!(genres, Some(vec!["Jazz".to_string(), "Soul".to_string()]));

        assert_eq!(check_genres(vec!["Polka".to_string()], &mut errors), None);
        assert_eq!(check_genres(Vec::new(), &mut errors), None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_state_is_normalised() {
        let mut errors = Vec::new();
        assert_eq!(check_state("ny".to_string(), &mut errors), Some("NY".to_string()));
        assert_eq!(check_state("XX".to_string(), &mut errors), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validation_errors_display() {
        let errors = ValidationErrors(vec![
            FormError::Missing { field: "name" },
            FormError::invalid("phone", "Phone must have 10 digits"),
        ]);
        assert_eq!(
            errors.to_string(),
            "name is required; phone: Phone must have 10 digits"
        );
        assert_eq!(errors.fields(), vec!["name", "phone"]);
    }
}
