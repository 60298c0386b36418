//! Venue, artist and show forms

use std::fmt::Write;

use super::{Flash, escape, layout};
use crate::domain::{Artist, Venue};
use crate::forms::choices::{GENRES, STATES};
use crate::forms::{FormData, parse_flag};

/// Which record a profile form edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Venue,
    Artist,
}

impl ProfileKind {
    fn label(self) -> &'static str {
        match self {
            ProfileKind::Venue => "Venue",
            ProfileKind::Artist => "Artist",
        }
    }

    fn seeking_field(self) -> &'static str {
        match self {
            ProfileKind::Venue => "seeking_talent",
            ProfileKind::Artist => "seeking_venue",
        }
    }

    fn seeking_label(self) -> &'static str {
        match self {
            ProfileKind::Venue => "Looking for talent",
            ProfileKind::Artist => "Looking for venues",
        }
    }
}

/// Values pre-filled into a venue or artist form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileValues {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking: bool,
    pub seeking_description: String,
}

impl ProfileValues {
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            genres: venue.genres.clone(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            seeking: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            address: String::new(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            seeking: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    /// What the user just submitted, for re-rendering a rejected edit
    pub fn from_form(form: &FormData, kind: ProfileKind) -> Self {
        let text = |field: &str| form.value(field).unwrap_or_default().to_string();
        Self {
            name: text("name"),
            city: text("city"),
            state: text("state"),
            address: text("address"),
            phone: text("phone"),
            genres: form.values("genres"),
            image_link: text("image_link"),
            facebook_link: text("facebook_link"),
            website_link: text("website_link"),
            seeking: form.value(kind.seeking_field()).is_some_and(parse_flag),
            seeking_description: text("seeking_description"),
        }
    }
}

/// Form that lists a new venue or artist
pub fn new_profile_page(kind: ProfileKind, flash: Option<&Flash>) -> String {
    let title = format!("New {}", kind.label());
    let action = match kind {
        ProfileKind::Venue => "/venues/create".to_string(),
        ProfileKind::Artist => "/artists/create".to_string(),
    };
    let body = profile_form(
        kind,
        &format!("List a new {}", kind.label().to_lowercase()),
        &action,
        &ProfileValues::default(),
        &format!("Create {}", kind.label()),
    );
    layout(&title, flash, &body)
}

/// Form that edits an existing venue or artist
pub fn edit_profile_page(
    kind: ProfileKind,
    id: i32,
    values: &ProfileValues,
    flash: Option<&Flash>,
) -> String {
    let action = match kind {
        ProfileKind::Venue => format!("/venues/{id}/edit"),
        ProfileKind::Artist => format!("/artists/{id}/edit"),
    };
    let heading = format!("Edit {} <em>{}</em>", kind.label().to_lowercase(), escape(&values.name));
    let body = profile_form(kind, &heading, &action, values, "Save changes");
    layout(&format!("Edit {}", kind.label()), flash, &body)
}

fn profile_form(
    kind: ProfileKind,
    heading: &str,
    action: &str,
    values: &ProfileValues,
    submit: &str,
) -> String {
    let mut fields = String::new();
    fields.push_str(&text_input("name", "Name", &values.name, true));
    fields.push_str(&text_input("city", "City", &values.city, true));
    fields.push_str(&state_select(&values.state));
    if kind == ProfileKind::Venue {
        fields.push_str(&text_input("address", "Address", &values.address, true));
    }
    fields.push_str(&text_input("phone", "Phone", &values.phone, false));
    fields.push_str(&genre_select(&values.genres));
    fields.push_str(&text_input("image_link", "Image link", &values.image_link, false));
    fields.push_str(&text_input("facebook_link", "Facebook link", &values.facebook_link, false));
    fields.push_str(&text_input("website_link", "Website link", &values.website_link, false));
    fields.push_str(&seeking_checkbox(kind.seeking_field(), kind.seeking_label(), values.seeking));
    fields.push_str(&text_input(
        "seeking_description",
        "Seeking description",
        &values.seeking_description,
        false,
    ));

    format!(
        r#"<div class="form-wrapper">
<form method="post" action="{action}" class="form">
    <h3 class="form-heading">{heading}</h3>
    {fields}
    <input type="submit" value="{submit}" class="btn btn-primary">
</form>
</div>"#
    )
}

/// Form that books a show
pub fn new_show_page(
    artists: &[(i32, String)],
    venues: &[(i32, String)],
    default_start: &str,
    flash: Option<&Flash>,
) -> String {
    let body = format!(
        r#"<div class="form-wrapper">
<form method="post" action="/shows/create" class="form">
    <h3 class="form-heading">List a new show</h3>
    {}
    {}
    <div class="form-group">
        <label for="start_time">Start time</label>
        <input id="start_time" name="start_time" type="text" required value="{}" placeholder="YYYY-MM-DD HH:MM">
    </div>
    <input type="submit" value="Create Show" class="btn btn-primary">
</form>
</div>"#,
        id_select("artist_id", "Artist", artists),
        id_select("venue_id", "Venue", venues),
        escape(default_start),
    );
    layout("New Show", flash, &body)
}

fn text_input(name: &str, label: &str, value: &str, required: bool) -> String {
    let required = if required { " required" } else { "" };
    format!(
        r#"<div class="form-group">
        <label for="{name}">{label}</label>
        <input id="{name}" name="{name}" type="text" value="{}"{required}>
    </div>"#,
        escape(value)
    )
}

fn state_select(selected: &str) -> String {
    let mut options = String::from(r#"<option value="">--</option>"#);
    for state in STATES {
        let mark = if *state == selected { " selected" } else { "" };
        let _ = write!(options, r#"<option value="{state}"{mark}>{state}</option>"#);
    }
    format!(
        r#"<div class="form-group">
        <label for="state">State</label>
        <select id="state" name="state" required>{options}</select>
    </div>"#
    )
}

fn genre_select(selected: &[String]) -> String {
    let mut options = String::new();
    for genre in GENRES {
        let mark = if selected.iter().any(|g| g == genre) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            options,
            r#"<option value="{}"{mark}>{}</option>"#,
            escape(genre),
            escape(genre)
        );
    }
    format!(
        r#"<div class="form-group">
        <label for="genres">Genres</label>
        <small>Ctrl+Click to select multiple</small>
        <select id="genres" name="genres" multiple required>{options}</select>
    </div>"#
    )
}

// Unchecked boxes are not submitted, so a hidden "n" goes first and the box
// overrides it when ticked.
fn seeking_checkbox(name: &str, label: &str, checked: bool) -> String {
    let checked = if checked { " checked" } else { "" };
    format!(
        r#"<div class="form-group">
        <input type="hidden" name="{name}" value="n">
        <label><input type="checkbox" name="{name}" value="y"{checked}> {label}</label>
    </div>"#
    )
}

fn id_select(name: &str, label: &str, choices: &[(i32, String)]) -> String {
    let mut options = String::from(r#"<option value="">--</option>"#);
    for (id, text) in choices {
        let _ = write!(options, r#"<option value="{id}">{}</option>"#, escape(text));
    }
    format!(
        r#"<div class="form-group">
        <label for="{name}">{label}</label>
        <select id="{name}" name="{name}" required>{options}</select>
    </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_form_prefills_and_escapes() {
        let values = ProfileValues {
            name: "Dueling \"Pianos\" Bar".to_string(),
            state: "NY".to_string(),
            genres: vec!["Jazz".to_string(), "Blues".to_string()],
            seeking: true,
            ..Default::default()
        };
        let page = edit_profile_page(ProfileKind::Venue, 7, &values, None);

        assert!(page.contains(r#"action="/venues/7/edit""#));
        assert!(page.contains("Dueling &quot;Pianos&quot; Bar"));
        assert!(page.contains(r#"<option value="NY" selected>NY</option>"#));
        assert!(page.contains(r#"<option value="Jazz" selected>Jazz</option>"#));
        assert!(page.contains(r#"<option value="Folk">Folk</option>"#));
        assert!(page.contains(r#"name="seeking_talent" value="y" checked"#));
    }

    #[test]
    fn test_hidden_flag_precedes_checkbox() {
        let html = seeking_checkbox("seeking_venue", "Looking for venues", false);
        let hidden = html.find(r#"type="hidden""#).unwrap();
        let checkbox = html.find(r#"type="checkbox""#).unwrap();
        assert!(hidden < checkbox);
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_artist_form_has_no_address() {
        let page = new_profile_page(ProfileKind::Artist, None);
        assert!(page.contains(r#"action="/artists/create""#));
        assert!(!page.contains(r#"name="address""#));
        assert!(page.contains(r#"name="seeking_venue""#));
    }

    #[test]
    fn test_values_from_rejected_submission() {
        let form: FormData = vec![
            ("name", "The Musical Hop"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("seeking_talent", "n"),
            ("seeking_talent", "y"),
        ]
        .into_iter()
        .collect();

        let values = ProfileValues::from_form(&form, ProfileKind::Venue);
        assert_eq!(values.name, "The Musical Hop");
        assert_eq!(values.genres, vec!["Jazz", "Reggae"]);
        assert!(values.seeking);
    }
}
