//! Show listing page

use std::fmt::Write;

use super::{Flash, escape, escape_opt, layout};
use crate::services::show_service::ShowView;

pub fn shows_page(shows: &[ShowView], flash: Option<&Flash>) -> String {
    let mut body = String::from(r#"<h1>Shows</h1><div class="shows">"#);
    if shows.is_empty() {
        body.push_str(r#"<p class="empty">No shows booked yet.</p>"#);
    }

    for show in shows {
        let _ = write!(
            body,
            r#"<div class="tile">
    <img src="{}" alt="Artist image">
    <h4>{}</h4>
    <h5><a href="/artists/{}">{}</a></h5>
    <p>playing at</p>
    <h5><a href="/venues/{}">{}</a></h5>
</div>"#,
            escape_opt(show.artist_image_link.as_deref()),
            escape(&show.start_time),
            show.artist_id,
            escape(&show.artist_name),
            show.venue_id,
            escape(&show.venue_name),
        );
    }
    body.push_str("</div>");

    layout("Shows", flash, &body)
}
