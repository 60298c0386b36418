//! Artist pages

use std::fmt::Write;

use super::venues::{link, plural};
use super::{Flash, escape, escape_opt, genre_tags, layout, search_results};
use crate::services::SearchResults;
use crate::services::artist_service::{ArtistDetail, ArtistShow, ArtistSummary};

pub fn artists_page(artists: &[ArtistSummary], flash: Option<&Flash>) -> String {
    let mut items = String::new();
    for artist in artists {
        let _ = write!(
            items,
            r#"<li><a href="/artists/{}"><h5>{}</h5></a></li>"#,
            artist.id,
            escape(&artist.name)
        );
    }

    let body = if artists.is_empty() {
        r#"<h1>Artists</h1><p class="empty">No artists listed yet.</p>"#.to_string()
    } else {
        format!(r#"<h1>Artists</h1><ul class="items">{items}</ul>"#)
    };
    layout("Artists", flash, &body)
}

pub fn artist_search_page(term: &str, results: &SearchResults) -> String {
    layout("Artist Search", None, &search_results("artists", term, results))
}

pub fn artist_detail_page(artist: &ArtistDetail, flash: Option<&Flash>) -> String {
    let seeking = if artist.seeking_venue {
        format!(
            r#"<div class="seeking"><p><strong>Currently seeking performance venues</strong></p><p>{}</p></div>"#,
            escape_opt(artist.seeking_description.as_deref())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking performance venues</p>"#.to_string()
    };

    let image = artist
        .image_link
        .as_deref()
        .map(|src| format!(r#"<img src="{}" alt="Artist image">"#, escape(src)))
        .unwrap_or_default();

    let body = format!(
        r#"<div class="detail">
    <h1 class="monospace">{name}</h1>
    <p class="subtitle">ID: {id}</p>
    <div class="genres">{genres}</div>
    <p>{city}, {state}</p>
    <p>{phone}</p>
    <p>{website}</p>
    <p>{facebook}</p>
    {seeking}
    {image}
    <p><a href="/artists/{id}/edit" class="btn">Edit</a></p>
</div>
<section>
    <h2 class="monospace">{upcoming_count} Upcoming {upcoming_noun}</h2>
    <div class="shows">{upcoming}</div>
</section>
<section>
    <h2 class="monospace">{past_count} Past {past_noun}</h2>
    <div class="shows">{past}</div>
</section>"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape_opt(artist.phone.as_deref()),
        website = link(artist.website.as_deref()),
        facebook = link(artist.facebook_link.as_deref()),
        upcoming_count = artist.upcoming_shows_count,
        upcoming_noun = plural(artist.upcoming_shows_count),
        upcoming = show_cards(&artist.upcoming_shows),
        past_count = artist.past_shows_count,
        past_noun = plural(artist.past_shows_count),
        past = show_cards(&artist.past_shows),
    );

    layout(&artist.name, flash, &body)
}

fn show_cards(shows: &[ArtistShow]) -> String {
    let mut cards = String::new();
    for show in shows {
        let _ = write!(
            cards,
            r#"<div class="tile"><img src="{}" alt="Venue image"><h5><a href="/venues/{}">{}</a></h5><h6>{}</h6></div>"#,
            escape_opt(show.venue_image_link.as_deref()),
            show.venue_id,
            escape(&show.venue_name),
            escape(&show.start_time),
        );
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> ArtistDetail {
        ArtistDetail {
            id: 5,
            name: "Matt Quevedo".to_string(),
            genres: vec!["Jazz".to_string()],
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: Some("300-400-5000".to_string()),
            website: None,
            facebook_link: None,
            seeking_venue: false,
            seeking_description: None,
            image_link: None,
            past_shows: vec![ArtistShow {
                venue_id: 3,
                venue_name: "Park Square Live Music & Coffee".to_string(),
                venue_image_link: None,
                start_time: "Wednesday June, 15, 2019 at 11:00PM".to_string(),
            }],
            upcoming_shows: Vec::new(),
            past_shows_count: 1,
            upcoming_shows_count: 0,
        }
    }

    #[test]
    fn test_detail_page_lists_shows() {
        let page = artist_detail_page(&detail(), None);
        assert!(page.contains("1 Past Show<"));
        assert!(page.contains("0 Upcoming Shows"));
        assert!(page.contains(r#"href="/venues/3""#));
        assert!(page.contains("Not currently seeking performance venues"));
    }

    #[test]
    fn test_empty_listing() {
        let page = artists_page(&[], None);
        assert!(page.contains("No artists listed yet."));
    }
}
