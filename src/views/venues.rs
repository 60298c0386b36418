//! Venue pages

use std::fmt::Write;

use super::{Flash, escape, escape_opt, genre_tags, layout, search_results};
use crate::services::SearchResults;
use crate::services::venue_service::{Area, VenueDetail, VenueShow};

pub fn venues_page(areas: &[Area], flash: Option<&Flash>) -> String {
    let mut body = String::from("<h1>Venues</h1>");
    if areas.is_empty() {
        body.push_str(r#"<p class="empty">No venues listed yet.</p>"#);
    }

    for area in areas {
        let _ = write!(
            body,
            r#"<h3>{}, {}</h3><ul class="items">"#,
            escape(&area.city),
            escape(&area.state)
        );
        for venue in &area.venues {
            let _ = write!(
                body,
                r#"<li><a href="/venues/{}"><h5>{}</h5></a> <span class="count">{} upcoming</span></li>"#,
                venue.id,
                escape(&venue.name),
                venue.num_upcoming_shows,
            );
        }
        body.push_str("</ul>");
    }

    layout("Venues", flash, &body)
}

pub fn venue_search_page(term: &str, results: &SearchResults) -> String {
    layout("Venue Search", None, &search_results("venues", term, results))
}

pub fn venue_detail_page(venue: &VenueDetail, flash: Option<&Flash>) -> String {
    let seeking = if venue.seeking_talent {
        format!(
            r#"<div class="seeking"><p><strong>Currently seeking talent</strong></p><p>{}</p></div>"#,
            escape_opt(venue.seeking_description.as_deref())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking talent</p>"#.to_string()
    };

    let image = venue
        .image_link
        .as_deref()
        .map(|src| format!(r#"<img src="{}" alt="Venue image">"#, escape(src)))
        .unwrap_or_default();

    let body = format!(
        r#"<div class="detail">
    <h1 class="monospace">{name}</h1>
    <p class="subtitle">ID: {id}</p>
    <div class="genres">{genres}</div>
    <p>{address}<br>{city}, {state}</p>
    <p>{phone}</p>
    <p>{website}</p>
    <p>{facebook}</p>
    {seeking}
    {image}
    <p>
        <a href="/venues/{id}/edit" class="btn">Edit</a>
        <button id="delete-venue" class="btn btn-danger" data-id="{id}">Delete</button>
    </p>
</div>
<section>
    <h2 class="monospace">{upcoming_count} Upcoming {upcoming_noun}</h2>
    <div class="shows">{upcoming}</div>
</section>
<section>
    <h2 class="monospace">{past_count} Past {past_noun}</h2>
    <div class="shows">{past}</div>
</section>
<script>
document.getElementById('delete-venue').addEventListener('click', function () {{
    fetch('/venues/' + this.dataset.id, {{ method: 'DELETE' }})
        .then(function (response) {{ window.location.href = response.url || '/'; }});
}});
</script>"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape_opt(venue.phone.as_deref()),
        website = link(venue.website.as_deref()),
        facebook = link(venue.facebook_link.as_deref()),
        upcoming_count = venue.upcoming_shows_count,
        upcoming_noun = plural(venue.upcoming_shows_count),
        upcoming = show_cards(&venue.upcoming_shows),
        past_count = venue.past_shows_count,
        past_noun = plural(venue.past_shows_count),
        past = show_cards(&venue.past_shows),
    );

    layout(&venue.name, flash, &body)
}

fn show_cards(shows: &[VenueShow]) -> String {
    let mut cards = String::new();
    for show in shows {
        let image = escape_opt(show.artist_image_link.as_deref());
        let _ = write!(
            cards,
            r#"<div class="tile"><img src="{image}" alt="Artist image"><h5><a href="/artists/{}">{}</a></h5><h6>{}</h6></div>"#,
            show.artist_id,
            escape(&show.artist_name),
            escape(&show.start_time),
        );
    }
    cards
}

pub(crate) fn link(href: Option<&str>) -> String {
    href.map(|h| {
        let h = escape(h);
        format!(r#"<a href="{h}" target="_blank">{h}</a>"#)
    })
    .unwrap_or_default()
}

pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 { "Show" } else { "Shows" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::venue_service::VenueSummary;

    #[test]
    fn test_venues_grouped_by_area() {
        let areas = vec![Area {
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            venues: vec![VenueSummary {
                id: 3,
                name: "Park Square Live Music & Coffee".to_string(),
                num_upcoming_shows: 2,
            }],
        }];
        let page = venues_page(&areas, None);

        assert!(page.contains("<h3>San Francisco, CA</h3>"));
        assert!(page.contains(r#"href="/venues/3""#));
        assert!(page.contains("Park Square Live Music &amp; Coffee"));
        assert!(page.contains("2 upcoming"));
    }

    #[test]
    fn test_search_page_reports_count() {
        let results = SearchResults {
            count: 0,
            data: Vec::new(),
        };
        let page = venue_search_page("<none>", &results);
        assert!(page.contains("Number of search results for \"&lt;none&gt;\": 0"));
    }
}
