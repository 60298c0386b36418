//! HTML rendering.
//!
//! Pages are built with `format!` over typed view models. Every value that
//! came from a user or the database goes through [`escape`] first.

pub mod artists;
pub mod forms;
pub mod shows;
pub mod venues;

use std::fmt::Write;

/// Outcome line shown at the top of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    fn render(&self) -> String {
        let class = match self.kind {
            FlashKind::Success => "alert alert-success",
            FlashKind::Error => "alert alert-danger",
        };
        format!(
            r#"<div class="{class}" role="alert">{}</div>"#,
            escape(&self.message)
        )
    }
}

/// Escape text for use in element content and quoted attributes
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped optional value, empty when absent
pub(crate) fn escape_opt(raw: Option<&str>) -> String {
    raw.map(escape).unwrap_or_default()
}

/// Wrap a page body in the shared document shell
pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash = flash.map(Flash::render).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
    <nav class="navbar">
        <a class="brand" href="/">🔥 Fyyur</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <form class="search" method="post" action="/venues/search">
            <input name="search_term" type="search" placeholder="Find a venue" aria-label="Search venues">
        </form>
        <form class="search" method="post" action="/artists/search">
            <input name="search_term" type="search" placeholder="Find an artist" aria-label="Search artists">
        </form>
    </nav>
    <main class="container">
        {flash}
        {body}
    </main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn home_page(flash: Option<&Flash>) -> String {
    let body = r#"<section class="home">
    <h1>Fyyur</h1>
    <p class="lead">Find your next venue, book your next artist.</p>
    <ul class="actions">
        <li><a href="/venues/create">Post a venue</a></li>
        <li><a href="/artists/create">Post an artist</a></li>
        <li><a href="/shows/create">Post a show</a></li>
    </ul>
</section>"#;
    layout("Home", flash, body)
}

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        None,
        r#"<h1>404</h1><p>Not Found</p><p><a href="/">Back home</a></p>"#,
    )
}

pub fn server_error_page() -> String {
    layout(
        "Server Error",
        None,
        r#"<h1>500</h1><p>Something went wrong on our side.</p><p><a href="/">Back home</a></p>"#,
    )
}

/// Shared search results block for venues and artists
pub(crate) fn search_results(
    base: &str,
    term: &str,
    results: &crate::services::SearchResults,
) -> String {
    let mut items = String::new();
    for hit in &results.data {
        let _ = write!(
            items,
            r#"<li><a href="/{base}/{}">{}</a> <span class="count">{} upcoming</span></li>"#,
            hit.id,
            escape(&hit.name),
            hit.num_upcoming_shows,
        );
    }

    format!(
        r#"<h3>Number of search results for "{}": {}</h3>
<ul class="results">{items}</ul>"#,
        escape(term),
        results.count,
    )
}

/// Genre tags on a detail page
pub(crate) fn genre_tags(genres: &[String]) -> String {
    genres
        .iter()
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_flash_is_escaped() {
        let page = home_page(Some(&Flash::success("Venue <b>X</b> was successfully listed!")));
        assert!(page.contains("alert-success"));
        assert!(page.contains("Venue &lt;b&gt;X&lt;/b&gt; was successfully listed!"));
        assert!(!page.contains("<b>X</b>"));
    }

    #[test]
    fn test_layout_without_flash() {
        let page = layout("Venues", None, "<p>body</p>");
        assert!(page.contains("<title>Venues | Fyyur</title>"));
        assert!(!page.contains("alert"));
        assert!(page.contains("<p>body</p>"));
    }
}
