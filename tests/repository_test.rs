use chrono::{Duration, NaiveDateTime};
use fyyur::db;
use fyyur::domain::{ArtistPatch, DomainError, NewArtist, NewShow, NewVenue, VenuePatch};
use fyyur::infrastructure::AppState;
use fyyur::services::{artist_service, show_service, venue_service};

// In-memory SQLite for testing
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

fn now() -> NaiveDateTime {
    fyyur::utils::time::now()
}

fn new_venue(name: &str, city: &str, state: &str) -> NewVenue {
    NewVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1 Main Street".to_string(),
        phone: None,
        genres: vec!["Jazz".to_string()],
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

fn new_artist(name: &str) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        genres: vec!["Rock n Roll".to_string()],
        image_link: None,
        facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
        website_link: None,
        seeking_venue: true,
        seeking_description: Some("Looking for shows".to_string()),
    }
}

async fn book(state: &AppState, artist_id: i32, venue_id: i32, start_time: NaiveDateTime) {
    state
        .show_repo
        .create(NewShow {
            artist_id,
            venue_id,
            start_time,
        })
        .await
        .expect("Failed to book show");
}

#[tokio::test]
async fn test_blue_note_past_and_upcoming() {
    let state = setup_test_state().await;
    let venue = state
        .venue_repo
        .create(new_venue("The Blue Note", "New York", "NY"))
        .await
        .unwrap();
    let artist = state.artist_repo.create(new_artist("Matt Quevedo")).await.unwrap();

    book(&state, artist.id, venue.id, now() - Duration::days(7)).await;
    book(&state, artist.id, venue.id, now() + Duration::days(7)).await;

    let detail = venue_service::venue_detail(
        state.venue_repo.as_ref(),
        state.show_repo.as_ref(),
        venue.id,
        now(),
    )
    .await
    .unwrap();

    assert_eq!(detail.name, "The Blue Note");
    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 1);
    assert_eq!(detail.past_shows[0].artist_name, "Matt Quevedo");

    let artist_detail = artist_service::artist_detail(
        state.artist_repo.as_ref(),
        state.show_repo.as_ref(),
        artist.id,
        now(),
    )
    .await
    .unwrap();
    assert_eq!(artist_detail.past_shows_count, 1);
    assert_eq!(artist_detail.upcoming_shows_count, 1);
    assert_eq!(artist_detail.upcoming_shows[0].venue_name, "The Blue Note");
}

#[tokio::test]
async fn test_detail_only_counts_own_shows() {
    let state = setup_test_state().await;
    let hop = state
        .venue_repo
        .create(new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let pianos = state
        .venue_repo
        .create(new_venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();
    let artist = state.artist_repo.create(new_artist("Guns N Petals")).await.unwrap();

    book(&state, artist.id, hop.id, now() + Duration::days(1)).await;
    book(&state, artist.id, pianos.id, now() + Duration::days(2)).await;
    book(&state, artist.id, pianos.id, now() + Duration::days(3)).await;

    let detail = venue_service::venue_detail(
        state.venue_repo.as_ref(),
        state.show_repo.as_ref(),
        hop.id,
        now(),
    )
    .await
    .unwrap();
    assert_eq!(detail.upcoming_shows_count, 1);
    assert_eq!(detail.past_shows_count, 0);
}

#[tokio::test]
async fn test_missing_detail_is_not_found() {
    let state = setup_test_state().await;
    let result = venue_service::venue_detail(
        state.venue_repo.as_ref(),
        state.show_repo.as_ref(),
        42,
        now(),
    )
    .await;
    assert!(matches!(result, Err(DomainError::NotFound)));
}

#[tokio::test]
async fn test_venues_grouped_by_area() {
    let state = setup_test_state().await;
    let hop = state
        .venue_repo
        .create(new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    state
        .venue_repo
        .create(new_venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();
    state
        .venue_repo
        .create(new_venue("Park Square Live Music & Coffee", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist = state.artist_repo.create(new_artist("The Wild Sax Band")).await.unwrap();
    book(&state, artist.id, hop.id, now() + Duration::days(10)).await;
    book(&state, artist.id, hop.id, now() - Duration::days(10)).await;

    let areas = venue_service::list_venues(state.venue_repo.as_ref(), state.show_repo.as_ref(), now())
        .await
        .unwrap();

    assert_eq!(areas.len(), 2);
    assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("San Francisco", "CA"));
    assert_eq!((areas[1].city.as_str(), areas[1].state.as_str()), ("New York", "NY"));

    let names: Vec<&str> = areas[0].venues.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Park Square Live Music & Coffee", "The Musical Hop"]);
    assert_eq!(areas[0].venues[0].num_upcoming_shows, 0);
    assert_eq!(areas[0].venues[1].num_upcoming_shows, 1);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let state = setup_test_state().await;
    for (name, city, st) in [
        ("The Musical Hop", "San Francisco", "CA"),
        ("The Dueling Pianos Bar", "New York", "NY"),
        ("Park Square Live Music & Coffee", "San Francisco", "CA"),
    ] {
        state.venue_repo.create(new_venue(name, city, st)).await.unwrap();
    }

    let search = |term: &'static str| {
        let state = state.clone();
        async move {
            venue_service::search_venues(
                state.venue_repo.as_ref(),
                state.show_repo.as_ref(),
                term,
                now(),
            )
            .await
            .unwrap()
        }
    };

    let music = search("MUSIC").await;
    assert_eq!(music.count, 2);
    let names: Vec<&str> = music.data.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Park Square Live Music & Coffee", "The Musical Hop"]);

    assert_eq!(search("hop").await.count, 1);
    assert_eq!(search("").await.count, 3);
    assert_eq!(search("%").await.count, 0);
    assert_eq!(search("zzz").await.count, 0);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let state = setup_test_state().await;
    for name in ["100% Jazz Club", "Under_Ground", "Bang! Bar", "Plain Hall"] {
        state.venue_repo.create(new_venue(name, "Austin", "TX")).await.unwrap();
    }

    let names = |term: &'static str| {
        let repo = state.venue_repo.clone();
        async move {
            repo.search_by_name(term)
                .await
                .unwrap()
                .into_iter()
                .map(|v| v.name)
                .collect::<Vec<_>>()
        }
    };

    assert_eq!(names("%").await, vec!["100% Jazz Club"]);
    assert_eq!(names("0% j").await, vec!["100% Jazz Club"]);
    assert_eq!(names("_").await, vec!["Under_Ground"]);
    assert_eq!(names("ba_g").await, Vec::<String>::new());
    assert_eq!(names("!").await, vec!["Bang! Bar"]);
    assert_eq!(names(" PLAIN ").await, vec!["Plain Hall"]);
}

#[tokio::test]
async fn test_artist_search_counts_upcoming() {
    let state = setup_test_state().await;
    let venue = state
        .venue_repo
        .create(new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let petals = state.artist_repo.create(new_artist("Guns N Petals")).await.unwrap();
    state.artist_repo.create(new_artist("Matt Quevedo")).await.unwrap();

    book(&state, petals.id, venue.id, now() + Duration::days(3)).await;
    book(&state, petals.id, venue.id, now() + Duration::days(4)).await;
    book(&state, petals.id, venue.id, now() - Duration::days(4)).await;

    let results = artist_service::search_artists(
        state.artist_repo.as_ref(),
        state.show_repo.as_ref(),
        "a",
        now(),
    )
    .await
    .unwrap();

    assert_eq!(results.count, 2);
    assert_eq!(results.data[0].name, "Guns N Petals");
    assert_eq!(results.data[0].num_upcoming_shows, 2);
    assert_eq!(results.data[1].name, "Matt Quevedo");
    assert_eq!(results.data[1].num_upcoming_shows, 0);
}

#[tokio::test]
async fn test_update_keeps_unsubmitted_fields() {
    let state = setup_test_state().await;
    let artist = state.artist_repo.create(new_artist("Guns N Petals")).await.unwrap();

    let updated = state
        .artist_repo
        .update(
            artist.id,
            ArtistPatch {
                name: Some("Guns N Roses".to_string()),
                seeking_venue: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, artist.id);
    assert_eq!(updated.name, "Guns N Roses");
    assert!(!updated.seeking_venue);
    assert_eq!(updated.phone, artist.phone);
    assert_eq!(updated.genres, artist.genres);
    assert_eq!(updated.facebook_link, artist.facebook_link);
    assert_eq!(updated.created_at, artist.created_at);

    let stored = state.artist_repo.find_by_id(artist.id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_can_clear_optional_field() {
    let state = setup_test_state().await;
    let mut input = new_venue("The Musical Hop", "San Francisco", "CA");
    input.phone = Some("123-123-1234".to_string());
    let venue = state.venue_repo.create(input).await.unwrap();

    let updated = state
        .venue_repo
        .update(
            venue.id,
            VenuePatch {
                phone: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.phone, None);
    assert_eq!(updated.address, venue.address);
}

#[tokio::test]
async fn test_update_missing_record() {
    let state = setup_test_state().await;
    let result = state.venue_repo.update(7, VenuePatch::default()).await;
    assert!(matches!(result, Err(DomainError::NotFound)));

    let result = state.artist_repo.update(7, ArtistPatch::default()).await;
    assert!(matches!(result, Err(DomainError::NotFound)));
}

#[tokio::test]
async fn test_delete_venue_removes_its_shows() {
    let state = setup_test_state().await;
    let venue = state
        .venue_repo
        .create(new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist = state.artist_repo.create(new_artist("Guns N Petals")).await.unwrap();
    book(&state, artist.id, venue.id, now() + Duration::days(1)).await;

    state.venue_repo.delete(venue.id).await.unwrap();

    assert!(state.venue_repo.find_by_id(venue.id).await.unwrap().is_none());
    assert!(state.show_repo.find_all().await.unwrap().is_empty());
    assert!(state.artist_repo.find_by_id(artist.id).await.unwrap().is_some());

    let again = state.venue_repo.delete(venue.id).await;
    assert!(matches!(again, Err(DomainError::NotFound)));
}

#[tokio::test]
async fn test_show_requires_existing_artist_and_venue() {
    let state = setup_test_state().await;
    let venue = state
        .venue_repo
        .create(new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();

    let result = state
        .show_repo
        .create(NewShow {
            artist_id: 99,
            venue_id: venue.id,
            start_time: now(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert!(state.show_repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_show_listing_ordered_by_start_time() {
    let state = setup_test_state().await;
    let venue = state
        .venue_repo
        .create(new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let first = state.artist_repo.create(new_artist("Early Band")).await.unwrap();
    let second = state.artist_repo.create(new_artist("Late Band")).await.unwrap();

    book(&state, second.id, venue.id, now() + Duration::days(5)).await;
    book(&state, first.id, venue.id, now() - Duration::days(5)).await;

    let shows = show_service::list_shows(state.show_repo.as_ref()).await.unwrap();
    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].artist_name, "Early Band");
    assert_eq!(shows[1].artist_name, "Late Band");
    assert_eq!(shows[1].venue_name, "The Musical Hop");
}

#[tokio::test]
async fn test_seed_runs_once() {
    let state = setup_test_state().await;
    fyyur::seed::seed_demo_data(state.db()).await.unwrap();
    fyyur::seed::seed_demo_data(state.db()).await.unwrap();

    let venues = state.venue_repo.find_all().await.unwrap();
    assert_eq!(venues.len(), 4);

    let blue_note = venues.iter().find(|v| v.name == "The Blue Note").unwrap();
    let detail = venue_service::venue_detail(
        state.venue_repo.as_ref(),
        state.show_repo.as_ref(),
        blue_note.id,
        now(),
    )
    .await
    .unwrap();
    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 1);
}
