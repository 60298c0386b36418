//! Demo listings for a fresh database

use chrono::NaiveDateTime;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use super::{SeaOrmArtistRepository, SeaOrmShowRepository, SeaOrmVenueRepository};
use crate::domain::{
    ArtistRepository, DomainError, NewArtist, NewShow, NewVenue, ShowRepository, VenueRepository,
};
use crate::models::venue;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn at(value: &str) -> Result<NaiveDateTime, DomainError> {
    crate::utils::time::parse_datetime(value)
        .ok_or_else(|| DomainError::Internal(format!("bad seed time {value}")))
}

/// Insert the demo venues, artists and shows. Does nothing when venues exist.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    if venue::Entity::find().count(db).await? > 0 {
        tracing::info!("Venues already present, skipping demo data");
        return Ok(());
    }

    let venues = SeaOrmVenueRepository::new(db.clone());
    let artists = SeaOrmArtistRepository::new(db.clone());
    let shows = SeaOrmShowRepository::new(db.clone());

    let musical_hop = venues
        .create(NewVenue {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            genres: strings(&["Jazz", "Reggae", "Classical", "Folk"]),
            image_link: Some("https://images.unsplash.com/photo-1543900694-133f37abaaa5?w=400".to_string()),
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
            website_link: Some("https://www.themusicalhop.com".to_string()),
            seeking_talent: true,
            seeking_description: Some(
                "We are on the lookout for a local artist to play every two weeks. Please call us."
                    .to_string(),
            ),
        })
        .await?;

    let pianos = venues
        .create(NewVenue {
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "335 Delancey Street".to_string(),
            phone: Some("914-003-1132".to_string()),
            genres: strings(&["Classical", "R&B", "Hip-Hop"]),
            image_link: Some("https://images.unsplash.com/photo-1497032205916-ac775f0649ae?w=400".to_string()),
            facebook_link: Some("https://www.facebook.com/theduelingpianos".to_string()),
            website_link: Some("https://www.theduelingpianos.com".to_string()),
            seeking_talent: false,
            seeking_description: None,
        })
        .await?;

    let park_square = venues
        .create(NewVenue {
            name: "Park Square Live Music & Coffee".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            phone: Some("415-000-1234".to_string()),
            genres: strings(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            image_link: Some("https://images.unsplash.com/photo-1485686531765-ba63b07845a7?w=400".to_string()),
            facebook_link: Some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string()),
            website_link: Some("https://www.parksquarelivemusicandcoffee.com".to_string()),
            seeking_talent: false,
            seeking_description: None,
        })
        .await?;

    let blue_note = venues
        .create(NewVenue {
            name: "The Blue Note".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "131 W 3rd St".to_string(),
            phone: Some("212-475-8592".to_string()),
            genres: strings(&["Jazz", "Blues"]),
            image_link: None,
            facebook_link: None,
            website_link: Some("https://www.bluenotejazz.com".to_string()),
            seeking_talent: true,
            seeking_description: Some("Late sets on weeknights".to_string()),
        })
        .await?;

    let guns_n_petals = artists
        .create(NewArtist {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("326-123-5000".to_string()),
            genres: strings(&["Rock n Roll"]),
            image_link: Some("https://images.unsplash.com/photo-1549213783-8284d0336c4f?w=300".to_string()),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
            website_link: Some("https://www.gunsnpetalsband.com".to_string()),
            seeking_venue: true,
            seeking_description: Some(
                "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
            ),
        })
        .await?;

    let quevedo = artists
        .create(NewArtist {
            name: "Matt Quevedo".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: Some("300-400-5000".to_string()),
            genres: strings(&["Jazz"]),
            image_link: Some("https://images.unsplash.com/photo-1495223153807-b916f75de8c5?w=334".to_string()),
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".to_string()),
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        })
        .await?;

    let wild_sax = artists
        .create(NewArtist {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("432-325-5432".to_string()),
            genres: strings(&["Jazz", "Classical"]),
            image_link: Some("https://images.unsplash.com/photo-1558369981-f9ca78462e61?w=794".to_string()),
            facebook_link: None,
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        })
        .await?;

    let bookings = [
        (guns_n_petals.id, musical_hop.id, "2019-05-21 21:30:00"),
        (quevedo.id, park_square.id, "2019-06-15 23:00:00"),
        (wild_sax.id, park_square.id, "2035-04-01 20:00:00"),
        (wild_sax.id, park_square.id, "2035-04-08 20:00:00"),
        (wild_sax.id, park_square.id, "2035-04-15 20:00:00"),
        (quevedo.id, blue_note.id, "2020-02-14 21:00:00"),
        (quevedo.id, blue_note.id, "2035-02-14 21:00:00"),
        (guns_n_petals.id, pianos.id, "2035-09-12 22:00:00"),
    ];

    for (artist_id, venue_id, start) in bookings {
        shows
            .create(NewShow {
                artist_id,
                venue_id,
                start_time: at(start)?,
            })
            .await?;
    }

    tracing::info!("Seeded 4 venues, 3 artists and {} shows", bookings.len());
    Ok(())
}
