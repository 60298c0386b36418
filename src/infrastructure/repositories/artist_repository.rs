//! SeaORM implementation of ArtistRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::name_contains;
use crate::domain::{Artist, ArtistPatch, ArtistRepository, DomainError, NewArtist};
use crate::models::artist::{ActiveModel, Column, Entity as ArtistEntity};
use crate::models::encode_genres;

/// SeaORM-based implementation of ArtistRepository
pub struct SeaOrmArtistRepository {
    db: DatabaseConnection,
}

impl SeaOrmArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArtistRepository for SeaOrmArtistRepository {
    async fn find_all(&self) -> Result<Vec<Artist>, DomainError> {
        let artists = ArtistEntity::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?;

        Ok(artists.into_iter().map(Artist::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Artist>, DomainError> {
        let artist = ArtistEntity::find_by_id(id).one(&self.db).await?;
        Ok(artist.map(Artist::from))
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Artist>, DomainError> {
        let artists = ArtistEntity::find()
            .filter(name_contains(Column::Name, term))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?;

        Ok(artists.into_iter().map(Artist::from).collect())
    }

    async fn create(&self, input: NewArtist) -> Result<Artist, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let artist = ActiveModel {
            name: Set(input.name),
            city: Set(input.city),
            state: Set(input.state),
            phone: Set(input.phone),
            genres: Set(encode_genres(&input.genres)),
            image_link: Set(input.image_link),
            facebook_link: Set(input.facebook_link),
            website_link: Set(input.website_link),
            seeking_venue: Set(input.seeking_venue),
            seeking_description: Set(input.seeking_description),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let txn = self.db.begin().await?;
        let result = artist.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(artist_id = result.id, "Artist '{}' created", result.name);
        Ok(Artist::from(result))
    }

    async fn update(&self, id: i32, patch: ArtistPatch) -> Result<Artist, DomainError> {
        let txn = self.db.begin().await?;

        let existing = ArtistEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(city) = patch.city {
            active.city = Set(city);
        }
        if let Some(state) = patch.state {
            active.state = Set(state);
        }
        if let Some(phone) = patch.phone {
            active.phone = Set(phone);
        }
        if let Some(genres) = patch.genres {
            active.genres = Set(encode_genres(&genres));
        }
        if let Some(image_link) = patch.image_link {
            active.image_link = Set(image_link);
        }
        if let Some(facebook_link) = patch.facebook_link {
            active.facebook_link = Set(facebook_link);
        }
        if let Some(website_link) = patch.website_link {
            active.website_link = Set(website_link);
        }
        if let Some(seeking_venue) = patch.seeking_venue {
            active.seeking_venue = Set(seeking_venue);
        }
        if let Some(seeking_description) = patch.seeking_description {
            active.seeking_description = Set(seeking_description);
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let model = active.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(artist_id = id, "Artist updated");
        Ok(Artist::from(model))
    }
}
