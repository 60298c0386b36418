//! SeaORM implementation of VenueRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::name_contains;
use crate::domain::{DomainError, NewVenue, Venue, VenuePatch, VenueRepository};
use crate::models::encode_genres;
use crate::models::show::{Column as ShowColumn, Entity as ShowEntity};
use crate::models::venue::{ActiveModel, Column, Entity as VenueEntity};

/// SeaORM-based implementation of VenueRepository
pub struct SeaOrmVenueRepository {
    db: DatabaseConnection,
}

impl SeaOrmVenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VenueRepository for SeaOrmVenueRepository {
    async fn find_all(&self) -> Result<Vec<Venue>, DomainError> {
        let venues = VenueEntity::find()
            .order_by_asc(Column::State)
            .order_by_asc(Column::City)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?;

        Ok(venues.into_iter().map(Venue::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Venue>, DomainError> {
        let venue = VenueEntity::find_by_id(id).one(&self.db).await?;
        Ok(venue.map(Venue::from))
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>, DomainError> {
        let venues = VenueEntity::find()
            .filter(name_contains(Column::Name, term))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?;

        Ok(venues.into_iter().map(Venue::from).collect())
    }

    async fn create(&self, input: NewVenue) -> Result<Venue, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let venue = ActiveModel {
            name: Set(input.name),
            city: Set(input.city),
            state: Set(input.state),
            address: Set(input.address),
            phone: Set(input.phone),
            genres: Set(encode_genres(&input.genres)),
            image_link: Set(input.image_link),
            facebook_link: Set(input.facebook_link),
            website_link: Set(input.website_link),
            seeking_talent: Set(input.seeking_talent),
            seeking_description: Set(input.seeking_description),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let txn = self.db.begin().await?;
        let result = venue.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(venue_id = result.id, "Venue '{}' created", result.name);
        Ok(Venue::from(result))
    }

    async fn update(&self, id: i32, patch: VenuePatch) -> Result<Venue, DomainError> {
        let txn = self.db.begin().await?;

        let existing = VenueEntity::find_by_id(id)
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
        if let Some(address) = patch.address {
            active.address = Set(address);
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
        if let Some(seeking_talent) = patch.seeking_talent {
            active.seeking_talent = Set(seeking_talent);
        }
        if let Some(seeking_description) = patch.seeking_description {
            active.seeking_description = Set(seeking_description);
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let model = active.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(venue_id = id, "Venue updated");
        Ok(Venue::from(model))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        ShowEntity::delete_many()
            .filter(ShowColumn::VenueId.eq(id))
            .exec(&txn)
            .await?;

        let result = VenueEntity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            // Dropping the transaction rolls it back
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;

        tracing::info!(venue_id = id, "Venue deleted");
        Ok(())
    }
}
