//! SeaORM implementation of ShowRepository

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set, TransactionTrait,
};

use crate::domain::{DomainError, NewShow, ScheduleEntry, Show, ShowListing, ShowRepository};
use crate::models::artist::{self, Entity as ArtistEntity};
use crate::models::show::{ActiveModel, Column, Entity as ShowEntity, Relation};
use crate::models::venue::{self, Entity as VenueEntity};

/// Row shape of the show/venue/artist join
#[derive(Debug, FromQueryResult)]
struct ShowRow {
    id: i32,
    start_time: NaiveDateTime,
    venue_id: i32,
    venue_name: String,
    venue_image_link: Option<String>,
    artist_id: i32,
    artist_name: String,
    artist_image_link: Option<String>,
}

impl From<ShowRow> for ShowListing {
    fn from(row: ShowRow) -> Self {
        Self {
            id: row.id,
            start_time: row.start_time,
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct ScheduleRow {
    owner_id: i32,
    start_time: NaiveDateTime,
}

/// SeaORM-based implementation of ShowRepository
pub struct SeaOrmShowRepository {
    db: DatabaseConnection,
}

impl SeaOrmShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Shows joined with both sides, ordered by start time then id
    fn listing_query() -> Select<ShowEntity> {
        ShowEntity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::StartTime)
            .column(Column::VenueId)
            .column(Column::ArtistId)
            .column_as(venue::Column::Name, "venue_name")
            .column_as(venue::Column::ImageLink, "venue_image_link")
            .column_as(artist::Column::Name, "artist_name")
            .column_as(artist::Column::ImageLink, "artist_image_link")
            .join(JoinType::InnerJoin, Relation::Venue.def())
            .join(JoinType::InnerJoin, Relation::Artist.def())
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::Id)
    }

    async fn fetch_listing(&self, query: Select<ShowEntity>) -> Result<Vec<ShowListing>, DomainError> {
        let rows = query.into_model::<ShowRow>().all(&self.db).await?;
        Ok(rows.into_iter().map(ShowListing::from).collect())
    }

    async fn fetch_schedule(
        &self,
        owner: Column,
        owner_ids: &[i32],
    ) -> Result<Vec<ScheduleEntry>, DomainError> {
        if owner_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = ShowEntity::find()
            .select_only()
            .column_as(owner, "owner_id")
            .column(Column::StartTime)
            .filter(owner.is_in(owner_ids.iter().copied()))
            .into_model::<ScheduleRow>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| ScheduleEntry {
                owner_id: row.owner_id,
                start_time: row.start_time,
            })
            .collect())
    }
}

#[async_trait]
impl ShowRepository for SeaOrmShowRepository {
    async fn find_all(&self) -> Result<Vec<ShowListing>, DomainError> {
        self.fetch_listing(Self::listing_query()).await
    }

    async fn find_by_venue(&self, venue_id: i32) -> Result<Vec<ShowListing>, DomainError> {
        self.fetch_listing(Self::listing_query().filter(Column::VenueId.eq(venue_id)))
            .await
    }

    async fn find_by_artist(&self, artist_id: i32) -> Result<Vec<ShowListing>, DomainError> {
        self.fetch_listing(Self::listing_query().filter(Column::ArtistId.eq(artist_id)))
            .await
    }

    async fn schedule_for_venues(
        &self,
        venue_ids: &[i32],
    ) -> Result<Vec<ScheduleEntry>, DomainError> {
        self.fetch_schedule(Column::VenueId, venue_ids).await
    }

    async fn schedule_for_artists(
        &self,
        artist_ids: &[i32],
    ) -> Result<Vec<ScheduleEntry>, DomainError> {
        self.fetch_schedule(Column::ArtistId, artist_ids).await
    }

    async fn create(&self, input: NewShow) -> Result<Show, DomainError> {
        let txn = self.db.begin().await?;

        if ArtistEntity::find_by_id(input.artist_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(DomainError::Validation(format!(
                "Artist {} does not exist",
                input.artist_id
            )));
        }

        if VenueEntity::find_by_id(input.venue_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(DomainError::Validation(format!(
                "Venue {} does not exist",
                input.venue_id
            )));
        }

        let show = ActiveModel {
            artist_id: Set(input.artist_id),
            venue_id: Set(input.venue_id),
            start_time: Set(input.start_time),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let result = show.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(
            show_id = result.id,
            artist_id = result.artist_id,
            venue_id = result.venue_id,
            "Show booked for {}",
            result.start_time
        );
        Ok(Show::from(result))
    }
}
