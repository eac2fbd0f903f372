use crate::database::{model::event::EventRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    event::{
        event::{CreateEvent, DeleteEvent, UpdateEvent},
        Event,
    },
    id::{EventId, UserId},
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<Event> {
        let event_id = EventId::new();
        let row: EventRow = sqlx::query_as(
            r#"
                INSERT INTO events
                (event_id, owner_user_id, event_name, venue, date_time, value, status, description)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING event_id, owner_user_id, event_name, venue, date_time, value, status, description
            "#,
        )
        .bind(event_id)
        .bind(event.owner_user_id)
        .bind(&event.event_name)
        .bind(&event.venue)
        .bind(event.date_time)
        .bind(event.value)
        .bind(&event.status)
        .bind(&event.description)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(Event::from(row))
    }

    async fn find_by_owner_id(&self, owner_user_id: UserId) -> AppResult<Vec<Event>> {
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
                SELECT event_id, owner_user_id, event_name, venue, date_time, value, status, description
                FROM events
                WHERE owner_user_id = $1
                ORDER BY date_time ASC
            "#,
        )
        .bind(owner_user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn update(&self, event: UpdateEvent) -> AppResult<Event> {
        // Fields left at None keep their stored values.
        let row: Option<EventRow> = sqlx::query_as(
            r#"
                UPDATE events
                SET owner_user_id = COALESCE($2, owner_user_id),
                    event_name = COALESCE($3, event_name),
                    venue = COALESCE($4, venue),
                    date_time = COALESCE($5, date_time),
                    value = COALESCE($6, value),
                    status = COALESCE($7, status),
                    description = COALESCE($8, description),
                    updated_at = CURRENT_TIMESTAMP
                WHERE event_id = $1
                RETURNING event_id, owner_user_id, event_name, venue, date_time, value, status, description
            "#,
        )
        .bind(event.event_id)
        .bind(event.owner_user_id)
        .bind(event.event_name)
        .bind(event.venue)
        .bind(event.date_time)
        .bind(event.value)
        .bind(event.status)
        .bind(event.description)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        match row {
            Some(row) => Ok(Event::from(row)),
            None => Err(AppError::EntityNotFound(format!(
                "event ({}) was not found",
                event.event_id
            ))),
        }
    }

    async fn delete(&self, event: DeleteEvent) -> AppResult<()> {
        let res = sqlx::query(r#"DELETE FROM events WHERE event_id = $1"#)
            .bind(event.event_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "event ({}) was not found",
                event.event_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn new_event(owner: UserId, name: &str, date_time: DateTime<Utc>) -> CreateEvent {
        CreateEvent::new(
            owner,
            name.into(),
            "City Hall".into(),
            date_time,
            150.0,
            "Confirmed".into(),
            "Yearly gathering".into(),
        )
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_create_and_list_events(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(ConnectionPool::new(pool));
        let owner = UserId::new();

        let date_time = Utc.with_ymd_and_hms(2025, 10, 12, 18, 30, 0).unwrap();
        let created = repo.create(new_event(owner, "Reunion", date_time)).await?;
        assert_eq!(created.owner_user_id, owner);
        assert_eq!(created.event_name, "Reunion");
        assert_eq!(created.venue, "City Hall");
        assert_eq!(created.date_time, date_time);
        assert_eq!(created.value, 150.0);

        let events = repo.find_by_owner_id(owner).await?;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_id, created.event_id);

        // Another owner sees nothing.
        assert!(repo.find_by_owner_id(UserId::new()).await?.is_empty());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_list_is_ordered_by_date_time(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(ConnectionPool::new(pool));
        let owner = UserId::new();

        let t1 = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let t3 = Utc.with_ymd_and_hms(2025, 12, 24, 20, 0, 0).unwrap();

        // Inserted out of order on purpose.
        repo.create(new_event(owner, "Second", t2)).await?;
        repo.create(new_event(owner, "Third", t3)).await?;
        repo.create(new_event(owner, "First", t1)).await?;

        let events = repo.find_by_owner_id(owner).await?;
        let names: Vec<&str> = events.iter().map(|e| e.event_name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_update_overwrites_only_supplied_fields(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(ConnectionPool::new(pool));
        let owner = UserId::new();

        let date_time = Utc.with_ymd_and_hms(2025, 3, 3, 15, 0, 0).unwrap();
        let created = repo.create(new_event(owner, "Concert", date_time)).await?;

        let updated = repo
            .update(UpdateEvent {
                event_id: created.event_id,
                owner_user_id: None,
                event_name: None,
                venue: Some("Open Air Stage".into()),
                date_time: None,
                value: None,
                status: Some("Cancelled".into()),
                description: None,
            })
            .await?;

        assert_eq!(updated.venue, "Open Air Stage");
        assert_eq!(updated.status, "Cancelled");
        assert_eq!(updated.event_name, "Concert");
        assert_eq!(updated.date_time, date_time);
        assert_eq!(updated.value, 150.0);
        assert_eq!(updated.description, "Yearly gathering");

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_update_unknown_event(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo
            .update(UpdateEvent {
                event_id: EventId::new(),
                owner_user_id: None,
                event_name: Some("Ghost".into()),
                venue: None,
                date_time: None,
                value: None,
                status: None,
                description: None,
            })
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_delete_event(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = EventRepositoryImpl::new(ConnectionPool::new(pool));
        let owner = UserId::new();

        let date_time = Utc.with_ymd_and_hms(2025, 5, 5, 11, 0, 0).unwrap();
        let created = repo.create(new_event(owner, "Brunch", date_time)).await?;

        repo.delete(DeleteEvent {
            event_id: created.event_id,
        })
        .await?;
        assert!(repo.find_by_owner_id(owner).await?.is_empty());

        let res = repo
            .delete(DeleteEvent {
                event_id: created.event_id,
            })
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }
}
