use crate::infrastructure::db::dto::WebhookRow;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::stores::webhook_store::{WebhookRepositoryError, WebhookStore};
use async_trait::async_trait;
use sqlx::PgConnection;

const COLUMNS: &str = "id, name, url, secret, is_active, events, created_at, updated_at";

#[derive(Clone)]
pub struct WebhookStorePostgres {
    db: std::sync::Arc<PostgresDatabase>,
}

impl WebhookStorePostgres {
    /// Build a Postgres-backed webhook store.
    pub fn new(db: std::sync::Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    async fn get_impl_conn(
        conn: &mut PgConnection,
        webhook_id: uuid::Uuid,
    ) -> Result<Option<WebhookRow>, WebhookRepositoryError> {
        let row = sqlx::query_as::<_, WebhookRow>(&format!(
            "SELECT {COLUMNS} FROM webhook_configs WHERE id = $1"
        ))
        .bind(webhook_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;

        Ok(row)
    }

    async fn list_impl_conn(
        conn: &mut PgConnection,
    ) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        let rows = sqlx::query_as::<_, WebhookRow>(&format!(
            "SELECT {COLUMNS} FROM webhook_configs ORDER BY created_at DESC"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;

        Ok(rows)
    }

    async fn list_active_impl_conn(
        conn: &mut PgConnection,
        event: &str,
    ) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        let rows = sqlx::query_as::<_, WebhookRow>(&format!(
            "SELECT {COLUMNS}
            FROM webhook_configs
            WHERE is_active = true
              AND $1 = ANY(events)
            ORDER BY created_at"
        ))
        .bind(event)
        .fetch_all(&mut *conn)
        .await
        .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;

        Ok(rows)
    }

    async fn upsert_impl_conn(
        conn: &mut PgConnection,
        row: &WebhookRow,
    ) -> Result<WebhookRow, WebhookRepositoryError> {
        let stored = sqlx::query_as::<_, WebhookRow>(&format!(
            "INSERT INTO webhook_configs (
                id, name, url, secret, is_active, events, created_at, updated_at
            )
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                url = EXCLUDED.url,
                secret = EXCLUDED.secret,
                is_active = EXCLUDED.is_active,
                events = EXCLUDED.events,
                updated_at = EXCLUDED.updated_at
            RETURNING {COLUMNS}"
        ))
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.url)
        .bind(&row.secret)
        .bind(row.is_active)
        .bind(&row.events)
        .bind(row.created_at)
        .bind(row.updated_at)
        .fetch_one(&mut *conn)
        .await
        .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;

        Ok(stored)
    }

    async fn delete_impl_conn(
        conn: &mut PgConnection,
        webhook_id: uuid::Uuid,
    ) -> Result<(), WebhookRepositoryError> {
        let result = sqlx::query("DELETE FROM webhook_configs WHERE id = $1")
            .bind(webhook_id)
            .execute(&mut *conn)
            .await
            .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;

        if result.rows_affected() == 0 {
            return Err(WebhookRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl WebhookStore for WebhookStorePostgres {
    async fn get(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<Option<WebhookRow>, WebhookRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::get_impl_conn(conn, webhook_id)))
            .await
    }

    async fn list(&self) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::list_impl_conn(conn)))
            .await
    }

    async fn list_active_by_event(
        &self,
        event: &str,
    ) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        let event = event.to_string();
        self.db
            .with_conn(move |conn| {
                Box::pin(async move { Self::list_active_impl_conn(conn, &event).await })
            })
            .await
    }

    async fn upsert(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| {
                Box::pin(async move { Self::upsert_impl_conn(conn, &row).await })
            })
            .await
    }

    async fn delete(&self, webhook_id: uuid::Uuid) -> Result<(), WebhookRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::delete_impl_conn(conn, webhook_id)))
            .await
    }
}
