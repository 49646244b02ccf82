use crate::infrastructure::db::dto::DeliveryLogRow;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::stores::delivery_log_store::{
    DeliveryLogRepositoryError, DeliveryLogStore,
};
use async_trait::async_trait;
use sqlx::PgConnection;

const COLUMNS: &str = "id, webhook_id, event, payload, response_status, \
     response_body, error_message, delivered_at, created_at";

#[derive(Clone)]
pub struct DeliveryLogStorePostgres {
    db: std::sync::Arc<PostgresDatabase>,
}

impl DeliveryLogStorePostgres {
    /// Build a Postgres-backed delivery log store.
    pub fn new(db: std::sync::Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    async fn insert_impl_conn(
        conn: &mut PgConnection,
        row: &DeliveryLogRow,
    ) -> Result<DeliveryLogRow, DeliveryLogRepositoryError> {
        let stored = sqlx::query_as::<_, DeliveryLogRow>(&format!(
            "INSERT INTO webhook_logs (
                id, webhook_id, event, payload, response_status,
                response_body, error_message, delivered_at, created_at
            )
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)
            ON CONFLICT DO NOTHING
            RETURNING {COLUMNS}"
        ))
        .bind(row.id)
        .bind(row.webhook_id)
        .bind(&row.event)
        .bind(&row.payload)
        .bind(row.response_status)
        .bind(&row.response_body)
        .bind(&row.error_message)
        .bind(row.delivered_at)
        .bind(row.created_at)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|_| DeliveryLogRepositoryError::StorageUnavailable)?;

        match stored {
            Some(row) => Ok(row),
            None => Err(DeliveryLogRepositoryError::Conflict),
        }
    }

    async fn list_impl_conn(
        conn: &mut PgConnection,
        webhook_id: Option<uuid::Uuid>,
        limit: u32,
    ) -> Result<Vec<DeliveryLogRow>, DeliveryLogRepositoryError> {
        let rows = sqlx::query_as::<_, DeliveryLogRow>(&format!(
            "SELECT {COLUMNS}
            FROM webhook_logs
            WHERE ($1::uuid IS NULL OR webhook_id = $1)
            ORDER BY created_at DESC
            LIMIT $2"
        ))
        .bind(webhook_id)
        .bind(i64::from(limit))
        .fetch_all(&mut *conn)
        .await
        .map_err(|_| DeliveryLogRepositoryError::StorageUnavailable)?;

        Ok(rows)
    }
}

#[async_trait]
impl DeliveryLogStore for DeliveryLogStorePostgres {
    async fn insert(
        &self,
        row: &DeliveryLogRow,
    ) -> Result<DeliveryLogRow, DeliveryLogRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| {
                Box::pin(async move { Self::insert_impl_conn(conn, &row).await })
            })
            .await
    }

    async fn list(
        &self,
        webhook_id: Option<uuid::Uuid>,
        limit: u32,
    ) -> Result<Vec<DeliveryLogRow>, DeliveryLogRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::list_impl_conn(conn, webhook_id, limit)))
            .await
    }
}
