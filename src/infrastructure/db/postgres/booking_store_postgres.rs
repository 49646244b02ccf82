use crate::infrastructure::db::dto::BookingDetailsRow;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::stores::booking_store::{BookingRepositoryError, BookingStore};
use async_trait::async_trait;
use sqlx::PgConnection;
use time::Date;

#[derive(Clone)]
pub struct BookingStorePostgres {
    db: std::sync::Arc<PostgresDatabase>,
}

impl BookingStorePostgres {
    /// Build a Postgres-backed booking projection store.
    pub fn new(db: std::sync::Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    async fn get_details_impl_conn(
        conn: &mut PgConnection,
        booking_id: uuid::Uuid,
    ) -> Result<Option<BookingDetailsRow>, BookingRepositoryError> {
        // Inner joins: a booking with a dangling client or clinic is
        // unresolvable for payload purposes and reads as absent.
        let row = sqlx::query_as::<_, BookingDetailsRow>(
            "SELECT
                b.id AS booking_id,
                b.deposit_amount,
                b.balance_due,
                cl.name AS client_name,
                cl.email AS client_email,
                cl.phone AS client_phone,
                c.id AS clinic_id,
                c.title AS clinic_title,
                c.date AS clinic_date,
                c.coach AS clinic_coach,
                c.deposit_amount AS clinic_deposit_amount,
                c.price AS clinic_price
            FROM bookings b
            JOIN clients cl ON cl.id = b.client_id
            JOIN clinics c ON c.id = b.clinic_id
            WHERE b.id = $1",
        )
        .bind(booking_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|_| BookingRepositoryError::StorageUnavailable)?;

        Ok(row)
    }

    async fn list_balance_due_impl_conn(
        conn: &mut PgConnection,
        from: Date,
        until: Date,
    ) -> Result<Vec<uuid::Uuid>, BookingRepositoryError> {
        let ids = sqlx::query_scalar::<_, uuid::Uuid>(
            "SELECT b.id
            FROM bookings b
            JOIN clinics c ON c.id = b.clinic_id
            WHERE b.payment_status = 'deposit_paid'
              AND c.date >= $1
              AND c.date <= $2",
        )
        .bind(from)
        .bind(until)
        .fetch_all(&mut *conn)
        .await
        .map_err(|_| BookingRepositoryError::StorageUnavailable)?;

        Ok(ids)
    }
}

#[async_trait]
impl BookingStore for BookingStorePostgres {
    async fn get_details(
        &self,
        booking_id: uuid::Uuid,
    ) -> Result<Option<BookingDetailsRow>, BookingRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::get_details_impl_conn(conn, booking_id)))
            .await
    }

    async fn list_balance_due_ids(
        &self,
        from: Date,
        until: Date,
    ) -> Result<Vec<uuid::Uuid>, BookingRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::list_balance_due_impl_conn(conn, from, until)))
            .await
    }
}
