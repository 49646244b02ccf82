use time::Date;

/// The joined booking + client + clinic projection the payload builder
/// reads. Produced by an inner join, so a missing relation surfaces as a
/// missing booking.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookingDetailsRow {
    pub booking_id: uuid::Uuid,
    pub deposit_amount: Option<i64>,
    pub balance_due: Option<i64>,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub clinic_id: uuid::Uuid,
    pub clinic_title: String,
    pub clinic_date: Date,
    pub clinic_coach: Option<String>,
    pub clinic_deposit_amount: Option<i64>,
    pub clinic_price: i64,
}
