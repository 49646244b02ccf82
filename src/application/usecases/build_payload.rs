// Use case: build_payload.

use crate::application::context::AppContext;
use crate::domain::entities::event_kind::EventKind;
use crate::domain::entities::payload::{
    balance_due_date, format_date, resolve_payment, ClientInfo, ClinicInfo, EventPayload,
    PaymentInfo,
};
use crate::domain::value_objects::ids::BookingId;
use crate::domain::value_objects::timestamps::Timestamp;

/// Assembles the canonical wire payload for an event and booking by
/// joining booking, client, and clinic data. Pure read + compute.
pub struct BuildPayloadUseCase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildPayloadError {
    /// The booking or one of its required relations cannot be resolved.
    /// Terminal for this trigger; callers must not retry indefinitely.
    BookingNotFound,
    Storage(String),
}

impl BuildPayloadUseCase {
    pub async fn execute(
        ctx: &AppContext,
        event: EventKind,
        booking_id: BookingId,
    ) -> Result<EventPayload, BuildPayloadError> {
        // Step 1: Resolve the joined booking details.
        let details = ctx
            .repos
            .booking
            .get_details(booking_id.0)
            .await
            .map_err(|e| BuildPayloadError::Storage(format!("{e:?}")))?
            .ok_or(BuildPayloadError::BookingNotFound)?;

        // Step 2: Resolve payment amounts and the balance due date.
        let (deposit_paid, balance_due) = resolve_payment(
            details.deposit_amount,
            details.balance_due,
            details.clinic_deposit_amount,
            details.clinic_price,
        );
        let due_date = balance_due_date(details.clinic_date);

        // Step 3: Assemble the payload; the timestamp is issue time.
        Ok(EventPayload {
            event,
            booking_id: booking_id.to_string(),
            client: ClientInfo {
                name: details.client_name,
                email: details.client_email,
                phone: details.client_phone,
            },
            clinic: ClinicInfo {
                id: details.clinic_id.to_string(),
                title: details.clinic_title,
                date: format_date(details.clinic_date),
                coach: details.clinic_coach,
            },
            payment: PaymentInfo {
                deposit_paid,
                balance_due,
                balance_due_date: Some(format_date(due_date)),
            },
            timestamp: Timestamp::now_utc().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildPayloadError, BuildPayloadUseCase};
    use crate::application::context::test_support::test_settings;
    use crate::application::context::AppContext;
    use crate::domain::entities::event_kind::EventKind;
    use crate::domain::value_objects::ids::BookingId;
    use crate::infrastructure::db::dto::BookingDetailsRow;
    use crate::infrastructure::db::memory::{
        InMemoryBookingStore, InMemoryDeliveryLogStore, InMemoryWebhookStore,
    };
    use crate::infrastructure::db::repositories::Repositories;
    use std::sync::Arc;
    use time::macros::date;

    fn seeded_ctx(details: BookingDetailsRow) -> AppContext {
        let bookings = Arc::new(InMemoryBookingStore::new());
        bookings.put(details, "deposit_paid");
        let repos = Repositories::with_stores(
            Arc::new(InMemoryWebhookStore::new()),
            Arc::new(InMemoryDeliveryLogStore::new()),
            bookings,
        );
        AppContext::new(repos, test_settings())
    }

    fn details(booking_id: uuid::Uuid) -> BookingDetailsRow {
        BookingDetailsRow {
            booking_id,
            deposit_amount: None,
            balance_due: None,
            client_name: "Robin Shore".to_string(),
            client_email: "robin@example.com".to_string(),
            client_phone: None,
            clinic_id: uuid::Uuid::new_v4(),
            clinic_title: "Spring Speed Clinic".to_string(),
            clinic_date: date!(2025 - 07 - 15),
            clinic_coach: Some("Sam Tiller".to_string()),
            clinic_deposit_amount: Some(50_000),
            clinic_price: 150_000,
        }
    }

    #[tokio::test]
    async fn given_booking_without_own_amounts_when_built_should_use_clinic_fallbacks() {
        let booking_id = BookingId::new();
        let ctx = seeded_ctx(details(booking_id.0));

        let payload = BuildPayloadUseCase::execute(&ctx, EventKind::PaymentReceived, booking_id)
            .await
            .unwrap();

        assert_eq!(payload.event, EventKind::PaymentReceived);
        assert_eq!(payload.booking_id, booking_id.to_string());
        assert_eq!(payload.payment.deposit_paid, 50_000);
        assert_eq!(payload.payment.balance_due, 100_000);
        assert_eq!(payload.clinic.date, "2025-07-15");
        assert_eq!(
            payload.payment.balance_due_date.as_deref(),
            Some("2025-06-15")
        );
    }

    #[tokio::test]
    async fn given_booking_with_own_amounts_when_built_should_prefer_them() {
        let booking_id = BookingId::new();
        let mut row = details(booking_id.0);
        row.deposit_amount = Some(25_000);
        row.balance_due = Some(60_000);
        let ctx = seeded_ctx(row);

        let payload = BuildPayloadUseCase::execute(&ctx, EventKind::BalanceDue, booking_id)
            .await
            .unwrap();

        assert_eq!(payload.payment.deposit_paid, 25_000);
        assert_eq!(payload.payment.balance_due, 60_000);
    }

    #[tokio::test]
    async fn given_unknown_booking_when_built_should_fail_with_not_found() {
        let ctx = seeded_ctx(details(uuid::Uuid::new_v4()));

        let result =
            BuildPayloadUseCase::execute(&ctx, EventKind::BookingConfirmed, BookingId::new()).await;

        assert_eq!(result.unwrap_err(), BuildPayloadError::BookingNotFound);
    }
}
