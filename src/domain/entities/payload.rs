use crate::domain::entities::event_kind::EventKind;
use serde::Serialize;
use time::macros::format_description;
use time::{Date, Duration};

/// Deposit applied when neither the booking nor the clinic carries one,
/// in minor currency units.
pub const FALLBACK_DEPOSIT_MINOR_UNITS: i64 = 50_000;

/// Number of days before the clinic date at which the balance falls due.
pub const BALANCE_DUE_LEAD_DAYS: i64 = 30;

/// The versioned wire payload delivered to every subscribed endpoint.
///
/// Optional fields are omitted from the JSON body when absent; dates are
/// rendered as `YYYY-MM-DD` strings and the timestamp as RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventPayload {
    pub event: EventKind,
    pub booking_id: String,
    pub client: ClientInfo,
    pub clinic: ClinicInfo,
    pub payment: PaymentInfo,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientInfo {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClinicInfo {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coach: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentInfo {
    pub deposit_paid: i64,
    pub balance_due: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_due_date: Option<String>,
}

/// Resolve the deposit and outstanding balance for a booking.
///
/// The booking's own figures win; a missing deposit falls back to the
/// clinic's configured deposit and then to the fixed default, and a missing
/// balance defaults to the clinic price minus the resolved deposit.
pub fn resolve_payment(
    booking_deposit: Option<i64>,
    booking_balance: Option<i64>,
    clinic_deposit: Option<i64>,
    clinic_price: i64,
) -> (i64, i64) {
    let deposit = booking_deposit
        .or(clinic_deposit)
        .unwrap_or(FALLBACK_DEPOSIT_MINOR_UNITS);
    let balance = booking_balance.unwrap_or(clinic_price - deposit);
    (deposit, balance)
}

/// The calendar date the remaining balance falls due: 30 days before the
/// clinic date, no time component.
pub fn balance_due_date(clinic_date: Date) -> Date {
    clinic_date - Duration::days(BALANCE_DUE_LEAD_DAYS)
}

/// Render a calendar date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

impl EventPayload {
    /// A synthetic payload for the admin "test webhook" action.
    pub fn sample(timestamp: String) -> Self {
        Self {
            event: EventKind::BookingConfirmed,
            booking_id: format!("test-{}", uuid::Uuid::new_v4()),
            client: ClientInfo {
                name: "Test Client".to_string(),
                email: "test@example.com".to_string(),
                phone: Some("+1-555-TEST".to_string()),
            },
            clinic: ClinicInfo {
                id: "test-clinic".to_string(),
                title: "Test Clinic".to_string(),
                date: "2025-06-01".to_string(),
                coach: Some("Test Coach".to_string()),
            },
            payment: PaymentInfo {
                deposit_paid: FALLBACK_DEPOSIT_MINOR_UNITS,
                balance_due: 100_000,
                balance_due_date: Some("2025-05-01".to_string()),
            },
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn given_booking_amounts_when_resolved_should_win_over_fallbacks() {
        let (deposit, balance) = resolve_payment(Some(30_000), Some(90_000), Some(50_000), 150_000);
        assert_eq!(deposit, 30_000);
        assert_eq!(balance, 90_000);
    }

    #[test]
    fn given_only_clinic_amounts_when_resolved_should_use_clinic_deposit() {
        let (deposit, balance) = resolve_payment(None, None, Some(50_000), 150_000);
        assert_eq!(deposit, 50_000);
        assert_eq!(balance, 100_000);
    }

    #[test]
    fn given_no_amounts_when_resolved_should_use_fixed_default() {
        let (deposit, balance) = resolve_payment(None, None, None, 120_000);
        assert_eq!(deposit, FALLBACK_DEPOSIT_MINOR_UNITS);
        assert_eq!(balance, 70_000);
    }

    #[test]
    fn given_clinic_date_when_balance_due_computed_should_be_thirty_days_before() {
        assert_eq!(balance_due_date(date!(2025 - 07 - 15)), date!(2025 - 06 - 15));
        // Crosses a month boundary.
        assert_eq!(balance_due_date(date!(2025 - 03 - 10)), date!(2025 - 02 - 08));
        // Leap year February.
        assert_eq!(balance_due_date(date!(2024 - 03 - 10)), date!(2024 - 02 - 09));
    }

    #[test]
    fn given_date_when_formatted_should_be_iso_calendar_date() {
        assert_eq!(format_date(date!(2025 - 06 - 01)), "2025-06-01");
        assert_eq!(format_date(date!(2025 - 11 - 09)), "2025-11-09");
    }

    #[test]
    fn given_payload_without_optionals_when_serialized_should_omit_them() {
        let payload = EventPayload {
            event: EventKind::BookingCancelled,
            booking_id: "b-1".to_string(),
            client: ClientInfo {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
            },
            clinic: ClinicInfo {
                id: "c-1".to_string(),
                title: "Spring Clinic".to_string(),
                date: "2025-06-01".to_string(),
                coach: None,
            },
            payment: PaymentInfo {
                deposit_paid: 50_000,
                balance_due: 100_000,
                balance_due_date: None,
            },
            timestamp: "2025-01-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&payload).expect("serialize");
        assert!(json["client"].get("phone").is_none());
        assert!(json["clinic"].get("coach").is_none());
        assert!(json["payment"].get("balance_due_date").is_none());
        assert_eq!(json["event"], "booking.cancelled");
    }
}
