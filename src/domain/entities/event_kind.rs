use serde::{Deserialize, Serialize};

/// The closed set of business occurrences that can fan out to webhooks.
///
/// An unrecognized kind at a trigger boundary is a caller error and is
/// rejected there; nothing downstream ever sees a free-form event string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "booking.confirmed")]
    BookingConfirmed,
    #[serde(rename = "payment.received")]
    PaymentReceived,
    #[serde(rename = "balance.due")]
    BalanceDue,
    #[serde(rename = "booking.cancelled")]
    BookingCancelled,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::BookingConfirmed,
        EventKind::PaymentReceived,
        EventKind::BalanceDue,
        EventKind::BookingCancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::BookingConfirmed => "booking.confirmed",
            EventKind::PaymentReceived => "payment.received",
            EventKind::BalanceDue => "balance.due",
            EventKind::BookingCancelled => "booking.cancelled",
        }
    }

    /// Parse a wire-format event name. Returns `None` for unknown kinds.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == value)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_known_names_when_parsed_should_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn given_unknown_name_when_parsed_should_return_none() {
        assert_eq!(EventKind::parse("booking.created"), None);
        assert_eq!(EventKind::parse(""), None);
    }

    #[test]
    fn given_event_kind_when_serialized_should_use_dotted_name() {
        let json = serde_json::to_string(&EventKind::PaymentReceived).expect("serialize");
        assert_eq!(json, "\"payment.received\"");
    }

    #[test]
    fn given_dotted_name_when_deserialized_should_match_variant() {
        let kind: EventKind = serde_json::from_str("\"balance.due\"").expect("deserialize");
        assert_eq!(kind, EventKind::BalanceDue);
    }
}
