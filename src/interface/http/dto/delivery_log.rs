use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::dto::DeliveryLogRow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ListDeliveryLogsQuery {
    pub webhook_id: Option<uuid::Uuid>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct DeliveryLogResponse {
    pub id: uuid::Uuid,
    pub webhook_id: uuid::Uuid,
    pub event: String,
    pub payload: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub delivered_at: String,
    pub created_at: String,
}

impl From<DeliveryLogRow> for DeliveryLogResponse {
    fn from(row: DeliveryLogRow) -> Self {
        Self {
            id: row.id,
            webhook_id: row.webhook_id,
            event: row.event,
            payload: row.payload,
            response_status: row.response_status,
            response_body: row.response_body,
            error_message: row.error_message,
            delivered_at: Timestamp::from(row.delivered_at).to_rfc3339(),
            created_at: Timestamp::from(row.created_at).to_rfc3339(),
        }
    }
}
