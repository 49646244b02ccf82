use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::dto::WebhookRow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UpsertWebhookRequest {
    pub id: Option<uuid::Uuid>,
    pub name: String,
    pub url: String,
    pub secret: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub events: Vec<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub id: uuid::Uuid,
    pub name: String,
    pub url: String,
    pub has_secret: bool,
    pub is_active: bool,
    pub events: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<WebhookRow> for WebhookResponse {
    fn from(row: WebhookRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            url: row.url,
            has_secret: row.secret.is_some(),
            is_active: row.is_active,
            events: row.events,
            created_at: Timestamp::from(row.created_at).to_rfc3339(),
            updated_at: Timestamp::from(row.updated_at).to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteWebhookResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct TestWebhookResponse {
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct TriggerRequest {
    pub event: String,
    pub booking_id: uuid::Uuid,
}

#[derive(Debug, Serialize)]
pub struct TriggerResponse {
    pub matched: usize,
    pub delivered: usize,
    pub failed: usize,
}
