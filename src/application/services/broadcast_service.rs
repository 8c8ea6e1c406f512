use serde_json::Value;

use crate::application::errors::{ApiError, ApiResult};
use crate::domain::entities::{Broadcast, GroupContext, NewBroadcast};
use crate::domain::traits::{ApiRequest, Transport};

/// Broadcast API client. Every call is scoped to the group passed in.
pub struct BroadcastClient<T: Transport> {
    transport: T,
}

impl<T: Transport> BroadcastClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch all broadcasts of a group, in the order the server returns them
    pub async fn list_broadcasts(&self, group: &GroupContext) -> ApiResult<Vec<Broadcast>> {
        tracing::debug!("Listing broadcasts for group {}", group.group_id);
        let value = self
            .transport
            .send(ApiRequest::get(["broadcast", group.group_id.as_str()]))
            .await?;

        serde_json::from_value(value)
            .map_err(|e| ApiError::Parse(format!("Failed to decode broadcasts: {}", e)))
    }

    /// Post a new broadcast. Not idempotent: every call creates a broadcast.
    pub async fn post_broadcast(&self, group: &GroupContext, data: &str) -> ApiResult<bool> {
        tracing::info!("Posting broadcast to group {}", group.group_id);
        let body = serde_json::to_value(NewBroadcast { data })
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        let value = self
            .transport
            .send(ApiRequest::post(["broadcast", group.group_id.as_str()], body))
            .await?;

        decode_ack(value)
    }

    /// Recall a broadcast
    pub async fn recall_broadcast(&self, group: &GroupContext, broadcast_id: &str) -> ApiResult<bool> {
        tracing::info!("Recalling broadcast {} in group {}", broadcast_id, group.group_id);
        let value = self
            .transport
            .send(ApiRequest::get(["broadcast", group.group_id.as_str(), broadcast_id]))
            .await?;

        decode_ack(value)
    }
}

/// Acknowledgement of a write call: a JSON boolean, or the string "success"
pub fn decode_ack(value: Value) -> ApiResult<bool> {
    match value {
        Value::Bool(ok) => Ok(ok),
        Value::String(s) if s == "success" => Ok(true),
        other => Err(ApiError::Parse(format!("Unexpected acknowledgement: {}", other))),
    }
}
