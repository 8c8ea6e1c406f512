use super::Author;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broadcast status as the server reports it.
///
/// The server sends one of the string codes `"0"`, `"1"` or `"2"`. What each code
/// means is owned by the server, so the client only carries the code around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BroadcastStatus(u8);

impl BroadcastStatus {
    pub const CODES: [&'static str; 3] = ["0", "1", "2"];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::CODES
            .iter()
            .position(|c| *c == code)
            .map(|idx| Self(idx as u8))
    }

    pub fn code(&self) -> &'static str {
        Self::CODES[self.0 as usize]
    }
}

impl TryFrom<String> for BroadcastStatus {
    type Error = String;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code).ok_or_else(|| format!("unknown broadcast status code: {:?}", code))
    }
}

impl From<BroadcastStatus> for String {
    fn from(status: BroadcastStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for BroadcastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A message sent to every member of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broadcast {
    pub broadcast_id: String,
    pub category: String,
    /// Timestamp exactly as the server sent it
    pub created_at: String,
    /// Opaque payload, usually serialized message content
    pub data: String,
    #[serde(flatten)]
    pub author: Author,
    pub status: BroadcastStatus,
}

impl Broadcast {
    /// `created_at` parsed as RFC 3339, keeping the server's offset
    pub fn created_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at).ok()
    }
}

/// Body of a post call
#[derive(Debug, Clone, Serialize)]
pub struct NewBroadcast<'a> {
    pub data: &'a str,
}
