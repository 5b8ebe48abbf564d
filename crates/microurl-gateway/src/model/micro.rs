use jiff::Timestamp;
use microurl_core::MicroRecord;
use serde::{Deserialize, Serialize};

/// Body of `POST /generate_micro`, sent as an HTML form.
#[derive(Debug, Deserialize)]
pub struct GenerateMicroForm {
    pub url: String,
}

/// One row of the `GET /all` listing.
#[derive(Debug, Serialize)]
pub struct MicroEntry {
    pub micro: String,
    pub url: String,
    pub created_at: Timestamp,
}

impl From<MicroRecord> for MicroEntry {
    fn from(record: MicroRecord) -> Self {
        Self {
            micro: record.micro.to_string(),
            url: record.url,
            created_at: record.created_at,
        }
    }
}
