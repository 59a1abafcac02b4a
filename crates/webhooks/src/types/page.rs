//! Static page snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use persimmon_core::{Metadata, PageId};

use crate::serializer::PayloadEntity;

/// A static content page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    /// Rich-text content, serialized as a JSON string by the editor.
    pub content: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub is_published: bool,
    pub updated_at: DateTime<Utc>,
    pub metadata: Metadata,
    pub private_metadata: Metadata,
}

impl PayloadEntity for Page {
    const OBJECT_TYPE: &'static str = "Page";

    fn object_id(&self) -> String {
        self.id.to_string()
    }
}
