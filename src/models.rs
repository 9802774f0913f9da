//! Records exchanged with the shortening backend
//!
//! The backend owns every record; these are transient, read-only copies.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Text shown when a link has never been visited
pub const NEVER_VISITED: &str = "Never";

/// One shortening mapping and its visit statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub slug: String,
    pub original_url: String,
    pub shortened_link: String,
    #[serde(default)]
    pub visits: u64,
    #[serde(default, deserialize_with = "deserialize_last_visit")]
    pub last_visit_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: bool,
}

impl ShortLink {
    /// Last visit in local time, or "Never"
    pub fn last_visit_display(&self) -> String {
        format_last_visit(self.last_visit_at)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }
}

/// Zoneless layouts some backends emit; read as UTC
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a visit timestamp: RFC 3339 first, then a zoneless time taken as UTC
pub fn parse_visit_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

// An unreadable timestamp degrades to "Never" instead of failing the record,
// so one odd row cannot break a whole list page.
fn deserialize_last_visit<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()).and_then(|s| {
        let parsed = parse_visit_timestamp(&s);
        if parsed.is_none() {
            warn!("Ignoring unreadable last_visit_at: {:?}", s);
        }
        parsed
    }))
}

pub fn format_last_visit(last_visit_at: Option<DateTime<Utc>>) -> String {
    match last_visit_at {
        Some(at) => at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => NEVER_VISITED.to_string(),
    }
}

/// Pagination metadata reported by the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// `GET /api/urls` response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPage {
    #[serde(default)]
    pub data: Vec<ShortLink>,
    #[serde(default)]
    pub meta: PageMeta,
}

/// `POST /api/urls` request body: `{ "url": { "original_url": ... } }`
#[derive(Debug, Clone, Serialize)]
pub struct CreateLinkRequest {
    pub url: NewUrl,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUrl {
    pub original_url: String,
}

impl CreateLinkRequest {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            url: NewUrl {
                original_url: original_url.into(),
            },
        }
    }
}

/// Raw create response; the backend answers with either `short_url` or
/// `shortened_link`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateLinkResponse {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub shortened_link: Option<String>,
}

/// A freshly created short link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub slug: Option<String>,
    pub short_link: String,
}

impl CreateLinkResponse {
    /// Normalise into a [`CreatedLink`]; `None` when no short link is present
    pub fn into_created(self) -> Option<CreatedLink> {
        let short_link = self
            .short_url
            .filter(|s| !s.is_empty())
            .or(self.shortened_link.filter(|s| !s.is_empty()))?;
        Some(CreatedLink {
            slug: self.slug,
            short_link,
        })
    }
}

/// Error body of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
