use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of `search.list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<SearchResultItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResultItem {
    pub id: Option<SearchResultId>,
}

impl SearchResultItem {
    pub fn video_id(&self) -> Option<&str> {
        self.id.as_ref()?.video_id.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
}

/// Parameters of a single paged search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: usize,
    pub page_token: Option<String>,
}

/// Response of `videos.list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoRecord>,
}

// Every category may be missing on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoRecord {
    pub id: Option<String>,
    pub snippet: Option<Snippet>,
    pub statistics: Option<Statistics>,
    pub content_details: Option<ContentDetails>,
    pub topic_details: Option<TopicDetails>,
    pub recording_details: Option<RecordingDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snippet {
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel_title: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category_id: Option<String>,
    pub published_at: Option<String>,
}

/// Counts arrive as decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub view_count: Option<String>,
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentDetails {
    pub duration: Option<String>,
    /// `"true"` or `"false"`.
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopicDetails {
    pub topic_categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordingDetails {
    pub location: Option<Value>,
}

/// One exported row. Field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlatRow {
    #[serde(rename = "Video URL")]
    pub video_url: String,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Channel Title")]
    pub channel_title: Option<String>,
    #[serde(rename = "Keyword Tags")]
    pub keyword_tags: String,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Topic Details")]
    pub topic_details: String,
    #[serde(rename = "Published Date")]
    pub published_date: Option<String>,
    #[serde(rename = "Video Duration")]
    pub video_duration: Option<String>,
    #[serde(rename = "View Count")]
    pub view_count: Option<String>,
    #[serde(rename = "Comment Count")]
    pub comment_count: Option<String>,
    #[serde(rename = "Captions Availability")]
    pub captions_availability: bool,
    #[serde(rename = "Captions Text")]
    pub captions_text: String,
    #[serde(rename = "Location of Recording")]
    pub recording_location: Option<String>,
}

pub const FLAT_ROW_COLUMNS: [&str; 14] = [
    "Video URL",
    "Title",
    "Description",
    "Channel Title",
    "Keyword Tags",
    "Category",
    "Topic Details",
    "Published Date",
    "Video Duration",
    "View Count",
    "Comment Count",
    "Captions Availability",
    "Captions Text",
    "Location of Recording",
];
