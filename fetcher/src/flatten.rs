use crate::models::{FlatRow, VideoRecord};

pub const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";
pub const CAPTIONS_PLACEHOLDER: &str = "Not Fetched";

pub fn flatten(records: &[VideoRecord]) -> Vec<FlatRow> {
    records.iter().map(flatten_record).collect()
}

pub fn flatten_record(record: &VideoRecord) -> FlatRow {
    let snippet = record.snippet.clone().unwrap_or_default();
    let statistics = record.statistics.clone().unwrap_or_default();
    let content_details = record.content_details.clone().unwrap_or_default();
    let topic_details = record.topic_details.clone().unwrap_or_default();
    let recording_details = record.recording_details.clone().unwrap_or_default();

    FlatRow {
        video_url: format!("{WATCH_URL_BASE}{}", record.id.as_deref().unwrap_or_default()),
        title: snippet.title,
        description: snippet.description,
        channel_title: snippet.channel_title,
        keyword_tags: snippet.tags.unwrap_or_default().join(", "),
        category: snippet.category_id,
        topic_details: topic_details.topic_categories.unwrap_or_default().join(", "),
        published_date: snippet.published_at,
        video_duration: content_details.duration,
        view_count: statistics.view_count,
        comment_count: statistics.comment_count,
        // The API reports "true"/"false" here, so this is only set for
        // values that literally mention "caption".
        captions_availability: content_details
            .caption
            .as_deref()
            .is_some_and(|flag| flag.contains("caption")),
        captions_text: CAPTIONS_PLACEHOLDER.to_string(),
        recording_location: recording_details
            .location
            .filter(|location| !location.is_null())
            .map(|location| location.to_string()),
    }
}
