use crate::collector::SearchCollector;
use crate::details::DetailFetcher;
use crate::flatten::flatten;
use crate::models::FlatRow;
use crate::pacing::Pacer;
use crate::youtube::{SearchApi, VideoLookupApi};
use log::info;

/// Search, then enrich, then flatten. Each stage runs on whatever the
/// previous one produced, so a failed search still yields an (empty) dataset.
pub async fn build_dataset<A, P>(api: &A, pacer: &P, query: &str, target: usize) -> Vec<FlatRow>
where
    A: SearchApi + VideoLookupApi,
    P: Pacer,
{
    println!("Searching videos...");
    let video_ids = SearchCollector::new(api, pacer).collect(query, target).await;

    println!("Fetching video details...");
    let records = DetailFetcher::new(api, pacer).fetch_details(&video_ids).await;
    info!(
        "Fetched details for {} of {} videos",
        records.len(),
        video_ids.len()
    );

    println!("Processing video data...");
    flatten(&records)
}
