use crate::models::SearchRequest;
use crate::pacing::Pacer;
use crate::youtube::SearchApi;
use log::{debug, error, info};

/// Largest page `search.list` will serve.
pub const MAX_PAGE_SIZE: usize = 50;

/// Walks paged search results until enough video ids are collected.
pub struct SearchCollector<S, P> {
    api: S,
    pacer: P,
}

impl<S: SearchApi, P: Pacer> SearchCollector<S, P> {
    pub fn new(api: S, pacer: P) -> Self {
        SearchCollector { api, pacer }
    }

    /// Collects up to `target` video ids for `query`.
    ///
    /// Stops early when the results run out or a call fails; whatever was
    /// gathered before that point is returned. Ids are not deduplicated.
    pub async fn collect(&self, query: &str, target: usize) -> Vec<String> {
        let mut video_ids: Vec<String> = Vec::new();
        let mut page_token: Option<String> = None;

        while video_ids.len() < target {
            let request = SearchRequest {
                query: query.to_string(),
                max_results: MAX_PAGE_SIZE.min(target - video_ids.len()),
                page_token: page_token.take(),
            };

            let result = self.api.search(&request).await;
            self.pacer.pause().await;

            match result {
                Ok(page) => {
                    let before = video_ids.len();
                    video_ids.extend(
                        page.items
                            .iter()
                            .filter_map(|item| item.video_id())
                            .map(String::from),
                    );
                    debug!("Search page added {} ids", video_ids.len() - before);

                    match page.next_page_token {
                        Some(token) => page_token = Some(token),
                        None => break,
                    }
                }
                Err(e) => {
                    error!("Error during search: {e}");
                    break;
                }
            }
        }

        video_ids.truncate(target);
        info!("Collected {} video ids for {query:?}", video_ids.len());
        video_ids
    }
}
