//! In-memory stand-ins for the YouTube API used by the stage tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use yt_dataset_fetcher::models::{
    ContentDetails, SearchPage, SearchRequest, SearchResultId, SearchResultItem, Snippet,
    Statistics, VideoListResponse, VideoRecord,
};
use yt_dataset_fetcher::{FetchError, Pacer, SearchApi, VideoLookupApi};

pub fn quota_exceeded() -> FetchError {
    FetchError::Api {
        status: 403,
        message: "quotaExceeded".to_string(),
    }
}

pub fn video_id(n: usize) -> String {
    format!("vid{n:04}")
}

pub fn search_item(id: &str) -> SearchResultItem {
    SearchResultItem {
        id: Some(SearchResultId {
            kind: Some("youtube#video".to_string()),
            video_id: Some(id.to_string()),
        }),
    }
}

pub fn full_record(id: &str) -> VideoRecord {
    VideoRecord {
        id: Some(id.to_string()),
        snippet: Some(Snippet {
            title: Some(format!("Video {id}")),
            channel_title: Some("Jazz Channel".to_string()),
            tags: Some(vec!["jazz".to_string()]),
            ..Snippet::default()
        }),
        statistics: Some(Statistics {
            view_count: Some("100".to_string()),
            comment_count: Some("5".to_string()),
        }),
        content_details: Some(ContentDetails {
            duration: Some("PT3M".to_string()),
            caption: Some("false".to_string()),
        }),
        ..VideoRecord::default()
    }
}

/// Serves `total` generated ids, honouring `maxResults` and handing out
/// `page-N` tokens while results remain.
pub struct FakeSearch {
    total: usize,
    fail_on_call: Option<usize>,
    ignore_page_size: Option<usize>,
    pub requests: Mutex<Vec<SearchRequest>>,
}

impl FakeSearch {
    pub fn with_results(total: usize) -> Self {
        FakeSearch {
            total,
            fail_on_call: None,
            ignore_page_size: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails the `call`-th request (1-based).
    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Always returns `size` items, whatever was asked for.
    pub fn oversized_pages(mut self, size: usize) -> Self {
        self.ignore_page_size = Some(size);
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn recorded(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchApi for FakeSearch {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, FetchError> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };
        if self.fail_on_call == Some(call) {
            return Err(quota_exceeded());
        }

        let offset: usize = match &request.page_token {
            Some(token) => token.trim_start_matches("offset-").parse().unwrap(),
            None => 0,
        };
        let size = self.ignore_page_size.unwrap_or(request.max_results);
        let end = (offset + size).min(self.total);

        Ok(SearchPage {
            items: (offset..end).map(|n| search_item(&video_id(n))).collect(),
            next_page_token: (end < self.total).then(|| format!("offset-{end}")),
        })
    }
}

/// Returns a full record for every requested id except the `missing` ones.
pub struct FakeLookup {
    missing: HashSet<String>,
    fail_on_call: Option<usize>,
    pub batches: Mutex<Vec<Vec<String>>>,
}

impl FakeLookup {
    pub fn new() -> Self {
        FakeLookup {
            missing: HashSet::new(),
            fail_on_call: None,
            batches: Mutex::new(Vec::new()),
        }
    }

    pub fn without(mut self, ids: &[&str]) -> Self {
        self.missing = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    pub fn calls(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batches.lock().unwrap().iter().map(Vec::len).collect()
    }
}

#[async_trait]
impl VideoLookupApi for FakeLookup {
    async fn lookup(&self, video_ids: &[String]) -> Result<VideoListResponse, FetchError> {
        let call = {
            let mut batches = self.batches.lock().unwrap();
            batches.push(video_ids.to_vec());
            batches.len()
        };
        if self.fail_on_call == Some(call) {
            return Err(quota_exceeded());
        }

        Ok(VideoListResponse {
            items: video_ids
                .iter()
                .filter(|id| !self.missing.contains(*id))
                .map(|id| full_record(id))
                .collect(),
        })
    }
}

/// Both capabilities behind one value, like the real client.
pub struct FakeYouTube {
    pub search: FakeSearch,
    pub lookup: FakeLookup,
}

#[async_trait]
impl SearchApi for FakeYouTube {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, FetchError> {
        self.search.search(request).await
    }
}

#[async_trait]
impl VideoLookupApi for FakeYouTube {
    async fn lookup(&self, video_ids: &[String]) -> Result<VideoListResponse, FetchError> {
        self.lookup.lookup(video_ids).await
    }
}

#[derive(Default)]
pub struct CountingPacer {
    pauses: AtomicUsize,
}

impl CountingPacer {
    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Pacer for CountingPacer {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}
