use crate::error::FetchError;
use crate::models::{SearchPage, SearchRequest, VideoListResponse};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

pub const SEARCH_PARTS: &str = "id,snippet";
pub const VIDEO_PARTS: &str = "snippet,statistics,contentDetails,topicDetails,recordingDetails";

/// Paged `search.list`, restricted to video results.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, FetchError>;
}

/// `videos.list` for a batch of ids.
#[async_trait]
pub trait VideoLookupApi: Send + Sync {
    async fn lookup(&self, video_ids: &[String]) -> Result<VideoListResponse, FetchError>;
}

#[async_trait]
impl<T: SearchApi + ?Sized> SearchApi for &T {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, FetchError> {
        (**self).search(request).await
    }
}

#[async_trait]
impl<T: VideoLookupApi + ?Sized> VideoLookupApi for &T {
    async fn lookup(&self, video_ids: &[String]) -> Result<VideoListResponse, FetchError> {
        (**self).lookup(video_ids).await
    }
}

/// YouTube Data API v3 over HTTP.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: Client,
    api_key: String,
    base_url: Url,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, FetchError> {
        Ok(Self::with_client(Client::new(), api_key, Url::parse(base_url)?))
    }

    pub fn with_client(http: Client, api_key: impl Into<String>, base_url: Url) -> Self {
        YouTubeClient {
            http,
            api_key: api_key.into(),
            base_url,
        }
    }

    fn endpoint(&self, resource: &str) -> Result<Url, FetchError> {
        // Keep the base path (".../youtube/v3") when joining.
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(resource)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

// Documentation: https://developers.google.com/youtube/v3/docs/search/list
#[async_trait]
impl SearchApi for YouTubeClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, FetchError> {
        let mut url = self.endpoint("search")?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("part", SEARCH_PARTS)
                .append_pair("type", "video")
                .append_pair("q", &request.query)
                .append_pair("maxResults", &request.max_results.to_string());
            if let Some(token) = &request.page_token {
                query.append_pair("pageToken", token);
            }
            query.append_pair("key", &self.api_key);
        }

        debug!(
            "search q={:?} maxResults={} pageToken={:?}",
            request.query, request.max_results, request.page_token
        );
        self.get_json(url).await
    }
}

// Documentation: https://developers.google.com/youtube/v3/docs/videos/list
#[async_trait]
impl VideoLookupApi for YouTubeClient {
    async fn lookup(&self, video_ids: &[String]) -> Result<VideoListResponse, FetchError> {
        let mut url = self.endpoint("videos")?;
        url.query_pairs_mut()
            .append_pair("part", VIDEO_PARTS)
            .append_pair("id", &video_ids.join(","))
            .append_pair("key", &self.api_key);

        debug!("videos.list for {} ids", video_ids.len());
        self.get_json(url).await
    }
}

/// Pulls `error.message` out of a Google API error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}
