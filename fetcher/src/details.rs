use crate::models::VideoRecord;
use crate::pacing::Pacer;
use crate::youtube::VideoLookupApi;
use log::{error, info};

/// `videos.list` accepts at most this many ids per call.
pub const BATCH_SIZE: usize = 50;

pub struct DetailFetcher<L, P> {
    api: L,
    pacer: P,
}

impl<L: VideoLookupApi, P: Pacer> DetailFetcher<L, P> {
    pub fn new(api: L, pacer: P) -> Self {
        DetailFetcher { api, pacer }
    }

    /// Fetches full records for `video_ids` in batches of [`BATCH_SIZE`].
    ///
    /// Records come back in whatever order the API returns them and ids that
    /// no longer exist are simply missing. The first failed batch ends the run
    /// with the records from earlier batches.
    pub async fn fetch_details(&self, video_ids: &[String]) -> Vec<VideoRecord> {
        let mut records = Vec::new();

        for (index, batch) in video_ids.chunks(BATCH_SIZE).enumerate() {
            let result = self.api.lookup(batch).await;
            self.pacer.pause().await;

            match result {
                Ok(response) => {
                    info!(
                        "Batch {}: {} of {} videos returned",
                        index + 1,
                        response.items.len(),
                        batch.len()
                    );
                    records.extend(response.items);
                }
                Err(e) => {
                    error!("Error fetching video details: {e}");
                    break;
                }
            }
        }

        records
    }
}
