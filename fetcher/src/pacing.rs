use async_trait::async_trait;
use std::time::Duration;

/// Delay taken after every remote call to stay under the API rate limit.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        FixedDelay(Duration::from_secs(1))
    }
}

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self) {}
}

#[async_trait]
impl<P: Pacer + ?Sized> Pacer for &P {
    async fn pause(&self) {
        (**self).pause().await;
    }
}
