use crate::domain::model::RawResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Transport used by the lookup client. Errors returned here are reported as
/// transport failures, never propagated.
#[async_trait]
pub trait AvatarSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<RawResponse>;
}
