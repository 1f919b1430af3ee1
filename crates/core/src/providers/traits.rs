use async_trait::async_trait;

use crate::errors::CoreError;

/// Where the raw CSV text comes from.
///
/// The viewer only needs "give me the whole file as text". Swapping an
/// HTTP fetch for a local file (or a test double) touches nothing else.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DataSource: Send + Sync {
    /// Human-readable description of this source (for logs).
    fn describe(&self) -> String;

    /// Fetch the complete file contents.
    async fn fetch_text(&self) -> Result<String, CoreError>;
}
