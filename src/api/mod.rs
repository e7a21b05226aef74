pub mod client;
pub mod fetchers;
pub mod model;

use crate::error::AppResult;
use model::{CategoryDetail, ItemDetail, ResourceIndex};

/// Seam between the pipeline and the upstream API. The aggregation and
/// discovery code only talks to this trait, so tests can run the full
/// pipeline against a canned source.
#[allow(async_fn_in_trait)]
pub trait ItemSource {
    async fn category_index(&self) -> AppResult<ResourceIndex>;
    async fn category_detail(&self, url: &str) -> AppResult<CategoryDetail>;
    async fn item_detail(&self, url: &str) -> AppResult<ItemDetail>;
}
