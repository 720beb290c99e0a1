//! Blog category DataLoader for batched fetching
//!
//! Batches the `category` lookups of every post in a listing into a single
//! query.

use async_graphql::dataloader::Loader;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::BlogCategory;
use crate::repositories::BlogRepository;

/// DataLoader for batching blog category queries
#[derive(Clone)]
pub struct BlogCategoryLoader {
    blogs: BlogRepository,
}

impl BlogCategoryLoader {
    pub fn new(blogs: BlogRepository) -> Self {
        Self { blogs }
    }
}

impl Loader<i32> for BlogCategoryLoader {
    type Value = BlogCategory;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let categories = self
            .blogs
            .find_categories_by_ids(keys)
            .await
            .map_err(Arc::new)?;

        Ok(categories.into_iter().map(|c| (c.id, c)).collect())
    }
}
