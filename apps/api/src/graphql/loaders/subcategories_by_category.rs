//! Subcategories-by-Category DataLoader for batched fetching
//!
//! Returns every subcategory of each requested community category, so the
//! `communityCategories` tree loads in two queries.

use async_graphql::dataloader::Loader;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::CommunitySubcategory;
use crate::repositories::CommunityRepository;

/// DataLoader for batching subcategories-by-category queries
#[derive(Clone)]
pub struct SubcategoriesByCategoryLoader {
    community: CommunityRepository,
}

impl SubcategoriesByCategoryLoader {
    pub fn new(community: CommunityRepository) -> Self {
        Self { community }
    }
}

impl Loader<i32> for SubcategoriesByCategoryLoader {
    type Value = Vec<CommunitySubcategory>;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let subcategories = self
            .community
            .find_subcategories_by_category_ids(keys)
            .await
            .map_err(Arc::new)?;

        let mut result: HashMap<i32, Vec<CommunitySubcategory>> = HashMap::new();
        for subcategory in subcategories {
            result
                .entry(subcategory.community_category_id)
                .or_default()
                .push(subcategory);
        }

        // Categories without subcategories still get an entry
        for key in keys {
            result.entry(*key).or_default();
        }

        Ok(result)
    }
}
