//! DataLoaders for post and category relations
//!
//! A listing resolves each node's relations independently; these loaders
//! collect the keys of one execution tick and answer them with one query.
//! `BlogCategoryLoader` maps a key to at most one category,
//! `SubcategoriesByCategoryLoader` maps a key to a (possibly empty) list.

mod blog_category;
mod subcategories_by_category;

pub use blog_category::BlogCategoryLoader;
pub use subcategories_by_category::SubcategoriesByCategoryLoader;
