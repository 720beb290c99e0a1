//! Entities owned by other subgraphs
//!
//! This subgraph only knows their ids. Reference resolution returns a stub
//! and the gateway fetches the remaining fields from the owning subgraph.

use async_graphql::{SimpleObject, ID};

/// Platform administrator, owned by the users subgraph
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Admin {
    pub id: ID,
}

/// Marketplace seller, owned by the users subgraph
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Seller {
    pub id: ID,
}

/// Platform user, owned by the users subgraph
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct User {
    pub id: ID,
}

impl Admin {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: ID(id.into()) }
    }
}

impl Seller {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: ID(id.into()) }
    }
}
