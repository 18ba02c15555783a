// SPDX-License-Identifier: PMPL-1.0-or-later
//! GraphQL schema assembly

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::{resolvers::QueryRoot, store::DataStore};

/// Application GraphQL schema
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema with the data store attached as context data.
pub fn build_schema(store: DataStore) -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}
