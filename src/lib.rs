// SPDX-License-Identifier: PMPL-1.0-or-later
//! GraphQL employee directory API
//!
//! A read-only GraphQL server over three fixed in-memory collections
//! (employees, companies, technologies) plus a calculator-style arithmetic
//! query. Data is seeded once at startup; resolvers never write, so requests
//! need no coordination.

pub mod error;
pub mod models;
pub mod resolvers;
pub mod schema;
pub mod store;
