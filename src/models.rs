// SPDX-License-Identifier: PMPL-1.0-or-later
//! Data models for the employee directory

use async_graphql::{Enum, SimpleObject, ID};
use serde::{Deserialize, Serialize};

/// An employee record.
///
/// `company_id` and `technology_ids` are plain identifier references into the
/// company and technology collections; the traversals that resolve them live
/// on the complex-object impls in [`crate::resolvers`]. A dangling reference
/// resolves to absence, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Employee {
    /// Unique employee identifier
    pub id: ID,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Seniority level
    pub job_level: Option<i32>,
    /// Reference to the employing company
    pub company_id: Option<ID>,
    /// References to known technologies
    pub technology_ids: Option<Vec<ID>>,
}

/// A company record.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Company {
    /// Unique company identifier
    pub id: ID,
    pub name: String,
}

/// A technology record.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    /// Unique technology identifier
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
}

/// Arithmetic operation selector for the calculator query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum MathOp {
    Add,
    Subtract,
    Multiply,
    /// Integer floor division
    Divide,
}
