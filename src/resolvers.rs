// SPDX-License-Identifier: PMPL-1.0-or-later
//! GraphQL resolvers: query root plus computed and relational entity fields

use async_graphql::{ComplexObject, Context, Object, Result, ID};
use rand::Rng;

use crate::{
    error::AppError,
    models::{Company, Employee, MathOp, Technology},
    store::DataStore,
};

/// GraphQL Query root
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All employees, in declaration order
    async fn employees(&self, ctx: &Context<'_>) -> Result<Vec<Employee>> {
        let store = ctx.data::<DataStore>()?;
        Ok(store.employees().to_vec())
    }

    /// All companies, in declaration order
    async fn companies(&self, ctx: &Context<'_>) -> Result<Vec<Company>> {
        let store = ctx.data::<DataStore>()?;
        Ok(store.companies().to_vec())
    }

    /// All technologies, in declaration order
    async fn technologies(&self, ctx: &Context<'_>) -> Result<Vec<Technology>> {
        let store = ctx.data::<DataStore>()?;
        Ok(store.technologies().to_vec())
    }

    /// Get a single employee by ID. Unknown IDs yield null, not an error.
    async fn employee_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Employee>> {
        let store = ctx.data::<DataStore>()?;
        Ok(store.employee_by_id(id.as_str()).cloned())
    }

    /// Apply an arithmetic operation to two integers.
    ///
    /// Division uses floor semantics; dividing by zero is a query error.
    async fn calculate(&self, op: MathOp, a: i32, b: i32) -> Result<i32> {
        Ok(apply_math_op(op, a, b)?)
    }

    /// Static greeting
    async fn message(&self) -> &'static str {
        "Hello from Graphql"
    }

    /// Uniform random integer in 1..=10
    async fn random_number(&self) -> i32 {
        rand::thread_rng().gen_range(1..=10)
    }

    /// Health check
    async fn health(&self) -> &'static str {
        "OK"
    }
}

impl Employee {
    /// First and last name joined by a single space.
    ///
    /// Kept outside the `#[ComplexObject]` block so it stays directly
    /// callable (the macro rewrites resolver signatures to take a context);
    /// the GraphQL `fullName` field below delegates here.
    pub(crate) async fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name.as_deref().unwrap_or(""))
    }
}

#[ComplexObject]
impl Employee {
    /// First and last name joined by a single space
    #[graphql(name = "fullName")]
    async fn resolve_full_name(&self) -> String {
        self.full_name().await
    }

    /// The employing company; null when the reference is absent or dangling
    async fn company(&self, ctx: &Context<'_>) -> Result<Option<Company>> {
        let store = ctx.data::<DataStore>()?;
        Ok(self
            .company_id
            .as_ref()
            .and_then(|id| store.company_by_id(id.as_str()))
            .cloned())
    }

    /// Full technology records for this employee's reference list
    async fn technologies(&self, ctx: &Context<'_>) -> Result<Vec<Technology>> {
        let store = ctx.data::<DataStore>()?;
        Ok(store
            .technologies_for_employee(self)
            .into_iter()
            .cloned()
            .collect())
    }
}

#[ComplexObject]
impl Company {
    /// Employees referencing this company; empty when none match
    async fn employees(&self, ctx: &Context<'_>) -> Result<Vec<Employee>> {
        let store = ctx.data::<DataStore>()?;
        Ok(store
            .employees_for_company(self.id.as_str())
            .into_iter()
            .cloned()
            .collect())
    }
}

/// Evaluate an arithmetic operation with checked semantics.
///
/// Division is floor division, so `divide(7, 2) == 3` and
/// `divide(-7, 2) == -4`. Division by zero and out-of-range results are
/// reported as errors instead of wrapping.
fn apply_math_op(op: MathOp, a: i32, b: i32) -> crate::error::Result<i32> {
    let overflow = |name: &str| AppError::ArithmeticOverflow(format!("{name}({a}, {b})"));
    match op {
        MathOp::Add => a.checked_add(b).ok_or_else(|| overflow("add")),
        MathOp::Subtract => a.checked_sub(b).ok_or_else(|| overflow("subtract")),
        MathOp::Multiply => a.checked_mul(b).ok_or_else(|| overflow("multiply")),
        MathOp::Divide => {
            if b == 0 {
                return Err(AppError::DivisionByZero);
            }
            let quotient = a.checked_div(b).ok_or_else(|| overflow("divide"))?;
            // `/` truncates toward zero; adjust to floor when signs differ
            if a % b != 0 && (a < 0) != (b < 0) {
                Ok(quotient - 1)
            } else {
                Ok(quotient)
            }
        }
    }
}
