//! Converts pipeline stage names to actual stage code.
//!
//! # Example
//!
//! To get the user aggregation stage:
//! ```
//! # use anyhow::Result;
//! // This is the correct import to use if you are outside the crate:
//! use mrplace::workload;
//! // Since you will be working within the `mrplace` crate,
//! // you should write `use crate::workload;` instead.
//! # fn main() -> Result<()> {
//! let user = workload::named("user")?;
//! # Ok(())
//! # }
//! ```

use crate::Workload;
use anyhow::{bail, Result};
use itertools::Itertools;

pub mod quantity;
pub mod sorter;
pub mod user;

/// Names of all registered stages, in pipeline order.
pub const NAMES: [&str; 3] = ["user", "quantity", "move-sorter"];

/// Gets the [`Workload`] named `name`.
///
/// Returns [`None`] if no stage with the given name was found.
pub fn try_named(name: &str) -> Option<Workload> {
    match name {
        "user" => Some(Workload {
            mapper: || Ok(Box::new(user::UserMapper::new()?)),
            reducer: || Box::new(user::UserReducer::new()),
        }),
        "quantity" => Some(Workload {
            mapper: || Ok(Box::new(quantity::QuantityMapper::new())),
            reducer: || Box::new(quantity::QuantityReducer::new()),
        }),
        "move-sorter" => Some(Workload {
            mapper: || Ok(Box::new(sorter::SorterMapper::new())),
            reducer: || Box::new(sorter::SorterReducer::new()),
        }),
        _ => None,
    }
}

/// Gets the [`Workload`] named `name`.
///
/// Returns an [`anyhow::Error`] if no stage with the given name was found.
pub fn named(name: &str) -> Result<Workload> {
    match try_named(name) {
        Some(stage) => Ok(stage),
        None => bail!(
            "No stage named `{}` found. Known stages: {}.",
            name,
            NAMES.iter().join(", ")
        ),
    }
}
