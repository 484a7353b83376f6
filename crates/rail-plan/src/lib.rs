//! `rail-plan` — hold directives and dispatch plans.
//!
//! # Crate layout
//!
//! | Module    | Contents                                |
//! |-----------|------------------------------------------|
//! | [`hold`]  | `HoldDirective`, `Plan`                 |
//! | [`index`] | `HoldIndex` — materialized deadline map |
//! | [`error`] | `PlanError`, `PlanResult<T>`            |

pub mod error;
pub mod hold;
pub mod index;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use hold::{HoldDirective, Plan};
pub use index::HoldIndex;
