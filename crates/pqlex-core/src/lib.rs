#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the pqlex crates.
//!
//! - **Class table** (`ClassTable`): interns token-class names with the
//!   language postfix applied, handing out cheap `ClassId` handles
//! - **Colors** (`Colors`): ANSI palette keyed by token-class family

mod class_table;
mod colors;

#[cfg(test)]
mod class_table_tests;
#[cfg(test)]
mod colors_tests;

pub use class_table::{ClassId, ClassTable, class_family};
pub use colors::Colors;
