#![forbid(unsafe_code)]

pub mod common;
pub mod dialogue;
pub mod event;

pub use common::{ContractViolation, ReasonCodeId, SchemaVersion, Validate};
