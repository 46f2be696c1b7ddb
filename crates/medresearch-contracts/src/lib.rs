//! # medresearch-contracts
//!
//! Shared record types and error contracts for the MedResearch dashboard.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate: only data definitions, the `Lookup` result, and error types.

pub mod alert;
pub mod case;
pub mod document;
pub mod error;
pub mod evidence;
pub mod lookup;
pub mod overview;
pub mod user;
