//! Core business logic for the royalty service.
//!
//! This crate contains pure business logic with ZERO web or storage dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Royalty earnings, balances and withdrawal admission

pub mod ledger;
