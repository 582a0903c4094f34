//! # adminjo-core
//!
//! Schedule core of the AdminJO dashboard.
//!
//! This crate provides the types and pure computations behind the sessions
//! management screen:
//! - Entity structs for venues, disciplines, épreuves and sessions
//! - Session status resolution against an injectable clock
//! - The cascading filter engine and its selection transition rules
//! - Catalog listings, status tallies and CLI response types
//! - A session-expiry notification channel

pub mod catalog;
pub mod clock;
pub mod collation;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod notify;
pub mod responses;
pub mod selection;
pub mod stats;
pub mod status;
