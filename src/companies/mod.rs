//! # Companies Module
//!
//! This module handles all company-related functionality including:
//! - Company CRUD operations
//! - Company code (slug) derivation from display names
//! - Single-company fetch with the ids of its invoices embedded

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::companies_routes;
