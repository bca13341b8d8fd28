//! # Invoices Module
//!
//! This module handles all invoice-related functionality including:
//! - Invoice CRUD operations
//! - The paid/paid_date state machine on updates
//! - Single-invoice fetch with its company embedded

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::invoices_routes;
