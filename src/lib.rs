//! Food-waste clearance reporter.
//!
//! Queries the Salling Group food-waste API and renders the clearances it
//! returns as console text, an HTML page with a PDF copy, and a Markdown
//! document.

#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod models;
pub mod pdf;
pub mod services;
