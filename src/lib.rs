//! Product catalog browser.
//!
//! Fetches a product list, filters it by category and title search, and
//! keeps an in-memory basket. The filtering engine and basket live in
//! [`catalog`]; the page state machine in [`ui::catalog`].

pub mod catalog;
pub mod config;
pub mod logging;
pub mod source;
pub mod ui;
