//! Word lookup against a remote dictionary API.
//!
//! The library normalizes a query, classifies the dictionary response into a
//! [`models::LookupOutcome`], and renders that outcome as an HTML fragment.
//! [`api`] serves the page and rendered fragments over HTTP; [`session`] drives
//! a full lookup view with a persisted last word.

pub mod api;
pub mod audio;
pub mod config;
pub mod db;
pub mod lookup;
pub mod models;
pub mod render;
pub mod session;
pub mod store;
