//! Data models and serialization helpers.
//!
//! This module contains the notification templates, the request payload sent to
//! the notification API, and the structures the API response is decoded into.
pub mod notification;
pub mod serde_helpers;
