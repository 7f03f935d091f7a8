//! Utility functions for controller request handling.
//!
//! Reusable helpers shared by the controllers: CSRF token validation for form posts, user
//! session retrieval for protected endpoints, the per-page context handed to views, flash
//! message bookkeeping and form field parsing.

pub mod csrf;
pub mod flash;
pub mod form;
pub mod get_user;
pub mod page;
