//! Server application core modules.
//!
//! This module contains all server-side functionality for DocRack: configuration, HTTP routing,
//! authentication, session handling and database access for racks, equipment, ports and
//! connections.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
