//! Server application core modules.
//!
//! This module contains the read API (routing, controllers, the city service and enrichment),
//! the batch refresh pipeline (dataset loading, reconciliation and persistence sync), and the
//! configuration, error and startup plumbing shared by both binaries.

pub mod config;
pub mod controller;
pub mod data;
pub mod dataset;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
