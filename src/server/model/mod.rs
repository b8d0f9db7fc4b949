//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers, database model type
//! aliases with the loaded city aggregate, and the in-memory tables passed between the dataset
//! loader, reconciliation and persistence sync.

pub mod app;
pub mod dataset;
pub mod db;
