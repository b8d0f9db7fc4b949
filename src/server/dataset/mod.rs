//! Offline ingestion of statistical exports.
//!
//! [`loader`] reads reference files and theme exports from disk, [`theme`] declares which
//! indicators and fallback policy each refresh uses, and [`reconcile`] turns loaded rows into one
//! row per supported city ready for persistence sync.

pub mod loader;
pub mod reconcile;
pub mod theme;
