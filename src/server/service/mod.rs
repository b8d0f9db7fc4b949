//! Service layer for business logic and orchestration.
//!
//! [`city`] serves the read API from stored city aggregates, [`enrichment`] derives the
//! user-facing fields from a loaded aggregate, and [`refresh`] runs the batch jobs that load,
//! reconcile and persist statistical exports.

pub mod city;
pub mod enrichment;
pub mod refresh;
