//! sea-orm entities for the relocity schema.
//!
//! `cities` is the aggregation root. Every other table references it through
//! `eurostat_code` and is removed with it (`ON DELETE CASCADE`).

pub mod prelude;

pub mod city;
pub mod climate;
pub mod cost_of_living;
pub mod guide;
pub mod housing;
pub mod metrics;
pub mod transport_budget;
pub mod university;
