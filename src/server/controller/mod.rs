//! HTTP controller endpoints for the relocity read API.
//!
//! Controllers extract request parameters, call the city service and map its results onto HTTP
//! responses. Every handler carries a utoipa path annotation for the OpenAPI document.

pub mod city;
