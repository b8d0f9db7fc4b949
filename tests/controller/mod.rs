//! Tests for the read API handlers and router.

mod get_cities;
mod get_city;
mod router;

use relocity_test_utils::prelude::*;

use crate::util::TestContextExt;
