//! End-to-end runs of the refresh jobs followed by the read API.

mod refresh_then_read;

use relocity_test_utils::prelude::*;

use crate::util::TestContextExt;
