use relocity_test_utils::prelude::*;

use crate::server::{
    data::{
        city::CityRepository,
        sync::{SyncRepository, SyncSummary},
    },
    model::dataset::{FieldValue, ReconciledRow},
};

mod city {
    use super::*;

    mod find_overview_records;
    mod find_record;
    mod upsert_many;
}

mod sync {
    use super::*;

    mod upsert;
}
