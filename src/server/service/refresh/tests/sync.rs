use crate::server::model::dataset::{FieldValue, ReconciledRow};

use super::*;

/// Expect the whole batch to be rolled back when one row fails
#[tokio::test]
async fn failing_row_rolls_back_batch() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", None)
        .build()
        .await?;
    test.city().insert_mock_city("AT002C").await?;
    let loader = loader(&test);
    let mapping = name_mapping(&test);
    let rows = vec![
        ReconciledRow::new("AT001C").with("monthly_ticket", FieldValue::Number(Some(51.0))),
        ReconciledRow::new("AT002C").with("no_such_column", FieldValue::Number(Some(1.0))),
    ];

    let service = RefreshService::new(&test.db, &loader, &mapping);
    let result = service
        .sync::<entity::prelude::TransportBudget>(&rows)
        .await;

    assert!(result.is_err());

    let stored = entity::prelude::TransportBudget::find().all(&test.db).await?;
    assert!(stored.is_empty());

    Ok(())
}
