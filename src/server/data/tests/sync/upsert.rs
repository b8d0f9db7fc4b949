use chrono::NaiveDate;
use sea_orm::{EntityTrait, TransactionTrait};

use super::*;

fn metrics_row(code: &str, safety_index: Option<f64>) -> ReconciledRow {
    ReconciledRow::new(code).with("safety_index", FieldValue::Number(safety_index))
}

/// Expect Ok with a new record built from the row's fields only
#[tokio::test]
async fn inserts_missing_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", None)
        .build()
        .await?;

    let repo = SyncRepository::new(&test.db);
    let summary = repo
        .upsert::<entity::prelude::Metrics>(&[metrics_row("AT001C", Some(85.1))])
        .await?;

    assert_eq!(
        summary,
        SyncSummary {
            inserted: 1,
            updated: 0
        }
    );

    let stored = entity::prelude::Metrics::find_by_id("AT001C")
        .one(&test.db)
        .await?
        .expect("metrics not stored");
    assert_eq!(stored.safety_index, Some(85.1));
    assert_eq!(stored.public_transport_satisfaction, None);
    assert_eq!(stored.university_count, None);
    assert!(stored.last_updated.is_some());

    Ok(())
}

/// Expect columns absent from the row to keep their stored values
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", None)
        .build()
        .await?;
    let existing = test
        .city()
        .insert_metrics(factory::mock_metrics("AT001C", Some(100.0), Some(50.0)))
        .await?;

    let row = ReconciledRow::new("AT001C")
        .with("public_transport_satisfaction", FieldValue::Number(Some(60.5)));

    let repo = SyncRepository::new(&test.db);
    let summary = repo.upsert::<entity::prelude::Metrics>(&[row]).await?;
    assert_eq!(summary.updated, 1);

    let stored = entity::prelude::Metrics::find_by_id("AT001C")
        .one(&test.db)
        .await?
        .expect("metrics missing");
    assert_eq!(stored.safety_index, Some(100.0));
    assert_eq!(stored.public_transport_satisfaction, Some(60.5));
    assert_eq!(stored.university_count, existing.university_count);
    assert!(stored.last_updated > existing.last_updated);

    Ok(())
}

/// Expect applying the same row twice to leave one record equal to the row
#[tokio::test]
async fn repeated_upsert_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("BE001C", None)
        .build()
        .await?;
    let row = ReconciledRow::new("BE001C")
        .with("monthly_ticket", FieldValue::Number(Some(45.0)))
        .with("source", FieldValue::Text(Some("ESTAT:TEST(1.0)".to_string())))
        .with(
            "source_date",
            FieldValue::Date(NaiveDate::from_ymd_opt(2020, 1, 1)),
        );

    let repo = SyncRepository::new(&test.db);
    let first = repo
        .upsert::<entity::prelude::TransportBudget>(std::slice::from_ref(&row))
        .await?;
    let second = repo
        .upsert::<entity::prelude::TransportBudget>(std::slice::from_ref(&row))
        .await?;

    assert_eq!(first.inserted, 1);
    assert_eq!(second.updated, 1);

    let stored = entity::prelude::TransportBudget::find().all(&test.db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].monthly_ticket, Some(45.0));
    assert_eq!(stored[0].source.as_deref(), Some("ESTAT:TEST(1.0)"));
    assert_eq!(stored[0].source_date, NaiveDate::from_ymd_opt(2020, 1, 1));

    Ok(())
}

/// Expect Err when a row names a column the table does not have
#[tokio::test]
async fn rejects_unknown_column() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", None)
        .build()
        .await?;
    let row = ReconciledRow::new("AT001C").with("monthly_ticket", FieldValue::Number(Some(1.0)));

    let repo = SyncRepository::new(&test.db);
    let result = repo.upsert::<entity::prelude::Metrics>(&[row]).await;

    assert!(result.is_err());

    Ok(())
}

/// Expect no partial writes once an uncommitted transaction is dropped
#[tokio::test]
async fn failed_batch_leaves_no_partial_writes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", None)
        .with_mock_city("BE001C", None)
        .build()
        .await?;
    let rows = vec![
        metrics_row("AT001C", Some(80.0)),
        ReconciledRow::new("BE001C").with("not_a_column", FieldValue::Number(Some(1.0))),
    ];

    {
        let txn = test.db.begin().await?;
        let result = SyncRepository::new(&txn)
            .upsert::<entity::prelude::Metrics>(&rows)
            .await;
        assert!(result.is_err());
    }

    let stored = entity::prelude::Metrics::find().all(&test.db).await?;
    assert!(stored.is_empty());

    Ok(())
}
