//! Field-by-field upsert of reconciled rows into sub-record tables.
//!
//! Each row is matched on its city code. An existing record keeps every column the row does not
//! name; a missing record is created from the row's columns alone. `last_updated` is stamped on
//! every write. Records are never deleted here.
//!
//! The repository does not open a transaction itself: callers pass a `DatabaseTransaction` so a
//! whole batch commits or rolls back together.

use std::str::FromStr;

use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, Value,
};

use crate::server::model::dataset::ReconciledRow;

/// A table whose rows are keyed by city code and carry a `last_updated` stamp.
pub trait CodeKeyedEntity: EntityTrait {
    fn code_column() -> Self::Column;
    fn last_updated_column() -> Self::Column;
}

macro_rules! code_keyed_entity {
    ($($module:ident),+ $(,)?) => {
        $(
            impl CodeKeyedEntity for entity::$module::Entity {
                fn code_column() -> Self::Column {
                    entity::$module::Column::EurostatCode
                }

                fn last_updated_column() -> Self::Column {
                    entity::$module::Column::LastUpdated
                }
            }
        )+
    };
}

code_keyed_entity!(
    climate,
    cost_of_living,
    guide,
    housing,
    metrics,
    transport_budget
);

/// Outcome counts of one upsert batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub inserted: usize,
    pub updated: usize,
}

pub struct SyncRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SyncRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts every row into the table of `E`.
    ///
    /// Stops at the first failing row. An unknown column name or a value of the wrong type is
    /// reported as `DbErr::Custom`/`DbErr::Type` before anything is written for that row.
    ///
    /// # Returns
    /// - `Ok(SyncSummary)` - How many records were inserted and updated
    /// - `Err(DbErr)` - A row could not be written; the caller's transaction should be dropped
    pub async fn upsert<E>(&self, rows: &[ReconciledRow]) -> Result<SyncSummary, DbErr>
    where
        E: CodeKeyedEntity,
        E::Model: IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    {
        let mut summary = SyncSummary::default();
        let now = Utc::now().naive_utc();

        for row in rows {
            let existing = E::find()
                .filter(E::code_column().eq(row.eurostat_code.as_str()))
                .one(self.db)
                .await?;

            let is_new = existing.is_none();
            let mut record = match existing {
                Some(model) => model.into_active_model(),
                None => {
                    let mut record = <E::ActiveModel as ActiveModelTrait>::default();
                    record.try_set(
                        E::code_column(),
                        Value::from(row.eurostat_code.clone()),
                    )?;
                    record
                }
            };

            for (name, value) in &row.fields {
                let column = E::Column::from_str(name).map_err(|_| {
                    DbErr::Custom(format!(
                        "Table {} has no column `{}`",
                        E::default().table_name(),
                        name
                    ))
                })?;
                record.try_set(column, value.clone().into())?;
            }
            record.try_set(E::last_updated_column(), Value::from(Some(now)))?;

            if is_new {
                record.insert(self.db).await?;
                summary.inserted += 1;
            } else {
                record.update(self.db).await?;
                summary.updated += 1;
            }
        }

        Ok(summary)
    }
}
