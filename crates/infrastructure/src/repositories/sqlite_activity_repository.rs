use crate::database::{activity, run_blocking, SqlitePool};
use async_trait::async_trait;
use diesel::prelude::*;
use domain::{ActivityRepository, ActivitySample, DomainError};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = activity)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct ActivityModel {
    timestamp: i64,
    uploaded: i64,
    time_active: i64,
}

#[derive(Insertable)]
#[diesel(table_name = activity)]
struct NewActivityModel {
    hash: String,
    timestamp: i64,
    uploaded: i64,
    time_active: i64,
}

impl From<ActivityModel> for ActivitySample {
    fn from(model: ActivityModel) -> Self {
        ActivitySample::new(model.timestamp, model.uploaded, model.time_active)
    }
}

pub struct SqliteActivityRepository {
    pool: SqlitePool,
}

impl SqliteActivityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for SqliteActivityRepository {
    async fn find_by_hash(&self, hash: &str) -> Result<Vec<ActivitySample>, DomainError> {
        let hash = hash.to_string();
        let result = run_blocking(&self.pool, move |conn| {
            activity::table
                .filter(activity::hash.eq(hash))
                .order((activity::timestamp.asc(), activity::id.asc()))
                .select(ActivityModel::as_select())
                .load::<ActivityModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(|model| model.into()).collect())
    }

    async fn append(&self, hash: &str, sample: &ActivitySample) -> Result<(), DomainError> {
        let new_sample = NewActivityModel {
            hash: hash.to_string(),
            timestamp: sample.timestamp,
            uploaded: sample.uploaded,
            time_active: sample.time_active,
        };

        run_blocking(&self.pool, move |conn| {
            diesel::insert_into(activity::table)
                .values(&new_sample)
                .execute(conn)
        })
        .await?;

        Ok(())
    }

    async fn delete_by_hash(&self, hash: &str) -> Result<usize, DomainError> {
        let hash = hash.to_string();
        run_blocking(&self.pool, move |conn| {
            diesel::delete(activity::table.filter(activity::hash.eq(hash))).execute(conn)
        })
        .await
    }
}
