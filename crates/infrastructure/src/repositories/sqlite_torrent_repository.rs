use crate::database::{run_blocking, torrents, SqlitePool};
use async_trait::async_trait;
use diesel::prelude::*;
use domain::{DomainError, Torrent, TorrentRepository};

// Database model - separate from domain entity
#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = torrents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct TorrentModel {
    hash: String,
    name: String,
    size: i64,
    added_on: i64,
    last_activity: i64,
}

impl From<TorrentModel> for Torrent {
    fn from(model: TorrentModel) -> Self {
        Torrent::new(
            model.hash,
            model.name,
            model.size,
            model.added_on,
            model.last_activity,
        )
    }
}

impl From<&Torrent> for TorrentModel {
    fn from(torrent: &Torrent) -> Self {
        TorrentModel {
            hash: torrent.hash.clone(),
            name: torrent.name.clone(),
            size: torrent.size,
            added_on: torrent.added_on,
            last_activity: torrent.last_activity,
        }
    }
}

pub struct SqliteTorrentRepository {
    pool: SqlitePool,
}

impl SqliteTorrentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TorrentRepository for SqliteTorrentRepository {
    async fn find_all(&self) -> Result<Vec<Torrent>, DomainError> {
        let result = run_blocking(&self.pool, |conn| {
            torrents::table
                .order(torrents::added_on.asc())
                .select(TorrentModel::as_select())
                .load::<TorrentModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(|model| model.into()).collect())
    }

    async fn find_by_hash(&self, hash: &str) -> Result<Option<Torrent>, DomainError> {
        let hash = hash.to_string();
        let result = run_blocking(&self.pool, move |conn| {
            torrents::table
                .filter(torrents::hash.eq(hash))
                .select(TorrentModel::as_select())
                .first::<TorrentModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(|model| model.into()))
    }

    async fn save(&self, torrent: &Torrent) -> Result<Torrent, DomainError> {
        let new_torrent = TorrentModel::from(torrent);
        let hash = torrent.hash.clone();

        let result = run_blocking(&self.pool, move |conn| {
            diesel::replace_into(torrents::table)
                .values(&new_torrent)
                .execute(conn)?;

            torrents::table
                .filter(torrents::hash.eq(hash))
                .select(TorrentModel::as_select())
                .first::<TorrentModel>(conn)
        })
        .await?;

        Ok(result.into())
    }

    async fn update_last_activity(&self, hash: &str, last_activity: i64) -> Result<(), DomainError> {
        let hash = hash.to_string();
        let missing = hash.clone();

        let updated = run_blocking(&self.pool, move |conn| {
            diesel::update(torrents::table.filter(torrents::hash.eq(hash)))
                .set(torrents::last_activity.eq(last_activity))
                .execute(conn)
        })
        .await?;

        if updated == 0 {
            return Err(DomainError::TorrentNotFound(missing));
        }
        Ok(())
    }

    async fn delete(&self, hash: &str) -> Result<usize, DomainError> {
        let hash = hash.to_string();
        run_blocking(&self.pool, move |conn| {
            diesel::delete(torrents::table.filter(torrents::hash.eq(hash))).execute(conn)
        })
        .await
    }
}
