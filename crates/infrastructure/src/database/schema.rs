// Database schema for the stats cache
diesel::table! {
    torrents (hash) {
        hash -> Text,              // Content hash of the torrent
        name -> Text,
        size -> BigInt,            // Total size in bytes
        added_on -> BigInt,        // Unix seconds
        last_activity -> BigInt,   // Unix seconds of the newest sample
    }
}

diesel::table! {
    activity (id) {
        id -> Integer,
        hash -> Text,
        timestamp -> BigInt,       // Unix seconds
        uploaded -> BigInt,        // Cumulative bytes uploaded
        time_active -> BigInt,     // Seconds
    }
}

diesel::allow_tables_to_appear_in_same_query!(torrents, activity,);

pub const CREATE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS torrents (
    hash TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    size BIGINT NOT NULL,
    added_on BIGINT NOT NULL,
    last_activity BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS activity (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    hash TEXT NOT NULL,
    timestamp BIGINT NOT NULL,
    uploaded BIGINT NOT NULL,
    time_active BIGINT NOT NULL
);
CREATE INDEX IF NOT EXISTS activity_hash_timestamp ON activity (hash, timestamp);
";
