pub mod clients;
pub mod database;
pub mod repositories;

pub use clients::*;
pub use database::*;
pub use repositories::*;
