pub mod activity;
pub mod disk;
pub mod summary;
pub mod torrent;

pub use activity::*;
pub use disk::*;
pub use summary::*;
pub use torrent::*;
