use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskUsage {
    /// Mount path, named `file` on the wire for the dashboard's disk bars.
    #[serde(rename = "file")]
    pub path: PathBuf,
    pub size: u64,
    pub used: u64,
    pub free: u64,
}

impl DiskUsage {
    /// Builds usage figures from raw filesystem block counts.
    ///
    /// `size` is `used + free` rather than the raw block total, so blocks
    /// reserved for root are left out the same way `df` leaves them out.
    pub fn from_blocks(
        path: PathBuf,
        blocks: u64,
        blocks_free: u64,
        blocks_available: u64,
        fragment_size: u64,
    ) -> Self {
        let used = blocks.saturating_sub(blocks_free).saturating_mul(fragment_size);
        let free = blocks_available.saturating_mul(fragment_size);
        Self {
            path,
            size: used.saturating_add(free),
            used,
            free,
        }
    }
}
