pub mod entities;
pub mod errors;
pub mod format;
pub mod gateways;
pub mod repositories;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use entities::*;
pub use errors::*;
pub use gateways::*;
pub use repositories::*;
pub use services::*;
