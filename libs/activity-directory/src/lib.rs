pub mod directory;
pub mod error;
pub mod models;
pub mod seed;

pub use directory::{ActivityDirectory, Confirmation};
pub use error::{DirectoryError, SeedError};
pub use models::activity::{Activity, ActivityListing};
