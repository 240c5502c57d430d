use std::path::Path;
use std::sync::Arc;

use crate::error::AppResult;

mod local;
mod traits;

pub use local::{Dataset, LocalStore};
pub use traits::{
    BackendError, BackendResult, CommunityBackend, CountQuery, ProfilePatch, UserId,
};

/// JSON-file store when a path is given, in-memory demo data otherwise.
pub fn open_default_backend(data_path: Option<&Path>) -> AppResult<Arc<dyn CommunityBackend>> {
    match data_path {
        Some(path) => LocalStore::open(path).map(|store| Arc::new(store) as Arc<dyn CommunityBackend>),
        None => Ok(Arc::new(LocalStore::in_memory(Dataset::demo()))),
    }
}
