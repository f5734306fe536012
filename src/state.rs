use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handler state. The file is the sole source of truth; the mutex
/// only serializes whole-file read-modify-write cycles within this process.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            store_lock: Arc::new(Mutex::new(())),
        }
    }
}
