use std::sync::Arc;

use service::directory::{DirectoryService, UserRepository};

/// Shared, immutable handles cloned into every request.
#[derive(Clone)]
pub struct ServerState {
    pub directory: Arc<DirectoryService<dyn UserRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { directory: Arc::new(DirectoryService::new(repo)) }
    }
}
