use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

// Identifiable defines the lookup key shared by stored and transferred records
pub trait Identifiable : Sync + Send {
    fn id(&self) -> i64;

    // two records are the same when their ids match, whatever the other fields hold
    fn same_identity(&self, other: &dyn Identifiable) -> bool {
        self.id() == other.id()
    }
}

// RunMode selects how the catalog router is served
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RunMode {
    Http,
    Lambda,
}

// Configuration abstracts config options for the catalog server
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub listen_addr: String,
    pub store: RepositoryStore,
    pub run_mode: RunMode,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            listen_addr: "127.0.0.1:8080".to_string(),
            store: RepositoryStore::SeededMemory,
            run_mode: RunMode::Http,
            json_logs: false,
        }
    }

    pub fn with_store(mut self, store: RepositoryStore) -> Self {
        self.store = store;
        self
    }
}
