pub mod db;
pub mod forms;
pub mod models;
pub mod remote;
pub mod repository;
pub mod settings;

pub use db::{LocalStore, StoreError};
pub use models::{ClassInstance, NewClassInstance, NewYogaClass, YogaClass};
pub use remote::RemoteCatalog;
pub use repository::{Backend, Repository};
pub use settings::{BackendKind, Settings};

/// Installs the process-wide tracing subscriber. Hosts call this once at
/// startup; remote push outcomes are only observable through these logs.
pub fn init_tracing(debug: bool) {
    let env_filter = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();
}
