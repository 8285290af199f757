// Singleton: a process-wide database connection created on first access.
// `InstanceSlot::database()` is the process-wide slot; any other slot is
// private to whoever holds it.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub host: String,
    pub user: String,
}

impl ConnectionConfig {
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
        }
    }
}

#[derive(Debug)]
pub struct DatabaseConnection {
    host: String,
    user: String,
}

impl DatabaseConnection {
    fn connect(config: &ConnectionConfig) -> Self {
        Self {
            host: config.host.clone(),
            user: config.user.clone(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn describe(&self) -> String {
        format!("Connected to {} as {}", self.host, self.user)
    }

    pub fn same_instance(a: &Arc<Self>, b: &Arc<Self>) -> bool {
        Arc::ptr_eq(a, b)
    }
}

/// Handle returned by [`InstanceSlot::get_or_init`]: the shared instance and
/// whether this call was the one that created it.
pub struct Access<T> {
    pub instance: Arc<T>,
    pub created: bool,
}

/// A write-once slot. Unset until the first access; set for the rest of its
/// lifetime. There is no reset.
pub struct InstanceSlot<T> {
    cell: OnceLock<Arc<T>>,
}

impl<T> InstanceSlot<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> Access<T> {
        let mut created = false;
        let instance = self.cell.get_or_init(|| {
            created = true;
            Arc::new(init())
        });
        Access {
            instance: Arc::clone(instance),
            created,
        }
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    pub fn is_set(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for InstanceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

static DATABASE: InstanceSlot<DatabaseConnection> = InstanceSlot::new();

impl InstanceSlot<DatabaseConnection> {
    pub fn database() -> &'static InstanceSlot<DatabaseConnection> {
        &DATABASE
    }

    /// Later configs are ignored once the connection exists.
    pub fn connect(&self, config: &ConnectionConfig) -> Access<DatabaseConnection> {
        let access = self.get_or_init(|| {
            info!(host = %config.host, user = %config.user, "creating database connection");
            DatabaseConnection::connect(config)
        });
        if !access.created {
            debug!(requested_host = %config.host, "reusing existing database connection");
        }
        access
    }
}

pub fn trace_accesses(
    slot: &InstanceSlot<DatabaseConnection>,
    configs: &[ConnectionConfig],
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut handles = Vec::with_capacity(configs.len());

    for config in configs {
        let access = slot.connect(config);
        if access.created {
            lines.push(format!(
                "Initializing database connection to {} as {}",
                config.host, config.user
            ));
        }
        lines.push(access.instance.describe());
        handles.push(access.instance);
    }

    if let (Some(first), Some(last)) = (handles.first(), handles.last()) {
        if handles.len() > 1 {
            lines.push(format!(
                "Same instance: {}",
                DatabaseConnection::same_instance(first, last)
            ));
        }
    }

    lines
}
