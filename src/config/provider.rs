//! Configuration providers.
//!
//! The engine never loads configuration itself; a [`ConfigProvider`] is
//! injected by the host and returns a per-tenant snapshot, giving the
//! calculation path an explicit, testable seam with no process-wide state.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

use super::resolver::resolve;
use super::types::{RawTenantConfig, TenantConfig};

/// Supplies per-tenant configuration snapshots.
///
/// Implementations must be safe to share across request handlers.
pub trait ConfigProvider: Send + Sync {
    /// Returns the raw (unresolved) configuration for a tenant.
    ///
    /// A tenant with no stored configuration yields the empty raw config,
    /// which resolves to the documented defaults; an unreadable or
    /// malformed configuration source is an error.
    fn raw_config(&self, tenant_id: &str) -> EngineResult<RawTenantConfig>;

    /// Returns the fully-resolved configuration for a tenant.
    fn tenant_config(&self, tenant_id: &str) -> EngineResult<TenantConfig> {
        Ok(resolve(&self.raw_config(tenant_id)?))
    }
}

/// Loads tenant configuration from YAML files.
///
/// # Directory Structure
///
/// One file per tenant under the configured directory:
/// ```text
/// config/tenants/
/// ├── default.yaml
/// └── acme.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use ob_engine::config::{ConfigProvider, FileConfigProvider};
///
/// let provider = FileConfigProvider::new("./config/tenants");
/// let config = provider.tenant_config("acme")?;
/// println!("base rate: {}", config.rates.base_hourly_rate);
/// # Ok::<(), ob_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    dir: PathBuf,
}

impl FileConfigProvider {
    /// Creates a provider reading from the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ConfigProvider for FileConfigProvider {
    fn raw_config(&self, tenant_id: &str) -> EngineResult<RawTenantConfig> {
        // Tenant ids become file names; anything that could escape the
        // directory is treated as an unknown tenant.
        if tenant_id.is_empty()
            || !tenant_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Ok(RawTenantConfig::default());
        }

        let path = self.dir.join(format!("{}.yaml", tenant_id));
        if !path.exists() {
            // Missing tenant config must not block payroll calculation.
            return Ok(RawTenantConfig::default());
        }

        let path_str = path.display().to_string();
        let content = fs::read_to_string(&path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

/// An in-memory provider backed by a tenant-id map.
///
/// Useful in tests and for hosts that manage tenant configuration
/// themselves. Unknown tenants resolve to the defaults.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    configs: HashMap<String, RawTenantConfig>,
}

impl StaticConfigProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tenant configuration, replacing any existing one.
    pub fn with_tenant(mut self, tenant_id: impl Into<String>, raw: RawTenantConfig) -> Self {
        self.configs.insert(tenant_id.into(), raw);
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn raw_config(&self, tenant_id: &str) -> EngineResult<RawTenantConfig> {
        Ok(self.configs.get(tenant_id).cloned().unwrap_or_default())
    }
}
