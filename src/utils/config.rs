//! Application configuration constants.
//! Defaults and tuning in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
    env_prefix: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!("{pkg}.toml"),
                env_prefix: format!("{}_", pkg.to_uppercase()),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Config file looked up in the working directory when `--config` is not given.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    /// Environment variable name for `key`, e.g. `FILEGEN_TOTAL_FILES`.
    pub fn env_key(&self, key: &str) -> String {
        format!("{}{}", self.env_prefix, key)
    }
}

// ---- Generation defaults ----

pub struct Defaults;

impl Defaults {
    pub const TOTAL_FILES: usize = 3000;
    pub const CONTENT_LENGTH: usize = 5000;
    pub const OUTPUT_DIR: &'static str = "random-files";
}

// ---- Worker threads ----

/// Worker pool limits. Use [`WorkerLimits::current()`] to fill `available`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkerLimits {
    /// Available processing units; set by [`WorkerLimits::current()`].
    pub available: usize,
}

impl WorkerLimits {
    /// Build limits with `available` set from `num_cpus::get()` (honors cgroup CPU quotas,
    /// spawns nothing).
    pub fn current() -> Self {
        Self {
            available: num_cpus::get(),
        }
    }
}

// ---- Channels ----

/// Queue capacities. Zero is a rendezvous channel: a send blocks until the receiver takes it.
pub struct ChannelCaps;

impl ChannelCaps {
    /// Job source -> workers.
    pub const JOBS: usize = 0;
    /// Workers -> aggregator.
    pub const RESULTS: usize = 0;
}

// ---- Progress ----

pub struct ProgressConsts;

impl ProgressConsts {
    pub const DESC: &'static str = "Generating";
}
