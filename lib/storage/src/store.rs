//! Versioned catalog store
//!
//! Holds the current catalog as an immutable `Arc` snapshot. Readers clone
//! the `Arc` and never block a reload; a reload builds the new catalog off
//! to the side and swaps it in. A failed reload keeps the old snapshot.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use lookbook_core::Catalog;
use parking_lot::{Mutex, RwLock};
use tracing::{info, warn};

use crate::error::Result;
use crate::source::CatalogSource;

pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// A consistent view of the catalog at one version
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub catalog: Arc<Catalog>,
    pub version: u64,
    pub loaded_at: DateTime<Utc>,
}

struct Loaded {
    snapshot: Snapshot,
    instant: Instant,
}

pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    ttl: Duration,
    current: RwLock<Loaded>,
    // Held across load and swap; staleness is re-checked under it
    reload_lock: Mutex<()>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("source", &self.source.describe())
            .field("ttl", &self.ttl)
            .field("version", &self.version())
            .finish()
    }
}

impl CatalogStore {
    /// Load the catalog from `source` and build a store around it.
    ///
    /// Fails if the initial load fails; there is no empty fallback.
    pub fn open(source: Box<dyn CatalogSource>, ttl: Duration) -> Result<Self> {
        let catalog = Catalog::new(source.load()?)?;
        info!(
            source = %source.describe(),
            items = catalog.len(),
            embedded = catalog.embedded_count(),
            "catalog loaded"
        );

        Ok(Self {
            source,
            ttl,
            current: RwLock::new(Loaded {
                snapshot: Snapshot {
                    catalog: Arc::new(catalog),
                    version: 1,
                    loaded_at: Utc::now(),
                },
                instant: Instant::now(),
            }),
            reload_lock: Mutex::new(()),
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        self.current.read().snapshot.clone()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn version(&self) -> u64 {
        self.current.read().snapshot.version
    }

    /// True once the TTL has elapsed, or while the catalog is empty
    pub fn is_stale(&self) -> bool {
        let current = self.current.read();
        current.instant.elapsed() >= self.ttl || current.snapshot.catalog.is_empty()
    }

    /// Reload if the snapshot is stale. Returns whether a new version was swapped in.
    ///
    /// Errors are logged and swallowed; the old snapshot stays current.
    ///
    /// Concurrent callers load once: whoever waits on the lock sees the fresh
    /// snapshot and returns `false`.
    pub fn refresh_if_stale(&self) -> bool {
        if !self.is_stale() {
            return false;
        }
        let _guard = self.reload_lock.lock();
        if !self.is_stale() {
            return false;
        }
        match self.reload_locked() {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "catalog refresh failed, keeping previous snapshot");
                false
            }
        }
    }

    /// Reload from the source unconditionally
    pub fn reload(&self) -> Result<Snapshot> {
        let _guard = self.reload_lock.lock();
        self.reload_locked()
    }

    /// Caller must hold `reload_lock`
    fn reload_locked(&self) -> Result<Snapshot> {
        let catalog = Catalog::new(self.source.load()?)?;
        let mut current = self.current.write();
        let version = current.snapshot.version + 1;
        let snapshot = Snapshot {
            catalog: Arc::new(catalog),
            version,
            loaded_at: Utc::now(),
        };
        *current = Loaded {
            snapshot: snapshot.clone(),
            instant: Instant::now(),
        };
        drop(current);

        info!(
            version,
            items = snapshot.catalog.len(),
            embedded = snapshot.catalog.embedded_count(),
            "catalog reloaded"
        );
        Ok(snapshot)
    }
}
