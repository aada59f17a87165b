use std::io::ErrorKind;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use tokio::fs;
use tracing::{debug, info, warn};

use super::cursor::ByteCursor;
use super::errors::{CrlSetError, CrlSetResult};
use super::header::Header;
use super::parser::parse;
use super::serializer::serialize;
use super::types::{CertStatus, IssuerKeyHash, RevocationSet};

/// Holder of the active CRL set.
///
/// Readers take an [`Arc`] of the current set and query it without further
/// locking; an update publishes a new set with a single swap. A snapshot
/// handed out before an update stays valid and unchanged.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<RevocationSet>>,
}

impl SnapshotStore {
    pub fn new(initial: RevocationSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// Load the set last persisted at `path`.
    ///
    /// A missing file yields an empty store at sequence 0.
    pub async fn open<P: AsRef<Path>>(path: P) -> CrlSetResult<Self> {
        let path = path.as_ref();
        let set = match fs::read(path).await {
            Ok(bytes) => parse(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No CRL set found at {}. Starting with an empty set.",
                    path.display()
                );
                RevocationSet::empty()
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            "Loaded CRL set sequence {} ({} issuers) from {}",
            set.sequence(),
            set.entries().len(),
            path.display()
        );
        Ok(Self::new(set))
    }

    /// Write the current set to `path` in the snapshot format
    pub async fn persist<P: AsRef<Path>>(&self, path: P) -> CrlSetResult<()> {
        let path = path.as_ref();
        let snapshot = self.snapshot();
        let bytes = serialize(&snapshot)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Replace the file in one step so a crash never leaves half a set
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, &bytes).await?;
        fs::rename(&tmp_path, path).await?;

        debug!(
            "Persisted CRL set sequence {} ({} bytes) to {}",
            snapshot.sequence(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }

    /// Install the update stored in `file`.
    ///
    /// With `persist_to` set, the new set is written there before returning,
    /// so a later failing update never loses this one.
    pub async fn install_file<P: AsRef<Path>>(
        &self,
        file: P,
        persist_to: Option<&Path>,
    ) -> CrlSetResult<Arc<RevocationSet>> {
        let bytes = fs::read(file.as_ref()).await?;
        let installed = self.install_update(&bytes)?;
        if let Some(path) = persist_to {
            self.persist(path).await?;
        }
        Ok(installed)
    }

    /// Current set
    pub fn snapshot(&self) -> Arc<RevocationSet> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn sequence(&self) -> u32 {
        self.snapshot().sequence()
    }

    pub fn check_certificate(&self, serial: &[u8], issuer_key_hash: &IssuerKeyHash) -> CertStatus {
        self.snapshot().check_certificate(serial, issuer_key_hash)
    }

    pub fn check_spki(&self, spki_hash: &IssuerKeyHash) -> CertStatus {
        self.snapshot().check_spki(spki_hash)
    }

    /// Replace the current set with a full snapshot.
    ///
    /// A snapshot older than the current sequence is rejected.
    pub fn install_full(&self, data: &[u8]) -> CrlSetResult<Arc<RevocationSet>> {
        let set = parse(data).inspect_err(|e| warn!("Rejected full CRL set: {}", e))?;

        let installed = {
            let mut current = self.write();
            if set.sequence() < current.sequence() {
                return Err(stale("full CRL set", set.sequence(), current.sequence()));
            }
            replace(&mut current, set)
        };

        log_installed(&installed);
        Ok(installed)
    }

    /// Apply a delta to the current set and install the result
    pub fn apply_delta(&self, data: &[u8]) -> CrlSetResult<Arc<RevocationSet>> {
        let base = self.snapshot();
        let set = base
            .apply_delta(data)
            .inspect_err(|e| warn!("Rejected CRL set delta: {}", e))?;

        let installed = {
            let mut current = self.write();
            // Another update won the race; this delta was computed against a
            // set that is no longer current
            if !Arc::ptr_eq(&*current, &base) {
                return Err(stale("CRL set delta", base.sequence(), current.sequence()));
            }
            replace(&mut current, set)
        };

        log_installed(&installed);
        Ok(installed)
    }

    /// Install either a full snapshot or a delta, based on its `ContentType`
    pub fn install_update(&self, data: &[u8]) -> CrlSetResult<Arc<RevocationSet>> {
        let (header, _) = Header::read(&mut ByteCursor::new(data))?;
        if header.is_delta() {
            self.apply_delta(data)
        } else {
            self.install_full(data)
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<RevocationSet>> {
        // Sets are immutable, so a poisoned lock still guards a whole set
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(RevocationSet::empty())
    }
}

fn replace(current: &mut Arc<RevocationSet>, set: RevocationSet) -> Arc<RevocationSet> {
    let set = Arc::new(set);
    *current = Arc::clone(&set);
    set
}

fn stale(what: &str, base: u32, current: u32) -> CrlSetError {
    warn!("Rejected {}: based on sequence {}, current is {}", what, base, current);
    CrlSetError::StaleOrWrongBase { base, current }
}

// Runs after the write guard is dropped
fn log_installed(set: &RevocationSet) {
    info!(
        "Installed CRL set sequence {} ({} issuers, {} serials)",
        set.sequence(),
        set.entries().len(),
        set.serial_count()
    );
}
