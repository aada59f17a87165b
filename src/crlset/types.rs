use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::errors::{CrlSetError, CrlSetResult};
use super::header::{CURRENT_VERSION, MAX_BLOCKED_SPKIS};

/// SHA-256 digest of an issuer's SubjectPublicKeyInfo
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IssuerKeyHash([u8; IssuerKeyHash::LEN]);

impl IssuerKeyHash {
    pub const LEN: usize = 32;

    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for IssuerKeyHash {
    type Error = CrlSetError;

    fn try_from(bytes: &[u8]) -> CrlSetResult<Self> {
        let bytes: [u8; Self::LEN] = bytes
            .try_into()
            .map_err(|_| CrlSetError::Malformed("issuer key hash must be 32 bytes"))?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for IssuerKeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IssuerKeyHash({})", hex::encode(self.0))
    }
}

impl fmt::Display for IssuerKeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Certificate serial number, 1 to 255 raw bytes
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Serial(Vec<u8>);

impl Serial {
    pub const MAX_LEN: usize = u8::MAX as usize;

    pub fn new(bytes: impl Into<Vec<u8>>) -> CrlSetResult<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(CrlSetError::Malformed("serial number is empty"));
        }
        if bytes.len() > Self::MAX_LEN {
            return Err(CrlSetError::Malformed("serial number exceeds 255 bytes"));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Serial {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8]> for Serial {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for Serial {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Serial({})", hex::encode(&self.0))
    }
}

/// Revoked serials of one issuer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrlEntry {
    pub issuer_key_hash: IssuerKeyHash,
    /// Positional order is significant: deltas address serials by index
    pub serials: Vec<Serial>,
}

impl CrlEntry {
    pub fn new(issuer_key_hash: IssuerKeyHash, serials: Vec<Serial>) -> Self {
        Self {
            issuer_key_hash,
            serials,
        }
    }

    pub fn contains(&self, serial: &[u8]) -> bool {
        self.serials.iter().any(|s| s.as_bytes() == serial)
    }
}

/// Revocation status of a certificate under one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertStatus {
    Revoked,
    /// Not revoked, or no data for its issuer
    Good,
}

impl fmt::Display for CertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revoked => write!(f, "REVOKED"),
            Self::Good => write!(f, "GOOD"),
        }
    }
}

/// Immutable revocation snapshot.
///
/// Updates never modify a set; they build a new one. Unchanged entries are
/// shared between a base and the sets derived from it.
#[derive(Clone)]
pub struct RevocationSet {
    pub(crate) format_version: u16,
    pub(crate) sequence: u32,
    pub(crate) entries: Vec<Arc<CrlEntry>>,
    pub(crate) not_after: Option<u64>,
    pub(crate) blocked_spkis: Vec<IssuerKeyHash>,
    /// Header bytes this set was parsed from, re-emitted verbatim on serialize
    pub(crate) raw_header: Option<Arc<[u8]>>,
    /// First position of every issuer in `entries`
    pub(crate) index: HashMap<IssuerKeyHash, usize>,
}

impl RevocationSet {
    /// Set with no entries at sequence 0
    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    pub fn new(sequence: u32, entries: Vec<CrlEntry>) -> Self {
        Self::from_parts(
            sequence,
            entries.into_iter().map(Arc::new).collect(),
            None,
            Vec::new(),
            None,
        )
    }

    pub fn with_not_after(mut self, not_after: u64) -> Self {
        self.not_after = Some(not_after);
        self.raw_header = None;
        self
    }

    pub fn with_blocked_spkis(mut self, blocked_spkis: Vec<IssuerKeyHash>) -> CrlSetResult<Self> {
        if blocked_spkis.len() > MAX_BLOCKED_SPKIS {
            return Err(CrlSetError::Malformed("too many blocked SPKIs"));
        }
        self.blocked_spkis = blocked_spkis;
        self.raw_header = None;
        Ok(self)
    }

    pub(crate) fn from_parts(
        sequence: u32,
        entries: Vec<Arc<CrlEntry>>,
        not_after: Option<u64>,
        blocked_spkis: Vec<IssuerKeyHash>,
        raw_header: Option<Arc<[u8]>>,
    ) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.issuer_key_hash).or_insert(position);
        }

        Self {
            format_version: CURRENT_VERSION as u16,
            sequence,
            entries,
            not_after,
            blocked_spkis,
            raw_header,
            index,
        }
    }

    pub fn format_version(&self) -> u16 {
        self.format_version
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn entries(&self) -> &[Arc<CrlEntry>] {
        &self.entries
    }

    pub fn not_after(&self) -> Option<u64> {
        self.not_after
    }

    pub fn blocked_spkis(&self) -> &[IssuerKeyHash] {
        &self.blocked_spkis
    }

    /// Total number of revoked serials across all issuers
    pub fn serial_count(&self) -> usize {
        self.entries.iter().map(|e| e.serials.len()).sum()
    }
}

impl PartialEq for RevocationSet {
    fn eq(&self, other: &Self) -> bool {
        self.format_version == other.format_version
            && self.sequence == other.sequence
            && self.not_after == other.not_after
            && self.blocked_spkis == other.blocked_spkis
            && self.entries == other.entries
    }
}

impl Eq for RevocationSet {}

impl fmt::Debug for RevocationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevocationSet")
            .field("format_version", &self.format_version)
            .field("sequence", &self.sequence)
            .field("entries", &self.entries)
            .field("not_after", &self.not_after)
            .field("blocked_spkis", &self.blocked_spkis)
            .finish()
    }
}

impl Default for RevocationSet {
    fn default() -> Self {
        Self::empty()
    }
}
