use ring::digest::{SHA256, digest};

use super::types::{CertStatus, CrlEntry, IssuerKeyHash, RevocationSet};

/// Hash a DER-encoded SubjectPublicKeyInfo into the issuer key identity used
/// by CRL sets.
pub fn issuer_key_hash_from_spki(spki_der: &[u8]) -> IssuerKeyHash {
    let mut hash = [0u8; IssuerKeyHash::LEN];
    hash.copy_from_slice(digest(&SHA256, spki_der).as_ref());
    IssuerKeyHash::new(hash)
}

impl RevocationSet {
    /// Revocation status of the certificate with `serial` issued under
    /// `issuer_key_hash`.
    ///
    /// An issuer without an entry yields [`CertStatus::Good`]: the set simply
    /// carries no information about it.
    pub fn check_certificate(&self, serial: &[u8], issuer_key_hash: &IssuerKeyHash) -> CertStatus {
        match self.entry_for_issuer(issuer_key_hash) {
            Some(entry) if entry.contains(serial) => CertStatus::Revoked,
            _ => CertStatus::Good,
        }
    }

    /// Status of a key listed in `BlockedSPKIs`
    pub fn check_spki(&self, spki_hash: &IssuerKeyHash) -> CertStatus {
        if self.blocked_spkis.contains(spki_hash) {
            CertStatus::Revoked
        } else {
            CertStatus::Good
        }
    }

    /// First entry for `issuer_key_hash`, if any
    pub fn entry_for_issuer(&self, issuer_key_hash: &IssuerKeyHash) -> Option<&CrlEntry> {
        self.index
            .get(issuer_key_hash)
            .and_then(|position| self.entries.get(*position))
            .map(|entry| entry.as_ref())
    }

    /// Whether `NotAfter` lies before `now` (seconds since the Unix epoch).
    /// Sets without `NotAfter` never expire.
    pub fn is_expired(&self, now: u64) -> bool {
        self.not_after.is_some_and(|not_after| now > not_after)
    }
}
