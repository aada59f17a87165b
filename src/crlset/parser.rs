use std::sync::Arc;

use tracing::debug;

use super::cursor::ByteCursor;
use super::errors::{CrlSetError, CrlSetResult};
use super::header::{CONTENT_TYPE_FULL, Header};
use super::types::{CrlEntry, IssuerKeyHash, RevocationSet, Serial};

/// Smallest possible encoded entry: issuer hash plus serial count
const MIN_ENTRY_LEN: usize = IssuerKeyHash::LEN + 4;

/// Smallest possible encoded serial: length byte plus one byte
const MIN_SERIAL_LEN: usize = 2;

/// Parse a full snapshot.
///
/// Either the whole buffer is accepted or an error is returned; no partial
/// set is ever produced.
pub fn parse(data: &[u8]) -> CrlSetResult<RevocationSet> {
    let mut cursor = ByteCursor::new(data);
    let (header, raw_header) = Header::read(&mut cursor)?;
    header.expect_content_type(CONTENT_TYPE_FULL)?;
    let blocked_spkis = header.blocked_spki_hashes()?;

    let num_parents = header.num_parents as usize;
    let mut entries = Vec::with_capacity(num_parents.min(cursor.remaining() / MIN_ENTRY_LEN));
    for _ in 0..num_parents {
        entries.push(Arc::new(read_entry(&mut cursor)?));
    }

    if !cursor.is_empty() {
        return Err(CrlSetError::Malformed("trailing data after the last entry"));
    }

    debug!(
        "Parsed CRL set sequence {} with {} issuers",
        header.sequence,
        entries.len()
    );

    Ok(RevocationSet::from_parts(
        header.sequence,
        entries,
        header.not_after,
        blocked_spkis,
        Some(Arc::from(raw_header)),
    ))
}

/// Read one literal entry: issuer hash, serial count, serials
pub(crate) fn read_entry(cursor: &mut ByteCursor<'_>) -> CrlSetResult<CrlEntry> {
    let issuer_key_hash = IssuerKeyHash::new(cursor.read_array()?);
    let num_serials = cursor.read_u32_le()? as usize;

    let mut serials = Vec::with_capacity(num_serials.min(cursor.remaining() / MIN_SERIAL_LEN));
    for _ in 0..num_serials {
        serials.push(read_serial(cursor)?);
    }

    Ok(CrlEntry::new(issuer_key_hash, serials))
}

pub(crate) fn read_serial(cursor: &mut ByteCursor<'_>) -> CrlSetResult<Serial> {
    Serial::new(cursor.read_len_prefixed_u8()?)
}
