use super::errors::{CrlSetError, CrlSetResult};
use super::header::{Header, write_raw};
use super::types::{CrlEntry, RevocationSet};

/// Encode a set in the full snapshot format accepted by [`parse`].
///
/// A set that came from [`parse`] keeps its original header bytes, so the
/// output matches the parsed input byte for byte.
///
/// [`parse`]: super::parse
pub fn serialize(set: &RevocationSet) -> CrlSetResult<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded_len_hint(set));

    match &set.raw_header {
        Some(raw) => write_raw(raw, &mut out),
        None => {
            let num_parents = u32::try_from(set.entries.len())
                .map_err(|_| CrlSetError::Malformed("too many entries for one set"))?;
            Header::full(set.sequence, num_parents, set.not_after, &set.blocked_spkis)
                .write(&mut out)?;
        }
    }

    for entry in &set.entries {
        write_entry(entry, &mut out);
    }
    Ok(out)
}

pub(crate) fn write_entry(entry: &CrlEntry, out: &mut Vec<u8>) {
    out.extend_from_slice(entry.issuer_key_hash.as_bytes());
    out.extend_from_slice(&(entry.serials.len() as u32).to_le_bytes());
    for serial in &entry.serials {
        out.push(serial.as_bytes().len() as u8);
        out.extend_from_slice(serial.as_bytes());
    }
}

fn encoded_len_hint(set: &RevocationSet) -> usize {
    let body: usize = set
        .entries
        .iter()
        .map(|e| 36 + e.serials.iter().map(|s| 1 + s.as_bytes().len()).sum::<usize>())
        .sum();
    body + 128
}
