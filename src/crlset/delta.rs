//! Delta updates.
//!
//! A delta body starts with a change block for the entry list. A change block
//! is a zlib-compressed stream of one-byte symbols, preceded by its
//! uncompressed and compressed lengths (both `u32` little-endian). Literal
//! data consumed by the symbols (inserted entries, nested change blocks for
//! changed entries, inserted serials) follows in symbol order.

use std::io::{Read, Write};
use std::sync::Arc;

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use tracing::debug;

use super::cursor::ByteCursor;
use super::errors::{CrlSetError, CrlSetResult};
use super::header::{CONTENT_TYPE_DELTA, Header, MAX_BLOCKED_SPKIS};
use super::parser::{read_entry, read_serial};
use super::serializer::write_entry;
use super::types::{CrlEntry, IssuerKeyHash, RevocationSet, Serial};

/// Largest change block accepted. Bounds both the number of entries and the
/// number of serials per entry a delta can describe.
pub const MAX_UNCOMPRESSED_CHANGES_LEN: usize = 1024 * 1024;

const SYMBOL_SAME: u8 = 0;
const SYMBOL_INSERT: u8 = 1;
const SYMBOL_DELETE: u8 = 2;
const SYMBOL_CHANGED: u8 = 3;

/// Edit of the entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOp {
    /// Keep the next `n` base entries
    Copy(usize),
    /// Drop the next `n` base entries
    Delete(usize),
    /// Add a literal entry without consuming a base entry
    Insert(CrlEntry),
    /// Rewrite the serials of the next base entry
    Patch(Vec<SerialOp>),
}

/// Edit of one entry's serial list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerialOp {
    Copy(usize),
    Delete(usize),
    Insert(Serial),
}

/// Decoded delta, ready to be applied to the set whose sequence is
/// `delta_from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta {
    sequence: u32,
    delta_from: u32,
    num_parents: u32,
    not_after: Option<u64>,
    blocked_spkis: Vec<IssuerKeyHash>,
    ops: Vec<EntryOp>,
}

impl Delta {
    /// Decode delta bytes. Checks against a base happen in [`Delta::apply`].
    pub fn parse(data: &[u8]) -> CrlSetResult<Self> {
        let mut cursor = ByteCursor::new(data);
        let (header, _) = Header::read(&mut cursor)?;
        header.expect_content_type(CONTENT_TYPE_DELTA)?;
        let blocked_spkis = header.blocked_spki_hashes()?;

        let changes = read_changes(&mut cursor)?;
        let mut ops: Vec<EntryOp> = Vec::new();
        for symbol in changes {
            match symbol {
                SYMBOL_SAME => match ops.last_mut() {
                    Some(EntryOp::Copy(n)) => *n += 1,
                    _ => ops.push(EntryOp::Copy(1)),
                },
                SYMBOL_DELETE => match ops.last_mut() {
                    Some(EntryOp::Delete(n)) => *n += 1,
                    _ => ops.push(EntryOp::Delete(1)),
                },
                SYMBOL_INSERT => ops.push(EntryOp::Insert(read_entry(&mut cursor)?)),
                SYMBOL_CHANGED => ops.push(EntryOp::Patch(read_serial_ops(&mut cursor)?)),
                other => {
                    return Err(CrlSetError::mismatch(format!(
                        "unknown entry symbol {other}"
                    )));
                }
            }
        }

        if !cursor.is_empty() {
            return Err(CrlSetError::mismatch(format!(
                "{} bytes left after the last symbol",
                cursor.remaining()
            )));
        }

        Ok(Self {
            sequence: header.sequence,
            delta_from: header.delta_from,
            num_parents: header.num_parents,
            not_after: header.not_after,
            blocked_spkis,
            ops,
        })
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn delta_from(&self) -> u32 {
        self.delta_from
    }

    pub fn num_parents(&self) -> u32 {
        self.num_parents
    }

    pub fn ops(&self) -> &[EntryOp] {
        &self.ops
    }

    /// Apply the edit script to `base`, producing a new set.
    ///
    /// `base` is left untouched; on error nothing is produced.
    pub fn apply(self, base: &RevocationSet) -> CrlSetResult<RevocationSet> {
        if self.delta_from != base.sequence {
            return Err(CrlSetError::StaleOrWrongBase {
                base: self.delta_from,
                current: base.sequence,
            });
        }

        let base_entries = &base.entries;
        let mut next = 0usize;
        let mut entries: Vec<Arc<CrlEntry>> =
            Vec::with_capacity((self.num_parents as usize).min(base_entries.len() + self.ops.len()));

        for op in self.ops {
            match op {
                EntryOp::Copy(n) => {
                    let end = advance(next, n, base_entries.len(), "copy")?;
                    entries.extend(base_entries[next..end].iter().cloned());
                    next = end;
                }
                EntryOp::Delete(n) => {
                    next = advance(next, n, base_entries.len(), "delete")?;
                }
                EntryOp::Insert(entry) => entries.push(Arc::new(entry)),
                EntryOp::Patch(serial_ops) => {
                    let old = base_entries.get(next).ok_or_else(|| {
                        CrlSetError::mismatch(format!(
                            "change of entry {next} beyond {} base entries",
                            base_entries.len()
                        ))
                    })?;
                    let serials = apply_serial_ops(&old.serials, serial_ops)?;
                    entries.push(Arc::new(CrlEntry::new(old.issuer_key_hash, serials)));
                    next += 1;
                }
            }
        }

        if next != base_entries.len() {
            return Err(CrlSetError::mismatch(format!(
                "script consumed {next} of {} base entries",
                base_entries.len()
            )));
        }

        if entries.len() != self.num_parents as usize {
            return Err(CrlSetError::mismatch(format!(
                "result has {} entries, header declares {}",
                entries.len(),
                self.num_parents
            )));
        }

        debug!(
            "Applied delta {} -> {}: {} issuers",
            self.delta_from,
            self.sequence,
            entries.len()
        );

        Ok(RevocationSet::from_parts(
            self.sequence,
            entries,
            self.not_after,
            self.blocked_spkis,
            None,
        ))
    }

    /// Encode this delta in the wire format read by [`Delta::parse`]
    pub fn encode(&self) -> CrlSetResult<Vec<u8>> {
        let mut out = Vec::new();
        Header::delta(
            self.sequence,
            self.delta_from,
            self.num_parents,
            self.not_after,
            &self.blocked_spkis,
        )
        .write(&mut out)?;

        let mut symbols = Vec::new();
        let mut data = Vec::new();
        for op in &self.ops {
            match op {
                EntryOp::Copy(n) => push_run(&mut symbols, SYMBOL_SAME, *n),
                EntryOp::Delete(n) => push_run(&mut symbols, SYMBOL_DELETE, *n),
                EntryOp::Insert(entry) => {
                    symbols.push(SYMBOL_INSERT);
                    write_entry(entry, &mut data);
                }
                EntryOp::Patch(serial_ops) => {
                    symbols.push(SYMBOL_CHANGED);
                    write_serial_ops(serial_ops, &mut data)?;
                }
            }
        }

        write_changes(&symbols, &mut out)?;
        out.extend_from_slice(&data);
        Ok(out)
    }
}

impl RevocationSet {
    /// Apply delta bytes to this set.
    ///
    /// Fails with [`CrlSetError::StaleOrWrongBase`] when the delta was not
    /// built against this set's sequence.
    pub fn apply_delta(&self, data: &[u8]) -> CrlSetResult<RevocationSet> {
        Delta::parse(data)?.apply(self)
    }
}

/// Builds a [`Delta`] from explicit edit operations
#[derive(Debug, Clone)]
pub struct DeltaBuilder {
    sequence: u32,
    delta_from: u32,
    not_after: Option<u64>,
    blocked_spkis: Vec<IssuerKeyHash>,
    ops: Vec<EntryOp>,
}

impl DeltaBuilder {
    pub fn new(delta_from: u32, sequence: u32) -> Self {
        Self {
            sequence,
            delta_from,
            not_after: None,
            blocked_spkis: Vec::new(),
            ops: Vec::new(),
        }
    }

    pub fn not_after(mut self, not_after: u64) -> Self {
        self.not_after = Some(not_after);
        self
    }

    pub fn blocked_spkis(mut self, blocked_spkis: Vec<IssuerKeyHash>) -> Self {
        self.blocked_spkis = blocked_spkis;
        self
    }

    pub fn copy(mut self, n: usize) -> Self {
        self.ops.push(EntryOp::Copy(n));
        self
    }

    pub fn delete(mut self, n: usize) -> Self {
        self.ops.push(EntryOp::Delete(n));
        self
    }

    pub fn insert(mut self, entry: CrlEntry) -> Self {
        self.ops.push(EntryOp::Insert(entry));
        self
    }

    pub fn patch(mut self, serial_ops: Vec<SerialOp>) -> Self {
        self.ops.push(EntryOp::Patch(serial_ops));
        self
    }

    /// Finish the delta; `NumParents` is derived from the operations
    pub fn build(self) -> CrlSetResult<Delta> {
        if self.blocked_spkis.len() > MAX_BLOCKED_SPKIS {
            return Err(CrlSetError::Malformed("too many blocked SPKIs"));
        }

        let num_parents: usize = self
            .ops
            .iter()
            .map(|op| match op {
                EntryOp::Copy(n) => *n,
                EntryOp::Delete(_) => 0,
                EntryOp::Insert(_) | EntryOp::Patch(_) => 1,
            })
            .sum();
        let num_parents = u32::try_from(num_parents)
            .map_err(|_| CrlSetError::Malformed("too many entries for one delta"))?;

        Ok(Delta {
            sequence: self.sequence,
            delta_from: self.delta_from,
            num_parents,
            not_after: self.not_after,
            blocked_spkis: self.blocked_spkis,
            ops: self.ops,
        })
    }
}

fn advance(next: usize, n: usize, len: usize, what: &str) -> CrlSetResult<usize> {
    next.checked_add(n).filter(|end| *end <= len).ok_or_else(|| {
        CrlSetError::mismatch(format!("{what} of {n} at position {next} runs past {len}"))
    })
}

fn apply_serial_ops(old: &[Serial], ops: Vec<SerialOp>) -> CrlSetResult<Vec<Serial>> {
    let mut next = 0usize;
    let mut serials = Vec::with_capacity(old.len());

    for op in ops {
        match op {
            SerialOp::Copy(n) => {
                let end = advance(next, n, old.len(), "serial copy")?;
                serials.extend_from_slice(&old[next..end]);
                next = end;
            }
            SerialOp::Delete(n) => {
                next = advance(next, n, old.len(), "serial delete")?;
            }
            SerialOp::Insert(serial) => serials.push(serial),
        }
    }

    // End of the block is the end-of-entry marker
    if next != old.len() {
        return Err(CrlSetError::mismatch(format!(
            "serial script consumed {next} of {} base serials",
            old.len()
        )));
    }
    Ok(serials)
}

fn read_serial_ops(cursor: &mut ByteCursor<'_>) -> CrlSetResult<Vec<SerialOp>> {
    let changes = read_changes(cursor)?;
    let mut ops: Vec<SerialOp> = Vec::new();
    for symbol in changes {
        match symbol {
            SYMBOL_SAME => match ops.last_mut() {
                Some(SerialOp::Copy(n)) => *n += 1,
                _ => ops.push(SerialOp::Copy(1)),
            },
            SYMBOL_DELETE => match ops.last_mut() {
                Some(SerialOp::Delete(n)) => *n += 1,
                _ => ops.push(SerialOp::Delete(1)),
            },
            SYMBOL_INSERT => ops.push(SerialOp::Insert(read_serial(cursor)?)),
            other => {
                return Err(CrlSetError::mismatch(format!(
                    "unknown serial symbol {other}"
                )));
            }
        }
    }
    Ok(ops)
}

fn write_serial_ops(ops: &[SerialOp], data: &mut Vec<u8>) -> CrlSetResult<()> {
    let mut symbols = Vec::new();
    let mut serials = Vec::new();
    for op in ops {
        match op {
            SerialOp::Copy(n) => push_run(&mut symbols, SYMBOL_SAME, *n),
            SerialOp::Delete(n) => push_run(&mut symbols, SYMBOL_DELETE, *n),
            SerialOp::Insert(serial) => {
                symbols.push(SYMBOL_INSERT);
                serials.push(serial.as_bytes().len() as u8);
                serials.extend_from_slice(serial.as_bytes());
            }
        }
    }

    write_changes(&symbols, data)?;
    data.extend_from_slice(&serials);
    Ok(())
}

fn push_run(symbols: &mut Vec<u8>, symbol: u8, n: usize) {
    symbols.resize(symbols.len() + n, symbol);
}

/// Read and inflate one change block
fn read_changes(cursor: &mut ByteCursor<'_>) -> CrlSetResult<Vec<u8>> {
    let uncompressed_len = cursor.read_u32_le()? as usize;
    let compressed_len = cursor.read_u32_le()? as usize;

    if uncompressed_len > MAX_UNCOMPRESSED_CHANGES_LEN {
        return Err(CrlSetError::Malformed("change block exceeds 1 MiB"));
    }

    let compressed = cursor.read_bytes(compressed_len)?;
    // A non-empty payload is inflated even when no symbols are declared
    if compressed.is_empty() && uncompressed_len == 0 {
        return Ok(Vec::new());
    }

    let mut changes = Vec::with_capacity(uncompressed_len);
    ZlibDecoder::new(compressed)
        .take(uncompressed_len as u64 + 1)
        .read_to_end(&mut changes)
        .map_err(CrlSetError::Decompress)?;

    if changes.len() != uncompressed_len {
        return Err(CrlSetError::mismatch(format!(
            "change block inflated to {} bytes, header declares {uncompressed_len}",
            changes.len()
        )));
    }
    Ok(changes)
}

fn write_changes(symbols: &[u8], out: &mut Vec<u8>) -> CrlSetResult<()> {
    if symbols.len() > MAX_UNCOMPRESSED_CHANGES_LEN {
        return Err(CrlSetError::Malformed("change block exceeds 1 MiB"));
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(symbols)?;
    let compressed = encoder.finish()?;

    out.extend_from_slice(&(symbols.len() as u32).to_le_bytes());
    out.extend_from_slice(&(compressed.len() as u32).to_le_bytes());
    out.extend_from_slice(&compressed);
    Ok(())
}
