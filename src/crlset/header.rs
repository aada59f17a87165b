use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::cursor::ByteCursor;
use super::errors::{CrlSetError, CrlSetResult};
use super::types::IssuerKeyHash;

/// Highest format version this implementation understands
pub const CURRENT_VERSION: u32 = 0;

/// `ContentType` of a full snapshot
pub const CONTENT_TYPE_FULL: &str = "CRLSet";

/// `ContentType` of a delta
pub const CONTENT_TYPE_DELTA: &str = "CRLSetDelta";

/// Upper bound on `BlockedSPKIs`; keeps any canonical header below the
/// 16-bit length prefix.
pub const MAX_BLOCKED_SPKIS: usize = 1024;

/// Header metadata preceding every snapshot and delta body.
///
/// Unknown keys such as `NextUpdate` or `WindowSecs` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(rename = "Version")]
    pub version: u32,
    #[serde(rename = "ContentType")]
    pub content_type: String,
    #[serde(rename = "Sequence")]
    pub sequence: u32,
    #[serde(rename = "DeltaFrom")]
    pub delta_from: u32,
    #[serde(rename = "NumParents")]
    pub num_parents: u32,
    #[serde(rename = "NotAfter", default, skip_serializing_if = "Option::is_none")]
    pub not_after: Option<u64>,
    #[serde(rename = "BlockedSPKIs", default, skip_serializing_if = "Vec::is_empty")]
    pub blocked_spkis: Vec<String>,
}

impl Header {
    /// Header of a full snapshot as the serializer writes it
    pub fn full(
        sequence: u32,
        num_parents: u32,
        not_after: Option<u64>,
        blocked_spkis: &[IssuerKeyHash],
    ) -> Self {
        Self::with_content_type(
            CONTENT_TYPE_FULL,
            sequence,
            0,
            num_parents,
            not_after,
            blocked_spkis,
        )
    }

    /// Header of a delta from `delta_from` to `sequence`
    pub fn delta(
        sequence: u32,
        delta_from: u32,
        num_parents: u32,
        not_after: Option<u64>,
        blocked_spkis: &[IssuerKeyHash],
    ) -> Self {
        Self::with_content_type(
            CONTENT_TYPE_DELTA,
            sequence,
            delta_from,
            num_parents,
            not_after,
            blocked_spkis,
        )
    }

    fn with_content_type(
        content_type: &str,
        sequence: u32,
        delta_from: u32,
        num_parents: u32,
        not_after: Option<u64>,
        blocked_spkis: &[IssuerKeyHash],
    ) -> Self {
        Self {
            version: CURRENT_VERSION,
            content_type: content_type.to_string(),
            sequence,
            delta_from,
            num_parents,
            not_after,
            blocked_spkis: blocked_spkis
                .iter()
                .map(|hash| STANDARD.encode(hash.as_bytes()))
                .collect(),
        }
    }

    /// Read the length-prefixed header from the front of `cursor`.
    ///
    /// Returns the decoded header together with its raw JSON bytes.
    pub fn read<'a>(cursor: &mut ByteCursor<'a>) -> CrlSetResult<(Self, &'a [u8])> {
        let raw = cursor.read_len_prefixed_u16()?;
        let header: Header = serde_json::from_slice(raw)
            .map_err(|e| CrlSetError::HeaderParseError(e.to_string()))?;

        if header.version > CURRENT_VERSION {
            return Err(CrlSetError::UnsupportedVersion {
                found: header.version,
                supported: CURRENT_VERSION,
            });
        }

        if header.blocked_spkis.len() > MAX_BLOCKED_SPKIS {
            return Err(CrlSetError::HeaderParseError(format!(
                "{} blocked SPKIs exceeds the limit of {MAX_BLOCKED_SPKIS}",
                header.blocked_spkis.len()
            )));
        }

        Ok((header, raw))
    }

    pub fn expect_content_type(&self, expected: &'static str) -> CrlSetResult<()> {
        if self.content_type != expected {
            return Err(CrlSetError::WrongContentType {
                expected,
                found: self.content_type.clone(),
            });
        }
        Ok(())
    }

    pub fn is_delta(&self) -> bool {
        self.content_type == CONTENT_TYPE_DELTA
    }

    /// Decode `BlockedSPKIs` into SPKI hashes
    pub fn blocked_spki_hashes(&self) -> CrlSetResult<Vec<IssuerKeyHash>> {
        self.blocked_spkis
            .iter()
            .map(|encoded| {
                let bytes = STANDARD.decode(encoded).map_err(|e| {
                    CrlSetError::HeaderParseError(format!("invalid blocked SPKI {encoded:?}: {e}"))
                })?;
                IssuerKeyHash::try_from(bytes.as_slice()).map_err(|_| {
                    CrlSetError::HeaderParseError(format!(
                        "blocked SPKI hash has {} bytes, expected 32",
                        bytes.len()
                    ))
                })
            })
            .collect()
    }

    /// Compact JSON, keys in field order
    pub fn to_json(&self) -> CrlSetResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(CrlSetError::HeaderEncodeError)
    }

    /// Append the length prefix and JSON to `out`
    pub fn write(&self, out: &mut Vec<u8>) -> CrlSetResult<()> {
        let json = self.to_json()?;
        if json.len() > u16::MAX as usize {
            return Err(CrlSetError::Malformed("header exceeds 65535 bytes"));
        }
        write_raw(&json, out);
        Ok(())
    }
}

/// Append a 2-byte little-endian length and `raw` to `out`
pub(crate) fn write_raw(raw: &[u8], out: &mut Vec<u8>) {
    debug_assert!(raw.len() <= u16::MAX as usize);
    out.extend_from_slice(&(raw.len() as u16).to_le_bytes());
    out.extend_from_slice(raw);
}
