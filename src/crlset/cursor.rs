use super::errors::{CrlSetError, CrlSetResult};

/// Bounds-checked reader over a byte buffer.
///
/// Every read either consumes exactly the requested bytes or fails with
/// [`CrlSetError::TruncatedInput`] and leaves the position untouched.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Number of bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Read `len` raw bytes
    pub fn read_bytes(&mut self, len: usize) -> CrlSetResult<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(CrlSetError::TruncatedInput {
                needed: len,
                available,
            });
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> CrlSetResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> CrlSetResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    pub fn read_u16_le(&mut self) -> CrlSetResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> CrlSetResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read a 1-byte length followed by that many bytes.
    ///
    /// The position is restored if the payload is short.
    pub fn read_len_prefixed_u8(&mut self) -> CrlSetResult<&'a [u8]> {
        let start = self.offset;
        let len = self.read_u8()? as usize;
        self.read_bytes(len).inspect_err(|_| self.offset = start)
    }

    /// Read a 2-byte little-endian length followed by that many bytes
    pub fn read_len_prefixed_u16(&mut self) -> CrlSetResult<&'a [u8]> {
        let start = self.offset;
        let len = self.read_u16_le()? as usize;
        self.read_bytes(len).inspect_err(|_| self.offset = start)
    }
}
