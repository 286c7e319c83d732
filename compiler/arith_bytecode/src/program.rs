//! Compiled program and its byte encoding.
//!
//! # Format
//!
//! ```text
//! u32 LE   constant count N
//! N x f64  constants, little-endian IEEE 754 bits
//! u32 LE   code length M
//! M x u8   code
//! ```

use crate::errors::{DecodeError, EncodeError};

/// A constant pool plus the code that indexes into it.
#[derive(Clone, Debug, Default)]
pub struct Program {
    constants: Vec<f64>,
    code: Vec<u8>,
}

impl Program {
    /// Build a program from raw parts. No validation is done here; the VM
    /// reports malformed code when it reaches it.
    pub fn new(constants: Vec<f64>, code: Vec<u8>) -> Self {
        Program { constants, code }
    }

    pub fn constants(&self) -> &[f64] {
        &self.constants
    }

    pub fn code(&self) -> &[u8] {
        &self.code
    }

    /// Encode as bytes.
    ///
    /// Fails only when a section is longer than the `u32` length field can
    /// describe, which compiled programs never are.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::with_capacity(8 + self.constants.len() * 8 + self.code.len());
        write_len(&mut out, "constant pool", self.constants.len())?;
        for value in &self.constants {
            out.extend_from_slice(&value.to_le_bytes());
        }
        write_len(&mut out, "code", self.code.len())?;
        out.extend_from_slice(&self.code);
        Ok(out)
    }

    /// Decode bytes produced by [`Program::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader { bytes, offset: 0 };

        let count = reader.read_len()?;
        let raw = reader.take_many(count, 8)?;
        let constants = raw
            .chunks_exact(8)
            .map(|chunk| {
                let mut bits = [0u8; 8];
                bits.copy_from_slice(chunk);
                f64::from_le_bytes(bits)
            })
            .collect();

        let code_len = reader.read_len()?;
        let code = reader.take(code_len)?.to_vec();

        let rest = bytes.len() - reader.offset;
        if rest > 0 {
            return Err(DecodeError::TrailingBytes {
                offset: reader.offset,
                count: rest,
            });
        }

        Ok(Program { constants, code })
    }
}

/// Equality compares constants by bit pattern, so programs holding NaN
/// constants still compare equal to their own copies.
impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.constants.len() == other.constants.len()
            && self
                .constants
                .iter()
                .zip(&other.constants)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

fn write_len(out: &mut Vec<u8>, section: &'static str, len: usize) -> Result<(), EncodeError> {
    let field = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow { section, len })?;
    out.extend_from_slice(&field.to_le_bytes());
    Ok(())
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let available = self.bytes.len() - self.offset;
        if len > available {
            return Err(DecodeError::Truncated {
                offset: self.offset,
                needed: len - available,
            });
        }
        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn take_many(&mut self, count: usize, width: usize) -> Result<&'a [u8], DecodeError> {
        match count.checked_mul(width) {
            Some(len) => self.take(len),
            None => Err(DecodeError::Truncated {
                offset: self.offset,
                needed: usize::MAX,
            }),
        }
    }

    fn read_len(&mut self) -> Result<usize, DecodeError> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(raw) as usize)
    }
}
