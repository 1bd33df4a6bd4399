//! # Wire Decoding
//!
//! Decoding of the fixed-width peer identifier prefixing requests on the
//! trust boundary.
//!
//! The caller supplies the identifier as an optional bounded byte slice with
//! no embedded length prefix. Unlike the trusted-length decoding this design
//! descends from, the supplied length is validated against the fixed wire
//! width before any byte is consumed: a mismatch yields
//! [`BridgeError::MalformedPeerId`] instead of an out-of-bounds read.

use crate::domain::errors::BridgeError;
use crate::domain::identity::PeerId;

/// Read cursor over a bounded byte slice.
struct Cursor<'a> {
    buf: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Consume exactly `n` bytes, advancing the cursor.
    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if self.buf.len() < n {
            return None;
        }
        let (head, rest) = self.buf.split_at(n);
        self.buf = rest;
        Some(head)
    }

    fn remaining(&self) -> usize {
        self.buf.len()
    }
}

/// Decode an optional fixed-width peer identifier.
///
/// `None` and the empty buffer both mean "host-internal client" and decode
/// to `Ok(None)`; that is a valid value, not an error. Any non-empty buffer
/// must be exactly [`PeerId::LEN`] bytes.
pub fn decode_peer_id(buf: Option<&[u8]>) -> Result<Option<PeerId>, BridgeError> {
    let bytes = match buf {
        None => return Ok(None),
        Some(b) if b.is_empty() => return Ok(None),
        Some(b) => b,
    };

    if bytes.len() != PeerId::LEN {
        return Err(BridgeError::MalformedPeerId {
            expected: PeerId::LEN,
            actual: bytes.len(),
        });
    }

    let mut cursor = Cursor::new(bytes);
    // Length was validated above, so the cursor always yields a full id.
    let raw = cursor.take(PeerId::LEN).ok_or(BridgeError::MalformedPeerId {
        expected: PeerId::LEN,
        actual: bytes.len(),
    })?;
    debug_assert_eq!(cursor.remaining(), 0);

    let mut id = [0u8; PeerId::LEN];
    id.copy_from_slice(raw);
    Ok(Some(PeerId::new(id)))
}
