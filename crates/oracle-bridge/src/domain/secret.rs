//! # Master Secret Handling
//!
//! Wrappers for the 32-byte master secret that back the signing oracle.
//!
//! ## Security
//!
//! The secret exists only transiently inside the bootstrap call. Two layers
//! enforce that:
//!
//! - [`MasterSecret`] zeroizes its bytes on drop and never appears in
//!   `Debug` output.
//! - [`PinnedSecret`] additionally pins its heap copy against swapping
//!   (`mlock` on unix) for the duration of one scope, and zeroes and unpins
//!   the buffer unconditionally when the scope exits.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Byte length of the master secret.
pub const SECRET_LEN: usize = 32;

/// The 32-byte master secret, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterSecret {
    inner: [u8; SECRET_LEN],
}

impl MasterSecret {
    /// Create from a fixed-size byte array.
    pub fn new(bytes: [u8; SECRET_LEN]) -> Self {
        Self { inner: bytes }
    }

    /// Create from a slice (copies into a fixed array).
    ///
    /// Returns `None` if the slice is not exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != SECRET_LEN {
            return None;
        }
        let mut inner = [0u8; SECRET_LEN];
        inner.copy_from_slice(slice);
        Some(Self { inner })
    }

    /// Get the secret bytes.
    ///
    /// # Security
    ///
    /// Avoid keeping references to the returned array. Use immediately
    /// and let go.
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.inner
    }
}

impl std::fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the actual secret
        f.write_str("MasterSecret(***)")
    }
}

/// Scope guard holding a swap-pinned copy of the master secret.
///
/// The copy lives on the heap so the pinned page is owned by this guard
/// alone. Dropping the guard zeroes the bytes first and unpins the page
/// afterwards, on success and error paths alike.
pub struct PinnedSecret {
    bytes: Box<[u8; SECRET_LEN]>,
}

impl PinnedSecret {
    /// Copy `secret` into a pinned scope.
    ///
    /// A failed `mlock` is reported at unusual level and bootstrap
    /// continues: the zeroize-on-drop guarantee holds either way.
    pub fn new(secret: &[u8; SECRET_LEN]) -> Self {
        let bytes = Box::new(*secret);
        #[cfg(unix)]
        {
            let rc = unsafe { libc::mlock(bytes.as_ptr() as *const libc::c_void, SECRET_LEN) };
            if rc != 0 {
                tracing::warn!("Could not pin secret memory against swapping (mlock failed)");
            }
        }
        Self { bytes }
    }

    /// Borrow the pinned secret bytes.
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.bytes
    }
}

impl Drop for PinnedSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
        #[cfg(unix)]
        unsafe {
            libc::munlock(self.bytes.as_ptr() as *const libc::c_void, SECRET_LEN);
        }
    }
}

impl std::fmt::Debug for PinnedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PinnedSecret(***)")
    }
}
