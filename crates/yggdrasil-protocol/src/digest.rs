//! The server hash: a SHA-1 digest rendered as a *signed* hex number.
//!
//! Both sides of an online-mode login compute the same string from the
//! server id, the shared secret, and the server's DER public key. The client
//! sends it with its join request, the server sends it when asking whether
//! the player joined. The service compares the two verbatim, so the rendering
//! must be exact.
//!
//! The 20 digest bytes are read as a big-endian two's-complement integer:
//!
//! ```text
//! 0x4e d1 f4 ...  sign bit 0 → "4ed1f4..."       (leading zeros stripped)
//! 0x83 62 a4 ...  sign bit 1 → "-7c9d5b..."      (negated, then '-' added)
//! ```
//!
//! A 160-bit value does not fit any native integer, so negation works on the
//! byte array directly.

use sha1::{Digest, Sha1};

/// Width of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// The three inputs to a server hash, borrowed for one login attempt.
///
/// Nothing is retained: build one per connecting player, hash it, drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionBundle<'a> {
    /// Server id string from the encryption request (usually empty).
    pub server_id: &'a str,
    /// Shared secret the client generated and encrypted for the server.
    pub shared_secret: &'a [u8],
    /// The server's public key in DER form.
    pub public_key: &'a [u8],
}

impl<'a> ConnectionBundle<'a> {
    /// Borrows the three inputs of one login attempt.
    pub fn new(server_id: &'a str, shared_secret: &'a [u8], public_key: &'a [u8]) -> Self {
        Self {
            server_id,
            shared_secret,
            public_key,
        }
    }

    /// Computes the server hash for this bundle. See [`server_hash`].
    pub fn server_hash(&self) -> String {
        server_hash(self.server_id, self.shared_secret, self.public_key)
    }
}

/// Computes the server hash for one login attempt.
///
/// The inputs are hashed in this exact order: the server id's bytes, the
/// shared secret, then the public key.
///
/// ```rust
/// use yggdrasil_protocol::server_hash;
///
/// assert_eq!(
///     server_hash("jeb_", &[], &[]),
///     "-7c9d5b0044c130109a5d7b5fb5c317c02b4e28c1"
/// );
/// ```
pub fn server_hash(server_id: &str, shared_secret: &[u8], public_key: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(server_id.as_bytes());
    hasher.update(shared_secret);
    hasher.update(public_key);

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&hasher.finalize());
    signed_hex_digest(&digest)
}

/// Renders a raw digest as lowercase signed hex with leading zeros stripped.
///
/// A zero magnitude renders as `"0"`, never as an empty string or `"-0"`.
pub fn signed_hex_digest(digest: &[u8; DIGEST_LEN]) -> String {
    let negative = digest[0] & 0x80 != 0;

    let mut magnitude = *digest;
    if negative {
        twos_complement(&mut magnitude);
    }

    let hex = hex::encode(magnitude);
    let digits = match hex.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };

    if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    }
}

/// Negates a big-endian two's-complement value in place.
///
/// Every byte is inverted, then one is added at the last byte and the carry
/// ripples toward byte 0. Applying this twice restores the original bytes.
pub fn twos_complement(bytes: &mut [u8; DIGEST_LEN]) {
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        *byte = !*byte;
        if carry {
            let (sum, overflow) = byte.overflowing_add(1);
            *byte = sum;
            carry = overflow;
        }
    }
}
