//! Password digest
//!
//! Maps a plaintext password to the token stored in the credential file.
//! The digest is stable across runs and platforms, but it is unsalted and
//! fast: demo use only.

use sha2::{Digest, Sha256};

/// Hashes `plaintext` to a 64-bit identifier rendered in decimal.
///
/// The value is the first eight bytes of the SHA-256 digest, read big-endian.
pub fn password_hash(plaintext: &str) -> String {
    let digest = Sha256::digest(plaintext.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(password_hash("secret"), "3150282591544648675");
        assert_eq!(password_hash("wrong"), "9804526982763508412");
        assert_eq!(password_hash(""), "16406829232824261652");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(password_hash("hunter2"), password_hash("hunter2"));
        assert_ne!(password_hash("hunter2"), password_hash("hunter3"));
    }

    #[test]
    fn test_no_trimming() {
        assert_ne!(password_hash(" secret"), password_hash("secret"));
    }

    #[test]
    fn test_decimal_only() {
        let h = password_hash("x");
        assert!(!h.is_empty());
        assert!(h.chars().all(|c| c.is_ascii_digit()));
    }
}
