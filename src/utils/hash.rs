use sha2::{Digest, Sha256};

const FINGERPRINT_LEN: usize = 8;

/// Lowercase hex SHA256 of `content`
pub fn sha256_hex(content: &str) -> String {
    format!("{:x}", Sha256::digest(content.as_bytes()))
}

/// Short content fingerprint stamped into directive block markers.
pub fn fingerprint(content: &str) -> String {
    let mut hex = sha256_hex(content);
    hex.truncate(FINGERPRINT_LEN);
    hex
}
