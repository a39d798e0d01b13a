//! Webhook signature verification.
//!
//! Providers sign the raw request body with an HMAC over a shared secret
//! and send the hex digest in a header prefixed with the algorithm name:
//! `sha1=` for Vercel, `sha256=` for Hugging Face.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use tracing::warn;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// HMAC algorithm named by the signature header prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    /// Header prefix, including the trailing `=`.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1=",
            Self::Sha256 => "sha256=",
        }
    }

    /// Digest length in bytes.
    fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }
}

/// Verify a provider signature over the raw request body.
///
/// Fails closed: a missing header, wrong prefix, invalid hex, wrong digest
/// length, or empty secret all return `false`, never an error. The decoded
/// digest length is checked before the comparison, so the constant-time
/// compare always runs on equal-length slices.
pub fn verify_signature(
    raw_body: &[u8],
    header_value: Option<&str>,
    secret: &str,
    algorithm: SignatureAlgorithm,
) -> bool {
    let header_value = match header_value {
        Some(v) if !v.is_empty() => v,
        _ => {
            warn!(algorithm = ?algorithm, "signature_header_missing");
            return false;
        }
    };

    if secret.is_empty() {
        warn!("signature_secret_empty");
        return false;
    }

    let hex_digest = match header_value.strip_prefix(algorithm.prefix()) {
        Some(rest) => rest,
        None => {
            warn!(algorithm = ?algorithm, "signature_prefix_mismatch");
            return false;
        }
    };

    let provided = match hex::decode(hex_digest) {
        Ok(bytes) => bytes,
        Err(_) => {
            warn!("signature_hex_invalid");
            return false;
        }
    };

    if provided.len() != algorithm.digest_len() {
        warn!(
            expected_length = algorithm.digest_len(),
            actual_length = provided.len(),
            "signature_length_mismatch"
        );
        return false;
    }

    let expected = match compute_digest(algorithm, secret, raw_body) {
        Some(bytes) => bytes,
        None => {
            warn!("signature_invalid_key");
            return false;
        }
    };

    // Constant-time comparison to prevent timing attacks
    let valid = constant_time_compare(&expected, &provided);

    if !valid {
        warn!(algorithm = ?algorithm, "signature_mismatch");
    }

    valid
}

/// Compute the HMAC digest of the body under the named algorithm.
fn compute_digest(
    algorithm: SignatureAlgorithm,
    secret: &str,
    raw_body: &[u8],
) -> Option<Vec<u8>> {
    match algorithm {
        SignatureAlgorithm::Sha1 => {
            let mut mac = HmacSha1::new_from_slice(secret.as_bytes()).ok()?;
            mac.update(raw_body);
            Some(mac.finalize().into_bytes().to_vec())
        }
        SignatureAlgorithm::Sha256 => {
            let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
            mac.update(raw_body);
            Some(mac.finalize().into_bytes().to_vec())
        }
    }
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Check whether a configured secret enables verification.
///
/// An unset or whitespace-only secret means verification is skipped; the
/// caller logs that state explicitly.
pub fn is_signature_verification_enabled(secret: &Option<String>) -> bool {
    secret
        .as_ref()
        .map(|k| !k.trim().is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // HMAC of body "hello" under secret "s3cr3t", cross-checked with openssl.
    const SHA256_REFERENCE: &str =
        "6b23653f08c72072554e5dfef9b72efe01fcfe724a950689e991e7bd7089eb3e";
    const SHA1_REFERENCE: &str = "21fbddf58a7c80f7ba7b0cd12b9783da067fd4e2";

    #[test]
    fn test_verify_sha256_reference_vector() {
        let header = format!("sha256={}", SHA256_REFERENCE);

        assert!(verify_signature(
            b"hello",
            Some(&header),
            "s3cr3t",
            SignatureAlgorithm::Sha256
        ));
    }

    #[test]
    fn test_verify_sha1_reference_vector() {
        let header = format!("sha1={}", SHA1_REFERENCE);

        assert!(verify_signature(
            b"hello",
            Some(&header),
            "s3cr3t",
            SignatureAlgorithm::Sha1
        ));
    }

    #[test]
    fn test_verify_rejects_flipped_hex_char() {
        // Flip the first hex character of the valid digest.
        let mut flipped = SHA256_REFERENCE.to_string();
        flipped.replace_range(0..1, "7");
        let header = format!("sha256={}", flipped);

        assert!(!verify_signature(
            b"hello",
            Some(&header),
            "s3cr3t",
            SignatureAlgorithm::Sha256
        ));
    }

    #[test]
    fn test_verify_rejects_missing_header() {
        assert!(!verify_signature(
            b"hello",
            None,
            "s3cr3t",
            SignatureAlgorithm::Sha256
        ));
        assert!(!verify_signature(
            b"hello",
            Some(""),
            "s3cr3t",
            SignatureAlgorithm::Sha256
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_prefix() {
        let header = format!("sha256={}", SHA256_REFERENCE);

        assert!(!verify_signature(
            b"hello",
            Some(&header),
            "s3cr3t",
            SignatureAlgorithm::Sha1
        ));
    }

    #[test]
    fn test_verify_rejects_bare_digest_without_prefix() {
        assert!(!verify_signature(
            b"hello",
            Some(SHA256_REFERENCE),
            "s3cr3t",
            SignatureAlgorithm::Sha256
        ));
    }

    #[test]
    fn test_verify_rejects_length_mismatch() {
        // A valid hex string that is shorter than the digest length must be
        // rejected before any comparison.
        let header = format!("sha256={}", &SHA256_REFERENCE[..32]);

        assert!(!verify_signature(
            b"hello",
            Some(&header),
            "s3cr3t",
            SignatureAlgorithm::Sha256
        ));
    }

    #[test]
    fn test_verify_rejects_invalid_hex() {
        assert!(!verify_signature(
            b"hello",
            Some("sha256=not-hex-at-all"),
            "s3cr3t",
            SignatureAlgorithm::Sha256
        ));
    }

    #[test]
    fn test_verify_rejects_empty_secret() {
        let header = format!("sha256={}", SHA256_REFERENCE);

        assert!(!verify_signature(
            b"hello",
            Some(&header),
            "",
            SignatureAlgorithm::Sha256
        ));
    }

    #[test]
    fn test_verify_computed_signature_round_trip() {
        let secret = "another-secret";
        let body = b"{\"type\":\"deployment.created\"}";

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        let header = format!("sha256={}", hex::encode(mac.finalize().into_bytes()));

        assert!(verify_signature(
            body,
            Some(&header),
            secret,
            SignatureAlgorithm::Sha256
        ));
        assert!(!verify_signature(
            b"tampered body",
            Some(&header),
            secret,
            SignatureAlgorithm::Sha256
        ));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare(b"abc", b"abc"));
        assert!(!constant_time_compare(b"abc", b"abd"));
        assert!(!constant_time_compare(b"abc", b"abcd"));
    }

    #[test]
    fn test_is_signature_verification_enabled() {
        assert!(!is_signature_verification_enabled(&None));
        assert!(!is_signature_verification_enabled(&Some("".to_string())));
        assert!(!is_signature_verification_enabled(&Some("   ".to_string())));
        assert!(is_signature_verification_enabled(&Some(
            "key123".to_string()
        )));
    }
}
