//! Random token generation.

use data_encoding::BASE64URL;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::{Error, Result};

/// Number of random bytes behind [`generate_random_string`].
pub const DEFAULT_TOKEN_BYTES: usize = 16;

/// Largest number of random bytes [`generate_token`] accepts.
pub const MAX_TOKEN_BYTES: usize = 1024;

/// A URL-safe random token built from 16 bytes of OS randomness.
///
/// The bytes are encoded with padded base64url, so the result is always
/// 24 characters long and ends with `==`.
#[must_use]
pub fn generate_random_string() -> String {
    random_token(DEFAULT_TOKEN_BYTES)
}

/// A URL-safe, padded base64 token built from `len_bytes` random bytes.
///
/// # Errors
///
/// Returns [`Error::TokenTooLong`] if `len_bytes` is above [`MAX_TOKEN_BYTES`].
pub fn generate_token(len_bytes: usize) -> Result<String> {
    check_token_len(len_bytes)?;
    Ok(random_token(len_bytes))
}

/// Reject token lengths above [`MAX_TOKEN_BYTES`].
///
/// # Errors
///
/// Returns [`Error::TokenTooLong`] for oversized lengths.
pub fn check_token_len(len_bytes: usize) -> Result<()> {
    if len_bytes > MAX_TOKEN_BYTES {
        return Err(Error::TokenTooLong {
            requested: len_bytes,
            max: MAX_TOKEN_BYTES,
        });
    }
    Ok(())
}

fn random_token(len_bytes: usize) -> String {
    let mut bytes = vec![0u8; len_bytes];
    OsRng.fill_bytes(&mut bytes);
    BASE64URL.encode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_string_shape() {
        let token = generate_random_string();

        assert_eq!(token.len(), 24);
        assert!(token.ends_with("=="));
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '='))
        );
        assert_eq!(BASE64URL.decode(token.as_bytes()).unwrap().len(), 16);
    }

    #[test]
    fn test_random_strings_differ() {
        assert_ne!(generate_random_string(), generate_random_string());
    }

    #[test]
    fn test_generate_token_lengths() {
        assert_eq!(generate_token(0).unwrap(), "");
        assert_eq!(generate_token(3).unwrap().len(), 4);
        assert_eq!(generate_token(32).unwrap().len(), 44);
        assert_eq!(generate_token(MAX_TOKEN_BYTES).unwrap().len(), 1368);
    }

    #[test]
    fn test_generate_token_rejects_oversized_length() {
        for len in [MAX_TOKEN_BYTES + 1, usize::MAX] {
            assert!(matches!(
                generate_token(len),
                Err(Error::TokenTooLong { requested, max: MAX_TOKEN_BYTES }) if requested == len
            ));
        }
    }
}
