//! Random id tokens for book records.

use rand::Rng;

/// Length of every book id.
pub const ID_LENGTH: usize = 16;

/// URL-safe alphabet: 64 symbols, so each character carries 6 bits.
const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Generate a random token of `len` characters from the URL-safe alphabet.
///
/// Uniqueness matters here, not unpredictability: at 16 characters the
/// collision probability is negligible, and the store still checks.
pub fn generate(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
