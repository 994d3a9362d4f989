//! Test-token generation
//!
//! Emulates the token a minting platform hands to a generative script: a
//! random 64-digit hex hash and a token id within a project. Uses real
//! (non-deterministic) randomness and exists for testing sketches only;
//! nothing in the deterministic core depends on it.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of hex digits after the `0x` prefix
pub const HASH_DIGITS: usize = 64;

/// Token ids are `project_number * 1_000_000 + edition`
pub const PROJECT_STRIDE: u64 = 1_000_000;

const EDITIONS: u64 = 1000;

/// A hash and token id pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestToken {
    pub hash: String,
    #[serde(rename = "tokenId")]
    pub token_id: String,
}

/// Generate a random test token for `project_number`
///
/// # Example
/// ```
/// use seedcraft_core::{generate_test_token, Generator};
///
/// let token = generate_test_token(3);
/// assert_eq!(token.hash.len(), 66);
/// assert!(Generator::from_material(&token.hash).is_ok());
/// ```
pub fn generate_test_token(project_number: u64) -> TestToken {
    generate_test_token_with(project_number, &mut rand::thread_rng())
}

/// Generate a test token drawing from `rng`
pub fn generate_test_token_with<R: Rng>(project_number: u64, rng: &mut R) -> TestToken {
    let mut hash = String::with_capacity(2 + HASH_DIGITS);
    hash.push_str("0x");
    for _ in 0..HASH_DIGITS {
        let digit: u32 = rng.gen_range(0..16);
        // digit < 16, always a valid radix-16 digit
        hash.push(char::from_digit(digit, 16).unwrap_or('0'));
    }

    let edition = rng.gen_range(0..EDITIONS);
    let token_id = (project_number * PROJECT_STRIDE + edition).to_string();

    TestToken { hash, token_id }
}
