use rand::Rng;

/// Returns an opaque unique ASCII byte-string usable as a test key or value.
///
/// 128 bits of randomness rendered as lowercase hex, so collisions across a
/// run are ruled out with overwhelming probability. Pure function with no
/// shared state; safe to call from concurrent test cases.
pub fn unique_token() -> Vec<u8> {
    let id: u128 = rand::thread_rng().gen();
    format!("{id:032x}").into_bytes()
}

/// Returns `count` distinct tokens in generation order.
pub fn unique_tokens(count: usize) -> Vec<Vec<u8>> {
    (0..count).map(|_| unique_token()).collect()
}

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;
