//! Compact identifiers for new recipes.

use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random characters appended to the time component.
const RANDOM_LEN: usize = 7;

/// Generate a new recipe identifier.
///
/// The id is the current Unix time in milliseconds encoded in base 36,
/// followed by seven random base-36 characters. The time component keeps
/// ids roughly creation-ordered; the random tail keeps them distinct when
/// several records are created within the same millisecond. Collisions are
/// not detected or retried.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let mut id = to_base36(millis);
    let mut rng = rand::thread_rng();
    for _ in 0..RANDOM_LEN {
        id.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
    }
    id
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.iter().rev().map(|&b| b as char).collect()
}
