//! Record id generation.
//!
//! Every record stored in the document carries an id of the form
//! `PREFIX + unix-millis + 9 random base-36 characters`, e.g.
//! `GAL1735732800000k3x9q0m2p`. The timestamp component keeps ids roughly
//! sortable by creation time; the random suffix makes collisions within the
//! same millisecond practically impossible, though not provably so.

use chrono::Utc;
use rand::Rng;

/// Characters used for the random suffix (lowercase base 36).
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix appended after the timestamp.
const SUFFIX_LEN: usize = 9;

/// Generate a new record id with the given type prefix.
///
/// Ids are "practically unique": uniqueness is probabilistic, not enforced.
/// Callers that need a hard uniqueness guarantee (e.g. admission numbers)
/// must check the collection themselves before inserting.
///
/// # Example
///
/// ```ignore
/// let id = generate_id("STU");
/// assert!(id.starts_with("STU"));
/// ```
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();

    format!("{}{}{}", prefix, millis, suffix)
}
