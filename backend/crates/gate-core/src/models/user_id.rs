use chrono::Utc;
use rand::Rng;

const ID_PREFIX: &str = "user";
const SUFFIX_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a user id of the form `user_<unix-millis>_<7 base36 chars>`.
///
/// Uniqueness is probabilistic: two ids minted in the same millisecond
/// collide only if their random suffixes match.
pub fn generate_user_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();

    format!(
        "{}_{}_{}",
        ID_PREFIX,
        Utc::now().timestamp_millis(),
        suffix
    )
}
