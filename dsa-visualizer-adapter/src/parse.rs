use alloc::string::ToString;
use alloc::vec::Vec;

use crate::Error;

/// Parses comma-separated integers such as `"10, 5,8"`.
///
/// Whitespace around each token is ignored. Any token that is not an integer, including an empty
/// one from a trailing comma or blank input, rejects the whole input.
pub fn parse_values(input: &str) -> Result<Vec<i64>, Error> {
    input
        .split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<i64>().map_err(|_| Error::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect()
}
