use crate::error::{CountryApiError, Result};

/// Extract the record total from a service status message such as
/// `"Total [249] records found."`.
///
/// The algorithm is purely positional: split on single spaces, take the
/// second token, strip one leading and one trailing character (intended to
/// be `[` and `]`), parse the rest as a base-10 integer. A message whose
/// second word is not bracket-delimited either fails here or yields an
/// unrelated number; that fragility is intentional and callers should not
/// rely on this for arbitrary messages.
pub fn get_total(message: &str) -> Result<u32> {
    let mut tokens = message.split(' ');
    tokens.next();
    let token = tokens
        .next()
        .ok_or_else(|| CountryApiError::InvalidMessage(message.to_string()))?;

    let mut inner = token.chars();
    inner.next();
    inner.next_back();

    inner
        .as_str()
        .parse::<u32>()
        .map_err(|_| CountryApiError::InvalidMessage(message.to_string()))
}
