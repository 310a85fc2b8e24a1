use super::progress::ProgressError;

/// Parses a daily AP value typed into a free-text field.
///
/// Surrounding whitespace and an optional sign are accepted, then the leading run
/// of ASCII digits is taken; anything after it is ignored (`"42abc"` is 42,
/// `"3.7"` is 3).
///
/// # Errors
///
/// Returns `ProgressError::NotANumber` when no digit follows the optional sign or
/// the digits do not fit in an `i64`.
pub fn parse_ap_input(raw: &str) -> Result<i64, ProgressError> {
    let not_a_number = || ProgressError::NotANumber {
        raw: raw.to_owned(),
    };

    let trimmed = raw.trim();
    let sign_len = usize::from(matches!(trimmed.as_bytes().first(), Some(b'-' | b'+')));
    let unsigned = &trimmed[sign_len..];

    let digits_end = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return Err(not_a_number());
    }

    // The sign stays attached so the whole i64 range parses.
    trimmed[..sign_len + digits_end]
        .parse::<i64>()
        .map_err(|_| not_a_number())
}
