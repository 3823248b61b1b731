//! Response freshness: how long a response may be served from cache.

/// Directive prefix recognised in `Cache-Control`.
pub const MAX_AGE_PREFIX: &str = "max-age=";

/// Maps a `Cache-Control` header value to a lifetime in seconds.
///
/// Zero means the response must not be cached.
pub type FreshnessFn = fn(Option<&str>) -> u64;

/// Lifetime from a `Cache-Control: max-age=<seconds>` header.
///
/// Only a value that starts with `max-age=` counts; the leading digits after
/// the prefix are the lifetime. Anything else, including a missing header,
/// gives zero. Values too large for `u64` saturate.
pub fn max_age_ttl(header: Option<&str>) -> u64 {
    let Some(rest) = header.and_then(|value| value.strip_prefix(MAX_AGE_PREFIX)) else {
        return 0;
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}
