/// 32-bit multiplicative string hash over UTF-16 code units:
/// `h = h * 31 + unit (mod 2^32)`, starting from zero.
///
/// Hashing code units rather than bytes keeps ids stable with clients that
/// compute the same value over JavaScript strings.
#[must_use]
pub fn rolling_hash(input: &str) -> u32 {
    input.encode_utf16().fold(0u32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(u32::from(unit))
    })
}
