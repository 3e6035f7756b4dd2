/// Compares two byte strings without short-circuiting on the first mismatch.
///
/// Runs in time proportional to the input length when both inputs have the same
/// length. Inputs of different length return early since only the length leaks.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
