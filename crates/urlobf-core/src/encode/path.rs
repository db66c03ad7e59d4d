//! Percent-style hex encoding of the URL path.

/// Characters copied through unchanged by [`encode_path_hex`].
pub const PASSTHROUGH: [char; 3] = ['/', '=', '&'];

/// Replaces every path character except `/`, `=` and `&` with `%` and its
/// lowercase, unpadded code point in hex (`" "` → `%20`, `"\t"` → `%9`).
///
/// The first character of `path` is assumed to be the leading `/` and is not
/// inspected; the output always starts with `/`.
pub fn encode_path_hex(path: &str) -> String {
    let mut out = String::with_capacity(path.len() * 3 + 1);
    out.push('/');
    for c in path.chars().skip(1) {
        if PASSTHROUGH.contains(&c) {
            out.push(c);
        } else {
            out.push_str(&format!("%{:x}", u32::from(c)));
        }
    }
    out
}
