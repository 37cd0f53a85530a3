/// Fallback token for names that sanitize to nothing.
const FALLBACK: &str = "unnamed";

/// Convert a human-readable resource name into a Terraform-safe key.
///
/// Lowercases the input, collapses every run of non-alphanumeric
/// characters into a single underscore, strips leading and trailing
/// underscores, and prefixes `resource_` when the result would start
/// with a digit. An empty result maps to `"unnamed"`.
///
/// The result matches `^[a-z][a-z0-9_]*$` (or equals the fallback) and
/// the function is idempotent. It is NOT injective: distinct source
/// names can sanitize to the same key ("My App" and "My-App" collide),
/// in which case the later Terraform block silently wins.
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else if !out.ends_with('_') && !out.is_empty() {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');

    if trimmed.is_empty() {
        return FALLBACK.to_string();
    }
    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("resource_{}", trimmed);
    }
    trimmed.to_string()
}
