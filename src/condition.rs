/// Literal tokens accepted as true, compared after trimming and lower-casing.
pub const TRUTHY: [&str; 4] = ["true", "yes", "1", "certain"];

/// Map a condition token to a boolean.
///
/// There is no boolean algebra here: the token is trimmed, lower-cased and
/// looked up in [`TRUTHY`]. Anything else, including partial matches such as
/// `"truest"` or numbers other than `1`, is false.
pub fn eval_condition(token: &str) -> bool {
    let token = token.trim().to_lowercase();
    TRUTHY.contains(&token.as_str())
}
