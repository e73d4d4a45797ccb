/// Converts a camelCase or PascalCase name into snake_case, the form Anchor
/// hashes for instruction names.
///
/// A word boundary is placed before an upper-case letter that follows a
/// lower-case letter or digit, and before the last letter of an upper-case run
/// when a lower-case letter follows it (`parseIDLFile` -> `parse_idl_file`).
/// Existing underscores are kept and never doubled.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut snake = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);

            if boundary && !snake.ends_with('_') {
                snake.push('_');
            }
        }
        snake.extend(c.to_lowercase());
    }

    snake
}
