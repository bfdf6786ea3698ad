/// Strips every character that is not an ASCII digit. Extensions and
/// country prefixes are not interpreted, and an empty result is valid.
pub fn normalize_phone(value: &str) -> String {
    value.chars().filter(|ch| ch.is_ascii_digit()).collect()
}
