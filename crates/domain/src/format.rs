//! Number formatting helpers.

/// Unit suffix for a count of people.
pub const PERSON_UNIT: &str = "명";

/// Insert `,` between every group of three digits, counting from the right.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Raw count followed by [`PERSON_UNIT`], e.g. `342명`.
#[must_use]
pub fn people(count: u32) -> String {
    format!("{count}{PERSON_UNIT}")
}
