//! Bundled sample sources
//!
//! One well-formed block and one with three independent mistakes: a type name
//! where `var` belongs, the keyword where a type belongs, and a type name used
//! as a variable.

pub const VALID: &str = "var
    testInteger: integer;
    bool, bool2: boolean;
    reel: real;";

pub const WITH_ERRORS: &str = "real
    testInteger: var;
    bool, bool2: boolean;
    integer: real;";

/// Look up a sample by name (`valid` or `with-errors`)
pub fn get(name: &str) -> Option<&'static str> {
    match name {
        "valid" => Some(VALID),
        "with-errors" => Some(WITH_ERRORS),
        _ => None,
    }
}

pub fn names() -> &'static [&'static str] {
    &["valid", "with-errors"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        for name in names() {
            assert!(get(name).is_some());
        }
        assert_eq!(get("missing"), None);
    }
}
