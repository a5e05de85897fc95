// Diagnostics go to stderr; stdout is reserved for command output.
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! println_debug {
    ($($x:tt)*) => {{
        eprint!("[debug] ");
        eprintln!($($x)*);
    }}
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! println_debug {
    ($($x:tt)*) => {}
}

#[macro_export]
macro_rules! println_verbose {
    ($config:expr, $($x:tt)*) => {{
        if $config.verbose {
            eprint!("[verbose] ");
            eprintln!($($x)*);
        }
    }}
}

#[inline]
pub fn is_alphabetic(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_uppercase() || c == '_'
}

#[inline]
pub fn is_numeric(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    is_alphabetic(c) || is_numeric(c)
}

/// Normalizes the source text of a number literal.
///
/// Literals with a fractional part lose their trailing zeros but always keep
/// at least one fractional digit; integer literals get `.0` appended.
pub fn canonical_number(source: &str) -> String {
    if source.contains('.') {
        let mut canonical = source.trim_end_matches('0').to_owned();

        if canonical.ends_with('.') {
            canonical.push('0');
        }

        canonical
    } else {
        format!("{}.0", source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_integer() {
        assert_eq!("3.0", canonical_number("3"));
        assert_eq!("1234.0", canonical_number("1234"));
    }

    #[test]
    fn canonical_fraction() {
        assert_eq!("1.23", canonical_number("1.2300"));
        assert_eq!("1.0", canonical_number("1.00"));
        assert_eq!("10.5", canonical_number("10.5"));
        assert_eq!("200.0", canonical_number("200.0"));
    }

    #[test]
    fn identifier_characters() {
        assert!(is_alphabetic('_'));
        assert!(is_alphabetic('Z'));
        assert!(!is_alphabetic('$'));
        assert!(!is_alphabetic('1'));
        assert!(is_alphanumeric('9'));
        assert!(!is_numeric(')'));
    }
}
