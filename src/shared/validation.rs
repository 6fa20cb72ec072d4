use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating booking slot times
    /// Must be a 24-hour "HH:MM" string; slot matching compares these
    /// strings verbatim, so the format has to be canonical.
    /// - Valid: "09:00", "10:30", "23:59"
    /// - Invalid: "9:00", "24:00", "10:30:00", "10.30"
    pub static ref SLOT_TIME_REGEX: Regex = Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_time_regex_valid() {
        assert!(SLOT_TIME_REGEX.is_match("00:00"));
        assert!(SLOT_TIME_REGEX.is_match("09:00"));
        assert!(SLOT_TIME_REGEX.is_match("10:30"));
        assert!(SLOT_TIME_REGEX.is_match("19:45"));
        assert!(SLOT_TIME_REGEX.is_match("23:59"));
    }

    #[test]
    fn test_slot_time_regex_invalid() {
        assert!(!SLOT_TIME_REGEX.is_match("9:00")); // missing leading zero
        assert!(!SLOT_TIME_REGEX.is_match("24:00")); // hour out of range
        assert!(!SLOT_TIME_REGEX.is_match("10:60")); // minute out of range
        assert!(!SLOT_TIME_REGEX.is_match("10:30:00")); // seconds not allowed
        assert!(!SLOT_TIME_REGEX.is_match("10.30")); // wrong separator
        assert!(!SLOT_TIME_REGEX.is_match("")); // empty
        assert!(!SLOT_TIME_REGEX.is_match(" 10:30")); // leading space
    }
}
