//! Ordered persona choices for the selector
//!
//! The registry's HashMap has no stable iteration order; the selector list
//! uses this table so personas always appear in the same order.

/// All available persona choices (display_name, id)
pub const PERSONA_CHOICES: &[(&str, &str)] = &[
    ("Video Director", "director"),
    ("Dance Instructor", "dancer"),
    ("Fashion Stylist", "stylist"),
    ("Acting Coach", "actor"),
    ("Art Curator", "curator"),
];

/// Validate a persona ID exists
pub fn is_valid_persona(id: &str) -> bool {
    PERSONA_CHOICES.iter().any(|(_, pid)| *pid == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_choices_complete() {
        assert_eq!(PERSONA_CHOICES.len(), 5);
    }

    #[test]
    fn test_is_valid_persona() {
        assert!(is_valid_persona("director"));
        assert!(is_valid_persona("curator"));
        assert!(!is_valid_persona("invalid"));
    }

    #[test]
    fn test_all_personas_have_unique_ids() {
        let mut ids: Vec<&str> = PERSONA_CHOICES.iter().map(|(_, id)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PERSONA_CHOICES.len(), "Duplicate persona IDs found");
    }
}
