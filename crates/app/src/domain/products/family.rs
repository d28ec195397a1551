//! Product family assignment.

pub const SUFURIA_FAMILY: &str = "Sufuria Family";
pub const GENERAL_FAMILY: &str = "General Items";

/// Resolve the family for a new product.
///
/// An explicit, non-empty family wins. Otherwise sufurias are grouped together
/// and everything else lands in the general bucket.
#[must_use]
pub fn family_of(family: Option<&str>, name: &str) -> String {
    match family {
        Some(family) if !family.is_empty() => family.to_string(),
        _ if name.to_lowercase().contains("sufuria") => SUFURIA_FAMILY.to_string(),
        _ => GENERAL_FAMILY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sufuria_names_are_grouped() {
        assert_eq!(family_of(None, "Big Sufuria Pot"), SUFURIA_FAMILY);
        assert_eq!(family_of(None, "SUFURIA 20"), SUFURIA_FAMILY);
    }

    #[test]
    fn other_names_fall_back_to_general_items() {
        assert_eq!(family_of(None, "Plate Set"), GENERAL_FAMILY);
    }

    #[test]
    fn explicit_family_is_used_verbatim() {
        assert_eq!(family_of(Some("Custom"), "Plate Set"), "Custom");
        assert_eq!(family_of(Some("Custom"), "Sufuria 20"), "Custom");
    }

    #[test]
    fn empty_family_counts_as_absent() {
        assert_eq!(family_of(Some(""), "sufuria ndogo"), SUFURIA_FAMILY);
    }
}
