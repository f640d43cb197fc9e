//! Optional checks on an entity list before generation.
//!
//! Generation never calls these implicitly: a degenerate list renders as
//! empty output. `stubgen check` and `generate --strict` opt in.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::entities::EntityNameList;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][A-Za-z0-9_]*$").expect("identifier regex"));

/// True if `name` can be spliced into a generated identifier.
pub fn is_identifier_fragment(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name)
}

/// Check semantic invariants of an entity list:
/// - At least two names
/// - Each name is a lowercase-led identifier fragment
/// - No duplicate names
pub fn validate_entities(entities: &EntityNameList) -> Vec<String> {
    let mut errors = Vec::new();
    if entities.is_empty() {
        errors.push("entity list is empty".to_string());
        return errors;
    }
    if entities.len() < 2 {
        errors.push(format!(
            "need at least 2 entities to form a pair, got {}",
            entities.len()
        ));
    }

    let mut seen = HashSet::new();
    for (index, name) in entities.names().iter().enumerate() {
        if !is_identifier_fragment(name) {
            errors.push(format!("entity {index}: '{name}' is not a valid identifier"));
        }
        if !seen.insert(name.as_str()) {
            errors.push(format!("entity {index}: duplicate name '{name}'"));
        }
    }
    errors
}

/// True when the only violation is a list too short to pair.
pub fn is_degenerate(entities: &EntityNameList) -> bool {
    entities.len() < 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entities;

    #[test]
    fn valid_list_has_no_errors() {
        assert!(validate_entities(&entities(&["mirror", "portal", "bigRock_2"])).is_empty());
    }

    #[test]
    fn reports_each_violation() {
        let errors = validate_entities(&entities(&["mirror", "Portal", "mirror", "9x"]));
        assert!(errors.iter().any(|err| err.contains("'Portal' is not a valid identifier")));
        assert!(errors.iter().any(|err| err.contains("'9x' is not a valid identifier")));
        assert!(errors.iter().any(|err| err.contains("duplicate name 'mirror'")));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn short_lists_are_reported() {
        assert_eq!(validate_entities(&entities(&[])), vec!["entity list is empty"]);
        let errors = validate_entities(&entities(&["solo"]));
        assert!(errors[0].contains("at least 2 entities"));
        assert!(is_degenerate(&entities(&["solo"])));
        assert!(!is_degenerate(&entities(&["a", "b"])));
    }

    #[test]
    fn empty_name_is_not_an_identifier() {
        assert!(!is_identifier_fragment(""));
    }
}
