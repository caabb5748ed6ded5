//! Token scanning against a declared vocabulary.
//!
//! The parser walks the raw token sequence left to right with one token of
//! lookahead, classifying every token as an option name, a flag name, or
//! free-form data, and mutating the registry as it goes.

use crate::error::{ArgotError, Result};
use crate::registry::Registry;

/// Parse a raw token sequence against the declared vocabulary.
///
/// Consumes the registry and returns it with option values, flag states and
/// data tokens filled in. The first failure aborts the scan; once the scan
/// completes, required options are checked.
///
/// A token following an option name is only consumed as its value when it
/// is not itself a declared option or flag name. Two declared names back to
/// back are diagnosed as a missing value rather than one name being
/// swallowed as the other's value, which also means a legitimate data value
/// that collides with a declared name cannot be passed in option position.
pub fn parse(mut registry: Registry, tokens: &[String]) -> Result<Registry> {
    let mut i = 0;
    while i < tokens.len() {
        let current = &tokens[i];
        let next = tokens.get(i + 1);

        if registry.option_exists(current) {
            match next {
                Some(value) if !registry.option_exists(value) && !registry.flag_exists(value) => {
                    // AlreadySet from the latch aborts the whole parse
                    registry.set_option(current, value)?;
                    i += 2;
                }
                _ => {
                    return Err(ArgotError::MissingOptionValue {
                        option: current.clone(),
                        found: next.cloned(),
                    });
                }
            }
        } else if registry.flag_exists(current) {
            registry.set_flag(current)?;
            i += 1;
        } else {
            registry.append_data(current);
            i += 1;
        }
    }

    registry.validate_required()?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn vocabulary() -> Registry {
        let mut registry = Registry::new();
        registry
            .declare_option("--option1", None, true, "first option")
            .unwrap();
        registry
            .declare_option("--option2", None, true, "second option")
            .unwrap();
        registry.declare_flag("--flag1", "first flag").unwrap();
        registry.declare_flag("--flag2", "second flag").unwrap();
        registry
    }

    #[test]
    fn test_assigns_required_options() {
        let registry = parse(
            vocabulary(),
            &tokens(&["--option1", "value1", "--option2", "value2"]),
        )
        .unwrap();

        assert_eq!(registry.option_value("--option1").unwrap(), Some("value1"));
        assert_eq!(registry.option_value("--option2").unwrap(), Some("value2"));
        assert!(!registry.flag_state("--flag1").unwrap());
        assert!(!registry.flag_state("--flag2").unwrap());
    }

    #[test]
    fn test_reports_unassigned_required_options() {
        let err = parse(vocabulary(), &tokens(&["--option1", "value1"])).unwrap_err();
        assert!(matches!(err, ArgotError::MissingRequired(names) if names == ["--option2"]));
    }

    #[test]
    fn test_option_followed_by_option_is_a_missing_value() {
        let err = parse(
            vocabulary(),
            &tokens(&["--option1", "--option2", "user1", "--flag1"]),
        )
        .unwrap_err();

        match err {
            ArgotError::MissingOptionValue { option, found } => {
                assert_eq!(option, "--option1");
                assert_eq!(found.as_deref(), Some("--option2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_option_followed_by_flag_is_a_missing_value() {
        let err = parse(vocabulary(), &tokens(&["--option1", "--flag1"])).unwrap_err();
        assert!(matches!(err, ArgotError::MissingOptionValue { option, .. } if option == "--option1"));
    }

    #[test]
    fn test_option_at_end_of_input_is_a_missing_value() {
        let mut registry = Registry::new();
        registry.declare_option("--mode", None, false, "").unwrap();

        let err = parse(registry, &tokens(&["--mode"])).unwrap_err();
        match err {
            ArgotError::MissingOptionValue { option, found } => {
                assert_eq!(option, "--mode");
                assert_eq!(found, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_data_tokens_keep_encounter_order() {
        let registry = parse(
            vocabulary(),
            &tokens(&[
                "firstData",
                "--option1",
                "value1",
                "--flag2",
                "middleData",
                "--option2",
                "value2",
                "endData",
            ]),
        )
        .unwrap();

        assert_eq!(registry.data(), ["firstData", "middleData", "endData"]);
        assert!(registry.flag_state("--flag2").unwrap());
        assert!(!registry.flag_state("--flag1").unwrap());
        assert_eq!(registry.option_value("--option1").unwrap(), Some("value1"));
        assert_eq!(registry.option_value("--option2").unwrap(), Some("value2"));
    }

    #[test]
    fn test_duplicate_option_aborts_the_parse() {
        let mut registry = Registry::new();
        registry.declare_option("--mode", None, false, "").unwrap();

        let err = parse(registry, &tokens(&["--mode", "fast", "--mode", "slow"])).unwrap_err();
        assert!(matches!(err, ArgotError::AlreadySet(name) if name == "--mode"));
    }

    #[test]
    fn test_repeated_flag_is_a_no_op() {
        let mut registry = Registry::new();
        registry.declare_flag("--verbose", "").unwrap();

        let registry = parse(registry, &tokens(&["--verbose", "--verbose"])).unwrap();
        assert!(registry.flag_state("--verbose").unwrap());
    }

    #[test]
    fn test_empty_input_with_required_options_fails() {
        let err = parse(vocabulary(), &[]).unwrap_err();
        assert!(matches!(err, ArgotError::MissingRequired(names) if names.len() == 2));
    }

    #[test]
    fn test_empty_input_with_empty_vocabulary_succeeds() {
        let registry = parse(Registry::new(), &[]).unwrap();
        assert!(registry.data().is_empty());
    }

    #[test]
    fn test_defaults_survive_an_input_that_never_mentions_them() {
        let mut registry = Registry::new();
        registry
            .declare_option("--mode", Some("fast"), false, "")
            .unwrap();

        let registry = parse(registry, &tokens(&["just", "data"])).unwrap();
        assert_eq!(registry.option_value("--mode").unwrap(), Some("fast"));
        assert_eq!(registry.data(), ["just", "data"]);
    }
}
