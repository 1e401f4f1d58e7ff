//! Property-based tests for segment, parameter and presence matching.
//!
//! Streams are drawn from a small vocabulary of declared commands, one
//! undeclared switch and free values so that nesting, repeats and unknown
//! switches all show up regularly.

use std::sync::Arc;

use argspec_core::{Argument, FoundOptions, Registry};
use proptest::prelude::*;

struct Declarations {
    registry: Registry,
    convert: Arc<Argument>,
    input: Arc<Argument>,
    output: Arc<Argument>,
    absent: Arc<Argument>,
}

fn declarations() -> Declarations {
    let mut registry = Registry::new();
    let root = registry.add_specification(0, "--").unwrap();
    let child = registry.add_specification(1, "-").unwrap();
    Declarations {
        convert: registry.add_argument(&root, "convert").unwrap(),
        input: registry.add_argument(&child, "in").unwrap(),
        output: registry.add_argument(&child, "out").unwrap(),
        absent: registry.add_argument(&child, "absent").unwrap(),
        registry,
    }
}

/// Generate a single token: declared switches, an unknown switch or a value
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("--convert".to_string()),
        Just("-in".to_string()),
        Just("-out".to_string()),
        Just("-bogus".to_string()),
        "[a-z]{1,6}\\.[a-z]{2}",
    ]
}

fn stream_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token_strategy(), 0..12)
}

proptest! {
    #[test]
    fn absent_argument_is_never_found(tokens in stream_strategy()) {
        let d = declarations();
        let matcher = d.registry.matcher();

        prop_assert!(matcher.segment(&d.absent, &tokens).is_empty());
        prop_assert!(matcher.params(&d.absent, &tokens).is_empty());
        prop_assert!(!matcher.found(&d.absent, FoundOptions::empty(), &tokens).unwrap());
    }

    #[test]
    fn segment_is_idempotent(tokens in stream_strategy()) {
        let d = declarations();
        let matcher = d.registry.matcher();

        for argument in [&d.convert, &d.input, &d.output] {
            let once = matcher.segment(argument, &tokens);
            let twice = matcher.segment(argument, once);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn chain_params_are_stable(tokens in stream_strategy()) {
        let d = declarations();
        let matcher = d.registry.matcher();
        let chain = vec![d.convert.clone(), d.input.clone()];

        let first = matcher.chain_params(&chain, &tokens).to_vec();
        let second = matcher.chain_params(&chain, &tokens).to_vec();
        prop_assert_eq!(&first, &second);

        // parameters are never switches of any tier
        prop_assert!(first.iter().all(|token| !token.starts_with('-')));
    }

    #[test]
    fn segment_starts_with_the_command(tokens in stream_strategy()) {
        let d = declarations();
        let matcher = d.registry.matcher();

        let segment = matcher.segment(&d.input, &tokens);
        if let Some(first) = segment.first() {
            prop_assert_eq!(first.as_str(), "-in");
            prop_assert!(segment[1..].iter().all(|token| !token.starts_with('-')));
        }
    }

    #[test]
    fn conflicting_children_options_always_error(tokens in stream_strategy()) {
        let d = declarations();
        let options = FoundOptions::WITH_CHILDREN | FoundOptions::WITHOUT_CHILDREN;
        prop_assert!(d.registry.matcher().found(&d.convert, options, &tokens).is_err());
    }

    #[test]
    fn children_options_partition_presence(tokens in stream_strategy()) {
        let d = declarations();
        let matcher = d.registry.matcher();

        let present = matcher.found(&d.convert, FoundOptions::empty(), &tokens).unwrap();
        let with = matcher.found(&d.convert, FoundOptions::WITH_CHILDREN, &tokens).unwrap();
        let without = matcher.found(&d.convert, FoundOptions::WITHOUT_CHILDREN, &tokens).unwrap();
        prop_assert_eq!(present, with || without);
        prop_assert!(!(with && without));
    }

    #[test]
    fn occurrences_cover_every_root_command(tokens in stream_strategy()) {
        let d = declarations();
        let matcher = d.registry.matcher();

        let expected = tokens.iter().filter(|token| *token == "--convert").count();
        prop_assert_eq!(matcher.occurrences(&d.convert, &tokens).count(), expected);
    }
}
