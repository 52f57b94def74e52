use proptest::prelude::*;
use switchline::{Kind, Parsed, Switch, SwitchSet, Value, parse};

fn switches() -> SwitchSet {
    SwitchSet::new()
        .with(Switch::typed("auth", Kind::String).unwrap())
        .with(Switch::typed("verbose", Kind::Bool).unwrap())
        .with(Switch::with_default("count", 1i64).unwrap())
        .with(Switch::builder("ratio").short('R').kind(Kind::Float).build().unwrap())
}

/// Tokens drawn from a small vocabulary so that switches, values, unknown
/// switches, and positionals all show up often.
fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("--auth".to_owned()),
        Just("-a".to_owned()),
        Just("--verbose".to_owned()),
        Just("-v".to_owned()),
        Just("--count".to_owned()),
        Just("-c".to_owned()),
        Just("-R".to_owned()),
        Just("--bogus".to_owned()),
        "[0-9]{1,3}",
        "[a-z]{1,6}",
        "-[0-9]",
    ]
}

fn argv() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token(), 0..12).prop_map(|tokens| {
        let mut argv = vec!["prog".to_owned()];
        argv.extend(tokens);
        argv
    })
}

/// Replay a successful parse, and return how many tokens the switch phase
/// consumed.
fn switch_phase_len(argv: &[String]) -> usize {
    let mut index = 1;

    while let Some(token) = argv.get(index) {
        index += match token.as_str() {
            "--verbose" | "-v" => 1,
            "--auth" | "-a" | "--count" | "-c" | "-R" => 2,
            _ => break,
        };
    }

    index
}

proptest! {
    #[test]
    fn no_token_is_dropped_or_duplicated(argv in argv()) {
        let switches = switches();

        if let Ok(Parsed::Success { positionals, .. }) = parse(&argv, &switches) {
            let consumed = switch_phase_len(&argv);

            prop_assert_eq!(consumed + positionals.len(), argv.len());
            prop_assert_eq!(positionals, &argv[consumed..]);
        }
    }

    #[test]
    fn parsing_is_repeatable(argv in argv()) {
        let first = parse(&argv, &switches());
        let second = parse(&argv, &switches());

        prop_assert_eq!(first, second);
    }

    #[test]
    fn defaults_survive_when_absent(argv in argv()) {
        let switches = switches();

        if let Ok(Parsed::Success { options, .. }) = parse(&argv, &switches) {
            let mentioned = argv[1..switch_phase_len(&argv)]
                .iter()
                .any(|token| token == "--count" || token == "-c");

            if !mentioned {
                prop_assert_eq!(options.get("count"), Some(&Value::Int(1)));
            }
        }
    }

    #[test]
    fn strings_are_taken_verbatim(value in "[a-zA-Z0-9 ./_]{0,20}") {
        let switches = switches();
        let argv = ["prog", "--auth", value.as_str()];

        // An empty value doesn't start with '-', so it's a valid value
        let parsed = parse(&argv, &switches).unwrap().success().unwrap();
        prop_assert_eq!(parsed.1.string("auth"), Some(value.as_str()));
        prop_assert!(parsed.0.is_empty());
    }
}
