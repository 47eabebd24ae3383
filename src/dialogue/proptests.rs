//! Property tests for the dialogue engine

use super::{normalize, respond, ContactInfo, MenuState, ResponseCatalog};
use proptest::prelude::*;

fn catalog() -> ResponseCatalog {
    ResponseCatalog::new(&ContactInfo {
        email: "ops@example.com".to_string(),
        phone: "+1-555-0100".to_string(),
        agent_response_time: "We reply fast.".to_string(),
    })
}

fn any_state() -> impl Strategy<Value = MenuState> {
    prop_oneof![
        Just(MenuState::Root),
        Just(MenuState::Accounting),
        Just(MenuState::Financial),
        Just(MenuState::Agent),
    ]
}

proptest! {
    /// Transitions are total: every (state, input) pair yields a
    /// non-empty reply. There is no stuck state and no error path.
    #[test]
    fn every_turn_yields_a_reply(state in any_state(), input in ".{0,64}") {
        let turn = respond(state, &catalog(), &input);
        prop_assert!(!turn.reply.is_empty());
    }

    /// A farewell keyword dominates regardless of state, and leaves the
    /// state untouched.
    #[test]
    fn farewell_dominates(state in any_state(), prefix in "[a-z ]{0,16}") {
        let catalog = catalog();
        let input = format!("{prefix} goodbye");
        let turn = respond(state, &catalog, &input);
        prop_assert_eq!(turn.reply, catalog.farewell);
        prop_assert_eq!(turn.next_state, state);
    }

    /// Normalization is idempotent on text built from canonical
    /// keywords that contain no variant substrings.
    #[test]
    fn normalize_idempotent_on_canonical_words(
        words in proptest::collection::vec(
            prop_oneof![
                Just("hello"),
                Just("hi"),
                Just("tax"),
                Just("support"),
                Just("name"),
                Just("how are you"),
            ],
            1..4,
        )
    ) {
        let input = words.join(" ");
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Menu selections never produce effects except agent option "1".
    #[test]
    fn only_agent_option_one_notifies(state in any_state(), input in "[0-9]") {
        let turn = respond(state, &catalog(), &input);
        if state == MenuState::Agent && input == "1" {
            prop_assert_eq!(turn.effects.len(), 1);
        } else {
            prop_assert!(turn.effects.is_empty());
        }
    }
}
