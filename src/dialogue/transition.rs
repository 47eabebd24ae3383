//! Pure dialogue transition function
//!
//! Given the current menu state and a raw user message, produces the
//! reply, the next state, and any effects. This function is pure: same
//! inputs always produce the same outputs, with no I/O.
//!
//! Matching is substring containment, not whole-word matching, and the
//! root rules are an ordered list evaluated strictly top-down. The
//! ordering is a correctness tie-break: "financial services" must be
//! checked before the generic "services" rule, or the input would route
//! to the wrong menu.

use super::{is_farewell, normalize, Effect, MenuState, ResponseCatalog};

/// Result of one dialogue turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub reply: String,
    pub next_state: MenuState,
    pub effects: Vec<Effect>,
}

impl Turn {
    fn stay(state: MenuState, reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            next_state: state,
            effects: vec![],
        }
    }

    fn goto(state: MenuState, reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            next_state: state,
            effects: vec![],
        }
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Substring pattern for a root-level rule
#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// Matches the empty (post-normalization) input
    Empty,
    Contains(&'static str),
    ContainsAny(&'static [&'static str]),
}

impl Pattern {
    fn matches(self, input: &str) -> bool {
        match self {
            Pattern::Empty => input.is_empty(),
            Pattern::Contains(needle) => input.contains(needle),
            Pattern::ContainsAny(needles) => needles.iter().any(|n| input.contains(n)),
        }
    }
}

/// Intent a root-level rule resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootIntent {
    /// Offer agent options and move into the agent menu
    Escalate,
    Greeting,
    HowAreYou,
    BotName,
    TaxInfo,
    /// Enter the financial services menu
    FinancialMenu,
    /// Enter the accounting services menu
    AccountingMenu,
    SupportHours,
}

/// Root-level intent rules, evaluated top-down. First match wins; an
/// input matching none of these escalates to the agent menu.
const ROOT_RULES: &[(Pattern, RootIntent)] = &[
    (Pattern::Empty, RootIntent::Escalate),
    (Pattern::Contains("agent"), RootIntent::Escalate),
    (
        Pattern::ContainsAny(&["hello", "hi", "hey"]),
        RootIntent::Greeting,
    ),
    (Pattern::Contains("how are you"), RootIntent::HowAreYou),
    (Pattern::Contains("name"), RootIntent::BotName),
    (
        Pattern::ContainsAny(&["tax", "income"]),
        RootIntent::TaxInfo,
    ),
    // "financial services" before "services": ordering is load-bearing.
    (
        Pattern::Contains("financial services"),
        RootIntent::FinancialMenu,
    ),
    (Pattern::Contains("services"), RootIntent::AccountingMenu),
    (
        Pattern::ContainsAny(&["support", "hours"]),
        RootIntent::SupportHours,
    ),
];

/// Compute one dialogue turn. Never fails; unmatched input falls
/// through to escalation.
pub fn respond(state: MenuState, catalog: &ResponseCatalog, raw_input: &str) -> Turn {
    let input = normalize(raw_input);

    // Farewell wins in every state, and is a pass-through: the menu
    // position is left unchanged, not reset.
    if is_farewell(&input) {
        return Turn::stay(state, &catalog.farewell);
    }

    match state {
        MenuState::Agent => agent_menu(catalog, &input),
        MenuState::Financial => financial_menu(catalog, &input),
        MenuState::Accounting => accounting_menu(catalog, &input),
        MenuState::Root => root(catalog, &input),
    }
}

fn agent_menu(catalog: &ResponseCatalog, input: &str) -> Turn {
    match input {
        "1" => Turn::stay(MenuState::Agent, &catalog.hold_for_agent)
            .with_effect(Effect::notify_agent(input)),
        "2" => Turn::stay(MenuState::Agent, &catalog.call_us),
        "3" => Turn::stay(MenuState::Agent, &catalog.email_us),
        "exit" => Turn::goto(MenuState::Root, &catalog.exit_contact),
        _ => Turn::stay(MenuState::Agent, &catalog.invalid_choice),
    }
}

fn financial_menu(catalog: &ResponseCatalog, input: &str) -> Turn {
    match input {
        "1" => Turn::stay(MenuState::Financial, &catalog.financial_items[0]),
        "2" => Turn::stay(MenuState::Financial, &catalog.financial_items[1]),
        "3" => Turn::stay(MenuState::Financial, &catalog.financial_items[2]),
        "4" => Turn::stay(MenuState::Financial, &catalog.financial_items[3]),
        "exit" => Turn::goto(MenuState::Root, &catalog.exit_financial),
        // Unrecognized input re-prompts with the listing, not an error
        _ => Turn::stay(MenuState::Financial, &catalog.financial_menu),
    }
}

fn accounting_menu(catalog: &ResponseCatalog, input: &str) -> Turn {
    match input {
        "1" => Turn::stay(MenuState::Accounting, &catalog.accounting_items[0]),
        "2" => Turn::stay(MenuState::Accounting, &catalog.accounting_items[1]),
        "3" => Turn::stay(MenuState::Accounting, &catalog.accounting_items[2]),
        "4" => Turn::stay(MenuState::Accounting, &catalog.accounting_items[3]),
        "5" => Turn::stay(MenuState::Accounting, &catalog.accounting_items[4]),
        "6" => Turn::goto(MenuState::Financial, &catalog.financial_menu),
        "exit" => Turn::goto(MenuState::Root, &catalog.exit_accounting),
        _ => Turn::stay(MenuState::Accounting, &catalog.accounting_menu),
    }
}

fn root(catalog: &ResponseCatalog, input: &str) -> Turn {
    let intent = ROOT_RULES
        .iter()
        .find(|(pattern, _)| pattern.matches(input))
        .map(|&(_, intent)| intent)
        .unwrap_or(RootIntent::Escalate);

    match intent {
        RootIntent::Escalate => Turn::goto(MenuState::Agent, &catalog.fallback),
        RootIntent::Greeting => Turn::stay(MenuState::Root, &catalog.greeting),
        RootIntent::HowAreYou => Turn::stay(MenuState::Root, &catalog.how_are_you),
        RootIntent::BotName => Turn::stay(MenuState::Root, &catalog.bot_name),
        RootIntent::TaxInfo => Turn::stay(MenuState::Root, &catalog.tax_info),
        RootIntent::FinancialMenu => Turn::goto(MenuState::Financial, &catalog.financial_menu),
        RootIntent::AccountingMenu => Turn::goto(MenuState::Accounting, &catalog.accounting_menu),
        RootIntent::SupportHours => Turn::stay(MenuState::Root, &catalog.support_hours),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::ContactInfo;

    fn catalog() -> ResponseCatalog {
        ResponseCatalog::new(&ContactInfo {
            email: "ops@example.com".to_string(),
            phone: "+1-555-0100".to_string(),
            agent_response_time: "We reply fast.".to_string(),
        })
    }

    #[test]
    fn farewell_wins_in_every_state() {
        let catalog = catalog();
        for state in [
            MenuState::Root,
            MenuState::Accounting,
            MenuState::Financial,
            MenuState::Agent,
        ] {
            let turn = respond(state, &catalog, "ok goodbye");
            assert_eq!(turn.reply, catalog.farewell);
            // Pass-through: state unchanged
            assert_eq!(turn.next_state, state);
            assert!(turn.effects.is_empty());
        }
    }

    #[test]
    fn services_enters_accounting_menu() {
        let catalog = catalog();
        let turn = respond(MenuState::Root, &catalog, "services");
        assert_eq!(turn.next_state, MenuState::Accounting);
        assert_eq!(turn.reply, catalog.accounting_menu);
    }

    #[test]
    fn financial_services_enters_financial_menu_directly() {
        let catalog = catalog();
        let turn = respond(MenuState::Root, &catalog, "financial services");
        assert_eq!(turn.next_state, MenuState::Financial);
        assert_eq!(turn.reply, catalog.financial_menu);
    }

    #[test]
    fn typoed_services_still_routes() {
        let catalog = catalog();
        let turn = respond(MenuState::Root, &catalog, "what serveces do you offer");
        assert_eq!(turn.next_state, MenuState::Accounting);
    }

    #[test]
    fn greeting_does_not_change_state() {
        let catalog = catalog();
        let turn = respond(MenuState::Root, &catalog, "helo there");
        assert_eq!(turn.reply, catalog.greeting);
        assert_eq!(turn.next_state, MenuState::Root);
    }

    #[test]
    fn tax_keywords_return_tax_info() {
        let catalog = catalog();
        for input in ["tax", "income", "taks"] {
            let turn = respond(MenuState::Root, &catalog, input);
            assert_eq!(turn.reply, catalog.tax_info, "for input {input:?}");
            assert_eq!(turn.next_state, MenuState::Root);
        }
    }

    #[test]
    fn empty_input_escalates() {
        let catalog = catalog();
        let turn = respond(MenuState::Root, &catalog, "   ");
        assert_eq!(turn.reply, catalog.fallback);
        assert_eq!(turn.next_state, MenuState::Agent);
    }

    #[test]
    fn unmatched_input_escalates() {
        let catalog = catalog();
        let turn = respond(MenuState::Root, &catalog, "quantum entanglement");
        assert_eq!(turn.reply, catalog.fallback);
        assert_eq!(turn.next_state, MenuState::Agent);
        assert!(turn.effects.is_empty());
    }

    #[test]
    fn agent_keyword_escalates() {
        let catalog = catalog();
        let turn = respond(MenuState::Root, &catalog, "talk to agent");
        assert_eq!(turn.next_state, MenuState::Agent);
        assert_eq!(turn.reply, catalog.fallback);
    }

    #[test]
    fn accounting_six_switches_to_financial() {
        let catalog = catalog();
        let turn = respond(MenuState::Accounting, &catalog, "6");
        assert_eq!(turn.next_state, MenuState::Financial);
        assert_eq!(turn.reply, catalog.financial_menu);
    }

    #[test]
    fn accounting_exit_returns_to_root() {
        let catalog = catalog();
        let turn = respond(MenuState::Accounting, &catalog, "exit");
        assert_eq!(turn.next_state, MenuState::Root);
        assert_eq!(turn.reply, catalog.exit_accounting);
    }

    #[test]
    fn accounting_unrecognized_reprompts_with_listing() {
        let catalog = catalog();
        let turn = respond(MenuState::Accounting, &catalog, "7");
        assert_eq!(turn.next_state, MenuState::Accounting);
        assert_eq!(turn.reply, catalog.accounting_menu);
    }

    #[test]
    fn financial_unrecognized_reprompts_with_listing() {
        let catalog = catalog();
        let turn = respond(MenuState::Financial, &catalog, "banana");
        assert_eq!(turn.next_state, MenuState::Financial);
        assert_eq!(turn.reply, catalog.financial_menu);
    }

    #[test]
    fn agent_one_notifies_exactly_once() {
        let catalog = catalog();
        let turn = respond(MenuState::Agent, &catalog, "1");
        assert_eq!(turn.reply, catalog.hold_for_agent);
        assert_eq!(turn.next_state, MenuState::Agent);
        assert_eq!(
            turn.effects,
            vec![Effect::NotifyAgent {
                message: "1".to_string()
            }]
        );
    }

    #[test]
    fn agent_phone_and_email_options() {
        let catalog = catalog();
        assert_eq!(
            respond(MenuState::Agent, &catalog, "2").reply,
            catalog.call_us
        );
        assert_eq!(
            respond(MenuState::Agent, &catalog, "3").reply,
            catalog.email_us
        );
    }

    #[test]
    fn agent_invalid_choice_keeps_state() {
        let catalog = catalog();
        let turn = respond(MenuState::Agent, &catalog, "9");
        assert_eq!(turn.reply, catalog.invalid_choice);
        assert_eq!(turn.next_state, MenuState::Agent);
    }

    #[test]
    fn agent_exit_returns_to_root() {
        let catalog = catalog();
        let turn = respond(MenuState::Agent, &catalog, "exit");
        assert_eq!(turn.next_state, MenuState::Root);
        assert_eq!(turn.reply, catalog.exit_contact);
    }

    #[test]
    fn services_then_six_then_two_then_exit() {
        let catalog = catalog();
        let mut state = MenuState::Root;

        let turn = respond(state, &catalog, "services");
        assert_eq!(turn.reply, catalog.accounting_menu);
        state = turn.next_state;

        let turn = respond(state, &catalog, "6");
        assert_eq!(turn.reply, catalog.financial_menu);
        state = turn.next_state;

        let turn = respond(state, &catalog, "2");
        assert_eq!(turn.reply, catalog.financial_items[1]);
        assert_eq!(turn.next_state, MenuState::Financial);
        state = turn.next_state;

        let turn = respond(state, &catalog, "exit");
        assert_eq!(turn.reply, catalog.exit_financial);
        assert_eq!(turn.next_state, MenuState::Root);
    }
}
