use newsletter_core::{update, Msg, WidgetState};
use pretty_assertions::assert_eq;

fn add_topic(state: WidgetState, text: &str) -> WidgetState {
    let (state, _) = update(state, Msg::InputChanged(text.to_string()));
    let (state, effects) = update(state, Msg::AddTopicClicked);
    assert!(effects.is_empty());
    state
}

fn init_logging() {
    newsletter_logging::initialize_for_tests();
}

#[test]
fn adds_keep_first_insertion_order_without_duplicates() {
    init_logging();
    let mut state = WidgetState::new();
    for text in ["rust", " async ", "rust", "tokio", "async", "  tokio"] {
        state = add_topic(state, text);
    }

    assert_eq!(state.view().topics, vec!["rust", "async", "tokio"]);
}

#[test]
fn blank_input_never_changes_list() {
    init_logging();
    let state = add_topic(WidgetState::new(), "rust");
    let before = state.topics().clone();

    let state = add_topic(state, "");
    let mut state = add_topic(state, "   ");

    assert_eq!(state.topics(), &before);
    assert!(state.consume_dirty());
    let (mut state, _) = update(state, Msg::AddTopicClicked);
    assert!(!state.consume_dirty());
}

#[test]
fn successful_add_clears_input_and_rejected_add_keeps_it() {
    init_logging();
    let state = add_topic(WidgetState::new(), "rust");
    assert_eq!(state.view().input, "");

    let state = add_topic(state, "rust ");
    assert_eq!(state.view().input, "rust ");
    assert_eq!(state.topics().len(), 1);
}

#[test]
fn remove_then_add_moves_topic_to_end() {
    init_logging();
    let mut state = WidgetState::new();
    for text in ["a", "b", "c"] {
        state = add_topic(state, text);
    }

    let (state, effects) = update(state, Msg::RemoveTopicClicked("a".to_string()));
    assert!(effects.is_empty());
    let state = add_topic(state, "a");

    assert_eq!(state.view().topics, vec!["b", "c", "a"]);
}

#[test]
fn removing_unknown_topic_is_not_dirty() {
    init_logging();
    let mut state = add_topic(WidgetState::new(), "a");
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::RemoveTopicClicked("A".to_string()));
    assert!(!state.consume_dirty());
    assert_eq!(state.view().topics, vec!["a"]);
}

#[test]
fn dialog_opens_and_closes() {
    init_logging();
    let (state, _) = update(WidgetState::new(), Msg::OpenDialogClicked);
    assert!(state.view().dialog_open);

    let (state, effects) = update(state, Msg::DialogOpenChanged(false));
    assert!(!state.view().dialog_open);
    assert!(effects.is_empty());
}
