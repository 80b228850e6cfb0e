use newsletter_logging::nl_debug;

use crate::{Effect, Msg, WidgetState, TASK_COMPLETED};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WidgetState, msg: Msg) -> (WidgetState, Vec<Effect>) {
    let effects = match msg {
        Msg::OpenDialogClicked => {
            state.set_dialog_open(true);
            Vec::new()
        }
        Msg::DialogOpenChanged(open) => {
            state.set_dialog_open(open);
            Vec::new()
        }
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::AddTopicClicked => {
            state.commit_input();
            Vec::new()
        }
        Msg::RemoveTopicClicked(topic) => {
            state.remove_topic(&topic);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The send button is replaced by cancel while loading.
            if state.topics().is_empty() || state.is_loading() {
                return (state, Vec::new());
            }
            let attempt = state.begin_attempt();
            vec![Effect::Submit {
                attempt,
                topics: state.topics().to_vec(),
            }]
        }
        Msg::CancelClicked => {
            if !state.is_loading() {
                return (state, Vec::new());
            }
            state.cancel_attempt();
            vec![Effect::StopPolling]
        }
        Msg::SubmissionFailed { attempt } => {
            if state.is_current(attempt) && !state.is_polling() {
                state.fail_attempt();
            } else {
                nl_debug!("Ignoring failure of stale attempt {}", attempt);
            }
            Vec::new()
        }
        Msg::TaskAccepted { attempt, task_id } => {
            if state.is_current(attempt) && !state.is_polling() {
                state.accept_task(task_id.clone());
                vec![Effect::StartPolling { attempt, task_id }]
            } else {
                nl_debug!("Ignoring task {} from stale attempt {}", task_id, attempt);
                Vec::new()
            }
        }
        Msg::TaskStatusReported { attempt, status } => {
            if !(state.is_current(attempt) && state.is_polling()) {
                nl_debug!("Ignoring status {:?} from stale attempt {}", status, attempt);
                Vec::new()
            } else if status == TASK_COMPLETED {
                state.complete_attempt();
                vec![Effect::StopPolling]
            } else {
                Vec::new()
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
