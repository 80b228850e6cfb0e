use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use newsletter_core::{Msg, PrimaryAction, WidgetViewModel};

/// Host-page state that the widget does not own.
#[derive(Debug, Default)]
pub struct UiState {
    pub selected_topic: Option<usize>,
    pub should_quit: bool,
}

impl UiState {
    /// Keeps the topic selection inside a list of `len` entries.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_topic = match (self.selected_topic, len) {
            (_, 0) => None,
            (Some(index), len) => Some(index.min(len - 1)),
            (None, _) => None,
        };
    }

    fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_topic = Some(match self.selected_topic {
            Some(0) | None => 0,
            Some(index) => index - 1,
        });
    }

    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_topic = Some(match self.selected_topic {
            None => 0,
            Some(index) => (index + 1).min(len - 1),
        });
    }
}

/// Translates a key press into a widget message, updating host-only state.
pub fn map_key(key: KeyEvent, view: &WidgetViewModel, ui: &mut UiState) -> Option<Msg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        ui.should_quit = true;
        return None;
    }

    if !view.dialog_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('a') => Some(Msg::OpenDialogClicked),
            KeyCode::Char('q') | KeyCode::Esc => {
                ui.should_quit = true;
                None
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Msg::DialogOpenChanged(false)),
        KeyCode::Enter => Some(Msg::AddTopicClicked),
        KeyCode::F(2) => Some(primary_msg(view)),
        KeyCode::Char('s') if ctrl => Some(primary_msg(view)),
        KeyCode::Up => {
            ui.select_previous(view.topics.len());
            None
        }
        KeyCode::Down => {
            ui.select_next(view.topics.len());
            None
        }
        KeyCode::Delete => ui
            .selected_topic
            .and_then(|index| view.topics.get(index))
            .map(|topic| Msg::RemoveTopicClicked(topic.clone())),
        KeyCode::Backspace => {
            let mut text = view.input.clone();
            text.pop();
            Some(Msg::InputChanged(text))
        }
        KeyCode::Char(ch) if !ctrl => {
            let mut text = view.input.clone();
            text.push(ch);
            Some(Msg::InputChanged(text))
        }
        _ => None,
    }
}

fn primary_msg(view: &WidgetViewModel) -> Msg {
    match view.primary_action {
        PrimaryAction::Submit => Msg::SubmitClicked,
        PrimaryAction::Cancel => Msg::CancelClicked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn dialog(topics: &[&str], input: &str) -> WidgetViewModel {
        WidgetViewModel {
            dialog_open: true,
            input: input.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            ..WidgetViewModel::default()
        }
    }

    #[test]
    fn card_keys_open_dialog_or_quit() {
        let view = WidgetViewModel::default();
        let mut ui = UiState::default();

        assert_eq!(map_key(press(KeyCode::Enter), &view, &mut ui), Some(Msg::OpenDialogClicked));
        assert_eq!(map_key(press(KeyCode::Char('q')), &view, &mut ui), None);
        assert!(ui.should_quit);
    }

    #[test]
    fn typing_edits_input() {
        let view = dialog(&[], "rus");
        let mut ui = UiState::default();

        assert_eq!(
            map_key(press(KeyCode::Char('t')), &view, &mut ui),
            Some(Msg::InputChanged("rust".to_string()))
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace), &view, &mut ui),
            Some(Msg::InputChanged("ru".to_string()))
        );
        assert_eq!(map_key(press(KeyCode::Enter), &view, &mut ui), Some(Msg::AddTopicClicked));
    }

    #[test]
    fn primary_key_follows_button_slot() {
        let mut view = dialog(&["rust"], "");
        let mut ui = UiState::default();
        assert_eq!(map_key(ctrl('s'), &view, &mut ui), Some(Msg::SubmitClicked));

        view.primary_action = PrimaryAction::Cancel;
        assert_eq!(map_key(press(KeyCode::F(2)), &view, &mut ui), Some(Msg::CancelClicked));
    }

    #[test]
    fn delete_removes_selected_topic() {
        let view = dialog(&["a", "b", "c"], "");
        let mut ui = UiState::default();

        assert_eq!(map_key(press(KeyCode::Delete), &view, &mut ui), None);
        map_key(press(KeyCode::Down), &view, &mut ui);
        map_key(press(KeyCode::Down), &view, &mut ui);
        assert_eq!(ui.selected_topic, Some(1));

        assert_eq!(
            map_key(press(KeyCode::Delete), &view, &mut ui),
            Some(Msg::RemoveTopicClicked("b".to_string()))
        );
    }

    #[test]
    fn escape_closes_dialog_without_quitting() {
        let view = dialog(&[], "");
        let mut ui = UiState::default();

        assert_eq!(
            map_key(press(KeyCode::Esc), &view, &mut ui),
            Some(Msg::DialogOpenChanged(false))
        );
        assert!(!ui.should_quit);
    }

    #[test]
    fn selection_is_clamped_after_removal() {
        let mut ui = UiState {
            selected_topic: Some(4),
            should_quit: false,
        };
        ui.clamp_selection(2);
        assert_eq!(ui.selected_topic, Some(1));
        ui.clamp_selection(0);
        assert_eq!(ui.selected_topic, None);
    }
}
