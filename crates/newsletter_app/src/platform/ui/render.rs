use newsletter_core::view_model::{
    ADD_LABEL, CARD_OPEN_LABEL, CARD_SUBTITLE, CARD_TITLE, DIALOG_PROMPT, DIALOG_SUCCESS,
    DIALOG_TITLE,
};
use newsletter_core::{PrimaryAction, Toast, WidgetViewModel};
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout::{card_rect, dialog_rect, page_regions, toast_rect};
use crate::platform::input::UiState;

pub fn draw(frame: &mut Frame<'_>, view: &WidgetViewModel, ui: &UiState) {
    let area = frame.area();
    let (body, footer) = page_regions(area);

    frame.render_widget(card(), card_rect(body));

    let hint = if view.dialog_open { HINT_DIALOG } else { HINT_CARD };
    frame.render_widget(Paragraph::new(Line::styled(hint, muted_style())), footer);

    if view.dialog_open {
        let rect = dialog_rect(area, 40, 12);
        frame.render_widget(Clear, rect);
        frame.render_widget(dialog(view, ui), rect);
    }

    if let Some(toast) = &view.toast {
        let text = toast_line(toast);
        let rect = toast_rect(area, text.width() as u16);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(toast_style())
                .block(Block::default().borders(Borders::ALL).style(toast_style())),
            rect,
        );
    }
}

fn card() -> Paragraph<'static> {
    let lines = vec![
        Line::styled(CARD_TITLE, title_style()),
        Line::styled(CARD_SUBTITLE, muted_style()),
        Line::default(),
        Line::from(Span::styled(format!(" {CARD_OPEN_LABEL} "), button_style())),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn dialog<'a>(view: &'a WidgetViewModel, ui: &UiState) -> Paragraph<'a> {
    let mut lines = vec![
        Line::from(DIALOG_PROMPT),
        Line::default(),
        Line::from(vec![
            Span::raw("> "),
            Span::raw(view.input.as_str()),
            Span::styled("_", muted_style()),
            Span::raw("  "),
            Span::styled(format!(" {ADD_LABEL} "), button_style()),
        ]),
        Line::default(),
    ];

    for (index, topic) in view.topics.iter().enumerate() {
        let selected = ui.selected_topic == Some(index);
        lines.push(Line::from(vec![
            Span::styled(format!(" {topic} "), chip_style(selected)),
            Span::styled(format!("{REMOVE_MARK} "), remove_style()),
        ]));
    }

    lines.push(Line::default());
    lines.push(primary_button(view.primary_action));
    if view.show_success {
        lines.push(Line::from(DIALOG_SUCCESS));
    }

    Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(DIALOG_TITLE, title_style())),
    )
}

fn primary_button(action: PrimaryAction) -> Line<'static> {
    match action {
        PrimaryAction::Submit => Line::from(Span::styled(
            format!(" {} ", action.label()),
            button_style(),
        )),
        PrimaryAction::Cancel => Line::from(Span::styled(
            format!(" {LOADER} {} ", action.label()),
            cancel_style(),
        )),
    }
}

fn toast_line(toast: &Toast) -> Line<'static> {
    if toast.busy {
        Line::from(format!("{LOADER} {}", toast.text))
    } else {
        Line::from(toast.text)
    }
}
