use ratatui::style::{Color, Modifier, Style};

pub const TICK_MILLIS: u64 = 75;

pub const HINT_CARD: &str = "Enter: Assinar  q: sair";
pub const HINT_DIALOG: &str =
    "Enter: Adicionar  ↑/↓ + Del: remover  Ctrl+S/F2: Enviar/Cancelar  Esc: fechar";
pub const LOADER: &str = "◌";
pub const REMOVE_MARK: &str = "✕";

pub const CARD_WIDTH: u16 = 36;
pub const CARD_HEIGHT: u16 = 7;
pub const TOAST_HEIGHT: u16 = 3;
pub const TOAST_MARGIN_BOTTOM: u16 = 2;

pub fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn muted_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn button_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::White)
}

pub fn cancel_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Red)
}

pub fn chip_style(selected: bool) -> Style {
    let style = Style::default().fg(Color::Black).bg(Color::Gray);
    if selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

pub fn remove_style() -> Style {
    Style::default().fg(Color::Red).bg(Color::Gray)
}

pub fn toast_style() -> Style {
    Style::default().fg(Color::White).bg(Color::DarkGray)
}
