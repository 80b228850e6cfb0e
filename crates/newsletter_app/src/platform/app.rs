use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use newsletter_core::{update, Msg, WidgetState, WidgetViewModel};
use newsletter_logging::{nl_info, nl_warn, redact};

use super::config::{self, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::input::{map_key, UiState};
use super::logging;
use super::terminal::{setup_terminal, HostTerminal};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let loaded = config::load_file(Path::new(CONFIG_FILENAME));
    let file_config = match &loaded {
        Ok(file) => file.clone().unwrap_or_default(),
        Err(_) => config::FileConfig::default(),
    };
    let app_config = config::resolve(file_config, config::process_env);

    logging::initialize(&app_config.log_file);
    if let Err(err) = loaded {
        nl_warn!("Ignoring settings file: {}", err);
    }
    nl_info!(
        "Configured api={:?} user={:?} password={} poll_interval={:?}",
        app_config.engine.api.base_url,
        app_config.engine.api.username,
        redact(app_config.engine.api.password.as_deref()),
        app_config.engine.poll_interval
    );

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(app_config.engine, msg_tx).context("starting engine")?;

    let (mut terminal, guard) = setup_terminal().context("setting up terminal")?;
    let result = HostPage::new(runner, msg_rx).run(&mut terminal);
    drop(guard);
    nl_info!("Host page closed");
    result
}

/// Owns the widget state and drives it from key presses and engine results.
struct HostPage {
    state: WidgetState,
    view: WidgetViewModel,
    ui: UiState,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    needs_redraw: bool,
}

impl HostPage {
    fn new(runner: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        let state = WidgetState::new();
        let view = state.view();
        Self {
            state,
            view,
            ui: UiState::default(),
            runner,
            msg_rx,
            needs_redraw: true,
        }
    }

    fn run(&mut self, terminal: &mut HostTerminal) -> anyhow::Result<()> {
        let tick = Duration::from_millis(ui::constants::TICK_MILLIS);

        while !self.ui.should_quit {
            self.process_pending_messages();

            if self.needs_redraw {
                let (view, ui_state) = (&self.view, &self.ui);
                terminal
                    .draw(|frame| ui::render::draw(frame, view, ui_state))
                    .context("drawing host page")?;
                self.needs_redraw = false;
            }

            if !event::poll(tick).context("polling terminal events")? {
                self.dispatch_msg(Msg::Tick);
                continue;
            }
            match event::read().context("reading terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(msg) = map_key(key, &self.view, &mut self.ui) {
                        self.dispatch_msg(msg);
                    }
                    self.needs_redraw = true;
                }
                Event::Resize(..) => self.needs_redraw = true,
                _ => {}
            }
        }
        Ok(())
    }

    fn process_pending_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
            self.ui.clamp_selection(self.view.topics.len());
            self.needs_redraw = true;
        }
        self.state = state;
        self.runner.enqueue(effects);
    }
}
