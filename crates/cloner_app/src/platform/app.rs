use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use cloner_core::{update, AppState, Msg};
use cloner_logging::{cloner_debug, cloner_info};

use super::config::ClonerConfig;
use super::effects::EffectRunner;
use super::logging;
use super::persistence::PreferenceStore;
use super::ui::commands::{parse_line, UiEvent, HELP_TEXT};
use super::ui::render::{render, ColorMode};

pub fn run_app() -> Result<()> {
    let config = ClonerConfig::load()?;
    logging::initialize(config.log_destination, config.log_level.into());
    cloner_info!("Starting with {:?}", config.provider);

    let provider = config.provider.build()?;
    let prefs = PreferenceStore::new(config.prefs_path.clone());
    let (event_tx, event_rx) = mpsc::channel::<UiEvent>();
    let runner = EffectRunner::new(provider, prefs.clone(), config.output_dir, event_tx.clone());

    let mut app = App::new(runner, io::stdout(), ColorMode::detect());
    app.dispatch(Msg::ThemeRestored(prefs.load_theme()));
    app.render()?;
    app.write_line(HELP_TEXT)?;

    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            for event in parse_line(&line) {
                if event_tx.send(event).is_err() {
                    return;
                }
            }
        }
        let _ = event_tx.send(UiEvent::InputClosed);
    });

    app.run(&event_rx)
}

struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
    color: ColorMode,
    input_closed: bool,
}

impl<W: Write> App<W> {
    fn new(runner: EffectRunner, out: W, color: ColorMode) -> Self {
        Self {
            state: AppState::new(),
            runner,
            out,
            color,
            input_closed: false,
        }
    }

    fn run(&mut self, event_rx: &mpsc::Receiver<UiEvent>) -> Result<()> {
        while let Ok(first) = event_rx.recv() {
            // Coalesce everything already queued into one render.
            let mut needs_render = false;
            for event in std::iter::once(first).chain(event_rx.try_iter()) {
                match event {
                    UiEvent::Msg(msg) => needs_render |= self.dispatch(msg),
                    UiEvent::Help => self.write_line(HELP_TEXT)?,
                    UiEvent::Unknown(line) => {
                        self.write_line(&format!("Unknown command: {line} (try `help`)"))?
                    }
                    UiEvent::InputClosed => self.input_closed = true,
                    UiEvent::Quit => return Ok(()),
                }
            }
            if needs_render {
                self.render()?;
            }
            if self.input_closed && self.state.pending_request().is_none() {
                break;
            }
        }
        cloner_info!("Shutting down");
        Ok(())
    }

    /// Applies `msg`, runs its effects, and reports whether a render is due.
    fn dispatch(&mut self, msg: Msg) -> bool {
        cloner_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        cloner_logging::set_active_request(state.pending_request());
        self.state = state;
        self.runner.enqueue(effects);
        was_dirty
    }

    fn render(&mut self) -> Result<()> {
        let frame = render(&self.state.view(), self.color);
        self.write_line(&frame)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").context("failed to write to terminal")?;
        self.out.flush().context("failed to flush terminal")
    }
}
