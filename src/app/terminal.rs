use std::{
    io::{self, IsTerminal, Stderr},
    ops::{Deref, DerefMut},
    sync::Once,
};

use anyhow::{Context, Result, bail};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

static PANIC_HOOK: Once = Once::new();

/// Raw-mode alternate screen on stderr, restored on drop and on panic.
///
/// Nothing is written to stdout while the form is shown.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stderr>>,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        let mut stderr = io::stderr();
        if !stderr.is_terminal() {
            bail!("the form needs an interactive terminal on stderr");
        }
        enable_raw_mode().context("failed to enable raw mode")?;
        if let Err(err) = execute!(stderr, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("failed to enter alternate screen");
        }
        let backend = CrosstermBackend::new(stderr);
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore_terminal();
                return Err(err).context("failed to initialize terminal");
            }
        };
        install_panic_hook();
        debug!("terminal entered alternate screen");
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore_terminal();
        debug!("terminal restored");
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stderr>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            previous(panic_info);
        }));
    });
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stderr = io::stderr();
    let _ = execute!(stderr, LeaveAlternateScreen, Show);
}
