use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

/// Holds the terminal in raw mode on the alternate screen.
///
/// The terminal is handed back exactly once, by whichever comes first:
/// dropping the guard or a panic (before the panic message is printed).
pub struct TerminalGuard {
    raw: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn engage() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            raw: Arc::new(Mutex::new(true)),
        };

        let raw = Arc::clone(&guard.raw);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            release(&raw);
            default_hook(info);
        }));

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        release(&self.raw);
    }
}

fn release(raw: &Mutex<bool>) {
    let mut raw = raw.lock();
    if !std::mem::take(&mut *raw) {
        return;
    }
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Switches to the full-screen catalog view.
///
/// The guard is live before the screen is touched, so a failure part-way
/// through still leaves the shell usable.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let guard = TerminalGuard::engage()?;

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
