//! Terminal setup and restoration for the track selector

use std::io::{self, stdout, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

/// Terminal type used by the selector
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switch to the alternate screen in raw mode.
///
/// If any step after entering the alternate screen fails, the terminal is
/// put back before the error is returned.
pub fn init() -> io::Result<Tui> {
    execute!(stdout(), EnterAlternateScreen, Hide)?;

    let terminal = enable_raw_mode().and_then(|()| Terminal::new(CrosstermBackend::new(stdout())));
    if terminal.is_err() {
        let _ = restore();
    }
    terminal
}

/// Leave raw mode and the alternate screen.
///
/// Every step is attempted; the first failure is returned.
pub fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Restore the terminal before the default hook prints a panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = restore();
        original_hook(panic);
    }));
}
