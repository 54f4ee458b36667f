use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type SliderTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back on drop or on panic, whichever happens first.
pub struct TerminalGuard {
    armed: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let guard = Self {
            armed: Arc::new(AtomicBool::new(true)),
        };

        let armed = Arc::clone(&guard.armed);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            disarm(&armed);
            default_hook(info);
        }));

        guard
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disarm(&self.armed);
    }
}

/// Restore once; later calls see the flag already cleared.
fn disarm(armed: &AtomicBool) {
    if armed.swap(false, Ordering::SeqCst) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Raw mode, alternate screen and mouse capture (clicks, drags, releases).
pub fn setup_terminal() -> io::Result<(SliderTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    // Armed before the screen switch so a failure below still restores.
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?
        .execute(TermClear(ClearType::All))?
        .execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    tracing::debug!("terminal prepared");
    Ok((terminal, guard))
}
