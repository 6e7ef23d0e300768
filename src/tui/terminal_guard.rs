//! Terminal mode management.
//!
//! Raw mode, the alternate screen, mouse capture, focus reporting and bracketed paste are all
//! switched on by [`TerminalGuard`] and switched back off exactly once: on drop, on panic (via
//! a [`TerminalRestorer`] clone) or when a termination signal arrives.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{
            event::{EnableBracketedPaste, EnableFocusChange, EnableMouseCapture},
            execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            EnableBracketedPaste
        )?;
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::{
            cursor::Show,
            event::{DisableBracketedPaste, DisableFocusChange, DisableMouseCapture},
            execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Every step runs even if an earlier one failed; the first error is reported.
        let raw = disable_raw_mode();
        let screen = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen,
            Show
        );
        raw.and(screen)
    }
}

#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        tracing::debug!("restoring terminal");
        self.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        let restorer = TerminalRestorer {
            restored: Arc::new(AtomicBool::new(false)),
            ops,
        };
        if let Err(err) = restorer.ops.setup() {
            // Undo whatever part of the setup went through.
            let _ = restorer.restore();
            return Err(err);
        }
        Ok(Self { restorer })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

/// Raises `shutdown` on SIGINT/SIGTERM. If the event loop has not exited after a grace
/// period the terminal is restored and the process exits with the conventional status.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    shutdown: Arc<AtomicBool>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            if let Some(sig) = signals.forever().next() {
                tracing::info!(signal = sig, "termination signal");
                shutdown.store(true, Ordering::SeqCst);

                std::thread::sleep(Duration::from_secs(2));
                let _ = restorer.restore();
                std::process::exit(128 + sig);
            }
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
