use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use mockcode::app::Workbench;
use mockcode::services::settings;
use mockcode::tui::crossterm::into_input_event;
use mockcode::tui::terminal_guard::TerminalGuard;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let logging = logging::init();
    let settings = settings::load_or_default(settings_path);
    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "starting");
    }

    let guard = TerminalGuard::new()?;
    let shutdown = Arc::new(AtomicBool::new(false));
    #[cfg(unix)]
    {
        let restorer = guard.restorer();
        if let Err(err) =
            mockcode::tui::terminal_guard::install_termination_signals(restorer, shutdown.clone())
        {
            tracing::warn!(error = %err, "signal handlers not installed");
        }
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut workbench = Workbench::new(&settings);
    let result = run(&mut terminal, &mut workbench, &shutdown);

    drop(guard);
    if let Err(err) = &result {
        tracing::error!(error = %err, "exiting after error");
    } else {
        tracing::info!("bye");
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    shutdown: &AtomicBool,
) -> io::Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| workbench.render(frame))?;
            dirty = false;
        }
        if workbench.should_quit() || shutdown.load(Ordering::SeqCst) {
            return Ok(());
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        // Drain whatever is queued before the next frame.
        loop {
            if let Some(input) = into_input_event(event::read()?) {
                dirty |= workbench.handle_input(&input);
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }
}
