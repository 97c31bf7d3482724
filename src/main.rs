use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use svmcalc::app::Workbench;
use svmcalc::services::AsyncRuntime;
use svmcalc::tui::TerminalGuard;

const TICK_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> io::Result<()> {
    let _logging = svmcalc::logging::init();

    let runtime = AsyncRuntime::new()?;
    let mut workbench = Workbench::new(runtime);

    // A project file passed on the command line is imported at startup.
    if let Some(path) = std::env::args().nth(1) {
        workbench.import(path.into());
    }

    let guard = TerminalGuard::new()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        workbench.tick();
        terminal.draw(|frame| workbench.render(frame))?;

        if !event::poll(TICK_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if workbench.handle_key(key).is_quit() {
                    break;
                }
            }
            Event::Mouse(mouse) => workbench.handle_mouse(mouse),
            _ => {}
        }
    }

    guard.restore()?;
    Ok(())
}
