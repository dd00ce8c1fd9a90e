pub mod app;
pub mod output;
pub mod ui;

use std::io::{self, Write};

use crossterm::{cursor, terminal, ExecutableCommand};
use tracing::info;

use app::{App, AppOutcome};
use ui::{navigation::read_nav_key, test_mode};

/// Render/read/dispatch loop. Scripted runs skip screen clearing so every
/// frame stays in the output.
pub fn run(app: &mut App) -> io::Result<()> {
    let interactive = !test_mode::is_enabled();
    let mut stdout = io::stdout();
    info!(screen = %app.current_screen(), interactive, "session started");

    loop {
        if interactive {
            stdout.execute(terminal::Clear(terminal::ClearType::All))?;
            stdout.execute(cursor::MoveTo(0, 0))?;
        }
        writeln!(stdout, "{}", app.render())?;
        stdout.flush()?;

        let key = read_nav_key()?;
        if app.handle(key) == AppOutcome::Quit {
            break;
        }
    }

    info!(depth = app.navigator().depth(), "session ended");
    writeln!(stdout, "Goodbye!")?;
    Ok(())
}
