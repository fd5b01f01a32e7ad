use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;
use waypoint_config::Config;

mod app;
mod ui;

use app::App;

/// Run the interactive editor until the user quits.
pub fn run_tui(config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: &Config) -> Result<()> {
    let mut app = App::new(config);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    info!("interactive session started");

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        let Some(event) = App::poll_event(tick_rate)? else {
            continue;
        };
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key.code),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let [_, canvas, _, _] = ui::layout(Rect::new(0, 0, size.width, size.height));
                app.on_mouse(mouse, canvas);
            }
            _ => {}
        }
    }

    let graph = app.session.graph();
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "interactive session finished"
    );
    Ok(())
}
