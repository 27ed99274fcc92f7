// Terminal surface behind the chart consumer: geometry, interactivity, and
// glyph generation.

use std::io::{self, IsTerminal, Write};

pub trait ChartSurface: Send {
    /// Current terminal geometry as (columns, rows).
    fn size(&self) -> io::Result<(u16, u16)>;
    /// Clear the screen and draw the series as a chart within the bounds, so
    /// successive frames overwrite rather than scroll.
    fn draw(&mut self, series: &[f64], width: u16, height: u16);
}

/// Real terminal: crossterm for geometry, rasciigraph for the plot block.
pub struct TermSurface;

impl ChartSurface for TermSurface {
    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn draw(&mut self, series: &[f64], width: u16, height: u16) {
        let graph = rasciigraph::plot(
            series.to_vec(),
            rasciigraph::Config::default()
                .with_width(width as u32)
                .with_height(height as u32),
        );
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "\x1b[2J");
        let _ = writeln!(stdout, "{graph}");
        let _ = stdout.flush();
    }
}

/// Whether stdout is attached to an interactive terminal.
pub fn stdout_is_interactive() -> bool {
    io::stdout().is_terminal()
}
