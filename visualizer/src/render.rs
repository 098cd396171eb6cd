//! Grid and HUD drawing via crossterm.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    queue,
};

use gridpath_core::{Grid, NodeState, Pos};
use gridpath_search::PathFinder;

/// Each grid cell is drawn two columns wide so it looks roughly square.
pub const CELL_WIDTH: u16 = 2;

fn state_color(state: NodeState) -> Color {
    match state {
        NodeState::Empty => Color::White,
        NodeState::Start => Color::Green,
        NodeState::End => Color::Red,
        NodeState::Obstacle => Color::Black,
        NodeState::Visited => Color::Blue,
        NodeState::Path => Color::Magenta,
    }
}

/// Draw the whole grid plus the HUD line below it.
///
/// Node states are read concurrently with a running search worker; each
/// read is a single atomic load, so a frame may mix old and new states but
/// never a torn one.
pub fn draw(
    out: &mut impl Write,
    grid: &Grid,
    pathfinder: &PathFinder,
    running: bool,
) -> io::Result<()> {
    for row in 0..grid.rows() {
        queue!(out, cursor::MoveTo(0, row as u16))?;
        for col in 0..grid.cols() {
            let state = grid[Pos::new(row, col)].state();
            queue!(out, SetBackgroundColor(state_color(state)), Print("  "))?;
        }
        queue!(out, ResetColor)?;
    }

    let hud_row = grid.rows() as u16 + 1;
    let status = if running { "running... (r cancels)" } else { "idle" };
    let hud = format!(
        "Algorithm: {} (a) | Heuristic: {} (h) | SPACE run  r reset  o obstacles  q quit | {}",
        pathfinder.algorithm().name(),
        pathfinder.heuristic().name(),
        status,
    );
    queue!(
        out,
        cursor::MoveTo(0, hud_row),
        crossterm::terminal::Clear(crossterm::terminal::ClearType::CurrentLine),
        SetForegroundColor(Color::White),
        Print(hud),
        ResetColor
    )?;

    out.flush()
}
