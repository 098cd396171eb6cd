//! The interactive application loop.
//!
//! One thread owns the terminal: it polls input and redraws every frame.
//! A search runs on a separate worker thread that mutates node states as
//! it explores; the render loop picks those changes up through the atomic
//! state reads. Resetting or quitting first raises the cancellation
//! context and joins the worker before touching the grid.

use std::io::{self, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{self, ClearType},
};
use rand::RngExt;

use gridpath_core::{Grid, NodeState, Pos};
use gridpath_search::{Context, PathFinder};

use crate::render::{self, CELL_WIDTH};

pub const TOTAL_ROWS: i32 = 40;
pub const TOTAL_COLUMNS: i32 = 40;

/// Animation pacing: per finalized node, and per path cell.
const VISIT_DELAY: Duration = Duration::from_millis(10);
const PATH_DELAY: Duration = Duration::from_millis(20);
/// Input poll timeout, which also caps the frame rate.
const FRAME_POLL: Duration = Duration::from_millis(33);
const OBSTACLE_DENSITY: f64 = 0.25;

pub struct App {
    grid: Arc<Grid>,
    pathfinder: PathFinder,
    start: Option<Pos>,
    end: Option<Pos>,
    ctx: Context,
    worker: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            grid: Arc::new(Grid::new(rows, cols)),
            pathfinder: PathFinder::new(),
            start: None,
            end: None,
            ctx: Context::new(),
            worker: None,
        }
    }

    /// Set up the terminal, run the event loop, restore the terminal.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;

        let result = self.event_loop(&mut stdout);

        // Always restore, even if the loop errored.
        self.ctx.cancel();
        if let Some(worker) = self.worker.take() {
            worker.join().ok();
        }
        execute!(
            stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;

        result.map_err(Into::into)
    }

    fn event_loop(&mut self, out: &mut impl Write) -> io::Result<()> {
        loop {
            if event::poll(FRAME_POLL)? {
                match event::read()? {
                    Event::Key(KeyEvent { code, .. }) => {
                        if !self.handle_key(code) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(me) => self.handle_mouse(me),
                    _ => {}
                }
            }
            self.reap_worker();
            render::draw(out, &self.grid, &self.pathfinder, self.worker_alive())?;
        }
    }

    fn worker_alive(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Drop the handle of a worker that has already exited.
    fn reap_worker(&mut self) {
        if self.worker.as_ref().is_some_and(|w| w.is_finished()) {
            if let Some(worker) = self.worker.take() {
                worker.join().ok();
            }
        }
    }

    /// Returns `false` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char(' ') => {
                if self.start.is_some() && self.end.is_some() && !self.worker_alive() {
                    self.run_algorithm();
                }
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('a') => {
                if !self.worker_alive() {
                    self.pathfinder.cycle_algorithm();
                }
            }
            KeyCode::Char('h') => {
                if !self.worker_alive() {
                    self.pathfinder.cycle_heuristic();
                }
            }
            KeyCode::Char('o') => {
                if !self.worker_alive() {
                    self.scatter_obstacles();
                }
            }
            _ => {}
        }
        true
    }

    fn handle_mouse(&mut self, me: MouseEvent) {
        let pos = Pos::new(me.row as i32, (me.column / CELL_WIDTH) as i32);
        match me.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                self.paint(pos);
            }
            MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
                self.erase(pos);
            }
            _ => {}
        }
    }

    /// Left click: place start, then end, then obstacles.
    fn paint(&mut self, pos: Pos) {
        if self.worker_alive() || !self.grid.in_bounds(pos.row, pos.col) {
            return;
        }
        let node = &self.grid[pos];
        if self.start.is_none() && self.end != Some(pos) {
            node.set_state(NodeState::Start);
            self.start = Some(pos);
        } else if self.end.is_none() && self.start != Some(pos) {
            node.set_state(NodeState::End);
            self.end = Some(pos);
        } else if self.start != Some(pos) && self.end != Some(pos) {
            node.set_state(NodeState::Obstacle);
        }
    }

    /// Right click: clear the cell, forgetting start/end if hit.
    fn erase(&mut self, pos: Pos) {
        if self.worker_alive() || !self.grid.in_bounds(pos.row, pos.col) {
            return;
        }
        self.grid[pos].reset();
        if self.start == Some(pos) {
            self.start = None;
        }
        if self.end == Some(pos) {
            self.end = None;
        }
    }

    fn scatter_obstacles(&mut self) {
        let mut rng = rand::rng();
        for node in self.grid.iter() {
            if node.state() == NodeState::Empty && rng.random_bool(OBSTACLE_DENSITY) {
                node.set_state(NodeState::Obstacle);
            }
        }
    }

    /// Spawn a search worker on the current grid and selection.
    fn run_algorithm(&mut self) {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return;
        };

        self.grid.reset_search();
        self.grid.update_all_neighbors();
        self.grid[start].set_state(NodeState::Start);
        self.grid[end].set_state(NodeState::End);

        self.ctx = Context::new();
        let ctx = self.ctx.clone();
        let grid = Arc::clone(&self.grid);
        let pathfinder = self.pathfinder.clone();

        self.worker = Some(thread::spawn(move || {
            let mut pace = || thread::sleep(VISIT_DELAY);
            let path = match pathfinder.run(&grid, start, end, &ctx, Some(&mut pace)) {
                Ok(path) => path,
                Err(err) => {
                    log::warn!("search failed: {err}");
                    return;
                }
            };
            if path.is_empty() || ctx.is_done() {
                return;
            }
            for pos in path {
                if ctx.is_done() {
                    break;
                }
                grid[pos].set_state(NodeState::Path);
                thread::sleep(PATH_DELAY);
            }
            grid[start].set_state(NodeState::Start);
            grid[end].set_state(NodeState::End);
        }));
    }

    /// Cancel a running search, join it, then rebuild the grid.
    fn reset(&mut self) {
        self.ctx.cancel();
        if let Some(worker) = self.worker.take() {
            worker.join().ok();
        }
        // Join-before-mutate: the worker is gone, so the grid can be torn
        // down safely.
        self.grid = Arc::new(Grid::new(self.grid.rows(), self.grid.cols()));
        self.start = None;
        self.end = None;
    }
}
