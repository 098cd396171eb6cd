//! gridpath — an interactive terminal pathfinding visualizer.

mod app;
mod render;

use app::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(app::TOTAL_ROWS, app::TOTAL_COLUMNS);
    app.run()?;
    Ok(())
}
