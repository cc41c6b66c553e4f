//! Text rendering of a search result.

use std::fmt::Write;

use maze_core::Cell;
use maze_paths::steps;

/// Separator placed between consecutive rooms.
pub const ARROW: &str = " → ";

/// Render `path` for the terminal.
///
/// A non-empty path gives three lines: a header, the rooms joined by
/// [`ARROW`], and the number of moves. An empty path reports that no route
/// exists.
pub fn render_path(path: &[Cell]) -> String {
    if path.is_empty() {
        return "No path found.".to_string();
    }

    let rooms: Vec<String> = path.iter().map(Cell::to_string).collect();
    let mut out = String::from("Optimal path:\n");
    out.push_str(&rooms.join(ARROW));
    let _ = write!(out, "\nNumber of steps: {}", steps(path));
    out
}
