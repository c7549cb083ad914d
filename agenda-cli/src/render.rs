//! Text rendering of a `RenderPlan`.
//!
//! This is the presentation layer: it only consumes the plan the core hands
//! it and never reaches back into the scheduler's state.

use agenda_core::{DayCell, RenderPlan};
use chrono::Datelike;

const CELL_WIDTH: usize = 11;

/// Renders the plan as a fixed-width grid followed by an agenda listing of
/// every day that has entries.
pub fn render_plan(
    plan: &RenderPlan,
    day_names: &[String],
    previous: &str,
    next: &str,
) -> String {
    let grid_width = CELL_WIDTH * plan.columns;
    let mut out = String::new();

    out.push_str(&center(&plan.header_label, grid_width));
    out.push('\n');

    let nav_gap = grid_width.saturating_sub(previous.len() + next.len() + 8);
    out.push_str(&format!("<-- {previous}{}{next} -->\n\n", " ".repeat(nav_gap)));

    for name in day_names {
        out.push_str(&pad(name, CELL_WIDTH));
    }
    out.push('\n');

    for row in 0..plan.rows() {
        for cell in plan.row(row) {
            out.push_str(&pad(&day_number(cell), CELL_WIDTH));
        }
        out.push('\n');
    }

    let agenda = agenda_lines(plan);
    if !agenda.is_empty() {
        out.push('\n');
        out.push_str(&agenda);
    }
    out
}

/// Day-of-month marker for one cell. Filler days render in parentheses;
/// days with entries carry a `*`.
fn day_number(cell: &DayCell) -> String {
    if cell.is_filler() {
        format!("({})", cell.date.day())
    } else if cell.entries.is_empty() {
        format!(" {}", cell.date.day())
    } else {
        format!(" {} *", cell.date.day())
    }
}

fn agenda_lines(plan: &RenderPlan) -> String {
    let mut out = String::new();
    for cell in plan.cells.iter().filter(|c| !c.entries.is_empty()) {
        out.push_str(&format!("{}\n", cell.date.format("%a %b %-d")));
        for entry in &cell.entries {
            out.push_str(&format!("  {entry}\n"));
        }
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}

fn center(s: &str, width: usize) -> String {
    format!("{s:^width$}").trim_end().to_string()
}
