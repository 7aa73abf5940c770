#![cfg(feature = "std")]

use std::fmt::Write;

use crate::board::{Cell, Grid};

fn symbol(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Ship if hidden => 'O',
        Cell::Ship => '■',
        Cell::Miss => 'T',
        Cell::Hit => 'X',
    }
}

/// Render a board as text. With `hidden` set, vessel cells that have not been
/// hit look like open water.
pub fn render_grid(grid: &Grid, hidden: bool) -> String {
    let mut out = String::from(" ");
    for c in 1..=grid.size() {
        let _ = write!(out, " | {}", c);
    }
    out.push_str(" |");
    for (r, row) in grid.rows().enumerate() {
        let _ = write!(out, "\n{}", r + 1);
        for &cell in row {
            let _ = write!(out, " | {}", symbol(cell, hidden));
        }
        out.push_str(" |");
    }
    out
}

/// Welcome banner with the input format.
pub fn greeting() -> &'static str {
    "-------------------\n\
     \x20 Welcome to\n\
     \x20   Sea Battle!\n\
     -------------------\n\
     \x20input format: x y\n\
     \x20x - row number\n\
     \x20y - column number"
}
