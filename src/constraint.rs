//! This module contains the duplicate detection at the heart of the engine.
//!
//! The same row/column/box uniqueness rule is offered in two modes:
//!
//! * **Hard mode**: [is_placement_legal] decides whether a candidate digit
//! could be placed in a cell without duplicating an occupied cell in the
//! same row, column, or box. It writes nothing and is used by the solver,
//! the generator, and the hint engine to prune their search.
//! * **Soft mode**: [annotate_conflicts] recomputes the `conflict` flag of
//! every cell after an edit. All cells participating in a duplicate are
//! flagged, which is purely informational and never blocks an edit.

use crate::{BOX_SIZE, CELL_COUNT, SIZE, SudokuGrid, index};
use crate::error::{SudokuError, SudokuResult};
use crate::util::DigitSet;

pub(crate) fn row_positions(row: usize) -> [(usize, usize); SIZE] {
    let mut positions = [(0, 0); SIZE];

    for (column, position) in positions.iter_mut().enumerate() {
        *position = (row, column);
    }

    positions
}

pub(crate) fn column_positions(column: usize) -> [(usize, usize); SIZE] {
    let mut positions = [(0, 0); SIZE];

    for (row, position) in positions.iter_mut().enumerate() {
        *position = (row, column);
    }

    positions
}

// Boxes are indexed 0 to 8 in row-major order, so box 0 has its top-left
// cell at (0, 0) and box 8 at (6, 6).
pub(crate) fn box_positions(box_index: usize) -> [(usize, usize); SIZE] {
    let base_row = (box_index / BOX_SIZE) * BOX_SIZE;
    let base_column = (box_index % BOX_SIZE) * BOX_SIZE;
    let mut positions = [(0, 0); SIZE];
    let mut i = 0;

    for sub_row in 0..BOX_SIZE {
        for sub_column in 0..BOX_SIZE {
            positions[i] = (base_row + sub_row, base_column + sub_column);
            i += 1;
        }
    }

    positions
}

/// Gets the index of the box containing the cell at the given position.
pub(crate) fn box_of(row: usize, column: usize) -> usize {
    (row / BOX_SIZE) * BOX_SIZE + column / BOX_SIZE
}

pub(crate) fn check_digit(grid: &SudokuGrid, row: usize, column: usize,
        digit: u8) -> bool {
    for other_column in 0..SIZE {
        if other_column != column &&
                grid.has_digit(row, other_column, digit).unwrap() {
            return false;
        }
    }

    for other_row in 0..SIZE {
        if other_row != row &&
                grid.has_digit(other_row, column, digit).unwrap() {
            return false;
        }
    }

    for &(other_row, other_column) in &box_positions(box_of(row, column)) {
        if (other_row, other_column) != (row, column) &&
                grid.has_digit(other_row, other_column, digit).unwrap() {
            return false;
        }
    }

    true
}

/// Indicates whether placing the given digit in the cell at the specified
/// position would violate row, column, or box uniqueness against the
/// currently occupied cells. The target cell's own prior content is ignored
/// in the comparison, so overwriting a digit with itself is always legal.
///
/// This is the hard-mode legality predicate: it never modifies conflict
/// flags and is intended for pruning search rather than user feedback.
///
/// # Arguments
///
/// * `grid`: The grid against whose occupied cells the placement is
/// checked.
/// * `row`: The row (y-coordinate) of the target cell. Must be in the range
/// `[0, 9[`.
/// * `column`: The column (x-coordinate) of the target cell. Must be in the
/// range `[0, 9[`.
/// * `digit`: The candidate digit. Must be in the range `[1, 9]`.
///
/// # Errors
///
/// * `SudokuError::OutOfBounds` If either `row` or `column` are not in the
/// specified range.
/// * `SudokuError::InvalidDigit` If `digit` is not in the specified range.
pub fn is_placement_legal(grid: &SudokuGrid, row: usize, column: usize,
        digit: u8) -> SudokuResult<bool> {
    if row >= SIZE || column >= SIZE {
        return Err(SudokuError::OutOfBounds);
    }

    if digit == 0 || digit as usize > SIZE {
        return Err(SudokuError::InvalidDigit);
    }

    Ok(check_digit(grid, row, column, digit))
}

fn mark_house_duplicates(grid: &SudokuGrid,
        positions: &[(usize, usize); SIZE], conflict: &mut [bool]) {
    let mut seen = DigitSet::new();
    let mut duplicates = DigitSet::new();

    for &(row, column) in positions {
        if let Some(digit) = grid.cells()[index(row, column)].value() {
            if !seen.insert(digit) {
                duplicates.insert(digit);
            }
        }
    }

    if duplicates.is_empty() {
        return;
    }

    for &(row, column) in positions {
        if let Some(digit) = grid.cells()[index(row, column)].value() {
            if duplicates.contains(digit) {
                conflict[index(row, column)] = true;
            }
        }
    }
}

pub(crate) fn annotate_conflicts_in_place(grid: &mut SudokuGrid) {
    let mut conflict = [false; CELL_COUNT];

    for house in 0..SIZE {
        mark_house_duplicates(grid, &row_positions(house), &mut conflict);
        mark_house_duplicates(grid, &column_positions(house), &mut conflict);
        mark_house_duplicates(grid, &box_positions(house), &mut conflict);
    }

    for (cell, &flag) in grid.cells_mut().iter_mut().zip(conflict.iter()) {
        cell.conflict = flag;
    }
}

/// Returns a copy of the given grid in which the `conflict` flag of every
/// cell has been recomputed from the current digit assignments. A cell is
/// flagged if and only if its digit occurs more than once in its row,
/// column, or box; all cells participating in such a duplicate are flagged,
/// not just one of them.
///
/// This is the soft-mode conflict detection used for live feedback after
/// every user edit. It is detection only and never rejects a grid.
pub fn annotate_conflicts(grid: &SudokuGrid) -> SudokuGrid {
    let mut result = grid.clone();
    annotate_conflicts_in_place(&mut result);
    result
}
