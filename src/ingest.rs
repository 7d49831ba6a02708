//! This module contains the engine-side half of the image ingestion
//! contract.
//!
//! An external collaborator recognizes text from an uploaded image; its
//! internals are none of this crate's business. [grid_from_recognized_text]
//! turns the recognized text into a grid: every non-digit character is
//! stripped, and the conversion succeeds only if exactly 81 digit
//! characters remain, which are reshaped row-major into a 9x9 grid. A zero
//! is not a valid Sudoku digit and is rejected, should the recognition ever
//! produce one.
//!
//! On failure no grid is produced and the caller is expected to leave the
//! current puzzle untouched and display the error.

use crate::{CELL_COUNT, SIZE, SudokuGrid, constraint};
use crate::error::{IngestError, IngestResult};

/// Converts text recognized from an image into a grid.
///
/// All characters other than ASCII digits are discarded. The remaining
/// digit characters must number exactly 81 and are assigned row-major, left
/// to right, top to bottom. Every cell of the resulting grid is marked as a
/// given, since an ingested puzzle plays the same role as a generated one;
/// conflict flags are annotated, so a mis-recognized grid shows its
/// duplicates immediately.
///
/// # Errors
///
/// * `IngestError::WrongDigitCount` If stripping leaves a digit count other
/// than 81. Carries the observed count.
/// * `IngestError::InvalidDigit` If one of the 81 digits is a zero.
pub fn grid_from_recognized_text(text: &str) -> IngestResult<SudokuGrid> {
    let digits: Vec<u8> = text.chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| c as u8 - b'0')
        .collect();

    if digits.len() != CELL_COUNT {
        return Err(IngestError::WrongDigitCount(digits.len()));
    }

    if digits.iter().any(|&digit| digit == 0) {
        return Err(IngestError::InvalidDigit);
    }

    let mut grid = SudokuGrid::new();

    for (i, &digit) in digits.iter().enumerate() {
        grid.set_digit(i / SIZE, i % SIZE, digit);
    }

    grid.mark_filled_as_given();
    constraint::annotate_conflicts_in_place(&mut grid);
    Ok(grid)
}
