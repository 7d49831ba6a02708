//! This module contains some error and result definitions used in this
//! crate. Every failure of the engine is represented by one of these types;
//! no operation panics or leaves a grid in a partially updated state.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not include errors that occur
/// when parsing grid codes, see [GridParseError](enum.GridParseError.html)
/// for that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the 9x9 grid, that is, at least one of them is greater than or equal
    /// to 9.
    OutOfBounds,

    /// Indicates that some digit is invalid. This is the case if it is 0 or
    /// greater than 9.
    InvalidDigit,

    /// Indicates that it was attempted to edit a cell that was fixed at
    /// generation time (a given).
    CellNotEditable,

    /// Indicates that a cell collection with a length other than 81 was
    /// provided where a full grid was required.
    WrongCellCount,

    /// An error that is raised whenever it is attempted to fill a grid whose
    /// present digits cannot be completed to any valid full grid.
    UnsatisfiableGrid
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates outside the 9x9 grid"),
            SudokuError::InvalidDigit =>
                write!(f, "digit must be in the range [1, 9]"),
            SudokuError::CellNotEditable =>
                write!(f, "cell is a given and cannot be edited"),
            SudokuError::WrongCellCount =>
                write!(f, "a grid requires exactly 81 cells"),
            SudokuError::UnsatisfiableGrid =>
                write!(f, "grid cannot be completed to a valid solution")
        }
    }
}

impl Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a grid code with
/// [SudokuGrid::parse](crate::SudokuGrid::parse).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the number of entries (which are separated by commas)
    /// is not 81.
    WrongNumberOfCells,

    /// Indicates that one of the entries could not be parsed as a number.
    NumberFormatError,

    /// Indicates that an entry holds a number that is not a valid Sudoku
    /// digit (0 or more than 9).
    InvalidDigit
}

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

/// An enumeration of the errors that may occur when converting recognized
/// text from the image-recognition collaborator into a grid. The caller is
/// expected to display the message and leave the current puzzle untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IngestError {

    /// Indicates that stripping all non-digit characters from the recognized
    /// text did not leave exactly 81 digits. Carries the number of digits
    /// that were actually found.
    WrongDigitCount(usize),

    /// Indicates that the recognized digits contained a zero, which is not a
    /// valid Sudoku digit.
    InvalidDigit
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::WrongDigitCount(found) =>
                write!(f, "recognized text must contain exactly 81 digits, \
                    found {}", found),
            IngestError::InvalidDigit =>
                write!(f, "recognized text contains the digit 0, which is \
                    not a valid Sudoku digit")
        }
    }
}

impl Error for IngestError { }

/// Syntactic sugar for `Result<V, IngestError>`.
pub type IngestResult<V> = Result<V, IngestError>;
