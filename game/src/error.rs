//! Errors returned by functions related to this crate.

use crate::{aux::*, grid::Grid};
use std::{error, fmt};

/// Error type returned by crate's functions.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Turning into the direction opposite to the one specified in variant
    /// argument while reversing is disallowed.
    ChangeDirectionToOpposite(Direction),

    /// Every cell of the grid is taken, so there is nowhere to put an apple.
    NoFreeCells,

    /// Snake has no parts.
    EmptySnake,

    /// Grid with size specified in variant argument has no cells.
    InvalidGridSize((usize, usize)),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChangeDirectionToOpposite(dir) => write!(f,
				"can't turn {} because snake is heading {}", dir.opposite(), dir),
            Self::NoFreeCells => write!(f, "there are no free cells left on the grid"),
            Self::EmptySnake => write!(f, "snake has no parts"),
            Self::InvalidGridSize((w, h)) => write!(
                f,
                "grid of {}x{} size is invalid, each side must be from 1 to {} cells",
                w,
                h,
                Grid::MAX_SIDE
            ),
        }
    }
}

impl error::Error for GameError {}

/// Error returned if can't parse [`Direction`] from a string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
"can't parse Direction from {:?} because it is not \"up\", \"down\", \"left\" or \"right\"", self.0)
    }
}

impl error::Error for ParseDirectionError {}
