//! Apple abstractions.

use crate::{
    aux::{Color, Coordinates},
    error::GameError,
    grid::Grid,
    Result,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Apple which is going to be eaten by a snake.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Apple {
    coords: Coordinates,
    color: Color,
}

impl Apple {
    /// Default apple's color.
    pub const COLOR: Color = Color::RED;

    /// Return a new [`Apple`]. If `color` is none, use [`Self::COLOR`] one.
    pub fn new(coords: Coordinates, color: Option<Color>) -> Self {
        Self {
            coords,
            color: color.unwrap_or(Self::COLOR),
        }
    }

    /// Move the apple to a random cell of `grid` which isn't `occupied`.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: &Grid,
        occupied: &[Coordinates],
    ) -> Result<()> {
        self.coords = grid
            .random_free_coords(rng, occupied)
            .ok_or(GameError::NoFreeCells)?;
        Ok(())
    }

	/// Return apple's coordinates.
	pub fn coords(&self) -> Coordinates {
		self.coords
	}

    /// Return apple's color.
    pub fn color(&self) -> Color {
        self.color
    }
}
