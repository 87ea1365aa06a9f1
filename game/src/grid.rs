//! Game grid abstractions.
//!
//! The grid is a torus: a snake leaving the board through one edge comes
//! back through the opposite one.

use crate::{aux::Coordinates, error::GameError, Result};
use itertools::Itertools;
use rand::{seq::IteratorRandom, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
	/// [`Grid`] size in cells, width first. Valid cells are `0..width` by
	/// `0..height`.
	pub size: (usize, usize),
}

impl Grid {
	/// Default size of the grid used with [`Default`](Self::default) trait
	/// implementation. That's a 640x480 window with 20 pixel cells.
	pub const DEFAULT_SIZE: (usize, usize) = (32, 24);

	/// Largest allowed width or height in cells.
	pub const MAX_SIDE: usize = 256;

	/// Return a new [`Grid`]. Fails if any of its dimensions is zero or
	/// greater than [`MAX_SIDE`](Self::MAX_SIDE).
	pub fn new(size: (usize, usize)) -> Result<Self> {
		let side = 1..=Self::MAX_SIDE;
		if !side.contains(&size.0) || !side.contains(&size.1) {
			return Err(Box::new(GameError::InvalidGridSize(size)));
		}
		Ok(Self { size })
	}

	/// Width in cells.
	pub fn width(&self) -> i32 {
		self.size.0 as i32
	}

	/// Height in cells.
	pub fn height(&self) -> i32 {
		self.size.1 as i32
	}

	/// Return `true` if `coords` lay on the grid.
	pub fn contains(&self, coords: Coordinates) -> bool {
		(0..self.width()).contains(&coords.x) && (0..self.height()).contains(&coords.y)
	}

	/// Bring `coords` back onto the grid by wrapping them around its edges.
	pub fn wrap(&self, coords: Coordinates) -> Coordinates {
		Coordinates::new(
			coords.x.rem_euclid(self.width()),
			coords.y.rem_euclid(self.height()),
		)
	}

	/// The middle cell, rounded towards the top left corner.
	pub fn center(&self) -> Coordinates {
		Coordinates::new(self.width() / 2, self.height() / 2)
	}

	/// Iterate over every cell row by row.
	pub fn cells(&self) -> impl Iterator<Item = Coordinates> {
		(0..self.height())
			.cartesian_product(0..self.width())
			.map(|(y, x)| Coordinates::new(x, y))
	}

	/// Number of cells on the grid.
	pub fn area(&self) -> usize {
		self.size.0 * self.size.1
	}

	/// Pick a uniformly random cell not listed in `occupied`. Return none if
	/// the grid is full.
	pub fn random_free_coords<R: Rng + ?Sized>(
		&self,
		rng: &mut R,
		occupied: &[Coordinates],
	) -> Option<Coordinates> {
		self.cells()
			.filter(|cell| !occupied.contains(cell))
			.choose(rng)
	}
}

impl Default for Grid {
	fn default() -> Self {
		Self { size: Self::DEFAULT_SIZE }
	}
}

impl fmt::Display for Grid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.size.0, self.size.1)
	}
}
