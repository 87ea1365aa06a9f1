//! Auxiliary abstractions.

use crate::error::*;
use rand_derive2::RandGen;
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

/// Coordinates of one grid cell.
///
/// Unlike a math plot, (0, 0) is the top left cell of the board: x grows to
/// the right and y grows downwards, the same way the window is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Coordinates {
    /// Column of the cell.
    pub x: i32,

    /// Row of the cell.
    pub y: i32,
}

impl Coordinates {
    /// Return a new [`Coordinates`].
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the neighbour cell in `direction`. The result may be off the
    /// board; see [`Grid::wrap`](crate::grid::Grid::wrap).
    pub fn step(self, direction: Direction) -> Self {
        self + direction.delta()
    }
}

impl From<Coordinates> for (i32, i32) {
	fn from(c: Coordinates) -> Self {
		(c.x, c.y)
	}
}

impl From<(i32, i32)> for Coordinates {
    fn from(t: (i32, i32)) -> Self {
        Self::new(t.0, t.1)
    }
}

impl ops::Add for Coordinates {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction the snake is heading in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, RandGen, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Up.
    Up,

    /// Down.
    Down,

    /// Left.
    Left,

    /// Right.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Return opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Return the unit vector of one step in this direction.
    pub fn delta(self) -> Coordinates {
        match self {
            Self::Up => Coordinates::new(0, -1),
            Self::Down => Coordinates::new(0, 1),
            Self::Left => Coordinates::new(-1, 0),
            Self::Right => Coordinates::new(1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_case = format!("{:?}", self).to_lowercase();
        write!(f, "{}", lower_case)
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

/// A color in the sRGB color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Color {
    /// Red component
    pub r: u8,

    /// Green component
    pub g: u8,

    /// Blue component
    pub b: u8,

    /// Transparency
    pub a: u8,
}

impl Color {
    /// The black color.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// The white color.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// The green color.
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    /// The red color.
    pub const RED: Color = Color::rgb(255, 0, 0);

	/// The blue color.
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Return a new [`Color`]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Return a new opaque [`Color`].
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}
