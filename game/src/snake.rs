//! Snake abstractions.

use crate::{aux::*, error::*, grid::Grid, Result};
use serde::{Deserialize, Serialize};

/// Outcome of a single [`Snake::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Snake moved, its head is now on the contained cell.
    Moved(Coordinates),

    /// Snake would have bumped into its own body at the contained cell and
    /// stayed where it was.
    Bumped(Coordinates),
}

/// Snake abstraction structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Snake {
    /// Occupied cells, head first.
    parts: Vec<Coordinates>,

    /// Direction of snake's head.
    direction: Direction,

    /// Direction requested by the player, applied on the next tick.
    next_direction: Option<Direction>,

    /// Number of parts the snake is allowed to have.
    length: usize,
}

impl Snake {
    /// Body color.
    pub const COLOR: Color = Color::GREEN;

    /// Head color.
    pub const HEAD_COLOR: Color = Color::BLUE;

    /// Return a one part [`Snake`] on `coords` heading into `direction`.
    pub fn new(coords: Coordinates, direction: Direction) -> Self {
        Self {
            parts: vec![coords],
            direction,
            next_direction: None,
            length: 1,
        }
    }

    /// Bring the snake back to its initial state at `coords`.
    pub fn reset(&mut self, coords: Coordinates, direction: Direction) {
        *self = Self::new(coords, direction);
    }

    /// Remember `direction` to be taken on the next tick. If `allow_reverse`
    /// is false, turning back is refused and the pending direction is kept.
    pub fn set_next_direction(&mut self, direction: Direction, allow_reverse: bool) -> Result<()> {
        if !allow_reverse && direction == -self.direction {
            return Err(Box::new(GameError::ChangeDirectionToOpposite(self.direction)));
        }
        self.next_direction = Some(direction);
        Ok(())
    }

    /// Apply the pending direction, if any.
    pub fn update_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    /// Move the head one cell in the current direction, wrapping around
    /// `grid` edges, and cut the tail down to [`length`](Self::length).
    ///
    /// Nothing moves if the new head cell is already taken by the body.
    pub fn step(&mut self, grid: &Grid) -> Result<Step> {
        let head = self.head().ok_or(GameError::EmptySnake)?;
        let new_head = grid.wrap(head.step(self.direction));

        if self.parts[1..].contains(&new_head) {
            return Ok(Step::Bumped(new_head));
        }

        self.parts.insert(0, new_head);
        self.parts.truncate(self.length);

        Ok(Step::Moved(new_head))
    }

    /// Increment snake's length on `n` parts. The body catches up over the
    /// next `n` steps.
    pub fn grow(&mut self, n: usize) {
        self.length += n;
    }

    /// Return the head cell.
    pub fn head(&self) -> Option<Coordinates> {
        self.parts.first().copied()
    }

    /// Return occupied cells, head first.
    pub fn parts(&self) -> &[Coordinates] {
        &self.parts
    }

    /// Return `true` if any part of the snake is on `coords`.
    pub fn contains(&self, coords: Coordinates) -> bool {
        self.parts.contains(&coords)
    }

	/// Return amount of parts the snake currently has.
	pub fn len(&self) -> usize {
		self.parts.len()
	}

    /// Return the length the snake grows up to.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Return current direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Return the direction waiting to be applied.
    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }
}

/// Build a snake from `parts` (head first) with length equal to their amount.
#[cfg(test)]
pub(crate) fn from_parts(parts: &[(i32, i32)], direction: Direction) -> Snake {
    Snake {
        parts: parts.iter().map(|p| (*p).into()).collect(),
        direction,
        next_direction: None,
        length: parts.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new((10, 10)).unwrap()
    }

    #[test]
    fn moves_in_direction() -> Result<()> {
        let mut snake = Snake::new((5, 5).into(), Direction::Up);
        assert_eq!(snake.step(&grid())?, Step::Moved((5, 4).into()));
        assert_eq!(snake.parts(), &[Coordinates::new(5, 4)]);
        Ok(())
    }

    #[test]
    fn wraps_around_edges() -> Result<()> {
        let cases = [
            ((0, 4), Direction::Left, (9, 4)),
            ((9, 4), Direction::Right, (0, 4)),
            ((4, 0), Direction::Up, (4, 9)),
            ((4, 9), Direction::Down, (4, 0)),
        ];
        for (start, direction, expected) in cases {
            let mut snake = Snake::new(start.into(), direction);
            assert_eq!(snake.step(&grid())?, Step::Moved(expected.into()));
        }
        Ok(())
    }

    #[test]
    fn grows_one_part_per_step() -> Result<()> {
        let mut snake = Snake::new((5, 5).into(), Direction::Right);
        snake.grow(2);
        assert_eq!(snake.len(), 1);

        snake.step(&grid())?;
        assert_eq!(snake.len(), 2);
        snake.step(&grid())?;
        snake.step(&grid())?;
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.parts(), &[Coordinates::new(8, 5), Coordinates::new(7, 5), Coordinates::new(6, 5)]);
        Ok(())
    }

    #[test]
    fn never_longer_than_length() -> Result<()> {
        let mut snake = Snake::new((0, 0).into(), Direction::Down);
        snake.grow(3);
        for _ in 0..30 {
            snake.step(&grid())?;
            assert!(snake.len() <= snake.length());
        }
        assert_eq!(snake.len(), 4);
        Ok(())
    }

    #[test]
    fn bumps_into_body() -> Result<()> {
        // Head at (5, 5) heading left into a U-turn of the body.
        let mut snake = from_parts(&[(5, 5), (5, 6), (4, 6), (4, 5), (4, 4)], Direction::Left);
        assert_eq!(snake.step(&grid())?, Step::Bumped((4, 5).into()));
        assert_eq!(snake.head(), Some((5, 5).into()));
        assert_eq!(snake.len(), 5);
        Ok(())
    }

    #[test]
    fn tail_counts_as_body() -> Result<()> {
        let mut snake = from_parts(&[(5, 5), (5, 6), (4, 6), (4, 5)], Direction::Left);
        assert_eq!(snake.step(&grid())?, Step::Bumped((4, 5).into()));
        Ok(())
    }

    #[test]
    fn refuses_reverse() {
        let mut snake = Snake::new((5, 5).into(), Direction::Right);
        let err = snake.set_next_direction(Direction::Left, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::ChangeDirectionToOpposite(Direction::Right))
        );
        assert_eq!(snake.next_direction(), None);

        assert!(snake.set_next_direction(Direction::Left, true).is_ok());
        assert_eq!(snake.next_direction(), Some(Direction::Left));
    }

    #[test]
    fn reverse_is_checked_against_current_direction() {
        let mut snake = Snake::new((5, 5).into(), Direction::Right);
        snake.set_next_direction(Direction::Up, false).unwrap();
        // Down is opposite to the pending Up, but not to the current Right.
        snake.set_next_direction(Direction::Down, false).unwrap();
        snake.update_direction();
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.next_direction(), None);
    }

    #[test]
    fn pending_direction_applied_once() {
        let mut snake = Snake::new((5, 5).into(), Direction::Right);
        snake.update_direction();
        assert_eq!(snake.direction(), Direction::Right);

        snake.set_next_direction(Direction::Up, false).unwrap();
        assert_eq!(snake.direction(), Direction::Right);
        snake.update_direction();
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn reset() {
        let mut snake = from_parts(&[(1, 1), (1, 2), (1, 3)], Direction::Up);
        snake.set_next_direction(Direction::Left, false).unwrap();
        snake.reset((5, 5).into(), Direction::Down);

        assert_eq!(snake.parts(), &[Coordinates::new(5, 5)]);
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.next_direction(), None);
    }
}
