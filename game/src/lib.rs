//! Game abstractions crate.

pub mod apple;
pub mod aux;
pub mod error;
pub mod grid;
pub mod snake;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		apple::Apple, aux::*, error::GameError, grid::Grid, snake::Snake, GameData, Settings, Tick,
	};
}

use apple::Apple;
use aux::{Coordinates, Direction};
use error::GameError;
use grid::Grid;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use snake::{Snake, Step};

/// What happened during one [`GameData::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
	/// Snake moved onto the contained cell.
	Moved(Coordinates),

	/// Snake ate an apple on the contained cell.
	Ate(Coordinates),

	/// Snake bumped into itself having the contained length and started
	/// over.
	Reset(usize),

	/// Snake of the contained length left no room for a new apple, the game
	/// started over.
	Filled(usize),
}

/// Game state.
#[derive(Debug, Clone)]
pub struct GameData {
	grid: Grid,
	snake: Snake,
	apple: Apple,
	settings: Settings,
	rng: StdRng,
	ticks: u64,
}

impl GameData {
	/// Default size of the [`game grid`](Grid). Used when one isn't provided to the [`new`](Self::new)
	/// function.
	pub const GRID_SIZE: (usize, usize) = Grid::DEFAULT_SIZE;

	/// Return a new [`GameData`] with the snake in the center of the grid and
	/// an apple somewhere else.
	pub fn new(grid_size: Option<(usize, usize)>, settings: Settings) -> Result<Self> {
		let grid = Grid::new(grid_size.unwrap_or(Self::GRID_SIZE))?;
		let mut rng = match settings.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		let direction = initial_direction(&settings, &mut rng);
		let snake = Snake::new(grid.center(), direction);
		let mut apple = Apple::new(grid.center(), None);
		apple.relocate(&mut rng, &grid, snake.parts())?;

		log::debug!("New {} game, snake heads {}, apple at {}", grid, direction, apple.coords());

		Ok(Self {
			grid,
			snake,
			apple,
			settings,
			rng,
			ticks: 0,
		})
	}

	/// Advance the game by one step: turn, move, then eat. A snake which
	/// bumped into itself starts over from the center and may eat an apple
	/// lying there on the same tick.
	pub fn tick(&mut self) -> Result<Tick> {
		self.ticks += 1;
		self.snake.update_direction();

		let (head, bumped) = match self.snake.step(&self.grid)? {
			Step::Moved(head) => (head, None),
			Step::Bumped(at) => {
				let length = self.snake.len();
				log::info!("Snake of {} length bumped into itself at {}", length, at);
				self.reset_snake();
				(self.grid.center(), Some(length))
			}
		};
		log::trace!("Tick {}: snake head at {}", self.ticks, head);

		match (self.eat_apple(head)?, bumped) {
			(Some(filled @ Tick::Filled(_)), _) => Ok(filled),
			(_, Some(length)) => Ok(Tick::Reset(length)),
			(Some(ate), None) => Ok(ate),
			(None, None) => Ok(Tick::Moved(head)),
		}
	}

	/// Grow the snake and move the apple if `head` is on it. Return none if
	/// there was no apple to eat.
	fn eat_apple(&mut self, head: Coordinates) -> Result<Option<Tick>> {
		if head != self.apple.coords() {
			return Ok(None);
		}

		self.snake.grow(self.settings.snake_increment_size);
		log::debug!("Apple at {} eaten, snake grows up to {}", head, self.snake.length());

		match self.apple.relocate(&mut self.rng, &self.grid, self.snake.parts()) {
			Ok(()) => Ok(Some(Tick::Ate(head))),
			Err(e) if matches!(e.downcast_ref::<GameError>(), Some(GameError::NoFreeCells)) => {
				let length = self.snake.len();
				log::info!("Snake of {} length filled the whole {} grid", length, self.grid);
				self.restart()?;
				Ok(Some(Tick::Filled(length)))
			}
			Err(e) => Err(e),
		}
	}

	/// Ask the snake to turn into `direction` on the next tick.
	pub fn turn(&mut self, direction: Direction) -> Result<()> {
		self.snake
			.set_next_direction(direction, self.settings.allow_reverse)
	}

	/// Start over: reset the snake and move the apple.
	pub fn restart(&mut self) -> Result<()> {
		self.reset_snake();
		self.apple
			.relocate(&mut self.rng, &self.grid, self.snake.parts())
	}

	/// Put the snake back to the grid center.
	fn reset_snake(&mut self) {
		let direction = initial_direction(&self.settings, &mut self.rng);
		self.snake.reset(self.grid.center(), direction);
	}

	/// Return the snake.
	pub fn snake(&self) -> &Snake {
		&self.snake
	}

	/// Return the apple.
	pub fn apple(&self) -> &Apple {
		&self.apple
	}

	/// Return game [`Grid`].
	pub fn grid(&self) -> Grid {
		self.grid
	}

	/// Return game [`settings`](Settings).
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Return number of ticks played so far.
	pub fn ticks(&self) -> u64 {
		self.ticks
	}
}

fn initial_direction<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Direction {
	settings.snake_direction.unwrap_or_else(|| rng.gen())
}

/// Game settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
	/// Direction the snake heads after every reset. If it's none, use random
	/// direction each time.
	pub snake_direction: Option<Direction>,

	/// Whether the snake is allowed to turn back into itself.
	pub allow_reverse: bool,

	/// How many parts should be added to snake when it eats an apple.
	pub snake_increment_size: usize,

	/// Seed of the random generator placing apples and picking directions.
	pub seed: Option<u64>,
}

impl Settings {
	/// Default snake increment size when it eats an apple.
	pub const SNAKE_INCREMENT_SIZE: usize = 1;

	/// Default initial snake direction. If it's none, use random direction for
	/// every new snake.
	pub const SNAKE_DIRECTION: Option<Direction> = None;
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			snake_direction: Self::SNAKE_DIRECTION,
			allow_reverse: false,
			snake_increment_size: Self::SNAKE_INCREMENT_SIZE,
			seed: None,
		}
	}
}
