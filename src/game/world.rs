use rand::Rng;

use super::collision;
use super::config::GameConfig;
use super::snake::Snake;
use super::vec2::Vec2;

/// The single active food item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub pos: Vec2,
}

/// The simulation world: one snake, one food, the grid bounds, and the
/// Running/GameOver state machine.
///
/// `tick` is the only mutation entry point while running; once the game is
/// over every tick is a no-op until `reset` replaces the snake wholesale.
pub struct World {
    width: i32,
    height: i32,
    points_per_segment: u32,
    pub snake: Snake,
    pub food: Food,
    game_over: bool,
    rng: rand::rngs::ThreadRng,
}

impl World {
    /// Create a running world with a single-segment snake at the grid
    /// center and food at a random unoccupied cell.
    pub fn new(config: &GameConfig) -> Self {
        let width = config.grid_width as i32;
        let height = config.grid_height as i32;
        let snake = Snake::new(Vec2::new(width / 2, height / 2));
        let mut rng = rand::thread_rng();
        let food = Self::spawn_food(&mut rng, &snake, width, height);

        Self {
            width,
            height,
            points_per_segment: config.points_per_segment,
            snake,
            food,
            game_over: false,
            rng,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Score derived from body growth: the starting segment is free
    pub fn score(&self) -> u32 {
        (self.snake.len() as u32 - 1) * self.points_per_segment
    }

    /// Run one simulation step. The delta is the real time consumed by the
    /// driving clock callback; movement itself is one cell per tick.
    pub fn tick(&mut self, _delta: f64) {
        if self.game_over {
            return;
        }

        self.snake.advance();

        if collision::self_collision(&self.snake)
            || collision::border_collision(&self.snake, self.width, self.height)
        {
            self.game_over = true;
            self.snake.stop();
            return;
        }

        if collision::food_captured(&self.snake, self.food.pos) {
            self.snake.swallow(self.food.pos);
            self.food = Self::spawn_food(&mut self.rng, &self.snake, self.width, self.height);
        }
    }

    /// Replace the snake with a fresh one at the center, respawn food, and
    /// return to the running state. Safe to call from any state.
    pub fn reset(&mut self) {
        self.snake = Snake::new(Vec2::new(self.width / 2, self.height / 2));
        self.food = Self::spawn_food(&mut self.rng, &self.snake, self.width, self.height);
        self.game_over = false;
    }

    /// Rejection-sample a food cell not covered by any snake segment
    fn spawn_food(
        rng: &mut rand::rngs::ThreadRng,
        snake: &Snake,
        width: i32,
        height: i32,
    ) -> Food {
        loop {
            let pos = Vec2::new(rng.gen_range(0..width), rng.gen_range(0..height));
            if !collision::position_occupied(snake, pos) {
                return Food { pos };
            }
        }
    }
}
