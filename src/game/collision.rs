//! Collision predicates over a snake and the grid bounds.
//!
//! All of these are pure reads; the world decides what to do with the
//! answers and in what order to ask.

use super::snake::Snake;
use super::vec2::Vec2;

/// True when the head sits on the food cell
pub fn food_captured(snake: &Snake, food_pos: Vec2) -> bool {
    snake.head_pos() == food_pos
}

/// True when the head shares a cell with any trailing segment.
/// A one-segment snake can never collide with itself.
pub fn self_collision(snake: &Snake) -> bool {
    let head = snake.head_pos();
    snake
        .segments()
        .iter()
        .skip(1)
        .any(|segment| segment.pos == head)
}

/// True when the head lies outside `[0, width) x [0, height)`
pub fn border_collision(snake: &Snake, width: i32, height: i32) -> bool {
    let head = snake.head_pos();
    head.x < 0 || head.x >= width || head.y < 0 || head.y >= height
}

/// True when any segment sits at `pos`. Food respawn uses this to reject
/// cells under the snake.
pub fn position_occupied(snake: &Snake, pos: Vec2) -> bool {
    snake.segments().iter().any(|segment| segment.pos == pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_with_body(cells: &[(i32, i32)]) -> Snake {
        // Builds a multi-segment snake by growing into explicit cells.
        let (hx, hy) = cells[0];
        let mut snake = Snake::new(Vec2::new(hx, hy));
        for &(x, y) in &cells[1..] {
            snake.swallow(Vec2::new(x, y));
            snake.advance();
        }
        snake
    }

    #[test]
    fn test_food_captured_exact_match_only() {
        let snake = Snake::new(Vec2::new(5, 5));
        assert!(food_captured(&snake, Vec2::new(5, 5)));
        assert!(!food_captured(&snake, Vec2::new(5, 6)));
        assert!(!food_captured(&snake, Vec2::new(6, 5)));
    }

    #[test]
    fn test_single_segment_never_self_collides() {
        let snake = Snake::new(Vec2::new(5, 5));
        assert!(!self_collision(&snake));
    }

    #[test]
    fn test_self_collision_against_trailing_segments() {
        let clear = snake_with_body(&[(5, 5), (5, 6), (5, 7)]);
        assert_eq!(clear.len(), 3);
        assert!(!self_collision(&clear));

        // Drive the head into its own tail cell.
        let mut overlapping = snake_with_body(&[(5, 5), (5, 6)]);
        overlapping.set_head_velocity(Vec2::new(0, 1));
        overlapping.advance();
        assert_eq!(overlapping.head_pos(), Vec2::new(5, 6));
        assert!(self_collision(&overlapping));
    }

    #[test]
    fn test_border_collision_half_open_bounds() {
        let inside = [(0, 0), (9, 9), (0, 9), (9, 0), (5, 5)];
        for (x, y) in inside {
            let snake = Snake::new(Vec2::new(x, y));
            assert!(!border_collision(&snake, 10, 10), "({x}, {y})");
        }

        let outside = [(-1, 5), (10, 5), (5, -1), (5, 10)];
        for (x, y) in outside {
            let snake = Snake::new(Vec2::new(x, y));
            assert!(border_collision(&snake, 10, 10), "({x}, {y})");
        }
    }

    #[test]
    fn test_position_occupied_checks_every_segment() {
        let snake = snake_with_body(&[(5, 5), (5, 6), (5, 7)]);

        assert!(position_occupied(&snake, Vec2::new(5, 5)));
        assert!(position_occupied(&snake, Vec2::new(5, 6)));
        assert!(position_occupied(&snake, Vec2::new(5, 7)));
        assert!(!position_occupied(&snake, Vec2::new(6, 5)));
    }
}
