use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};

use crate::game::{FixedStepClock, GameConfig, World};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Interactive keyboard play: owns the world, the fixed-step clock that
/// paces it, and the terminal render/input loop around them.
pub struct HumanMode {
    world: World,
    clock: FixedStepClock,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    epoch: Instant,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            world: World::new(&config),
            clock: FixedStepClock::new(config.tick_interval_secs),
            stats: SessionStats::new(),
            renderer: Renderer::new(config.cell_width),
            input_handler: InputHandler::new(),
            epoch: Instant::now(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Frames at ~60 Hz feed timestamps to the fixed-step clock, which
        // decides when a 0.1 s simulation tick is actually due.
        let mut frame_timer = tokio::time::interval(Duration::from_millis(16));

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = tokio::time::interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulation frame
                _ = frame_timer.tick() => {
                    self.advance_frame(self.epoch.elapsed().as_secs_f64());
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.world, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Feed one frame timestamp to the clock; run a world tick when due
    fn advance_frame(&mut self, timestamp: f64) {
        if let Some(delta) = self.clock.advance(timestamp) {
            let was_over = self.world.game_over();
            self.world.tick(delta);
            if !was_over && self.world.game_over() {
                self.stats.on_run_over(self.world.score());
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.apply(action);
        }
    }

    fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => {
                // Takes effect on the next advance.
                if !self.world.game_over() {
                    let vel = direction.steer(self.world.snake.head_velocity());
                    self.world.snake.set_head_velocity(vel);
                }
            }
            KeyAction::Restart => {
                // Only honored from the game-over screen.
                if self.world.game_over() {
                    self.world.reset();
                    self.stats.on_run_start();
                }
            }
            KeyAction::Quit => {
                self.should_quit = true;
                self.clock.stop();
            }
            KeyAction::None => {}
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Vec2;
    use crate::input::Direction;

    fn mode() -> HumanMode {
        HumanMode::new(GameConfig::small())
    }

    /// Drive enough frames to run `ticks` simulation steps
    fn run_ticks(mode: &mut HumanMode, ticks: usize) {
        let interval = mode.clock.interval_secs();
        for i in 1..=ticks {
            mode.advance_frame(i as f64 * interval * 1.5);
        }
    }

    #[test]
    fn test_new_mode_is_running() {
        let mode = mode();
        assert!(!mode.world.game_over());
        assert_eq!(mode.world.score(), 0);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_steering_applies_to_head() {
        let mut mode = mode();
        mode.apply(KeyAction::Steer(Direction::Right));
        assert_eq!(mode.world.snake.head_velocity(), Vec2::new(1, 0));
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut mode = mode();
        mode.apply(KeyAction::Steer(Direction::Right));

        mode.apply(KeyAction::Restart);

        // No reset happened: the steering input survived.
        assert_eq!(mode.world.snake.head_velocity(), Vec2::new(1, 0));
        assert_eq!(mode.stats.runs_played(), 0);
    }

    #[test]
    fn test_game_over_then_restart() {
        let mut mode = mode();
        mode.world.food.pos = Vec2::ZERO;
        mode.apply(KeyAction::Steer(Direction::Right));

        // Head starts at (5, 5) on a 10x10 grid; ten ticks walk it off
        // the right edge.
        run_ticks(&mut mode, 10);
        assert!(mode.world.game_over());
        assert_eq!(mode.stats.runs_played(), 1);

        // Steering is dead, restart is live.
        mode.apply(KeyAction::Steer(Direction::Down));
        assert_eq!(mode.world.snake.head_velocity(), Vec2::ZERO);

        mode.apply(KeyAction::Restart);
        assert!(!mode.world.game_over());
        assert_eq!(mode.world.snake.len(), 1);
        assert_eq!(mode.world.snake.head_pos(), Vec2::new(5, 5));
    }

    #[test]
    fn test_quit_stops_the_clock() {
        let mut mode = mode();
        mode.apply(KeyAction::Quit);
        assert!(mode.should_quit);
        assert!(mode.clock.is_stopped());

        // A stopped clock delivers no more ticks.
        let head = mode.world.snake.head_pos();
        mode.apply(KeyAction::Steer(Direction::Right));
        run_ticks(&mut mode, 5);
        assert_eq!(mode.world.snake.head_pos(), head);
    }
}
