//! Frame orchestrator
//!
//! Owns the benchmark state plus the renderer, clock and input capability
//! handles, and advances everything one frame at a time: pace the clock,
//! drain input, step the simulation, draw. All host handles live in this
//! one object; nothing in the crate touches globals.

use glam::Vec2;

use crate::clock::FrameClock;
use crate::consts::*;
use crate::input::{InputEvent, InputSource, MouseButton};
use crate::render::{palette, FontSize, Renderer};
use crate::sim::{tick, BenchPhase, BenchReport, GameState, Rect, TickInput};
use crate::ui::Button;

/// A benchmark session: one arena, one player, one 30-second window at a
/// time, cycling through results screens until the host quits.
pub struct Session<R, C, I> {
    state: GameState,
    renderer: R,
    clock: C,
    input: I,
    pause_button: Button,
    play_again_button: Button,
    /// Scratch buffer reused for each frame's event drain
    events: Vec<InputEvent>,
    auto_fire: bool,
    quit: bool,
}

impl<R: Renderer, C: FrameClock, I: InputSource> Session<R, C, I> {
    pub fn new(seed: u64, renderer: R, clock: C, input: I) -> Self {
        let now = clock.now_millis();
        let state = GameState::new(seed, now);
        let arena = state.arena;

        let pause_button = Button::new(
            Rect::new(arena.width - 110.0, 10.0, 100.0, 40.0),
            "Pause",
        );
        let play_again_button = Button::new(
            Rect::new(
                arena.width / 2.0 - 100.0,
                arena.height / 2.0 + 50.0,
                200.0,
                50.0,
            ),
            "Play Again",
        );

        log::info!("session started (seed {seed})");
        Self {
            state,
            renderer,
            clock,
            input,
            pause_button,
            play_again_button,
            events: Vec::new(),
            auto_fire: false,
            quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The host's input handle, for sources that are fed by hand
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Headless runs: let the simulation aim and fire by itself
    pub fn set_auto_fire(&mut self, on: bool) {
        self.auto_fire = on;
    }

    /// Advance exactly one frame
    pub fn frame(&mut self) {
        let fps = self.clock.tick(TARGET_FPS);
        let now = self.clock.now_millis();

        let tick_input = self.gather_input();
        tick(&mut self.state, &tick_input, now, fps);

        // The one button flips roles with the phase
        let label = match self.state.bench.phase {
            BenchPhase::Running => "Pause",
            _ => "Resume",
        };
        if self.pause_button.label != label {
            self.pause_button.label = label.to_string();
        }

        self.draw();
    }

    /// Loop until the host sends a quit event
    pub fn run(&mut self) {
        while !self.quit {
            self.frame();
        }
    }

    /// Drive frames until the current benchmark window completes, then hand
    /// back the report. Returns whatever has accumulated if the host quits
    /// mid-window.
    pub fn run_benchmark(&mut self) -> BenchReport {
        while !self.quit && self.state.bench.phase != BenchPhase::PausedResults {
            self.frame();
        }
        self.state.report()
    }

    /// Translate this frame's events and key snapshot into a `TickInput`
    fn gather_input(&mut self) -> TickInput {
        let mut tick_input = TickInput {
            auto_fire: self.auto_fire,
            ..Default::default()
        };

        self.events.clear();
        self.input.drain(&mut self.events);
        for event in &self.events {
            match event {
                InputEvent::Quit => self.quit = true,
                InputEvent::PauseKey => tick_input.toggle_pause = true,
                InputEvent::MouseDown {
                    button: MouseButton::Left,
                    pos,
                } => {
                    if self.pause_button.clicked(event) {
                        tick_input.toggle_pause = true;
                    } else if self.state.bench.phase == BenchPhase::PausedResults
                        && self.play_again_button.clicked(event)
                    {
                        // Play Again is just a resume from the results screen
                        tick_input.toggle_pause = true;
                    } else if self.state.bench.phase == BenchPhase::Running {
                        tick_input.fire_at = Some(*pos);
                    }
                }
                InputEvent::MouseDown { .. } => {}
            }
        }

        let keys = self.input.move_keys();
        tick_input.left = keys.left;
        tick_input.right = keys.right;
        tick_input.up = keys.up;
        tick_input.down = keys.down;
        tick_input
    }

    /// Paint the scene, HUD and whichever overlay the phase calls for
    fn draw(&mut self) {
        let mouse = self.input.mouse_pos();
        let arena = self.state.arena;
        let mid = Vec2::new(arena.width / 2.0, arena.height / 2.0);
        let renderer = &mut self.renderer;

        renderer.clear(palette::BLACK);

        renderer.fill_rect(palette::PLAYER, self.state.player.rect());
        for bullet in &self.state.bullets {
            renderer.fill_circle(palette::BULLET, bullet.pos, BULLET_RADIUS);
        }
        for pursuer in &self.state.pursuers {
            renderer.fill_rect(palette::PURSUER, pursuer.rect());
        }

        // Aim line from the player to the pointer
        renderer.line(palette::WHITE, self.state.player.center(), mouse, 2.0);

        self.pause_button.draw(renderer, mouse);

        match self.state.bench.phase {
            BenchPhase::Running => {}
            BenchPhase::PausedManual => {
                renderer.fill_rect(
                    palette::PAUSE_OVERLAY,
                    Rect::new(0.0, 0.0, arena.width, arena.height),
                );
                renderer.text("PAUSED", FontSize::Title, palette::WHITE, mid);
            }
            BenchPhase::PausedResults => {
                renderer.fill_rect(
                    palette::PAUSE_OVERLAY,
                    Rect::new(0.0, 0.0, arena.width, arena.height),
                );
                renderer.text(
                    "BENCHMARK RESULTS",
                    FontSize::Title,
                    palette::WHITE,
                    mid - Vec2::new(0.0, 100.0),
                );
                let report = self.state.report();
                renderer.text(
                    &format!("Pursuers Spawned: {}", report.total_spawned),
                    FontSize::Small,
                    palette::WHITE,
                    mid - Vec2::new(0.0, 40.0),
                );
                renderer.text(
                    &format!("Points: {:.1}", report.points),
                    FontSize::Small,
                    palette::WHITE,
                    mid + Vec2::new(0.0, 10.0),
                );
                self.play_again_button.draw(renderer, mouse);
            }
        }

        // Live pursuer count while the window is still open
        if self.state.bench.phase != BenchPhase::PausedResults {
            renderer.text(
                &format!("Pursuers: {}", self.state.pursuers.len()),
                FontSize::Small,
                palette::WHITE,
                Vec2::new(70.0, 24.0),
            );
        }

        renderer.present();
    }
}
