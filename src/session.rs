//! Session state and the per-frame step.
//!
//! A [`Session`] owns the map, the player and the projection settings; the
//! entry point owns the session and a [`Platform`] and drives one through the
//! other. Nothing here touches a window directly.
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::maze::Maze;
use crate::core::player::Player;
use crate::core::process_events::{InputState, process_events};
use crate::error::{RaycastError, Result};
use crate::render::casters::cast_fan;
use crate::render::render3d::{Projection, render_frame};
use crate::render::surface::Surface;

/// Everything outside the engine: window, input, clock.
pub trait Platform {
    type Surface: Surface;

    /// Brings up the window, renderer and input. A failure here means the
    /// session must not run.
    fn init(title: &str, width: u32, height: u32) -> Result<Self>
    where
        Self: Sized;

    /// Drains every input event queued since the last call.
    fn poll_input(&mut self) -> InputState;

    fn surface(&mut self) -> &mut Self::Surface;

    /// Monotonic time since the platform came up.
    fn now(&self) -> Duration;

    fn sleep(&mut self, duration: Duration);
}

/// What one [`Session::tick`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub rays: usize,
    /// Rays that left the map and were drawn at max range.
    pub misses: usize,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct Session {
    config: Config,
    maze: Maze,
    projection: Projection,
    player: Option<Player>,
    running: bool,
    frames: u64,
    warned_no_player: bool,
}

impl Session {
    /// Validates `config` against `maze` and readies a session. Fails when the
    /// config is out of range or the minimap and 3D view do not fit the
    /// window side by side.
    pub fn new(config: Config, maze: Maze) -> Result<Self> {
        config.validate()?;
        let projection = Projection::new(&maze, &config)?;
        if !projection.fits(config.ray_count, config.width) {
            return Err(RaycastError::InvalidConfig(format!(
                "minimap ({} px) plus {} strips of {} px overflow a {} px window",
                projection.x_offset, config.ray_count, config.strip_width, config.width
            )));
        }
        info!(
            rows = maze.rows(),
            cols = maze.cols(),
            rays = config.ray_count,
            "session ready"
        );
        Ok(Self {
            config,
            maze,
            projection,
            player: None,
            running: true,
            frames: 0,
            warned_no_player: false,
        })
    }

    /// Places the player at `(x, y)` facing angle 0, replacing any previous
    /// player. Spawning inside a wall is allowed.
    pub fn spawn_player(&mut self, x: f32, y: f32) {
        let player = Player::with_size(x, y, self.config.player_size);
        info!(x, y, "player spawned");
        self.player = Some(player);
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs one frame: input, movement, ray fan, draw, present. A quit request
    /// still lets the frame finish; the session stops afterwards.
    pub fn tick<P: Platform>(&mut self, platform: &mut P) -> FrameStats {
        let start = platform.now();

        let input = platform.poll_input();
        if input.quit {
            info!(frame = self.frames, "quit requested");
            self.running = false;
        }

        let samples = match self.player.as_mut() {
            Some(player) => {
                process_events(&input, player, self.config.rotate_step);
                cast_fan(
                    &self.maze,
                    player.center(),
                    player.angle(),
                    self.config.fov_degrees,
                    self.config.ray_count,
                    self.config.cell_size,
                )
            }
            None => {
                if !self.warned_no_player {
                    warn!("tick before spawn_player; drawing the map only");
                    self.warned_no_player = true;
                }
                Vec::new()
            }
        };

        let misses = samples.iter().filter(|s| !s.hit).count();
        if misses > 0 {
            debug!(misses, "rays left the map");
        }

        let surface = platform.surface();
        render_frame(
            surface,
            &self.maze,
            self.player.as_ref(),
            &samples,
            &self.projection,
        );
        surface.present();
        self.frames += 1;

        FrameStats {
            rays: samples.len(),
            misses,
            elapsed: platform.now().saturating_sub(start),
        }
    }

    /// Ticks until quit, sleeping out the rest of each frame budget. Frames
    /// that run long are not made up for. Returns the number of frames drawn.
    ///
    /// Fails before the first frame when the platform's surface is too small
    /// for the minimap and the 3D view.
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> Result<u64> {
        let (width, height) = platform.surface().size();
        if !self.projection.fits(self.config.ray_count, width) || height < self.config.height {
            return Err(RaycastError::InvalidConfig(format!(
                "a {width}x{height} surface cannot hold a {}x{} frame",
                self.config.width, self.config.height
            )));
        }

        let budget = self.config.frame_budget();
        let first = self.frames;
        while self.running {
            let stats = self.tick(platform);
            if !self.running {
                break;
            }
            match budget.checked_sub(stats.elapsed) {
                Some(rest) if !rest.is_zero() => platform.sleep(rest),
                _ => debug!(elapsed = ?stats.elapsed, ?budget, "frame over budget"),
            }
        }
        Ok(self.frames - first)
    }

    pub fn shutdown(&mut self) {
        self.running = false;
        info!(frames = self.frames, "session shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::{DrawCommand, RecordingSurface};

    /// Plays back scripted input, then asks to quit. Polling stands in for
    /// frame work and, like sleeping, advances a fake clock.
    struct Scripted {
        surface: RecordingSurface,
        script: Vec<InputState>,
        clock: Duration,
        work_per_frame: Duration,
        sleeps: Vec<Duration>,
    }

    impl Platform for Scripted {
        type Surface = RecordingSurface;

        fn init(_title: &str, width: u32, height: u32) -> Result<Self> {
            Ok(Self {
                surface: RecordingSurface::new(width, height),
                script: Vec::new(),
                clock: Duration::ZERO,
                work_per_frame: Duration::from_millis(4),
                sleeps: Vec::new(),
            })
        }

        fn poll_input(&mut self) -> InputState {
            self.clock += self.work_per_frame;
            if self.script.is_empty() {
                InputState {
                    quit: true,
                    ..Default::default()
                }
            } else {
                self.script.remove(0)
            }
        }

        fn surface(&mut self) -> &mut RecordingSurface {
            &mut self.surface
        }

        fn now(&self) -> Duration {
            self.clock
        }

        fn sleep(&mut self, duration: Duration) {
            self.sleeps.push(duration);
            self.clock += duration;
        }
    }

    fn session() -> Session {
        Session::new(Config::default(), Maze::reference()).unwrap()
    }

    #[test]
    fn rejects_view_that_overflows_window() {
        let config = Config {
            width: 900,
            ..Config::default()
        };
        let err = Session::new(config, Maze::reference()).err().unwrap();
        assert!(matches!(err, RaycastError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_map_too_large_for_screen_coordinates() {
        let config = Config {
            cell_size: 50_000,
            ..Config::default()
        };
        let wide = Maze::new(vec![vec![0; 50_000]]).unwrap();
        let err = Session::new(config, wide).err().unwrap();
        assert!(matches!(err, RaycastError::InvalidConfig(_)));
    }

    #[test]
    fn tick_draws_map_player_rays_strips_then_presents() {
        let mut s = session();
        s.spawn_player(75.0, 75.0);
        let mut p = Scripted::init("t", 1400, 800).unwrap();
        p.script = vec![InputState::default()];

        let stats = s.tick(&mut p);
        assert_eq!(stats.rays, 60);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.elapsed, Duration::from_millis(4));

        let cmds = &p.surface.commands;
        // clear + 64 tiles + player + 60 rays + 60 strips + present
        assert_eq!(cmds.len(), 1 + 64 + 1 + 60 + 60 + 1);
        assert!(matches!(cmds[0], DrawCommand::Clear(_)));
        assert!(cmds[1..66].iter().all(|c| matches!(c, DrawCommand::FillRect { .. })));
        assert!(cmds[66..126].iter().all(|c| matches!(c, DrawCommand::Line { .. })));
        assert!(cmds[126..186].iter().all(|c| matches!(c, DrawCommand::FillRect { .. })));
        assert_eq!(cmds[186], DrawCommand::Present);
    }

    #[test]
    fn tick_without_player_draws_map_only() {
        let mut s = session();
        let mut p = Scripted::init("t", 1400, 800).unwrap();
        p.script = vec![InputState::default()];
        let stats = s.tick(&mut p);
        assert_eq!(stats.rays, 0);
        assert_eq!(p.surface.commands.len(), 1 + 64 + 1);
    }

    #[test]
    fn input_moves_player_between_frames() {
        let mut s = session();
        s.spawn_player(75.0, 75.0);
        let mut p = Scripted::init("t", 1400, 800).unwrap();
        p.script = vec![
            InputState {
                rotate_right: true,
                ..Default::default()
            },
            InputState {
                forward: true,
                ..Default::default()
            },
        ];
        s.tick(&mut p);
        s.tick(&mut p);
        let player = s.player().unwrap();
        assert!((player.angle() - 0.1).abs() < 1e-6);
        assert!(player.pos.x > 75.0);
    }

    #[test]
    fn run_sleeps_out_the_budget_and_stops_on_quit() {
        let mut s = session();
        s.spawn_player(75.0, 75.0);
        let mut p = Scripted::init("t", 1400, 800).unwrap();
        p.script = vec![InputState::default(); 3];

        let frames = s.run(&mut p).unwrap();
        // three scripted frames plus the one that saw quit
        assert_eq!(frames, 4);
        assert!(!s.is_running());
        assert_eq!(p.sleeps, vec![Duration::from_millis(12); 3]);
        assert_eq!(p.surface.frames_presented(), 4);
    }

    #[test]
    fn slow_frames_skip_the_sleep() {
        let mut s = session();
        s.spawn_player(75.0, 75.0);
        let mut p = Scripted::init("t", 1400, 800).unwrap();
        p.work_per_frame = Duration::from_millis(40);
        p.script = vec![InputState::default(); 2];

        s.run(&mut p).unwrap();
        assert!(p.sleeps.is_empty());
    }

    #[test]
    fn run_refuses_a_surface_smaller_than_the_frame() {
        let mut s = session();
        s.spawn_player(75.0, 75.0);

        let mut narrow = Scripted::init("t", 1000, 800).unwrap();
        let err = s.run(&mut narrow).unwrap_err();
        assert!(matches!(err, RaycastError::InvalidConfig(_)));

        let mut short = Scripted::init("t", 1400, 600).unwrap();
        assert!(s.run(&mut short).is_err());

        assert!(narrow.surface.commands.is_empty());
        assert!(short.surface.commands.is_empty());
        assert!(s.is_running());
    }
}
