//! Gotinha entry point
//!
//! Runs the simulation headless with a logging renderer. By default the
//! autopilot plays; `--keys` holds a fixed set of keys instead.
//!
//! ```text
//! gotinha [--seed N] [--ticks N] [--tuning FILE] [--settings FILE]
//!         [--keys ArrowRight,ArrowUp] [--realtime] [--dump-frame]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Duration;

    use gotinha::consts::*;
    use gotinha::input::KeyboardState;
    use gotinha::renderer::{
        Animation, Clock, FixedClock, FrameSnapshot, LogRenderer, Renderer, SystemClock,
    };
    use gotinha::sim::{GameEvent, GameState, TickInput, tick};
    use gotinha::{Settings, Tuning};

    /// Largest frame delta fed to the accumulator (ms)
    const MAX_FRAME_MS: f64 = 250.0;
    /// HUD line cadence in frames
    const HUD_INTERVAL: u64 = 60;

    #[derive(Debug)]
    struct Options {
        seed: u64,
        ticks: u64,
        tuning: Option<String>,
        settings: Option<String>,
        keys: Vec<String>,
        realtime: bool,
        dump_frame: bool,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                seed: 42,
                ticks: 3600,
                tuning: None,
                settings: None,
                keys: Vec::new(),
                realtime: false,
                dump_frame: false,
            }
        }
    }

    fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
        let mut opts = Options::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let v = args.next().ok_or("--seed needs a value")?;
                    opts.seed = v.parse().map_err(|_| format!("bad seed: {v}"))?;
                }
                "--ticks" => {
                    let v = args.next().ok_or("--ticks needs a value")?;
                    opts.ticks = v.parse().map_err(|_| format!("bad tick count: {v}"))?;
                }
                "--tuning" => opts.tuning = Some(args.next().ok_or("--tuning needs a path")?),
                "--settings" => {
                    opts.settings = Some(args.next().ok_or("--settings needs a path")?)
                }
                "--keys" => {
                    let v = args.next().ok_or("--keys needs a list")?;
                    opts.keys = v.split(',').map(str::to_string).collect();
                }
                "--realtime" => opts.realtime = true,
                "--dump-frame" => opts.dump_frame = true,
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(opts)
    }

    /// Simulation plus the host-side collaborators
    struct Game {
        state: GameState,
        settings: Settings,
        keyboard: KeyboardState,
        autopilot: bool,
        renderer: LogRenderer,
        accumulator: f64,
        ticks_run: u64,
    }

    impl Game {
        fn new(opts: &Options, tuning: Tuning, settings: Settings) -> Self {
            let mut keyboard = KeyboardState::new();
            for key in &opts.keys {
                keyboard.key_down(key);
            }
            Self {
                state: GameState::with_tuning(opts.seed, tuning),
                renderer: LogRenderer::new(HUD_INTERVAL, &settings),
                settings,
                keyboard,
                autopilot: opts.keys.is_empty(),
                accumulator: 0.0,
                ticks_run: 0,
            }
        }

        fn input(&self) -> TickInput {
            if self.autopilot {
                TickInput {
                    idle_mode: true,
                    ..Default::default()
                }
            } else {
                self.keyboard.to_tick_input(&self.settings.bindings)
            }
        }

        /// Run as many fixed ticks as the elapsed time covers
        fn update(&mut self, frame_ms: f64, budget: u64) {
            self.accumulator += frame_ms.min(MAX_FRAME_MS);

            let mut substeps = 0;
            while self.accumulator >= TICK_MS as f64
                && substeps < MAX_SUBSTEPS
                && self.ticks_run < budget
            {
                let input = self.input();
                tick(&mut self.state, &input, TICK_MS);
                self.accumulator -= TICK_MS as f64;
                self.ticks_run += 1;
                substeps += 1;

                for event in &self.state.events {
                    log_event(event);
                }
            }
            if substeps == MAX_SUBSTEPS {
                // Spiral of death guard: drop the backlog
                self.accumulator = 0.0;
            }
        }

        fn draw(&mut self, time_ms: f64) {
            let anim = Animation::new(time_ms, &self.settings);
            self.renderer.render(&FrameSnapshot::capture(&self.state), &anim);
        }
    }

    fn log_event(event: &GameEvent) {
        match event {
            GameEvent::ProjectileFired { .. } | GameEvent::PlayerRespawned => {
                log::trace!("{:?}", event)
            }
            _ => log::debug!("{:?}", event),
        }
    }

    fn load_tuning(path: Option<&str>) -> Tuning {
        let Some(path) = path else {
            return Tuning::default();
        };
        match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        }
    }

    pub fn run() {
        env_logger::init();
        log::info!("Gotinha (native) starting...");

        let opts = match parse_args(std::env::args().skip(1)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(2);
            }
        };

        let tuning = load_tuning(opts.tuning.as_deref());
        let settings = opts
            .settings
            .as_deref()
            .map(Settings::load_or_default)
            .unwrap_or_default();
        log::info!("Quality preset: {:?}", settings.quality);
        let mut game = Game::new(&opts, tuning, settings);

        if opts.realtime {
            let clock = SystemClock::new();
            let mut last = clock.now_ms();
            while game.ticks_run < opts.ticks {
                let now = clock.now_ms();
                game.update(now - last, opts.ticks);
                last = now;
                game.draw(now);
                std::thread::sleep(Duration::from_millis(TICK_MS as u64));
            }
        } else {
            let mut clock = FixedClock::default();
            while game.ticks_run < opts.ticks {
                clock.advance(TICK_MS as f64);
                game.update(TICK_MS as f64, opts.ticks);
                game.draw(clock.now_ms());
            }
        }

        log::info!(
            "Finished after {} ticks: {:?}, score {}, lives {}, orbs left {}",
            game.ticks_run,
            game.state.phase,
            game.state.score,
            game.state.player.lives,
            game.state.orbs_remaining()
        );

        if opts.dump_frame {
            match FrameSnapshot::capture(&game.state).to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("Failed to serialize frame: {}", e),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> impl Iterator<Item = String> {
            list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
        }

        #[test]
        fn test_parse_args() {
            let opts = parse_args(args(&["--seed", "7", "--ticks", "10", "--keys", "d,w"])).unwrap();
            assert_eq!(opts.seed, 7);
            assert_eq!(opts.ticks, 10);
            assert_eq!(opts.keys, vec!["d".to_string(), "w".to_string()]);
            assert!(!opts.realtime);

            let opts = parse_args(args(&["--realtime", "--dump-frame"])).unwrap();
            assert!(opts.realtime);
            assert!(opts.dump_frame);
        }

        #[test]
        fn test_parse_args_rejects_unknown() {
            assert!(parse_args(args(&["--fullscreen"])).is_err());
            assert!(parse_args(args(&["--seed"])).is_err());
            assert!(parse_args(args(&["--seed", "x"])).is_err());
        }

        #[test]
        fn test_update_caps_substeps() {
            let opts = Options::default();
            let mut game = Game::new(&opts, Tuning::default(), Settings::default());
            game.update(10_000.0, u64::MAX);
            assert_eq!(game.ticks_run, MAX_SUBSTEPS as u64);
            assert_eq!(game.accumulator, 0.0);
        }

        #[test]
        fn test_held_keys_drive_input() {
            let opts = Options {
                keys: vec!["ArrowRight".to_string()],
                ..Options::default()
            };
            let game = Game::new(&opts, Tuning::default(), Settings::default());
            let input = game.input();
            assert!(input.move_right);
            assert!(!input.idle_mode);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on the web
}
