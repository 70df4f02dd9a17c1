//! Ninja Run headless demo
//!
//! Drives the simulation from a scripted input stream and logs the HUD and
//! gameplay events. Windowed front ends embed the library directly.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::{Parser, ValueEnum};

    use ninja_run::consts::SIM_DT;
    use ninja_run::platform::LogRenderer;
    use ninja_run::sim::{GameEvent, GamePhase};
    use ninja_run::{Action, BuiltinLevels, Game, LevelLoader, Tuning};

    /// Canned input patterns
    #[derive(Debug, Clone, Copy, ValueEnum)]
    enum Script {
        /// No keys held
        Idle,
        /// Hold right the whole time
        RunRight,
        /// Hold right and jump every second
        Hop,
    }

    #[derive(Parser)]
    #[command(name = "ninja-run", about = "Headless Ninja Run simulation")]
    struct Args {
        /// Level to start on (1-15)
        #[arg(long, default_value_t = 1)]
        level: u32,
        /// Frames to simulate (one tick per frame)
        #[arg(long, default_value_t = 600)]
        ticks: u32,
        /// Seed for randomized pickup layouts
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// JSON tuning file (defaults used if missing)
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Input pattern to play
        #[arg(long, value_enum, default_value_t = Script::RunRight)]
        script: Script,
    }

    pub fn run() {
        env_logger::init();
        let args = Args::parse();
        log::info!("Ninja Run (headless) starting...");

        let tuning = match &args.tuning {
            Some(path) => Tuning::load_or_default(path),
            None => Tuning::default(),
        };
        match tuning.to_json() {
            Ok(json) => log::debug!("Effective tuning:\n{json}"),
            Err(e) => log::warn!("Could not serialize tuning: {e}"),
        }
        let loader = BuiltinLevels::new(tuning.clone(), args.seed);

        let mut game = match Game::new(tuning, loader) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Failed to create game: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = game.start_at(args.level) {
            log::error!("Failed to start: {e}");
            std::process::exit(1);
        }

        let mut renderer = LogRenderer::new(60);
        for frame in 0..args.ticks {
            apply_script(&mut game, args.script, frame);

            for event in game.frame(SIM_DT, &mut renderer) {
                match event {
                    GameEvent::CoinCollected { index, score } => {
                        log::info!("Coin {index} collected, score {score}");
                    }
                    GameEvent::PlayerDamaged { cause, lives } => {
                        log::info!("Hit by {cause:?}, {lives} lives left");
                    }
                    GameEvent::LevelComplete(summary) => {
                        log::info!(
                            "Cleared level {} in {} {}",
                            summary.level,
                            summary.time(),
                            summary.stars_display()
                        );
                    }
                    GameEvent::GameOver(summary) => {
                        log::info!("Game over with score {}", summary.score);
                    }
                }
            }

            match game.phase() {
                GamePhase::LevelComplete => {
                    if let Err(e) = game.advance_level() {
                        log::warn!("Could not advance: {e}");
                        break;
                    }
                }
                GamePhase::GameOver => break,
                _ => {}
            }
        }

        let summary = game.session().run_summary();
        println!(
            "level {} | score {} | lives {} | time {} | {}",
            summary.level,
            summary.score,
            game.session().lives,
            summary.time(),
            summary.stars_display()
        );
    }

    fn apply_script<L: LevelLoader>(game: &mut Game<L>, script: Script, frame: u32) {
        let input = game.input_mut();
        match script {
            Script::Idle => input.clear(),
            Script::RunRight => input.set(Action::MoveRight, true),
            Script::Hop => {
                input.set(Action::MoveRight, true);
                input.set(Action::Jump, frame % 60 < 5);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `ninja_run::Game` from their own event loop
}
