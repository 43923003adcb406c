//! Rainbow Joe main entry point.
//!
//! A small 2D platformer written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The level is a Tiled map under `res/maps/`. Joe walks and runs with A/D
//! and Left Shift, jumps with Space, and a second character patrols the
//! level. Hold F for the free camera, 1/2/3 change the zoom, P pauses, Q quits
//! and F11 toggles the debug overlay.
//!
//! # Main Loop
//!
//! 1. Load `default.ini`, open the raylib window, start the audio thread
//! 2. Load the map and textures, spawn tiles and actors
//! 3. Register observers and systems
//! 4. Run the main game loop:
//!    - Update input, player control, physics, deaths, collisions, camera
//!    - Render world with camera transforms
//! 5. Clean up audio thread and textures on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --map res/maps/01.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process::ExitCode;

use bevy_ecs::prelude::*;
use clap::Parser;

use rainbowjoe::errors::GameError;
use rainbowjoe::game;
use rainbowjoe::resources::audio::{init_audio_messages, setup_audio, shutdown_audio};
use rainbowjoe::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use rainbowjoe::resources::input::InputState;
use rainbowjoe::resources::quit::QuitRequest;
use rainbowjoe::resources::screensize::ScreenSize;
use rainbowjoe::resources::texturestore::TextureStore;
use rainbowjoe::resources::worldtime::WorldTime;
use rainbowjoe::systems::input::update_input_state;
use rainbowjoe::systems::pause::toggle_pause;
use rainbowjoe::systems::render::render_frame;
use rainbowjoe::systems::time::update_world_time;

/// Rainbow Joe, a tiny platformer.
#[derive(Parser)]
#[command(version, about = "Rainbow Joe: run, jump, don't fall off the map.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Tiled JSON map to play.
    #[arg(long, value_name = "PATH", default_value = game::DEFAULT_MAP_PATH)]
    map: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    match config.load_from_file() {
        Ok(()) => {}
        Err(e @ GameError::Config(_)) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => log::warn!("{}; using default settings", e),
    }

    match run(config, cli.map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: GameConfig, map_path: PathBuf) -> Result<(), GameError> {
    log::info!("Hello, world! This is Rainbow Joe!");
    // --------------- Raylib window ---------------
    let (width, height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title("Rainbow Joe")
        .build();
    if config.fullscreen {
        rl.toggle_fullscreen();
    }
    rl.set_target_fps(config.target_fps);
    // Q quits, not ESC
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(QuitRequest::default());
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    if config.audio_enabled {
        setup_audio(&mut world);
    } else {
        log::info!("Audio disabled by configuration");
        init_audio_messages(&mut world);
    }
    world.insert_resource(config);

    game::register_observers(&mut world);

    if let Err(e) = game::setup(&mut world, &mut rl, &thread, &map_path) {
        teardown(&mut world);
        return Err(e);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = game::build_schedule();
    update.add_systems(update_input_state.before(toggle_pause));

    // --------------- Main loop ---------------
    let result = loop {
        let running = !world
            .non_send_resource::<raylib::RaylibHandle>()
            .window_should_close()
            && !world.resource::<QuitRequest>().0;
        if !running {
            break Ok(());
        }

        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        if let Err(e) = render_frame(&mut world) {
            break Err(e);
        }
    };

    teardown(&mut world);
    result
}

/// Stop the audio thread and drop GPU textures while the window still exists.
fn teardown(world: &mut World) {
    shutdown_audio(world);
    world.remove_resource::<TextureStore>();
}
