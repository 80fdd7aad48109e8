mod frame_input;
mod ui_render;
mod window_config;

use std::env;
use std::io;

use anyhow::{Context as _, Result};
use app::app_config::AppPaths;
use app::app_loop::AppState;
use app::seed::{generate_runtime_seed, resolve_seed};
use dungeon::{CONSOLE_HEIGHT, CONSOLE_WIDTH, Console, SaveSlot, Session};
use macroquad::prelude::{BLACK, clear_background, next_frame, prevent_quit};
use macroquad::window::Conf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::frame_input::InputCollector;
use crate::ui_render::{CellMetrics, draw_console};

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();
}

fn build_app() -> Result<AppState> {
    let paths = AppPaths::discover();
    let config = paths
        .load_config()
        .with_context(|| format!("loading {}", paths.config_file.display()))?;
    let args: Vec<String> = env::args().collect();
    let seed = resolve_seed(&args, config.seed, generate_runtime_seed())?;
    let save = SaveSlot::new(paths.save_path(&config));
    tracing::info!(seed = seed.value(), save = %save.path().display(), "starting");
    Ok(AppState::new(Session::new(config, save, seed.value())))
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let mut app = match build_app() {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("{err:#}");
            return;
        }
    };
    // Window close then arrives as InputEvent::Quit.
    prevent_quit();

    let mut input = InputCollector::default();
    let mut console = Console::new(CONSOLE_WIDTH, CONSOLE_HEIGHT);
    loop {
        let metrics = CellMetrics::current();
        let events = input.capture(metrics);
        if app.tick(&events).is_some() {
            break;
        }
        app.render(&mut console);
        clear_background(BLACK);
        draw_console(&console, metrics);
        next_frame().await;
    }
}
