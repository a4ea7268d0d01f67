use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bounded_life::{Args, Session, Settings, input, rendering};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 800,
        window_height: 800,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "bounded_life=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_settings() -> Result<Settings> {
    Settings::try_from(Args::parse()).context("invalid command-line configuration")
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err:#}");
            return;
        }
    };
    tracing::info!(
        rows = settings.rows,
        cols = settings.cols,
        step_ms = settings.step.as_millis() as u64,
        "starting simulation"
    );

    request_new_screen_size(settings.window as f32, settings.window as f32);
    let cell_size = settings.cell_size();
    let mut session = Session::from_settings(&settings);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        input::handle_mouse_toggle(&mut session, cell_size, mouse_position());
        session = input::process_keyboard_input(session);
        session = session.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_automaton(&session.automaton, cell_size);
        rendering::draw_status(&session);

        next_frame().await;
    }

    tracing::info!(generation = session.automaton.generation(), "exiting");
}
