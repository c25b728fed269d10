use anyhow::Result;
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::InputManager;
use game::{Phase, PlayerCommand, Round, RoundConfig};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Cardinal Clash...");

    let config = RoundConfig::default();
    let mut rng = rand::rng();
    let mut round = Round::new(config, &mut rng)?;
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();
    let mut last_phase = round.phase();
    let mut last_scores = round.scores();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Cardinal Clash")
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.field.width,
            config.field.height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                Event::WindowEvent {
                    event: WindowEvent::KeyboardInput { event, .. },
                    ..
                } => {
                    input.process_keyboard_event(&event);
                }
                Event::WindowEvent {
                    event: WindowEvent::RedrawRequested,
                    ..
                } => {
                    // Drawing is handled by the front-end layer; the
                    // simulation only needs another frame
                    window.request_redraw();
                }
                Event::AboutToWait => {
                    for _ in 0..game_loop.begin_frame() {
                        if matches!(round.phase(), Phase::Ended { .. }) {
                            if input.take_restart() {
                                if let Err(err) = round.restart(&mut rng) {
                                    error!("could not restart the round: {err}");
                                    elwt.exit();
                                }
                                input.reset_all();
                                last_scores = round.scores();
                                last_phase = round.phase();
                            }
                            continue;
                        }

                        let commands = [
                            PlayerCommand {
                                dir: input.direction(0),
                                fire: input.take_fire(0),
                            },
                            PlayerCommand {
                                dir: input.direction(1),
                                fire: input.take_fire(1),
                            },
                        ];
                        round.tick(commands);

                        let scores = round.scores();
                        if scores != last_scores {
                            info!("score: {} - {}", scores[0], scores[1]);
                            last_scores = scores;
                        }
                        if round.phase() != last_phase {
                            if let Phase::Ended { winner } = round.phase() {
                                info!("player {winner} wins! press R for a new round");
                            }
                            last_phase = round.phase();
                        }
                    }
                    window.request_redraw();
                }
                _ => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
