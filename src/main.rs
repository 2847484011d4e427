//! Native frontend: window, keyboard, fixed-timestep loop, framebuffer
//! presentation

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use log::info;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use duel_pong::Config;
use duel_pong::consts::{MAX_SUBSTEPS, SIM_DT};
use duel_pong::input::InputState;
use duel_pong::renderer::draw_frame;
use duel_pong::sim::{GameState, Mode, tick};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::default();
    config.validate()?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(config, seed);
    info!("match started, seed {seed}");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Duel Pong")
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(config.width as u32, config.height as u32, surface_texture)?
    };

    let mut input = InputState::default();
    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f32;
    let mut last_mode = state.mode;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: key_state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    if key == VirtualKeyCode::Escape && key_state == ElementState::Pressed {
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    input.on_key(key, key_state);
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        log::error!("surface resize failed: {err}");
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                // Clamp long stalls so we never try to catch up a huge gap
                let dt = (now - last_frame).as_secs_f32().min(0.1);
                last_frame = now;
                accumulator += dt;

                let mut substeps = 0;
                while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                    tick(&mut state, &input.tick_input());
                    accumulator -= SIM_DT;
                    substeps += 1;
                }
                if substeps == MAX_SUBSTEPS {
                    accumulator = 0.0;
                }

                if state.mode != last_mode {
                    match state.mode {
                        Mode::ScoredPause => {
                            info!("point scored: {} - {}", state.score[0], state.score[1]);
                        }
                        Mode::GameOver => info!("{}", state.victory_message()),
                        Mode::Playing => {}
                    }
                    last_mode = state.mode;
                }

                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                draw_frame(pixels.frame_mut(), &state);
                if let Err(err) = pixels.render() {
                    log::error!("render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
