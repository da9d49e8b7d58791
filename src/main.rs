use anyhow::Result;
use log::{info, warn};
use rusted_input::engine::input::{DesktopBackend, GamepadButton, InputHub};
use std::time::{Duration, Instant};
use winit::{
    event::{Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    keyboard::KeyCode,
    window::WindowBuilder,
};

/// Rumble length requested when Space is pressed
const RUMBLE_DURATION: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Input demo...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Input")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut input = InputHub::new(DesktopBackend::new());
    let mut last_tick = Instant::now();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => {
                input.backend_mut().handle_window_event(&event);

                match event {
                    WindowEvent::CloseRequested => {
                        info!("Close requested, shutting down...");
                        input.stop_all_vibration();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        let now = Instant::now();
                        input.advance(now - last_tick);
                        last_tick = now;

                        report_input(&mut input);
                        window.request_redraw();
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Log this tick's edges so the tracker can be watched from a terminal
fn report_input(input: &mut InputHub<DesktopBackend>) {
    let keyboard = input.keyboard();
    for key in keyboard.pressed_keys() {
        if keyboard.just_pressed(key) {
            info!("Key pressed: {:?}", key);
        }
    }
    for key in keyboard.previous().keys() {
        if keyboard.just_released(key) {
            info!("Key released: {:?}", key);
        }
    }

    let pointer = input.pointer();
    for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
        if pointer.just_pressed(button) {
            info!("Mouse {:?} pressed at {}", button, pointer.position());
        } else if pointer.just_released(button) {
            info!("Mouse {:?} released", button);
        }
    }
    if pointer.scroll_delta() != 0.0 {
        info!("Scrolled {} lines", pointer.scroll_delta());
    }

    let mut rumble = input.keyboard().just_pressed(KeyCode::Space);
    for pad in input.controllers() {
        if pad.just_pressed(GamepadButton::A) {
            info!("Controller {} pressed A", pad.slot());
            rumble |= pad.slot() == 0;
        }
    }

    if rumble {
        if let Err(e) = input.vibrate(0, 1.0, RUMBLE_DURATION) {
            warn!("Rumble failed: {}", e);
        }
    }
}
