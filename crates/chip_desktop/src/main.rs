use std::{
    num::NonZeroU32,
    path::PathBuf,
    rc::Rc,
    time::{Duration, Instant}
};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder}
};

use chip_core::{
    ChipError,
    FrameBuffer,
    Machine,
    Step,
    globals::{SCREEN_WIDTH, SCREEN_HEIGHT},
    ports::{Ports, Speaker}
};

mod audio;
mod host;
mod keypad;

use host::Host;

const FRAME: Duration = Duration::from_micros(16_667);
const PIXEL_ON: u32 = 0x00FF_FFFF;
const PIXEL_OFF: u32 = 0x0000_1F3D;

#[derive(Parser, Debug)]
#[command(name = "chip8", about = "CHIP-8 interpreter")]
struct Args {
    /// Program image, loaded at 0x200
    #[arg(value_name = "ROM")]
    rom: PathBuf,

    /// Instructions executed per 60 Hz frame.
    #[arg(long, default_value_t = 10)]
    cycles_per_frame: u32,

    /// Window pixels per emulated pixel.
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Keep executing after a sprite draw instead of waiting for the next frame.
    #[arg(long, default_value_t = false)]
    no_display_wait: bool,

    /// Tone gain, 0.0 to 1.0.
    #[arg(long, default_value_t = 0.1)]
    volume: f32,

    /// Tone frequency.
    #[arg(long, default_value_t = 440.0)]
    tone_hz: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let args = Args::parse();
    let rom = std::fs::read(&args.rom)
        .with_context(|| format!("reading {}", args.rom.display()))?;
    let mut machine = Machine::new();
    machine.load_rom(&rom)?;
    tracing::info!(path = %args.rom.display(), bytes = rom.len(), "rom loaded");

    let mut host = Host::new(audio::get_device(args.tone_hz, args.volume));

    let event_loop = EventLoop::new()?;
    let window = Rc::new(
        WindowBuilder::new()
            .with_title("CHIP-8")
            .with_inner_size(LogicalSize::new(
                SCREEN_WIDTH as u32 * args.scale,
                SCREEN_HEIGHT as u32 * args.scale
            ))
            .build(&event_loop)?
    );
    let context = softbuffer::Context::new(window.clone())
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = softbuffer::Surface::new(&context, window.clone())
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut next_frame = Instant::now();
    let mut halted = false;

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput {
                    event: KeyEvent { physical_key: PhysicalKey::Code(code), state, repeat: false, .. },
                    ..
                } => {
                    if code == KeyCode::Escape {
                        elwt.exit();
                        return;
                    }
                    if let Some(key) = keypad::map_key(code) {
                        host.keys.set(key, state == ElementState::Pressed);
                    }
                },
                WindowEvent::RedrawRequested => {
                    if let Err(e) = present(&mut surface, &window, &host.screen) {
                        tracing::error!("present failed: {e:#}");
                        elwt.exit();
                    }
                },
                _ => ()
            },
            Event::AboutToWait => {
                let now = Instant::now();
                if now >= next_frame {
                    next_frame = now + FRAME;
                    if !halted {
                        if let Err(e) = run_frame(&mut machine, &mut host, args.cycles_per_frame, !args.no_display_wait) {
                            tracing::error!("machine halted: {e}");
                            host.sound_off();
                            halted = true;
                        }
                    }
                    if machine.take_redraw() {
                        window.request_redraw();
                    }
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
            },
            Event::LoopExiting => tracing::info!("shutting down"),
            _ => ()
        }
    })?;
    Ok(())
}

/// Some cycles, then one timer tick. With `display_wait` the frame's
/// cycles end at the first sprite draw.
fn run_frame<P: Ports>(
    machine: &mut Machine,
    host: &mut P,
    cycles: u32,
    display_wait: bool
) -> Result<(), ChipError> {
    for _ in 0..cycles {
        let step = machine.step(host)?;
        if step == Step::Drew && display_wait {
            break;
        }
    }
    machine.tick_timers(host);
    Ok(())
}

fn present(
    surface: &mut softbuffer::Surface<Rc<Window>, Rc<Window>>,
    window: &Window,
    screen: &FrameBuffer
) -> Result<()> {
    let size = window.inner_size();
    let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(())
    };
    surface.resize(width, height).map_err(|e| anyhow!("{e}"))?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("{e}"))?;
    fill_buffer(&mut buffer, size.width as usize, size.height as usize, screen);
    buffer.present().map_err(|e| anyhow!("{e}"))?;
    Ok(())
}

/// Nearest-neighbour scale of the screen onto a `w` x `h` pixel buffer
fn fill_buffer(buffer: &mut [u32], w: usize, h: usize, screen: &FrameBuffer) {
    for (i, px) in buffer.iter_mut().enumerate().take(w * h) {
        let x = (i % w) * SCREEN_WIDTH / w;
        let y = (i / w) * SCREEN_HEIGHT / h;
        *px = if screen.pixel(x, y) { PIXEL_ON } else { PIXEL_OFF };
    }
}
