use std::io::Write;
use std::io::stdout;
use std::time::Duration;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use toruslife::builder::GridBuilder;
use toruslife::camera::Camera;
use toruslife::camera::draw_field;
use toruslife::events::AppEvent;
use toruslife::events::EngineEvent;
use toruslife::events::Event;
use toruslife::field::Field;
use toruslife::io::convert_event;

/// Settings for the terminal front end.
///
/// The automaton core only ever sees the grid dimensions; everything else
/// here belongs to rendering and pacing.
struct Config {
    width: usize,
    height: usize,

    /// Advance the simulation once every this many frames
    step_every: u32,

    show_outline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 120,
            height: 80,
            step_every: 5,
            show_outline: false,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(
        stdout(),
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All)
    )
    .context("Failed to set up the terminal")?;

    let res = run(&config);

    execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)
        .context("Failed to restore the terminal")?;
    terminal::disable_raw_mode().context("Failed to disable raw mode")?;

    res
}

fn run(config: &Config) -> anyhow::Result<()> {
    let mut rng = StdRng::from_entropy();

    let mut builder = GridBuilder::new(config.width, config.height);
    builder.fill_random(&mut rng);

    let mut field = Field::new(builder.grid());
    let mut cam = Camera::new(config.width, config.height);

    info!(
        width = config.width,
        height = config.height,
        "starting simulation"
    );

    let mut show_outline = config.show_outline;
    let mut paused = false;
    let mut frame: u32 = 0;

    loop {
        while event::poll(Duration::ZERO)? {
            let Some(ev) = convert_event(event::read()?) else {
                continue;
            };

            match ev {
                Event::AppEvent(AppEvent::Exit) => return Ok(()),
                Event::AppEvent(AppEvent::TogglePause) => paused = !paused,
                Event::AppEvent(AppEvent::ToggleOutline) => show_outline = !show_outline,

                Event::EngineEvent(EngineEvent::Advance(n)) => {
                    for _ in 0..n {
                        field.step();
                    }
                }
                Event::EngineEvent(EngineEvent::Reseed) => {
                    builder.clear();
                    builder.fill_random(&mut rng);
                    field = Field::new(builder.grid());

                    info!("reseeded from a fresh random grid");
                }
            }
        }

        if !paused && frame % config.step_every == 0 {
            field.step();
        }

        cam.reset();
        draw_field(&mut cam, &field);

        if show_outline {
            cam.draw_outline();
        }

        let mut out = stdout();
        queue!(out, cursor::MoveTo(0, 0))?;

        // Raw mode needs explicit carriage returns, so print per line.
        for line in cam.render().lines() {
            queue!(out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        out.flush()?;

        frame = frame.wrapping_add(1);

        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }
}
