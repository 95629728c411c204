use std::path::PathBuf;
use std::process;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};

mod constants;
mod input;
mod loader;
mod navigation;
mod position;
mod slide;

use crate::constants::*;
use crate::input::{InputSource, Keyboard, PointerZones, SwipeGestures};
use crate::loader::{list_deck_images, load_slide_texture};
use crate::navigation::Presentation;
use crate::position::FilePosition;
use crate::slide::Slide;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum PointerVariant {
    /// Navigate with horizontal swipe gestures.
    Swipe,
    /// Navigate by clicking the outer fifths of the window.
    Zones,
}

#[derive(Parser)]
#[command(
    name = "presenter",
    about = "Present a directory of images as a slide deck"
)]
struct Args {
    /// Directory containing the deck, shown in file name order.
    deck: PathBuf,

    /// Pointer input variant to bind (keyboard is always active).
    #[arg(long, value_enum, default_value_t = PointerVariant::Swipe)]
    pointer: PointerVariant,

    /// Shuffle the deck order at load.
    #[arg(long)]
    shuffle: bool,

    /// Start fullscreen instead of windowed.
    #[arg(long)]
    fullscreen: bool,

    /// Where the current position is persisted (default: <deck>/.position).
    #[arg(long)]
    position_file: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut image_paths = list_deck_images(&args.deck)?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }

    let title = format!("presenter - {}", args.deck.display());
    let mut builder = raylib::init();
    builder
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title(&title)
        .vsync()
        .resizable();
    if args.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load the deck ---
    let mut slides: Vec<Slide> = Vec::new();
    for path in &image_paths {
        match load_slide_texture(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("skipping slide: {e:#}"),
        }
    }

    let position_file = args
        .position_file
        .unwrap_or_else(|| args.deck.join(".position"));
    let store = FilePosition::new(position_file);

    let mut presentation = Presentation::new(slides, store);
    if presentation.is_empty() {
        bail!("no displayable images in {}", args.deck.display());
    }
    info!(
        "presenting {} slides from {}",
        presentation.len(),
        args.deck.display()
    );
    presentation.start();

    // Keyboard plus the selected pointer variant
    let mut sources: Vec<Box<dyn InputSource>> = vec![Box::new(Keyboard)];
    match args.pointer {
        PointerVariant::Swipe => sources.push(Box::new(SwipeGestures)),
        PointerVariant::Zones => sources.push(Box::new(PointerZones::new())),
    }

    // --- Main loop ---
    while !rl.window_should_close() {
        for source in sources.iter_mut() {
            let intent = source.poll(&rl);
            presentation.apply(intent);
        }

        let counter = format!(
            "{} / {}",
            presentation.current_index() + 1,
            presentation.len()
        );

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        // At most one slide is visible; draw() checks the marker itself
        for slide in presentation.slides() {
            slide.draw(&mut d);
        }

        let h = d.get_screen_height();
        d.draw_text(
            &counter,
            16,
            h - 16 - COUNTER_FONT_SIZE,
            COUNTER_FONT_SIZE,
            Color::GRAY,
        );
    }

    Ok(())
}
