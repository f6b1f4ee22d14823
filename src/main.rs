//! Font size picker demo: loads an optional JSON config given as the first
//! argument, then drags the slider across a few ticks and logs the results.

use tickbar::{AppConfig, FontSizeApp, HeadlessHost, Pacing};

fn main() {
    if let Err(e) = run() {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let app = FontSizeApp::new(&config);
    log::info!("{}", app.title());
    let mut host = HeadlessHost::new(app, config.surface_width).pacing(Pacing::Realtime);

    let Some(track) = host.app().slider().track() else {
        return Err(format!("surface width {} too narrow", config.surface_width).into());
    };
    let targets = [
        track.left_x(),
        track.right_x(),
        (track.left_x() + track.right_x()) / 2.0,
    ];

    for x in targets {
        host.drag_thumb_to(x, 8);
        log::info!(
            "Dragged to x={:.1}: tick {}, {}",
            x,
            host.app().slider().current_index(),
            host.app().title()
        );
    }
    log::info!("Rendered {} frames", host.frames());
    Ok(())
}
