use pattern_lock::app::UnlockScreen;
use pattern_lock::{Point, Rect};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let screen = UnlockScreen::new();
    let mut lock = UnlockScreen::build_lock(&screen, Rect::new(0.0, 0.0, 230.0, 230.0));

    // Replay a swipe across the top-left cells: 0 -> 1 -> 4.
    lock.handle_pointer_down(Point::new(45.0, 45.0));
    lock.handle_pointer_move(Point::new(115.0, 45.0));
    lock.handle_pointer_move(Point::new(115.0, 115.0));

    // Capture the frame mid-gesture, while the track is still drawn.
    let frame = lock.render()?;
    frame.save_png("pattern-lock.png")?;
    info!("wrote pattern-lock.png");

    lock.handle_pointer_up();
    if let Some(pattern) = screen.last_pattern() {
        info!(?pattern, "demo gesture finished");
    }

    Ok(())
}
