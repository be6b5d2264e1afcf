use std::time::Duration;

use deck_demo::{run_session, sample_profiles, WallClockPump};
use swipedeck_runtime_std::StdRuntime;
use swipedeck_ui::FixedViewport;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== SwipeDeck Demo ===");
    println!("Replays a scripted session against a 400px wide viewport:");
    println!("  - a right swipe, a short drag that springs back");
    println!("  - a left swipe from raw pointer events");
    println!("  - a programmatic swipe, then swipes until the deck is empty");
    println!();

    let runtime = StdRuntime::new();
    let mut pump = WallClockPump::new(runtime.clone(), Duration::from_millis(16));
    let summary = run_session(
        sample_profiles(),
        FixedViewport(400.0),
        runtime.runtime_handle(),
        &mut pump,
    )?;

    println!();
    println!("Liked:  {}", summary.liked.join(", "));
    println!("Passed: {}", summary.passed.join(", "));
    println!("Frames: {}", summary.frames);
    Ok(())
}
