use anyhow::{Context, Result};
use potential_field_core::{
    EllipticalObstacle, NavigationStack, PlannerConfig, Trajectory, point,
};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;
use tracing_subscriber::EnvFilter;

// 300 frames at 50 ms play back in 15 seconds
const FRAME_INTERVAL: Duration = Duration::from_millis(50);
const BOUNDARY_SAMPLES: usize = 400;
const BASELINE_SAMPLES: usize = 200;

/// Print the trajectory one frame per tick, the way an animation would draw it
async fn play_back(trajectory: &Trajectory) {
    let mut ticker = interval(FRAME_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut walked = 0.0;
    for frame in trajectory.frames() {
        ticker.tick().await;
        if let [.., prev, last] = frame.path {
            walked += (last - prev).norm();
        }
        println!(
            "frame {:>3}: robot=({:>8.4}, {:>8.4}) path_points={:>3} walked={:.3}",
            frame.index,
            frame.current.x,
            frame.current.y,
            frame.path.len(),
            walked
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Initializing potential field demo...");

    let obstacle = EllipticalObstacle::new(3.0, 2.0).context("building obstacle")?;
    let start = point(-7.0, -7.0);
    let goal = point(7.0, 7.0);

    // Potential field parameters
    let mut params = HashMap::new();
    params.insert("k_attr".to_string(), 1.0);
    params.insert("k_rep".to_string(), 10.0);
    params.insert("d0".to_string(), 1.5);
    params.insert("dt".to_string(), 0.05);
    params.insert("steps".to_string(), 300.0);

    let mut config = PlannerConfig::default();
    config.configure(&params).context("configuring planner")?;

    let stack = NavigationStack::new(obstacle, config, BASELINE_SAMPLES)?;

    let boundary = obstacle.boundary(BOUNDARY_SAMPLES);
    info!(
        a = obstacle.a(),
        b = obstacle.b(),
        boundary_points = boundary.len(),
        "obstacle ready"
    );

    let result = stack
        .compare(start, goal)
        .context("planning from start to goal")?;

    match result.baseline_collisions.first_collision() {
        Some(index) => {
            let hit = result.baseline[index];
            info!(
                index,
                x = hit.x,
                y = hit.y,
                samples_inside = result.baseline_collisions.collision_count(),
                "straight line collides with obstacle"
            );
        }
        None => info!("straight line is collision free"),
    }

    let end = result.field.end();
    info!(
        x = end.x,
        y = end.y,
        distance_to_goal = result.field.distance_to(&goal),
        path_length = result.field.path_length(),
        min_value = result.field_min_value,
        samples_inside = result.field_collisions.collision_count(),
        "potential field result"
    );

    play_back(&result.field).await;

    info!("Demo finished");
    Ok(())
}
