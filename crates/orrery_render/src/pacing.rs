use std::time::{Duration, Instant};

use bevy::prelude::*;

use orrery_sim::SystemState;

/// Frame pacing to the configured target fps.
///
/// Vsync is off, so the end-of-frame sleep here is the loop's single blocking
/// point. The deadline advances by one frame budget per frame; when the frame
/// overran, it resets to now + budget instead of trying to catch up.
#[derive(Resource)]
pub struct FramePacer {
    budget: Duration,
    deadline: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        let budget = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        Self {
            budget,
            deadline: Instant::now() + budget,
        }
    }
}

pub fn init_frame_pacer(mut commands: Commands, system: Res<SystemState>) {
    commands.insert_resource(FramePacer::new(system.window.fps));
}

pub fn pace_frames(mut pacer: ResMut<FramePacer>) {
    let budget = pacer.budget;
    let now = Instant::now();
    if now < pacer.deadline {
        std::thread::sleep(pacer.deadline - now);
        pacer.deadline += budget;
    } else {
        pacer.deadline = now + budget;
    }
}
