//! Headless timeline preview
//!
//! Mounts one screen and steps it at a fixed frame rate, recording what each
//! element looks like on every frame.

use athenix_platform::Route;
use athenix_site::{screen_for, ElementSnapshot, Screen, SiteOptions};
use serde::Serialize;
use std::time::Duration;

/// Frame rates are clamped to `1..=MAX_FPS`
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Serialize)]
pub struct Frame {
    pub index: u32,
    pub time_ms: f32,
    pub elements: Vec<ElementSnapshot>,
}

impl Frame {
    /// Elements whose entrance is under way on this frame
    pub fn moving(&self) -> impl Iterator<Item = &ElementSnapshot> {
        self.elements.iter().filter(|e| e.phase == "running")
    }
}

pub struct Preview {
    screen: Box<dyn Screen>,
    frame_ms: f32,
    frame: u32,
}

impl Preview {
    pub fn new(route: Route, options: &SiteOptions, fps: u32) -> Self {
        let mut screen = screen_for(route, options);
        screen.mount();
        Self {
            screen,
            frame_ms: 1000.0 / fps.clamp(1, MAX_FPS) as f32,
            frame: 0,
        }
    }

    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }

    /// Wall-clock pacing for realtime previews; never zero
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f32(self.frame_ms / 1000.0)
    }

    pub fn screen(&self) -> &dyn Screen {
        self.screen.as_ref()
    }

    pub fn time_ms(&self) -> f32 {
        self.frame as f32 * self.frame_ms
    }

    /// The frame before any time has passed
    pub fn initial(&self) -> Frame {
        self.capture()
    }

    pub fn step(&mut self) -> Frame {
        self.screen.tick(self.frame_ms);
        self.frame += 1;
        self.capture()
    }

    /// Run until `duration_ms` has elapsed or every entrance has settled
    pub fn run(&mut self, duration_ms: u32) -> Vec<Frame> {
        let mut frames = vec![self.initial()];
        while self.time_ms() < duration_ms as f32 && !self.screen.entrances_settled() {
            frames.push(self.step());
        }
        frames
    }

    pub fn is_done(&self, duration_ms: u32) -> bool {
        self.time_ms() >= duration_ms as f32 || self.screen.entrances_settled()
    }

    pub fn finish(mut self) {
        self.screen.unmount();
    }

    fn capture(&self) -> Frame {
        Frame {
            index: self.frame,
            time_ms: self.time_ms(),
            elements: self.screen.snapshot(),
        }
    }
}
