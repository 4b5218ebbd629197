//! Timed stand-in for an animation system.
//!
//! Montages "play" for a configured number of seconds. The character driver
//! advances the clock each frame and completes the transitions whose montages
//! have finished.

use std::collections::HashMap;

use loadout_core::{MontagePlayer, MontageRequest, TransitionToken};
use tracing::trace;

#[derive(Clone, Debug)]
struct Playing {
    request: MontageRequest,
    remaining: f32,
}

#[derive(Clone, Debug, Default)]
pub struct TimedMontagePlayer {
    durations: HashMap<String, f32>,
    default_duration: f32,
    playing: Vec<Playing>,
    started: usize,
}

impl TimedMontagePlayer {
    pub fn new(durations: HashMap<String, f32>, default_duration: f32) -> Self {
        Self {
            durations,
            default_duration: default_duration.max(0.0),
            playing: Vec::new(),
            started: 0,
        }
    }

    /// Seconds a montage plays for.
    pub fn duration_of(&self, montage: &str) -> f32 {
        self.durations
            .get(montage)
            .copied()
            .unwrap_or(self.default_duration)
            .max(0.0)
    }

    /// Advances all playing montages by `dt` seconds and returns the tokens of
    /// those that finished, in the order they were started.
    pub fn advance(&mut self, dt: f32) -> Vec<TransitionToken> {
        let dt = dt.max(0.0);
        let mut finished = Vec::new();
        self.playing.retain_mut(|playing| {
            playing.remaining -= dt;
            if playing.remaining <= 0.0 {
                trace!(token = %playing.request.token, montage = %playing.request.montage, "montage finished");
                finished.push(playing.request.token);
                false
            } else {
                true
            }
        });
        finished
    }

    pub fn playing(&self) -> impl Iterator<Item = &MontageRequest> {
        self.playing.iter().map(|playing| &playing.request)
    }

    pub fn is_playing(&self) -> bool {
        !self.playing.is_empty()
    }

    /// Number of montages started since creation.
    pub fn started(&self) -> usize {
        self.started
    }
}

impl MontagePlayer for TimedMontagePlayer {
    fn play(&mut self, request: MontageRequest) {
        let remaining = self.duration_of(request.montage.as_str());
        trace!(token = %request.token, montage = %request.montage, remaining, "montage started");
        self.started += 1;
        self.playing.push(Playing { request, remaining });
    }
}
