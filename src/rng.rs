use std::fmt;
use std::sync::{Mutex, OnceLock};

use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Largest value a raw draw can take. Raw draws are nonnegative 31-bit
/// integers, so they fit every integral dtype wider than 16 bits.
pub const RAW_DRAW_MAX: i32 = i32::MAX;

/// Carrier of pseudorandom generator state. Every draw advances the state.
///
/// A `RandomState` built with [`RandomState::new`] replays the same sequence
/// for the same seed. Sampling entry points that are handed no state fall back
/// to a process-wide instance, which makes their output depend on global call
/// order; callers needing reproducibility must thread an explicit state.
pub struct RandomState {
    rng: StdRng,
}

impl RandomState {
    /// Create a state that deterministically replays from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a state seeded from the operating system. Not reproducible.
    pub fn from_os_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// One raw draw: an integer in `[0, RAW_DRAW_MAX]`.
    pub fn raw_draw(&mut self) -> i32 {
        (self.rng.next_u32() >> 1) as i32
    }

    /// `count` independent raw draws, without any bounding or rejection step.
    pub fn raw_draws(&mut self, count: usize) -> Vec<i32> {
        (0..count).map(|_| self.raw_draw()).collect()
    }

    /// One draw from the standard uniform distribution, in `[0, 1)`.
    ///
    /// A raw draw divided by `RAW_DRAW_MAX + 1`, so exactly 1.0 is never
    /// produced while exactly 0.0 can be.
    pub fn uniform_f64(&mut self) -> f64 {
        self.raw_draw() as f64 / (RAW_DRAW_MAX as f64 + 1.0)
    }

    /// A uniform draw guaranteed to be strictly positive.
    ///
    /// Box-Muller takes `ln` of this value, so a zero draw is redrawn locally
    /// instead of propagating a non-finite result.
    pub(crate) fn uniform_nonzero_f64(&mut self) -> f64 {
        loop {
            let u = self.uniform_f64();
            if u > 0.0 {
                return u;
            }
        }
    }

    /// One draw from a normal distribution via the Box-Muller transform.
    ///
    /// Each call consumes two fresh uniform draws; no spare value is cached
    /// across calls, so output depends only on the state's draw sequence.
    pub fn normal_f64(&mut self, mean: f64, stddev: f64) -> f64 {
        let u1 = self.uniform_nonzero_f64();
        let u2 = self.uniform_f64();
        box_muller(u1, u2) * stddev + mean
    }
}

impl fmt::Debug for RandomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomState").finish_non_exhaustive()
    }
}

/// The Box-Muller transform: maps two uniform draws in (0, 1] x [0, 1) to one
/// standard normal deviate.
pub(crate) fn box_muller(u1: f64, u2: f64) -> f64 {
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

static GLOBAL: OnceLock<Mutex<RandomState>> = OnceLock::new();

/// Run `f` against `state`, or against the process-wide state when `None`.
///
/// The global instance is created lazily on first use and serialized behind a
/// mutex; the lock is held for the whole fill so one construction sees a
/// contiguous draw sequence.
pub(crate) fn with_state<R>(
    state: Option<&mut RandomState>,
    f: impl FnOnce(&mut RandomState) -> R,
) -> R {
    match state {
        Some(state) => f(state),
        None => {
            let global = GLOBAL.get_or_init(|| Mutex::new(RandomState::from_os_entropy()));
            let mut guard = global.lock().expect("global random state poisoned");
            f(&mut guard)
        }
    }
}
