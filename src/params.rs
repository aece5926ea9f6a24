//! Run parameters and their documented defaults.

/// Upper bound on context neighbors examined per synthesized pixel.
pub const MAX_NEIGHBORS: usize = 1093;

/// Upper bound on random corpus probes per synthesized pixel.
pub const MAX_TRIES: usize = 65536;

/// Tuning parameters for one synthesis run.
///
/// All setters clamp their input to the valid range, so callers can feed
/// untrusted values straight through. The defaults are the historical ones:
/// no tiling, `autism` 32/256, 29 neighbors, 192 tries, `magic` 192, and a
/// seed taken from the current time.
#[derive(Clone, Debug)]
pub struct Params {
    h_tile: bool,
    v_tile: bool,
    autism: f64,
    neighbors: usize,
    tries: usize,
    magic: u8,
    seed: u64,
}

impl Params {
    /// Create a [`Params`] with the default values.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the output wraps horizontally.
    #[inline]
    #[must_use]
    pub fn h_tile(&self) -> bool {
        self.h_tile
    }

    /// Make the output wrap horizontally.
    #[inline]
    pub fn set_h_tile(&mut self, h_tile: bool) {
        self.h_tile = h_tile;
    }

    /// Whether the output wraps vertically.
    #[inline]
    #[must_use]
    pub fn v_tile(&self) -> bool {
        self.v_tile
    }

    /// Make the output wrap vertically.
    #[inline]
    pub fn set_v_tile(&mut self, v_tile: bool) {
        self.v_tile = v_tile;
    }

    /// Sensitivity of the perceptual difference curve.
    #[inline]
    #[must_use]
    pub fn autism(&self) -> f64 {
        self.autism
    }

    /// Set the difference curve sensitivity, clamped to `[0, 1]`.
    #[inline]
    pub fn set_autism(&mut self, autism: f64) {
        self.autism = autism.clamp(0.0, 1.0);
    }

    /// Cap on context neighbors per synthesized pixel.
    #[inline]
    #[must_use]
    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    /// Set the neighbor cap, clamped to [`MAX_NEIGHBORS`].
    #[inline]
    pub fn set_neighbors(&mut self, neighbors: usize) {
        self.neighbors = neighbors.min(MAX_NEIGHBORS);
    }

    /// Random corpus probes per synthesized pixel.
    #[inline]
    #[must_use]
    pub fn tries(&self) -> usize {
        self.tries
    }

    /// Set the probe count, clamped to [`MAX_TRIES`].
    #[inline]
    pub fn set_tries(&mut self, tries: usize) {
        self.tries = tries.min(MAX_TRIES);
    }

    /// Polishing decay; `0` disables the polishing pass.
    #[inline]
    #[must_use]
    pub fn magic(&self) -> u8 {
        self.magic
    }

    /// Set the polishing decay.
    #[inline]
    pub fn set_magic(&mut self, magic: u8) {
        self.magic = magic;
    }

    /// Seed for the run's random number generator.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Set the random seed. Identical seeds and inputs reproduce identical
    /// output.
    #[inline]
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }
}

impl Default for Params {
    fn default() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        Self {
            h_tile: false,
            v_tile: false,
            autism: 32.0 / 256.0,
            neighbors: 29,
            tries: 192,
            magic: 192,
            seed,
        }
    }
}
