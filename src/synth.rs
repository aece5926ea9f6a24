//! The synthesis loop.
//!
//! Output pixels are visited in the reverse of the shuffled plan. Each
//! visit snapshots the closest already-assigned pixels as context, proposes
//! corpus candidates (inherited from neighbor sources, then random probes)
//! and commits the corpus pixel with the lowest accumulated perceptual
//! difference.
use crate::diff::build_diff_table;
use crate::error::SynthError;
use crate::image::Image;
use crate::offsets::build_offset_list;
use crate::params::Params;
use crate::plan::build_visit_plan;
use crate::Coord;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Per-output-pixel bookkeeping.
#[derive(Clone, Copy, Debug, Default)]
struct Status {
    /// The pixel has been assigned during the current run.
    has_value: bool,
    /// The corpus coord committed for this pixel, if any.
    source: Option<Coord>,
}

/// Snapshot of an already-assigned pixel used as matching context.
#[derive(Clone, Copy, Debug, Default)]
struct Neighbor {
    offset: Coord,
    source: Option<Coord>,
    pixel: [u8; 4],
}

/// Texture synthesis state: the corpus, the output buffer and every
/// per-run table the loop needs.
///
/// Construct once per job with [`Synthesizer::new`], then call
/// [`Synthesizer::run`]. The output buffer is mutated in place and stays
/// available through [`Synthesizer::data`] after the run; dropping the
/// state releases everything.
pub struct Synthesizer {
    corpus: Image,
    data: Image,
    status: Vec<Status>,
    tried: Vec<usize>,
    offsets: Vec<Coord>,
    diff_table: Vec<i32>,
    plan: Vec<Coord>,
    neighbors: Vec<Neighbor>,
    rng: Pcg32,
}

impl Synthesizer {
    /// Create a synthesis state for `corpus` with a zeroed output buffer of
    /// `width` by `height` pixels sharing the corpus channel count.
    ///
    /// Empty corpus or output dimensions are accepted here and reported by
    /// [`Synthesizer::run`], which leaves the output untouched.
    pub fn new(corpus: Image, width: u32, height: u32) -> Result<Self, SynthError> {
        let data = Image::new(width, height, corpus.depth())?;

        Ok(Self {
            corpus,
            data,
            status: Vec::new(),
            tried: Vec::new(),
            offsets: Vec::new(),
            diff_table: Vec::new(),
            plan: Vec::new(),
            neighbors: Vec::new(),
            rng: Pcg32::seed_from_u64(0),
        })
    }

    /// The output image.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &Image {
        &self.data
    }

    /// Consume the state and return the output image.
    #[inline]
    #[must_use]
    pub fn into_data(self) -> Image {
        self.data
    }

    /// Run the engine, synthesizing every output pixel.
    pub fn run(&mut self, params: &Params) -> Result<(), SynthError> {
        self.run_with_progress(params, |_, _| true)
    }

    /// Run the engine, reporting `(pixels done, pixels total)` before each
    /// output pixel. Returning `false` from the callback cancels the run;
    /// the output then holds a partial but well-formed image in which every
    /// already-visited position has been assigned.
    pub fn run_with_progress<F>(
        &mut self,
        params: &Params,
        mut keep_going: F,
    ) -> Result<(), SynthError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        if self.corpus.area() == 0 {
            return Err(SynthError::EmptyCorpus);
        }
        if self.data.area() == 0 {
            return Err(SynthError::EmptyData);
        }

        self.prepare(params)?;

        // Reverse plan order: the polishing tail runs first and the
        // shuffled prefix is committed last, with the freshest context.
        let total = self.plan.len();
        for iteration in 0..total {
            if !keep_going(iteration, total) {
                return Err(SynthError::Cancelled);
            }
            let position = self.plan[total - 1 - iteration];
            self.synthesize_pixel(position, iteration, params)?;
        }

        Ok(())
    }

    /// Rebuild every per-run table from the parameters.
    fn prepare(&mut self, params: &Params) -> Result<(), SynthError> {
        self.rng = Pcg32::seed_from_u64(params.seed());
        self.diff_table = build_diff_table(params.autism())?;
        self.offsets = build_offset_list(&self.corpus, &self.data)?;
        self.plan = build_visit_plan(&self.data, params.magic(), &mut self.rng)?;

        let data_area = usize::try_from(self.data.area()).or(Err("Data area too large"))?;
        self.status.clear();
        self.status.try_reserve_exact(data_area)?;
        self.status.extend((0..data_area).map(|_| Status::default()));

        let corpus_area = usize::try_from(self.corpus.area()).or(Err("Corpus area too large"))?;
        self.tried.clear();
        self.tried.try_reserve_exact(corpus_area)?;
        self.tried.extend((0..corpus_area).map(|_| usize::MAX));

        self.neighbors.clear();
        self.neighbors
            .try_reserve_exact(params.neighbors().min(self.offsets.len()))?;

        Ok(())
    }

    /// Synthesize one output position: collect context, score candidates,
    /// commit the best corpus pixel.
    fn synthesize_pixel(
        &mut self,
        position: Coord,
        iteration: usize,
        params: &Params,
    ) -> Result<(), SynthError> {
        let index = self
            .data
            .offset_of(i64::from(position.x), i64::from(position.y))
            .ok_or("Planned position out of bounds")?;
        self.status[index].has_value = true;
        self.collect_neighbors(position, params);

        let mut best = i32::MAX;
        let mut best_point = None;

        // Candidates inherited from neighbor sources: the corpus coord that
        // would continue each neighbor's patch through this position. Slot
        // 0 is the position itself, whose previous source re-proposes
        // itself during polishing.
        for slot in 0..self.neighbors.len() {
            let neighbor = self.neighbors[slot];
            let source = match neighbor.source {
                Some(source) => source,
                None => continue,
            };
            let x = i64::from(source.x) - i64::from(neighbor.offset.x);
            let y = i64::from(source.y) - i64::from(neighbor.offset.y);
            let tried_index = match self.corpus.offset_of(x, y) {
                Some(tried_index) => tried_index,
                None => continue,
            };
            if self.tried[tried_index] == iteration {
                continue;
            }
            self.try_point(x, y, &mut best, &mut best_point);
            self.tried[tried_index] = iteration;
            if best == 0 {
                break;
            }
        }

        // Random probes are cheap and deliberately skip the tried table.
        for _ in 0..params.tries() {
            if best == 0 {
                break;
            }
            let x = self.rng.gen_range(0..self.corpus.width_i64());
            let y = self.rng.gen_range(0..self.corpus.height_i64());
            self.try_point(x, y, &mut best, &mut best_point);
        }

        // With no candidate proposed at all (no probes and nothing
        // inherited) the corpus origin stands in, so the output stays a
        // rearrangement of corpus samples.
        let (x, y) = best_point.unwrap_or((0, 0));
        let source = self
            .corpus
            .get_pixel(x, y)
            .ok_or("Committed source out of bounds")?;
        self.data
            .get_pixel_mut(i64::from(position.x), i64::from(position.y))
            .ok_or("Planned position out of bounds")?
            .copy_from_slice(source);
        self.status[index].source = Some(Coord {
            x: i32::try_from(x).or(Err("Committed source x out of range"))?,
            y: i32::try_from(y).or(Err("Committed source y out of range"))?,
        });

        Ok(())
    }

    /// Scan the sorted offset list and snapshot up to the configured number
    /// of already-assigned pixels around `position`. The first entry is
    /// always the position itself since its `has_value` was just set.
    fn collect_neighbors(&mut self, position: Coord, params: &Params) {
        self.neighbors.clear();
        let cap = params.neighbors();
        let width = self.data.width_i64();
        let height = self.data.height_i64();
        let depth = self.data.depth();

        for &offset in &self.offsets {
            if self.neighbors.len() >= cap {
                break;
            }
            let x = i64::from(position.x) + i64::from(offset.x);
            let y = i64::from(position.y) + i64::from(offset.y);
            let (x, y) = match wrap_or_clip(width, height, params.h_tile(), params.v_tile(), x, y) {
                Some(point) => point,
                None => continue,
            };
            let status = match self.data.offset_of(x, y) {
                Some(slot) => self.status[slot],
                None => continue,
            };
            if !status.has_value {
                continue;
            }
            let mut pixel = [0_u8; 4];
            if let Some(channels) = self.data.get_pixel(x, y) {
                pixel[..depth].copy_from_slice(channels);
            }
            self.neighbors.push(Neighbor {
                offset,
                source: status.source,
                pixel,
            });
        }
    }

    /// Score a corpus candidate against the collected context and keep it
    /// if it beats the current best.
    ///
    /// Neighbors are scored closest-first; the accumulation returns as soon
    /// as it can no longer win. Context that falls outside the corpus costs
    /// the maximum penalty on every channel.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    fn try_point(&self, x: i64, y: i64, best: &mut i32, best_point: &mut Option<(i64, i64)>) {
        let depth = self.corpus.depth();
        let edge_penalty = self.diff_table[0] * depth as i32;

        let mut sum = 0_i32;
        for neighbor in self.neighbors.iter().skip(1) {
            let probe_x = x + i64::from(neighbor.offset.x);
            let probe_y = y + i64::from(neighbor.offset.y);
            match self.corpus.get_pixel(probe_x, probe_y) {
                Some(channels) => {
                    for (channel, &value) in channels.iter().enumerate() {
                        let delta = 256 + i32::from(neighbor.pixel[channel]) - i32::from(value);
                        sum += self.diff_table[delta as usize];
                    }
                }
                None => sum += edge_penalty,
            }
            if sum >= *best {
                return;
            }
        }

        *best = sum;
        *best_point = Some((x, y));
    }
}

/// Map a data-space point into range, wrapping tileable axes by the image
/// extent (as often as the displacement requires) and rejecting the point
/// when a non-tileable axis falls outside.
fn wrap_or_clip(
    width: i64,
    height: i64,
    h_tile: bool,
    v_tile: bool,
    x: i64,
    y: i64,
) -> Option<(i64, i64)> {
    Some((wrap_axis(x, width, h_tile)?, wrap_axis(y, height, v_tile)?))
}

fn wrap_axis(value: i64, extent: i64, tile: bool) -> Option<i64> {
    if (0..extent).contains(&value) {
        Some(value)
    } else if tile {
        Some(value.rem_euclid(extent))
    } else {
        None
    }
}

/// Synthesize an output image directly from corpus component bytes.
///
/// `depth` is the channel count shared by the corpus and the output. The
/// corpus buffer length must equal `corpus_width * corpus_height * depth`.
///
/// ```
/// use resynth::{synthesize_from_bytes, Params};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let corpus = [10u8, 200, 10, 200];
/// let mut params = Params::new();
/// params.set_seed(7);
/// let output = synthesize_from_bytes(&params, 1, 2, 2, 8, 8, &corpus)?;
/// assert_eq!(output.as_bytes().len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn synthesize_from_bytes(
    params: &Params,
    depth: usize,
    corpus_width: u32,
    corpus_height: u32,
    width: u32,
    height: u32,
    corpus: &[u8],
) -> Result<Image, SynthError> {
    let mut pixels = Vec::new();
    pixels.try_reserve_exact(corpus.len())?;
    pixels.extend(corpus.iter().copied());

    let corpus = Image::from_pixels(corpus_width, corpus_height, depth, pixels)?;
    let mut synthesizer = Synthesizer::new(corpus, width, height)?;
    synthesizer.run(params)?;

    Ok(synthesizer.into_data())
}
