//! Visit plan: shuffled output order plus the polishing tail.
use crate::error::SynthError;
use crate::image::Image;
use crate::Coord;

use rand::Rng;
use rand_pcg::Pcg32;

/// Build the ordered list of output positions for one run.
///
/// The first `area` entries are a shuffled enumeration of every data coord.
/// With `magic > 0` a polishing tail follows: prefixes of the shuffled
/// order whose lengths decay by `magic / 256` per step. The synthesis loop
/// walks the plan in reverse, so the tail is synthesized first and the
/// earliest-shuffled pixels are revisited with full context.
pub(crate) fn build_visit_plan(
    data: &Image,
    magic: u8,
    rng: &mut Pcg32,
) -> Result<Vec<Coord>, SynthError> {
    let area = usize::try_from(data.area()).or(Err("Data area too large"))?;

    let mut plan = Vec::new();
    plan.try_reserve_exact(area)?;
    let width = i32::try_from(data.width()).or(Err(SynthError::InvalidImageDimension))?;
    let height = i32::try_from(data.height()).or(Err(SynthError::InvalidImageDimension))?;
    for y in 0..height {
        for x in 0..width {
            plan.push(Coord { x, y });
        }
    }

    // Full-range swap shuffle; the slight bias is intentional and
    // seed-stable.
    for index in 0..area {
        let other = rng.gen_range(0..area);
        plan.swap(index, other);
    }

    if magic > 0 {
        let mut keep = area;
        loop {
            keep = keep.saturating_mul(usize::from(magic)) / 256;
            if keep == 0 {
                break;
            }
            plan.try_reserve(keep)?;
            plan.extend_from_within(0..keep);
        }
    }

    Ok(plan)
}
