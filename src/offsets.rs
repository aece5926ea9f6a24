//! Neighborhood offset list, sorted by distance.
//!
//! Offsets are scanned in order of increasing squared distance so the
//! closest already-assigned pixels become context first and the neighbor
//! cap drops only the least informative candidates.
use crate::error::SynthError;
use crate::image::Image;
use crate::Coord;

/// Build every in-range `(dx, dy)` displacement for the corpus/data pair,
/// sorted ascending by `dx*dx + dy*dy`. The zero offset sorts first; ties
/// keep their row-major construction order.
pub(crate) fn build_offset_list(corpus: &Image, data: &Image) -> Result<Vec<Coord>, SynthError> {
    let width = corpus.width().min(data.width());
    let height = corpus.height().min(data.height());
    let width = i32::try_from(width).or(Err(SynthError::InvalidImageDimension))?;
    let height = i32::try_from(height).or(Err(SynthError::InvalidImageDimension))?;

    let count = (i64::from(width) * 2 - 1) * (i64::from(height) * 2 - 1);
    let count = usize::try_from(count).or(Err("Offset list too large"))?;

    let mut offsets = Vec::new();
    offsets.try_reserve_exact(count)?;
    for y in (1 - height)..height {
        for x in (1 - width)..width {
            offsets.push(Coord { x, y });
        }
    }

    offsets.sort_by_key(|o| i64::from(o.x).pow(2) + i64::from(o.y).pow(2));

    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::build_offset_list;
    use crate::image::Image;
    use crate::Coord;

    #[test]
    fn zero_offset_first() {
        let corpus = Image::new(4, 3, 1).unwrap();
        let data = Image::new(5, 5, 1).unwrap();
        let offsets = build_offset_list(&corpus, &data).unwrap();
        assert_eq!(offsets[0], Coord { x: 0, y: 0 });
    }

    #[test]
    fn covers_minimum_rectangle() {
        let corpus = Image::new(4, 3, 1).unwrap();
        let data = Image::new(5, 5, 1).unwrap();
        let offsets = build_offset_list(&corpus, &data).unwrap();
        // (2 * 4 - 1) * (2 * 3 - 1)
        assert_eq!(offsets.len(), 35);
        assert!(offsets
            .iter()
            .all(|o| (-3..=3).contains(&o.x) && (-2..=2).contains(&o.y)));
    }

    #[test]
    fn sorted_by_squared_distance() {
        let corpus = Image::new(8, 8, 1).unwrap();
        let data = Image::new(8, 8, 1).unwrap();
        let offsets = build_offset_list(&corpus, &data).unwrap();
        let keys: Vec<i64> = offsets
            .iter()
            .map(|o| i64::from(o.x).pow(2) + i64::from(o.y).pow(2))
            .collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn single_pixel_rectangle() {
        let corpus = Image::new(1, 1, 1).unwrap();
        let data = Image::new(9, 9, 1).unwrap();
        let offsets = build_offset_list(&corpus, &data).unwrap();
        assert_eq!(offsets, vec![Coord { x: 0, y: 0 }]);
    }
}
