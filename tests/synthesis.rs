use fxhash::FxHashSet;

use resynth::image::Image;
use resynth::{Params, Synthesizer};

/// Collect the distinct pixels of an image for membership checks.
fn pixel_set(image: &Image) -> FxHashSet<Vec<u8>> {
    image
        .as_bytes()
        .chunks_exact(image.depth())
        .map(<[u8]>::to_vec)
        .collect()
}

fn run_synthesis(corpus: Image, width: u32, height: u32, params: &Params) -> Image {
    let mut synthesizer = Synthesizer::new(corpus, width, height).unwrap();
    synthesizer.run(params).unwrap();
    synthesizer.into_data()
}

#[test]
fn four_color_corpus_output_stays_in_palette() {
    let corpus = Image::from_pixels(
        2,
        2,
        3,
        vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0],
    )
    .unwrap();
    let palette = pixel_set(&corpus);

    let mut params = Params::new();
    params.set_seed(1);
    params.set_neighbors(1);
    params.set_tries(4);
    params.set_magic(0);

    let output = run_synthesis(corpus, 4, 4, &params);
    assert!(output
        .as_bytes()
        .chunks_exact(3)
        .all(|pixel| palette.contains(pixel)));
}

#[test]
fn solid_corpus_gives_solid_output() {
    let corpus = Image::from_pixels(16, 16, 3, vec![128; 16 * 16 * 3]).unwrap();

    let mut params = Params::new();
    params.set_seed(77);

    let output = run_synthesis(corpus, 16, 16, &params);
    assert!(output.as_bytes().iter().all(|&b| b == 128));
}

/// Checkerboard corpus pixels: black and white only.
fn checkerboard(width: u32, height: u32) -> Image {
    let mut pixels = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let value = if (x + y) % 2 == 0 { 0 } else { 255 };
            pixels.extend([value; 3]);
        }
    }
    Image::from_pixels(width, height, 3, pixels).unwrap()
}

#[test]
fn tiled_checkerboard_output_is_binary() {
    let mut params = Params::new();
    params.set_seed(42);
    params.set_h_tile(true);
    params.set_v_tile(true);

    let output = run_synthesis(checkerboard(4, 4), 8, 8, &params);
    assert!(output
        .as_bytes()
        .chunks_exact(3)
        .all(|pixel| pixel == [0, 0, 0] || pixel == [255, 255, 255]));
}

#[test]
fn identical_seeds_give_identical_output() {
    let mut params = Params::new();
    params.set_seed(42);
    params.set_h_tile(true);
    params.set_v_tile(true);

    let first = run_synthesis(checkerboard(4, 4), 8, 8, &params);
    let second = run_synthesis(checkerboard(4, 4), 8, 8, &params);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn empty_corpus_leaves_data_untouched() {
    let corpus = Image::from_pixels(0, 0, 3, Vec::new()).unwrap();
    let mut synthesizer = Synthesizer::new(corpus, 4, 4).unwrap();

    let mut params = Params::new();
    params.set_seed(6);

    assert!(synthesizer.run(&params).is_err());
    assert!(synthesizer.data().as_bytes().iter().all(|&b| b == 0));
}

/// Deterministic stand-in for a photograph: smooth gradients with a
/// diagonal highlight.
fn photo(width: u32, height: u32) -> Image {
    let mut pixels = Vec::new();
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 8 % 256) as u8);
            pixels.push((y * 8 % 256) as u8);
            pixels.push(((x + y) * 4 % 256) as u8);
        }
    }
    Image::from_pixels(width, height, 3, pixels).unwrap()
}

#[test]
fn inheritance_only_output_is_a_rearrangement() {
    let corpus = photo(32, 32);
    let palette = pixel_set(&corpus);

    let mut params = Params::new();
    params.set_seed(9);
    params.set_magic(0);
    params.set_tries(0);
    params.set_neighbors(29);

    let output = run_synthesis(corpus, 32, 32, &params);
    assert!(output
        .as_bytes()
        .chunks_exact(3)
        .all(|pixel| palette.contains(pixel)));
}

#[test]
fn probes_only_output_is_a_rearrangement() {
    let corpus = photo(16, 16);
    let palette = pixel_set(&corpus);

    let mut params = Params::new();
    params.set_seed(13);
    params.set_neighbors(0);
    params.set_tries(8);

    let output = run_synthesis(corpus, 16, 16, &params);
    assert!(output
        .as_bytes()
        .chunks_exact(3)
        .all(|pixel| palette.contains(pixel)));
}

#[test]
fn single_pixel_corpus_floods_the_output() {
    let corpus = Image::from_pixels(1, 1, 4, vec![1, 2, 3, 4]).unwrap();

    let mut params = Params::new();
    params.set_seed(21);

    let output = run_synthesis(corpus, 5, 7, &params);
    assert!(output
        .as_bytes()
        .chunks_exact(4)
        .all(|pixel| pixel == [1, 2, 3, 4]));
}

#[test]
fn polishing_keeps_output_deterministic() {
    let corpus = photo(12, 12);

    let mut params = Params::new();
    params.set_seed(1234);
    params.set_magic(255);

    let first = run_synthesis(corpus.clone(), 10, 10, &params);
    let second = run_synthesis(corpus, 10, 10, &params);
    assert_eq!(first.as_bytes(), second.as_bytes());
}
