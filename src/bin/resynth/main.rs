mod args;
mod utils;

use crate::args::Opt;
use crate::utils::{load_image, output_filename, save_image};

use clap::Parser;

use resynth::{output_extent, Params, Synthesizer};

fn main() {
    match try_main() {
        Ok(0) => {}
        Ok(status) => std::process::exit(status),
        Err(e) => {
            eprintln!("resynth: {}", e);
            std::process::exit(1);
        }
    }
}

fn try_main() -> Result<i32, Box<dyn std::error::Error>> {
    let opt = Opt::parse();

    let mut params = Params::new();
    params.set_autism(opt.autism);
    params.set_neighbors(opt.neighbors);
    params.set_tries(opt.tries);
    params.set_magic(opt.magic);
    params.set_h_tile(opt.h_tile);
    params.set_v_tile(opt.v_tile);
    if let Some(seed) = opt.seed {
        params.set_seed(seed);
    }

    // One exit-code decrement per output that could not be written; the
    // remaining inputs are still processed.
    let mut status = 0_i32;
    for input in &opt.images {
        let corpus = load_image(input)?;
        let (width, height) = output_extent(opt.scale, corpus.width(), corpus.height());

        let mut synthesizer = Synthesizer::new(corpus, width, height)?;
        synthesizer.run(&params)?;

        let output = output_filename(input)?;
        if let Err(err) = save_image(&output, synthesizer.data()) {
            eprintln!("resynth: {}", err);
            status -= 1;
        }
    }

    Ok(status)
}
