use clap::Parser;

#[derive(Debug, Parser)]
#[clap(version, about, long_about = None)]
pub struct Opt {
    /// Sensitivity of the perceptual difference curve, from 0.0 to 1.0.
    #[clap(short = 'a', long, default_value_t = 0.125)]
    pub autism: f64,

    /// Cap on context neighbors per synthesized pixel.
    #[clap(short = 'N', long, default_value_t = 29)]
    pub neighbors: usize,

    /// Random corpus probes per synthesized pixel.
    #[clap(short = 'M', long, default_value_t = 192)]
    pub tries: usize,

    /// Polishing decay; 0 disables the polishing pass.
    #[clap(short = 'm', long, default_value_t = 192)]
    pub magic: u8,

    /// Output scale: positive multiplies the corpus size, negative sets an
    /// absolute square edge length, 0 keeps the 256x256 default.
    #[clap(short = 's', long, default_value_t = 0, allow_hyphen_values = true)]
    pub scale: i32,

    /// Seed for the random number generator, defaults to the current time.
    #[clap(short = 'S', long)]
    pub seed: Option<u64>,

    /// Make the output seamless when repeated horizontally.
    #[clap(long)]
    pub h_tile: bool,

    /// Make the output seamless when repeated vertically.
    #[clap(long)]
    pub v_tile: bool,

    /// Input images; each output is written next to its input as
    /// `{name}.resynth.png`.
    #[clap(parse(from_os_str), required = true)]
    pub images: Vec<std::path::PathBuf>,
}
