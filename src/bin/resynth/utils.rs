use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, DynamicImage, ImageEncoder};

use resynth::image::Image;

// Decode an input image, keeping its channel count for the common 8-bit
// layouts and falling back to RGB for everything else.
pub fn load_image(path: &std::path::Path) -> Result<Image, Box<dyn std::error::Error>> {
    let decoded = image::open(path)?;
    let image = match decoded {
        DynamicImage::ImageLuma8(buffer) => {
            let (width, height) = buffer.dimensions();
            Image::from_pixels(width, height, 1, buffer.into_raw())?
        }
        DynamicImage::ImageLumaA8(buffer) => {
            let (width, height) = buffer.dimensions();
            Image::from_pixels(width, height, 2, buffer.into_raw())?
        }
        DynamicImage::ImageRgb8(buffer) => {
            let (width, height) = buffer.dimensions();
            Image::from_pixels(width, height, 3, buffer.into_raw())?
        }
        DynamicImage::ImageRgba8(buffer) => {
            let (width, height) = buffer.dimensions();
            Image::from_pixels(width, height, 4, buffer.into_raw())?
        }
        other => {
            let buffer = other.into_rgb8();
            let (width, height) = buffer.dimensions();
            Image::from_pixels(width, height, 3, buffer.into_raw())?
        }
    };

    Ok(image)
}

// Output path `{stem}.resynth.png` next to the input.
pub fn output_filename(
    input: &std::path::Path,
) -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    let stem = input
        .file_stem()
        .ok_or("No file stem")?
        .to_str()
        .ok_or("Could not convert file stem to string")?;

    Ok(input.with_file_name(format!("{stem}.resynth.png")))
}

// Saves the synthesized buffer to file as PNG.
pub fn save_image(
    output: &std::path::Path,
    image: &Image,
) -> Result<(), Box<dyn std::error::Error>> {
    let color = match image.depth() {
        1 => ColorType::L8,
        2 => ColorType::La8,
        3 => ColorType::Rgb8,
        _ => ColorType::Rgba8,
    };

    let w = std::io::BufWriter::new(std::fs::File::create(output)?);

    // Sub filter seemed to result in better filesize compared to Adaptive
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, FilterType::Sub);

    // Clean up if file is created but there's a problem writing to it; a
    // failed removal must not mask the encode error.
    if let Err(err) = encoder.write_image(image.as_bytes(), image.width(), image.height(), color) {
        let _ = std::fs::remove_file(output);
        return Err(err.into());
    }

    Ok(())
}
