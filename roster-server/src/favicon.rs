use rand::Rng;

pub const FAVICON_WIDTH: u32 = 16;
pub const FAVICON_HEIGHT: u32 = 16;

/// Generate a PNG where every pixel is an independently random opaque color.
pub fn generate_favicon(width: u32, height: u32) -> Result<Vec<u8>, png::EncodingError> {
    let mut rng = rand::thread_rng();

    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        pixels.push(rng.gen::<u8>()); // R
        pixels.push(rng.gen::<u8>()); // G
        pixels.push(rng.gen::<u8>()); // B
        pixels.push(u8::MAX); // opaque
    }

    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favicon_dimensions_and_format() {
        let bytes = generate_favicon(FAVICON_WIDTH, FAVICON_HEIGHT).unwrap();

        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let reader = decoder.read_info().expect("valid png");
        let info = reader.info();

        assert_eq!(info.width, FAVICON_WIDTH);
        assert_eq!(info.height, FAVICON_HEIGHT);
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
    }

    #[test]
    fn test_pixels_are_opaque() {
        let bytes = generate_favicon(FAVICON_WIDTH, FAVICON_HEIGHT).unwrap();

        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf).unwrap();

        for pixel in buf[..frame.buffer_size()].chunks(4) {
            assert_eq!(pixel[3], u8::MAX);
        }
    }
}
