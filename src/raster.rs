//! Reads the little we need to know about sheet images.

use std::io::Read;

use gridcut::SheetDimensions;

/// Reads the dimensions of a PNG image from its header without decoding any
/// pixel data.
pub fn read_png_dimensions<R: Read>(input: R) -> Result<SheetDimensions, png::DecodingError> {
    let decoder = png::Decoder::new(input);
    let (info, _reader) = decoder.read_info()?;

    Ok(SheetDimensions::new(info.width, info.height))
}

/// Encodes a fully transparent RGBA image, for tests that need a real sheet
/// on disk.
#[cfg(test)]
pub(crate) fn encode_empty_png(size: (u32, u32)) -> Vec<u8> {
    let mut output = Vec::new();

    {
        let mut encoder = png::Encoder::new(&mut output, size.0, size.1);
        encoder.set_color(png::ColorType::RGBA);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(&vec![0; (size.0 * size.1 * 4) as usize])
            .unwrap();
    }

    output
}
