/// PNG output for rendered framebuffers
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use wirecast_core::{Error, ImageEncoder, Result};

/// Writes 8-bit RGB PNG data to any writer
pub struct PngEncoder<W: Write> {
    writer: W,
}

impl<W: Write> PngEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PngEncoder<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ImageEncoder for PngEncoder<W> {
    fn encode(&mut self, width: u32, height: u32, rgb: &[u8]) -> Result<()> {
        let mut encoder = png::Encoder::new(&mut self.writer, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| Error::Encode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| Error::Encode(e.to_string()))?;
        writer.finish().map_err(|e| Error::Encode(e.to_string()))?;

        self.writer
            .flush()
            .map_err(|e| Error::Encode(e.to_string()))
    }
}
