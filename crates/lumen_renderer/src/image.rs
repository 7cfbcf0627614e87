//! Pixel buffer and P3 (plain PPM) encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lumen_core::{Colour, Rgb, CHANNEL_MAX};

use crate::error::{RenderError, RenderResult};

/// Maximum channel value written in the P3 header.
pub const OUTPUT_MAXVAL: u32 = CHANNEL_MAX as u32;

/// Image buffer of output-scaled colours, row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Colour::BLACK.to_output(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> RenderResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(RenderError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> RenderResult<Rgb> {
        let i = self.index(x, y)?;
        Ok(self.pixels[i])
    }

    /// Overwrite the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Rgb) -> RenderResult<()> {
        let i = self.index(x, y)?;
        self.pixels[i] = colour;
        Ok(())
    }

    /// Write the buffer in P3 format.
    ///
    /// The header is `P3\n{W} {H}\n {maxval}\n` (note the space before the
    /// maxval). Each row is written as `r g b ` triples followed by a newline.
    pub fn encode<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "P3\n{} {}\n {}\n", self.width, self.height, OUTPUT_MAXVAL)?;

        if self.width > 0 {
            for row in self.pixels.chunks(self.width as usize) {
                for pixel in row {
                    write!(writer, "{} ", pixel)?;
                }
                writeln!(writer)?;
            }
        }

        writer.flush()
    }

    /// Encode to an in-memory string.
    pub fn to_ppm_string(&self) -> String {
        let mut bytes = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.encode(&mut bytes);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Save the buffer to `path`, creating or truncating the file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.encode(BufWriter::new(file))?;

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Where the rendered image is written: `<directory>/<name>.<extension>`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub name: String,
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            name: "def".to_string(),
            extension: "ppm".to_string(),
        }
    }
}

impl OutputConfig {
    /// Output named `name` in the current directory.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the output directory.
    pub fn in_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Full output path.
    pub fn path(&self) -> PathBuf {
        self.directory.join(format!("{}.{}", self.name, self.extension))
    }
}
