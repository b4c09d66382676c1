use crate::checksum::CHECKSUM_START;
use crate::header::FieldError;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Padding {
    /// Round up to the next power of two.
    PowerOfTwo,
    /// Only round up to an even length.
    Even,
}

impl Padding {
    pub fn padded_size(self, size: u64) -> Option<u64> {
        match self {
            Padding::PowerOfTwo if size <= 1 => Some(2),
            Padding::PowerOfTwo => size.checked_next_power_of_two(),
            Padding::Even => size.checked_add(size & 1),
        }
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image is too small ({0} bytes after padding)")]
    TooSmall(u64),
    #[error("image is too large ({0} bytes)")]
    TooLarge(u64),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum RomError {
    #[error("Cannot open \"{}\" for reading.", .0.display())]
    OpenForReading(PathBuf, #[source] io::Error),
    #[error("Cannot open \"{}\" for writing.", .0.display())]
    OpenForWriting(PathBuf, #[source] io::Error),
    #[error("Cannot read \"{}\".", .0.display())]
    Read(PathBuf, #[source] io::Error),
    #[error("Cannot write \"{}\".", .0.display())]
    Write(PathBuf, #[source] io::Error),
    #[error("\"{}\" is too small.", .0.display())]
    TooSmall(PathBuf),
    #[error("\"{}\" is too large.", .0.display())]
    TooLarge(PathBuf),
    #[error(transparent)]
    Header(#[from] FieldError),
}

/// A cartridge image padded out and held in memory.
#[derive(Debug)]
pub struct Image {
    data: Vec<u8>,
    original_size: u64,
}

impl Image {
    /// Padded images must be larger than this to have anything to checksum.
    pub const MIN_PADDED_SIZE: u64 = CHECKSUM_START as u64 + 1;

    pub fn read_from<R: Read + Seek>(
        reader: &mut R,
        padding: Padding,
        pad_byte: u8,
    ) -> Result<Image, ImageError> {
        let size = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        let padded_size = padding
            .padded_size(size)
            .ok_or(ImageError::TooLarge(size))?;

        if padded_size < Image::MIN_PADDED_SIZE {
            return Err(ImageError::TooSmall(padded_size));
        }

        let len = usize::try_from(padded_size).map_err(|_| ImageError::TooLarge(padded_size))?;
        let mut data = vec![pad_byte; len];

        // size <= padded_size, which fits in usize
        reader.read_exact(&mut data[..size as usize])?;

        debug!(size, padded_size, pad_byte, ?padding, "loaded image");

        Ok(Image {
            data,
            original_size: size,
        })
    }

    pub fn load(path: &Path, padding: Padding, pad_byte: u8) -> Result<Image, RomError> {
        let mut file =
            File::open(path).map_err(|e| RomError::OpenForReading(path.to_owned(), e))?;

        Image::read_from(&mut file, padding, pad_byte).map_err(|e| match e {
            ImageError::TooSmall(_) => RomError::TooSmall(path.to_owned()),
            ImageError::TooLarge(_) => RomError::TooLarge(path.to_owned()),
            ImageError::Io(e) => RomError::Read(path.to_owned(), e),
        })
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }

    pub fn save(&self, path: &Path) -> Result<(), RomError> {
        let mut file =
            File::create(path).map_err(|e| RomError::OpenForWriting(path.to_owned(), e))?;

        self.write_to(&mut file)
            .and_then(|_| file.sync_all())
            .map_err(|e| RomError::Write(path.to_owned(), e))?;

        debug!(path = %path.display(), bytes = self.data.len(), "wrote image");

        Ok(())
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data[..]
    }

    pub fn original_size(&self) -> u64 {
        self.original_size
    }

    pub fn padded_size(&self) -> u64 {
        self.data.len() as u64
    }
}
