use mdfix_rom::Padding;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: fix-checksum <-q> <-s> <-p [pad value]> [rom file]

           <-q>             - Quiet mode
           <-s>             - Don't pad
           <-p [pad value]> - Pad byte value
           [rom file]       - ROM file
";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub pad_byte: u8,
    pub quiet: bool,
    pub skip_padding: bool,
}

#[derive(Debug, PartialEq, Error)]
pub enum ArgsError {
    #[error("Pad value already defined.")]
    PadAlreadyDefined,
    #[error("Pad value not defined.")]
    PadNotDefined,
    #[error("Invalid pad value \"{0}\".")]
    InvalidPad(String),
    #[error("ROM file already defined.")]
    RomAlreadyDefined,
    #[error("ROM file not defined.")]
    RomNotDefined,
}

impl Config {
    /// Parses everything after the program name.
    pub fn parse<I>(args: I) -> Result<Config, ArgsError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);

        let mut input_path = None;
        let mut pad_byte = None;
        let mut quiet = false;
        let mut skip_padding = false;

        while let Some(arg) = args.next() {
            match arg.to_lowercase().as_str() {
                "-q" => quiet = true,
                "-s" => skip_padding = true,
                "-p" => {
                    if pad_byte.is_some() {
                        return Err(ArgsError::PadAlreadyDefined);
                    }

                    let value = args.next().ok_or(ArgsError::PadNotDefined)?;

                    pad_byte = Some(parse_pad(&value)?);
                }
                _ => {
                    if input_path.is_some() {
                        return Err(ArgsError::RomAlreadyDefined);
                    }

                    input_path = Some(PathBuf::from(arg));
                }
            }
        }

        Ok(Config {
            input_path: input_path.ok_or(ArgsError::RomNotDefined)?,
            pad_byte: pad_byte.unwrap_or(0),
            quiet,
            skip_padding,
        })
    }

    pub fn padding(&self) -> Padding {
        if self.skip_padding {
            Padding::Even
        } else {
            Padding::PowerOfTwo
        }
    }
}

/// Reads the leading integer of `value`; anything after the digits is ignored.
fn parse_pad(value: &str) -> Result<u8, ArgsError> {
    let rest = value.trim_start();

    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| rest.len());

    rest[..end]
        .parse::<u32>()
        .ok()
        .filter(|v| !negative || *v == 0)
        .filter(|v| *v <= 255)
        .map(|v| v as u8)
        .ok_or_else(|| ArgsError::InvalidPad(value.to_owned()))
}
