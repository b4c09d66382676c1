use mdfix_util::U8SliceUtils;
use std::ops::Range;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Width {
    Word,
    Long,
}

impl Width {
    pub const fn bytes(self) -> usize {
        match self {
            Width::Word => 2,
            Width::Long => 4,
        }
    }

    const fn max(self) -> u32 {
        match self {
            Width::Word => u16::MAX as u32,
            Width::Long => u32::MAX,
        }
    }
}

/// A big-endian value at a fixed offset in the cartridge header.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeaderField {
    name: &'static str,
    offset: usize,
    width: Width,
}

#[derive(Debug, PartialEq, Error)]
pub enum FieldError {
    #[error("Header field {field} at 0x{offset:X} lies outside the {len}-byte image.")]
    OutOfBounds {
        field: &'static str,
        offset: usize,
        len: usize,
    },
    #[error("Value 0x{value:X} does not fit in header field {field}.")]
    Overflow { field: &'static str, value: u32 },
}

impl HeaderField {
    pub const CHECKSUM: HeaderField = HeaderField::new("checksum", 0x18E, Width::Word);
    pub const ROM_START: HeaderField = HeaderField::new("ROM start", 0x1A0, Width::Long);
    pub const ROM_END: HeaderField = HeaderField::new("ROM end", 0x1A4, Width::Long);

    pub const fn new(name: &'static str, offset: usize, width: Width) -> HeaderField {
        HeaderField {
            name,
            offset,
            width,
        }
    }

    pub fn range(self) -> Range<usize> {
        self.offset..self.offset + self.width.bytes()
    }

    pub fn read(self, data: &[u8]) -> Result<u32, FieldError> {
        let bytes = data.get(self.offset..).unwrap_or(&[]);

        match self.width {
            Width::Word => bytes.try_read_u16().map(u32::from),
            Width::Long => bytes.try_read_u32(),
        }
        .ok_or_else(|| self.out_of_bounds(data.len()))
    }

    pub fn write(self, data: &mut [u8], value: u32) -> Result<(), FieldError> {
        if value > self.width.max() {
            return Err(FieldError::Overflow {
                field: self.name,
                value,
            });
        }

        let len = data.len();
        let bytes = data.get_mut(self.offset..).unwrap_or(&mut []);

        match self.width {
            Width::Word => bytes.try_write_u16(value as u16),
            Width::Long => bytes.try_write_u32(value),
        }
        .ok_or_else(|| self.out_of_bounds(len))
    }

    fn out_of_bounds(self, len: usize) -> FieldError {
        FieldError::OutOfBounds {
            field: self.name,
            offset: self.offset,
            len,
        }
    }
}
