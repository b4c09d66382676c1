use crate::checksum::{self, CHECKSUM_LIMIT};
use crate::header::{FieldError, HeaderField};
use crate::image::Image;
use tracing::{debug, warn};

/// What the header said before a repair, and what it says now.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Repair {
    pub reported_start: u32,
    pub reported_end: u32,
    pub old_checksum: u16,
    pub new_checksum: u16,
    pub new_end: u32,
    pub original_size: u64,
    pub padded_size: u64,
}

impl Repair {
    pub fn new_start(&self) -> u32 {
        0
    }

    /// Size of the range the header used to declare. Wraps when the range is
    /// inverted.
    pub fn reported_size(&self) -> u64 {
        (self.reported_end as u64)
            .wrapping_sub(self.reported_start as u64)
            .wrapping_add(1)
    }
}

impl Image {
    /// Recalculates the checksum and rewrites the header's ROM range to cover
    /// the padded image, capped at the 4 MiB checksum window.
    pub fn repair(&mut self) -> Result<Repair, FieldError> {
        let padded_size = self.padded_size();
        let original_size = self.original_size();
        let data = self.data_mut();

        let reported_start = HeaderField::ROM_START.read(data)?;
        let reported_end = HeaderField::ROM_END.read(data)?;
        let old_checksum = HeaderField::CHECKSUM.read(data)? as u16;

        let limited_size = checksum::limited_size(data.len());
        let new_checksum = checksum::calculate(data);
        let new_end = (limited_size - 1) as u32;

        HeaderField::CHECKSUM.write(data, new_checksum as u32)?;
        HeaderField::ROM_START.write(data, 0)?;
        HeaderField::ROM_END.write(data, new_end)?;

        let repair = Repair {
            reported_start,
            reported_end,
            old_checksum,
            new_checksum,
            new_end,
            original_size,
            padded_size,
        };

        if reported_end < reported_start {
            warn!(
                reported_start,
                reported_end,
                reported_size = repair.reported_size(),
                "header declared an inverted ROM range"
            );
        }

        if padded_size > CHECKSUM_LIMIT as u64 {
            warn!(padded_size, "image exceeds the 4 MiB checksum window");
        }

        debug!(
            old_checksum,
            new_checksum,
            new_end,
            reported_size = repair.reported_size(),
            "repaired header"
        );

        Ok(repair)
    }
}
