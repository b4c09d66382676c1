use crate::repair::Repair;
use std::fmt::{self, Display, Formatter};

pub struct Report<'a>(&'a Repair);

impl Repair {
    pub fn report(&self) -> Report<'_> {
        Report(self)
    }
}

impl<'a> Display for Report<'a> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let r = self.0;

        writeln!(f, "Reported ROM start: 0x{:X}", r.reported_start)?;
        writeln!(f, "Reported ROM end:   0x{:X}", r.reported_end)?;
        writeln!(f, "New ROM start:      0x{:X}", r.new_start())?;
        writeln!(f, "New ROM end:        0x{:X}", r.new_end)?;
        writeln!(f, "Old checksum:       0x{:X}", r.old_checksum)?;
        writeln!(f, "New checksum:       0x{:X}", r.new_checksum)?;
        writeln!(
            f,
            "Old file size:      {} (0x{:X}) byte(s)",
            r.original_size, r.original_size
        )?;
        write!(
            f,
            "New file size:      {} (0x{:X}) byte(s)",
            r.padded_size, r.padded_size
        )
    }
}
