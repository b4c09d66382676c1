use byteorder::{BigEndian, ByteOrder};

pub trait U8SliceUtils {
    fn read_u16(&self) -> u16;
    fn read_u32(&self) -> u32;
    fn try_read_u16(&self) -> Option<u16>;
    fn try_read_u32(&self) -> Option<u32>;
    fn write_u16(&mut self, w: u16);
    fn write_u32(&mut self, w: u32);
    fn try_write_u16(&mut self, w: u16) -> Option<()>;
    fn try_write_u32(&mut self, w: u32) -> Option<()>;
}

impl U8SliceUtils for [u8] {
    #[inline(always)]
    fn read_u16(&self) -> u16 {
        BigEndian::read_u16(self)
    }

    #[inline(always)]
    fn read_u32(&self) -> u32 {
        BigEndian::read_u32(self)
    }

    #[inline(always)]
    fn try_read_u16(&self) -> Option<u16> {
        if self.len() < 2 {
            None
        } else {
            Some(self.read_u16())
        }
    }

    #[inline(always)]
    fn try_read_u32(&self) -> Option<u32> {
        if self.len() < 4 {
            None
        } else {
            Some(self.read_u32())
        }
    }

    #[inline(always)]
    fn write_u16(&mut self, w: u16) {
        BigEndian::write_u16(self, w)
    }

    #[inline(always)]
    fn write_u32(&mut self, w: u32) {
        BigEndian::write_u32(self, w)
    }

    #[inline(always)]
    fn try_write_u16(&mut self, w: u16) -> Option<()> {
        if self.len() < 2 {
            None
        } else {
            self.write_u16(w);

            Some(())
        }
    }

    #[inline(always)]
    fn try_write_u32(&mut self, w: u32) -> Option<()> {
        if self.len() < 4 {
            None
        } else {
            self.write_u32(w);

            Some(())
        }
    }
}
