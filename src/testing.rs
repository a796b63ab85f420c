//! In-memory stand-in for the chip, used by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use crate::bus::Bus;
use crate::DEFAULT_ADDRESS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusFault {
    AddressNack,
    Nack,
}

struct Chip {
    registers: [u8; 256],
    short_reads: bool,
    fail_reads: bool,
    fail_writes: bool,
    reads: Vec<u8>,
    writes: Vec<(u8, u8)>,
}

/// Register file answering at [`DEFAULT_ADDRESS`]. Clones share the same
/// registers so a test can keep a handle after moving one into the driver.
#[derive(Clone)]
pub struct RegisterFile {
    chip: Rc<RefCell<Chip>>,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            chip: Rc::new(RefCell::new(Chip {
                registers: [0; 256],
                short_reads: false,
                fail_reads: false,
                fail_writes: false,
                reads: Vec::new(),
                writes: Vec::new(),
            })),
        }
    }

    pub fn set(&self, register: u8, value: u8) {
        self.chip.borrow_mut().registers[register as usize] = value;
    }

    pub fn get(&self, register: u8) -> u8 {
        self.chip.borrow().registers[register as usize]
    }

    pub fn short_reads(&self, enable: bool) {
        self.chip.borrow_mut().short_reads = enable;
    }

    pub fn fail_reads(&self, enable: bool) {
        self.chip.borrow_mut().fail_reads = enable;
    }

    pub fn fail_writes(&self, enable: bool) {
        self.chip.borrow_mut().fail_writes = enable;
    }

    /// Registers read so far, in bus order.
    pub fn reads(&self) -> Vec<u8> {
        self.chip.borrow().reads.clone()
    }

    /// `(register, value)` pairs written so far, in bus order.
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.chip.borrow().writes.clone()
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for RegisterFile {
    type Error = BusFault;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), BusFault> {
        let mut chip = self.chip.borrow_mut();
        if address != DEFAULT_ADDRESS {
            return Err(BusFault::AddressNack);
        }
        if chip.fail_writes {
            return Err(BusFault::Nack);
        }

        let (register, value) = match bytes {
            [register, value] => (*register, *value),
            _ => panic!("unexpected write of {} bytes", bytes.len()),
        };
        chip.registers[register as usize] = value;
        chip.writes.push((register, value));
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<usize, BusFault> {
        let mut chip = self.chip.borrow_mut();
        if address != DEFAULT_ADDRESS {
            return Err(BusFault::AddressNack);
        }
        if chip.fail_reads {
            return Err(BusFault::Nack);
        }

        let register = match bytes {
            [register] => *register,
            _ => panic!("unexpected register address of {} bytes", bytes.len()),
        };
        chip.reads.push(register);

        if chip.short_reads {
            return Ok(0);
        }

        for (offset, byte) in buffer.iter_mut().enumerate() {
            *byte = chip.registers[(register as usize + offset) & 0xff];
        }
        Ok(buffer.len())
    }
}
