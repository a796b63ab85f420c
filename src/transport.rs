use crate::bus::Bus;
use crate::field::AdcChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus reported a failure (no acknowledge, arbitration loss, ...).
    Transport(E),
    /// The read completed but fewer bytes than requested came back.
    ShortRead { register: u8 },
    /// An enumerated field held a code with no named meaning.
    UnknownValue { register: u8, raw: u8 },
}

/// Single-register transactions against one device on the bus.
///
/// Nothing is cached: every call goes to the chip. Calls block until the bus
/// transfer finishes and are never retried here.
pub struct Transport<B> {
    bus: B,
    address: u8,
}

impl<B: Bus> Transport<B> {
    pub fn new(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn begin(&mut self) -> Result<(), Error<B::Error>> {
        self.bus.begin().map_err(Error::Transport)
    }

    pub fn release(self) -> B {
        self.bus
    }

    pub fn read_register(&mut self, register: u8) -> Result<u8, Error<B::Error>> {
        let mut value = [0];
        let received = self
            .bus
            .write_read(self.address, &[register], &mut value)
            .map_err(|err| {
                warn!("read of register 0x{:x} failed", register);
                Error::Transport(err)
            })?;

        if received < value.len() {
            warn!("short read on register 0x{:x}", register);
            return Err(Error::ShortRead { register });
        }

        trace!("read 0x{:x} = 0x{:x}", register, value[0]);
        Ok(value[0])
    }

    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<B::Error>> {
        trace!("write 0x{:x} = 0x{:x}", register, value);
        self.bus
            .write(self.address, &[register, value])
            .map_err(|err| {
                warn!("write of register 0x{:x} failed", register);
                Error::Transport(err)
            })
    }

    /// Read, transform, write back. Nothing is written if the read fails.
    pub fn modify_register<F>(&mut self, register: u8, closure: F) -> Result<(), Error<B::Error>>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read_register(register)?;
        let value = closure(value);
        self.write_register(register, value)
    }

    /// Reads the low byte first, then the high byte.
    pub fn read_adc(&mut self, channel: AdcChannel) -> Result<u16, Error<B::Error>> {
        let low = self.read_register(channel.low)?;
        let high = self.read_register(channel.high)?;
        Ok(AdcChannel::assemble(low, high))
    }
}
