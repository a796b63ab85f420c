use embedded_hal::blocking::i2c::{Write, WriteRead};

/// Byte-level access to the two-wire bus the charger hangs off.
///
/// This is the only place where the driver touches the bus. Implementations
/// only sequence transfers; start/stop generation, acknowledgement and clock
/// stretching belong to the peripheral behind them.
pub trait Bus {
    type Error;

    /// Brings up the bus peripheral if the implementation needs a late start.
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// start -> address+W -> `bytes` -> stop
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// start -> address+W -> `bytes` -> repeated start -> address+R -> `buffer` -> stop
    ///
    /// Returns how many bytes were actually received, which may be less than
    /// `buffer.len()` on peripherals that report short reads.
    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<usize, Self::Error>;
}

/// [`Bus`] over any blocking `embedded-hal` I2C peripheral.
pub struct I2cBus<I2C> {
    i2c: I2C,
}

impl<I2C> I2cBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn into_inner(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Bus for I2cBus<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    type Error = E;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), E> {
        self.i2c.write(address, bytes)
    }

    fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<usize, E> {
        // embedded-hal transfers either fill the whole buffer or fail
        self.i2c.write_read(address, bytes, buffer)?;
        Ok(buffer.len())
    }
}
