pub mod registers;

mod adc;
mod control;
mod status;
mod typec;

use crate::bus::{Bus, I2cBus};
use crate::field::{Field, ScaledField};
use crate::transport::{Error, Transport};

pub const DEFAULT_ADDRESS: u8 = 0x75;

pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// IP2366 charger / USB-PD controller.
///
/// The chip owns every piece of configuration and status; the handle only
/// knows how to reach it. Read-modify-write operations are two separate bus
/// transactions, so a second bus master touching the same register between
/// them can lose its update.
pub struct Ip2366<B> {
    transport: Transport<B>,
}

impl<I2C> Ip2366<I2cBus<I2C>>
where
    I2cBus<I2C>: Bus,
{
    pub fn new(i2c: I2C) -> Self {
        Self::new_with_address(i2c, DEFAULT_ADDRESS)
    }

    pub fn new_with_address(i2c: I2C, address: u8) -> Self {
        Self::with_bus(I2cBus::new(i2c), address)
    }
}

impl<B: Bus> Ip2366<B> {
    pub fn with_bus(bus: B, address: u8) -> Self {
        Self {
            transport: Transport::new(bus, address),
        }
    }

    /// Starts the bus and checks the chip answers at its address.
    pub fn begin(&mut self) -> Result<(), B::Error> {
        self.transport.begin()?;
        let sys_ctl0 = self.transport.read_register(registers::sys_ctl0::ADDR)?;

        info!(
            "Found IP2366 at 0x{:x}, SYS_CTL0 = 0x{:x}",
            self.transport.address(),
            sys_ctl0
        );
        Ok(())
    }

    pub fn release(self) -> B {
        self.transport.release()
    }

    fn read_flag(&mut self, field: Field) -> Result<bool, B::Error> {
        let value = self.transport.read_register(field.register)?;
        Ok(field.is_set(value))
    }

    fn write_flag(&mut self, field: Field, enable: bool) -> Result<(), B::Error> {
        self.transport
            .modify_register(field.register, |reg| field.set(reg, enable))
    }

    fn read_field(&mut self, field: Field) -> Result<u8, B::Error> {
        let value = self.transport.read_register(field.register)?;
        Ok(field.extract(value))
    }

    /// Fields covering the whole register are written blind, everything else
    /// goes through read-modify-write.
    fn write_field(&mut self, field: Field, raw: u8) -> Result<(), B::Error> {
        if field.covers_register() {
            self.transport.write_register(field.register, raw)
        } else {
            self.transport
                .modify_register(field.register, |reg| field.insert(reg, raw))
        }
    }

    fn read_scaled(&mut self, scaled: ScaledField) -> Result<u16, B::Error> {
        let value = self.transport.read_register(scaled.field.register)?;
        Ok(scaled.decode(value))
    }

    fn write_scaled(&mut self, scaled: ScaledField, value: u16) -> Result<(), B::Error> {
        let raw = scaled.encode(value);
        debug!(
            "0x{:x}: {} -> code {}",
            scaled.field.register,
            scaled.scale.quantize(value),
            raw
        );
        self.write_field(scaled.field, raw)
    }

    fn read_enum<T>(&mut self, field: Field) -> Result<T, B::Error>
    where
        T: TryFrom<u8, Error = u8>,
    {
        let raw = self.read_field(field)?;
        T::try_from(raw).map_err(|raw| {
            warn!("register 0x{:x} holds unknown code {}", field.register, raw);
            Error::UnknownValue {
                register: field.register,
                raw,
            }
        })
    }

    fn write_enum<T>(&mut self, field: Field, value: T) -> Result<(), B::Error>
    where
        T: Into<u8>,
    {
        self.write_field(field, value.into())
    }

    /// Writes several flags of one register with a single read-modify-write.
    fn write_flags(&mut self, register: u8, flags: &[(Field, bool)]) -> Result<(), B::Error> {
        self.transport.modify_register(register, |reg| {
            flags
                .iter()
                .fold(reg, |reg, (field, enable)| field.set(reg, *enable))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BusFault, RegisterFile};

    use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn begin_probes_the_chip() {
        let expectations = [I2cTransaction::write_read(
            DEFAULT_ADDRESS,
            vec![registers::sys_ctl0::ADDR],
            vec![0x01],
        )];
        let mut charger = Ip2366::new(I2cMock::new(&expectations));

        charger.begin().unwrap();

        charger.release().into_inner().done();
    }

    #[test]
    fn begin_reports_missing_chip() {
        let regs = RegisterFile::new();
        let mut charger = Ip2366::with_bus(regs, 0x10);

        assert_eq!(charger.begin(), Err(Error::Transport(BusFault::AddressNack)));
    }

    #[test]
    fn custom_address() {
        let expectations = [I2cTransaction::write(0x74, vec![0x02, 0x00])];
        let mut charger = Ip2366::new_with_address(I2cMock::new(&expectations), 0x74);

        charger.set_full_charge_voltage(2500).unwrap();

        charger.release().into_inner().done();
    }
}
