//! ADC readings. Each 16-bit value costs two register reads, low byte first,
//! so a conversion finishing in between can mix two samples.

use super::registers::adc;
use super::{Ip2366, Result};
use crate::bus::Bus;
use crate::field::adc_to_millivolts;

impl<B: Bus> Ip2366<B> {
    /// mV
    pub fn battery_voltage(&mut self) -> Result<u16, B::Error> {
        self.transport.read_adc(adc::BATV)
    }

    /// mV
    pub fn system_voltage(&mut self) -> Result<u16, B::Error> {
        self.transport.read_adc(adc::VSYS_V)
    }

    /// mA
    pub fn battery_current(&mut self) -> Result<u16, B::Error> {
        self.transport.read_adc(adc::IBAT)
    }

    /// mA
    pub fn system_current(&mut self) -> Result<u16, B::Error> {
        self.transport.read_adc(adc::ISYS)
    }

    /// mW
    pub fn system_power(&mut self) -> Result<u32, B::Error> {
        self.transport.read_adc(adc::VSYS_POW).map(u32::from)
    }

    /// Voltage on the GPIO0/NTC pin in mV.
    pub fn ntc_voltage(&mut self) -> Result<u16, B::Error> {
        let raw = self.transport.read_adc(adc::VGPIO0_NTC)?;
        Ok(adc_to_millivolts(raw))
    }

    pub fn is_over_heat(&mut self) -> Result<bool, B::Error> {
        self.read_flag(adc::OVER_HEAT)
    }
}
