//! Register-level driver for the Injoinic IP2366 battery charger and USB-PD
//! controller.
//!
//! The driver is split in three layers:
//!
//! - [`Bus`]: raw byte transfers on the I2C bus. [`I2cBus`] adapts any
//!   blocking `embedded-hal` 0.2 peripheral.
//! - [`Transport`]: single-register read, write and read-modify-write.
//! - [`Ip2366`]: named operations in physical units (mV, mA, mW).
//!
//! ```ignore
//! let mut charger = ip2366::Ip2366::new(i2c);
//! charger.begin()?;
//! charger.set_full_charge_voltage(4200)?;
//! let vbat = charger.battery_voltage()?;
//! ```
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod bus;
pub mod field;
pub mod transport;
pub mod types;

mod ip2366;

#[cfg(test)]
mod testing;

pub use crate::bus::{Bus, I2cBus};
pub use crate::ip2366::{registers, Ip2366, Result, DEFAULT_ADDRESS};
pub use crate::transport::{Error, Transport};
pub use crate::types::*;
