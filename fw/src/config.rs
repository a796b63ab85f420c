//! Compile-time charger profile. Edit and rebuild.
use ip2366::{OutputFeatures, TypeCMode, Vbus1OutputPower};
use nrf52840_hal::twim::Frequency;

pub const I2C_FREQUENCY: Frequency = Frequency::K100;

/// 7-bit address of the charger
pub const CHARGER_ADDRESS: u8 = ip2366::DEFAULT_ADDRESS;

/// Single Li-ion cell
pub const FULL_CHARGE_VOLTAGE_MV: u16 = 4200;
pub const CHARGE_CURRENT_MA: u16 = 2000;
pub const CHARGE_STOP_CURRENT_MA: u16 = 100;
pub const LOW_BATTERY_VOLTAGE_MV: u16 = 2600;

pub const TYPE_C_MODE: TypeCMode = TypeCMode::Drp;
pub const MAX_OUTPUT_POWER: Vbus1OutputPower = Vbus1OutputPower::W65;
pub const OUTPUT_FEATURES: OutputFeatures = OutputFeatures {
    dcdc_output: true,
    vbus_src_dpdm: true,
    vbus_src_pd: true,
    vbus_src_scp: false,
};

pub const MONITOR_PERIOD_MS: u64 = 5_000; // charger status log period
