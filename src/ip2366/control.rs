//! Charger and system configuration, SYS_CTL0..SYS_CTL12 and SELECT_PDO.

use super::registers::{
    select_pdo, sys_ctl0, sys_ctl10, sys_ctl11, sys_ctl12, sys_ctl2, sys_ctl3, sys_ctl6, sys_ctl8,
    sys_ctl9,
};
use super::{Ip2366, Result};
use crate::bus::Bus;
use crate::field::{recharge_drop_from_raw, recharge_drop_to_raw};
use crate::types::{ChargingPdoMode, OutputFeatures, Vbus1OutputPower};

impl<B: Bus> Ip2366<B> {
    pub fn enable_charger(&mut self, enable: bool) -> Result<(), B::Error> {
        self.write_flag(sys_ctl0::CHARGER_EN, enable)
    }

    pub fn is_charger_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl0::CHARGER_EN)
    }

    /// Short-circuit protection on VBUS while sinking.
    pub fn enable_vbus_sink_scp(&mut self, enable: bool) -> Result<(), B::Error> {
        self.write_flag(sys_ctl0::VBUS_SINK_SCP_EN, enable)
    }

    pub fn is_vbus_sink_scp_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl0::VBUS_SINK_SCP_EN)
    }

    pub fn enable_vbus_sink_pd(&mut self, enable: bool) -> Result<(), B::Error> {
        self.write_flag(sys_ctl0::VBUS_SINK_PD_EN, enable)
    }

    pub fn is_vbus_sink_pd_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl0::VBUS_SINK_PD_EN)
    }

    /// DP/DM fast-charge protocols while sinking.
    pub fn enable_vbus_sink_dpdm(&mut self, enable: bool) -> Result<(), B::Error> {
        self.write_flag(sys_ctl0::VBUS_SINK_DPDM_EN, enable)
    }

    pub fn is_vbus_sink_dpdm_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl0::VBUS_SINK_DPDM_EN)
    }

    /// Makes the INT pin active low.
    pub fn enable_int_low(&mut self, enable: bool) -> Result<(), B::Error> {
        self.write_flag(sys_ctl0::INT_LOW_EN, enable)
    }

    pub fn is_int_low_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl0::INT_LOW_EN)
    }

    /// Sets or clears the MCU reset bit.
    pub fn reset_mcu(&mut self, enable: bool) -> Result<(), B::Error> {
        self.write_flag(sys_ctl0::MCU_RESET, enable)
    }

    pub fn enable_load_otp(&mut self, enable: bool) -> Result<(), B::Error> {
        self.write_flag(sys_ctl0::LOAD_OTP_EN, enable)
    }

    pub fn is_load_otp_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl0::LOAD_OTP_EN)
    }

    /// Battery full-charge voltage in mV, clamped to 2500..=4400 in 10 mV steps.
    pub fn set_full_charge_voltage(&mut self, voltage_mv: u16) -> Result<(), B::Error> {
        self.write_scaled(sys_ctl2::VSET, voltage_mv)
    }

    pub fn full_charge_voltage(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(sys_ctl2::VSET)
    }

    /// Input power or battery current limit in mA, 100 mA steps up to 9700 mA.
    pub fn set_max_input_power_or_battery_current(&mut self, current_ma: u16) -> Result<(), B::Error> {
        self.write_scaled(sys_ctl3::ISET, current_ma)
    }

    pub fn max_input_power_or_battery_current(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(sys_ctl3::ISET)
    }

    /// Trickle charge current in mA, 50 mA steps. Not clamped: codes beyond
    /// the register width wrap.
    pub fn set_trickle_charge_current(&mut self, current_ma: u16) -> Result<(), B::Error> {
        self.write_scaled(sys_ctl6::ITRICKLE, current_ma)
    }

    pub fn trickle_charge_current(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(sys_ctl6::ITRICKLE)
    }

    /// Charge termination current in mA, 50 mA steps up to 750 mA.
    pub fn set_charge_stop_current(&mut self, current_ma: u16) -> Result<(), B::Error> {
        self.write_scaled(sys_ctl8::ISTOP, current_ma)
    }

    pub fn charge_stop_current(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(sys_ctl8::ISTOP)
    }

    /// Cell voltage drop below full that restarts charging, in mV.
    ///
    /// Drops of 400 mV and above select the top code, which reads back as
    /// 150 mV.
    pub fn set_cell_recharge_threshold(&mut self, voltage_drop_mv: u16) -> Result<(), B::Error> {
        self.write_field(sys_ctl8::VRECHARGE, recharge_drop_to_raw(voltage_drop_mv))
    }

    pub fn cell_recharge_threshold(&mut self) -> Result<u16, B::Error> {
        let raw = self.read_field(sys_ctl8::VRECHARGE)?;
        Ok(recharge_drop_from_raw(raw))
    }

    pub fn enable_standby_mode(&mut self, enable: bool) -> Result<(), B::Error> {
        self.write_flag(sys_ctl9::STANDBY_MODE_EN, enable)
    }

    pub fn is_standby_mode_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl9::STANDBY_MODE_EN)
    }

    /// Requests (or leaves) standby.
    pub fn standby(&mut self, enable: bool) -> Result<(), B::Error> {
        self.write_flag(sys_ctl9::STANDBY, enable)
    }

    pub fn is_standby(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl9::STANDBY)
    }

    pub fn enable_battery_low(&mut self, enable: bool) -> Result<(), B::Error> {
        self.write_flag(sys_ctl9::BAT_LOW_EN, enable)
    }

    pub fn is_battery_low_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl9::BAT_LOW_EN)
    }

    /// Low battery cut-off in mV, 100 mV steps within 2500..=2700.
    pub fn set_low_battery_voltage(&mut self, threshold_mv: u16) -> Result<(), B::Error> {
        self.write_scaled(sys_ctl10::VBAT_LOW, threshold_mv)
    }

    pub fn low_battery_voltage(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(sys_ctl10::VBAT_LOW)
    }

    pub fn set_output_features(&mut self, features: OutputFeatures) -> Result<(), B::Error> {
        self.write_flags(
            sys_ctl11::ADDR,
            &[
                (sys_ctl11::DCDC_OUTPUT_EN, features.dcdc_output),
                (sys_ctl11::VBUS_SRC_DPDM_EN, features.vbus_src_dpdm),
                (sys_ctl11::VBUS_SRC_PD_EN, features.vbus_src_pd),
                (sys_ctl11::VBUS_SRC_SCP_EN, features.vbus_src_scp),
            ],
        )
    }

    pub fn output_features(&mut self) -> Result<OutputFeatures, B::Error> {
        let value = self.transport.read_register(sys_ctl11::ADDR)?;
        Ok(OutputFeatures {
            dcdc_output: sys_ctl11::DCDC_OUTPUT_EN.is_set(value),
            vbus_src_dpdm: sys_ctl11::VBUS_SRC_DPDM_EN.is_set(value),
            vbus_src_pd: sys_ctl11::VBUS_SRC_PD_EN.is_set(value),
            vbus_src_scp: sys_ctl11::VBUS_SRC_SCP_EN.is_set(value),
        })
    }

    pub fn is_dcdc_output_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl11::DCDC_OUTPUT_EN)
    }

    pub fn is_vbus_src_dpdm_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl11::VBUS_SRC_DPDM_EN)
    }

    pub fn is_vbus_src_pd_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl11::VBUS_SRC_PD_EN)
    }

    pub fn is_vbus_src_scp_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(sys_ctl11::VBUS_SRC_SCP_EN)
    }

    pub fn set_max_output_power(&mut self, power: Vbus1OutputPower) -> Result<(), B::Error> {
        self.write_enum(sys_ctl12::VBUS1_MAX_POWER, power)
    }

    pub fn max_output_power(&mut self) -> Result<Vbus1OutputPower, B::Error> {
        self.read_enum(sys_ctl12::VBUS1_MAX_POWER)
    }

    pub fn set_charging_pdo_mode(&mut self, mode: ChargingPdoMode) -> Result<(), B::Error> {
        self.write_enum(select_pdo::CHARGING_PDO, mode)
    }

    pub fn charging_pdo_mode(&mut self) -> Result<ChargingPdoMode, B::Error> {
        self.read_enum(select_pdo::CHARGING_PDO)
    }
}
