//! Read-only charger, input and Type-C status.

use super::registers::{
    received_pdo, state_ctl0, state_ctl1, state_ctl2, state_ctl3, timenode, typec_state,
};
use super::{Ip2366, Result};
use crate::bus::Bus;
use crate::field::input_voltage_from_raw;
use crate::transport::Error;
use crate::types::{ChargeState, ChargeStatus, ReceivedPdos, Timenode, TypeCStatus};

impl<B: Bus> Ip2366<B> {
    /// Decodes STATE_CTL0 from a single read.
    pub fn charge_status(&mut self) -> Result<ChargeStatus, B::Error> {
        let value = self.transport.read_register(state_ctl0::ADDR)?;
        let raw = state_ctl0::CHARGE_STATE.extract(value);
        let state = ChargeState::try_from(raw).map_err(|raw| Error::UnknownValue {
            register: state_ctl0::ADDR,
            raw,
        })?;

        Ok(ChargeStatus {
            charging: state_ctl0::CHARGING.is_set(value),
            full: state_ctl0::CHARGE_FULL.is_set(value),
            discharging: state_ctl0::DISCHARGING.is_set(value),
            state,
        })
    }

    pub fn is_charging(&mut self) -> Result<bool, B::Error> {
        self.read_flag(state_ctl0::CHARGING)
    }

    pub fn is_charge_full(&mut self) -> Result<bool, B::Error> {
        self.read_flag(state_ctl0::CHARGE_FULL)
    }

    pub fn is_discharging(&mut self) -> Result<bool, B::Error> {
        self.read_flag(state_ctl0::DISCHARGING)
    }

    pub fn charge_state(&mut self) -> Result<ChargeState, B::Error> {
        self.read_enum(state_ctl0::CHARGE_STATE)
    }

    pub fn is_fast_charge(&mut self) -> Result<bool, B::Error> {
        self.read_flag(state_ctl1::FAST_CHARGE)
    }

    pub fn is_vbus_present(&mut self) -> Result<bool, B::Error> {
        self.read_flag(state_ctl2::VBUS_PRESENT)
    }

    pub fn is_vbus_overvoltage(&mut self) -> Result<bool, B::Error> {
        self.read_flag(state_ctl2::VBUS_OVERVOLTAGE)
    }

    /// Negotiated input voltage in mV, 0 when the chip reports no known level.
    pub fn charge_input_voltage(&mut self) -> Result<u16, B::Error> {
        let raw = self.read_field(state_ctl2::INPUT_VOLTAGE)?;
        Ok(input_voltage_from_raw(raw))
    }

    pub fn type_c_status(&mut self) -> Result<TypeCStatus, B::Error> {
        let value = self.transport.read_register(typec_state::ADDR)?;
        Ok(TypeCStatus {
            sink_connected: typec_state::SINK_CONNECTED.is_set(value),
            src_connected: typec_state::SRC_CONNECTED.is_set(value),
            src_pd_connected: typec_state::SRC_PD_CONNECTED.is_set(value),
            sink_pd_connected: typec_state::SINK_PD_CONNECTED.is_set(value),
            vbus_sink_qc_active: typec_state::VBUS_SINK_QC.is_set(value),
            vbus_src_qc_active: typec_state::VBUS_SRC_QC.is_set(value),
        })
    }

    pub fn is_type_c_sink_connected(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_state::SINK_CONNECTED)
    }

    pub fn is_type_c_src_connected(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_state::SRC_CONNECTED)
    }

    pub fn is_type_c_src_pd_connected(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_state::SRC_PD_CONNECTED)
    }

    pub fn is_type_c_sink_pd_connected(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_state::SINK_PD_CONNECTED)
    }

    pub fn is_vbus_sink_qc_active(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_state::VBUS_SINK_QC)
    }

    pub fn is_vbus_src_qc_active(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_state::VBUS_SRC_QC)
    }

    pub fn received_pdos(&mut self) -> Result<ReceivedPdos, B::Error> {
        let value = self.transport.read_register(received_pdo::ADDR)?;
        Ok(ReceivedPdos {
            pdo_5v: received_pdo::PDO_5V.is_set(value),
            pdo_9v: received_pdo::PDO_9V.is_set(value),
            pdo_12v: received_pdo::PDO_12V.is_set(value),
            pdo_15v: received_pdo::PDO_15V.is_set(value),
            pdo_20v: received_pdo::PDO_20V.is_set(value),
        })
    }

    pub fn receives_5v_pdo(&mut self) -> Result<bool, B::Error> {
        self.read_flag(received_pdo::PDO_5V)
    }

    pub fn receives_9v_pdo(&mut self) -> Result<bool, B::Error> {
        self.read_flag(received_pdo::PDO_9V)
    }

    pub fn receives_12v_pdo(&mut self) -> Result<bool, B::Error> {
        self.read_flag(received_pdo::PDO_12V)
    }

    pub fn receives_15v_pdo(&mut self) -> Result<bool, B::Error> {
        self.read_flag(received_pdo::PDO_15V)
    }

    pub fn receives_20v_pdo(&mut self) -> Result<bool, B::Error> {
        self.read_flag(received_pdo::PDO_20V)
    }

    pub fn is_vsys_over_current(&mut self) -> Result<bool, B::Error> {
        self.read_flag(state_ctl3::VSYS_OVER_CURRENT)
    }

    pub fn is_vsys_short_circuit(&mut self) -> Result<bool, B::Error> {
        self.read_flag(state_ctl3::VSYS_SHORT_CIRCUIT)
    }

    /// Reads TIMENODE1..5 one register at a time.
    pub fn timenode(&mut self) -> Result<Timenode, B::Error> {
        let mut bytes = [0; timenode::LEN];
        for (register, byte) in (timenode::FIRST..).zip(bytes.iter_mut()) {
            *byte = self.transport.read_register(register)?;
        }
        Ok(Timenode(bytes))
    }
}
