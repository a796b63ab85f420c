use crate::field::{Field, Linear, ScaledField};

pub mod sys_ctl0 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x00;
    pub const CHARGER_EN: Field = Field::bit(ADDR, 0);
    pub const VBUS_SINK_SCP_EN: Field = Field::bit(ADDR, 2);
    pub const VBUS_SINK_PD_EN: Field = Field::bit(ADDR, 3);
    pub const VBUS_SINK_DPDM_EN: Field = Field::bit(ADDR, 4);
    pub const INT_LOW_EN: Field = Field::bit(ADDR, 5);
    pub const MCU_RESET: Field = Field::bit(ADDR, 6);
    pub const LOAD_OTP_EN: Field = Field::bit(ADDR, 7);
}

pub mod sys_ctl2 {
    use super::*;

    pub const ADDR: u8 = 0x02;
    pub const VSET: ScaledField = ScaledField {
        field: Field::byte(ADDR),
        scale: Linear {
            base: 2500,
            step: 10,
            min: 2500,
            max: 4400,
        },
    };
}

pub mod sys_ctl3 {
    use super::*;

    pub const ADDR: u8 = 0x03;
    pub const ISET: ScaledField = ScaledField {
        field: Field::byte(ADDR),
        scale: Linear {
            base: 0,
            step: 100,
            min: 0,
            max: 9700,
        },
    };
}

pub mod sys_ctl6 {
    use super::*;

    pub const ADDR: u8 = 0x06;
    pub const ITRICKLE: ScaledField = ScaledField {
        field: Field::byte(ADDR),
        scale: Linear {
            base: 0,
            step: 50,
            min: 0,
            max: u16::MAX,
        },
    };
}

pub mod sys_ctl8 {
    use super::*;

    pub const ADDR: u8 = 0x08;
    pub const ISTOP: ScaledField = ScaledField {
        field: Field::new(ADDR, 4, 4),
        scale: Linear {
            base: 0,
            step: 50,
            min: 0,
            max: 750,
        },
    };
    /// Encoded with `field::recharge_drop_to_raw`
    pub const VRECHARGE: Field = Field::new(ADDR, 2, 2);
}

pub mod sys_ctl9 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x09;
    pub const STANDBY_MODE_EN: Field = Field::bit(ADDR, 7);
    pub const STANDBY: Field = Field::bit(ADDR, 6);
    pub const BAT_LOW_EN: Field = Field::bit(ADDR, 5);
}

pub mod sys_ctl10 {
    use super::*;

    pub const ADDR: u8 = 0x0A;
    pub const VBAT_LOW: ScaledField = ScaledField {
        field: Field::new(ADDR, 5, 3),
        scale: Linear {
            base: 2500,
            step: 100,
            min: 2500,
            max: 2700,
        },
    };
}

pub mod sys_ctl11 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x0B;
    pub const DCDC_OUTPUT_EN: Field = Field::bit(ADDR, 7);
    pub const VBUS_SRC_DPDM_EN: Field = Field::bit(ADDR, 6);
    pub const VBUS_SRC_PD_EN: Field = Field::bit(ADDR, 5);
    pub const VBUS_SRC_SCP_EN: Field = Field::bit(ADDR, 4);
}

pub mod sys_ctl12 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x0C;
    pub const VBUS1_MAX_POWER: Field = Field::new(ADDR, 5, 3);
}

pub mod select_pdo {
    use crate::field::Field;

    pub const ADDR: u8 = 0x0D;
    pub const CHARGING_PDO: Field = Field::new(ADDR, 0, 3);
}

pub mod typec_ctl8 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x22;
    pub const MODE: Field = Field::new(ADDR, 6, 2);
}

pub mod typec_ctl9 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x23;
    pub const PDO_5V_3A: Field = Field::bit(ADDR, 7);
    pub const PPS2_ISET_EN: Field = Field::bit(ADDR, 6);
    pub const PPS1_ISET_EN: Field = Field::bit(ADDR, 5);
    pub const PDO_20V_ISET_EN: Field = Field::bit(ADDR, 4);
    pub const PDO_15V_ISET_EN: Field = Field::bit(ADDR, 3);
    pub const PDO_12V_ISET_EN: Field = Field::bit(ADDR, 2);
    pub const PDO_9V_ISET_EN: Field = Field::bit(ADDR, 1);
    pub const PDO_5V_ISET_EN: Field = Field::bit(ADDR, 0);
}

const fn pdo_current(register: u8, step: u16, max: u16) -> ScaledField {
    ScaledField {
        field: Field::byte(register),
        scale: Linear {
            base: 0,
            step,
            min: 0,
            max,
        },
    }
}

pub mod typec_ctl10 {
    pub const ADDR: u8 = 0x24;
    pub const PDO_5V_CURRENT: super::ScaledField = super::pdo_current(ADDR, 20, 3000);
}

pub mod typec_ctl11 {
    pub const ADDR: u8 = 0x25;
    pub const PDO_9V_CURRENT: super::ScaledField = super::pdo_current(ADDR, 20, 3000);
}

pub mod typec_ctl12 {
    pub const ADDR: u8 = 0x26;
    pub const PDO_12V_CURRENT: super::ScaledField = super::pdo_current(ADDR, 20, 3000);
}

pub mod typec_ctl13 {
    pub const ADDR: u8 = 0x27;
    pub const PDO_15V_CURRENT: super::ScaledField = super::pdo_current(ADDR, 20, 3000);
}

pub mod typec_ctl14 {
    pub const ADDR: u8 = 0x28;
    pub const PDO_20V_CURRENT: super::ScaledField = super::pdo_current(ADDR, 20, 5000);
}

pub mod typec_ctl23 {
    pub const ADDR: u8 = 0x29;
    pub const PPS1_CURRENT: super::ScaledField = super::pdo_current(ADDR, 50, 5000);
}

pub mod typec_ctl24 {
    pub const ADDR: u8 = 0x2A;
    pub const PPS2_CURRENT: super::ScaledField = super::pdo_current(ADDR, 50, 5000);
}

pub mod typec_ctl17 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x2B;
    pub const SRC_PDO_9V_EN: Field = Field::bit(ADDR, 1);
    pub const SRC_PDO_12V_EN: Field = Field::bit(ADDR, 2);
    pub const SRC_PDO_15V_EN: Field = Field::bit(ADDR, 3);
    pub const SRC_PDO_20V_EN: Field = Field::bit(ADDR, 4);
    pub const SRC_PPS1_EN: Field = Field::bit(ADDR, 5);
    pub const SRC_PPS2_EN: Field = Field::bit(ADDR, 6);
}

pub mod typec_ctl18 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x2C;
    pub const PDO_5V_ADD_10MA: Field = Field::bit(ADDR, 0);
    pub const PDO_9V_ADD_10MA: Field = Field::bit(ADDR, 1);
    pub const PDO_12V_ADD_10MA: Field = Field::bit(ADDR, 2);
    pub const PDO_15V_ADD_10MA: Field = Field::bit(ADDR, 3);
    pub const PDO_20V_ADD_10MA: Field = Field::bit(ADDR, 4);
}

pub mod state_ctl0 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x31;
    pub const CHARGING: Field = Field::bit(ADDR, 5);
    pub const CHARGE_FULL: Field = Field::bit(ADDR, 4);
    pub const DISCHARGING: Field = Field::bit(ADDR, 3);
    pub const CHARGE_STATE: Field = Field::new(ADDR, 0, 3);
}

pub mod state_ctl1 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x32;
    pub const FAST_CHARGE: Field = Field::bit(ADDR, 6);
}

pub mod state_ctl2 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x33;
    pub const VBUS_PRESENT: Field = Field::bit(ADDR, 7);
    pub const VBUS_OVERVOLTAGE: Field = Field::bit(ADDR, 6);
    /// Decoded with `field::input_voltage_from_raw`
    pub const INPUT_VOLTAGE: Field = Field::new(ADDR, 0, 3);
}

pub mod typec_state {
    use crate::field::Field;

    pub const ADDR: u8 = 0x34;
    pub const SINK_CONNECTED: Field = Field::bit(ADDR, 7);
    pub const SRC_CONNECTED: Field = Field::bit(ADDR, 6);
    pub const SRC_PD_CONNECTED: Field = Field::bit(ADDR, 5);
    pub const SINK_PD_CONNECTED: Field = Field::bit(ADDR, 4);
    pub const VBUS_SINK_QC: Field = Field::bit(ADDR, 3);
    pub const VBUS_SRC_QC: Field = Field::bit(ADDR, 2);
}

pub mod received_pdo {
    use crate::field::Field;

    pub const ADDR: u8 = 0x35;
    pub const PDO_5V: Field = Field::bit(ADDR, 0);
    pub const PDO_9V: Field = Field::bit(ADDR, 1);
    pub const PDO_12V: Field = Field::bit(ADDR, 2);
    pub const PDO_15V: Field = Field::bit(ADDR, 3);
    pub const PDO_20V: Field = Field::bit(ADDR, 4);
}

pub mod state_ctl3 {
    use crate::field::Field;

    pub const ADDR: u8 = 0x38;
    pub const VSYS_OVER_CURRENT: Field = Field::bit(ADDR, 5);
    pub const VSYS_SHORT_CIRCUIT: Field = Field::bit(ADDR, 4);
}

pub mod adc {
    use crate::field::{AdcChannel, Field};

    /// Battery voltage, mV
    pub const BATV: AdcChannel = AdcChannel::new(0x50, 0x51);
    /// System voltage, mV
    pub const VSYS_V: AdcChannel = AdcChannel::new(0x52, 0x53);
    /// Battery current, mA
    pub const IBAT: AdcChannel = AdcChannel::new(0x6E, 0x6F);
    /// System current, mA
    pub const ISYS: AdcChannel = AdcChannel::new(0x70, 0x71);
    /// System power, mW
    pub const VSYS_POW: AdcChannel = AdcChannel::new(0x74, 0x75);
    /// GPIO0/NTC voltage, raw code over the 3.3 V reference
    pub const VGPIO0_NTC: AdcChannel = AdcChannel::new(0x78, 0x79);

    pub const INTC_IADC_DAT0: u8 = 0x77;
    pub const OVER_HEAT: Field = Field::bit(INTC_IADC_DAT0, 7);
}

pub mod timenode {
    pub const FIRST: u8 = 0x69;
    pub const LEN: usize = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALED: [ScaledField; 12] = [
        sys_ctl2::VSET,
        sys_ctl3::ISET,
        sys_ctl6::ITRICKLE,
        sys_ctl8::ISTOP,
        sys_ctl10::VBAT_LOW,
        typec_ctl10::PDO_5V_CURRENT,
        typec_ctl11::PDO_9V_CURRENT,
        typec_ctl12::PDO_12V_CURRENT,
        typec_ctl13::PDO_15V_CURRENT,
        typec_ctl14::PDO_20V_CURRENT,
        typec_ctl23::PPS1_CURRENT,
        typec_ctl24::PPS2_CURRENT,
    ];

    #[test]
    fn scaled_fields_decode_to_quantized_clamp() {
        for scaled in SCALED {
            // ITRICKLE has no ceiling and wraps, everything else fits its field
            let top = if scaled == sys_ctl6::ITRICKLE {
                scaled.scale.from_raw(0xff)
            } else {
                scaled.scale.max.saturating_add(1000)
            };

            for value in (0..=top).step_by(7) {
                let register = scaled.field.insert(0xa5, scaled.encode(value));
                assert_eq!(
                    scaled.decode(register),
                    scaled.scale.quantize(value),
                    "register 0x{:x}, value {}",
                    scaled.field.register,
                    value
                );
                assert_eq!(register & !scaled.field.mask(), 0xa5 & !scaled.field.mask());
            }
        }
    }

    #[test]
    fn scaled_field_codes_fit_their_width() {
        for scaled in SCALED {
            if scaled == sys_ctl6::ITRICKLE {
                continue;
            }
            let top_code = scaled.scale.to_raw(scaled.scale.max);
            assert!(
                top_code <= (scaled.field.mask() >> scaled.field.offset) as u16,
                "register 0x{:x}",
                scaled.field.register
            );
        }
    }
}
