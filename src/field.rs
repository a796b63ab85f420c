//! Field descriptors and the generic codec that moves values in and out of them.
//!
//! Every quantity the chip exposes lives in a [`Field`]: a run of bits inside
//! one register. Numeric fields add a [`Linear`] transform on top, multi-byte
//! ADC readings are described by an [`AdcChannel`].

/// A run of `width` bits starting at bit `offset` of `register`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    pub register: u8,
    pub offset: u8,
    pub width: u8,
}

impl Field {
    pub const fn new(register: u8, offset: u8, width: u8) -> Self {
        Self {
            register,
            offset,
            width,
        }
    }

    /// Single-bit flag.
    pub const fn bit(register: u8, offset: u8) -> Self {
        Self::new(register, offset, 1)
    }

    /// Field spanning the whole register.
    pub const fn byte(register: u8) -> Self {
        Self::new(register, 0, 8)
    }

    pub const fn mask(&self) -> u8 {
        ((((1u16 << self.width) - 1) << self.offset) & 0xff) as u8
    }

    /// Whether writing this field can skip reading back the register first.
    pub const fn covers_register(&self) -> bool {
        self.mask() == 0xff
    }

    pub const fn extract(&self, register_value: u8) -> u8 {
        (register_value & self.mask()) >> self.offset
    }

    /// Replaces the field bits of `register_value` with `raw`, leaving every
    /// other bit untouched. Bits of `raw` that don't fit the field are dropped.
    pub const fn insert(&self, register_value: u8, raw: u8) -> u8 {
        (register_value & !self.mask()) | ((raw << self.offset) & self.mask())
    }

    pub const fn is_set(&self, register_value: u8) -> bool {
        self.extract(register_value) != 0
    }

    pub const fn set(&self, register_value: u8, enable: bool) -> u8 {
        self.insert(register_value, enable as u8)
    }
}

/// `value = base + raw * step`, with setter input clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Linear {
    pub base: u16,
    pub step: u16,
    pub min: u16,
    pub max: u16,
}

impl Linear {
    pub const fn clamp(&self, value: u16) -> u16 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    pub const fn to_raw(&self, value: u16) -> u16 {
        (self.clamp(value) - self.base) / self.step
    }

    pub const fn from_raw(&self, raw: u8) -> u16 {
        self.base + raw as u16 * self.step
    }

    /// The value a setter call with `value` ends up storing.
    pub const fn quantize(&self, value: u16) -> u16 {
        self.base + self.to_raw(value) * self.step
    }
}

/// A numeric quantity stored in a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaledField {
    pub field: Field,
    pub scale: Linear,
}

impl ScaledField {
    /// Raw field code for `value`. Codes wider than the field are truncated
    /// to its width.
    pub const fn encode(&self, value: u16) -> u8 {
        let raw = self.scale.to_raw(value);
        let width_mask = self.field.mask() >> self.field.offset;

        (raw & width_mask as u16) as u8
    }

    pub const fn decode(&self, register_value: u8) -> u16 {
        self.scale.from_raw(self.field.extract(register_value))
    }
}

/// 16-bit ADC sample split over two registers, low byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcChannel {
    pub low: u8,
    pub high: u8,
}

impl AdcChannel {
    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    pub const fn assemble(low: u8, high: u8) -> u16 {
        ((high as u16) << 8) | low as u16
    }
}

/// Full-scale reference of the GPIO/NTC ADC.
pub const ADC_FULL_SCALE_MV: u32 = 3300;

pub const fn adc_to_millivolts(raw: u16) -> u16 {
    (raw as u32 * ADC_FULL_SCALE_MV / 0xffff) as u16
}

/// Raw code for a cell recharge voltage drop.
///
/// Anything from 400 mV up selects the top code; below that the drop is
/// counted in 50 mV steps and saturates at the top code as well.
pub const fn recharge_drop_to_raw(voltage_drop_mv: u16) -> u8 {
    if voltage_drop_mv >= 400 {
        return 3;
    }

    let raw = voltage_drop_mv / 50;
    if raw > 3 {
        3
    } else {
        raw as u8
    }
}

pub const fn recharge_drop_from_raw(raw: u8) -> u16 {
    (raw & 0x03) as u16 * 50
}

/// Decodes the input charge voltage code of STATE_CTL2 into millivolts.
/// Codes without an assigned voltage report 0.
pub const fn input_voltage_from_raw(raw: u8) -> u16 {
    match raw & 0x07 {
        7 => 20_000,
        6 => 15_000,
        5 => 12_000,
        4 => 9_000,
        3 => 7_000,
        2 => 5_000,
        _ => 0,
    }
}
