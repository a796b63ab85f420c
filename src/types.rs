/// Charger state machine position, STATE_CTL0 bits 2:0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChargeState {
    Standby = 0,
    Trickle = 1,
    ConstantCurrent = 2,
    ConstantVoltage = 3,
    ChargeWait = 4,
    Full = 5,
    Timeout = 6,
}

impl TryFrom<u8> for ChargeState {
    type Error = u8;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ChargeState::Standby),
            1 => Ok(ChargeState::Trickle),
            2 => Ok(ChargeState::ConstantCurrent),
            3 => Ok(ChargeState::ConstantVoltage),
            4 => Ok(ChargeState::ChargeWait),
            5 => Ok(ChargeState::Full),
            6 => Ok(ChargeState::Timeout),
            _ => Err(value),
        }
    }
}

impl From<ChargeState> for u8 {
    fn from(state: ChargeState) -> u8 {
        state as u8
    }
}

/// USB Type-C role the port presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TypeCMode {
    /// Sink only
    Ufp = 0,
    /// Source only
    Dfp = 1,
    /// Dual role
    Drp = 3,
}

impl TryFrom<u8> for TypeCMode {
    type Error = u8;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TypeCMode::Ufp),
            1 => Ok(TypeCMode::Dfp),
            3 => Ok(TypeCMode::Drp),
            _ => Err(value),
        }
    }
}

impl From<TypeCMode> for u8 {
    fn from(mode: TypeCMode) -> u8 {
        mode as u8
    }
}

/// Maximum power advertised on VBUS1 when sourcing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Vbus1OutputPower {
    W30 = 0,
    W45 = 1,
    W60 = 2,
    W65 = 3,
    W100 = 4,
    W140 = 5,
}

impl Vbus1OutputPower {
    pub const fn milliwatts(self) -> u32 {
        match self {
            Vbus1OutputPower::W30 => 30_000,
            Vbus1OutputPower::W45 => 45_000,
            Vbus1OutputPower::W60 => 60_000,
            Vbus1OutputPower::W65 => 65_000,
            Vbus1OutputPower::W100 => 100_000,
            Vbus1OutputPower::W140 => 140_000,
        }
    }
}

impl TryFrom<u8> for Vbus1OutputPower {
    type Error = u8;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Vbus1OutputPower::W30),
            1 => Ok(Vbus1OutputPower::W45),
            2 => Ok(Vbus1OutputPower::W60),
            3 => Ok(Vbus1OutputPower::W65),
            4 => Ok(Vbus1OutputPower::W100),
            5 => Ok(Vbus1OutputPower::W140),
            _ => Err(value),
        }
    }
}

impl From<Vbus1OutputPower> for u8 {
    fn from(power: Vbus1OutputPower) -> u8 {
        power as u8
    }
}

/// PDO voltage requested when charging from a PD source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChargingPdoMode {
    V5 = 0,
    V9 = 1,
    V12 = 2,
    V15 = 3,
    V20 = 4,
}

impl ChargingPdoMode {
    pub const fn millivolts(self) -> u16 {
        match self {
            ChargingPdoMode::V5 => 5_000,
            ChargingPdoMode::V9 => 9_000,
            ChargingPdoMode::V12 => 12_000,
            ChargingPdoMode::V15 => 15_000,
            ChargingPdoMode::V20 => 20_000,
        }
    }
}

impl TryFrom<u8> for ChargingPdoMode {
    type Error = u8;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ChargingPdoMode::V5),
            1 => Ok(ChargingPdoMode::V9),
            2 => Ok(ChargingPdoMode::V12),
            3 => Ok(ChargingPdoMode::V15),
            4 => Ok(ChargingPdoMode::V20),
            _ => Err(value),
        }
    }
}

impl From<ChargingPdoMode> for u8 {
    fn from(mode: ChargingPdoMode) -> u8 {
        mode as u8
    }
}

/// VBUS source features, SYS_CTL11 bits 7:4.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputFeatures {
    pub dcdc_output: bool,
    pub vbus_src_dpdm: bool,
    pub vbus_src_pd: bool,
    pub vbus_src_scp: bool,
}

/// Which PDOs use the programmed current instead of the default one, TypeC_CTL9.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PdoCurrentOutput {
    pub pdo_5v_iset: bool,
    /// Advertise 3A on the 5V PDO
    pub pdo_5v_3a: bool,
    pub pdo_9v_iset: bool,
    pub pdo_12v_iset: bool,
    pub pdo_15v_iset: bool,
    pub pdo_20v_iset: bool,
    pub pps1_iset: bool,
    pub pps2_iset: bool,
}

/// Source PDOs offered on top of the mandatory 5V one, TypeC_CTL17.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SourcePdos {
    pub pdo_9v: bool,
    pub pdo_12v: bool,
    pub pdo_15v: bool,
    pub pdo_20v: bool,
    pub pps1: bool,
    pub pps2: bool,
}

/// Per-PDO 10 mA current offset, TypeC_CTL18.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PdoPlus10mA {
    pub pdo_5v: bool,
    pub pdo_9v: bool,
    pub pdo_12v: bool,
    pub pdo_15v: bool,
    pub pdo_20v: bool,
}

/// PDOs advertised by the attached source, RECEIVED_PDO.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReceivedPdos {
    pub pdo_5v: bool,
    pub pdo_9v: bool,
    pub pdo_12v: bool,
    pub pdo_15v: bool,
    pub pdo_20v: bool,
}

/// Type-C connection state, TypeC_STATE.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TypeCStatus {
    pub sink_connected: bool,
    pub src_connected: bool,
    pub src_pd_connected: bool,
    pub sink_pd_connected: bool,
    pub vbus_sink_qc_active: bool,
    pub vbus_src_qc_active: bool,
}

/// Everything STATE_CTL0 reports, taken from a single read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChargeStatus {
    pub charging: bool,
    pub full: bool,
    pub discharging: bool,
    pub state: ChargeState,
}

/// Firmware time stamp stored in TIMENODE1..5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timenode(pub [u8; 5]);

impl Timenode {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// `None` if the chip returned anything that isn't ASCII.
    pub fn as_str(&self) -> Option<&str> {
        if !self.0.is_ascii() {
            return None;
        }
        core::str::from_utf8(&self.0).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_codes_round_trip() {
        for raw in 0..=6u8 {
            let state = ChargeState::try_from(raw).unwrap();
            assert_eq!(u8::from(state), raw);
        }
        assert_eq!(ChargeState::try_from(7), Err(7));

        for raw in 0..=5u8 {
            let power = Vbus1OutputPower::try_from(raw).unwrap();
            assert_eq!(u8::from(power), raw);
        }
        assert_eq!(Vbus1OutputPower::try_from(6), Err(6));

        for raw in 0..=4u8 {
            let mode = ChargingPdoMode::try_from(raw).unwrap();
            assert_eq!(u8::from(mode), raw);
        }
        assert_eq!(ChargingPdoMode::try_from(5), Err(5));
    }

    #[test]
    fn type_c_mode_has_a_hole() {
        assert_eq!(TypeCMode::try_from(0), Ok(TypeCMode::Ufp));
        assert_eq!(TypeCMode::try_from(1), Ok(TypeCMode::Dfp));
        assert_eq!(TypeCMode::try_from(2), Err(2));
        assert_eq!(TypeCMode::try_from(3), Ok(TypeCMode::Drp));
    }

    #[test]
    fn unit_helpers() {
        assert_eq!(Vbus1OutputPower::W100.milliwatts(), 100_000);
        assert_eq!(ChargingPdoMode::V15.millivolts(), 15_000);
    }

    #[test]
    fn timenode_text() {
        assert_eq!(Timenode(*b"23A07").as_str(), Some("23A07"));
        assert_eq!(Timenode([0x32, 0xff, 0x30, 0x30, 0x30]).as_str(), None);
    }
}
