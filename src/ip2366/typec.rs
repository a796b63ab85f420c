//! USB Type-C role, source PDO selection and per-PDO current limits.

use super::registers::{
    typec_ctl10, typec_ctl11, typec_ctl12, typec_ctl13, typec_ctl14, typec_ctl17, typec_ctl18,
    typec_ctl23, typec_ctl24, typec_ctl8, typec_ctl9,
};
use super::{Ip2366, Result};
use crate::bus::Bus;
use crate::types::{PdoCurrentOutput, PdoPlus10mA, SourcePdos, TypeCMode};

impl<B: Bus> Ip2366<B> {
    pub fn set_type_c_mode(&mut self, mode: TypeCMode) -> Result<(), B::Error> {
        self.write_enum(typec_ctl8::MODE, mode)
    }

    pub fn type_c_mode(&mut self) -> Result<TypeCMode, B::Error> {
        self.read_enum(typec_ctl8::MODE)
    }

    /// Writes all of TypeC_CTL9 at once; every bit is owned by `output`.
    pub fn set_pdo_current_output(&mut self, output: PdoCurrentOutput) -> Result<(), B::Error> {
        let value = [
            (typec_ctl9::PDO_5V_ISET_EN, output.pdo_5v_iset),
            (typec_ctl9::PDO_9V_ISET_EN, output.pdo_9v_iset),
            (typec_ctl9::PDO_12V_ISET_EN, output.pdo_12v_iset),
            (typec_ctl9::PDO_15V_ISET_EN, output.pdo_15v_iset),
            (typec_ctl9::PDO_20V_ISET_EN, output.pdo_20v_iset),
            (typec_ctl9::PPS1_ISET_EN, output.pps1_iset),
            (typec_ctl9::PPS2_ISET_EN, output.pps2_iset),
            (typec_ctl9::PDO_5V_3A, output.pdo_5v_3a),
        ]
        .iter()
        .fold(0, |reg, (field, enable)| field.set(reg, *enable));

        self.transport.write_register(typec_ctl9::ADDR, value)
    }

    pub fn pdo_current_output(&mut self) -> Result<PdoCurrentOutput, B::Error> {
        let value = self.transport.read_register(typec_ctl9::ADDR)?;
        Ok(PdoCurrentOutput {
            pdo_5v_iset: typec_ctl9::PDO_5V_ISET_EN.is_set(value),
            pdo_5v_3a: typec_ctl9::PDO_5V_3A.is_set(value),
            pdo_9v_iset: typec_ctl9::PDO_9V_ISET_EN.is_set(value),
            pdo_12v_iset: typec_ctl9::PDO_12V_ISET_EN.is_set(value),
            pdo_15v_iset: typec_ctl9::PDO_15V_ISET_EN.is_set(value),
            pdo_20v_iset: typec_ctl9::PDO_20V_ISET_EN.is_set(value),
            pps1_iset: typec_ctl9::PPS1_ISET_EN.is_set(value),
            pps2_iset: typec_ctl9::PPS2_ISET_EN.is_set(value),
        })
    }

    pub fn is_pdo_5v_iset_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl9::PDO_5V_ISET_EN)
    }

    pub fn is_pdo_5v_3a_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl9::PDO_5V_3A)
    }

    pub fn is_pdo_9v_iset_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl9::PDO_9V_ISET_EN)
    }

    pub fn is_pdo_12v_iset_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl9::PDO_12V_ISET_EN)
    }

    pub fn is_pdo_15v_iset_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl9::PDO_15V_ISET_EN)
    }

    pub fn is_pdo_20v_iset_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl9::PDO_20V_ISET_EN)
    }

    pub fn is_pps1_iset_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl9::PPS1_ISET_EN)
    }

    pub fn is_pps2_iset_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl9::PPS2_ISET_EN)
    }

    /// 5V PDO current in mA, 20 mA steps up to 3000 mA.
    pub fn set_pdo_current_5v(&mut self, current_ma: u16) -> Result<(), B::Error> {
        self.write_scaled(typec_ctl10::PDO_5V_CURRENT, current_ma)
    }

    pub fn pdo_current_5v(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(typec_ctl10::PDO_5V_CURRENT)
    }

    pub fn set_pdo_current_9v(&mut self, current_ma: u16) -> Result<(), B::Error> {
        self.write_scaled(typec_ctl11::PDO_9V_CURRENT, current_ma)
    }

    pub fn pdo_current_9v(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(typec_ctl11::PDO_9V_CURRENT)
    }

    pub fn set_pdo_current_12v(&mut self, current_ma: u16) -> Result<(), B::Error> {
        self.write_scaled(typec_ctl12::PDO_12V_CURRENT, current_ma)
    }

    pub fn pdo_current_12v(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(typec_ctl12::PDO_12V_CURRENT)
    }

    pub fn set_pdo_current_15v(&mut self, current_ma: u16) -> Result<(), B::Error> {
        self.write_scaled(typec_ctl13::PDO_15V_CURRENT, current_ma)
    }

    pub fn pdo_current_15v(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(typec_ctl13::PDO_15V_CURRENT)
    }

    /// 20V PDO current in mA, 20 mA steps up to 5000 mA.
    pub fn set_pdo_current_20v(&mut self, current_ma: u16) -> Result<(), B::Error> {
        self.write_scaled(typec_ctl14::PDO_20V_CURRENT, current_ma)
    }

    pub fn pdo_current_20v(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(typec_ctl14::PDO_20V_CURRENT)
    }

    /// PPS current in mA, 50 mA steps up to 5000 mA.
    pub fn set_pps1_current(&mut self, current_ma: u16) -> Result<(), B::Error> {
        self.write_scaled(typec_ctl23::PPS1_CURRENT, current_ma)
    }

    pub fn pps1_current(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(typec_ctl23::PPS1_CURRENT)
    }

    pub fn set_pps2_current(&mut self, current_ma: u16) -> Result<(), B::Error> {
        self.write_scaled(typec_ctl24::PPS2_CURRENT, current_ma)
    }

    pub fn pps2_current(&mut self) -> Result<u16, B::Error> {
        self.read_scaled(typec_ctl24::PPS2_CURRENT)
    }

    pub fn set_source_pdos(&mut self, pdos: SourcePdos) -> Result<(), B::Error> {
        self.write_flags(
            typec_ctl17::ADDR,
            &[
                (typec_ctl17::SRC_PDO_9V_EN, pdos.pdo_9v),
                (typec_ctl17::SRC_PDO_12V_EN, pdos.pdo_12v),
                (typec_ctl17::SRC_PDO_15V_EN, pdos.pdo_15v),
                (typec_ctl17::SRC_PDO_20V_EN, pdos.pdo_20v),
                (typec_ctl17::SRC_PPS1_EN, pdos.pps1),
                (typec_ctl17::SRC_PPS2_EN, pdos.pps2),
            ],
        )
    }

    pub fn source_pdos(&mut self) -> Result<SourcePdos, B::Error> {
        let value = self.transport.read_register(typec_ctl17::ADDR)?;
        Ok(SourcePdos {
            pdo_9v: typec_ctl17::SRC_PDO_9V_EN.is_set(value),
            pdo_12v: typec_ctl17::SRC_PDO_12V_EN.is_set(value),
            pdo_15v: typec_ctl17::SRC_PDO_15V_EN.is_set(value),
            pdo_20v: typec_ctl17::SRC_PDO_20V_EN.is_set(value),
            pps1: typec_ctl17::SRC_PPS1_EN.is_set(value),
            pps2: typec_ctl17::SRC_PPS2_EN.is_set(value),
        })
    }

    pub fn is_src_pdo_9v_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl17::SRC_PDO_9V_EN)
    }

    pub fn is_src_pdo_12v_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl17::SRC_PDO_12V_EN)
    }

    pub fn is_src_pdo_15v_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl17::SRC_PDO_15V_EN)
    }

    pub fn is_src_pdo_20v_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl17::SRC_PDO_20V_EN)
    }

    pub fn is_src_pps1_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl17::SRC_PPS1_EN)
    }

    pub fn is_src_pps2_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl17::SRC_PPS2_EN)
    }

    pub fn set_pdo_plus_10ma(&mut self, plus: PdoPlus10mA) -> Result<(), B::Error> {
        self.write_flags(
            typec_ctl18::ADDR,
            &[
                (typec_ctl18::PDO_5V_ADD_10MA, plus.pdo_5v),
                (typec_ctl18::PDO_9V_ADD_10MA, plus.pdo_9v),
                (typec_ctl18::PDO_12V_ADD_10MA, plus.pdo_12v),
                (typec_ctl18::PDO_15V_ADD_10MA, plus.pdo_15v),
                (typec_ctl18::PDO_20V_ADD_10MA, plus.pdo_20v),
            ],
        )
    }

    pub fn pdo_plus_10ma(&mut self) -> Result<PdoPlus10mA, B::Error> {
        let value = self.transport.read_register(typec_ctl18::ADDR)?;
        Ok(PdoPlus10mA {
            pdo_5v: typec_ctl18::PDO_5V_ADD_10MA.is_set(value),
            pdo_9v: typec_ctl18::PDO_9V_ADD_10MA.is_set(value),
            pdo_12v: typec_ctl18::PDO_12V_ADD_10MA.is_set(value),
            pdo_15v: typec_ctl18::PDO_15V_ADD_10MA.is_set(value),
            pdo_20v: typec_ctl18::PDO_20V_ADD_10MA.is_set(value),
        })
    }

    pub fn is_pdo_plus_10ma_5v_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl18::PDO_5V_ADD_10MA)
    }

    pub fn is_pdo_plus_10ma_9v_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl18::PDO_9V_ADD_10MA)
    }

    pub fn is_pdo_plus_10ma_12v_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl18::PDO_12V_ADD_10MA)
    }

    pub fn is_pdo_plus_10ma_15v_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl18::PDO_15V_ADD_10MA)
    }

    pub fn is_pdo_plus_10ma_20v_enabled(&mut self) -> Result<bool, B::Error> {
        self.read_flag(typec_ctl18::PDO_20V_ADD_10MA)
    }
}

#[cfg(test)]
mod tests {
    use super::super::DEFAULT_ADDRESS;
    use super::*;
    use crate::testing::RegisterFile;
    use crate::transport::Error;

    use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = DEFAULT_ADDRESS;

    fn charger() -> (Ip2366<RegisterFile>, RegisterFile) {
        let regs = RegisterFile::new();
        (Ip2366::with_bus(regs.clone(), ADDR), regs)
    }

    #[test]
    fn type_c_mode_keeps_low_bits() {
        let (mut charger, regs) = charger();
        regs.set(typec_ctl8::ADDR, 0x2a);

        charger.set_type_c_mode(TypeCMode::Drp).unwrap();
        assert_eq!(regs.get(typec_ctl8::ADDR), 0xea);
        assert_eq!(charger.type_c_mode().unwrap(), TypeCMode::Drp);

        charger.set_type_c_mode(TypeCMode::Dfp).unwrap();
        assert_eq!(regs.get(typec_ctl8::ADDR), 0x6a);
        assert_eq!(charger.type_c_mode().unwrap(), TypeCMode::Dfp);

        charger.set_type_c_mode(TypeCMode::Ufp).unwrap();
        assert_eq!(regs.get(typec_ctl8::ADDR), 0x2a);
    }

    #[test]
    fn reserved_type_c_mode_code() {
        let (mut charger, regs) = charger();
        regs.set(typec_ctl8::ADDR, 0x80);

        assert_eq!(
            charger.type_c_mode(),
            Err(Error::UnknownValue {
                register: typec_ctl8::ADDR,
                raw: 2
            })
        );
    }

    #[test]
    fn pdo_current_output_is_written_blind() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![0x23, 0b1000_0101]),
            I2cTransaction::write_read(ADDR, vec![0x23], vec![0b0110_0010]),
        ];
        let mut charger = Ip2366::new(I2cMock::new(&expectations));

        charger
            .set_pdo_current_output(PdoCurrentOutput {
                pdo_5v_iset: true,
                pdo_5v_3a: true,
                pdo_12v_iset: true,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            charger.pdo_current_output().unwrap(),
            PdoCurrentOutput {
                pdo_9v_iset: true,
                pps1_iset: true,
                pps2_iset: true,
                ..Default::default()
            }
        );

        charger.release().into_inner().done();
    }

    #[test]
    fn pdo_current_output_flags() {
        let (mut charger, regs) = charger();
        regs.set(typec_ctl9::ADDR, 0b1001_1010);

        assert!(!charger.is_pdo_5v_iset_enabled().unwrap());
        assert!(charger.is_pdo_9v_iset_enabled().unwrap());
        assert!(!charger.is_pdo_12v_iset_enabled().unwrap());
        assert!(charger.is_pdo_15v_iset_enabled().unwrap());
        assert!(charger.is_pdo_20v_iset_enabled().unwrap());
        assert!(!charger.is_pps1_iset_enabled().unwrap());
        assert!(!charger.is_pps2_iset_enabled().unwrap());
        assert!(charger.is_pdo_5v_3a_enabled().unwrap());
    }

    #[test]
    fn pdo_currents() {
        let (mut charger, regs) = charger();

        charger.set_pdo_current_5v(2000).unwrap();
        assert_eq!(regs.get(typec_ctl10::ADDR), 100);
        assert_eq!(charger.pdo_current_5v().unwrap(), 2000);

        charger.set_pdo_current_9v(4000).unwrap();
        assert_eq!(charger.pdo_current_9v().unwrap(), 3000);

        charger.set_pdo_current_12v(1510).unwrap();
        assert_eq!(charger.pdo_current_12v().unwrap(), 1500);

        charger.set_pdo_current_15v(3000).unwrap();
        assert_eq!(regs.get(typec_ctl13::ADDR), 150);
        assert_eq!(charger.pdo_current_15v().unwrap(), 3000);

        charger.set_pdo_current_20v(5000).unwrap();
        assert_eq!(regs.get(typec_ctl14::ADDR), 250);
        assert_eq!(charger.pdo_current_20v().unwrap(), 5000);
        charger.set_pdo_current_20v(6000).unwrap();
        assert_eq!(charger.pdo_current_20v().unwrap(), 5000);
    }

    #[test]
    fn pps_currents() {
        let (mut charger, regs) = charger();

        charger.set_pps1_current(3000).unwrap();
        assert_eq!(regs.get(typec_ctl23::ADDR), 60);
        assert_eq!(charger.pps1_current().unwrap(), 3000);

        charger.set_pps2_current(9000).unwrap();
        assert_eq!(regs.get(typec_ctl24::ADDR), 100);
        assert_eq!(charger.pps2_current().unwrap(), 5000);
    }

    #[test]
    fn source_pdos_keep_reserved_bits() {
        let (mut charger, regs) = charger();
        regs.set(typec_ctl17::ADDR, 0b1000_0001);

        let pdos = SourcePdos {
            pdo_9v: true,
            pdo_15v: true,
            pps2: true,
            ..Default::default()
        };
        charger.set_source_pdos(pdos).unwrap();
        assert_eq!(regs.get(typec_ctl17::ADDR), 0b1100_1011);
        assert_eq!(charger.source_pdos().unwrap(), pdos);

        assert!(charger.is_src_pdo_9v_enabled().unwrap());
        assert!(!charger.is_src_pdo_12v_enabled().unwrap());
        assert!(charger.is_src_pdo_15v_enabled().unwrap());
        assert!(!charger.is_src_pdo_20v_enabled().unwrap());
        assert!(!charger.is_src_pps1_enabled().unwrap());
        assert!(charger.is_src_pps2_enabled().unwrap());
    }

    #[test]
    fn pdo_plus_10ma_keeps_high_bits() {
        let (mut charger, regs) = charger();
        regs.set(typec_ctl18::ADDR, 0b1110_0000);

        let plus = PdoPlus10mA {
            pdo_5v: true,
            pdo_20v: true,
            ..Default::default()
        };
        charger.set_pdo_plus_10ma(plus).unwrap();
        assert_eq!(regs.get(typec_ctl18::ADDR), 0b1111_0001);
        assert_eq!(charger.pdo_plus_10ma().unwrap(), plus);

        assert!(charger.is_pdo_plus_10ma_5v_enabled().unwrap());
        assert!(!charger.is_pdo_plus_10ma_9v_enabled().unwrap());
        assert!(!charger.is_pdo_plus_10ma_12v_enabled().unwrap());
        assert!(!charger.is_pdo_plus_10ma_15v_enabled().unwrap());
        assert!(charger.is_pdo_plus_10ma_20v_enabled().unwrap());
    }
}
