#![no_std]
#![no_main]

mod config;

use defmt_rtt as _; // global logger
use panic_probe as _;

#[rtic::app(device = nrf52840_hal::pac, dispatchers = [SWI0_EGU0, SWI1_EGU1])]
mod app {
    use crate::config;
    use nrf52840_hal as hal;
    use systick_monotonic::*;

    use hal::{
        gpio::{Output, Pin, PushPull},
        pac::TWIM0,
        Twim,
    };

    use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin};

    use ip2366::{I2cBus, Ip2366};

    defmt::timestamp!("{=u64:us}", { monotonics::now().ticks() * 1000 });

    type Charger = Ip2366<I2cBus<Twim<TWIM0>>>;
    type Result<T> = ip2366::Result<T, hal::twim::Error>;

    #[local]
    struct Local {
        charger: Charger,
        led: Pin<Output<PushPull>>,
    }

    #[shared]
    struct Shared {}

    #[monotonic(binds = SysTick, default = true)]
    type SystickMonotonic = Systick<1000>; // 1000 Hz / 1 ms granularity

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        let cm_peripherals = cx.core;
        let peripherals = cx.device;

        let _clocks = hal::clocks::Clocks::new(peripherals.CLOCK).enable_ext_hfosc();
        let mono = Systick::new(cm_peripherals.SYST, 64_000_000);

        let p0 = hal::gpio::p0::Parts::new(peripherals.P0);
        let p1 = hal::gpio::p1::Parts::new(peripherals.P1);
        let scl = p1.p1_06.into_floating_input().degrade();
        let sda = p1.p1_05.into_floating_input().degrade();

        let pins = hal::twim::Pins { scl, sda };
        let twim = Twim::new(peripherals.TWIM0, pins, config::I2C_FREQUENCY);

        let led = p0
            .p0_29
            .into_push_pull_output(hal::gpio::Level::High)
            .degrade();

        let mut charger = Ip2366::new_with_address(twim, config::CHARGER_ADDRESS);
        match apply_profile(&mut charger) {
            Ok(()) => defmt::info!("IP2366 configured"),
            Err(err) => defmt::error!(
                "IP2366 configuration failed: {}",
                defmt::Debug2Format(&err)
            ),
        }

        monitor_task::spawn().unwrap();
        led_task::spawn_after(1.secs()).unwrap();

        (Shared {}, Local { charger, led }, init::Monotonics(mono))
    }

    fn apply_profile(charger: &mut Charger) -> Result<()> {
        charger.begin()?;

        let timenode = charger.timenode()?;
        match timenode.as_str() {
            Some(stamp) => defmt::info!("IP2366 firmware {}", stamp),
            None => defmt::info!("IP2366 firmware {=[u8]:x}", timenode.as_bytes()),
        }

        charger.set_full_charge_voltage(config::FULL_CHARGE_VOLTAGE_MV)?;
        charger.set_max_input_power_or_battery_current(config::CHARGE_CURRENT_MA)?;
        charger.set_charge_stop_current(config::CHARGE_STOP_CURRENT_MA)?;
        charger.set_low_battery_voltage(config::LOW_BATTERY_VOLTAGE_MV)?;
        charger.set_type_c_mode(config::TYPE_C_MODE)?;
        charger.set_max_output_power(config::MAX_OUTPUT_POWER)?;
        charger.set_output_features(config::OUTPUT_FEATURES)?;
        charger.enable_charger(true)?;

        defmt::info!(
            "VSET {} mV, ISET {} mA, ISTOP {} mA, output {}",
            charger.full_charge_voltage()?,
            charger.max_input_power_or_battery_current()?,
            charger.charge_stop_current()?,
            charger.max_output_power()?
        );
        Ok(())
    }

    fn log_status(charger: &mut Charger) -> Result<()> {
        let status = charger.charge_status()?;
        let vbat = charger.battery_voltage()?;
        let ibat = charger.battery_current()?;
        let power = charger.system_power()?;
        defmt::info!(
            "{}: VBAT {} mV, IBAT {} mA, PSYS {} mW",
            status,
            vbat,
            ibat,
            power
        );

        if charger.is_vbus_present()? {
            defmt::info!(
                "VBUS {} mV, {}, {}",
                charger.charge_input_voltage()?,
                charger.type_c_status()?,
                charger.received_pdos()?
            );
        }

        if charger.is_over_heat()? {
            defmt::warn!("NTC over-heat, {} mV", charger.ntc_voltage()?);
        }
        if charger.is_vsys_over_current()? || charger.is_vsys_short_circuit()? {
            defmt::warn!("VSYS fault");
        }
        Ok(())
    }

    #[idle]
    fn idle_task(_: idle_task::Context) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }

    #[task(local = [charger], priority = 1)]
    fn monitor_task(cx: monitor_task::Context) {
        let monitor_task::LocalResources { charger } = cx.local;

        if let Err(err) = log_status(charger) {
            defmt::warn!("IP2366 status read failed: {}", defmt::Debug2Format(&err));
        }

        monitor_task::spawn_after(config::MONITOR_PERIOD_MS.millis()).unwrap();
    }

    #[task(local = [led], priority = 1)]
    fn led_task(cx: led_task::Context) {
        let led_task::LocalResources { led } = cx.local;
        if led.is_set_high().unwrap() {
            led.set_low().unwrap();
        } else {
            led.set_high().unwrap();
        }
        led_task::spawn_after(1.secs()).unwrap();
    }
}
