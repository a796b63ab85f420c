//! Logging shims. Each macro forwards to `defmt` and/or `log` depending on the enabled features.
//! With neither enabled the arguments are only borrowed, so nothing is formatted and no global
//! logger is needed.

#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        #[cfg(feature = "defmt")]
        defmt::trace!($s $(, $x)*);
        #[cfg(feature = "log")]
        log::trace!($s $(, $x)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        let _ = ($( & $x ),*);
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        #[cfg(feature = "defmt")]
        defmt::debug!($s $(, $x)*);
        #[cfg(feature = "log")]
        log::debug!($s $(, $x)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        let _ = ($( & $x ),*);
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        #[cfg(feature = "defmt")]
        defmt::info!($s $(, $x)*);
        #[cfg(feature = "log")]
        log::info!($s $(, $x)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        let _ = ($( & $x ),*);
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        #[cfg(feature = "defmt")]
        defmt::warn!($s $(, $x)*);
        #[cfg(feature = "log")]
        log::warn!($s $(, $x)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        let _ = ($( & $x ),*);
    };
}
