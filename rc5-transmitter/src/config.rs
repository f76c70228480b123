/// Duty cycle used when the caller has no preference.
pub const DUTY_DEFAULT: u8 = 50;
pub const DUTY_MAX: u8 = 100;
/// Longest delay a single microsecond delay call handles accurately.
pub const MAX_ACCURATE_USEC_DELAY: u32 = 16383;

/// Targets with a measured software PWM calibration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Generic ESP-WROOM-32 @ 240 MHz
    Esp32,
    /// ESP8266 NodeMCU v2 @ 160 MHz
    Esp8266Mhz160,
    /// ESP8266 Wemos D1 mini @ 80 MHz
    Esp8266Mhz80,
    Uncalibrated,
}

impl Platform {
    /// Microseconds added to each carrier period to account for the time
    /// spent toggling the pin.
    pub const fn period_offset(self) -> i8 {
        match self {
            Platform::Esp32 => -2,
            Platform::Esp8266Mhz160 => -2,
            Platform::Esp8266Mhz80 => -5,
            Platform::Uncalibrated => 0,
        }
    }
}

/// Timing behavior of the transmitter, fixed at start-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Modulate marks with the carrier. When false, marks hold the LED on.
    pub modulation: bool,
    pub period_offset: i8,
    /// Apply `period_offset` when computing the carrier period.
    pub use_period_offset: bool,
    pub max_accurate_delay_us: u32,
    /// Split long delays into millisecond delays, which keeps a watchdog fed
    /// on platforms that service it from the delay routine.
    pub allow_delay_calls: bool,
}

impl TimingConfig {
    pub const fn new(platform: Platform) -> Self {
        Self {
            modulation: true,
            period_offset: platform.period_offset(),
            use_period_offset: false,
            max_accurate_delay_us: MAX_ACCURATE_USEC_DELAY,
            allow_delay_calls: true,
        }
    }

    pub const fn with_modulation(mut self, modulation: bool) -> Self {
        self.modulation = modulation;
        self
    }

    pub const fn with_period_offset(mut self, enable: bool) -> Self {
        self.use_period_offset = enable;
        self
    }

    pub const fn with_delay_calls(mut self, allow: bool) -> Self {
        self.allow_delay_calls = allow;
        self
    }

    /// Offset to apply to the carrier period.
    pub const fn effective_offset(&self) -> i8 {
        if self.use_period_offset {
            self.period_offset
        } else {
            0
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::new(Platform::Uncalibrated)
    }
}
