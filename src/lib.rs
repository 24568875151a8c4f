#![doc(html_root_url = "https://docs.rs/gpio-pwm-switch/0.1.0")]

//! <h1 align="center">GPIO-PWM-SWITCH - PWM LED switch platform</h1>
//! <div style="text-align:center;font-style:italic;">A home-automation platform plugin exposing GPIO-driven PWM LED outputs as on/off switch entities - written in Rust.</div>
//!
//! # Features
//!
//! **Gpio-Pwm-Switch** is a Rust library that turns a list of switch configurations (pin, optional
//! PWM frequency, optional stable identifier) into switch entities a home-automation host can
//! register, command and restore across restarts.
//!
//! - Declarative [`config`] validation of the platform configuration block
//! - One [`PwmLed`](hardware::PwmLed) driver handle per configured pin, built over a pluggable
//!   [`GpioBackend`](io::GpioBackend)
//! - One [`PwmSwitch`](devices::PwmSwitch) entity per configuration entry, implementing the host
//!   [`SwitchEntity`](platform::SwitchEntity) capability interface (on/off commands, push updates,
//!   state restoration at added-to-host time)
//! - Batch registration through [`setup_platform`](platform::setup_platform)
//!
//! # Getting Started
//!
//! - Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! gpio-pwm-switch = "0.1.0"
//! ```
//!
//! - Wire the platform into your host (here on a Raspberry Pi, using the `rpi` feature):
//! ```ignore
//! use gpio_pwm_switch::config::PlatformConfig;
//! use gpio_pwm_switch::hardware::Gpio;
//! use gpio_pwm_switch::io::RppalBackend;
//! use gpio_pwm_switch::platform::setup_platform;
//!
//! let config = PlatformConfig::from_value(serde_json::json!({
//!     "switchs": [
//!         { "name": "Porch", "pin": 17, "frequency": 1000 },
//!         { "name": "Shed", "pin": 22, "unique_id": "shed_light" },
//!     ]
//! }))?;
//!
//! let gpio = Gpio::new(RppalBackend::new()?);
//! setup_platform(&gpio, &config, &mut my_registry)?;
//! ```
//!
//! The host then drives each registered entity: it calls the async
//! [`on_added`](platform::SwitchEntity::on_added) hook once (restoring the last known on/off
//! state without touching the hardware), and dispatches
//! [`turn_on`](platform::SwitchEntity::turn_on) / [`turn_off`](platform::SwitchEntity::turn_off)
//! commands afterwards.
//!
//! # Feature flags
//!
//! - **rpi** -- Provides `RppalBackend`, a Raspberry Pi implementation of the GPIO backend using
//!   software PWM.
//! - **mocks** -- Provides mocked collaborators of all kinds (useful for tests mostly).

pub mod config;
pub mod devices;
pub mod errors;
pub mod hardware;
pub mod io;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod platform;
