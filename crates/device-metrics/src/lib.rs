// Copyright 2026 Element Creations Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

#![deny(missing_docs, rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

//! Screen metrics of Apple devices, looked up from user-agent strings
//!
//! This crate knows the screen size, pixel ratio and touch capability of
//! iPhones, iPod touches and iPads. Devices are recognized from the model
//! identifier some in-app browsers put in their user-agent (like
//! `iPhone11,6`), or from the bare family name followed by a semicolon (like
//! `iPhone;`), in which case the largest known device of the family is
//! assumed.
//!
//! ```
//! let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_1 like Mac OS X) \
//!           [FBAN/FBIOS;FBDV/iPhone11,6;FBMD/iPhone;FBSN/iOS]";
//! let device = device_metrics::find_device(ua).unwrap();
//! assert_eq!(device.description, "iPhone XS Max");
//! assert_eq!(device.metrics.width, 414);
//! ```

use std::sync::LazyLock;

mod pattern;
mod record;
mod registry;

pub use self::{
    pattern::{InvalidPatternError, Pattern, Token},
    record::{DeviceFamily, DeviceRecord, ScreenMetrics},
    registry::DeviceRegistry,
};

static REGISTRY: LazyLock<DeviceRegistry> = LazyLock::new(|| {
    // The built-in patterns are constants, and are checked by the test suite
    DeviceRegistry::builtin().expect("built-in device patterns should be valid")
});

/// The registry of all the known devices
#[must_use]
pub fn registry() -> &'static DeviceRegistry {
    &REGISTRY
}

/// All the known devices, in lookup order
#[must_use]
pub fn devices() -> &'static [DeviceRecord] {
    REGISTRY.devices()
}

/// Find the device described by a user-agent
///
/// Returns `None` if the user-agent doesn't match any known device.
#[must_use]
pub fn find_device(user_agent: &str) -> Option<&'static DeviceRecord> {
    REGISTRY.find(user_agent)
}
