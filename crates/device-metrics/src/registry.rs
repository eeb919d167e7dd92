// Copyright 2026 Element Creations Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! The ordered list of known devices
//!
//! Mobile Safari does not include the model identifier in its user-agent, but
//! some in-app browsers (like the one of the Facebook iOS app) do. Entries
//! matching model identifiers come first, and each family gets a fallback entry
//! at the end, with the metrics of its largest device.

use crate::{
    pattern::InvalidPatternError,
    record::{DeviceFamily, DeviceRecord, ScreenMetrics},
};

/// Specific models, as `(family, description, pattern, width, height, ratio)`
const MODELS: &[(DeviceFamily, &str, &str, u32, u32, u32)] = &[
    (DeviceFamily::IPhone, "iPhone XS Max", r"iPhone11,6", 414, 896, 3),
    (DeviceFamily::IPhone, "iPhone XR", r"iPhone11,8", 414, 896, 2),
    (DeviceFamily::IPhone, "iPhone X, XS", r"iPhone(10,[36]|11,2)", 375, 812, 3),
    (
        DeviceFamily::IPhone,
        "Apple iPhone 6 Plus, 6S Plus, 7 Plus, 8 Plus",
        r"iPhone(7,1|8,2|9,[24]|10,[25])",
        414,
        736,
        3,
    ),
    (
        DeviceFamily::IPhone,
        "iPhone 6, 6S, 7, 8",
        r"iPhone(7,2|8,1|9,3|10,[14])",
        375,
        667,
        2,
    ),
    (
        DeviceFamily::IPhone,
        "iPhone 5, 5S, 5C, SE",
        r"iPhone(5,[1234]|6,[12]|8,4)",
        320,
        568,
        2,
    ),
    (
        DeviceFamily::IPhone,
        "iPhone 3, 3GS, 4, 4S",
        r"iPhone(1,2|2,1|3,[123]|4,1)",
        320,
        480,
        1,
    ),
    (
        DeviceFamily::IPodTouch,
        "iPod touch 5th, 6th generations",
        r"iPod(5,1|7,1)",
        320,
        568,
        2,
    ),
    (
        DeviceFamily::IPodTouch,
        "iPod touch 4th generation",
        r"iPod4,1",
        320,
        480,
        2,
    ),
    (
        DeviceFamily::IPodTouch,
        "iPod touch 1st, 2nd, 3rd generations",
        r"iPod(1,1|2,1|3,1)",
        320,
        480,
        1,
    ),
    (
        DeviceFamily::IPad,
        "iPad 1, 2, Mini",
        r"iPad(1,1|2,1|2,5)",
        1024,
        768,
        1,
    ),
    (
        DeviceFamily::IPad,
        "iPad 3, 4, Air, Mini 2, Mini 3, Mini 4, Air 2, Pro 9.7-inch, 5, 6",
        r"iPad(3,[1-6]|4,[1-9]|5,[1-4]|6,[34]|6,1[12]|7,[56])",
        1024,
        768,
        2,
    ),
    (
        DeviceFamily::IPad,
        "iPad Pro 12.9-inch 1st, 2nd, 3rd generations",
        r"iPad(6,[78]|7,[12]|8,[5-8])",
        1024,
        1366,
        2,
    ),
    (DeviceFamily::IPad, "iPad Pro 10.5-inch", r"iPad7,[34]", 834, 1112, 2),
    (DeviceFamily::IPad, "iPad Pro 11-inch", r"iPad8,[1-4]", 834, 1194, 2),
];

/// An immutable, ordered list of devices
///
/// Lookups return the first matching entry, so entries for specific models
/// always come before the fallback entries of their family.
#[derive(Debug)]
pub struct DeviceRegistry {
    devices: Vec<DeviceRecord>,
}

impl DeviceRegistry {
    /// Build a registry out of a list of specific models
    ///
    /// The models are kept in order, and followed by one fallback entry per
    /// [`DeviceFamily`]. Fallback entries already present in the input are not
    /// considered when computing the new ones.
    #[must_use]
    pub fn new(models: Vec<DeviceRecord>) -> Self {
        let fallbacks: Vec<DeviceRecord> = DeviceFamily::ALL
            .into_iter()
            .map(|family| derive_fallback(&models, family))
            .collect();

        let mut devices = models;
        devices.extend(fallbacks);
        Self { devices }
    }

    /// Build the registry of all the known Apple devices
    ///
    /// # Errors
    ///
    /// Returns an error if one of the built-in patterns is invalid
    pub fn builtin() -> Result<Self, InvalidPatternError> {
        let models = MODELS
            .iter()
            .map(|&(family, description, pattern, width, height, pixel_ratio)| {
                DeviceRecord::model(
                    family,
                    description,
                    pattern,
                    ScreenMetrics::new(width, height, pixel_ratio),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(models))
    }

    /// Find the first device matching the user-agent
    ///
    /// Returns `None` if no device matched, which is expected for anything
    /// which isn't an Apple mobile device.
    #[must_use]
    pub fn find(&self, user_agent: &str) -> Option<&DeviceRecord> {
        let device = self
            .devices
            .iter()
            .find(|device| device.is_match(user_agent));

        if device.is_none() {
            tracing::trace!(user_agent, "No device matched the user-agent");
        }

        device
    }

    /// All the devices, in lookup order
    #[must_use]
    pub fn devices(&self) -> &[DeviceRecord] {
        &self.devices
    }

    /// Iterate over the devices, in lookup order
    pub fn iter(&self) -> std::slice::Iter<'_, DeviceRecord> {
        self.devices.iter()
    }

    /// Number of devices, including fallback entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the registry has no device at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl<'a> IntoIterator for &'a DeviceRegistry {
    type Item = &'a DeviceRecord;
    type IntoIter = std::slice::Iter<'a, DeviceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compute the fallback entry of a family, assuming its largest device
fn derive_fallback(models: &[DeviceRecord], family: DeviceFamily) -> DeviceRecord {
    let members = models
        .iter()
        .filter(|device| device.family == family && !device.fallback);

    let mut count = 0_usize;
    let metrics = members.fold(ScreenMetrics::ZERO, |acc, device| {
        count += 1;
        acc.union(device.metrics)
    });

    if count == 0 {
        tracing::warn!(%family, "No device in family, fallback entry has empty metrics");
    } else {
        tracing::debug!(
            %family,
            count,
            width = metrics.width,
            height = metrics.height,
            pixel_ratio = metrics.pixel_ratio,
            "Derived fallback device"
        );
    }

    DeviceRecord::fallback(family, metrics)
}
