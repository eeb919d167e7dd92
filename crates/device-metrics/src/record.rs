// Copyright 2026 Element Creations Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::Serialize;

use crate::pattern::{self, InvalidPatternError, Pattern, Token};

/// A family of devices, which user-agents name without a model identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceFamily {
    /// iPhones
    #[serde(rename = "iPhone")]
    IPhone,

    /// iPod touches
    #[serde(rename = "iPod touch")]
    IPodTouch,

    /// iPads, including the iPad Mini, Air and Pro lines
    #[serde(rename = "iPad")]
    IPad,
}

impl DeviceFamily {
    /// All the families, in the order their fallback entries are registered
    pub const ALL: [Self; 3] = [Self::IPhone, Self::IPodTouch, Self::IPad];

    /// Human-readable name of the family, also used as the description of its
    /// fallback entry
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IPhone => "iPhone",
            Self::IPodTouch => "iPod touch",
            Self::IPad => "iPad",
        }
    }

    /// The family token as found in user-agents without a model identifier
    ///
    /// The trailing semicolon tells `iPhone;` apart from `iPhone11,6`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::IPhone => "iPhone;",
            Self::IPodTouch => "iPod touch;",
            Self::IPad => "iPad;",
        }
    }
}

impl std::fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Display characteristics of a device, in portrait orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenMetrics {
    /// Width, in logical pixels
    pub width: u32,

    /// Height, in logical pixels
    pub height: u32,

    /// Number of physical pixels per logical pixel
    pub pixel_ratio: u32,
}

impl ScreenMetrics {
    /// Empty metrics, the neutral element of [`ScreenMetrics::union`]
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Create a new set of metrics
    #[must_use]
    pub const fn new(width: u32, height: u32, pixel_ratio: u32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Componentwise maximum of two metrics
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
            pixel_ratio: self.pixel_ratio.max(other.pixel_ratio),
        }
    }
}

/// A recognizable device, or family of devices
#[derive(Debug, Serialize)]
pub struct DeviceRecord {
    /// Human-readable name, unique across the registry
    pub description: String,

    /// What to look for in the user-agent
    pub pattern: Box<dyn Pattern>,

    /// The family this device belongs to
    pub family: DeviceFamily,

    /// The screen of the device
    #[serde(flatten)]
    pub metrics: ScreenMetrics,

    /// Whether the device has a touch screen
    pub touch: bool,

    /// Whether this entry was derived from the other entries of its family
    pub fallback: bool,
}

impl DeviceRecord {
    /// Create an entry for one or more specific device models
    ///
    /// # Parameters
    ///
    /// * `family` - The family the models belong to
    /// * `description` - A human-readable name for the models
    /// * `pattern` - A regular expression matching the model identifiers
    /// * `metrics` - The screen metrics of the models
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regular expression
    pub fn model(
        family: DeviceFamily,
        description: impl Into<String>,
        pattern: &str,
        metrics: ScreenMetrics,
    ) -> Result<Self, InvalidPatternError> {
        Ok(Self {
            description: description.into(),
            pattern: Box::new(pattern::parse(pattern)?),
            family,
            metrics,
            touch: true,
            fallback: false,
        })
    }

    /// Create the fallback entry of a family, matching its bare family token
    #[must_use]
    pub fn fallback(family: DeviceFamily, metrics: ScreenMetrics) -> Self {
        Self {
            description: family.name().to_owned(),
            pattern: Box::new(Token::new(family.token())),
            family,
            metrics,
            touch: true,
            fallback: true,
        }
    }

    /// Whether this device is the one described by the user-agent
    #[must_use]
    pub fn is_match(&self, user_agent: &str) -> bool {
        self.pattern.is_match(user_agent)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_json_snapshot;

    use super::*;

    #[test]
    fn test_metrics_union() {
        let a = ScreenMetrics::new(414, 736, 3);
        let b = ScreenMetrics::new(375, 812, 3);
        assert_eq!(a.union(b), ScreenMetrics::new(414, 812, 3));
        assert_eq!(ScreenMetrics::ZERO.union(a), a);
        assert_eq!(ScreenMetrics::default(), ScreenMetrics::ZERO);
    }

    #[test]
    fn test_family_tokens() {
        for family in DeviceFamily::ALL {
            assert_eq!(family.token(), format!("{family};"));
        }
    }

    #[test]
    fn test_fallback_record() {
        let record = DeviceRecord::fallback(DeviceFamily::IPodTouch, ScreenMetrics::new(1, 2, 3));
        assert!(record.fallback);
        assert!(record.touch);
        assert!(record.is_match("Mozilla/5.0 (iPod touch; CPU iPhone OS 12_1 like Mac OS X)"));
        assert!(!record.is_match("Mozilla/5.0 (iPhone; CPU iPhone OS 12_1 like Mac OS X)"));

        assert_json_snapshot!(record, @r#"
        {
          "description": "iPod touch",
          "pattern": "iPod touch;",
          "family": "iPod touch",
          "width": 1,
          "height": 2,
          "pixelRatio": 3,
          "touch": true,
          "fallback": true
        }
        "#);
    }

    #[test]
    fn test_model_record() {
        let record = DeviceRecord::model(
            DeviceFamily::IPad,
            "iPad Pro 10.5-inch",
            r"iPad7,[34]",
            ScreenMetrics::new(834, 1112, 2),
        )
        .unwrap();
        assert!(!record.fallback);
        assert!(record.is_match("FBDV/iPad7,4;FBMD/iPad;"));
        assert!(!record.is_match("FBDV/iPad7,5;FBMD/iPad;"));

        assert_json_snapshot!(record, @r#"
        {
          "description": "iPad Pro 10.5-inch",
          "pattern": "iPad7,[34]",
          "family": "iPad",
          "width": 834,
          "height": 1112,
          "pixelRatio": 2,
          "touch": true,
          "fallback": false
        }
        "#);

        assert!(
            DeviceRecord::model(
                DeviceFamily::IPad,
                "broken",
                r"iPad7,[34",
                ScreenMetrics::ZERO
            )
            .is_err()
        );
    }
}
