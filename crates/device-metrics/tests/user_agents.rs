// Copyright 2026 Element Creations Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::collections::BTreeMap;

use device_metrics::{ScreenMetrics, devices, find_device};

/// Sample user-agents, keyed by the description of the device they come from
fn fixtures() -> BTreeMap<String, Vec<String>> {
    serde_json::from_str(include_str!("fixtures/user-agents.json")).unwrap()
}

#[test]
fn test_recognizes_every_sample() {
    for (description, user_agents) in fixtures() {
        for (i, user_agent) in user_agents.iter().enumerate() {
            let device = find_device(user_agent)
                .unwrap_or_else(|| panic!("{description} - user_agents[{i}] did not match"));
            assert_eq!(device.description, description, "user_agents[{i}]");
        }
    }
}

#[test]
fn test_every_device_has_samples() {
    let fixtures = fixtures();
    for device in devices() {
        assert!(
            fixtures.get(&device.description).is_some_and(|uas| !uas.is_empty()),
            "no sample user-agent for {:?}",
            device.description
        );
    }
}

#[test]
fn test_model_identifiers_win_over_family_token() {
    // Every in-app sample also carries the bare family token
    for (description, user_agents) in fixtures() {
        for user_agent in user_agents {
            let device = find_device(&user_agent).unwrap();
            if device.fallback {
                continue;
            }

            let fallback = devices()
                .iter()
                .find(|d| d.fallback && d.family == device.family)
                .unwrap();
            assert!(fallback.is_match(&user_agent), "{description}: {user_agent}");
        }
    }
}

#[test]
fn test_fallback_metrics() {
    let cases = [
        ("iPhone", ScreenMetrics::new(414, 896, 3)),
        ("iPod touch", ScreenMetrics::new(320, 568, 2)),
        ("iPad", ScreenMetrics::new(1024, 1366, 2)),
    ];

    let fixtures = fixtures();
    for (description, metrics) in cases {
        let user_agent = &fixtures[description][0];
        let device = find_device(user_agent).unwrap();
        assert_eq!(device.description, description);
        assert_eq!(device.metrics, metrics);
        assert!(device.touch);
    }
}

#[test]
fn test_serializes_the_whole_registry() {
    let json = serde_json::to_value(devices()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 18);
    assert_eq!(entries[0]["description"], "iPhone XS Max");
    assert_eq!(entries[0]["pattern"], "iPhone11,6");
    assert_eq!(entries[0]["pixelRatio"], 3);
    assert_eq!(entries[17]["description"], "iPad");
    assert_eq!(entries[17]["pattern"], "iPad;");
    assert_eq!(entries[17]["fallback"], true);
}
