//! Property-based tests for rack distribution and device admission.

use proptest::prelude::*;

use rackguard::{ConfigDocument, DiffError, Rack, compute_rack_sizes, validate_configuration_update};
use serde_json::json;

fn racks_from(pins: &[Option<usize>]) -> Vec<Rack> {
    pins.iter()
        .enumerate()
        .map(|(index, pin)| Rack {
            id: index as u32 + 1,
            pinned_size: *pin,
        })
        .collect()
}

fn device_config(devices: &[String]) -> ConfigDocument {
    ConfigDocument::new(json!({
        "namespaces": [
            { "name": "ns0", "storage-engine": { "type": "device", "devices": devices } }
        ]
    }))
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn sizes_always_sum_to_total(
        pins in prop::collection::vec(prop::option::of(0usize..20), 1..12),
        slack in 0usize..200,
    ) {
        let racks = racks_from(&pins);
        let reserved: usize = pins.iter().flatten().sum();
        let flexible = pins.iter().filter(|pin| pin.is_none()).count();
        let total = if flexible == 0 { reserved } else { reserved + slack };

        let states = compute_rack_sizes(total, &racks).unwrap();
        prop_assert_eq!(states.len(), racks.len());
        prop_assert_eq!(states.iter().map(|state| state.size).sum::<usize>(), total);

        for (state, rack) in states.iter().zip(&racks) {
            prop_assert_eq!(&state.rack, rack);
            if let Some(pinned) = rack.pinned_size {
                prop_assert_eq!(state.size, pinned);
            }
        }
    }

    #[test]
    fn flexible_racks_differ_by_at_most_one(rack_count in 1usize..16, total in 0usize..500) {
        let racks = racks_from(&vec![None; rack_count]);
        let sizes: Vec<usize> = compute_rack_sizes(total, &racks)
            .unwrap()
            .iter()
            .map(|state| state.size)
            .collect();

        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        prop_assert!(max - min <= 1);
        // larger racks come first
        prop_assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn distribution_is_deterministic(
        pins in prop::collection::vec(prop::option::of(0usize..10), 0..10),
        total in 0usize..100,
    ) {
        let racks = racks_from(&pins);
        prop_assert_eq!(compute_rack_sizes(total, &racks), compute_rack_sizes(total, &racks));
    }

    #[test]
    fn removing_a_device_is_always_rejected(
        count in 1usize..12,
        removed in any::<prop::sample::Index>(),
        added in 0usize..4,
    ) {
        let devices: Vec<String> = (0..count).map(|i| format!("/dev/xvd{}", i)).collect();
        let removed = removed.index(count);

        let mut next: Vec<String> = devices
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != removed)
            .map(|(_, device)| device.clone())
            .collect();
        next.extend((0..added).map(|i| format!("/dev/new{}", i)));

        let err = validate_configuration_update(&device_config(&devices), &device_config(&next))
            .unwrap_err();
        prop_assert_eq!(
            err,
            DiffError::DeviceRemoved {
                namespace: "ns0".to_string(),
                device: devices[removed].clone(),
            }
        );
    }

    #[test]
    fn appending_devices_is_always_accepted(count in 0usize..12, added in 0usize..6) {
        let devices: Vec<String> = (0..count).map(|i| format!("/dev/xvd{}", i)).collect();
        let mut next = devices.clone();
        next.extend((0..added).map(|i| format!("/dev/new{}", i)));
        next.reverse();

        prop_assert!(
            validate_configuration_update(&device_config(&devices), &device_config(&next)).is_ok()
        );
    }
}
