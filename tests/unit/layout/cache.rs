use super::*;

#[test]
fn reset_sizes_and_clears_every_slot() {
    let mut cache = LayoutCache::default();
    cache.reset(3);
    cache.multipliers_mut(Axis::Horizontal).values[1] = Some(MultiplierSpan::FULL);
    cache.geometry_mut(Axis::Vertical).values[2] = Some(AxisGeometry {
        position: 1.0,
        length: 2.0,
    });
    cache.geometry_mut(Axis::Vertical).computed = 5;
    assert_eq!(cache.computations(), 5);

    cache.reset(4);
    assert_eq!(cache.computations(), 0);
    for axis in Axis::ALL {
        assert_eq!(cache.multipliers_mut(axis).values.len(), 4);
        assert!(cache.multipliers_mut(axis).values.iter().all(Option::is_none));
        assert!(cache.geometry_mut(axis).values.iter().all(Option::is_none));
        assert!(cache.geometry_mut(axis).visiting.iter().all(|v| !v));
    }
}

#[test]
fn ensure_len_keeps_entries_when_size_matches() {
    let mut cache = LayoutCache::default();
    cache.reset(2);
    cache.multipliers_mut(Axis::Vertical).values[1] = Some(MultiplierSpan::FULL);
    cache.ensure_len(2);
    assert!(cache.multipliers_mut(Axis::Vertical).values[1].is_some());
    cache.ensure_len(3);
    assert!(cache.multipliers_mut(Axis::Vertical).values[1].is_none());
}
