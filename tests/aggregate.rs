//! 건물 집계(체적/외피 면적) 회귀 테스트.
use building_energy_toolbox::building::{
    aggregate, transmission_heat_transfer, ProjectStats, Surface, Zone,
};

fn assert_close(label: &str, actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9,
        "{label} expected {expected} got {actual}"
    );
}

fn excluded(mut zone: Zone) -> Zone {
    zone.is_excluded = true;
    zone
}

#[test]
fn empty_inputs_give_zero() {
    let stats = aggregate(&[], &[]);
    assert_eq!(stats, ProjectStats::default());
    assert_eq!(stats.total_volume, 0.0);
    assert_eq!(stats.total_envelope_area, 0.0);
}

#[test]
fn volume_from_area_and_height() {
    let stats = aggregate(&[Zone::new("z1", 10.0, 3.0)], &[]);
    assert_close("volume", stats.total_volume, 30.0);
}

#[test]
fn explicit_volume_wins() {
    let mut zone = Zone::new("z1", 10.0, 3.0);
    zone.volume = Some(42.0);
    let stats = aggregate(&[zone], &[]);
    assert_close("volume", stats.total_volume, 42.0);
}

#[test]
fn excluded_zone_contributes_no_volume() {
    let stats = aggregate(&[excluded(Zone::new("z1", 10.0, 3.0))], &[]);
    assert_eq!(stats.total_volume, 0.0);
}

#[test]
fn excluded_zone_ignores_explicit_volume() {
    let mut zone = Zone::new("z1", 10.0, 3.0);
    zone.volume = Some(120.0);
    let stats = aggregate(&[excluded(zone), Zone::new("z2", 4.0, 2.5)], &[]);
    assert_close("volume", stats.total_volume, 10.0);
}

#[test]
fn excluded_zone_surfaces_are_dropped() {
    let zones = [excluded(Zone::new("z1", 10.0, 3.0))];
    let surfaces = [
        Surface::new("s1", Some("z1"), 20.0, 0.3),
        Surface::new("s2", None, 5.0, 0.3),
    ];
    let stats = aggregate(&zones, &surfaces);
    assert_close("envelope", stats.total_envelope_area, 5.0);
}

#[test]
fn unknown_zone_reference_is_counted() {
    let zones = [Zone::new("z1", 10.0, 3.0), excluded(Zone::new("z2", 8.0, 2.5))];
    let surfaces = [
        Surface::new("s1", Some("z1"), 12.0, 0.2),
        Surface::new("s2", Some("z2"), 7.0, 0.2),
        Surface::new("s3", Some("ghost"), 3.0, 0.2),
    ];
    let stats = aggregate(&zones, &surfaces);
    assert_close("volume", stats.total_volume, 30.0);
    assert_close("envelope", stats.total_envelope_area, 15.0);
}

#[test]
fn surfaces_without_zones_still_count() {
    let surfaces = [Surface::new("s1", None, 4.0, 1.0), Surface::new("s2", Some("z9"), 6.0, 1.0)];
    let stats = aggregate(&[], &surfaces);
    assert_eq!(stats.total_volume, 0.0);
    assert_close("envelope", stats.total_envelope_area, 10.0);
}

#[test]
fn inputs_are_not_mutated_and_result_is_repeatable() {
    let zones = vec![Zone::new("z1", 12.5, 2.7), excluded(Zone::new("z2", 9.0, 3.1))];
    let surfaces = vec![
        Surface::new("s1", Some("z1"), 33.3, 0.24),
        Surface::new("s2", Some("z2"), 11.1, 0.24),
    ];
    let zones_before = zones.clone();
    let surfaces_before = surfaces.clone();

    let a = aggregate(&zones, &surfaces);
    let b = aggregate(&zones, &surfaces);
    assert_eq!(a.total_volume.to_bits(), b.total_volume.to_bits());
    assert_eq!(a.total_envelope_area.to_bits(), b.total_envelope_area.to_bits());
    assert_eq!(zones, zones_before);
    assert_eq!(surfaces, surfaces_before);
}

#[test]
fn transmission_uses_counted_surfaces() {
    let zones = [Zone::new("z1", 10.0, 3.0), excluded(Zone::new("z2", 5.0, 3.0))];
    let surfaces = [
        Surface::new("wall", Some("z1"), 20.0, 0.25),
        Surface::new("window", Some("z1"), 4.0, 1.1),
        Surface::new("shed", Some("z2"), 30.0, 2.0),
    ];
    let stats = aggregate(&zones, &surfaces);
    let h_t = transmission_heat_transfer(&zones, &surfaces);
    assert_close("H_T", h_t, 20.0 * 0.25 + 4.0 * 1.1);
    let specific = stats.specific_transmission(h_t).expect("envelope area > 0");
    assert_close("H_T'", specific, h_t / 24.0);
    assert_eq!(ProjectStats::default().specific_transmission(1.0), None);
}
