use tex_unpacker_core::prelude::*;

#[test]
fn stats_count_rotation_and_logical_area() {
    let mut flat = Region::new("a", "flat");
    flat.size = Extent::new(50, 30);
    let mut spun = Region::new("a", "spun");
    spun.rotate = true;
    spun.size = Extent::new(48, 32);

    let stats = UnpackStats::from_regions(&[flat, spun]);
    assert_eq!(stats.num_regions, 2);
    assert_eq!(stats.num_rotated, 1);
    assert_eq!(stats.total_sprite_area, 50 * 30 + 48 * 32);
    // rotated region contributes its logical (swapped) dimensions
    assert_eq!(stats.max_sprite_width, 50);
    assert_eq!(stats.max_sprite_height, 48);

    let summary = stats.summary();
    assert!(summary.contains("Regions: 2"));
    assert!(summary.contains("Rotated: 1"));
}

#[test]
fn stats_of_nothing_are_zero() {
    let stats = UnpackStats::from_regions(&[]);
    assert_eq!(stats.num_regions, 0);
    assert_eq!(stats.total_sprite_area, 0);
}
