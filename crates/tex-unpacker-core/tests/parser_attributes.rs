use tex_unpacker_core::prelude::*;

fn single(text: &str) -> Region {
    let mut regions = parse_regions(text, "a");
    assert_eq!(regions.len(), 1, "expected exactly one region");
    regions.remove(0)
}

#[test]
fn xy_and_size_accept_flexible_whitespace() {
    let region = single("hero\n  xy:10,20\n  size: 7, 9\n");
    assert_eq!(region.xy, Point::new(10, 20));
    assert_eq!(region.size, Extent::new(7, 9));
}

#[test]
fn malformed_pair_keeps_previous_value() {
    let region = single("hero\n  xy: 10, 20\n  xy: bad\n");
    assert_eq!(region.xy, Point::new(10, 20));

    let region = single("hero\n  xy: nope\n");
    assert_eq!(region.xy, Point::new(0, 0));
}

#[test]
fn trailing_garbage_after_the_pair_is_ignored() {
    let region = single("hero\n  xy: 10, 20, 30\n  size: 4,5abc\n");
    assert_eq!(region.xy, Point::new(10, 20));
    assert_eq!(region.size, Extent::new(4, 5));
}

#[test]
fn whitespace_before_the_comma_does_not_match() {
    let region = single("hero\n  xy: 10 , 20\n");
    assert_eq!(region.xy, Point::new(0, 0));
}

#[test]
fn later_key_occurrence_can_still_match() {
    let region = single("hero\n  xy: bad, then xy: 1, 2\n");
    assert_eq!(region.xy, Point::new(1, 2));
}

#[test]
fn rotate_is_true_iff_the_line_contains_true() {
    assert!(single("hero\n  rotate: true\n").rotate);
    assert!(single("hero\n  rotate: [true]\n").rotate);
    assert!(!single("hero\n  rotate: false\n").rotate);
    assert!(!single("hero\n  rotate: 90\n").rotate);
    // no rotate line at all
    assert!(!single("hero\n  xy: 1, 2\n").rotate);
}

#[test]
fn unknown_attribute_keys_are_ignored() {
    let region = single("hero\n  offset: 5, 5\n  split: 1, 2, 3, 4\n  xy: 8, 9\n");
    assert_eq!(region.xy, Point::new(8, 9));
    assert_eq!(region.size, Extent::new(0, 0));
}

#[test]
fn attributes_before_any_sprite_are_ignored() {
    let region = single("  xy: 3, 4\nhero\n");
    assert_eq!(region.name, "hero");
    assert_eq!(region.xy, Point::new(0, 0));
}

#[test]
fn out_of_range_pair_is_treated_as_no_match() {
    let region = single("hero\n  xy: 5, 6\n  xy: 99999999999999999999, 1\n");
    assert_eq!(region.xy, Point::new(5, 6));
}
