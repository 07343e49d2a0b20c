use tex_unpacker_core::prelude::*;

#[test]
fn page_attributes_and_sprite_groups_parse() {
    let text = "sheet.png\n\
                size: 100,100\n\
                hero\n\
                  rotate: false\n\
                  xy: 0, 0\n\
                  size: 32, 48\n\
                villain\n\
                  rotate: true\n\
                  xy: 32, 0\n\
                  size: 48, 32\n";
    let parsed = parse_atlas(text, "sheet");
    assert_eq!(parsed.image_file.as_deref(), Some("sheet.png"));
    // the unindented `size: 100,100` page attribute opens no region
    assert_eq!(parsed.regions.len(), 2);

    let hero = &parsed.regions[0];
    assert_eq!(hero.atlas, "sheet");
    assert_eq!(hero.name, "hero");
    assert!(!hero.rotate);
    assert_eq!(hero.xy, Point::new(0, 0));
    assert_eq!(hero.size, Extent::new(32, 48));

    let villain = &parsed.regions[1];
    assert_eq!(villain.name, "villain");
    assert!(villain.rotate);
    assert_eq!(villain.xy, Point::new(32, 0));
    assert_eq!(villain.size, Extent::new(48, 32));
}

#[test]
fn crlf_line_endings_parse_the_same() {
    let lf = "sheet.png\nhero\n  xy: 1, 2\n";
    let crlf = "sheet.png\r\nhero\r\n  xy: 1, 2\r\n";
    assert_eq!(parse_regions(lf, "a"), parse_regions(crlf, "a"));
}

#[test]
fn one_region_per_sprite_name_line_in_source_order() {
    let text = "page.png\na\nb\nc\n";
    let regions = parse_regions(text, "page");
    let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn stray_repeated_filename_opens_no_region() {
    let text = "image.png\n\
                hero\n\
                image.png\n\
                image\n\
                  xy: 1, 2\n";
    let parsed = parse_atlas(text, "a");
    assert_eq!(parsed.regions.len(), 1);
    // the stray lines did not finalize `hero`; the attribute still applies
    assert_eq!(parsed.regions[0].name, "hero");
    assert_eq!(parsed.regions[0].xy, Point::new(1, 2));
}

#[test]
fn filename_skip_is_exact_match_only() {
    let parsed = parse_atlas("Sheet.PNG\nsheet.png\n", "a");
    assert_eq!(parsed.image_file.as_deref(), Some("Sheet.PNG"));
    // differing case is not the recorded filename, so it names a sprite
    assert_eq!(parsed.regions.len(), 1);
    assert_eq!(parsed.regions[0].name, "sheet.png");
}

#[test]
fn header_claim_works_after_a_sprite_started() {
    let parsed = parse_atlas("hero\nsheet.png\nvillain\n", "a");
    assert_eq!(parsed.image_file.as_deref(), Some("sheet.png"));
    let names: Vec<&str> = parsed.regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["hero", "villain"]);
}

#[test]
fn header_is_claimed_at_most_once() {
    let parsed = parse_atlas("sheet.png\nother.png\n", "a");
    assert_eq!(parsed.image_file.as_deref(), Some("sheet.png"));
    // a later image-named candidate is an ordinary sprite name
    assert_eq!(parsed.regions.len(), 1);
    assert_eq!(parsed.regions[0].name, "other.png");
}

#[test]
fn image_extension_match_is_case_insensitive() {
    let parsed = parse_atlas("SHEET.JPEG\nhero\n", "a");
    assert_eq!(parsed.image_file.as_deref(), Some("SHEET.JPEG"));
    assert_eq!(parsed.regions.len(), 1);
}

#[test]
fn missing_header_is_tolerated() {
    let parsed = parse_atlas("hero\n  xy: 3, 4\n", "a");
    assert_eq!(parsed.image_file, None);
    assert_eq!(parsed.regions.len(), 1);
    assert_eq!(parsed.regions[0].xy, Point::new(3, 4));
}

#[test]
fn indented_name_like_line_is_not_a_sprite() {
    let regions = parse_regions("page.png\nhero\n\tvillain\n", "a");
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].name, "hero");
}

#[test]
fn empty_and_blank_input_yield_no_regions() {
    assert!(parse_regions("", "a").is_empty());
    assert!(parse_regions("\n\n   \n", "a").is_empty());
}
