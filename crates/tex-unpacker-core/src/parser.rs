//! Line-oriented parser for packed sprite-sheet index files.
//!
//! The format interleaves one page-image filename header with groups of
//! {sprite-name line, indented `key: value` attribute lines}. Nothing but
//! leading whitespace and colon usage distinguishes the line kinds, so all
//! precedence lives in [`classify`] and [`Parser::push_line`]:
//!
//! - unindented, colon-free, non-empty lines are name/header candidates;
//! - the first candidate ending in an image extension claims the header slot,
//!   at most once per parse;
//! - every other candidate opens a region, unless it repeats the recorded
//!   header filename (with or without extension); such stray lines are
//!   dropped;
//! - everything else updates the open region, if any.
//!
//! Malformed attribute lines never fail the parse; the affected field just
//! keeps its previous value.

use crate::model::{Extent, Point, Region};

/// Result of parsing one atlas index: the page-image filename recorded from
/// the header line (if any) and the regions in source order.
#[derive(Debug, Clone, Default)]
pub struct ParsedAtlas {
    pub image_file: Option<String>,
    pub regions: Vec<Region>,
}

/// Parses `text` (any line endings) and returns the regions in source order,
/// each stamped with `atlas_name`. Empty input yields an empty list.
pub fn parse_regions(text: &str, atlas_name: &str) -> Vec<Region> {
    parse_atlas(text, atlas_name).regions
}

/// Like [`parse_regions`], but also reports the page-image filename the
/// header line named, so callers can locate the sheet image.
pub fn parse_atlas(text: &str, atlas_name: &str) -> ParsedAtlas {
    let mut parser = Parser::new(atlas_name);
    for line in text.lines() {
        parser.push_line(line);
    }
    parser.finish()
}

/// Classification of one raw (untrimmed) line, in rule order.
#[derive(Debug, PartialEq, Eq)]
enum LineClass<'a> {
    /// Whitespace-only; no effect in any state.
    Blank,
    /// Indented or colon-bearing: updates the open region, never starts one.
    Attribute(&'a str),
    /// Unindented and colon-free: page-image header or sprite name.
    Candidate(&'a str),
}

fn classify(raw: &str) -> LineClass<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    let indented = raw.chars().next().is_some_and(char::is_whitespace);
    if indented || trimmed.contains(':') {
        LineClass::Attribute(trimmed)
    } else {
        LineClass::Candidate(trimmed)
    }
}

struct Parser<'a> {
    atlas: &'a str,
    /// Recorded header filename and its extension-stripped form. Set at most
    /// once; both are compared by exact equality when dropping stray repeats.
    image_file: Option<String>,
    image_stem: Option<String>,
    current: Option<Region>,
    regions: Vec<Region>,
}

impl<'a> Parser<'a> {
    fn new(atlas: &'a str) -> Self {
        Self {
            atlas,
            image_file: None,
            image_stem: None,
            current: None,
            regions: Vec::new(),
        }
    }

    fn push_line(&mut self, raw: &str) {
        match classify(raw) {
            LineClass::Blank => {}
            LineClass::Candidate(name) => self.push_candidate(name),
            LineClass::Attribute(attr) => self.push_attribute(attr),
        }
    }

    fn push_candidate(&mut self, name: &str) {
        if self.image_file.is_none() {
            if let Some(stem) = strip_image_ext(name) {
                self.image_stem = Some(stem.to_string());
                self.image_file = Some(name.to_string());
                return;
            }
        }
        if self.is_recorded_image(name) {
            // stray repeated filename line, not a new sprite
            return;
        }
        self.finalize_region();
        self.current = Some(Region::new(self.atlas, name));
    }

    fn push_attribute(&mut self, attr: &str) {
        let Some(region) = self.current.as_mut() else {
            return;
        };
        if attr.starts_with("rotate") {
            region.rotate = attr.contains("true");
        } else if attr.starts_with("xy:") {
            if let Some((x, y)) = pair_after_key(attr, "xy:") {
                region.xy = Point::new(x, y);
            }
        } else if attr.starts_with("size:") {
            if let Some((w, h)) = pair_after_key(attr, "size:") {
                region.size = Extent::new(w, h);
            }
        }
        // unrecognized keys are ignored
    }

    fn is_recorded_image(&self, name: &str) -> bool {
        self.image_file.as_deref() == Some(name) || self.image_stem.as_deref() == Some(name)
    }

    fn finalize_region(&mut self) {
        if let Some(region) = self.current.take() {
            self.regions.push(region);
        }
    }

    fn finish(mut self) -> ParsedAtlas {
        self.finalize_region();
        ParsedAtlas {
            image_file: self.image_file,
            regions: self.regions,
        }
    }
}

/// Returns the name with its image extension (`.png`/`.jpg`/`.jpeg`,
/// case-insensitive) removed, or `None` if it carries none.
fn strip_image_ext(name: &str) -> Option<&str> {
    for ext in [".png", ".jpg", ".jpeg"] {
        let Some(split) = name.len().checked_sub(ext.len()) else {
            continue;
        };
        if name.as_bytes()[split..].eq_ignore_ascii_case(ext.as_bytes()) {
            return Some(&name[..split]);
        }
    }
    None
}

/// Finds `key` followed by two comma-separated unsigned integers, matching
/// the way the pattern `key\s*(\d+),\s*(\d+)` searches anywhere in the line:
/// whitespace is allowed after the key and after the comma, trailing garbage
/// is ignored, and later occurrences of `key` are tried if an earlier one
/// does not parse.
fn pair_after_key(line: &str, key: &str) -> Option<(u32, u32)> {
    for (idx, _) in line.match_indices(key) {
        if let Some(pair) = parse_pair(&line[idx + key.len()..]) {
            return Some(pair);
        }
    }
    None
}

fn parse_pair(s: &str) -> Option<(u32, u32)> {
    let (first, rest) = take_uint(s.trim_start())?;
    let rest = rest.strip_prefix(',')?;
    let (second, _) = take_uint(rest.trim_start())?;
    Some((first, second))
}

fn take_uint(s: &str) -> Option<(u32, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    // out-of-range integers are treated like any other non-matching pair
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}
