//! Documented behaviour of the size engine, end to end through the public API.

use shoe_sizes_domain::{
    format_size, format_size_range, is_valid_size_range, parse_batch_size_input, parse_size_range,
    preset_sizes,
};

fn parsed(text: &str) -> Vec<u8> {
    parse_size_range(text).values()
}

#[test]
fn parse_examples() {
    assert_eq!(parsed("39-42"), vec![39, 40, 41, 42]);
    assert_eq!(parsed("36,38,40"), vec![36, 38, 40]);
    assert_eq!(parsed("35-37,39,40-42"), vec![35, 36, 37, 39, 40, 41, 42]);
    assert_eq!(parsed("42-39"), vec![39, 40, 41, 42]);
    assert_eq!(parsed(""), Vec::<u8>::new());
    assert_eq!(parsed("20-50"), (22..=45).collect::<Vec<_>>());
}

#[test]
fn half_size_ranges_keep_whole_sizes_only() {
    assert_eq!(parsed("37.5-39"), vec![37, 38, 39]);
    assert_eq!(parsed("38-39.5"), vec![38, 39]);
    assert!(is_valid_size_range("37.5-39"));
}

#[test]
fn format_examples() {
    assert_eq!(format_size_range(&[39.0, 40.0, 41.0, 42.0]), "39-42");
    assert_eq!(format_size_range(&[36.0, 38.0, 40.0]), "36,38,40");
    assert_eq!(format_size(Some(40.0)), "40");
    assert_eq!(format_size(None), "");
}

#[test]
fn batch_examples() {
    let empty = parse_batch_size_input("");
    assert!(!empty.valid);
    assert!(empty.error_message().is_some_and(|m| !m.is_empty()));

    let ok = parse_batch_size_input("39-42");
    assert!(ok.valid);
    assert_eq!(ok.sizes.values(), vec![39, 40, 41, 42]);
    assert_eq!(ok.formatted, "39-42");

    let too_many = parse_batch_size_input("22-45");
    assert!(!too_many.valid);
    assert_eq!(too_many.error_message().as_deref(), Some("at most 20 sizes per batch"));
}

#[test]
fn preset_examples() {
    let male: Vec<u8> = preset_sizes("male").iter().map(|s| s.value()).collect();
    assert_eq!(male, vec![39, 40, 41, 42, 43, 44, 45]);
    assert_eq!(preset_sizes("unknown"), preset_sizes("all"));
}
