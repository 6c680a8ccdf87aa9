//! Tests for layout hit-testing

use super::*;

fn regions() -> LayoutRegions {
    LayoutRegions {
        clear_button: Some(Rect::new(36, 2, 3, 1)),
        dropdown: Some(Rect::new(0, 5, 40, 5)),
        input: Some(Rect::new(0, 2, 40, 3)),
        page: Some(Rect::new(0, 0, 80, 24)),
    }
}

#[test]
fn test_empty_regions_hit_nothing() {
    assert_eq!(region_at(&LayoutRegions::new(), 5, 5), None);
}

#[test]
fn test_input_hit() {
    assert_eq!(region_at(&regions(), 5, 3), Some(Region::Input));
}

#[test]
fn test_clear_button_wins_over_input() {
    assert_eq!(region_at(&regions(), 37, 2), Some(Region::ClearButton));
}

#[test]
fn test_dropdown_wins_over_page() {
    assert_eq!(region_at(&regions(), 10, 7), Some(Region::Dropdown));
}

#[test]
fn test_page_hit_outside_widget() {
    assert_eq!(region_at(&regions(), 60, 7), Some(Region::Page));
    assert_eq!(region_at(&regions(), 10, 0), Some(Region::Page));
}

#[test]
fn test_outside_every_region() {
    assert_eq!(region_at(&regions(), 100, 100), None);
}

#[test]
fn test_rect_edges_are_exclusive_on_far_side() {
    let regions = regions();
    // Input spans rows 2..5; row 5 is the dropdown's first row
    assert_eq!(region_at(&regions, 5, 4), Some(Region::Input));
    assert_eq!(region_at(&regions, 5, 5), Some(Region::Dropdown));
}

#[test]
fn test_clear_resets_regions() {
    let mut regions = regions();
    regions.clear();
    assert_eq!(regions, LayoutRegions::new());
}
