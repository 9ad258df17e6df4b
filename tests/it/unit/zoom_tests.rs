//! Unit tests for the zoom engine.

use crate::helpers::assert_close;
use flowboard::input::{CanvasBounds, CoordinateConverter};
use flowboard::zoom::{
    self, button_target_scale, wheel_target_scale, zoom_at, WheelDirection, ZoomCommand,
    ZoomLimits,
};
use flowboard::{Point, Size, Viewport};

fn bounds() -> CanvasBounds {
    CanvasBounds::new(Point::ZERO, Size::new(800.0, 600.0))
}

#[test]
fn test_wheel_zoom_in_at_cursor() {
    let current = Viewport::default();
    let target = wheel_target_scale(current.scale(), -1.0, WheelDirection::default(), 0.1);
    let next = zoom_at(Point::new(200.0, 200.0), target, &current, &ZoomLimits::default());

    assert_close(next.translate_x(), 145.0);
    assert_close(next.translate_y(), 35.0);
    assert_close(next.scale(), 1.1);
}

#[test]
fn test_anchor_stays_put_across_scales() {
    let limits = ZoomLimits::default();
    let anchor = Point::new(333.0, 127.0);
    let start = Viewport::new(-40.0, 80.0, 0.8).unwrap();
    let world = CoordinateConverter::screen_to_world(anchor, &start);

    for requested in [0.5, 0.65, 1.0, 1.37, 2.0] {
        let next = zoom_at(anchor, requested, &start, &limits);
        let back = CoordinateConverter::world_to_screen(world, &next);
        assert_close(back.x, anchor.x);
        assert_close(back.y, anchor.y);
    }
}

#[test]
fn test_clamped_zoom_is_noop() {
    let limits = ZoomLimits::default();
    let at_max = Viewport::new(12.0, 34.0, 2.0).unwrap();
    assert_eq!(zoom_at(Point::new(5.0, 5.0), 2.4, &at_max, &limits), at_max);

    let at_min = Viewport::new(12.0, 34.0, 0.5).unwrap();
    assert_eq!(zoom_at(Point::new(5.0, 5.0), 0.1, &at_min, &limits), at_min);
}

#[test]
fn test_repeated_wheel_saturates_at_limits() {
    let limits = ZoomLimits::default();
    let anchor = Point::new(400.0, 300.0);
    let mut v = Viewport::default();

    for _ in 0..30 {
        let target = wheel_target_scale(v.scale(), -120.0, WheelDirection::default(), 0.1);
        v = zoom_at(anchor, target, &v, &limits);
        assert!(v.scale() <= limits.max);
    }
    assert_eq!(v.scale(), limits.max);

    for _ in 0..30 {
        let target = wheel_target_scale(v.scale(), 120.0, WheelDirection::default(), 0.1);
        v = zoom_at(anchor, target, &v, &limits);
        assert!(v.scale() >= limits.min);
    }
    assert_eq!(v.scale(), limits.min);
}

#[test]
fn test_wheel_direction_policy() {
    let natural = wheel_target_scale(1.0, -3.0, WheelDirection::NegativeDeltaZoomsIn, 0.1);
    let inverted = wheel_target_scale(1.0, -3.0, WheelDirection::PositiveDeltaZoomsIn, 0.1);
    assert_close(natural, 1.1);
    assert_close(inverted, 0.9);
    assert_eq!(wheel_target_scale(1.3, 0.0, WheelDirection::default(), 0.1), 1.3);
}

#[test]
fn test_button_in_then_out_round_trips() {
    let scale = button_target_scale(ZoomCommand::In, 1.0, 0.1);
    assert_close(scale, 1.0 / 0.9);
    assert_close(button_target_scale(ZoomCommand::Out, scale, 0.1), 1.0);
    assert_eq!(button_target_scale(ZoomCommand::Reset, 1.7, 0.1), 1.0);
}

#[test]
fn test_button_zoom_anchors_at_centre() {
    let limits = ZoomLimits::default();
    let current = Viewport::default();
    let centre_world = CoordinateConverter::screen_to_world(bounds().center(), &current);

    let zoomed = zoom::zoom_button(ZoomCommand::In, &current, Some(&bounds()), &limits, 0.1);
    let back = CoordinateConverter::world_to_screen(centre_world, &zoomed);
    assert_close(back.x, 400.0);
    assert_close(back.y, 300.0);

    let reset = zoom::zoom_button(ZoomCommand::Reset, &zoomed, Some(&bounds()), &limits, 0.1);
    assert_eq!(reset.scale(), 1.0);
    assert_close(reset.translate_x(), 150.0);
    assert_close(reset.translate_y(), 50.0);
}

#[test]
fn test_button_zoom_without_geometry_keeps_translate() {
    let current = Viewport::new(10.0, 20.0, 1.0).unwrap();
    let next = zoom::zoom_button(ZoomCommand::Out, &current, None, &ZoomLimits::default(), 0.1);
    assert_eq!(next.translate(), Point::new(10.0, 20.0));
    assert_close(next.scale(), 0.9);
}

#[test]
fn test_custom_limits_validate() {
    assert!(ZoomLimits::new(0.25, 4.0).is_ok());
    assert!(ZoomLimits::new(2.0, 1.0).is_err());
    assert!(ZoomLimits::new(0.0, 1.0).is_err());
}
