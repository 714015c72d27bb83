use super::*;

use folio_ui_graphics::{Brush, IntSize, Point};

use crate::draw::pages_referenced;

fn curling(start: Point, to: Point) -> PageAnimationState {
    let mut state = PageAnimationState::default();
    state.set_viewport_size(IntSize::new(1000, 1500));
    state.set_availability(true, true);
    state.start_drag(start);
    state.drag(to - start);
    state
}

fn gradient_of(instruction: &DrawInstruction) -> Option<(Point, Point)> {
    match instruction {
        DrawInstruction::Fill {
            brush: Brush::LinearGradient { start, end, .. },
            ..
        } => Some((*start, *end)),
        DrawInstruction::Clipped { children, .. }
        | DrawInstruction::Transformed { children, .. } => children.iter().find_map(gradient_of),
        _ => None,
    }
}

#[test]
fn edge_zone_wins_over_travel() {
    // Started near the right edge but moved right: still peeling the right corner.
    let state = curling(Point::new(950.0, 200.0), Point::new(980.0, 220.0));
    assert_eq!(CurlPageAnimation.resolve_direction(&state), Direction::Next);

    let state = curling(Point::new(40.0, 200.0), Point::new(10.0, 220.0));
    assert_eq!(CurlPageAnimation.resolve_direction(&state), Direction::Previous);
}

#[test]
fn dead_zone_uses_travel_sign() {
    let state = curling(Point::new(500.0, 200.0), Point::new(420.0, 220.0));
    assert_eq!(CurlPageAnimation.resolve_direction(&state), Direction::Next);

    let state = curling(Point::new(500.0, 200.0), Point::new(520.0, 220.0));
    assert_eq!(CurlPageAnimation.resolve_direction(&state), Direction::Previous);
}

#[test]
fn no_direction_draws_flat_current_page() {
    let state = curling(Point::new(500.0, 200.0), Point::new(520.0, 220.0));
    assert_eq!(
        CurlPageAnimation.draw_instructions(&state),
        DrawInstruction::page(PageType::Current)
    );
}

#[test]
fn composition_layers_in_paint_order() {
    let mut state = curling(Point::new(950.0, 100.0), Point::new(700.0, 450.0));
    state.set_direction(Direction::Next);

    let instructions = CurlPageAnimation.draw_instructions(&state);

    assert_eq!(instructions[0], DrawInstruction::Background(PageType::Next));
    assert_eq!(instructions[1], DrawInstruction::Layer(PageType::Next));
    assert_eq!(instructions.len(), 7);
    assert_eq!(
        pages_referenced(&instructions).as_slice(),
        &[PageType::Next, PageType::Current]
    );

    // Fold shadow outside both regions.
    match &instructions[2] {
        DrawInstruction::Clipped { op, children, .. } => {
            assert_eq!(*op, ClipOp::Difference);
            assert!(matches!(
                children.as_slice(),
                [DrawInstruction::Clipped {
                    op: ClipOp::Difference,
                    ..
                }]
            ));
        }
        other => panic!("expected fold shadow clip, got {other:?}"),
    }

    // Back face: inside C, outside A, reflected and washed.
    match &instructions[3] {
        DrawInstruction::Clipped {
            op: ClipOp::Intersect,
            children,
            ..
        } => match children.as_slice() {
            [DrawInstruction::Clipped {
                op: ClipOp::Difference,
                children,
                ..
            }] => match children.as_slice() {
                [DrawInstruction::Transformed { children, .. }] => {
                    assert_eq!(children[0], DrawInstruction::Background(PageType::Current));
                    assert_eq!(children[1], DrawInstruction::Layer(PageType::Current));
                    assert!(matches!(
                        children[2],
                        DrawInstruction::Fill {
                            blend: BlendMode::Screen,
                            ..
                        }
                    ));
                }
                other => panic!("expected reflected back face, got {other:?}"),
            },
            other => panic!("expected nested clip, got {other:?}"),
        },
        other => panic!("expected back face clip, got {other:?}"),
    }

    // Flat part of the current page.
    match &instructions[5] {
        DrawInstruction::Clipped {
            op: ClipOp::Intersect,
            children,
            ..
        } => assert_eq!(children, &DrawInstruction::page(PageType::Current)),
        other => panic!("expected front page clip, got {other:?}"),
    }
}

#[test]
fn back_face_reflection_fixes_the_fold_axis() {
    let mut state = curling(Point::new(950.0, 100.0), Point::new(700.0, 450.0));
    state.set_direction(Direction::Next);
    let points = CurlPageAnimation::curl_points(&state, Direction::Next).unwrap();
    let back = CurlPageAnimation::back_face(&points).unwrap();

    let DrawInstruction::Transformed { transform, .. } = &back[0] else {
        panic!("expected transform");
    };
    assert!(transform.map_point(points.e).distance(points.e) < 1e-2);
    assert!(transform.map_point(points.h).distance(points.h) < 1e-2);
    // The folded corner lands on the touch point.
    assert!(transform.map_point(points.f).distance(points.a) < 0.5);
}

#[test]
fn shadows_point_away_from_the_fold_on_the_correct_side() {
    let mut state = curling(Point::new(950.0, 100.0), Point::new(700.0, 450.0));
    state.set_direction(Direction::Next);
    let points = CurlPageAnimation::curl_points(&state, Direction::Next).unwrap();
    let instructions = CurlPageAnimation.draw_instructions(&state);

    let (fold_start, fold_end) = gradient_of(&instructions[2]).unwrap();
    assert_eq!(fold_start, points.c);
    assert!((fold_end - fold_start).dot(points.f - points.c) > 0.0);

    let (front_start, front_end) = gradient_of(&instructions[6]).unwrap();
    assert_eq!(front_start, points.c);
    assert!((front_end - front_start).dot(points.a - points.c) > 0.0);

    let fold_width = (fold_end - fold_start).length();
    let front_width = (front_end - front_start).length();
    assert!((front_width - fold_width * 0.6).abs() < 1e-2);
}

#[test]
fn empty_viewport_falls_back_to_flat_page() {
    let mut state = curling(Point::new(950.0, 100.0), Point::new(700.0, 450.0));
    state.set_direction(Direction::Next);
    state.set_viewport_size(IntSize::new(1000, 0));

    assert_eq!(
        CurlPageAnimation.draw_instructions(&state),
        DrawInstruction::page(PageType::Current)
    );
}

#[test]
fn curl_never_transforms_slots() {
    let mut state = curling(Point::new(950.0, 100.0), Point::new(700.0, 450.0));
    state.set_direction(Direction::Next);
    for slot in [PageType::Previous, PageType::Current, PageType::Next] {
        assert_eq!(CurlPageAnimation.transform_for(&state, slot), None);
    }
}
