use folio_core::{
    AnimationType, CoverPageAnimation, CurlPageAnimation, Direction, PageTurnConfig, PageType,
    SlidePageAnimation, SpringSpec, Transform,
};
use folio_testing::robot_assertions::{assert_approx_eq, assert_point_approx_eq};
use folio_testing::{FakePages, PageTurnRobot};
use folio_ui_graphics::Point;

fn slide(pages: FakePages) -> PageTurnRobot {
    PageTurnRobot::new(Box::new(SlidePageAnimation), 1000, 1600, pages)
}

#[test]
fn swipe_left_turns_to_next_page() {
    let mut robot = slide(FakePages::new(3));

    let direction = robot.swipe(Point::new(800.0, 800.0), Point::new(300.0, 800.0), 5);

    assert_eq!(direction, Direction::Next);
    assert_eq!(robot.wait_for_idle(), vec![PageType::Next]);
    assert_eq!(robot.pages().index(), 1);
    assert_eq!(robot.state().current_offset(), Point::ZERO);
}

#[test]
fn swipe_right_on_first_page_bounces_back() {
    let mut robot = slide(FakePages::new(3));

    robot.drag(Point::new(200.0, 800.0), Point::new(700.0, 800.0), 5);
    let canvas = robot.draw();
    assert_eq!(canvas.recorded_slots(), vec![PageType::Current]);
    assert_eq!(canvas.composite_transform(PageType::Current), Some(Transform::IDENTITY));

    assert_eq!(robot.release(), Direction::None);
    assert!(robot.wait_for_idle().is_empty());
    assert_eq!(robot.pages().index(), 0);
}

#[test]
fn edge_taps_turn_pages_until_the_book_ends() {
    let mut robot = slide(FakePages::at(1, 3));

    assert_eq!(robot.tap(Point::new(900.0, 800.0)), Direction::Next);
    assert_eq!(robot.wait_for_idle(), vec![PageType::Next]);
    assert_eq!(robot.pages().index(), 2);

    assert_eq!(robot.tap(Point::new(900.0, 800.0)), Direction::None);
    assert!(robot.wait_for_idle().is_empty());
    assert_eq!(robot.pages().index(), 2);

    assert_eq!(robot.tap(Point::new(100.0, 800.0)), Direction::Previous);
    assert_eq!(robot.wait_for_idle(), vec![PageType::Previous]);
    assert_eq!(robot.pages().index(), 1);
}

#[test]
fn tap_in_the_middle_does_nothing() {
    let mut robot = slide(FakePages::at(1, 3));

    assert_eq!(robot.tap(Point::new(500.0, 800.0)), Direction::None);
    assert!(robot.wait_for_idle().is_empty());
    assert_eq!(robot.pages().index(), 1);
}

#[test]
fn new_drag_interrupts_settle_without_commit() {
    let mut robot = slide(FakePages::new(3));
    robot.swipe(Point::new(800.0, 800.0), Point::new(300.0, 800.0), 5);
    robot.advance_frames(5);
    let interrupted = robot.state().current_offset();
    assert!(interrupted.x < 300.0);

    robot.press(Point::new(500.0, 800.0));

    assert_eq!(robot.state().previous_offset(), interrupted);
    assert!(!robot.state().is_animating());
    robot.cancel();
    assert!(robot.wait_for_idle().is_empty());
    assert_eq!(robot.pages().index(), 0);
}

#[test]
fn slide_moves_current_and_next_together() {
    let mut robot = slide(FakePages::new(3));
    robot.drag(Point::new(800.0, 800.0), Point::new(500.0, 800.0), 3);

    let canvas = robot.draw();

    canvas.assert_balanced();
    assert_eq!(canvas.recorded_slots(), vec![PageType::Next, PageType::Current]);
    assert_eq!(
        canvas.composite_transform(PageType::Current),
        Some(Transform::translation(-300.0, 0.0))
    );
    assert_eq!(
        canvas.composite_transform(PageType::Next),
        Some(Transform::translation(700.0, 0.0))
    );
}

#[test]
fn cover_pulls_previous_page_over_current() {
    let mut robot =
        PageTurnRobot::new(Box::new(CoverPageAnimation), 1000, 1600, FakePages::at(1, 3));
    robot.drag(Point::new(100.0, 800.0), Point::new(500.0, 800.0), 4);

    let canvas = robot.draw();

    canvas.assert_balanced();
    assert_eq!(canvas.composited_slots(), vec![PageType::Current, PageType::Previous]);
    assert_eq!(
        canvas.composite_transform(PageType::Previous),
        Some(Transform::translation(-600.0, 0.0))
    );
    let gradients = canvas.gradients();
    assert_eq!(gradients.len(), 1);
    assert_approx_eq(gradients[0].0.x, 400.0, 1e-3, "shadow start");
    assert_approx_eq(gradients[0].1.x, 432.0, 1e-3, "shadow end");

    assert_eq!(robot.release(), Direction::Previous);
    assert_point_approx_eq(
        robot.state().target_offset(),
        Point::new(1132.0, 800.0),
        1e-3,
        "cover settle target",
    );
    assert_eq!(robot.wait_for_idle(), vec![PageType::Previous]);
}

#[test]
fn curl_frame_is_fully_composed() {
    let mut robot = PageTurnRobot::new(Box::new(CurlPageAnimation), 1000, 1500, FakePages::new(3));
    robot.drag(Point::new(950.0, 100.0), Point::new(700.0, 450.0), 5);
    assert_eq!(robot.state().direction(), Direction::Next);

    let canvas = robot.draw();

    canvas.assert_balanced();
    assert_eq!(canvas.recorded_slots(), vec![PageType::Next, PageType::Current]);
    assert_eq!(
        canvas.composited_slots(),
        vec![PageType::Next, PageType::Current, PageType::Current]
    );
    assert_eq!(canvas.clip_count(), 8);
    assert_eq!(canvas.gradients().len(), 3);
    assert_eq!(canvas.max_depth(), 3);
    let back_face = canvas.composite_transform(PageType::Current);
    assert!(back_face.is_some_and(|transform| transform.determinant() < 0.0));
}

#[test]
fn curl_from_left_edge_turns_back() {
    let mut robot =
        PageTurnRobot::new(Box::new(CurlPageAnimation), 1000, 1500, FakePages::at(1, 3));

    let direction = robot.swipe(Point::new(50.0, 1400.0), Point::new(700.0, 1300.0), 5);

    assert_eq!(direction, Direction::Previous);
    assert_eq!(robot.wait_for_idle(), vec![PageType::Previous]);
    assert_eq!(robot.pages().index(), 0);
}

#[test]
fn idle_frame_draws_only_the_current_page() {
    let robot = PageTurnRobot::new(Box::new(CurlPageAnimation), 1000, 1500, FakePages::at(1, 3));

    let canvas = robot.draw();

    assert_eq!(canvas.recorded_slots(), vec![PageType::Current]);
    assert_eq!(canvas.clip_count(), 0);
}

#[test]
fn empty_viewport_never_turns() {
    let mut robot = PageTurnRobot::new(Box::new(SlidePageAnimation), 0, 0, FakePages::new(3));

    assert_eq!(
        robot.swipe(Point::new(0.0, 0.0), Point::new(-500.0, 0.0), 5),
        Direction::None
    );
    assert!(robot.wait_for_idle().is_empty());
    assert_eq!(robot.draw().recorded_slots(), vec![PageType::Current]);
}

#[test]
fn swipe_threshold_is_configurable() {
    let mut robot = slide(FakePages::new(3));
    robot
        .content_mut()
        .state_mut()
        .set_config(PageTurnConfig::default().with_swipe_threshold(0.5));

    assert_eq!(
        robot.swipe(Point::new(800.0, 800.0), Point::new(500.0, 800.0), 3),
        Direction::None
    );
    assert!(robot.wait_for_idle().is_empty());
}

#[test]
fn spring_settle_still_commits() {
    let mut robot = slide(FakePages::new(3));
    robot.content_mut().state_mut().set_config(
        PageTurnConfig::default()
            .with_settle_animation(AnimationType::Spring(SpringSpec::default_spring())),
    );

    robot.swipe(Point::new(800.0, 800.0), Point::new(300.0, 800.0), 5);

    assert_eq!(robot.wait_for_idle(), vec![PageType::Next]);
}
