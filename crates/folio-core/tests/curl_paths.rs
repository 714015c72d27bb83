use folio_core::curl::geometry::{compute_curl_points, pinned_corner};
use folio_core::curl::paths::{build_path_a, build_path_c};
use folio_testing::robot_assertions::assert_simple_path;
use folio_ui_graphics::Point;

const WIDTH: f32 = 1000.0;
const HEIGHT: f32 = 1500.0;

/// Checks both clip paths at every grid touch for all four grabbed corners.
fn sweep_clip_regions(width: f32, height: f32, step: f32) {
    for is_left in [false, true] {
        for is_top in [false, true] {
            let f = pinned_corner(is_left, is_top, width, height);
            let mut x = step / 2.0;
            while x < width {
                let mut y = step / 2.0;
                while y < height {
                    let touch = Point::new(x, y);
                    let points = compute_curl_points(touch, f, width, height, is_left).unwrap();
                    let label = format!(
                        "{width}x{height} touch ({x}, {y}) left={is_left} top={is_top} j={:?}",
                        points.j
                    );

                    let path_a = build_path_a(&points, width, height, is_top, is_left);
                    let path_c = build_path_c(&points);

                    assert!(path_a.is_closed() && path_c.is_closed(), "{label}");
                    assert_simple_path(&path_a, &format!("path A, {label}"));
                    assert_simple_path(&path_c, &format!("path C, {label}"));
                    y += step;
                }
                x += step;
            }
        }
    }
}

#[test]
fn clip_regions_are_simple_polygons_across_the_page() {
    sweep_clip_regions(WIDTH, HEIGHT, 50.0);
}

#[test]
fn clip_regions_are_simple_polygons_on_a_phone_viewport() {
    sweep_clip_regions(1080.0, 1920.0, 54.0);
}

#[test]
fn fold_running_past_the_far_edge_keeps_path_a_simple() {
    let f = pinned_corner(false, true, WIDTH, HEIGHT);
    let points = compute_curl_points(Point::new(725.0, 25.0), f, WIDTH, HEIGHT, false).unwrap();
    assert!(points.j.y > HEIGHT);

    let path_a = build_path_a(&points, WIDTH, HEIGHT, true, false);

    assert_simple_path(&path_a, "path A with j below the page");
    assert!(path_a.contains(Point::new(10.0, 1490.0)));
    assert!(path_a.contains(Point::new(500.0, 1490.0)));
    assert!(path_a.contains(Point::new(100.0, 10.0)));
    assert!(!path_a.contains(Point::new(990.0, 1490.0)));
    assert!(!path_a.contains(Point::new(995.0, 100.0)));
}

#[test]
fn flat_region_excludes_the_grabbed_corner() {
    let f = pinned_corner(false, true, WIDTH, HEIGHT);
    let points = compute_curl_points(Point::new(700.0, 450.0), f, WIDTH, HEIGHT, false).unwrap();
    let path_a = build_path_a(&points, WIDTH, HEIGHT, true, false);
    let path_c = build_path_c(&points);

    assert!(!path_a.contains(Point::new(990.0, 10.0)));
    assert!(path_a.contains(Point::new(10.0, 1490.0)));
    assert!(path_a.contains(Point::new(100.0, 10.0)));
    // Just inside the touch, on the curled-back flap.
    assert!(path_c.contains(Point::new(680.0, 380.0)));
    assert!(!path_c.contains(Point::new(100.0, 1400.0)));
}
