use perfkit_core::Size;
use perfkit_footprint::{Change, Component, PerfBoard, Point, Rect, RegionRole, VisibilityPolicy};

#[test]
fn test_default_board_lattice() {
    let board = Component::new(PerfBoard::default(), Point::new(0, 0));
    assert_eq!(board.control_points(), &[Point::new(0, 0), Point::new(300, 240)]);

    let grid = board.pad_grid();
    assert_eq!(grid.columns(), 14);
    assert_eq!(grid.rows(), 11);
}

#[test]
fn test_corners_move_independently() {
    let mut board = Component::new(PerfBoard::default(), Point::new(0, 0));
    board.set_control_point(0, Point::new(100, 100)).unwrap();
    assert_eq!(board.control_point(1), Some(Point::new(300, 240)));

    let body = board.body();
    let outline = body.region(RegionRole::Board).unwrap().bounds().unwrap();
    assert!(outline.approx_eq(&Rect::new(100.0, 100.0, 200.0, 140.0), 1e-6));
}

#[test]
fn test_pad_iteration_is_bounded_by_clip() {
    let mut board = Component::new(PerfBoard::default(), Point::new(0, 0));
    board.set_control_point(1, Point::new(20_000, 20_000)).unwrap();
    let grid = board.pad_grid();
    assert!(grid.len() > 900_000);

    let viewport = Rect::new(1000.0, 1000.0, 200.0, 100.0);
    let visible: Vec<_> = grid.pads_in(viewport).collect();
    assert_eq!(visible.len(), 11 * 6);
    assert!(visible.iter().all(|pad| {
        let r = pad.diameter as f64 / 2.0;
        viewport.inflate(r).contains(pad.center.x as f64, pad.center.y as f64)
    }));
}

#[test]
fn test_spacing_change_reflows_pads() {
    let mut board = Component::new(PerfBoard::default(), Point::new(0, 0));
    let change = board.update(|f| f.set_spacing(Size::inches(0.15))).unwrap();
    assert_eq!(change, Change::Geometry);
    assert_eq!(board.pad_grid().spacing(), 30);
    assert!(board.update(|f| f.set_spacing(Size::px(0.0))).is_err());
}

#[test]
fn test_corner_handles() {
    let board = Component::new(PerfBoard::default(), Point::new(0, 0));
    assert!(!board.is_control_point_sticky(0));
    assert_eq!(
        board.control_point_visibility(1),
        VisibilityPolicy::WhenSelected
    );
}
