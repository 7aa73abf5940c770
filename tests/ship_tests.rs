use sea_battle::{Coordinate, Orientation, Vessel};

#[test]
fn test_horizontal_cells_follow_columns() {
    let ship = Vessel::new(Coordinate::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.occupied_cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(2, 1), Coordinate::new(2, 2), Coordinate::new(2, 3)]
    );
}

#[test]
fn test_vertical_cells_follow_rows() {
    let ship = Vessel::new(Coordinate::new(0, 0), 4, Orientation::Vertical);
    let cells: Vec<_> = ship.occupied_cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(2, 0),
            Coordinate::new(3, 0),
        ]
    );
    for c in cells {
        assert!(ship.is_hit_by(c));
    }
    assert!(!ship.is_hit_by(Coordinate::new(4, 0)));
    assert!(!ship.is_hit_by(Coordinate::new(0, 1)));
}

#[test]
fn test_new_vessel_is_undamaged() {
    let ship = Vessel::new(Coordinate::new(5, 5), 2, Orientation::Horizontal);
    assert_eq!(ship.lives(), 2);
    assert_eq!(ship.length(), 2);
    assert!(!ship.is_sunk());
    assert_eq!(ship.bow(), Coordinate::new(5, 5));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
}

#[test]
fn test_cells_may_leave_any_board() {
    // geometry is board-agnostic; bounds are checked on placement
    let ship = Vessel::new(Coordinate::new(-1, 5), 2, Orientation::Horizontal);
    let cells: Vec<_> = ship.occupied_cells().collect();
    assert_eq!(cells, vec![Coordinate::new(-1, 5), Coordinate::new(-1, 6)]);
}

#[test]
fn test_coordinate_one_based_conversion() {
    let c = Coordinate::from_one_based(1, 6);
    assert_eq!(c, Coordinate::new(0, 5));
    assert_eq!(c.to_one_based(), (1, 6));
    assert_eq!(c.to_string(), "1 6");
    assert_eq!(Coordinate::new(3, 3).neighborhood().count(), 9);
}
