use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{
    BoardError, Cell, Coordinate, FleetGenerator, GameConfig, Grid, Orientation, ShotOutcome,
    Vessel, BOARD_SIZE,
};

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = FleetGenerator::new(&GameConfig::default())
        .generate(&mut rng)
        .unwrap();
    let shots = rng.random_range(0..BOARD_SIZE * BOARD_SIZE / 2);
    for _ in 0..shots {
        let r = rng.random_range(0..BOARD_SIZE as i32);
        let c = rng.random_range(0..BOARD_SIZE as i32);
        let _ = grid.shot(Coordinate::new(r, c));
    }
    grid
}

fn snapshot(grid: &Grid) -> (Vec<Vec<Cell>>, Vec<Coordinate>, usize) {
    (
        grid.rows().map(|r| r.to_vec()).collect(),
        grid.targeted().collect(),
        grid.sunk_count(),
    )
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn vessel_cells_are_contiguous(
        row in -3i32..9,
        col in -3i32..9,
        length in 1usize..7,
        o in orientation(),
    ) {
        let ship = Vessel::new(Coordinate::new(row, col), length, o);
        let cells: Vec<_> = ship.occupied_cells().collect();
        prop_assert_eq!(cells.len(), length);
        prop_assert_eq!(cells[0], Coordinate::new(row, col));
        let step = match o {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        };
        for pair in cells.windows(2) {
            let delta = (pair[1].row - pair[0].row, pair[1].col - pair[0].col);
            prop_assert_eq!(delta, step);
        }
    }

    #[test]
    fn vessels_never_touch(seed in any::<u64>()) {
        let grid = random_grid(seed);
        let vessels = grid.vessels();
        for (i, a) in vessels.iter().enumerate() {
            for b in &vessels[i + 1..] {
                for ca in a.occupied_cells() {
                    for cb in b.occupied_cells() {
                        let apart = (ca.row - cb.row).abs().max((ca.col - cb.col).abs());
                        prop_assert!(apart >= 2, "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn sunk_count_matches_vessels(seed in any::<u64>()) {
        let grid = random_grid(seed);
        let sunk = grid.vessels().iter().filter(|v| v.is_sunk()).count();
        prop_assert_eq!(grid.sunk_count(), sunk);
        for v in grid.vessels() {
            prop_assert!(v.lives() <= v.length());
        }
    }

    #[test]
    fn out_of_bounds_shot_is_noop(
        seed in any::<u64>(),
        row in -5i32..12,
        col in -5i32..12,
    ) {
        let mut grid = random_grid(seed);
        let target = Coordinate::new(row, col);
        prop_assume!(grid.out_of_bounds(target));
        let before = snapshot(&grid);
        prop_assert_eq!(grid.shot(target), Err(BoardError::OutOfBounds(target)));
        prop_assert_eq!(snapshot(&grid), before);
    }

    #[test]
    fn second_shot_is_rejected(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE as i32,
        col in 0..BOARD_SIZE as i32,
    ) {
        let mut grid = random_grid(seed);
        let target = Coordinate::new(row, col);
        prop_assume!(!grid.is_targeted(target));
        grid.shot(target).unwrap();
        let after = snapshot(&grid);
        prop_assert_eq!(grid.shot(target), Err(BoardError::AlreadyTargeted(target)));
        prop_assert_eq!(snapshot(&grid), after);
    }

    #[test]
    fn only_last_hit_sinks(seed in any::<u64>(), pick in any::<prop::sample::Index>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = FleetGenerator::new(&GameConfig::default())
            .generate(&mut rng)
            .unwrap();
        let vessel = grid.vessels()[pick.index(grid.vessels().len())];
        let cells: Vec<_> = vessel.occupied_cells().collect();
        for (i, &cell) in cells.iter().enumerate() {
            let outcome = grid.shot(cell).unwrap();
            if i + 1 == cells.len() {
                prop_assert_eq!(outcome, ShotOutcome::Sunk { length: vessel.length() });
                prop_assert_eq!(grid.sunk_count(), 1);
            } else {
                prop_assert_eq!(outcome, ShotOutcome::Hit);
                prop_assert_eq!(grid.sunk_count(), 0);
            }
        }
    }
}
