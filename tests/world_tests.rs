use tui_runner::core::{
    clip_span, difficulty_for_score, hits_obstacle, scroll_world, spawn_gap_range, stamp_obstacle,
    ClipSpan, Dimensions, Grid, Layout, ObstacleState, ObstacleStep, SimpleRng, OBSTACLE_PATTERN,
};
use tui_runner::types::{OBSTACLE_GLYPH, OBSTACLE_RADIUS, OBS_MAX_GAP, OBS_MIN_GAP};

#[test]
fn layout_for_minimum_terminal() {
    let layout = Layout::new(Dimensions::new(30, 70).unwrap());
    assert_eq!(layout.sky_row, 12);
    assert_eq!(layout.ground_row, 24);
    assert_eq!(layout.ground_line, 25);
    assert_eq!(layout.hud_row, 29);
    assert_eq!(layout.player_col, 14);
}

#[test]
fn undersized_terminal_is_rejected() {
    assert!(Dimensions::new(29, 70).is_err());
    assert!(Dimensions::new(30, 69).is_err());
    let err = Dimensions::new(10, 10).unwrap_err();
    assert!(err.to_string().contains("10x10"));
}

#[test]
fn scroll_keeps_static_rows_and_clears_band() {
    let mut grid = Grid::new(30, 70);
    grid.put_str(5, 10, "cloud");
    grid.set(20, 30, OBSTACLE_GLYPH);
    grid.fill_row(25, '#');

    scroll_world(&mut grid, 12..=24, 25);

    assert_eq!(grid.get(5, 9), Some('c'));
    assert_eq!(grid.count(OBSTACLE_GLYPH), 70);
    assert_eq!(grid.row_string(25), "#".repeat(70));
}

#[test]
fn obstacle_enters_from_the_right_edge() {
    assert!(clip_span(75, OBSTACLE_RADIUS, 70).is_empty());
    assert_eq!(
        clip_span(72, OBSTACLE_RADIUS, 70),
        ClipSpan {
            grid_start: 67,
            pattern_start: 0,
            len: 3
        }
    );
}

#[test]
fn obstacle_exits_on_the_left_edge() {
    assert_eq!(
        clip_span(2, OBSTACLE_RADIUS, 70),
        ClipSpan {
            grid_start: 0,
            pattern_start: 4,
            len: 7
        }
    );
    assert!(clip_span(-5, OBSTACLE_RADIUS, 70).is_empty());
}

#[test]
fn stamped_obstacle_sits_on_ground_row() {
    let mut grid = Grid::new(30, 70);
    let span = stamp_obstacle(&mut grid, &OBSTACLE_PATTERN, 40, OBSTACLE_RADIUS, 24);

    assert_eq!(span.grid_columns(), 35..46);
    assert_eq!(grid.count(OBSTACLE_GLYPH), 6 * 11);
    assert!(grid.is(24, 35, OBSTACLE_GLYPH));
    assert!(grid.is(19, 45, OBSTACLE_GLYPH));
    assert!(!grid.is(18, 40, OBSTACLE_GLYPH));
    assert!(!grid.is(25, 40, OBSTACLE_GLYPH));
}

#[test]
fn obstacle_crosses_screen_then_waits_again() {
    let mut grid = Grid::new(30, 70);
    let mut rng = SimpleRng::new(5);
    let mut obstacle = ObstacleState::new(0, 70);

    let mut drawn = 0;
    let next_gap = loop {
        grid.clear();
        match obstacle.advance(&mut grid, 24, 0, &mut rng) {
            ObstacleStep::Drawn(_) => drawn += 1,
            ObstacleStep::Finished { next_gap } => break next_gap,
            step => panic!("unexpected {step:?}"),
        }
    };

    assert_eq!(drawn, 80);
    assert!((OBS_MIN_GAP..=OBS_MAX_GAP).contains(&next_gap));
    assert_eq!(obstacle.timer(), next_gap);
    assert!(!obstacle.is_active());
}

#[test]
fn collision_uses_five_point_hitbox() {
    let mut grid = Grid::new(30, 70);
    assert!(!hits_obstacle(&grid, 24, 14));

    grid.set(23, 13, OBSTACLE_GLYPH);
    assert!(hits_obstacle(&grid, 24, 14));

    let mut grid = Grid::new(30, 70);
    // Diagonal neighbour of the feet is outside the hitbox.
    grid.set(24, 15, OBSTACLE_GLYPH);
    assert!(!hits_obstacle(&grid, 24, 14));
}

#[test]
fn difficulty_narrows_gap_range() {
    assert_eq!(difficulty_for_score(0, 0), 0);
    assert_eq!(difficulty_for_score(4000, 0), 84);
    assert_eq!(difficulty_for_score(10_000, 84), 84);

    assert_eq!(spawn_gap_range(0), OBS_MIN_GAP..=OBS_MAX_GAP);
    assert_eq!(spawn_gap_range(84), OBS_MIN_GAP..=OBS_MIN_GAP);
}
