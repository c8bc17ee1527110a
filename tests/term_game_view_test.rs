use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Direction, GameConfig, Intent, Position, Scene};

fn text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn snapshot(scene: Scene) -> GameSnapshot {
    let mut snap = GameState::new(GameConfig::default(), 1, 12).unwrap().snapshot();
    snap.scene = scene;
    snap
}

// Default board: 30x20 cells at 2x1 terminal cells each, plus a border.
const FRAME_VIEWPORT: Viewport = Viewport {
    width: 62,
    height: 23,
};

#[test]
fn term_view_renders_border_corners() {
    let fb = GameView::default().render(&snapshot(Scene::Start), FRAME_VIEWPORT);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(61, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(61, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_snake_two_chars_wide() {
    let mut snap = snapshot(Scene::Playing { paused: false });
    snap.segments = vec![Position::new(100, 50), Position::new(90, 50)];
    snap.fruit = Position::new(200, 150);

    let fb = GameView::default().render(&snap, FRAME_VIEWPORT);

    // Board origin is (1,1); cell (10,5) starts at column 21, row 6.
    let head = fb.get(21, 6).unwrap();
    assert_eq!(head.ch, '█');
    assert!(head.style.bold);
    assert_eq!(fb.get(22, 6).unwrap().ch, '█');
    assert_eq!(fb.get(19, 6).unwrap().ch, '█');
    assert!(!fb.get(19, 6).unwrap().style.bold);

    let fruit = fb.get(41, 16).unwrap();
    assert_eq!(fruit.ch, '█');
    assert_ne!(fruit.style.fg, head.style.fg);
}

#[test]
fn term_view_tints_lethal_ring() {
    let fb = GameView::default().render(&snapshot(Scene::Playing { paused: false }), FRAME_VIEWPORT);
    assert_eq!(fb.get(1, 1).unwrap().ch, '░');
    assert_eq!(fb.get(60, 20).unwrap().ch, '░');
    assert_ne!(fb.get(3, 2).unwrap().ch, '░');
}

#[test]
fn term_view_start_screen_has_play_button() {
    let view = GameView::default();
    let mut snap = snapshot(Scene::Start);
    let idle = view.render(&snap, FRAME_VIEWPORT);
    assert!(text(&idle).contains("S N A K E"));
    assert!(text(&idle).contains("PLAY"));

    snap.play_hovered = true;
    let hovered = view.render(&snap, FRAME_VIEWPORT);
    assert_ne!(idle, hovered);
}

#[test]
fn term_view_button_matches_pointer_mapping() {
    let view = GameView::default();
    let snap = snapshot(Scene::Start);
    let button = GameConfig::default().play_button();
    let fb = view.render(&snap, FRAME_VIEWPORT);
    let board_bg = fb.get(10, 10).unwrap().style.bg;

    for row in 0..FRAME_VIEWPORT.height {
        for col in 0..FRAME_VIEWPORT.width {
            let Some(p) = view.to_game_coords(&snap, FRAME_VIEWPORT, col, row) else {
                continue;
            };
            let on_button = fb.get(col, row).unwrap().style.bg != board_bg
                && fb.get(col, row).unwrap().ch != '░';
            assert_eq!(button.contains(p), on_button, "col {} row {}", col, row);
        }
    }
}

#[test]
fn term_view_to_game_coords() {
    let view = GameView::default();
    let snap = snapshot(Scene::Start);
    assert_eq!(
        view.to_game_coords(&snap, FRAME_VIEWPORT, 1, 1),
        Some(Position::new(5, 5))
    );
    assert_eq!(
        view.to_game_coords(&snap, FRAME_VIEWPORT, 22, 6),
        Some(Position::new(105, 55))
    );
    assert_eq!(view.to_game_coords(&snap, FRAME_VIEWPORT, 0, 0), None);
    assert_eq!(view.to_game_coords(&snap, FRAME_VIEWPORT, 61, 10), None);
}

#[test]
fn term_view_status_line_switches_to_score() {
    let view = GameView::default();
    let mut state = GameState::new(GameConfig::default(), 1, 12).unwrap();
    state.apply_intent(Intent::Play);

    let before = text(&view.render(&state.snapshot(), FRAME_VIEWPORT));
    assert!(before.contains("arrows/wasd move"));
    assert!(!before.contains("score"));

    state.apply_intent(Intent::Turn(Direction::Left));
    let after = text(&view.render(&state.snapshot(), FRAME_VIEWPORT));
    assert!(after.contains("score 0"));
    assert!(after.contains("high 12"));
}

#[test]
fn term_view_overlays() {
    let view = GameView::default();

    let paused = text(&view.render(&snapshot(Scene::Playing { paused: true }), FRAME_VIEWPORT));
    assert!(paused.contains("PAUSED"));

    let mut snap = snapshot(Scene::GameOver);
    snap.score = 7;
    snap.blink_visible = true;
    let shown = text(&view.render(&snap, FRAME_VIEWPORT));
    assert!(shown.contains("GAME OVER"));
    assert!(shown.contains("score 7"));
    assert!(shown.contains("high score 12"));
    assert!(shown.contains("press enter to replay"));

    snap.blink_visible = false;
    let hidden = text(&view.render(&snap, FRAME_VIEWPORT));
    assert!(!hidden.contains("press enter to replay"));
}

#[test]
fn term_view_tiny_viewport_does_not_panic() {
    let view = GameView::default();
    for scene in [Scene::Start, Scene::Playing { paused: true }, Scene::GameOver] {
        let fb = view.render(&snapshot(scene), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
    let fb = view.render(&GameSnapshot::default(), Viewport::new(0, 0));
    assert!(fb.cells().is_empty());
}

#[test]
fn term_view_huge_board_is_clipped_not_overflowed() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    for scene in [Scene::Start, Scene::Playing { paused: false }, Scene::GameOver] {
        let snap = GameSnapshot {
            width: 400_000,
            height: 100,
            cell_size: 10,
            scene,
            segments: vec![Position::new(200_000, 50)],
            blink_visible: true,
            ..GameSnapshot::default()
        };
        let fb = view.render(&snap, viewport);
        assert_eq!((fb.width(), fb.height()), (80, 24));
        assert_eq!(
            view.to_game_coords(&snap, viewport, 79, 6),
            Some(Position::new(395, 5))
        );
    }
}
