use super::*;
use crate::config::DemoConfig;
use eframe::egui;

fn new_app() -> SwapApp {
    SwapApp::new(DemoConfig::default()).expect("default config is valid")
}

/// Run a single headless frame of the app at `time` with the provided input events.
fn run_frame_at(
    ctx: &egui::Context,
    app: &mut SwapApp,
    time: f64,
    events: Vec<egui::Event>,
) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1000.0, 600.0),
    ));
    raw.time = Some(time);
    raw.events = events;
    ctx.run(raw, |ctx| app.run_frame(ctx))
}

fn press(pos: egui::Pos2, button: egui::PointerButton) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        egui::Event::PointerButton {
            pos,
            button,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        },
    ]
}

fn release(pos: egui::Pos2, button: egui::PointerButton) -> Vec<egui::Event> {
    vec![egui::Event::PointerButton {
        pos,
        button,
        pressed: false,
        modifiers: egui::Modifiers::NONE,
    }]
}

fn key(key: egui::Key) -> Vec<egui::Event> {
    vec![egui::Event::Key {
        key,
        physical_key: Some(key),
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    }]
}

fn positions(app: &SwapApp) -> Vec<(i32, i32)> {
    app.scene.shapes.iter().map(|s| s.position).collect()
}

#[test]
fn dragging_box_tracks_cursor_until_release() {
    let mut app = new_app();
    let ctx = egui::Context::default();
    let primary = egui::PointerButton::Primary;

    run_frame_at(&ctx, &mut app, 0.0, vec![egui::Event::PointerMoved(egui::pos2(60.0, 70.0))]);
    run_frame_at(&ctx, &mut app, 0.02, press(egui::pos2(60.0, 70.0), primary));
    assert_eq!(app.interaction.dragging, Some(0));
    assert_eq!(app.interaction.drag_offset, (10, 10));

    run_frame_at(&ctx, &mut app, 0.04, vec![egui::Event::PointerMoved(egui::pos2(200.0, 300.0))]);
    assert_eq!(app.scene.shapes[0].position, (190, 290));

    run_frame_at(&ctx, &mut app, 0.06, vec![egui::Event::PointerMoved(egui::pos2(250.0, 310.0))]);
    assert_eq!(app.scene.shapes[0].position, (240, 300));

    run_frame_at(&ctx, &mut app, 0.08, release(egui::pos2(250.0, 310.0), primary));
    assert_eq!(app.interaction.dragging, None);

    // Moving after release leaves the box where it was dropped
    run_frame_at(&ctx, &mut app, 0.10, vec![egui::Event::PointerMoved(egui::pos2(600.0, 500.0))]);
    assert_eq!(
        positions(&app),
        vec![(240, 300), (50, 180), (50, 300), (50, 420)]
    );
}

#[test]
fn pressing_empty_space_drags_nothing() {
    let mut app = new_app();
    let ctx = egui::Context::default();
    let before = positions(&app);

    run_frame_at(&ctx, &mut app, 0.0, press(egui::pos2(500.0, 500.0), egui::PointerButton::Primary));
    run_frame_at(&ctx, &mut app, 0.02, vec![egui::Event::PointerMoved(egui::pos2(520.0, 520.0))]);

    assert_eq!(app.interaction.dragging, None);
    assert_eq!(positions(&app), before);
}

#[test]
fn swap_gesture_exchanges_labels_after_animation() {
    let mut app = new_app();
    let ctx = egui::Context::default();
    let secondary = egui::PointerButton::Secondary;
    let colors: Vec<_> = app.scene.shapes.iter().map(|s| s.color).collect();

    run_frame_at(&ctx, &mut app, 0.0, press(egui::pos2(60.0, 70.0), secondary));
    run_frame_at(&ctx, &mut app, 0.02, release(egui::pos2(60.0, 70.0), secondary));
    assert_eq!(app.interaction.pending_swap, Some(0));

    run_frame_at(&ctx, &mut app, 1.0, press(egui::pos2(60.0, 310.0), secondary));
    run_frame_at(&ctx, &mut app, 1.02, release(egui::pos2(60.0, 310.0), secondary));
    assert_eq!(app.interaction.pending_swap, None);
    assert!(app.animator.is_animating());
    // Labels are exchanged only when the animation completes
    assert_eq!(app.scene.labels(), vec!['A', 'B', 'C', 'D']);

    run_frame_at(&ctx, &mut app, 3.5, vec![]);
    assert!(!app.animator.is_animating());
    assert_eq!(app.scene.labels(), vec!['C', 'B', 'A', 'D']);
    let after: Vec<_> = app.scene.shapes.iter().map(|s| s.color).collect();
    assert_eq!(after, colors);
    assert_eq!(
        positions(&app),
        vec![(50, 60), (50, 180), (50, 300), (50, 420)]
    );
}

#[test]
fn swap_gesture_on_same_box_cancels() {
    let mut app = new_app();
    app.press_secondary((60, 190), 0.0);
    assert_eq!(app.interaction.pending_swap, Some(1));
    app.press_secondary((60, 190), 0.1);
    assert_eq!(app.interaction.pending_swap, None);
    assert!(!app.animator.is_animating());
}

#[test]
fn swap_gesture_ignores_empty_space() {
    let mut app = new_app();
    app.press_secondary((60, 70), 0.0);
    app.press_secondary((700, 20), 0.1);
    assert_eq!(app.interaction.pending_swap, Some(0));
}

#[test]
fn input_keeps_working_during_a_swap() {
    let mut app = new_app();
    app.press_secondary((60, 70), 0.0);
    app.press_secondary((60, 190), 0.0);
    assert!(app.animator.is_animating());

    // Boxes being swapped cannot be picked up
    app.press_primary((60, 70));
    assert_eq!(app.interaction.dragging, None);

    // Other boxes can still be dragged mid-animation
    app.press_primary((60, 310));
    assert_eq!(app.interaction.dragging, Some(2));
    app.drag_to((400, 400));
    assert_eq!(app.scene.shapes[2].position, (390, 390));
    app.release_primary();

    // A second swap is rejected while the first plays
    app.press_secondary((60, 430), 0.5);
    app.press_secondary((400, 400), 0.5);
    assert_eq!(app.animator.current().map(|s| (s.a, s.b)), Some((0, 1)));
}

#[test]
fn starting_a_swap_ends_a_drag_of_the_same_box() {
    let mut app = new_app();
    app.press_primary((60, 70));
    assert_eq!(app.interaction.dragging, Some(0));
    app.press_secondary((60, 70), 0.0);
    app.press_secondary((60, 190), 0.0);
    assert_eq!(app.interaction.dragging, None);
}

#[test]
fn keyboard_sorts_and_resets_layout() {
    let mut app = new_app();
    let ctx = egui::Context::default();

    run_frame_at(&ctx, &mut app, 0.0, key(egui::Key::D));
    assert_eq!(app.scene.labels(), vec!['D', 'C', 'B', 'A']);
    assert_eq!(
        positions(&app),
        vec![(50, 60), (50, 180), (50, 300), (50, 420)]
    );

    app.scene.shapes[1].position = (700, 40);
    run_frame_at(&ctx, &mut app, 0.02, key(egui::Key::R));
    assert_eq!(app.scene.shapes[1].position, (50, 180));
    assert_eq!(app.scene.labels(), vec!['D', 'C', 'B', 'A']);

    run_frame_at(&ctx, &mut app, 0.04, key(egui::Key::A));
    assert_eq!(app.scene.labels(), vec!['A', 'B', 'C', 'D']);
    assert_eq!(app.scene.shapes[0].color, [255, 0, 0]);
}

#[test]
fn h_toggles_arm_overlay() {
    let mut app = new_app();
    let ctx = egui::Context::default();
    run_frame_at(&ctx, &mut app, 0.0, key(egui::Key::H));
    assert!(!app.show_arm);
    run_frame_at(&ctx, &mut app, 0.02, key(egui::Key::H));
    assert!(app.show_arm);
}

#[test]
fn layout_commands_wait_for_running_swap() {
    let mut app = new_app();
    app.press_secondary((60, 70), 0.0);
    app.press_secondary((60, 430), 0.0);

    app.apply_layout_command(LayoutCommand::Sort(crate::types::SortOrder::Descending));
    assert_eq!(app.scene.labels(), vec!['A', 'B', 'C', 'D']);

    // Toggling the arm is always allowed
    app.apply_layout_command(LayoutCommand::ToggleArm);
    assert!(!app.show_arm);
}

#[test]
fn sorting_clears_pending_swap() {
    let mut app = new_app();
    app.press_secondary((60, 70), 0.0);
    app.apply_layout_command(LayoutCommand::Sort(crate::types::SortOrder::Descending));
    assert_eq!(app.interaction.pending_swap, None);
}

#[test]
fn frame_draws_boxes_in_their_colors() {
    let mut app = new_app();
    let ctx = egui::Context::default();
    let output = run_frame_at(&ctx, &mut app, 0.0, vec![]);

    let red_box = output.shapes.iter().any(|clipped| match &clipped.shape {
        egui::epaint::Shape::Rect(rect) => {
            rect.fill == egui::Color32::from_rgb(255, 0, 0)
                && rect.rect.min == egui::pos2(50.0, 60.0)
                && rect.rect.size() == egui::vec2(80.0, 100.0)
        }
        _ => false,
    });
    assert!(red_box, "expected a red 80x100 box at (50, 60)");

    let arm_column = output.shapes.iter().any(|clipped| match &clipped.shape {
        egui::epaint::Shape::Rect(rect) => {
            rect.fill == egui::Color32::from_rgb(60, 60, 60)
                && rect.rect.min == egui::pos2(840.0, 200.0)
        }
        _ => false,
    });
    assert!(arm_column, "expected the arm column at (840, 200)");
}

#[test]
fn pending_swap_box_is_outlined() {
    let mut app = new_app();
    let ctx = egui::Context::default();
    let outline = |output: &egui::FullOutput| {
        output.shapes.iter().any(|clipped| match &clipped.shape {
            egui::epaint::Shape::Rect(rect) => {
                rect.stroke.color == egui::Color32::from_rgb(255, 165, 0)
                    && rect.stroke.width == crate::constants::PENDING_STROKE_WIDTH
                    && rect.rect.min == egui::pos2(50.0, 180.0)
            }
            _ => false,
        })
    };

    let before = run_frame_at(&ctx, &mut app, 0.0, vec![]);
    assert!(!outline(&before));

    app.press_secondary((60, 190), 0.0);
    let after = run_frame_at(&ctx, &mut app, 0.02, vec![]);
    assert!(outline(&after), "expected an orange outline around box 1");
}

#[test]
fn stalled_frame_still_renders_and_keeps_running() {
    let mut app = new_app();
    let ctx = egui::Context::default();
    run_frame_at(&ctx, &mut app, 0.0, vec![]);
    run_frame_at(&ctx, &mut app, 1.5, key(egui::Key::D));
    assert!(!app.quit_requested);
    assert_eq!(app.scene.labels(), vec!['D', 'C', 'B', 'A']);
}

#[test]
fn clock_failure_requests_quit() {
    let mut app = new_app();
    let ctx = egui::Context::default();
    run_frame_at(&ctx, &mut app, 5.0, vec![]);
    assert!(!app.quit_requested);

    let output = run_frame_at(&ctx, &mut app, 4.0, key(egui::Key::D));
    assert!(app.quit_requested);
    // Input is not processed once the loop is ending
    assert_eq!(app.scene.labels(), vec!['A', 'B', 'C', 'D']);
    let closing = output
        .viewport_output
        .get(&egui::ViewportId::ROOT)
        .is_some_and(|viewport| viewport.commands.contains(&egui::ViewportCommand::Close));
    assert!(closing);
}
