//! End-to-end drag gestures: live frames while the finger moves, settle
//! decisions on release.
//!
//! Defaults in play: dismissed 200, default 300, maximum 736, stretch 10,
//! compress floor 300.

use slipsheet_controller::{PanelController, PanelState, PointerEvent, SurfaceId};
use slipsheet_core::{Config, SheetFrame};
use slipsheet_testing::{script, RecordingHost};
use web_time::Instant;

fn presented_controller() -> (PanelController<RecordingHost>, RecordingHost) {
    let host = RecordingHost::new();
    let mut controller =
        PanelController::new(Config::default(), host.clone()).expect("valid config");
    controller.present();
    script::run_animations(&mut controller, Instant::now(), 300, 16);
    host.clear();
    (controller, host)
}

#[test]
fn drag_below_dismissal_threshold_dismisses() {
    let (mut controller, host) = presented_controller();

    // Down to raw 150, released with zero velocity.
    script::drag(
        &mut controller,
        SurfaceId::Content,
        &[50.0, 100.0, 150.0],
        Some(0.0),
    );
    assert_eq!(controller.state(), PanelState::Dismissing);

    // Below the compress floor the box stops shrinking and slides off.
    let drag_frames = host.frames();
    assert_eq!(
        drag_frames.last(),
        Some(&SheetFrame {
            box_height: 300.0,
            bottom_offset: 150.0,
        })
    );

    script::run_animations(&mut controller, Instant::now(), 300, 16);
    assert_eq!(host.teardown_count(), 1);
    assert_eq!(controller.state(), PanelState::Hidden);
}

#[test]
fn shallow_downward_drag_returns_to_default() {
    let (mut controller, host) = presented_controller();

    // Down to raw 250, released with zero velocity: back to 300.
    script::drag(
        &mut controller,
        SurfaceId::Content,
        &[20.0, 50.0],
        Some(0.0),
    );
    assert_eq!(controller.state(), PanelState::Presented);

    script::run_animations(&mut controller, Instant::now(), 300, 16);
    assert_eq!(
        host.last_frame(),
        Some(SheetFrame {
            box_height: 300.0,
            bottom_offset: 0.0,
        })
    );
    assert!(!host.torn_down());
}

#[test]
fn upward_drag_with_upward_velocity_expands_to_maximum() {
    let (mut controller, host) = presented_controller();

    // Up to raw 500, released still moving upward.
    script::drag(
        &mut controller,
        SurfaceId::Content,
        &[-100.0, -200.0],
        Some(-1_200.0),
    );

    script::run_animations(&mut controller, Instant::now(), 300, 16);
    assert_eq!(
        host.last_frame(),
        Some(SheetFrame {
            box_height: 736.0,
            bottom_offset: 0.0,
        })
    );
    assert_eq!(controller.state(), PanelState::Presented);
}

#[test]
fn rubber_band_zone_renders_decayed_height_but_decides_on_raw() {
    let (mut controller, host) = presented_controller();

    // Up to raw 800, well past the 736 ceiling.
    controller.handle_pointer(SurfaceId::Content, PointerEvent::Began);
    controller.handle_pointer(
        SurfaceId::Content,
        PointerEvent::Moved {
            translation_y: -500.0,
            velocity_y: None,
            time_ms: 10,
        },
    );

    // Mapped: 736 + 10·64/(64+100) ≈ 739.9.
    let live = host.last_frame().expect("live frame");
    assert!((live.box_height - 739.902_4).abs() < 1e-3);
    assert_eq!(live.bottom_offset, 0.0);

    // Release with zero velocity: the raw 800 (not the mapped 739.9)
    // drives the decision, so the sheet settles at the maximum.
    controller.handle_pointer(
        SurfaceId::Content,
        PointerEvent::Ended {
            velocity_y: Some(0.0),
        },
    );
    script::run_animations(&mut controller, Instant::now(), 300, 16);
    assert_eq!(
        host.last_frame(),
        Some(SheetFrame {
            box_height: 736.0,
            bottom_offset: 0.0,
        })
    );
}

#[test]
fn release_without_host_velocity_uses_tracked_estimate() {
    let (mut controller, host) = presented_controller();

    // Fast upward motion, 6 px/ms, but the host reports no velocity at
    // release; the impulse tracker breaks the tie upward.
    script::drag(
        &mut controller,
        SurfaceId::Content,
        &[-60.0, -120.0, -180.0],
        None,
    );

    script::run_animations(&mut controller, Instant::now(), 300, 16);
    assert_eq!(
        host.last_frame(),
        Some(SheetFrame {
            box_height: 736.0,
            bottom_offset: 0.0,
        })
    );
}

#[test]
fn cancelled_drag_snaps_back_to_baseline() {
    let (mut controller, host) = presented_controller();

    controller.handle_pointer(SurfaceId::Content, PointerEvent::Began);
    controller.handle_pointer(
        SurfaceId::Content,
        PointerEvent::Moved {
            translation_y: -300.0,
            velocity_y: Some(-2_000.0),
            time_ms: 10,
        },
    );
    controller.handle_pointer(SurfaceId::Content, PointerEvent::Cancelled);

    assert_eq!(
        host.last_frame(),
        Some(SheetFrame {
            box_height: 300.0,
            bottom_offset: 0.0,
        })
    );
    assert_eq!(controller.state(), PanelState::Presented);

    // No animation was started: ticking emits nothing further.
    let count = host.command_count();
    script::run_animations(&mut controller, Instant::now(), 300, 16);
    assert_eq!(host.command_count(), count);
}

#[test]
fn redrag_mid_settle_supersedes_the_animation() {
    let (mut controller, host) = presented_controller();

    // Expand toward the maximum, then grab the sheet mid-settle.
    script::drag(
        &mut controller,
        SurfaceId::Content,
        &[-100.0, -200.0],
        Some(-1_200.0),
    );
    let base = Instant::now();
    script::run_animations(&mut controller, base, 96, 16);
    assert!(controller.is_animating());

    controller.handle_pointer(SurfaceId::Content, PointerEvent::Began);
    assert!(!controller.is_animating(), "re-drag cancels the settle");

    // Ticking produces no animation frames; only moves drive the host.
    let count = host.command_count();
    script::run_animations(&mut controller, base, 300, 16);
    assert_eq!(host.command_count(), count);

    // The new session baselines at the settle target, not the frozen
    // mid-animation height.
    controller.handle_pointer(
        SurfaceId::Content,
        PointerEvent::Moved {
            translation_y: 0.0,
            velocity_y: None,
            time_ms: 10,
        },
    );
    assert_eq!(
        host.last_frame(),
        Some(SheetFrame {
            box_height: 736.0,
            bottom_offset: 0.0,
        })
    );
}

#[test]
fn drags_on_unregistered_surfaces_are_ignored() {
    let (mut controller, host) = presented_controller();

    // The overlay is not a drag target under the default config.
    script::drag(&mut controller, SurfaceId::Overlay, &[50.0], Some(0.0));
    assert!(host.frames().is_empty());
    assert_eq!(controller.state(), PanelState::Presented);
}

#[test]
fn overlay_drags_drive_the_same_engine_when_enabled() {
    let host = RecordingHost::new();
    let config = Config::default().with_overlay_background_dragable(true);
    let mut controller = PanelController::new(config, host.clone()).expect("valid config");
    controller.present();
    script::run_animations(&mut controller, Instant::now(), 300, 16);
    host.clear();

    script::drag(
        &mut controller,
        SurfaceId::Overlay,
        &[-100.0, -200.0],
        Some(-1_500.0),
    );
    script::run_animations(&mut controller, Instant::now(), 300, 16);
    assert_eq!(
        host.last_frame(),
        Some(SheetFrame {
            box_height: 736.0,
            bottom_offset: 0.0,
        })
    );
}

#[test]
fn pointer_events_before_present_are_ignored() {
    let host = RecordingHost::new();
    let mut controller =
        PanelController::new(Config::default(), host.clone()).expect("valid config");
    host.clear();

    script::drag(&mut controller, SurfaceId::Content, &[-100.0], Some(0.0));
    assert!(host.frames().is_empty());
    assert_eq!(controller.state(), PanelState::Hidden);
}

#[test]
fn dismissal_from_drag_slides_out_from_the_dragged_frame() {
    let (mut controller, host) = presented_controller();

    script::drag(
        &mut controller,
        SurfaceId::Content,
        &[80.0, 160.0],
        Some(3_000.0),
    );
    assert_eq!(controller.state(), PanelState::Dismissing);

    // Exit starts from the dragged frame (offset 160) and only moves
    // further off-screen.
    let frames_before = host.frames().len();
    script::run_animations(&mut controller, Instant::now(), 300, 16);
    let exit_offsets: Vec<f32> = host.frames()[frames_before..]
        .iter()
        .map(|f| f.bottom_offset)
        .collect();
    assert!(exit_offsets.windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(exit_offsets.last(), Some(&300.0));
    assert_eq!(host.teardown_count(), 1);
}
