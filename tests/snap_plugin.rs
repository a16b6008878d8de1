use std::time::Duration;

use bevy::math::curve::easing::EaseFunction;
use bevy::prelude::*;
use bevy_viewport_snap::CancelSnap;
use bevy_viewport_snap::Decelerate;
use bevy_viewport_snap::DragPan;
use bevy_viewport_snap::DragReleased;
use bevy_viewport_snap::DragStarted;
use bevy_viewport_snap::PausableBehavior;
use bevy_viewport_snap::PinchZoom;
use bevy_viewport_snap::Snap;
use bevy_viewport_snap::SnapBegin;
use bevy_viewport_snap::SnapConfig;
use bevy_viewport_snap::SnapEnd;
use bevy_viewport_snap::SnapOptions;
use bevy_viewport_snap::SnapTo;
use bevy_viewport_snap::Viewport;
use bevy_viewport_snap::ViewportContainer;
use bevy_viewport_snap::ViewportResized;
use bevy_viewport_snap::ViewportSnapPlugin;
use bevy_viewport_snap::WheelZoom;

#[derive(Resource, Default)]
struct Lifecycle {
    begun: Vec<Vec2>,
    ended: Vec<(Vec2, bool)>,
}

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(ViewportSnapPlugin)
        .init_resource::<Time>()
        .init_resource::<Lifecycle>()
        .add_observer(|begin: On<SnapBegin>, mut lifecycle: ResMut<Lifecycle>| {
            lifecycle.begun.push(begin.destination);
        })
        .add_observer(|end: On<SnapEnd>, mut lifecycle: ResMut<Lifecycle>| {
            lifecycle.ended.push((end.destination, end.interrupted));
        });
    app
}

fn spawn_viewport(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            Viewport::new(800.0, 600.0),
            DragPan::default(),
            WheelZoom::default(),
            PinchZoom::default(),
            Decelerate::default(),
        ))
        .id()
}

macro_rules! trigger {
    ($app:expr, $event:expr $(,)?) => {{
        $app.world_mut().trigger($event);
        $app.world_mut().flush();
    }};
}

fn advance(app: &mut App, ms: u64) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(ms));
    app.update();
}

fn position(app: &App, viewport: Entity) -> Vec2 {
    app.world()
        .get::<ViewportContainer>(viewport)
        .map(|container| container.position)
        .unwrap()
}

fn siblings_paused(app: &App, viewport: Entity) -> [bool; 3] {
    let world = app.world();
    [
        world.get::<DragPan>(viewport).unwrap().paused,
        world.get::<WheelZoom>(viewport).unwrap().paused,
        world.get::<PinchZoom>(viewport).unwrap().paused,
    ]
}

#[test]
fn snap_moves_container_and_restores_siblings() {
    let mut app = test_app();
    let viewport = spawn_viewport(&mut app);
    let target = Vec2::new(-200.0, 150.0);

    trigger!(app, SnapTo::new(viewport, target));
    assert_eq!(siblings_paused(&app, viewport), [true, true, true]);
    assert_eq!(app.world().resource::<Lifecycle>().begun, vec![target]);

    advance(&mut app, 500);
    let halfway = position(&app, viewport);
    assert!((halfway - target / 2.0).length() < 1e-3);
    assert!(app.world().get::<Snap>(viewport).unwrap().is_active());

    advance(&mut app, 600);
    assert_eq!(position(&app, viewport), target);

    // Without remove_on_complete the settled snap stays installed
    let snap = app.world().get::<Snap>(viewport).unwrap();
    assert!(snap.is_settled());
    assert_eq!(siblings_paused(&app, viewport), [false, false, false]);
    assert_eq!(
        app.world().resource::<Lifecycle>().ended,
        vec![(target, false)]
    );
}

#[test]
fn remove_on_complete_removes_snap() {
    let mut app = test_app();
    let viewport = spawn_viewport(&mut app);

    trigger!(
        app,
        SnapTo::new(viewport, Vec2::new(10.0, 10.0)).with_options(
            SnapOptions::default()
                .with_duration_ms(200.0)
                .remove_on_complete(),
        ),
    );
    advance(&mut app, 250);

    assert!(app.world().get::<Snap>(viewport).is_none());
    assert_eq!(position(&app, viewport), Vec2::new(10.0, 10.0));
    assert_eq!(siblings_paused(&app, viewport), [false, false, false]);
    assert_eq!(
        app.world().resource::<Lifecycle>().ended,
        vec![(Vec2::new(10.0, 10.0), false)]
    );
}

#[test]
fn centered_snap_targets_viewport_center() {
    let mut app = test_app();
    let viewport = spawn_viewport(&mut app);
    app.world_mut()
        .get_mut::<ViewportContainer>(viewport)
        .unwrap()
        .scale = Vec2::splat(2.0);

    trigger!(
        app,
        SnapTo::new(viewport, Vec2::new(100.0, 50.0))
            .with_options(SnapOptions::default().centered()),
    );

    // world screen size is (400, 300)
    let expected = Vec2::new((200.0 - 100.0) * 2.0, (150.0 - 50.0) * 2.0);
    let snap = app.world().get::<Snap>(viewport).unwrap();
    assert_eq!(snap.destination(), expected);

    // Resizing mid-flight does not move the destination
    app.world_mut().get_mut::<Viewport>(viewport).unwrap().screen_width = 1600.0;
    trigger!(app, ViewportResized { viewport });
    advance(&mut app, 1000);
    assert_eq!(position(&app, viewport), expected);
}

#[test]
fn paused_snap_holds_position() {
    let mut app = test_app();
    let viewport = spawn_viewport(&mut app);

    trigger!(app, SnapTo::new(viewport, Vec2::new(50.0, 50.0)));
    app.world_mut().get_mut::<Snap>(viewport).unwrap().pause();

    for _ in 0..5 {
        advance(&mut app, 400);
    }
    assert_eq!(position(&app, viewport), Vec2::ZERO);

    app.world_mut().get_mut::<Snap>(viewport).unwrap().resume();
    advance(&mut app, 1000);
    assert_eq!(position(&app, viewport), Vec2::new(50.0, 50.0));
}

#[test]
fn resize_stops_snap_when_configured() {
    let mut app = test_app();
    let viewport = spawn_viewport(&mut app);
    let target = Vec2::new(300.0, 0.0);

    trigger!(
        app,
        SnapTo::new(viewport, target).with_options(SnapOptions::default().stop_on_resize()),
    );
    advance(&mut app, 250);
    let stopped_at = position(&app, viewport);

    trigger!(app, ViewportResized { viewport });
    assert!(app.world().get::<Snap>(viewport).unwrap().is_settled());
    assert_eq!(siblings_paused(&app, viewport), [false, false, false]);
    assert_eq!(
        app.world().resource::<Lifecycle>().ended,
        vec![(target, true)]
    );

    advance(&mut app, 1000);
    assert_eq!(position(&app, viewport), stopped_at);

    // A second resize finds nothing left to stop
    trigger!(app, ViewportResized { viewport });
    assert_eq!(app.world().resource::<Lifecycle>().ended.len(), 1);
}

#[test]
fn drag_start_interrupts_only_interruptible_snaps() {
    let mut app = test_app();
    let viewport = spawn_viewport(&mut app);

    trigger!(app, SnapTo::new(viewport, Vec2::ONE));
    trigger!(app, DragStarted { viewport });
    advance(&mut app, 100);
    assert!(app.world().get::<Snap>(viewport).unwrap().is_active());
    assert!(app.world().get::<DragPan>(viewport).unwrap().paused);

    trigger!(
        app,
        SnapTo::new(viewport, Vec2::new(40.0, 40.0))
            .with_options(SnapOptions::default().drag_interrupt()),
    );
    assert!(!app.world().get::<DragPan>(viewport).unwrap().paused);

    trigger!(app, DragStarted { viewport });
    assert!(app.world().get::<Snap>(viewport).unwrap().is_settled());
    assert_eq!(siblings_paused(&app, viewport), [false, false, false]);
}

#[test]
fn release_hands_velocity_to_deceleration() {
    let mut app = test_app();
    let viewport = spawn_viewport(&mut app);
    app.world_mut()
        .get_mut::<Decelerate>(viewport)
        .unwrap()
        .velocity = Vec2::new(9.0, 9.0);

    trigger!(
        app,
        SnapTo::new(viewport, Vec2::ONE).with_options(
            SnapOptions::default()
                .drag_interrupt()
                .with_friction(0.5),
        ),
    );
    // starting a snap cancels momentum
    assert_eq!(
        app.world().get::<Decelerate>(viewport).unwrap().velocity,
        Vec2::ZERO
    );

    trigger!(app, DragReleased { viewport });
    assert_eq!(
        app.world()
            .get::<Decelerate>(viewport)
            .unwrap()
            .percent_change,
        Vec2::splat(Decelerate::DEFAULT_FRICTION)
    );

    app.world_mut()
        .get_mut::<Decelerate>(viewport)
        .unwrap()
        .velocity = Vec2::new(0.0, 4.0);
    trigger!(app, DragReleased { viewport });
    assert_eq!(
        app.world()
            .get::<Decelerate>(viewport)
            .unwrap()
            .percent_change,
        Vec2::splat(0.5)
    );
}

#[test]
fn new_snap_replaces_active_snap() {
    let mut app = test_app();
    let viewport = spawn_viewport(&mut app);

    trigger!(app, SnapTo::new(viewport, Vec2::new(100.0, 0.0)));
    advance(&mut app, 500);
    trigger!(app, SnapTo::new(viewport, Vec2::new(0.0, 100.0)));

    assert_eq!(siblings_paused(&app, viewport), [true, true, true]);
    assert_eq!(
        app.world().resource::<Lifecycle>().ended,
        vec![(Vec2::new(100.0, 0.0), true)]
    );

    advance(&mut app, 1000);
    assert_eq!(position(&app, viewport), Vec2::new(0.0, 100.0));
    assert_eq!(siblings_paused(&app, viewport), [false, false, false]);
}

#[test]
fn cancel_removes_snap_and_restores_siblings() {
    let mut app = test_app();
    let viewport = spawn_viewport(&mut app);

    trigger!(app, SnapTo::new(viewport, Vec2::new(100.0, 0.0)));
    advance(&mut app, 200);
    trigger!(app, CancelSnap { viewport });

    assert!(app.world().get::<Snap>(viewport).is_none());
    assert_eq!(siblings_paused(&app, viewport), [false, false, false]);
    assert_eq!(
        app.world().resource::<Lifecycle>().ended,
        vec![(Vec2::new(100.0, 0.0), true)]
    );
}

#[test]
fn config_supplies_default_options() {
    let mut app = App::new();
    app.insert_resource(SnapConfig {
        default_options: SnapOptions::default()
            .with_duration_ms(100.0)
            .with_easing(EaseFunction::Linear)
            .zoom_interrupt(),
    })
    .add_plugins(ViewportSnapPlugin)
    .init_resource::<Time>();
    let viewport = spawn_viewport(&mut app);

    trigger!(app, SnapTo::new(viewport, Vec2::new(20.0, 0.0)));
    assert_eq!(siblings_paused(&app, viewport), [true, false, false]);

    advance(&mut app, 50);
    assert!((position(&app, viewport).x - 10.0).abs() < 1e-3);

    advance(&mut app, 50);
    assert_eq!(position(&app, viewport), Vec2::new(20.0, 0.0));
}

#[test]
fn snap_without_siblings_still_moves() {
    let mut app = test_app();
    let viewport = app.world_mut().spawn(Viewport::new(640.0, 480.0)).id();

    trigger!(app, SnapTo::new(viewport, Vec2::new(5.0, 5.0)));
    trigger!(app, DragReleased { viewport });
    advance(&mut app, 1000);

    assert_eq!(position(&app, viewport), Vec2::new(5.0, 5.0));
}

#[test]
fn snap_begin_observers_see_the_new_snap() {
    #[derive(Resource, Default)]
    struct Seen(Vec<Option<Vec2>>);

    let mut app = test_app();
    app.init_resource::<Seen>().add_observer(
        |begin: On<SnapBegin>, snaps: Query<&Snap>, mut seen: ResMut<Seen>| {
            let installed = snaps
                .get(begin.viewport)
                .ok()
                .filter(|snap| snap.is_active())
                .map(Snap::destination);
            seen.0.push(installed);
        },
    );
    let viewport = spawn_viewport(&mut app);

    trigger!(app, SnapTo::new(viewport, Vec2::new(100.0, 0.0)));
    advance(&mut app, 200);
    trigger!(app, SnapTo::new(viewport, Vec2::new(0.0, 100.0)));

    assert_eq!(
        app.world().resource::<Seen>().0,
        vec![Some(Vec2::new(100.0, 0.0)), Some(Vec2::new(0.0, 100.0))]
    );
}

#[test]
fn cancel_from_snap_begin_observer_stops_snap() {
    let mut app = test_app();
    app.add_observer(|begin: On<SnapBegin>, mut commands: Commands| {
        commands.trigger(CancelSnap {
            viewport: begin.viewport,
        });
    });
    let viewport = spawn_viewport(&mut app);

    trigger!(app, SnapTo::new(viewport, Vec2::new(100.0, 0.0)));

    assert!(app.world().get::<Snap>(viewport).is_none());
    assert_eq!(siblings_paused(&app, viewport), [false, false, false]);
    assert_eq!(
        app.world().resource::<Lifecycle>().ended,
        vec![(Vec2::new(100.0, 0.0), true)]
    );

    advance(&mut app, 500);
    assert_eq!(position(&app, viewport), Vec2::ZERO);
}
