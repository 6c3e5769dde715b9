#[cfg(test)]
mod slingshot_tests {
    use bevy::ecs::message::MessageReader;
    use bevy::prelude::*;

    use crate::physics::{LinearVelocity, RigidBody};
    use crate::prelude::*;

    /// Camera looking down -Z with the cursor over `(x, y)`.
    fn pointer_at(x: f32, y: f32) -> PointerRay {
        PointerRay::new(Ray3d::new(Vec3::new(x, y, 10.0), Dir3::NEG_Z), Dir3::NEG_Z)
    }

    #[derive(Resource, Default)]
    struct LaunchLog(Vec<SlingshotLaunched>);

    #[derive(Resource, Default)]
    struct DragLog(Vec<SlingshotDragStarted>);

    fn record_messages(
        mut launches: MessageReader<SlingshotLaunched>,
        mut drags: MessageReader<SlingshotDragStarted>,
        mut launch_log: ResMut<LaunchLog>,
        mut drag_log: ResMut<DragLog>,
    ) {
        launch_log.0.extend(launches.read().copied());
        drag_log.0.extend(drags.read().copied());
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SlingshotCorePlugin);
        app.init_resource::<LaunchLog>();
        app.init_resource::<DragLog>();
        app.add_systems(Update, record_messages.after(SlingshotSystems));
        app
    }

    /// Anchor A at the origin, anchor B at (2, 0, 0).
    fn spawn_slingshot(app: &mut App, template: Option<ProjectileTemplate>) -> Entity {
        let world = app.world_mut();
        let anchor = world.spawn(Transform::from_xyz(0.0, 0.0, 0.0)).id();
        let band_end = world.spawn(Transform::from_xyz(2.0, 0.0, 0.0)).id();

        let mut slingshot = Slingshot::new(anchor, band_end);
        slingshot.template = template;
        world.spawn(slingshot).id()
    }

    fn step(app: &mut App, input: SlingshotInput) {
        app.insert_resource(input);
        app.update();
    }

    fn state(app: &App, slingshot: Entity) -> SlingshotState {
        *app.world().get::<SlingshotState>(slingshot).unwrap()
    }

    fn band(app: &App, slingshot: Entity) -> RubberBand {
        app.world().get::<RubberBand>(slingshot).unwrap().clone()
    }

    fn projectile_count(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<SlingshotProjectile>>()
            .iter(app.world())
            .count()
    }

    fn template() -> ProjectileTemplate {
        ProjectileTemplate {
            radius: 0.2,
            mass: 0.5,
        }
    }

    #[test]
    fn test_press_spawns_kinematic_projectile_at_anchor() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));

        step(&mut app, SlingshotInput::press());

        let SlingshotState::Dragging(projectile) = state(&app, slingshot) else {
            panic!("Slingshot should be dragging after press");
        };
        let world = app.world();
        assert_eq!(world.get::<Transform>(projectile).unwrap().translation, Vec3::ZERO);
        assert_eq!(world.get::<RigidBody>(projectile), Some(&RigidBody::Kinematic));
        assert_eq!(
            world.get::<SlingshotProjectile>(projectile).unwrap().slingshot,
            slingshot
        );

        let band = band(&app, slingshot);
        assert!(band.visible, "Band should be shown while dragging");
        assert_eq!(band.points, [Vec3::ZERO, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)]);

        let drags = &app.world().resource::<DragLog>().0;
        assert_eq!(drags.len(), 1);
        assert_eq!(drags[0].projectile, projectile);
    }

    #[test]
    fn test_press_without_template_is_noop() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, None);

        step(&mut app, SlingshotInput::press());

        assert_eq!(state(&app, slingshot), SlingshotState::Idle);
        assert!(!band(&app, slingshot).visible);
        assert_eq!(projectile_count(&mut app), 0);
    }

    #[test]
    fn test_hold_moves_projectile_to_fixed_offset() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));

        step(&mut app, SlingshotInput::press());
        step(&mut app, SlingshotInput::held().with_pointer(pointer_at(-7.0, 0.0)));

        let projectile = state(&app, slingshot).projectile().unwrap();
        let position = app.world().get::<Transform>(projectile).unwrap().translation;

        assert!((position - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((band(&app, slingshot).points[1] - position).length() < 1e-6);
    }

    #[test]
    fn test_hold_without_pointer_keeps_projectile() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));

        step(&mut app, SlingshotInput::press());
        step(&mut app, SlingshotInput::held().with_pointer(pointer_at(0.0, -3.0)));
        step(&mut app, SlingshotInput::held());

        let projectile = state(&app, slingshot).projectile().unwrap();
        let position = app.world().get::<Transform>(projectile).unwrap().translation;
        assert!((position - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_hold_without_press_leaves_state_unchanged() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));

        step(&mut app, SlingshotInput::default());
        let before = band(&app, slingshot);

        step(&mut app, SlingshotInput::held().with_pointer(pointer_at(-1.0, 0.0)));

        assert_eq!(state(&app, slingshot), SlingshotState::Idle);
        assert_eq!(band(&app, slingshot), before);
        assert_eq!(projectile_count(&mut app), 0);
    }

    #[test]
    fn test_release_launches_with_rolled_impulse() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));

        step(&mut app, SlingshotInput::press());
        step(&mut app, SlingshotInput::held().with_pointer(pointer_at(-1.0, 0.0)));
        let projectile = state(&app, slingshot).projectile().unwrap();

        step(&mut app, SlingshotInput::release());

        assert_eq!(state(&app, slingshot), SlingshotState::Idle);
        assert!(!band(&app, slingshot).visible, "Band should hide after release");

        let world = app.world();
        assert_eq!(world.get::<RigidBody>(projectile), Some(&RigidBody::Dynamic));

        let angle = 340.0_f32.to_radians();
        let expected_impulse = Vec3::new(angle.cos(), angle.sin(), 0.0) * 1000.0;

        let launches = &world.resource::<LaunchLog>().0;
        assert_eq!(launches.len(), 1);
        assert_eq!(launches[0].projectile, projectile);
        assert!((launches[0].impulse - expected_impulse).length() < 1e-2);
        assert!((launches[0].impulse.length() - 1000.0).abs() < 1e-2);

        // Velocity change is impulse / mass
        let velocity = world.get::<LinearVelocity>(projectile).unwrap();
        let expected_velocity = expected_impulse / 0.5;
        assert!((velocity.0.x - expected_velocity.x).abs() < 1e-2);
        assert!((velocity.0.y - expected_velocity.y).abs() < 1e-2);
    }

    #[test]
    fn test_release_without_projectile_is_noop() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));

        step(&mut app, SlingshotInput::release());

        assert_eq!(state(&app, slingshot), SlingshotState::Idle);
        assert!(app.world().resource::<LaunchLog>().0.is_empty());
    }

    #[test]
    fn test_release_while_held_does_not_launch() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));

        step(&mut app, SlingshotInput::press());
        step(
            &mut app,
            SlingshotInput {
                just_released: true,
                ..SlingshotInput::held()
            },
        );

        assert!(state(&app, slingshot).is_dragging());
        assert!(app.world().resource::<LaunchLog>().0.is_empty());
    }

    #[test]
    fn test_second_press_while_dragging_spawns_nothing() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));

        step(&mut app, SlingshotInput::press());
        let first = state(&app, slingshot);
        step(&mut app, SlingshotInput::press());

        assert_eq!(state(&app, slingshot), first);
        assert_eq!(projectile_count(&mut app), 1);
    }

    #[test]
    fn test_launched_projectile_is_forgotten() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));

        step(&mut app, SlingshotInput::press());
        step(&mut app, SlingshotInput::held().with_pointer(pointer_at(-1.0, 0.0)));
        step(&mut app, SlingshotInput::release());
        step(&mut app, SlingshotInput::press());

        // Old projectile stays in the world, a new one is held
        assert_eq!(projectile_count(&mut app), 2);
        assert!(state(&app, slingshot).is_dragging());
        assert_eq!(band(&app, slingshot).points[1], Vec3::ZERO);
    }

    #[test]
    fn test_band_endpoints_follow_anchors_when_idle() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));
        let (anchor, band_end) = {
            let config = app.world().get::<Slingshot>(slingshot).unwrap();
            (config.anchor, config.band_end)
        };

        step(&mut app, SlingshotInput::default());
        let middle = band(&app, slingshot).points[1];

        app.world_mut().get_mut::<Transform>(anchor).unwrap().translation = Vec3::new(0.0, 1.0, 0.0);
        app.world_mut().get_mut::<Transform>(band_end).unwrap().translation = Vec3::new(3.0, 1.0, 0.0);
        step(&mut app, SlingshotInput::default());
        step(&mut app, SlingshotInput::default());

        let band = band(&app, slingshot);
        assert_eq!(band.points[0], Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(band.points[1], middle);
        assert_eq!(band.points[2], Vec3::new(3.0, 1.0, 0.0));
    }

    #[test]
    fn test_despawned_projectile_resets_slingshot() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));

        step(&mut app, SlingshotInput::press());
        let projectile = state(&app, slingshot).projectile().unwrap();
        app.world_mut().despawn(projectile);

        step(&mut app, SlingshotInput::held().with_pointer(pointer_at(-1.0, 0.0)));

        assert_eq!(state(&app, slingshot), SlingshotState::Idle);
        assert!(!band(&app, slingshot).visible);
    }

    #[test]
    fn test_custom_offset_and_impulse() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));
        {
            let mut config = app.world_mut().get_mut::<Slingshot>(slingshot).unwrap();
            config.drag_back_offset = 2.5;
            config.launch_impulse = 40.0;
            config.launch_roll_degrees = 0.0;
        }

        step(&mut app, SlingshotInput::press());
        step(&mut app, SlingshotInput::held().with_pointer(pointer_at(0.0, -9.0)));
        let projectile = state(&app, slingshot).projectile().unwrap();
        let position = app.world().get::<Transform>(projectile).unwrap().translation;
        assert!((position - Vec3::new(0.0, -2.5, 0.0)).length() < 1e-5);

        step(&mut app, SlingshotInput::release());

        let launches = &app.world().resource::<LaunchLog>().0;
        assert!((launches[0].impulse - Vec3::new(0.0, 40.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_anchors_under_a_rig_use_world_positions() {
        let mut app = test_app();
        let slingshot = {
            let world = app.world_mut();
            let rig = world.spawn(Transform::from_xyz(5.0, 0.0, 0.0)).id();
            let anchor = world.spawn((Transform::default(), ChildOf(rig))).id();
            let band_end = world.spawn((Transform::from_xyz(2.0, 0.0, 0.0), ChildOf(rig))).id();
            world
                .spawn(Slingshot::new(anchor, band_end).with_template(template()))
                .id()
        };

        step(&mut app, SlingshotInput::press());

        let projectile = state(&app, slingshot).projectile().unwrap();
        let spawned_at = app.world().get::<Transform>(projectile).unwrap().translation;
        assert_eq!(spawned_at, Vec3::new(5.0, 0.0, 0.0));

        let band_points = band(&app, slingshot).points;
        assert_eq!(band_points[0], Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(band_points[2], Vec3::new(7.0, 0.0, 0.0));

        // Pull toward -X from the world-space anchor
        step(&mut app, SlingshotInput::held().with_pointer(pointer_at(-3.0, 0.0)));
        let pulled_to = app.world().get::<Transform>(projectile).unwrap().translation;
        assert!((pulled_to - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-5);

        step(&mut app, SlingshotInput::release());
        let launches = &app.world().resource::<LaunchLog>().0;
        let angle = 340.0_f32.to_radians();
        let expected = Vec3::new(angle.cos(), angle.sin(), 0.0) * 1000.0;
        assert!((launches[0].impulse - expected).length() < 1e-2);
    }

    #[test]
    fn test_anchor_under_moved_rig_is_tracked_same_frame() {
        let mut app = test_app();
        let (slingshot, rig) = {
            let world = app.world_mut();
            let rig = world.spawn(Transform::from_xyz(5.0, 0.0, 0.0)).id();
            let anchor = world.spawn((Transform::from_xyz(0.0, 1.0, 0.0), ChildOf(rig))).id();
            let band_end = world.spawn((Transform::from_xyz(2.0, 1.0, 0.0), ChildOf(rig))).id();
            let slingshot = world.spawn(Slingshot::new(anchor, band_end)).id();
            (slingshot, rig)
        };

        step(&mut app, SlingshotInput::default());
        app.world_mut().get_mut::<Transform>(rig).unwrap().translation = Vec3::new(-3.0, 0.0, 0.0);
        step(&mut app, SlingshotInput::default());

        let band_points = band(&app, slingshot).points;
        assert_eq!(band_points[0], Vec3::new(-3.0, 1.0, 0.0));
        assert_eq!(band_points[2], Vec3::new(-1.0, 1.0, 0.0));
    }

    #[test]
    fn test_release_with_missing_anchor_still_returns_to_idle() {
        let mut app = test_app();
        let slingshot = spawn_slingshot(&mut app, Some(template()));

        step(&mut app, SlingshotInput::press());
        let projectile = state(&app, slingshot).projectile().unwrap();
        let anchor = app.world().get::<Slingshot>(slingshot).unwrap().anchor;
        app.world_mut().despawn(anchor);

        step(&mut app, SlingshotInput::release());

        assert_eq!(state(&app, slingshot), SlingshotState::Idle);
        assert!(!band(&app, slingshot).visible, "Band should hide even without an anchor");
        assert_eq!(app.world().get::<RigidBody>(projectile), Some(&RigidBody::Dynamic));
        assert!(app.world().resource::<LaunchLog>().0.is_empty());
    }
}
