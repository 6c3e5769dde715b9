//! Slingshot example: drag with the left mouse button, release to fire.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy_slingshot::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(PhysicsPlugins::default())
        .add_plugins(SlingshotPluginGroup)
        .insert_resource(SlingshotConfig {
            debug_draw: true,
            ..Default::default()
        })
        .add_systems(Startup, setup)
        .add_systems(Update, (dress_projectiles, count_shots, update_ui))
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Camera looking down -Z so the slingshot plays in the XY plane
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(4.0, 3.0, 18.0).looking_at(Vec3::new(4.0, 3.0, 0.0), Vec3::Y),
        SlingshotCamera,
    ));

    // Light
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.5, 0.5, 0.0)),
    ));

    // Ground
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(60.0, 0.5, 4.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.5, 0.3),
            ..default()
        })),
        Transform::from_xyz(10.0, -0.25, 0.0),
        RigidBody::Static,
        Collider::cuboid(60.0, 0.5, 4.0),
    ));

    // Target stack
    let crate_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let crate_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.5, 0.2),
        ..default()
    });
    for row in 0..5 {
        commands.spawn((
            Mesh3d(crate_mesh.clone()),
            MeshMaterial3d(crate_material.clone()),
            Transform::from_xyz(16.0, 0.5 + row as f32, 0.0),
            RigidBody::Dynamic,
            Collider::cuboid(1.0, 1.0, 1.0),
        ));
    }

    // Slingshot anchors
    let post_mesh = meshes.add(Sphere::new(0.15));
    let post_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.4, 0.25, 0.1),
        ..default()
    });
    let anchor = commands
        .spawn((
            Mesh3d(post_mesh.clone()),
            MeshMaterial3d(post_material.clone()),
            Transform::from_xyz(0.0, 3.0, 0.0),
        ))
        .id();
    let band_end = commands
        .spawn((
            Mesh3d(post_mesh),
            MeshMaterial3d(post_material),
            Transform::from_xyz(0.6, 3.2, 0.0),
        ))
        .id();

    commands.spawn((
        Name::new("Slingshot"),
        Slingshot::new(anchor, band_end)
            .with_template(ProjectileTemplate {
                radius: 0.25,
                mass: 20.0,
            })
            .with_drag_back_offset(1.5),
    ));

    // UI instructions
    commands.spawn((
        Text::new("Hold LMB to grab, drag to aim, release to fire\nShots: 0"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        UiText,
    ));

    commands.insert_resource(ShotCounter::default());
}

#[derive(Component)]
struct UiText;

#[derive(Resource, Default)]
struct ShotCounter {
    shots: u32,
}

/// The slingshot only spawns the physics body; give it something to look at.
fn dress_projectiles(
    mut commands: Commands,
    new_projectiles: Query<Entity, Added<SlingshotProjectile>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in new_projectiles.iter() {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Sphere::new(0.25))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.7, 0.7, 0.75),
                ..default()
            })),
        ));
    }
}

fn count_shots(mut launches: MessageReader<SlingshotLaunched>, mut counter: ResMut<ShotCounter>) {
    for launch in launches.read() {
        counter.shots += 1;
        info!("shot {} fired with impulse {}", counter.shots, launch.impulse);
    }
}

fn update_ui(counter: Res<ShotCounter>, mut ui_text: Query<&mut Text, With<UiText>>) {
    if counter.is_changed() {
        for mut text in ui_text.iter_mut() {
            text.0 = format!(
                "Hold LMB to grab, drag to aim, release to fire\nShots: {}",
                counter.shots
            );
        }
    }
}
