use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use cartkeeper::chat::ChatPlugin;
use cartkeeper::config::ConfigPlugin;
use cartkeeper::item::ItemPlugin;
use cartkeeper::player::{PlayerDeathEvent, PlayerPlugin, spawn_player};
use cartkeeper::vehicle::{
    CartBreakEvent, CartEnterEvent, CartExitEvent, VehiclePlugin, spawn_cart,
};

/// Engine tick rate, the usual voxel-server cadence.
const TICK_RATE: f64 = 20.0;

fn main() {
    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / TICK_RATE),
        )))
        .add_plugins(LogPlugin::default())
        .add_plugins(ConfigPlugin::default())
        .add_plugins(ChatPlugin)
        .add_plugins(ItemPlugin)
        .add_plugins(PlayerPlugin)
        .add_plugins(VehiclePlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, scenario)
        .run();
}

#[derive(Resource)]
struct DemoScene {
    player: Entity,
    named_cart: Entity,
    plain_cart: Entity,
    stray_cart: Entity,
}

fn setup(mut commands: Commands) {
    let player = spawn_player(&mut commands, "Dev", Vec3::ZERO);
    let named_cart = spawn_cart(&mut commands, Vec3::new(64.0, 0.0, 0.0), Some("Express"));
    let plain_cart = spawn_cart(&mut commands, Vec3::new(128.0, 0.0, 0.0), None);
    let stray_cart = spawn_cart(&mut commands, Vec3::new(256.0, 0.0, 0.0), None);
    commands.insert_resource(DemoScene {
        player,
        named_cart,
        plain_cart,
        stray_cart,
    });
    info!("demo scene up: one player, three carts");
}

/// Scripted smoke run: collect a cart by riding it, die in a second one,
/// break a stray third, then shut down.
fn scenario(
    mut tick: Local<u32>,
    scene: Res<DemoScene>,
    mut enters: MessageWriter<CartEnterEvent>,
    mut exits: MessageWriter<CartExitEvent>,
    mut breaks: MessageWriter<CartBreakEvent>,
    mut deaths: MessageWriter<PlayerDeathEvent>,
    mut app_exit: MessageWriter<AppExit>,
) {
    *tick += 1;
    match *tick {
        2 => {
            enters.write(CartEnterEvent {
                rider: scene.player,
                cart: scene.named_cart,
            });
        }
        4 => {
            exits.write(CartExitEvent {
                rider: scene.player,
                cart: scene.named_cart,
            });
        }
        8 => {
            enters.write(CartEnterEvent {
                rider: scene.player,
                cart: scene.plain_cart,
            });
        }
        10 => {
            deaths.write(PlayerDeathEvent {
                player: scene.player,
            });
        }
        14 => {
            breaks.write(CartBreakEvent {
                cart: scene.stray_cart,
            });
        }
        18 => {
            info!("smoke run complete");
            app_exit.write(AppExit::Success);
        }
        _ => {}
    }
}
