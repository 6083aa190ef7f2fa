// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::{PresentMode, PrimaryWindow, WindowResolution};
use bevy::winit::WinitWindows;
use std::io::Cursor;
use windflower::WindFlowerPlugin;
use winit::window::Icon;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb_u8(0xFC, 0xFB, 0xF2)))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Windflower".into(),
                        resolution: WindowResolution::new(1280, 800),
                        present_mode: PresentMode::AutoVsync,
                        resize_constraints: WindowResizeConstraints {
                            min_width: 640.0,
                            min_height: 480.0,
                            ..default()
                        },
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "info,wgpu=error,naga=warn,windvane=debug,windflower=debug".into(),
                    ..default()
                }),
        )
        .add_plugins(WindFlowerPlugin)
        .add_systems(Startup, set_window_icon)
        .run();
}

fn set_window_icon(
    windows: Option<NonSend<WinitWindows>>,
    primary_window: Query<Entity, With<PrimaryWindow>>,
) {
    let Some(windows) = windows else {
        return;
    };
    let Ok(primary_entity) = primary_window.single() else {
        return;
    };
    let Some(primary) = windows.get_window(primary_entity) else {
        return;
    };
    let icon_buf = Cursor::new(include_bytes!("../assets/icons/icon.png"));
    match image::load(icon_buf, image::ImageFormat::Png) {
        Ok(image) => {
            let image = image.into_rgba8();
            let (width, height) = image.dimensions();
            match Icon::from_rgba(image.into_raw(), width, height) {
                Ok(icon) => primary.set_window_icon(Some(icon)),
                Err(err) => warn!("Invalid window icon: {err}"),
            }
        }
        Err(err) => warn!("Could not decode window icon: {err}"),
    }
}
