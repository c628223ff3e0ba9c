// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use bevy_egui::EguiPlugin;
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;

mod catalog;
mod cli;
mod settings;
mod ui;

use catalog::{CatalogPaths, CatalogPlugin};
use cli::{Cli, Commands};
use settings::{io::load_settings_from_file, AppSettings};
use ui::EditorUiPlugin;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let app_settings: AppSettings = load_settings_from_file().unwrap_or_else(|e| {
        eprintln!("Ignoring unreadable app settings: {}", e);
        AppSettings::default()
    });
    let paths = CatalogPaths::new(app_settings.resolve_catalog_root(cli.root.as_deref()));

    if let Some(Commands::Check) = cli.command {
        return cli::check::run(paths);
    }

    let exit = App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive(Duration::from_secs_f32(1.0 / 30.0)),
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .insert_resource(app_settings)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Store Manager (Offline)".into(),
                        resolution: (1100.0, 700.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(CatalogPlugin { paths })
        .add_plugins(EditorUiPlugin)
        .run();

    if exit.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
