//! Entry point for the LinguaLearn companion desktop app.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

mod components;
mod prefs;
mod state;
mod theme;

const APP_CSS: &str = include_str!("style.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("lingua_app=info,lingua_core=info,lingua_gemini=info")
        .init();

    let user = std::env::var("LINGUA_USER").ok();

    let window_title = match &user {
        Some(name) => format!("LinguaLearn - {}", name),
        None => "LinguaLearn".to_string(),
    };

    tracing::info!("Starting {}", window_title);

    let wb = WindowBuilder::new()
        .with_title(&window_title)
        .with_inner_size(LogicalSize::new(960.0, 680.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(r#"<style>{}</style>"#, APP_CSS)),
        )
        .launch(components::app::App);
}
