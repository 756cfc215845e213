//! Animated image slider demo
//! Shows seven photos with a title and today's date, logging every callback

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = animated_image_slide::settings::Settings::load();
    let size = iced::Size::new(settings.window_width, settings.window_height);

    // iced 0.14 boots through an Fn, so each boot gets its own copy
    let boot = move || app::App::new(settings.clone());

    iced::application(boot, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(size)
        .antialiasing(true)
        .run()
}
