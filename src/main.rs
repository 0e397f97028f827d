mod app;
mod clock;
mod day_time;
mod glyph;
mod view;
mod weather;

use anyhow::Context;
use app::{Flags, WeatherApp};
use iced::{Application, Settings, Size};
use log::{debug, info, LevelFilter};
use weather::ScreenData;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let screen = ScreenData::builtin()?;
    info!(
        "Showing {} with {} forecast days",
        screen.city_name,
        screen.forecast.len()
    );
    for info in &screen.forecast {
        debug!(
            "Forecast {} ({}): {:?} {}°C",
            info.day, info.day_abbreviation, info.icon, info.temperature
        );
    }

    let mut settings = Settings::with_flags(Flags::new(screen));
    settings.window.size = Size::new(390.0, 844.0);
    settings.antialiasing = true;

    WeatherApp::run(settings).context("Error running weather window")?;
    Ok(())
}
