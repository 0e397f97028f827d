use crate::clock::{self, Clock, SystemClock};
use crate::day_time::DayTime;
use crate::view;
use crate::weather::ScreenData;
use iced::{Application, Command, Element, Theme};
use log::{debug, info};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    /// The screen was shown; carries the hour sampled at that moment.
    ScreenAppeared(u32),
    AdvanceDayTime,
}

/// Startup inputs for [`WeatherApp`].
pub struct Flags {
    pub screen: ScreenData,
    pub clock: Arc<dyn Clock>,
}

impl Flags {
    pub fn new(screen: ScreenData) -> Self {
        Self {
            screen,
            clock: Arc::new(SystemClock),
        }
    }
}

pub struct WeatherApp {
    pub screen: ScreenData,
    pub day_time: DayTime,
    appeared: bool,
    clock: Arc<dyn Clock>,
}

impl WeatherApp {
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    fn on_appear(&mut self, hour: u32) {
        if self.appeared {
            debug!("Screen already appeared, ignoring hour {}", hour);
            return;
        }
        self.appeared = true;
        self.day_time = DayTime::from_hour(hour);
        info!("Screen appeared at hour {}, starting at {}", hour, self.day_time);
    }

    fn advance(&mut self) {
        let previous = self.day_time;
        self.day_time = previous.next();
        info!(
            "Day time changed from {} to {} (icon {})",
            previous,
            self.day_time,
            self.day_time.icon().symbol_name()
        );
    }
}

impl Application for WeatherApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = Flags;

    fn new(flags: Flags) -> (WeatherApp, Command<Message>) {
        let app = WeatherApp {
            screen: flags.screen,
            // Shown until the first hour sample arrives
            day_time: DayTime::Dawn,
            appeared: false,
            clock: flags.clock,
        };
        let command = Command::perform(clock::sample_hour(app.clock()), Message::ScreenAppeared);
        (app, command)
    }

    fn title(&self) -> String {
        self.screen.city_name.clone()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ScreenAppeared(hour) => self.on_appear(hour),
            Message::AdvanceDayTime => self.advance(),
        }
        Command::none()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use proptest::prelude::*;

    fn app_with_clock(hour: u32) -> WeatherApp {
        let flags = Flags {
            screen: ScreenData::builtin().unwrap(),
            clock: Arc::new(FixedClock(hour)),
        };
        // The returned command wraps `clock::sample_hour` and cannot be
        // inspected, so tests feed `ScreenAppeared` themselves.
        let (app, _command) = WeatherApp::new(flags);
        app
    }

    #[test]
    fn test_starts_at_dawn_before_appearing() {
        let app = app_with_clock(22);
        assert_eq!(app.day_time, DayTime::Dawn);
        assert_eq!(app.title(), "Uberaba, MG");
    }

    #[tokio::test]
    async fn test_appearing_uses_sampled_hour() {
        let mut app = app_with_clock(13);
        let hour = clock::sample_hour(app.clock()).await;
        let _ = app.update(Message::ScreenAppeared(hour));
        assert_eq!(app.day_time, DayTime::Noon);
    }

    #[test]
    fn test_appearing_only_once() {
        let mut app = app_with_clock(20);
        let _ = app.update(Message::ScreenAppeared(20));
        assert_eq!(app.day_time, DayTime::Night);

        let _ = app.update(Message::AdvanceDayTime);
        assert_eq!(app.day_time, DayTime::Dawn);

        // A later appearance must not re-derive the state from the clock
        let _ = app.update(Message::ScreenAppeared(17));
        assert_eq!(app.day_time, DayTime::Dawn);
    }

    #[test]
    fn test_advance_cycles_through_all_day_times() {
        let mut app = app_with_clock(6);
        let _ = app.update(Message::ScreenAppeared(6));
        let mut seen = vec![app.day_time];
        for _ in 0..4 {
            let _ = app.update(Message::AdvanceDayTime);
            seen.push(app.day_time);
        }
        assert_eq!(
            seen,
            vec![
                DayTime::Dawn,
                DayTime::Noon,
                DayTime::Dusk,
                DayTime::Night,
                DayTime::Dawn
            ]
        );
    }

    #[test]
    fn test_view_builds_for_every_day_time() {
        let mut app = app_with_clock(0);
        let _ = app.update(Message::ScreenAppeared(0));
        let mut seen = Vec::new();
        for _ in 0..4 {
            drop(app.view());
            seen.push(app.day_time);
            let _ = app.update(Message::AdvanceDayTime);
        }
        assert_eq!(
            seen,
            vec![DayTime::Night, DayTime::Dawn, DayTime::Noon, DayTime::Dusk]
        );
        assert_eq!(app.day_time, DayTime::Night);
    }

    proptest! {
        #[test]
        fn test_initial_state_matches_classifier(hour in 0u32..24) {
            let mut app = app_with_clock(hour);
            let sampled = app.clock().current_hour();
            let _ = app.update(Message::ScreenAppeared(sampled));
            prop_assert_eq!(app.day_time, DayTime::from_hour(hour));
        }
    }
}
