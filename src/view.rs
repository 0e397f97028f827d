use crate::app::{Message, WeatherApp};
use crate::day_time::{palette, DayTimeColorSet};
use crate::glyph::WeatherGlyph;
use crate::weather::{WeatherIcon, WeatherInfo};
use iced::{
    font, gradient, theme,
    widget::{button, canvas::Canvas, column, container, row, text, Space},
    Alignment, Background, Border, Color, Element, Font, Gradient, Length, Radians, Shadow, Theme,
};
use std::f32::consts::PI;

const ROUNDED: Font = Font {
    family: font::Family::SansSerif,
    ..Font::DEFAULT
};

pub fn view(app: &WeatherApp) -> Element<Message> {
    let colors = app.day_time.color_set();

    let content = column![
        city_name(&app.screen.city_name),
        main_weather(app.day_time.icon(), app.screen.temperature),
        container(forecast_row(&app.screen.forecast)).padding(16),
        Space::with_height(Length::Fill),
        container(change_day_time_button()).padding([16, 16, 56, 16]),
    ]
    .align_items(Alignment::Center)
    .width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .style(theme::Container::Custom(Box::new(Backdrop(colors))))
        .into()
}

fn city_name(name: &str) -> Element<Message> {
    container(text(name).size(32).font(ROUNDED).style(palette::WHITE))
        .padding(16)
        .into()
}

fn main_weather<'a>(icon: WeatherIcon, temperature: i32) -> Element<'a, Message> {
    let icon = Canvas::new(WeatherGlyph::new(icon))
        .width(Length::Fixed(180.0))
        .height(Length::Fixed(180.0));

    container(
        column![
            icon,
            text(format!("{}°C", temperature))
                .size(70)
                .font(ROUNDED)
                .style(palette::WHITE),
        ]
        .spacing(10)
        .align_items(Alignment::Center),
    )
    .padding([0, 0, 40, 0])
    .into()
}

fn forecast_row(days: &[WeatherInfo]) -> Element<Message> {
    let mut forecast = row![].spacing(20).align_items(Alignment::Center);
    for info in days {
        forecast = forecast.push(weather_day(info));
    }
    forecast.into()
}

fn weather_day(info: &WeatherInfo) -> Element<Message> {
    let icon = Canvas::new(WeatherGlyph::new(info.icon))
        .width(Length::Fixed(40.0))
        .height(Length::Fixed(40.0));

    column![
        text(&info.day_abbreviation)
            .size(24)
            .font(ROUNDED)
            .style(palette::WHITE),
        container(icon).padding([0, 0, 10, 0]),
        text(format!("{}°C", info.temperature))
            .size(22)
            .font(ROUNDED)
            .style(palette::WHITE),
    ]
    .spacing(0)
    .align_items(Alignment::Center)
    .into()
}

fn change_day_time_button<'a>() -> Element<'a, Message> {
    let label = text("Change Day Time")
        .size(20)
        .font(Font {
            weight: font::Weight::Bold,
            ..ROUNDED
        })
        .horizontal_alignment(iced::alignment::Horizontal::Center)
        .vertical_alignment(iced::alignment::Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    button(label)
        .on_press(Message::AdvanceDayTime)
        .width(Length::Fixed(280.0))
        .height(Length::Fixed(50.0))
        .style(theme::Button::Custom(Box::new(PillButton)))
        .into()
}

/// Full-window gradient running from the top-trailing to the bottom-leading corner.
struct Backdrop(DayTimeColorSet);

impl container::StyleSheet for Backdrop {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let linear = gradient::Linear::new(Radians(PI * 1.25))
            .add_stop(0.0, self.0.primary)
            .add_stop(1.0, self.0.secondary);

        container::Appearance {
            background: Some(Background::Gradient(Gradient::Linear(linear))),
            text_color: Some(palette::WHITE),
            ..Default::default()
        }
    }
}

struct PillButton;

impl button::StyleSheet for PillButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(palette::WHITE)),
            text_color: palette::BLUE,
            border: Border {
                radius: 25.0.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            ..Default::default()
        }
    }

    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgb(0.9, 0.9, 0.9))),
            ..self.active(style)
        }
    }
}
