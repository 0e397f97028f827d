use crate::weather::WeatherIcon;
use iced::Color;
use std::fmt;

/// Coarse bucket of the 24-hour clock driving the look of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayTime {
    Dawn,
    Noon,
    Dusk,
    Night,
}

impl DayTime {
    /// Every bucket, in cycle order.
    #[cfg(test)]
    pub const ALL: [DayTime; 4] = [DayTime::Dawn, DayTime::Noon, DayTime::Dusk, DayTime::Night];

    /// Classifies an hour of the day. Hours outside 0..=23 fall back to dawn.
    pub fn from_hour(hour: u32) -> DayTime {
        match hour {
            19..=23 | 0..=4 => DayTime::Night,
            5..=11 => DayTime::Dawn,
            12..=15 => DayTime::Noon,
            16..=18 => DayTime::Dusk,
            _ => DayTime::Dawn,
        }
    }

    /// The successor in the dawn → noon → dusk → night → dawn cycle.
    pub fn next(self) -> DayTime {
        match self {
            DayTime::Dawn => DayTime::Noon,
            DayTime::Noon => DayTime::Dusk,
            DayTime::Dusk => DayTime::Night,
            DayTime::Night => DayTime::Dawn,
        }
    }

    pub fn color_set(self) -> DayTimeColorSet {
        match self {
            DayTime::Dawn => DayTimeColorSet::new(palette::BLUE, palette::YELLOW),
            DayTime::Noon => DayTimeColorSet::new(palette::BLUE, palette::LIGHT_BLUE),
            DayTime::Dusk => DayTimeColorSet::new(palette::ORANGE, palette::BROWN),
            DayTime::Night => DayTimeColorSet::new(palette::BLUE, palette::BLACK),
        }
    }

    /// Icon shown in the main weather view: sun while it is light, moon after.
    pub fn icon(self) -> WeatherIcon {
        match self {
            DayTime::Dawn | DayTime::Noon => WeatherIcon::CloudSun,
            DayTime::Dusk | DayTime::Night => WeatherIcon::CloudMoon,
        }
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayTime::Dawn => "dawn",
            DayTime::Noon => "noon",
            DayTime::Dusk => "dusk",
            DayTime::Night => "night",
        };
        f.write_str(name)
    }
}

/// Background gradient colors for a [`DayTime`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTimeColorSet {
    pub primary: Color,
    pub secondary: Color,
}

impl DayTimeColorSet {
    pub const fn new(primary: Color, secondary: Color) -> Self {
        Self { primary, secondary }
    }
}

pub mod palette {
    use iced::Color;

    pub const BLUE: Color = Color::from_rgb(0.0, 0.478, 1.0);
    pub const YELLOW: Color = Color::from_rgb(1.0, 0.8, 0.0);
    pub const LIGHT_BLUE: Color = Color::from_rgb(0.529, 0.808, 0.98);
    pub const ORANGE: Color = Color::from_rgb(1.0, 0.584, 0.0);
    pub const BROWN: Color = Color::from_rgb(0.635, 0.518, 0.369);
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
}
