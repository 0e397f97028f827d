use anyhow::{bail, Context};
use serde::Deserialize;

// Screen content shipped with the binary
const SCREEN_JSON: &str = include_str!("../assets/screen.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum WeatherIcon {
    #[serde(rename = "cloud.sun.fill")]
    CloudSun,
    #[serde(rename = "cloud.moon.fill")]
    CloudMoon,
    #[serde(rename = "cloud.sun.bolt.fill")]
    CloudSunBolt,
    #[serde(rename = "wind")]
    Wind,
    #[serde(rename = "cloud.sun.rain.fill")]
    CloudSunRain,
    #[serde(rename = "cloud.rain.fill")]
    CloudRain,
}

impl WeatherIcon {
    pub fn symbol_name(self) -> &'static str {
        match self {
            WeatherIcon::CloudSun => "cloud.sun.fill",
            WeatherIcon::CloudMoon => "cloud.moon.fill",
            WeatherIcon::CloudSunBolt => "cloud.sun.bolt.fill",
            WeatherIcon::Wind => "wind",
            WeatherIcon::CloudSunRain => "cloud.sun.rain.fill",
            WeatherIcon::CloudRain => "cloud.rain.fill",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherInfo {
    pub day: String,
    #[serde(rename = "dayAbbreviation")]
    pub day_abbreviation: String,
    pub icon: WeatherIcon,
    /// Degrees Celsius
    pub temperature: i32,
}

/// Everything the screen shows besides the day-time dependent look.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScreenData {
    #[serde(rename = "cityName")]
    pub city_name: String,
    pub temperature: i32,
    pub forecast: Vec<WeatherInfo>,
}

impl ScreenData {
    /// Loads the content embedded at build time.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(SCREEN_JSON).context("Error loading embedded screen data")
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let data: ScreenData =
            serde_json::from_str(json).context("Error parsing screen data")?;
        data.validate()?;
        Ok(data)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.city_name.trim().is_empty() {
            bail!("City name must not be empty");
        }
        if let Some(index) = self
            .forecast
            .iter()
            .position(|info| info.day_abbreviation.trim().is_empty())
        {
            bail!("Forecast entry {} has an empty day abbreviation", index);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_screen_data() {
        let data = ScreenData::builtin().unwrap();
        assert_eq!(data.city_name, "Uberaba, MG");
        assert_eq!(data.temperature, 26);

        let rows: Vec<(&str, &str, WeatherIcon, i32)> = data
            .forecast
            .iter()
            .map(|info| {
                (
                    info.day.as_str(),
                    info.day_abbreviation.as_str(),
                    info.icon,
                    info.temperature,
                )
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Tuesday", "TUE", WeatherIcon::CloudSun, 27),
                ("Tuesday", "WED", WeatherIcon::CloudSunBolt, 25),
                ("Tuesday", "THU", WeatherIcon::Wind, 25),
                ("Tuesday", "FRI", WeatherIcon::CloudSunRain, 22),
                ("Tuesday", "SAT", WeatherIcon::CloudRain, 20),
            ]
        );
    }

    #[test]
    fn test_icon_symbol_names_match_data_file_names() {
        let icons = [
            WeatherIcon::CloudSun,
            WeatherIcon::CloudMoon,
            WeatherIcon::CloudSunBolt,
            WeatherIcon::Wind,
            WeatherIcon::CloudSunRain,
            WeatherIcon::CloudRain,
        ];
        for icon in icons {
            let json = format!("\"{}\"", icon.symbol_name());
            let parsed: WeatherIcon = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, icon);
        }
    }

    #[test]
    fn test_unknown_icon_is_rejected() {
        let json = r#"{
            "cityName": "Uberaba, MG",
            "temperature": 26,
            "forecast": [
                {"day": "Monday", "dayAbbreviation": "MON", "icon": "snowflake", "temperature": 1}
            ]
        }"#;
        assert!(ScreenData::from_json(json).is_err());
    }

    #[test]
    fn test_empty_city_is_rejected() {
        let json = r#"{"cityName": "  ", "temperature": 26, "forecast": []}"#;
        let err = ScreenData::from_json(json).unwrap_err();
        assert!(err.to_string().contains("City name"));
    }

    #[test]
    fn test_empty_abbreviation_is_rejected() {
        let json = r#"{
            "cityName": "Uberaba, MG",
            "temperature": 26,
            "forecast": [
                {"day": "Tuesday", "dayAbbreviation": "TUE", "icon": "wind", "temperature": 25},
                {"day": "Tuesday", "dayAbbreviation": "", "icon": "wind", "temperature": 25}
            ]
        }"#;
        let err = ScreenData::from_json(json).unwrap_err();
        assert!(err.to_string().contains("entry 1"));
    }
}
