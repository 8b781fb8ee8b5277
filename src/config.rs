use anyhow::Result;
use config::{Config, File};
use directories::ProjectDirs;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Theme {
    pub bg: String,      // background
    pub main: String,    // brand color (rate, countdown, gauge)
    pub focal: String,   // the anchored letter
    pub text: String,    // before/after segments
    pub sub: String,     // status line, preview text
    #[serde(alias = "subAlt", alias = "subalt")]
    pub sub_alt: String, // guides, footer, borders
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: "#2c2e34".to_string(),
            main: "#e2b714".to_string(),
            focal: "#ca4754".to_string(),
            text: "#d1d0c5".to_string(),
            sub: "#646669".to_string(),
            sub_alt: "#45474d".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReaderSettings {
    pub wpm: u16,
    /// how far one arrow press moves the rate
    pub wpm_step: u16,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            wpm: 300,
            wpm_step: 50,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub theme: Theme,
    pub reader: ReaderSettings,
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "glint")
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let theme = Theme::default();
        let reader = ReaderSettings::default();

        let mut builder = Config::builder()
            .set_default("theme.bg", theme.bg)?
            .set_default("theme.main", theme.main)?
            .set_default("theme.focal", theme.focal)?
            .set_default("theme.text", theme.text)?
            .set_default("theme.sub", theme.sub)?
            .set_default("theme.subAlt", theme.sub_alt)?
            .set_default("reader.wpm", i64::from(reader.wpm))?
            .set_default("reader.wpm_step", i64::from(reader.wpm_step))?;

        if let Some(proj_dirs) = project_dirs() {
            let config_path = proj_dirs.config_dir().join("config.toml");

            if config_path.exists() {
                log::debug!("loading config from {}", config_path.display());
                builder = builder.add_source(File::from(config_path));
            }
        }

        let cfg = builder.build()?;

        // "subAlt" is mapped onto sub_alt by the serde alias
        let app_config: AppConfig = cfg.try_deserialize()?;

        Ok(app_config)
    }
}
