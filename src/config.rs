use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: Logging,
    pub site: Site,
    pub transcript: TranscriptCfg,
    pub index: IndexCfg,
}

impl Config {
    pub fn load(path_opt: Option<&Path>) -> Result<Self> {
        let default_path = Path::new("config.toml");
        let path = if let Some(p) = path_opt {
            Some(p)
        } else if default_path.exists() {
            Some(default_path)
        } else {
            None
        };

        let mut cfg = Config::default();

        if let Some(path) = path {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed reading config file: {}", path.display()))?;
            let parsed: Config = toml::from_str(&raw)
                .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
            cfg = parsed;
        }

        Ok(cfg)
    }

    pub fn to_toml_pretty(&self) -> Result<String> {
        let s = toml::to_string_pretty(self).context("failed serializing config as TOML")?;
        Ok(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub level: String,
    pub format: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Branding shared by every generated page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    pub name: String,
    pub stylesheet: String,
    pub brand_badge: String,
    pub description: String,
    pub links: Vec<Link>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            name: "Carbon and Cardboard".to_string(),
            stylesheet: "transcript_styles.css".to_string(),
            brand_badge: "brand_badge.png".to_string(),
            description: concat!(
                "A podcast exploring board games as a way to talk about environment and the climate.\n",
                "We discuss game mechanics, educational design, and the ways that play can help engage with these complex topics.\n",
                "We use many games as lenses into this rich space, and started as part of the \n",
                "<A HREF=\"https://climatebase.org/fellowship\">Climatebase Fellowship</A>."
            )
            .to_string(),
            links: vec![
                Link::new(
                    "Spotify",
                    "https://open.spotify.com/show/2ypWbMcbH9GtGvrRLgxN0X?si=311b368b0c0d43d9",
                    "link-spotify",
                ),
                Link::new(
                    "YouTube",
                    "https://www.youtube.com/@CarbonAndCardboard",
                    "link-youtube",
                ),
                Link::new(
                    "GitHub",
                    "https://github.com/scotfree/carbonandcardboard.com/",
                    "link-transcript",
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
    pub class: String,
}

impl Link {
    fn new(label: &str, url: &str, class: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
            class: class.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptCfg {
    /// Number of distinct speaker themes in the stylesheet (`speaker-1` ..= `speaker-N`).
    pub style_count: usize,
}

impl Default for TranscriptCfg {
    fn default() -> Self {
        Self { style_count: 8 }
    }
}

impl TranscriptCfg {
    pub fn style_count(&self) -> usize {
        self.style_count.max(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexCfg {
    pub site_root: PathBuf,
    pub episodes_dir: String,
    pub catalog: String,
    pub page: String,
}

impl Default for IndexCfg {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            episodes_dir: "episodes".to_string(),
            catalog: "episodes.json".to_string(),
            page: "index.html".to_string(),
        }
    }
}

impl IndexCfg {
    pub fn episodes_path(&self) -> PathBuf {
        self.site_root.join(&self.episodes_dir)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.episodes_path().join(&self.catalog)
    }

    pub fn episodes_page_path(&self) -> PathBuf {
        self.episodes_path().join(&self.page)
    }

    pub fn home_page_path(&self) -> PathBuf {
        self.site_root.join(&self.page)
    }
}

pub fn init_tracing(logging: &Logging, cli_override_level: Option<&str>) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = cli_override_level.unwrap_or(logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let is_json = logging.format.to_lowercase() == "json";

    if is_json {
        fmt()
            .with_env_filter(filter)
            .event_format(fmt::format().json())
            .with_target(true)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .pretty()
            .init();
    }

    tracing::info!(
        level = level,
        format = logging.format.as_str(),
        "logging initialized"
    );

    Ok(())
}
