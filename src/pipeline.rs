use anyhow::{Context, Result, bail};
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

use crate::{
    cli::TranscriptCmd,
    config::Config,
    formats,
    model::{SpeakerStyles, Transcript},
};

static EPISODE_NUMBER_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [r"(?i)ep(\d+)", r"(?i)episode(\d+)", r"(?i)episode_(\d+)"]
        .map(|p| Regex::new(p).expect("episode number pattern is valid"))
});

pub fn run_transcript(cmd: TranscriptCmd, cfg: &Config) -> Result<()> {
    let span = tracing::info_span!(
        "transcript",
        input = %cmd.input.display(),
        output = %cmd.output.display()
    );
    let _g = span.enter();

    if !cmd.input.exists() {
        bail!("input file not found: {}", cmd.input.display());
    }

    let raw = fs::read_to_string(&cmd.input)
        .with_context(|| format!("failed reading transcript: {}", cmd.input.display()))?;
    tracing::info!(bytes = raw.len(), "read input");

    let transcript = formats::transcript::parse_transcript(&raw);
    let styles = SpeakerStyles::assign(&transcript.sections, cfg.transcript.style_count());
    log_transcript_summary(&transcript, &styles);
    if transcript.is_empty() {
        tracing::warn!("no speaker headers found; page will have no sections");
    }

    let episode = infer_episode_number(&cmd.output).or_else(|| infer_episode_number(&cmd.input));
    if let Some(n) = episode {
        tracing::info!(episode = n, "detected episode number");
    }

    let rendered = formats::html::write_transcript_html(&transcript, &styles, episode, cfg);
    write_output(&cmd.output, &rendered)?;
    tracing::info!(path = %cmd.output.display(), "wrote transcript page");

    let css = cmd
        .output
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&cfg.site.stylesheet);
    if !css.exists() {
        tracing::warn!(path = %css.display(), "stylesheet not found next to the transcript page");
    }

    Ok(())
}

pub fn run_index(cfg: &Config) -> Result<()> {
    let catalog_path = cfg.index.catalog_path();
    let span = tracing::info_span!("index", catalog = %catalog_path.display());
    let _g = span.enter();

    if !catalog_path.exists() {
        bail!("episode catalog not found: {}", catalog_path.display());
    }

    let mut episodes = formats::catalog::load_catalog(&catalog_path)?;
    formats::catalog::sort_newest_first(&mut episodes);
    tracing::info!(episodes = episodes.len(), "loaded episode catalog");
    for ep in &episodes {
        tracing::info!(episode = ep.episode_number, title = ep.title.as_str(), "episode");
    }

    let episodes_page = cfg.index.episodes_page_path();
    let rendered = formats::index::write_episodes_page(&episodes, &cfg.site);
    write_output(&episodes_page, &rendered)?;
    tracing::info!(path = %episodes_page.display(), "wrote episode list page");

    let home_page = cfg.index.home_page_path();
    let rendered =
        formats::index::write_home_page(&episodes, &cfg.site, &cfg.index.episodes_dir);
    write_output(&home_page, &rendered)?;
    tracing::info!(path = %home_page.display(), "wrote home page");

    Ok(())
}

/// Episode number from a file name such as `transcript_ep12.html` or `episode_3.txt`.
pub fn infer_episode_number(path: &Path) -> Option<i64> {
    let name = path.file_name()?.to_str()?;
    EPISODE_NUMBER_RES
        .iter()
        .find_map(|re| re.captures(name))
        .and_then(|caps| caps.get(1)?.as_str().parse().ok())
}

fn log_transcript_summary(t: &Transcript, styles: &SpeakerStyles) {
    tracing::info!(
        sections = t.sections.len(),
        speakers = styles.len(),
        "transcript summary"
    );

    for (speaker, style) in styles.iter() {
        tracing::info!(speaker, style, "speaker theme");
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        for (i, s) in t.sections.iter().enumerate() {
            tracing::debug!(
                idx = i,
                speaker = s.speaker.as_str(),
                timestamp = s.timestamp.as_str(),
                chars = s.text.chars().count(),
                "section"
            );
        }
    }
}

fn write_output(path: &Path, data: &str) -> Result<()> {
    fs::write(path, data).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}
