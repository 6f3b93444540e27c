use crate::{
    config::Config,
    formats::paragraph::split_paragraphs,
    model::{SpeakerStyles, Transcript},
};

const BADGE_STYLES: &str = "    <style>
        .brand-badge {
            display: block;
            margin: 20px auto;
            width: 160px;
            height: auto;
        }
        h1 {
            margin-top: 10px;
        }
    </style>";

pub fn page_title(site_name: &str, episode: Option<i64>) -> String {
    match episode {
        Some(n) => format!("{site_name} - Episode {n} Transcript"),
        None => format!("{site_name} - Transcript"),
    }
}

pub fn write_transcript_html(
    t: &Transcript,
    styles: &SpeakerStyles,
    episode: Option<i64>,
    cfg: &Config,
) -> String {
    let site = &cfg.site;
    let title = page_title(&site.name, episode);

    let mut lines: Vec<String> = vec![
        "<!DOCTYPE html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head>".to_string(),
        "    <meta charset=\"UTF-8\">".to_string(),
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
            .to_string(),
        format!("    <title>{title}</title>"),
        format!("    <link rel=\"stylesheet\" href=\"{}\">", site.stylesheet),
        BADGE_STYLES.to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
        "    <div class=\"transcript-container\">".to_string(),
        format!("        <h1>{title}</h1>"),
        format!(
            "        <img src=\"../{}\" alt=\"{}\" class=\"brand-badge\">",
            site.brand_badge, site.name
        ),
    ];

    for section in &t.sections {
        let style = styles.get(&section.speaker).unwrap_or(1);

        lines.push(format!(
            "        <div class=\"speaker-section speaker-{style}\">"
        ));
        lines.push("            <div class=\"speaker-header\">".to_string());
        lines.push(format!(
            "                {} <span class=\"timestamp\">({})</span>",
            section.speaker, section.timestamp
        ));
        lines.push("            </div>".to_string());
        lines.push("            <div class=\"speaker-text\">".to_string());
        for paragraph in split_paragraphs(&section.text) {
            lines.push(format!("                <p>{paragraph}</p>"));
        }
        lines.push("            </div>".to_string());
        lines.push("        </div>".to_string());
    }

    lines.push("    </div>".to_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());

    lines.join("\n")
}
