use crate::{config::Site, model::Episode};

const TABLE_STYLES: &str = r#"
        .brand-badge {
            position: absolute;
            top: 20px;
            left: 20px;
            width: 160px;
            height: auto;
        }
        .episode-table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
        }
        .episode-table th,
        .episode-table td {
            padding: 15px;
            text-align: left;
            border-bottom: 1px solid rgba(100, 255, 218, 0.2);
        }
        .episode-table th {
            color: #64ffda;
            font-size: 1.1em;
            border-bottom: 2px solid rgba(100, 255, 218, 0.4);
        }
        .episode-table tr:hover {
            background-color: rgba(100, 255, 218, 0.05);
        }
        .episode-name {
            color: #e0e0e0;
            font-weight: 500;
        }
        .episode-num {
            color: #64ffda;
            font-size: 1.2em;
            font-weight: bold;
            text-align: center;
            width: 50px;
        }
        .episode-summary {
            color: #a0a0a0;
            font-size: 0.9em;
            margin-top: 5px;
        }
        .link-btn {
            display: inline-block;
            padding: 8px 16px;
            margin: 2px 4px;
            border-radius: 4px;
            text-decoration: none;
            font-size: 0.9em;
            transition: all 0.2s ease;
        }
        .link-transcript {
            background-color: rgba(100, 255, 218, 0.15);
            color: #64ffda;
        }
        .link-transcript:hover {
            background-color: rgba(100, 255, 218, 0.3);
            text-decoration: none;
        }
        .link-spotify {
            background-color: rgba(30, 215, 96, 0.15);
            color: #1ed760;
        }
        .link-spotify:hover {
            background-color: rgba(30, 215, 96, 0.3);
            text-decoration: none;
        }
        .link-youtube {
            background-color: rgba(255, 0, 0, 0.15);
            color: #ff4444;
        }
        .link-youtube:hover {
            background-color: rgba(255, 0, 0, 0.3);
            text-decoration: none;
        }
        .link-bar {
            display: flex;
            justify-content: center;
            flex-wrap: wrap;
            gap: 10px;
            margin: 25px 0;
            padding: 20px;
            background-color: rgba(0, 0, 0, 0.2);
            border-radius: 8px;
        }
        .link-bar .link-btn {
            padding: 12px 24px;
            font-size: 1em;
        }
        .description {
            color: #b8c5d6;
            font-size: 1.1em;
            line-height: 1.8;
            margin: 20px 0;
            text-align: center;
        }
"#;

const PLACEHOLDER_URL: &str = "#";

/// One `<tr>` per episode, in the order given. `transcript_prefix` is prepended to each transcript link.
pub fn write_episode_table(episodes: &[Episode], transcript_prefix: &str) -> String {
    let mut rows: Vec<String> = Vec::new();

    for ep in episodes {
        let summary = ep.summary.as_deref().unwrap_or("");
        let spotify = ep.spotify_url.as_deref().unwrap_or(PLACEHOLDER_URL);
        let youtube = ep.youtube_url.as_deref().unwrap_or(PLACEHOLDER_URL);
        let transcript = format!("{transcript_prefix}{}", ep.transcript_file());

        rows.push("                <tr>".to_string());
        rows.push(format!(
            "                    <td class=\"episode-num\">{}</td>",
            ep.episode_number
        ));
        rows.push("                    <td>".to_string());
        rows.push(format!(
            "                        <div class=\"episode-name\">{}</div>",
            ep.title
        ));
        rows.push(format!(
            "                        <div class=\"episode-summary\">{summary}</div>"
        ));
        rows.push("                    </td>".to_string());
        rows.push("                    <td>".to_string());
        rows.push(format!(
            "                        <a href=\"{transcript}\" class=\"link-btn link-transcript\">Transcript</a>"
        ));
        rows.push(format!(
            "                        <a href=\"{spotify}\" class=\"link-btn link-spotify\" target=\"_blank\">Spotify</a>"
        ));
        rows.push(format!(
            "                        <a href=\"{youtube}\" class=\"link-btn link-youtube\" target=\"_blank\">YouTube</a>"
        ));
        rows.push("                    </td>".to_string());
        rows.push("                </tr>".to_string());
    }

    let body = rows.join("\n");
    [
        "        <table class=\"episode-table\">",
        "            <thead>",
        "                <tr>",
        "                    <th>#</th>",
        "                    <th>Episode</th>",
        "                    <th>Links</th>",
        "                </tr>",
        "            </thead>",
        "            <tbody>",
        body.as_str(),
        "            </tbody>",
        "        </table>",
    ]
    .join("\n")
}

fn head(title: &str, stylesheet: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
    <style>{TABLE_STYLES}
    </style>
</head>"#
    )
}

/// The page living next to the transcripts inside the episodes directory.
pub fn write_episodes_page(episodes: &[Episode], site: &Site) -> String {
    let title = format!("{} - Episode List", site.name);
    format!(
        r#"{head}
<body>
    <img src="../{badge}" alt="{name}" class="brand-badge">
    <div class="transcript-container">
        <h1>{title}</h1>
{table}
    </div>
</body>
</html>"#,
        head = head(&title, &site.stylesheet),
        badge = site.brand_badge,
        name = site.name,
        table = write_episode_table(episodes, ""),
    )
}

pub fn write_home_page(episodes: &[Episode], site: &Site, episodes_dir: &str) -> String {
    let links: Vec<String> = site
        .links
        .iter()
        .map(|l| {
            format!(
                "            <a href=\"{}\" class=\"link-btn {}\" target=\"_blank\">\n                {}\n            </a>",
                l.url, l.class, l.label
            )
        })
        .collect();

    let description: Vec<String> = site
        .description
        .lines()
        .map(|l| format!("            {l}"))
        .collect();

    format!(
        r#"{head}
<body>
    <img src="{badge}" alt="{name}" class="brand-badge">
    <div class="transcript-container">
        <h1>{name}</h1>
        
        <p class="description">
{description}
        </p>
        
        <div class="link-bar">
{links}
        </div>
        
        <h2><a href="{dir}/index.html">Episodes</a></h2>
{table}
    </div>
</body>
</html>"#,
        head = head(&site.name, &format!("{episodes_dir}/{}", site.stylesheet)),
        badge = site.brand_badge,
        name = site.name,
        description = description.join("\n"),
        links = links.join("\n"),
        dir = episodes_dir,
        table = write_episode_table(episodes, &format!("{episodes_dir}/")),
    )
}
