use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::model::Episode;

pub fn parse_catalog(input: &str) -> Result<Vec<Episode>> {
    let episodes: Vec<Episode> = serde_json::from_str(input)?;
    Ok(episodes)
}

pub fn load_catalog(path: &Path) -> Result<Vec<Episode>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading episode catalog: {}", path.display()))?;
    parse_catalog(&raw)
        .with_context(|| format!("failed parsing episode catalog: {}", path.display()))
}

/// Most recent first. Equal episode numbers keep their catalog order.
pub fn sort_newest_first(episodes: &mut [Episode]) {
    episodes.sort_by(|a, b| b.episode_number.cmp(&a.episode_number));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_descending() {
        let mut eps = parse_catalog(
            r#"[
                {"episode_number": 2, "title": "Two"},
                {"episode_number": 1, "title": "One"},
                {"episode_number": 3, "title": "Three", "summary": "s", "spotify_url": "https://sp", "youtube_url": "https://yt"}
            ]"#,
        )
        .unwrap();
        sort_newest_first(&mut eps);

        let order: Vec<i64> = eps.iter().map(|e| e.episode_number).collect();
        assert_eq!(order, vec![3, 2, 1]);
        assert_eq!(eps[0].youtube_url.as_deref(), Some("https://yt"));
    }

    #[test]
    fn duplicate_numbers_keep_catalog_order() {
        let mut eps = parse_catalog(
            r#"[
                {"episode_number": 1, "title": "first"},
                {"episode_number": 5, "title": "a"},
                {"episode_number": 5, "title": "b"}
            ]"#,
        )
        .unwrap();
        sort_newest_first(&mut eps);

        let titles: Vec<&str> = eps.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "first"]);
    }

    #[test]
    fn required_fields_are_enforced() {
        assert!(parse_catalog(r#"[{"title": "no number"}]"#).is_err());
        assert!(parse_catalog(r#"[{"episode_number": 1}]"#).is_err());
        assert!(parse_catalog(r#"{"episode_number": 1, "title": "not a list"}"#).is_err());
    }

    #[test]
    fn empty_catalog() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn load_names_the_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("episodes.json");
        fs::write(&path, "not json").unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed parsing episode catalog"));
    }
}
