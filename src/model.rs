use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub sections: Vec<Section>,
}

impl Transcript {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// One speaker turn: the header's name and timestamp plus everything up to the next header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub speaker: String,
    pub timestamp: String,
    pub text: String,
}

/// Speaker name to style id (`1..=k`), in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerStyles {
    order: Vec<String>,
    ids: HashMap<String, usize>,
}

impl SpeakerStyles {
    pub fn assign(sections: &[Section], k: usize) -> Self {
        let k = k.max(1);
        let mut styles = Self::default();

        for section in sections {
            if styles.ids.contains_key(&section.speaker) {
                continue;
            }
            let id = (styles.order.len() % k) + 1;
            styles.ids.insert(section.speaker.clone(), id);
            styles.order.push(section.speaker.clone());
        }

        styles
    }

    pub fn get(&self, speaker: &str) -> Option<usize> {
        self.ids.get(speaker).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Speakers with their style ids, first-seen first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order.iter().map(|s| (s.as_str(), self.ids[s]))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub episode_number: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub spotify_url: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
}

impl Episode {
    pub fn transcript_file(&self) -> String {
        format!("transcript_ep{}.html", self.episode_number)
    }
}
