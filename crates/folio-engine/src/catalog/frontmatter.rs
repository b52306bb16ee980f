use serde::{Deserialize, Deserializer, Serialize};

/// Separator line around a markdown post's frontmatter.
pub const FENCE: &str = "---\n";

/// The YAML block at the top of a markdown post.
///
/// Unknown keys are ignored and missing or null ones read as empty, so a
/// hand-written post only needs the fields it cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "tag_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub summary: String,
    /// Older posts carry `description` where newer ones carry `summary`.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Frontmatter {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// `summary`, falling back to `description`.
    pub fn summary_or_description(&self) -> &str {
        if self.summary.is_empty() {
            &self.description
        } else {
            &self.summary
        }
    }
}

fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tags as a YAML sequence, or one comma-separated string.
fn tag_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Option::<Tags>::deserialize(deserializer)? {
        Some(Tags::List(tags)) => tags,
        Some(Tags::Joined(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    })
}

/// Split a post into its frontmatter and body.
///
/// The text needs at least two fence lines; anything before the first fence
/// is ignored and later fences belong to the body.
pub fn split(text: &str) -> Option<(&str, &str)> {
    let mut parts = text.splitn(3, FENCE);
    let _preamble = parts.next()?;
    let frontmatter = parts.next()?;
    let body = parts.next()?;
    Some((frontmatter, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_needs_two_fences() {
        assert_eq!(split("---\na: 1\n---\nbody"), Some(("a: 1\n", "body")));
        assert_eq!(split("---\na: 1\n"), None);
        assert_eq!(split("no fences"), None);
    }

    #[test]
    fn later_fences_stay_in_body() {
        let (_, body) = split("---\na: 1\n---\nabove\n---\nbelow").unwrap();
        assert_eq!(body, "above\n---\nbelow");
    }

    #[test]
    fn reads_flow_and_block_lists() {
        let flow = Frontmatter::from_yaml("title: \"Hello: World\"\ntags: [\"a\", b ,\"c\"]\n").unwrap();
        assert_eq!(flow.title, "Hello: World");
        assert_eq!(flow.tags, vec!["a", "b", "c"]);

        let block = Frontmatter::from_yaml("tags:\n  - rust, wasm\n  - web\n").unwrap();
        assert_eq!(block.tags, vec!["rust, wasm", "web"]);
    }

    #[test]
    fn joined_tags_split_on_commas() {
        let frontmatter = Frontmatter::from_yaml("tags: x, y\n").unwrap();
        assert_eq!(frontmatter.tags, vec!["x", "y"]);
    }

    #[test]
    fn missing_null_and_unknown_keys() {
        let frontmatter = Frontmatter::from_yaml("title: Only\nsummary:\nlayout: post\n").unwrap();
        assert_eq!(
            frontmatter,
            Frontmatter {
                title: "Only".to_string(),
                ..Frontmatter::default()
            }
        );
        assert_eq!(Frontmatter::from_yaml("").unwrap(), Frontmatter::default());
    }

    #[test]
    fn unquoted_date_reads_as_text() {
        let frontmatter = Frontmatter::from_yaml("date: 2024-02-10\n").unwrap();
        assert_eq!(frontmatter.date, "2024-02-10");
    }

    #[test]
    fn summary_falls_back_to_description() {
        let frontmatter = Frontmatter::from_yaml("description: Older field\n").unwrap();
        assert_eq!(frontmatter.summary_or_description(), "Older field");
    }

    #[test]
    fn quotes_and_commas_survive_writing() {
        let written = Frontmatter {
            title: r#"Say "hi" now"#.to_string(),
            date: "2024-05-01".to_string(),
            category: "Notes: misc".to_string(),
            tags: vec!["rust, wasm".to_string(), "[x]".to_string()],
            summary: "#1 post".to_string(),
            description: String::new(),
        };

        let yaml = written.to_yaml().unwrap();

        assert!(!yaml.contains("description"));
        assert_eq!(Frontmatter::from_yaml(&yaml).unwrap(), written);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(Frontmatter::from_yaml("title: [unclosed\n").is_err());
    }
}
