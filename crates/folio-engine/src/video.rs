use regex::Regex;
use std::sync::OnceLock;

const EMBED_PREFIX: &str = "https://www.youtube.com/embed/";
const YOUTUBE_ID_LEN: usize = 11;

/// Rewrite a recognisable YouTube URL to its embeddable form.
///
/// Anything whose captured id is not exactly 11 characters is returned as
/// given, on the assumption it is already embeddable (Vimeo and friends).
/// Normalising a canonical embed URL returns it unchanged.
pub fn normalize_video_url(url: &str) -> String {
    static YOUTUBE_REGEX: OnceLock<Regex> = OnceLock::new();
    let youtube_regex = YOUTUBE_REGEX.get_or_init(|| {
        Regex::new(r"^.*(youtu.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("Invalid YouTube regex")
    });

    match youtube_regex.captures(url).and_then(|caps| caps.get(2)) {
        Some(id) if id.as_str().chars().count() == YOUTUBE_ID_LEN => {
            format!("{EMBED_PREFIX}{}", id.as_str())
        }
        _ => url.to_string(),
    }
}
