use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

const EMBED_MARKER: &str = "youtube.com/embed/";
const EMBED_PREFIX: &str = "https://www.youtube.com/embed/";

// Only consulted for strings that are not absolute http(s) URLs.
static BARE_YOUTUBE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"youtu\.be/([A-Za-z0-9_-]{6,})").unwrap(),
        Regex::new(r"youtube\.com/watch\?v=([A-Za-z0-9_-]{6,})").unwrap(),
        Regex::new(r"youtube\.com/shorts/([A-Za-z0-9_-]{6,})").unwrap(),
    ]
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    Video,
    YouTube,
}

impl VideoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoKind::Video => "video",
            VideoKind::YouTube => "youtube",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "video" => Some(VideoKind::Video),
            "youtube" => Some(VideoKind::YouTube),
            _ => None,
        }
    }
}

/// A video link as it will be stored on a content record.
///
/// The kind is always derived from the href; there is no way to build a
/// reference with a caller-chosen kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoReference {
    href: String,
    #[serde(rename = "type")]
    kind: VideoKind,
}

impl VideoReference {
    pub fn from_raw(raw: &str) -> Self {
        classify_and_normalize_video_reference(raw)
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn kind(&self) -> VideoKind {
        self.kind
    }

    pub fn is_valid(&self) -> bool {
        is_valid_video_reference(&self.href)
    }

    pub fn into_parts(self) -> (String, VideoKind) {
        (self.href, self.kind)
    }
}

type VideoIdMatcher = fn(&str) -> Option<String>;

// Order matters: the embed form goes first so that normalized output maps to itself.
const VIDEO_ID_MATCHERS: [VideoIdMatcher; 3] = [
    embed_video_id,
    absolute_url_video_id,
    bare_pattern_video_id,
];

/// Classifies a pasted link as a YouTube or plain video reference, rewriting
/// YouTube links into the canonical embed URL.
///
/// Total over all inputs: anything unrecognized comes back trimmed with
/// [`VideoKind::Video`].
pub fn classify_and_normalize_video_reference(raw: &str) -> VideoReference {
    let trimmed = raw.trim();

    match VIDEO_ID_MATCHERS.iter().find_map(|matcher| matcher(trimmed)) {
        Some(id) => VideoReference {
            href: format!("{EMBED_PREFIX}{id}"),
            kind: VideoKind::YouTube,
        },
        None => VideoReference {
            href: trimmed.to_string(),
            kind: VideoKind::Video,
        },
    }
}

pub fn is_valid_image_reference(value: &str) -> bool {
    is_root_relative_or_http_url(value)
}

/// Expects the normalized href; raw short links such as `youtu.be/abc123`
/// are rejected here.
pub fn is_valid_video_reference(value: &str) -> bool {
    is_root_relative_or_http_url(value)
}

fn is_root_relative_or_http_url(value: &str) -> bool {
    !value.is_empty() && (value.starts_with('/') || parse_http_url(value).is_some())
}

fn parse_http_url(value: &str) -> Option<Url> {
    Url::parse(value)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

fn is_video_id(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn embed_video_id(value: &str) -> Option<String> {
    if !value.contains(EMBED_MARKER) {
        return None;
    }

    let url = Url::parse(value).ok()?;
    url.path_segments()?
        .next_back()
        .filter(|segment| is_video_id(segment))
        .map(str::to_string)
}

fn absolute_url_video_id(value: &str) -> Option<String> {
    let url = parse_http_url(value)?;
    let host = url.host_str()?;

    if host.contains("youtube.com") {
        url.query_pairs()
            .find_map(|(key, value)| (key == "v").then(|| value.into_owned()))
            .filter(|id| is_video_id(id))
            .or_else(|| shorts_video_id(&url))
    } else if host.contains("youtu.be") {
        url.path_segments()?
            .next()
            .filter(|segment| is_video_id(segment))
            .map(str::to_string)
    } else {
        None
    }
}

fn shorts_video_id(url: &Url) -> Option<String> {
    let mut segments = url.path_segments()?;
    if segments.next()? != "shorts" {
        return None;
    }

    segments
        .next()
        .filter(|segment| is_video_id(segment))
        .map(str::to_string)
}

fn bare_pattern_video_id(value: &str) -> Option<String> {
    if parse_http_url(value).is_some() {
        return None;
    }

    BARE_YOUTUBE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(value))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(raw: &str) -> (String, VideoKind) {
        classify_and_normalize_video_reference(raw).into_parts()
    }

    fn embed(id: &str) -> String {
        format!("https://www.youtube.com/embed/{id}")
    }

    #[test]
    fn short_link_becomes_embed() {
        assert_eq!(
            classify("https://youtu.be/gly8Le3_BZw"),
            (embed("gly8Le3_BZw"), VideoKind::YouTube)
        );
    }

    #[test]
    fn watch_link_drops_extra_query_params() {
        assert_eq!(
            classify("https://www.youtube.com/watch?v=gu0gH5OzAmg&foo=bar"),
            (embed("gu0gH5OzAmg"), VideoKind::YouTube)
        );
    }

    #[test]
    fn embed_link_is_canonicalized() {
        assert_eq!(
            classify("https://www.youtube.com/embed/gly8Le3_BZw?autoplay=1"),
            (embed("gly8Le3_BZw"), VideoKind::YouTube)
        );
    }

    #[test]
    fn shorts_link_becomes_embed() {
        assert_eq!(
            classify("https://www.youtube.com/shorts/aBcDeF12345"),
            (embed("aBcDeF12345"), VideoKind::YouTube)
        );
    }

    #[test]
    fn local_video_path_is_kept() {
        let reference = classify_and_normalize_video_reference("/videos/video_show_case_1.mp4");
        assert_eq!(reference.href(), "/videos/video_show_case_1.mp4");
        assert_eq!(reference.kind(), VideoKind::Video);
        assert!(reference.is_valid());
    }

    #[test]
    fn free_text_is_a_plain_invalid_video() {
        let reference = classify_and_normalize_video_reference("not a url at all");
        assert_eq!(reference.href(), "not a url at all");
        assert_eq!(reference.kind(), VideoKind::Video);
        assert!(!is_valid_video_reference(reference.href()));
    }

    #[test]
    fn empty_input() {
        assert_eq!(classify(""), (String::new(), VideoKind::Video));
        assert_eq!(classify("   "), (String::new(), VideoKind::Video));
        assert!(!is_valid_image_reference(""));
        assert!(!is_valid_video_reference(""));
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(
            classify("  https://cdn.example.com/reel.mp4 \n"),
            ("https://cdn.example.com/reel.mp4".to_string(), VideoKind::Video)
        );
        assert_eq!(
            classify("\thttps://youtu.be/gly8Le3_BZw "),
            (embed("gly8Le3_BZw"), VideoKind::YouTube)
        );
    }

    #[test]
    fn bare_forms_without_scheme() {
        assert_eq!(
            classify("youtu.be/gly8Le3_BZw"),
            (embed("gly8Le3_BZw"), VideoKind::YouTube)
        );
        assert_eq!(
            classify("www.youtube.com/watch?v=gu0gH5OzAmg"),
            (embed("gu0gH5OzAmg"), VideoKind::YouTube)
        );
        assert_eq!(
            classify("youtube.com/shorts/aBcDeF12345"),
            (embed("aBcDeF12345"), VideoKind::YouTube)
        );
    }

    #[test]
    fn bare_form_needs_six_character_id() {
        assert_eq!(
            classify("youtu.be/abc12"),
            ("youtu.be/abc12".to_string(), VideoKind::Video)
        );
        assert_eq!(
            classify("youtu.be/abc123"),
            (embed("abc123"), VideoKind::YouTube)
        );
    }

    #[test]
    fn query_id_wins_over_shorts_path() {
        assert_eq!(
            classify("https://www.youtube.com/shorts/aBcDeF12345?v=gu0gH5OzAmg"),
            (embed("gu0gH5OzAmg"), VideoKind::YouTube)
        );
    }

    #[test]
    fn mobile_and_scheme_variants() {
        assert_eq!(
            classify("http://m.youtube.com/watch?v=gu0gH5OzAmg"),
            (embed("gu0gH5OzAmg"), VideoKind::YouTube)
        );
        assert_eq!(
            classify("https://youtu.be/gly8Le3_BZw?t=42"),
            (embed("gly8Le3_BZw"), VideoKind::YouTube)
        );
    }

    #[test]
    fn youtube_pages_without_video_stay_plain() {
        for raw in [
            "https://www.youtube.com/",
            "https://www.youtube.com/watch?v=",
            "https://www.youtube.com/@someone",
            "https://www.youtube.com/embed/",
            "https://youtu.be/",
        ] {
            assert_eq!(classify(raw), (raw.to_string(), VideoKind::Video), "{raw}");
        }
    }

    #[test]
    fn absolute_urls_skip_bare_patterns() {
        let raw = "https://example.com/redirect?to=youtu.be/gly8Le3_BZw";
        assert_eq!(classify(raw), (raw.to_string(), VideoKind::Video));
    }

    #[test]
    fn unparseable_embed_falls_through() {
        let raw = "www.youtube.com/embed/gly8Le3_BZw";
        assert_eq!(classify(raw), (raw.to_string(), VideoKind::Video));
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [
            "https://youtu.be/gly8Le3_BZw",
            "https://www.youtube.com/watch?v=gu0gH5OzAmg&foo=bar",
            "https://www.youtube.com/embed/gly8Le3_BZw?autoplay=1",
            "https://www.youtube.com/shorts/aBcDeF12345",
            "youtu.be/gly8Le3_BZw",
            "/videos/video_show_case_1.mp4",
            "not a url at all",
            "https://www.youtube.com/watch?v=has%20space",
            "",
        ] {
            let first = classify_and_normalize_video_reference(raw);
            let second = classify_and_normalize_video_reference(first.href());
            assert_eq!(first, second, "{raw}");
        }
    }

    #[test]
    fn youtube_kind_only_for_canonical_embed() {
        for raw in [
            "https://youtu.be/gly8Le3_BZw/extra",
            "https://www.youtube.com/watch?v=gu0gH5OzAmg",
            "youtube.com/shorts/aBcDeF12345",
        ] {
            let reference = classify_and_normalize_video_reference(raw);
            assert_eq!(reference.kind(), VideoKind::YouTube);
            let id = reference.href().strip_prefix(EMBED_PREFIX).unwrap();
            assert!(is_video_id(id), "{raw} -> {}", reference.href());
        }
    }

    #[test]
    fn root_relative_paths_are_valid_references() {
        for path in ["/", "/images/hero.jpg", "/videos/a b.mp4"] {
            assert!(is_valid_image_reference(path));
            assert!(is_valid_video_reference(path));
        }
    }

    #[test]
    fn only_http_schemes_count_as_absolute() {
        assert!(is_valid_image_reference("https://cdn.example.com/a.png"));
        assert!(is_valid_image_reference("http://cdn.example.com/a.png"));
        assert!(!is_valid_image_reference("ftp://cdn.example.com/a.png"));
        assert!(!is_valid_image_reference("javascript:alert(1)"));
        assert!(!is_valid_image_reference("images/hero.jpg"));
        assert!(!is_valid_image_reference("https://"));
    }

    #[test]
    fn raw_short_links_fail_validation_until_normalized() {
        assert!(!is_valid_video_reference("youtu.be/gly8Le3_BZw"));
        assert!(VideoReference::from_raw("youtu.be/gly8Le3_BZw").is_valid());
    }

    #[test]
    fn kind_round_trips_through_storage_strings() {
        for kind in [VideoKind::Video, VideoKind::YouTube] {
            assert_eq!(VideoKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(VideoKind::parse("vimeo"), None);
    }

    #[test]
    fn serializes_with_type_field() {
        let reference = VideoReference::from_raw("https://youtu.be/gly8Le3_BZw");
        let json = serde_json::to_value(reference).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "href": "https://www.youtube.com/embed/gly8Le3_BZw",
                "type": "youtube"
            })
        );
    }
}
