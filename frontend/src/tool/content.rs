use crate::error::ApiError;
use crate::models::{ContentPackage, VideoDetail};
use crate::tool::api::TextProvider;
use lazy_static::lazy_static;
use regex::Regex;

pub const FALLBACK_TITLE: &str = "Generated Title";
pub const FALLBACK_DESCRIPTION: &str = "Generated Description";
pub const FALLBACK_KEYWORDS: &str = "keyword1, keyword2";

/// Sections of a generated package, in the order the prompt asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    SeoTitle,
    Description,
    Keywords,
    VeoScript,
}

impl Section {
    pub fn delimiter(self) -> &'static str {
        match self {
            Section::SeoTitle => "===SEO_TITLE===",
            Section::Description => "===DESCRIPTION===",
            Section::Keywords => "===KEYWORDS===",
            Section::VeoScript => "===VEO_SCRIPT===",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "SEO_TITLE" => Some(Section::SeoTitle),
            "DESCRIPTION" => Some(Section::Description),
            "KEYWORDS" => Some(Section::Keywords),
            "VEO_SCRIPT" => Some(Section::VeoScript),
            _ => None,
        }
    }
}

lazy_static! {
    static ref DELIMITER: Regex =
        Regex::new(r"===[ \t]*(SEO_TITLE|DESCRIPTION|KEYWORDS|VEO_SCRIPT)[ \t]*===")
            .expect("delimiter pattern is valid");
}

pub fn build_prompt(detail: &VideoDetail) -> String {
    let tags = detail.tags.join(", ");
    format!(
        "Act as a Viral Content Strategist. Based on this title: [{title}] and tags: [{tags}], generate a comprehensive content package.

You MUST use the following delimiters exactly to separate sections:

{seo}
(Write 1 highly optimized viral title. You MUST include #shorts and 2-3 relevant hashtags at the end)

{description}
(Write a compelling description including what the video is about, keywords, and hashtags)

{keywords}
(Provide 20 high-ranking keywords, separated by commas. Do NOT use a numbered list. Example: keyword1, keyword2, keyword3)

{script}
(Write a professional 8-second Veo 3 AI video script for a hook. Include Scene details and Visual Prompts. Do NOT include Voiceover/Audio instructions unless it is absolutely critical for the content's context)
",
        title = detail.title,
        seo = Section::SeoTitle.delimiter(),
        description = Section::Description.delimiter(),
        keywords = Section::Keywords.delimiter(),
        script = Section::VeoScript.delimiter(),
    )
}

/// Returns the trimmed text after `section`'s first delimiter, up to the
/// first later delimiter of a section that comes after it. The script runs to
/// the end of the text. `None` when the delimiter is absent or the span is
/// blank.
pub fn extract_section(text: &str, section: Section) -> Option<&str> {
    let mut markers = DELIMITER.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let kind = Section::from_name(caps.get(1)?.as_str())?;
        Some((kind, whole.start(), whole.end()))
    });

    let (_, _, span_start) = markers.find(|(kind, _, _)| *kind == section)?;
    let span_end = if section == Section::VeoScript {
        text.len()
    } else {
        markers
            .find(|(kind, _, _)| *kind > section)
            .map(|(_, start, _)| start)
            .unwrap_or(text.len())
    };

    let span = text[span_start..span_end].trim();
    (!span.is_empty()).then_some(span)
}

/// Generators sometimes ignore the comma instruction and emit one keyword per
/// line. Only that case is repaired; mixed separators pass through untouched.
pub fn normalize_keywords(keywords: &str) -> String {
    if keywords.contains(',') {
        keywords.to_string()
    } else {
        keywords.lines().collect::<Vec<_>>().join(", ")
    }
}

pub fn parse_content_package(text: &str) -> ContentPackage {
    let seo_title = extract_section(text, Section::SeoTitle);
    let description = extract_section(text, Section::Description);
    let keywords = extract_section(text, Section::Keywords);
    let veo_script = extract_section(text, Section::VeoScript);

    if seo_title.is_none() || veo_script.is_none() {
        log::warn!("Generated content is missing sections, falling back to defaults");
    }

    ContentPackage {
        seo_title: seo_title.unwrap_or(FALLBACK_TITLE).to_string(),
        description: description.unwrap_or(FALLBACK_DESCRIPTION).to_string(),
        keywords: keywords
            .map(normalize_keywords)
            .unwrap_or_else(|| FALLBACK_KEYWORDS.to_string()),
        veo_script: veo_script.unwrap_or(text).to_string(),
        raw: text.to_string(),
    }
}

pub async fn generate_content_package<T>(
    provider: &T,
    detail: &VideoDetail,
) -> Result<ContentPackage, ApiError>
where
    T: TextProvider + ?Sized,
{
    let prompt = build_prompt(detail);
    let text = provider.complete(&prompt).await?;
    Ok(parse_content_package(&text))
}
