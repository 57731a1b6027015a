//! Reply language annotation.
//!
//! The default persona asks the model to start every reply with the locale
//! it answered in, e.g. `fr-FR Bonjour.`. Speech synthesis needs that tag to
//! pick a voice and must not read it aloud.

/// Splits a leading `xx-YY` locale tag off a sentence.
///
/// Returns the tag and the remaining text with leading whitespace removed,
/// or `(None, sentence)` when the sentence does not start with a tag.
///
/// # Example
/// ```
/// use voxstream::core::split_language_tag;
///
/// assert_eq!(split_language_tag("en-US Hello."), (Some("en-US"), "Hello."));
/// assert_eq!(split_language_tag("Hello."), (None, "Hello."));
/// ```
pub fn split_language_tag(sentence: &str) -> (Option<&str>, &str) {
    let trimmed = sentence.trim_start();
    let end = trimmed
        .find(|c: char| c.is_whitespace())
        .unwrap_or(trimmed.len());
    let candidate = &trimmed[..end];

    if is_locale_tag(candidate) {
        (Some(candidate), trimmed[end..].trim_start())
    } else {
        (None, sentence)
    }
}

fn is_locale_tag(candidate: &str) -> bool {
    let Some((lang, region)) = candidate.split_once('-') else {
        return false;
    };

    (2..=3).contains(&lang.len())
        && lang.chars().all(|c| c.is_ascii_lowercase())
        && region.len() == 2
        && region.chars().all(|c| c.is_ascii_uppercase())
}
