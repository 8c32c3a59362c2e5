use regex::Regex;

/// Matches `<tag>...</tag>` blocks in model output.
///
/// First match wins, the body is matched non-greedily and may span lines.
#[derive(Debug, Clone)]
pub struct TagParser {
    tag: String,
    pattern: Regex,
}

impl TagParser {
    pub fn new(tag: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(tag);
        let pattern = Regex::new(&format!(r"(?s)<{escaped}>(.*?)</{escaped}>"))?;
        Ok(Self {
            tag: tag.to_string(),
            pattern,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Trimmed body of the first complete block, if any.
    pub fn first<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }

    /// Body of the first block, or an empty string when the tag is missing.
    pub fn extract(&self, text: &str) -> String {
        self.first(text).unwrap_or_default().to_string()
    }

    /// `true` only for a `Yes` flag (case-insensitive).
    pub fn is_affirmative(&self, text: &str) -> bool {
        self.first(text)
            .is_some_and(|value| value.eq_ignore_ascii_case("yes"))
    }
}
