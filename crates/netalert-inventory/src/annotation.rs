//! Device comment annotations.
//!
//! NetAlertX lets operators attach free text to each device. The inventory
//! reads a small `KEY=VALUE;KEY=VALUE` grammar from that text:
//!
//! - `TAGS=web,db` lists the groups the host belongs to.
//! - `VARS_<name>=<value>` defines the host variable `<name>`.
//!
//! Anything else is ignored.

const TAGS_PREFIX: &str = "TAGS=";
const VARS_PREFIX: &str = "VARS_";

/// One `;`-separated piece of a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// `TAGS=` segment with its non-empty, trimmed tag names.
    Tags(Vec<String>),
    /// `VARS_` segment.
    Var {
        /// Variable name with unsupported characters replaced by `_`.
        name: String,
        /// Trimmed value; empty when the segment has no `=`.
        value: &'a str,
    },
    /// Segment with an unrecognized key, including empty segments.
    Ignored(&'a str),
}

impl<'a> Segment<'a> {
    /// Classify a single segment. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let segment = raw.trim();

        if let Some(list) = segment.strip_prefix(TAGS_PREFIX) {
            let tags = list
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect();
            return Self::Tags(tags);
        }

        if segment.starts_with(VARS_PREFIX) {
            // No `=` is outside the grammar; treat it as an empty value.
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            return Self::Var {
                name: sanitize_var_name(&key[VARS_PREFIX.len()..]),
                value: value.trim(),
            };
        }

        Self::Ignored(segment)
    }
}

/// Split comment text into classified segments.
pub fn segments(text: &str) -> impl Iterator<Item = Segment<'_>> {
    text.split(';').map(Segment::parse)
}

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
#[must_use]
pub fn sanitize_var_name(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Tags and host variables parsed from one device comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Group names, in the order written.
    pub tags: Vec<String>,
    /// Host variables in first-definition order.
    pub vars: Vec<(String, String)>,
}

impl Annotation {
    /// Look up a variable by name.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn set_var(&mut self, name: String, value: &str) {
        match self.vars.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.vars.push((name, value.to_string())),
        }
    }
}

/// Parse a device comment.
///
/// The last `TAGS=` segment replaces any earlier one. A variable defined
/// twice keeps its first position and takes the later value.
#[must_use]
pub fn parse_comments(comments: Option<&str>) -> Annotation {
    let mut annotation = Annotation::default();
    let Some(text) = comments.filter(|text| !text.is_empty()) else {
        return annotation;
    };

    for segment in segments(text) {
        match segment {
            Segment::Tags(tags) => annotation.tags = tags,
            Segment::Var { name, value } => annotation.set_var(name, value),
            Segment::Ignored(_) => {}
        }
    }

    annotation
}
