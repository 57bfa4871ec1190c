//! Code style declarations for the highlighter.
//!
//! A style is a named set of regex patterns plus a start macro; every style
//! shares the single end macro. The built-in table below is a process-wide
//! read-only constant passed explicitly into the highlighter; caller-supplied
//! styles are applied after it, in the order supplied. Pattern order inside a
//! style matters too: patterns are applied in declaration order.
//!
//! The built-in patterns target the C#/Unity flavored sources the format was
//! designed around. The regex crate has no look-around, so the word fences
//! are expressed with `\b` boundaries.

/// Shared end macro closing every style span.
pub const STYLE_END_MACRO: &str = "</c>";

/// Lines containing this marker are comment-styled from the marker onward.
pub const COMMENT_MARKER: &str = "//";

/// Style class routed through the highlighter when highlighting is enabled.
pub const CODE_CLASS: &str = "Code";

/// One named highlighting rule mapped to an HTML class via its start macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeStyle {
    pub class_name: String,
    pub start_macro: String,
    pub patterns: Vec<String>,
    pub is_comment: bool,
}

impl CodeStyle {
    pub fn new(class_name: impl Into<String>, start_macro: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            start_macro: start_macro.into(),
            patterns: Vec::new(),
            is_comment: false,
        }
    }

    /// Comment styles carry no patterns; they claim `//` tails whole.
    pub fn comment(class_name: impl Into<String>, start_macro: impl Into<String>) -> Self {
        let mut style = Self::new(class_name, start_macro);
        style.is_comment = true;
        style
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }
}

/// The built-in style table, in application order.
pub fn built_in_styles() -> Vec<CodeStyle> {
    vec![
        CodeStyle::comment("CodeComment", "<cc>"),
        CodeStyle::new("CodeType", "<ct>").with_patterns([
            // Attributes
            r"\b(RequireComponent|CustomEditor|SerializeField|CanEditMultipleObjects)\b",
            // Regular classes
            r"\b(Camera|MonoBehaviour|MeshFilter|List|Mathf|Object|Collider|GameObject|Renderer|Mesh|AudioClip)\b",
            // Input
            r"\b(Input|KeyCode)\b",
            // Physics
            r"\b(Ray|Physics|RaycastHit)\b",
            // Other
            r"\b(Debug|Time|Transform)\b",
        ]),
        CodeStyle::new("CodeKeyword", "<ck>").with_patterns([
            // Essential keywords
            r"\b(using|get|async|virtual|set|public|private|sealed|static|abstract|protected|override|base|new|void|class|return|out|in|typeof|if|while|else|for|foreach|continue|null)\b",
            // Datatypes
            r"\b(Vector3|Vector2|Quaternion|true|false|bool|int|float|string|var)\b",
        ]),
        CodeStyle::new("CodeString", "<cs>").with_patterns([
            // Strings and numeric literals
            r#""[^"\n]*"|\b[0-9]+(\.[0-9]+)?f?\b"#,
        ]),
    ]
}
