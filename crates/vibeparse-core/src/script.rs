//! Generated script data contract
//!
//! A [`Script`] is the read-only lesson fetched from `GET /api/scripts/{id}`:
//! an ordered list of [`Scene`]s, each with prose and ordered
//! [`CodeHighlight`]s. Scenes are addressed only by position.
//!
//! Payloads are validated once, at ingestion. A highlight whose `code` is not
//! a string does not reject the script; it is stored as
//! [`HighlightCode::Invalid`] so the renderer can degrade that one block.

use std::fmt;
use std::ops::Range;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Chapter title for scenes without any code highlight
pub const OVERVIEW_CHAPTER: &str = "Overview";

/// Complete generated script
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    /// Scenes in playback order
    pub scenes: Vec<Scene>,
    /// Files the generator skipped (optional server extension)
    pub skipped_files: Vec<String>,
}

/// A single scene of the explanation
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: String,
    /// Narration length in seconds. Advisory only, never drives navigation.
    pub duration: f64,
    pub content: String,
    pub code_highlights: Vec<CodeHighlight>,
}

/// A highlighted section of source code within a scene
#[derive(Debug, Clone, PartialEq)]
pub struct CodeHighlight {
    pub file_path: String,
    pub start_line: u32,
    pub end_line: u32,
    pub description: String,
    pub code: HighlightCode,
}

/// Validated code body of a highlight
#[derive(Debug, Clone, PartialEq)]
pub enum HighlightCode {
    /// Source text, as sent by the backend
    Source(String),
    /// The backend sent something other than a string
    Invalid(InvalidCode),
}

impl HighlightCode {
    /// Source text if the body is valid
    pub fn as_source(&self) -> Option<&str> {
        match self {
            HighlightCode::Source(text) => Some(text),
            HighlightCode::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, HighlightCode::Source(_))
    }
}

/// JSON kind found where a string was expected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    Array,
    Object,
    String,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
            JsonKind::String => "string",
        };
        f.write_str(name)
    }
}

/// Contract violation on a highlight's `code` field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("scene {scene} highlight {highlight} ({file_path}): expected string code, found {found}")]
pub struct InvalidCode {
    pub scene: usize,
    pub highlight: usize,
    pub file_path: String,
    pub found: JsonKind,
}

/// Reasons a script payload is rejected as a whole
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("malformed script payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("script contains no scenes")]
    NoScenes,
}

/// A run of consecutive scenes about the same file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub scenes: Range<usize>,
}

// ─────────────────────────────────────────────────────────────────
// Wire representation
// ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawScript {
    scenes: Vec<RawScene>,
    #[serde(default)]
    skipped_files: Vec<String>,
}

#[derive(Deserialize)]
struct RawScene {
    title: String,
    #[serde(default)]
    duration: f64,
    #[serde(default)]
    content: String,
    #[serde(default)]
    code_highlights: Vec<RawHighlight>,
}

#[derive(Deserialize)]
struct RawHighlight {
    file_path: String,
    start_line: u32,
    end_line: u32,
    #[serde(default)]
    description: String,
    // Missing defaults to "" (server default); explicit null stays null.
    #[serde(default = "empty_code")]
    code: Value,
}

fn empty_code() -> Value {
    Value::String(String::new())
}

impl Script {
    /// Parse and validate a script from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let raw: RawScript = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Validate a script from an already-decoded JSON value
    pub fn from_value(value: Value) -> Result<Self, ScriptError> {
        let raw: RawScript = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawScript) -> Result<Self, ScriptError> {
        if raw.scenes.is_empty() {
            return Err(ScriptError::NoScenes);
        }

        let scenes = raw
            .scenes
            .into_iter()
            .enumerate()
            .map(|(scene_idx, scene)| Scene {
                title: scene.title,
                duration: scene.duration.max(0.0),
                content: scene.content,
                code_highlights: scene
                    .code_highlights
                    .into_iter()
                    .enumerate()
                    .map(|(hl_idx, hl)| {
                        let code = match hl.code {
                            Value::String(text) => HighlightCode::Source(text),
                            other => HighlightCode::Invalid(InvalidCode {
                                scene: scene_idx,
                                highlight: hl_idx,
                                file_path: hl.file_path.clone(),
                                found: JsonKind::of(&other),
                            }),
                        };
                        CodeHighlight {
                            file_path: hl.file_path,
                            start_line: hl.start_line,
                            end_line: hl.end_line,
                            description: hl.description,
                            code,
                        }
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            scenes,
            skipped_files: raw.skipped_files,
        })
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// All highlight contract violations, in playback order
    pub fn violations(&self) -> impl Iterator<Item = &InvalidCode> {
        self.scenes
            .iter()
            .flat_map(|scene| scene.code_highlights.iter())
            .filter_map(|hl| match &hl.code {
                HighlightCode::Invalid(err) => Some(err),
                HighlightCode::Source(_) => None,
            })
    }

    /// Group scenes into chapters by their primary file
    ///
    /// Consecutive scenes sharing the same primary file form one chapter.
    pub fn chapters(&self) -> Vec<Chapter> {
        let mut chapters: Vec<Chapter> = Vec::new();
        for (idx, scene) in self.scenes.iter().enumerate() {
            let title = scene.primary_file().unwrap_or(OVERVIEW_CHAPTER);
            match chapters.last_mut() {
                Some(last) if last.title == title => last.scenes.end = idx + 1,
                _ => chapters.push(Chapter {
                    title: title.to_string(),
                    scenes: idx..idx + 1,
                }),
            }
        }
        chapters
    }

    /// Render the script as Markdown
    pub fn to_markdown(&self) -> String {
        let mut md = String::from("# Code Explanation Script\n\n");

        for scene in &self.scenes {
            md.push_str(&format!("## {} ({}s)\n\n", scene.title, scene.duration));
            md.push_str(&format!("{}\n\n", scene.content));

            if !scene.code_highlights.is_empty() {
                md.push_str("### Code Highlights\n\n");
                for hl in &scene.code_highlights {
                    md.push_str(&format!(
                        "**{}** (lines {}-{}):\n",
                        hl.file_path, hl.start_line, hl.end_line
                    ));
                    match &hl.code {
                        HighlightCode::Source(code) if !code.is_empty() => {
                            md.push_str(&format!("```\n{}\n```\n", code));
                        }
                        HighlightCode::Source(_) => {}
                        HighlightCode::Invalid(err) => {
                            md.push_str(&format!("_Invalid code data ({})_\n", err.found));
                        }
                    }
                    md.push_str(&format!("{}\n\n", hl.description));
                }
            }

            md.push_str("---\n\n");
        }

        md
    }
}

impl Scene {
    /// File of the first highlight, if any
    pub fn primary_file(&self) -> Option<&str> {
        self.code_highlights.first().map(|hl| hl.file_path.as_str())
    }
}

impl CodeHighlight {
    /// "lines a-b" label
    pub fn line_range(&self) -> String {
        format!("lines {}-{}", self.start_line, self.end_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn highlight(path: &str, code: Value) -> Value {
        json!({
            "file_path": path,
            "start_line": 1,
            "end_line": 3,
            "description": "desc",
            "code": code,
        })
    }

    fn scene(title: &str, highlights: Vec<Value>) -> Value {
        json!({
            "title": title,
            "duration": 20,
            "content": format!("{title} prose"),
            "code_highlights": highlights,
        })
    }

    #[test]
    fn test_parses_valid_script() {
        let value = json!({
            "scenes": [
                scene("Intro", vec![]),
                scene("Main", vec![highlight("src/main.rs", json!("fn main() {}"))]),
            ]
        });
        let script = Script::from_value(value).unwrap();

        assert_eq!(script.len(), 2);
        assert_eq!(script.scenes[0].title, "Intro");
        assert_eq!(script.scenes[0].duration, 20.0);
        assert!(script.scenes[0].code_highlights.is_empty());
        assert_eq!(
            script.scenes[1].code_highlights[0].code,
            HighlightCode::Source("fn main() {}".to_string())
        );
        assert!(script.skipped_files.is_empty());
        assert_eq!(script.violations().count(), 0);
    }

    #[test]
    fn test_non_string_code_is_typed_violation() {
        let value = json!({
            "scenes": [scene("Main", vec![
                highlight("a.py", json!("print(1)")),
                highlight("b.py", json!(["line 1", "line 2"])),
                highlight("c.py", json!({"text": "x"})),
            ])]
        });
        let script = Script::from_value(value).unwrap();

        let violations: Vec<_> = script.violations().collect();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].found, JsonKind::Array);
        assert_eq!(violations[0].highlight, 1);
        assert_eq!(violations[0].file_path, "b.py");
        assert_eq!(violations[1].found, JsonKind::Object);
        assert!(script.scenes[0].code_highlights[0].code.is_valid());
    }

    #[test]
    fn test_null_code_is_invalid_but_missing_code_is_empty() {
        let value = json!({
            "scenes": [{
                "title": "S",
                "duration": 5,
                "content": "",
                "code_highlights": [
                    {"file_path": "a.rs", "start_line": 1, "end_line": 1, "description": "", "code": null},
                    {"file_path": "b.rs", "start_line": 1, "end_line": 1, "description": ""}
                ]
            }]
        });
        let script = Script::from_value(value).unwrap();
        let hls = &script.scenes[0].code_highlights;

        assert!(matches!(&hls[0].code, HighlightCode::Invalid(e) if e.found == JsonKind::Null));
        assert_eq!(hls[1].code, HighlightCode::Source(String::new()));
    }

    #[test]
    fn test_empty_scenes_rejected() {
        let err = Script::from_json(r#"{"scenes": []}"#).unwrap_err();
        assert!(matches!(err, ScriptError::NoScenes));
    }

    #[test]
    fn test_wrong_shape_rejected() {
        assert!(matches!(
            Script::from_json(r#"{"scenes": "nope"}"#),
            Err(ScriptError::Malformed(_))
        ));
        assert!(matches!(
            Script::from_json(r#"{"scenes": [{"duration": 3}]}"#),
            Err(ScriptError::Malformed(_))
        ));
    }

    #[test]
    fn test_skipped_files_extension() {
        let script = Script::from_json(
            r#"{"scenes": [{"title": "A", "duration": 1, "content": "", "code_highlights": []}],
                "skipped_files": ["vendor/big.js"]}"#,
        )
        .unwrap();
        assert_eq!(script.skipped_files, vec!["vendor/big.js".to_string()]);
    }

    #[test]
    fn test_chapters_group_consecutive_primary_files() {
        let value = json!({
            "scenes": [
                scene("Intro", vec![]),
                scene("Setup", vec![highlight("app.py", json!("a"))]),
                scene("Routes", vec![highlight("app.py", json!("b"))]),
                scene("Models", vec![highlight("models.py", json!("c"))]),
                scene("Wrap up", vec![]),
            ]
        });
        let script = Script::from_value(value).unwrap();
        let chapters = script.chapters();

        assert_eq!(
            chapters,
            vec![
                Chapter { title: OVERVIEW_CHAPTER.into(), scenes: 0..1 },
                Chapter { title: "app.py".into(), scenes: 1..3 },
                Chapter { title: "models.py".into(), scenes: 3..4 },
                Chapter { title: OVERVIEW_CHAPTER.into(), scenes: 4..5 },
            ]
        );
    }

    #[test]
    fn test_markdown_export() {
        let value = json!({
            "scenes": [
                scene("Intro", vec![]),
                scene("Main", vec![highlight("main.go", json!("package main"))]),
            ]
        });
        let md = Script::from_value(value).unwrap().to_markdown();

        assert!(md.starts_with("# Code Explanation Script\n\n## Intro (20s)\n\nIntro prose\n\n---\n\n"));
        assert!(md.contains("### Code Highlights\n\n**main.go** (lines 1-3):\n```\npackage main\n```\ndesc\n\n"));
        assert!(md.ends_with("---\n\n"));
    }

    #[test]
    fn test_line_range_label() {
        let script = Script::from_value(json!({
            "scenes": [scene("Main", vec![highlight("x.rs", json!(""))])]
        }))
        .unwrap();
        assert_eq!(script.scenes[0].code_highlights[0].line_range(), "lines 1-3");
    }
}
