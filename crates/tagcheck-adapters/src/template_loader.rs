//! Filesystem-based template loader.
//!
//! Reads CloudFormation templates written in JSON or YAML and converts them
//! into domain [`Template`] objects. YAML short-form intrinsic functions are
//! rewritten to their long JSON form so rules see one shape:
//!
//! | YAML                  | JSON                                    |
//! |-----------------------|-----------------------------------------|
//! | `!Ref Queue`          | `{"Ref": "Queue"}`                      |
//! | `!GetAtt Queue.Arn`   | `{"Fn::GetAtt": ["Queue", "Arn"]}`      |
//! | `!Sub "${A}-x"`       | `{"Fn::Sub": "${A}-x"}`                 |
//! | `!Condition IsProd`   | `{"Condition": "IsProd"}`               |
//!
//! # Discovery
//!
//! [`LocalTemplateLoader::discover`] walks a directory and returns every
//! `.json`, `.yaml`, `.yml` and `.template` file, sorted. Hidden
//! directories are not entered.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value as JsonValue};
use serde_yaml::Value as YamlValue;
use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

use tagcheck_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::Template,
    error::TagcheckResult,
};

/// Extensions picked up by directory discovery.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "template"];

// ── Format detection ──────────────────────────────────────────────────────────

/// Serialization format of a template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Json,
    Yaml,
}

impl TemplateFormat {
    /// Pick the format from the extension, falling back to sniffing the
    /// first non-whitespace character.
    pub fn detect(path: &Path, source: &str) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ if source.trim_start().starts_with('{') => Self::Json,
            _ => Self::Yaml,
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Production template source reading from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTemplateLoader;

impl LocalTemplateLoader {
    /// Create a new local template loader.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for LocalTemplateLoader {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path) -> TagcheckResult<Template> {
        let source = fs::read_to_string(path).map_err(|e| ApplicationError::TemplateLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let format = TemplateFormat::detect(path, &source);
        debug!(?format, bytes = source.len(), "Parsing template");

        parse_template(&source, format, path)
    }

    #[instrument(skip_all, fields(root = %root.display()))]
    fn discover(&self, root: &Path) -> TagcheckResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::TemplateLoad {
                path: e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                reason: e.to_string(),
            })?;

            if entry.file_type().is_file() && has_template_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        debug!(count = files.len(), "Discovered template files");
        Ok(files)
    }
}

/// Parse template text in the given format. `path` is only used in errors.
pub fn parse_template(source: &str, format: TemplateFormat, path: &Path) -> TagcheckResult<Template> {
    let parse_error = |reason: String| ApplicationError::TemplateParse {
        path: path.to_path_buf(),
        reason,
    };

    let document = match format {
        TemplateFormat::Json => {
            serde_json::from_str::<JsonValue>(source).map_err(|e| parse_error(e.to_string()))?
        }
        TemplateFormat::Yaml => {
            let yaml = serde_yaml::from_str::<YamlValue>(source)
                .map_err(|e| parse_error(e.to_string()))?;
            yaml_to_json(yaml).map_err(parse_error)?
        }
    };

    Ok(Template::from_value(document)?)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn has_template_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            TEMPLATE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

// ── YAML → JSON ───────────────────────────────────────────────────────────────

/// Convert a YAML value to JSON, expanding short-form intrinsic tags.
fn yaml_to_json(value: YamlValue) -> Result<JsonValue, String> {
    Ok(match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(b),
        YamlValue::Number(n) => yaml_number(&n),
        YamlValue::String(s) => JsonValue::String(s),
        YamlValue::Sequence(items) => JsonValue::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(mapping_key(key)?, yaml_to_json(value)?);
            }
            JsonValue::Object(object)
        }
        YamlValue::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            intrinsic(tag.trim_start_matches('!'), tagged.value)?
        }
    })
}

/// Long form of a short-form intrinsic function.
fn intrinsic(name: &str, value: YamlValue) -> Result<JsonValue, String> {
    let (key, body) = match name {
        "Ref" | "Condition" => (name.to_string(), yaml_to_json(value)?),
        "GetAtt" => ("Fn::GetAtt".to_string(), get_att_arguments(value)?),
        other => (format!("Fn::{}", other), yaml_to_json(value)?),
    };

    let mut object = Map::with_capacity(1);
    object.insert(key, body);
    Ok(JsonValue::Object(object))
}

/// `!GetAtt Resource.Attribute` splits on the first dot; the list form is
/// kept as written.
fn get_att_arguments(value: YamlValue) -> Result<JsonValue, String> {
    match value {
        YamlValue::String(s) => match s.split_once('.') {
            Some((resource, attribute)) => Ok(JsonValue::Array(vec![
                JsonValue::String(resource.to_string()),
                JsonValue::String(attribute.to_string()),
            ])),
            None => Ok(JsonValue::String(s)),
        },
        other => yaml_to_json(other),
    }
}

fn mapping_key(key: YamlValue) -> Result<String, String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        other => Err(format!("unsupported mapping key: {:?}", other)),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> JsonValue {
    if let Some(i) = n.as_i64() {
        JsonValue::from(i)
    } else if let Some(u) = n.as_u64() {
        JsonValue::from(u)
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map_or_else(|| JsonValue::String(n.to_string()), JsonValue::Number)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
