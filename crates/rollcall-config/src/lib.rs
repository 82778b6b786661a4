use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "rollcall";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub course: CourseConfig,
    pub labs: Vec<Lab>,
    pub assessment: Vec<AssessmentItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseConfig {
    pub code: String,
    pub title: String,
    pub subtitle: String,
    pub welcome: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
    pub no: u32,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentItem {
    pub name: String,
    pub weight_pct: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            course: CourseConfig {
                code: "ACSC 330".to_string(),
                title: "Interactive Design".to_string(),
                subtitle: "C# & Unity Laboratory — Spring 2026".to_string(),
                welcome: vec![
                    "This course introduces you to interactive application development"
                        .to_string(),
                    "using C# and the Unity game engine. By the end of the semester".to_string(),
                    "you will design, build, and publish your own interactive projects."
                        .to_string(),
                ],
            },
            labs: default_labs(),
            assessment: vec![
                AssessmentItem {
                    name: "Lab Work".to_string(),
                    weight_pct: 40,
                },
                AssessmentItem {
                    name: "Mid-term".to_string(),
                    weight_pct: 25,
                },
                AssessmentItem {
                    name: "Final Project".to_string(),
                    weight_pct: 35,
                },
            ],
        }
    }
}

fn default_labs() -> Vec<Lab> {
    let topics = [
        "C# Fundamentals & .NET Environment Setup",
        "Object-Oriented Programming in C#",
        "Unity Interface, GameObjects & Components",
        "Scripting with C# in Unity",
        "Physics, Colliders & Rigidbody",
        "UI System — Canvas, Buttons & Events",
        "Scene Management & Game Flow",
        "Audio, Animation & Particle Systems",
        "Mid-term Project Review",
        "Advanced Interactions & Custom Input",
        "Lighting, Shaders & Visual Polish",
        "Optimization & Build Pipeline",
        "Publishing & Deployment",
        "Final Project Presentations",
    ];
    topics
        .iter()
        .enumerate()
        .map(|(idx, topic)| Lab {
            no: idx as u32 + 1,
            topic: (*topic).to_string(),
        })
        .collect()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid assessment weight: {0} (expected 0-100)")]
    InvalidAssessmentWeight(u32),
    #[error("duplicate lab number: {0}")]
    DuplicateLabNumber(u32),
    #[error("lab {0} has an empty topic")]
    EmptyLabTopic(u32),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    course: Option<CourseFile>,
    labs: Option<Vec<Lab>>,
    assessment: Option<Vec<AssessmentItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CourseFile {
    code: Option<String>,
    title: Option<String>,
    subtitle: Option<String>,
    welcome: Option<Vec<String>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(file: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(course) = file.course {
        if let Some(code) = course.code {
            config.course.code = code;
        }
        if let Some(title) = course.title {
            config.course.title = title;
        }
        if let Some(subtitle) = course.subtitle {
            config.course.subtitle = subtitle;
        }
        if let Some(welcome) = course.welcome {
            config.course.welcome = welcome;
        }
    }

    if let Some(labs) = file.labs {
        validate_labs(&labs)?;
        config.labs = labs;
    }

    if let Some(assessment) = file.assessment {
        for item in &assessment {
            if item.weight_pct > 100 {
                return Err(ConfigError::InvalidAssessmentWeight(item.weight_pct));
            }
        }
        config.assessment = assessment;
    }

    Ok(config)
}

fn validate_labs(labs: &[Lab]) -> Result<()> {
    let mut seen = Vec::with_capacity(labs.len());
    for lab in labs {
        if lab.topic.trim().is_empty() {
            return Err(ConfigError::EmptyLabTopic(lab.no));
        }
        if seen.contains(&lab.no) {
            return Err(ConfigError::DuplicateLabNumber(lab.no));
        }
        seen.push(lab.no);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load, AppConfig, ConfigError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_describe_the_full_syllabus() {
        let config = AppConfig::default();
        assert_eq!(config.course.code, "ACSC 330");
        assert_eq!(config.labs.len(), 14);
        assert_eq!(config.labs[0].no, 1);
        let total: u32 = config.assessment.iter().map(|a| a.weight_pct).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn load_with_explicit_missing_path_fails() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("absent.toml");
        let err = load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingConfigFile(_)));
    }

    #[test]
    fn load_merges_file_over_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[course]
code = "CS 101"
title = "Intro to Programming"

[[labs]]
no = 1
topic = "Hello, world"

[[assessment]]
name = "Homework"
weight_pct = 100
"#,
        )
        .expect("write config");

        let config = load(Some(path)).expect("load");
        assert_eq!(config.course.code, "CS 101");
        assert_eq!(config.course.title, "Intro to Programming");
        // untouched sections keep their defaults
        assert_eq!(config.course.subtitle, "C# & Unity Laboratory — Spring 2026");
        assert_eq!(config.labs.len(), 1);
        assert_eq!(config.assessment.len(), 1);
    }

    #[test]
    fn load_rejects_oversized_weight() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[[assessment]]\nname = \"Everything\"\nweight_pct = 120\n",
        )
        .expect("write config");

        let err = load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAssessmentWeight(120)));
    }

    #[test]
    fn load_rejects_duplicate_lab_numbers() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[[labs]]\nno = 3\ntopic = \"A\"\n\n[[labs]]\nno = 3\ntopic = \"B\"\n",
        )
        .expect("write config");

        let err = load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateLabNumber(3)));
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "surprise = true\n").expect("write config");

        let err = load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
