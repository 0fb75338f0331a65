use crate::util::open;
use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The project file searched for in the working directory and its parents.
const PROJECT_FILE: &str = "postwright.yaml";

/// The default collection file location, relative to the project root. This
/// matches where the deployed site fetches it from.
const DEFAULT_POSTS_FILE: &str = "public/posts.json";

/// The optional on-disk project file. All fields default so an empty file
/// (or no file at all) is a valid project.
#[derive(Deserialize)]
struct Project {
    #[serde(default)]
    pub posts_file: Option<PathBuf>,

    #[serde(default)]
    pub base_path: Option<String>,
}

pub struct Config {
    /// The path to the `posts.json` collection file.
    pub posts_file: PathBuf,

    /// The deployment sub-path the site is served under, used when printing
    /// post links.
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            posts_file: PathBuf::from(DEFAULT_POSTS_FILE),
            base_path: String::from("/"),
        }
    }
}

impl Config {
    /// Looks for `postwright.yaml` in `dir` and each parent directory.
    /// Unlike a build tool, the listing must degrade rather than fail, so
    /// running outside any project yields the defaults instead of an error.
    pub fn from_directory(dir: &Path) -> Result<Config> {
        let path = dir.join(PROJECT_FILE);
        if path.exists() {
            Config::from_project_file(&path)
        } else {
            match dir.parent() {
                Some(parent) => Config::from_directory(parent),
                None => Ok(Config::default()),
            }
        }
    }

    /// Loads a project file, resolving the posts file path relative to the
    /// project root (the directory containing the project file).
    pub fn from_project_file(path: &Path) -> Result<Config> {
        let project: Project = serde_yaml::from_reader(open(path, "project")?)?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        let defaults = Config::default();
        Ok(Config {
            posts_file: match project.posts_file {
                Some(posts_file) => root.join(posts_file),
                None => root.join(defaults.posts_file),
            },
            base_path: project.base_path.unwrap_or(defaults.base_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(PathBuf::from("public/posts.json"), config.posts_file);
        assert_eq!("/", config.base_path);
    }

    #[test]
    fn test_from_directory_without_project_file_uses_defaults() {
        // Walking up from the filesystem root finds nothing.
        let config = Config::from_directory(Path::new("/")).unwrap();
        assert_eq!(PathBuf::from("public/posts.json"), config.posts_file);
    }
}
