//! The authoring pipeline: a [`Draft`] collects the common fields and the
//! category-specific fields, and [`Draft::assemble`] combines them into a
//! finished [`PostRecord`] with generated content markup, a normalized image
//! path, and an empty id. The operator pastes the record's pretty-printed
//! JSON into the collection file by hand; this crate never writes
//! `posts.json` itself.

use crate::content::CategoryFields;
use crate::image;
use crate::post::{parse_tags, today, Category, PostRecord};
use crate::util::open;
use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::Path;

/// A post draft as authored in a YAML file. The `category` key selects which
/// template the `fields` block is parsed against, so a club draft can't
/// smuggle in hackathon fields.
///
/// ```yaml
/// title: 캡스톤 디자인 회고
/// excerpt: 한 학기 동안의 캡스톤 프로젝트 정리
/// image: capstone.jpg
/// tags: "Project, Capstone"
/// category: project
/// fields:
///   period: 2024-03 ~ 2024-06
///   topic: 캠퍼스 내 분실물 찾기 서비스
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct Draft {
    pub title: String,

    #[serde(default)]
    pub excerpt: String,

    /// ISO `YYYY-MM-DD`; defaults to the current date when omitted.
    #[serde(default)]
    pub date: Option<String>,

    /// Raw image reference, normalized by [`crate::image::normalize`].
    #[serde(default)]
    pub image: String,

    /// Comma-separated tag text, split by [`crate::post::parse_tags`].
    #[serde(default)]
    pub tags: String,

    #[serde(flatten)]
    pub fields: CategoryFields,
}

impl Draft {
    /// Reads a draft from a YAML file.
    pub fn from_file(path: &Path) -> Result<Draft> {
        Ok(serde_yaml::from_reader(open(path, "draft")?)?)
    }

    /// Assembles the finished record: trims the common text fields, builds
    /// the content markup, normalizes the image reference, and resolves the
    /// category. The id is left empty to signal "not yet assigned".
    pub fn assemble(&self) -> Result<PostRecord> {
        if let CategoryFields::Etc { sections } = &self.fields {
            if sections.is_empty() {
                return Err(anyhow!("An `etc` draft needs at least one section"));
            }
        }

        Ok(PostRecord {
            id: String::new(),
            title: self.title.trim().to_owned(),
            excerpt: self.excerpt.trim().to_owned(),
            date: match &self.date {
                Some(date) => date.clone(),
                None => today(),
            },
            image: image::normalize(&self.image),
            content: self.fields.build_content(),
            tags: parse_tags(&self.tags),
            category: Some(Category::resolve(self.fields.key())),
        })
    }
}
