//! Builds a post's content markup from its category-specific fields. Each
//! category defines a fixed, ordered list of sections; each section renders
//! as a numbered `<h2>` heading followed by its body text with line breaks
//! substituted. Field text is deliberately not HTML-escaped: the authoring
//! pipeline serves a single trusted author and the output is rendered as
//! trusted markup by the detail view.

use serde::Deserialize;

/// The heading shown for an `etc` section whose author left the heading
/// blank.
pub const HEADING_PLACEHOLDER: &str = "소제목";

/// The marker substituted for newlines inside section bodies.
const LINE_BREAK: &str = "<br/>";

/// The separator between rendered sections.
const SECTION_SEPARATOR: &str = " <br/> ";

/// One free-form section of an `etc` post.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub heading: String,

    #[serde(default)]
    pub body: String,
}

/// The category-specific fields of a draft, keyed by category. Each variant
/// holds only the fields its template uses, so a draft can't carry stray
/// fields from another category's template.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "category", content = "fields", rename_all = "lowercase")]
pub enum CategoryFields {
    Club {
        #[serde(default)]
        period: String,
        #[serde(default)]
        body: String,
        #[serde(default)]
        review: String,
    },
    Hackathon {
        #[serde(default)]
        period: String,
        #[serde(default)]
        motivation: String,
        #[serde(default)]
        topic: String,
        #[serde(default)]
        implementation: String,
        #[serde(default)]
        retrospective: String,
    },
    Project {
        #[serde(default)]
        period: String,
        #[serde(default)]
        topic: String,
        #[serde(default)]
        role: String,
        #[serde(default)]
        implementation: String,
        #[serde(default)]
        challenges: String,
        #[serde(default)]
        retrospective: String,
    },
    Etc {
        sections: Vec<Section>,
    },
}

impl CategoryFields {
    /// The category key this variant belongs to, suitable for
    /// [`crate::post::Category::resolve`].
    pub fn key(&self) -> &'static str {
        match self {
            CategoryFields::Club { .. } => "club",
            CategoryFields::Hackathon { .. } => "hackathon",
            CategoryFields::Project { .. } => "project",
            CategoryFields::Etc { .. } => "etc",
        }
    }

    /// The ordered `(heading, body)` pairs for this category. Fixed per
    /// template for the closed categories; author-supplied for `Etc`, with
    /// blank headings replaced by [`HEADING_PLACEHOLDER`].
    fn sections(&self) -> Vec<(&str, &str)> {
        match self {
            CategoryFields::Club {
                period,
                body,
                review,
            } => vec![
                ("활동 기간", period.as_str()),
                ("활동 내용", body.as_str()),
                ("활동 후기", review.as_str()),
            ],
            CategoryFields::Hackathon {
                period,
                motivation,
                topic,
                implementation,
                retrospective,
            } => vec![
                ("대회 기간", period.as_str()),
                ("참가 동기", motivation.as_str()),
                ("프로젝트 주제", topic.as_str()),
                ("구현 내용", implementation.as_str()),
                ("결과 및 소감", retrospective.as_str()),
            ],
            CategoryFields::Project {
                period,
                topic,
                role,
                implementation,
                challenges,
                retrospective,
            } => vec![
                ("프로젝트 기간", period.as_str()),
                ("주제", topic.as_str()),
                ("맡은 역할", role.as_str()),
                ("주요 구현 내용", implementation.as_str()),
                ("어려웠던 점", challenges.as_str()),
                ("결과 및 소감", retrospective.as_str()),
            ],
            CategoryFields::Etc { sections } => sections
                .iter()
                .map(|section| {
                    let heading = match section.heading.is_empty() {
                        true => HEADING_PLACEHOLDER,
                        false => section.heading.as_str(),
                    };
                    (heading, section.body.as_str())
                })
                .collect(),
        }
    }

    /// Renders the category's sections as one markup string: each section is
    /// `<h2>{n}. {heading}</h2> {body}` with `n` the 1-based section number,
    /// sections joined by [`SECTION_SEPARATOR`].
    pub fn build_content(&self) -> String {
        self.sections()
            .iter()
            .enumerate()
            .map(|(i, (heading, body))| {
                format!("<h2>{}. {}</h2> {}", i + 1, heading, nl2br(body))
            })
            .collect::<Vec<String>>()
            .join(SECTION_SEPARATOR)
    }
}

/// Trims each line of `text` and joins the lines with [`LINE_BREAK`] so the
/// body renders with explicit line breaks instead of raw newlines.
fn nl2br(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .collect::<Vec<&str>>()
        .join(LINE_BREAK)
}
