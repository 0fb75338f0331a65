//! The library code for the `postwright` blog toolkit. The site itself is
//! static: a `posts.json` collection file fetched by the deployed pages. This
//! crate is the tooling around that file, and its architecture can be broken
//! down into two distinct pipelines:
//!
//! 1. Reading posts: load the collection ([`crate::store`]) and filter/sort
//!    it for display ([`crate::query`]).
//! 2. Authoring posts: parse a draft, build its content markup from the
//!    category's section template ([`crate::content`]), normalize the image
//!    reference ([`crate::image`]), and assemble the finished record
//!    ([`crate::write`]).
//!
//! Of the two, authoring is the more involved. Each category defines a fixed,
//! ordered list of sections ("기타"/etc posts instead carry free-form
//! sections), and the builder renders them as numbered headings joined by
//! explicit line-break markers. The assembled record is printed as a
//! pretty-printed JSON block with an empty id; assigning the id and appending
//! the block to the collection file is a deliberate manual step, so the
//! toolkit never writes `posts.json` itself.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod config;
pub mod content;
pub mod image;
pub mod post;
pub mod query;
pub mod store;
pub mod util;
pub mod write;
