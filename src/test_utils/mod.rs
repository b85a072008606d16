#![allow(missing_docs)]

pub(crate) mod db;
pub(crate) mod http;

pub(crate) use db::TestDatabase;
pub(crate) use http::{assert_content_type, response_json};
