// HTTP surface over the scorer: request parsing, response formatting, city blurbs.

pub mod handlers;
pub mod reasons;
