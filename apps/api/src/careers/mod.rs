// Career suggestion: static skill/personality tables and the rule that
// combines them into a suggestion list.

pub mod catalog;
pub mod handlers;
pub mod resolver;
