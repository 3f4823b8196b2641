use serde::Serialize;

/// One financial-education tip. The catalog is static data; ids are stable
/// within a language.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Tip {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub category: &'static str,
}
