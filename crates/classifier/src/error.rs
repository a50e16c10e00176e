use crate::patterns::Category;

pub type Result<T, E = ClassifierError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum ClassifierError {
    #[error("pattern for category {category} failed to compile: {source}")]
    Pattern {
        category: Category,
        #[source]
        source: regex::Error,
    },
    #[error("override phrase {0:?} appears in both the spam and ham sets")]
    OverlappingPhrase(&'static str),
}
