use thiserror::Error;
use twcss::ConfigError;

#[derive(Error, Debug)]
pub enum MailwindError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Conditional utilities were used but the tree has no `<head>` to
    /// carry their stylesheet.
    #[error(
        "responsive and state utility classes need a <head> element to hold their \
         media queries and pseudo-class rules, but none was found in the tree; \
         add a head to the document or remove these classes: {}",
        .classes.join(", ")
    )]
    MissingHead { classes: Vec<String> },
}

pub type Result<T> = std::result::Result<T, MailwindError>;
