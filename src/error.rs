use thiserror::Error;

#[derive(Error, Debug)]
pub enum AqError {
    #[error("theme file not found: {0}")]
    ThemeNotFound(String),

    #[error("theme parse error: {0}")]
    ThemeParse(String),

    #[error("answers file not found: {0}")]
    AnswersNotFound(String),

    #[error("answers parse error: {0}")]
    AnswersParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AqError>;
