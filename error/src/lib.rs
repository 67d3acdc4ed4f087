pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field was missing or malformed; the input should be shown again.
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Project with id {0} does not exist")]
    NotFound(i64),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl Error {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal<T: Into<anyhow::Error>>(err: T) -> Self {
        Self::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            Error::validation("title must not be empty").to_string(),
            "Validation failed: title must not be empty"
        );
        assert_eq!(
            Error::NotFound(7).to_string(),
            "Project with id 7 does not exist"
        );
        assert_eq!(
            Error::internal(anyhow::anyhow!("pool closed")).to_string(),
            "pool closed"
        );
    }
}
