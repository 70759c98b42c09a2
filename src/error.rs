use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Contract '{0}' not found")]
    ContractNotFound(String),

    /// Error de programación: un consumidor del contexto fuera de su provider
    #[error("{0} must be used within a ContractProvider")]
    MissingProvider(&'static str),

    /// Declarado para el simulador de subida, que nunca lo produce
    #[error("Upload of '{file}' failed: {reason}")]
    UploadFailed { file: String, reason: String },

    #[error("Unknown contract status '{0}'")]
    InvalidStatus(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_subject() {
        assert_eq!(AppError::ContractNotFound("7".into()).to_string(), "Contract '7' not found");
        assert_eq!(
            AppError::MissingProvider("use_contracts").to_string(),
            "use_contracts must be used within a ContractProvider"
        );
        let failed = AppError::UploadFailed {
            file: "a.pdf".into(),
            reason: "timeout".into(),
        };
        assert_eq!(failed.to_string(), "Upload of 'a.pdf' failed: timeout");
    }
}
