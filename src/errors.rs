use crate::models::notification::ApiErrorBody;
use thiserror::Error;

/// Malformed or insufficient command line.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("Argumentos insuficientes")]
    MissingArguments,

    #[error("Argumento inválido: {0}")]
    Invalid(String),
}

/// The requested notification cannot be built.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Tipo inválido: {0}")]
    UnknownType(String),

    #[error("Para tipo 'custom', forneça --title e --body (faltando --{field})")]
    MissingField { field: &'static str },
}

/// The notification API could not be reached or rejected the request.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Erro ao enviar notificação (HTTP {status})")]
    Api { status: u16, body: ApiErrorBody },

    #[error("Timeout ao conectar com a API")]
    Timeout,

    #[error("Não foi possível conectar com a API: {0}")]
    Connection(String),

    #[error("Erro inesperado: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Send(#[from] SendError),
}

pub type SendResult<T> = Result<T, SendError>;
