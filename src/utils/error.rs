use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("File content is not valid UTF-8: {0}")]
    DecodeError(#[from] std::string::FromUtf8Error),

    #[error("Upload error: {0}")]
    UploadError(#[from] axum::extract::multipart::MultipartError),

    #[error("Only CSV files are allowed, got '{filename}'")]
    InvalidFileExtension { filename: String },

    #[error("Multipart form is missing the 'file' field")]
    MissingUploadField,

    #[error("Invalid integer '{value}' in ID column")]
    IdCoercionError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl IngestError {
    /// 客戶端錯誤（上傳內容本身不合法，尚未進入解析流程）
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            IngestError::InvalidFileExtension { .. } | IngestError::MissingUploadField
        )
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
