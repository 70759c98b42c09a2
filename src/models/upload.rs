use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resumen fijo que se adjunta al terminar el "procesado"
pub const EXTRACTION_SUMMARY: &str = "Contract successfully processed. Key terms extracted including parties, dates, financial obligations, and payment terms. AI analysis completed with 95% confidence score.";

/// Identificador estable de una entrada de subida. Sobrevive a las
/// eliminaciones de otras entradas, a diferencia de un índice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(Uuid);

impl FileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lo que sabemos del archivo seleccionado. Nunca se leen sus bytes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    pub size: u64,
    #[serde(default)]
    pub mime_type: String,
}

impl FileHandle {
    pub fn new(name: &str, size: u64, mime_type: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            mime_type: mime_type.to_string(),
        }
    }

    pub fn size_mb(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }

    /// Comprobación orientativa: el filtro del input no se aplica de verdad
    pub fn matches_extension(&self, extension: &str) -> bool {
        self.name.to_lowercase().ends_with(&extension.to_lowercase())
    }

    pub fn exceeds(&self, max_bytes: u64) -> bool {
        self.size > max_bytes
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploading,
    Processing,
    Completed,
    /// Existe en el modelo pero el simulador nunca llega a él
    Error,
}

impl UploadStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStatus::Completed | UploadStatus::Error)
    }

    /// La barra de progreso se muestra mientras no hay resultado
    pub fn shows_progress(&self) -> bool {
        matches!(self, UploadStatus::Uploading | UploadStatus::Processing)
    }
}

/// Resultado de aplicar un tick del random walk a una entrada
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Sigue subiendo, con el progreso resultante
    Advanced(f64),
    /// Ha llegado a 100: la subida termina y empieza el procesado
    Reached,
    /// La entrada ya no estaba subiendo; el tick no tiene efecto
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: FileId,
    pub file: FileHandle,
    pub status: UploadStatus,
    /// 0-100, nunca decrece
    pub progress: f64,
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadedFile {
    pub fn new(file: FileHandle) -> Self {
        Self {
            id: FileId::new(),
            file,
            status: UploadStatus::Uploading,
            progress: 0.0,
            extracted_text: None,
            error: None,
        }
    }

    /// Suma `increment` al progreso. Incrementos negativos o no finitos
    /// cuentan como 0 para mantener el progreso monótono.
    pub fn advance(&mut self, increment: f64) -> TickOutcome {
        if self.status != UploadStatus::Uploading {
            return TickOutcome::Ignored;
        }

        let step = if increment.is_finite() { increment.max(0.0) } else { 0.0 };
        self.progress = (self.progress + step).min(100.0);

        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.status = UploadStatus::Processing;
            TickOutcome::Reached
        } else {
            TickOutcome::Advanced(self.progress)
        }
    }

    /// Processing -> Completed con el resumen. Devuelve false si la entrada
    /// no estaba en processing.
    pub fn complete(&mut self, summary: &str) -> bool {
        if self.status != UploadStatus::Processing {
            return false;
        }
        self.status = UploadStatus::Completed;
        self.extracted_text = Some(summary.to_string());
        true
    }
}
