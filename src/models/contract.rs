use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 4] = [
        ContractStatus::Pending,
        ContractStatus::Processing,
        ContractStatus::Completed,
        ContractStatus::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Pending => "pending",
            ContractStatus::Processing => "processing",
            ContractStatus::Completed => "completed",
            ContractStatus::Error => "error",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractStatus {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == raw)
            .ok_or_else(|| AppError::InvalidStatus(raw.to_string()))
    }
}

/// Datos "extraídos" de un contrato (siempre mock)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub contract_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub payment_terms: String,
    pub sla_details: String,
    #[serde(default)]
    pub key_obligations: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub title: String,
    pub parties: Vec<String>,
    pub status: ContractStatus,
    /// 0-100, valor de presentación sin cálculo propio
    #[serde(default)]
    pub confidence_score: Option<u8>,
    pub upload_date: NaiveDate,
    #[serde(default)]
    pub financial_value: Option<String>,
    /// Solo tiene sentido con status = processing
    #[serde(default)]
    pub processing_progress: Option<f64>,
    /// Solo se rellena con status = completed
    #[serde(default)]
    pub extracted_data: Option<ExtractedData>,
}

impl Contract {
    pub fn new(id: &str, title: &str, parties: &[&str], status: ContractStatus, upload_date: NaiveDate) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            parties: parties.iter().map(|p| p.to_string()).collect(),
            status,
            confidence_score: None,
            upload_date,
            financial_value: None,
            processing_progress: None,
            extracted_data: None,
        }
    }

    /// Coincidencia de búsqueda: subcadena sin distinguir mayúsculas en el
    /// título o en cualquiera de las partes
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.parties.iter().any(|p| p.to_lowercase().contains(&term))
    }

    /// Progreso a mostrar en la card: solo mientras se procesa
    pub fn visible_progress(&self) -> Option<f64> {
        match self.status {
            ContractStatus::Processing => self.processing_progress,
            _ => None,
        }
    }
}

/// Actualización parcial tipada de un contrato.
///
/// Los campos opcionales del contrato usan `Option<Option<T>>`: `None` deja el
/// valor intacto, `Some(None)` lo borra y `Some(Some(v))` lo sustituye.
/// El `id` no es actualizable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContractPatch {
    pub title: Option<String>,
    pub parties: Option<Vec<String>>,
    pub status: Option<ContractStatus>,
    pub confidence_score: Option<Option<u8>>,
    pub upload_date: Option<NaiveDate>,
    pub financial_value: Option<Option<String>>,
    pub processing_progress: Option<Option<f64>>,
    pub extracted_data: Option<Option<ExtractedData>>,
}

impl ContractPatch {
    pub fn status(status: ContractStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Devuelve una copia de `contract` con el patch aplicado
    pub fn apply(&self, contract: &Contract) -> Contract {
        let mut merged = contract.clone();
        if let Some(title) = &self.title {
            merged.title = title.clone();
        }
        if let Some(parties) = &self.parties {
            merged.parties = parties.clone();
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(score) = self.confidence_score {
            merged.confidence_score = score;
        }
        if let Some(date) = self.upload_date {
            merged.upload_date = date;
        }
        if let Some(value) = &self.financial_value {
            merged.financial_value = value.clone();
        }
        if let Some(progress) = self.processing_progress {
            merged.processing_progress = progress;
        }
        if let Some(data) = &self.extracted_data {
            merged.extracted_data = data.clone();
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo::sample_contracts;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn base() -> Contract {
        let mut c = Contract::new(
            "42",
            "NDA - Acme",
            &["Acme Corp", "Globex"],
            ContractStatus::Processing,
            date(2024, 2, 1),
        );
        c.confidence_score = Some(80);
        c.financial_value = Some("$10,000".to_string());
        c.processing_progress = Some(40.0);
        c
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in ContractStatus::ALL {
            assert_eq!(status.as_str().parse::<ContractStatus>(), Ok(status));
        }
        assert_eq!(
            "archived".parse::<ContractStatus>(),
            Err(AppError::InvalidStatus("archived".to_string()))
        );
        // sensible a mayúsculas, igual que la tabla de badges
        assert!("Completed".parse::<ContractStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ContractStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }

    #[test]
    fn empty_patch_is_identity() {
        let patch = ContractPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply(&base()), base());
    }

    #[test]
    fn patch_title() {
        let patch = ContractPatch { title: Some("NDA v2".into()), ..Default::default() };
        let merged = patch.apply(&base());
        assert_eq!(merged.title, "NDA v2");
        assert_eq!(merged.parties, base().parties);
    }

    #[test]
    fn patch_parties_replaces_whole_list() {
        let patch = ContractPatch { parties: Some(vec!["Initech".into()]), ..Default::default() };
        assert_eq!(patch.apply(&base()).parties, vec!["Initech".to_string()]);
    }

    #[test]
    fn patch_status() {
        let merged = ContractPatch::status(ContractStatus::Error).apply(&base());
        assert_eq!(merged.status, ContractStatus::Error);
        assert_eq!(merged.processing_progress, Some(40.0));
    }

    #[test]
    fn patch_confidence_set_and_clear() {
        let set = ContractPatch { confidence_score: Some(Some(97)), ..Default::default() };
        assert_eq!(set.apply(&base()).confidence_score, Some(97));

        let clear = ContractPatch { confidence_score: Some(None), ..Default::default() };
        assert_eq!(clear.apply(&base()).confidence_score, None);
    }

    #[test]
    fn patch_upload_date() {
        let patch = ContractPatch { upload_date: Some(date(2025, 1, 1)), ..Default::default() };
        assert_eq!(patch.apply(&base()).upload_date, date(2025, 1, 1));
    }

    #[test]
    fn patch_financial_value_set_and_clear() {
        let set = ContractPatch { financial_value: Some(Some("$1".into())), ..Default::default() };
        assert_eq!(set.apply(&base()).financial_value.as_deref(), Some("$1"));

        let clear = ContractPatch { financial_value: Some(None), ..Default::default() };
        assert_eq!(clear.apply(&base()).financial_value, None);
    }

    #[test]
    fn patch_processing_progress_set_and_clear() {
        let set = ContractPatch { processing_progress: Some(Some(90.0)), ..Default::default() };
        assert_eq!(set.apply(&base()).processing_progress, Some(90.0));

        let clear = ContractPatch { processing_progress: Some(None), ..Default::default() };
        assert_eq!(clear.apply(&base()).processing_progress, None);
    }

    #[test]
    fn patch_extracted_data() {
        let data = sample_contracts()[0].extracted_data.clone();
        assert!(data.is_some());

        let set = ContractPatch { extracted_data: Some(data.clone()), ..Default::default() };
        assert_eq!(set.apply(&base()).extracted_data, data);

        let clear = ContractPatch { extracted_data: Some(None), ..Default::default() };
        assert_eq!(clear.apply(&set.apply(&base())).extracted_data, None);
    }

    #[test]
    fn patch_never_touches_id() {
        let patch = ContractPatch {
            title: Some("x".into()),
            status: Some(ContractStatus::Completed),
            ..Default::default()
        };
        assert_eq!(patch.apply(&base()).id, "42");
    }

    #[test]
    fn search_matches_title_and_parties_case_insensitive() {
        let c = base();
        assert!(c.matches_search(""));
        assert!(c.matches_search("nda"));
        assert!(c.matches_search("GLOBEX"));
        assert!(c.matches_search("me co"));
        assert!(!c.matches_search("initech"));
    }

    #[test]
    fn progress_only_visible_while_processing() {
        let mut c = base();
        assert_eq!(c.visible_progress(), Some(40.0));
        c.status = ContractStatus::Completed;
        assert_eq!(c.visible_progress(), None);
        c.status = ContractStatus::Processing;
        c.processing_progress = None;
        assert_eq!(c.visible_progress(), None);
    }
}
