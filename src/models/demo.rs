// ============================================================================
// DATOS DE DEMO - Conjunto fijo de contratos de la sesión
// ============================================================================

use chrono::NaiveDate;

use super::contract::{Contract, ContractStatus, ExtractedData};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Fechas literales válidas; el fallback nunca se usa
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Los cinco contratos con los que arranca la aplicación
pub fn sample_contracts() -> Vec<Contract> {
    let mut license = Contract::new(
        "1",
        "Software License Agreement - TechCorp",
        &["TechCorp Inc.", "Digital Solutions LLC"],
        ContractStatus::Completed,
        date(2024, 1, 15),
    );
    license.confidence_score = Some(95);
    license.financial_value = Some("$250,000".to_string());
    license.extracted_data = Some(ExtractedData {
        contract_type: "Software License Agreement".to_string(),
        start_date: date(2024, 2, 1),
        end_date: date(2025, 1, 31),
        payment_terms: "Net 30 days, quarterly payments".to_string(),
        sla_details: "99.9% uptime guarantee, 4-hour response time".to_string(),
        key_obligations: strings(&[
            "Provide software maintenance and support",
            "Deliver quarterly updates",
            "Maintain data security standards",
        ]),
        risk_factors: strings(&["Auto-renewal clause", "Limited liability cap at $100,000"]),
    });

    let mut service = Contract::new(
        "2",
        "Service Agreement - CloudServices",
        &["CloudServices Corp", "Enterprise Solutions Inc"],
        ContractStatus::Processing,
        date(2024, 1, 20),
    );
    service.confidence_score = Some(78);
    service.financial_value = Some("$500,000".to_string());
    service.processing_progress = Some(65.0);

    let mut partnership = Contract::new(
        "3",
        "Partnership Agreement - StartupXYZ",
        &["StartupXYZ", "Innovation Partners"],
        ContractStatus::Completed,
        date(2024, 1, 18),
    );
    partnership.confidence_score = Some(88);
    partnership.financial_value = Some("$1,200,000".to_string());
    partnership.extracted_data = Some(ExtractedData {
        contract_type: "Strategic Partnership Agreement".to_string(),
        start_date: date(2024, 3, 1),
        end_date: date(2027, 2, 28),
        payment_terms: "Milestone-based payments, 15% upon signature".to_string(),
        sla_details: "Monthly reporting, quarterly business reviews".to_string(),
        key_obligations: strings(&[
            "Joint product development",
            "Shared marketing efforts",
            "Technology integration",
        ]),
        risk_factors: strings(&["Exclusivity requirements", "IP ownership disputes possible"]),
    });

    let mut consulting = Contract::new(
        "4",
        "Consulting Agreement - FinanceFirm",
        &["FinanceFirm LLC", "Advisory Group"],
        ContractStatus::Error,
        date(2024, 1, 22),
    );
    consulting.financial_value = Some("$75,000".to_string());

    let mut supply = Contract::new(
        "5",
        "Supply Chain Contract - ManufacturingCo",
        &["ManufacturingCo", "Supplier Network Ltd"],
        ContractStatus::Pending,
        date(2024, 1, 25),
    );
    supply.financial_value = Some("$2,500,000".to_string());

    vec![license, service, partnership, consulting, supply]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique() {
        let contracts = sample_contracts();
        let ids: HashSet<_> = contracts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), contracts.len());
        assert_eq!(contracts.len(), 5);
    }

    #[test]
    fn sample_respects_status_invariants() {
        for c in sample_contracts() {
            if c.processing_progress.is_some() {
                assert_eq!(c.status, ContractStatus::Processing, "{}", c.id);
            }
            if c.extracted_data.is_some() {
                assert_eq!(c.status, ContractStatus::Completed, "{}", c.id);
            }
        }
    }
}
