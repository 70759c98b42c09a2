use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Layout, StatusBadge};
use crate::error::{AppError, AppResult};
use crate::models::{sample_contracts, Contract};
use crate::router::Route;
use crate::utils::{confidence_variant, format_date};

const NOT_EXTRACTED: &str = "Not extracted";
const NOT_SPECIFIED: &str = "Not specified";

/// Busca un contrato por id en el conjunto fijo de demo
pub fn find_contract<'a>(contracts: &'a [Contract], id: &str) -> AppResult<&'a Contract> {
    contracts
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| AppError::ContractNotFound(id.to_string()))
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: Vec<DetailItem>,
}

fn item(label: &'static str, value: Option<String>, placeholder: &str) -> DetailItem {
    DetailItem {
        label,
        value: value.unwrap_or_else(|| placeholder.to_string()),
    }
}

/// Secciones de información del detalle con sus placeholders
pub fn detail_sections(contract: &Contract) -> Vec<DetailSection> {
    let data = contract.extracted_data.as_ref();

    vec![
        DetailSection {
            title: "Contract Information",
            icon: "📄",
            items: vec![
                item("Contract Type", data.map(|d| d.contract_type.clone()), NOT_EXTRACTED),
                item("Start Date", data.map(|d| d.start_date.to_string()), NOT_EXTRACTED),
                item("End Date", data.map(|d| d.end_date.to_string()), NOT_EXTRACTED),
                item("Upload Date", Some(format_date(contract.upload_date)), NOT_EXTRACTED),
            ],
        },
        DetailSection {
            title: "Financial Details",
            icon: "💲",
            items: vec![
                item("Total Value", contract.financial_value.clone(), NOT_SPECIFIED),
                item("Payment Terms", data.map(|d| d.payment_terms.clone()), NOT_EXTRACTED),
            ],
        },
        DetailSection {
            title: "Service Level Agreement",
            icon: "🛡️",
            items: vec![item("SLA Details", data.map(|d| d.sla_details.clone()), NOT_EXTRACTED)],
        },
    ]
}

#[derive(Properties, PartialEq, Clone)]
pub struct ContractDetailProps {
    pub id: String,
}

fn back_link() -> Html {
    html! {
        <Link<Route> to={Route::Contracts} classes="btn btn-ghost btn-sm">
            {"← Back to Contracts"}
        </Link<Route>>
    }
}

#[function_component(ContractDetailView)]
pub fn contract_detail_view(props: &ContractDetailProps) -> Html {
    let contracts = use_memo((), |_| sample_contracts());

    let contract = match find_contract(&contracts, &props.id) {
        Ok(contract) => contract,
        Err(e) => {
            log::warn!("🔍 {}", e);
            return html! {
                <Layout>
                    <div class="not-found-contract">
                        <h1>{"Contract Not Found"}</h1>
                        <p class="muted">
                            {"The contract you're looking for doesn't exist or has been removed."}
                        </p>
                        {back_link()}
                    </div>
                </Layout>
            };
        }
    };

    let data = contract.extracted_data.as_ref();

    html! {
        <Layout>
            <div class="contract-detail">
                <div class="detail-back">{back_link()}</div>

                <div class="detail-grid">
                    <div class="detail-main">
                        <div class="gradient-card detail-header">
                            <div>
                                <h1>{contract.title.clone()}</h1>
                                <div class="muted">
                                    <span class="icon">{"👥"}</span>
                                    {contract.parties.join(" • ")}
                                </div>
                            </div>
                            <StatusBadge status={contract.status.as_str()} />
                        </div>

                        { for detail_sections(contract).into_iter().map(|section| html! {
                            <div class="gradient-card detail-section" key={section.title}>
                                <h2><span class="icon">{section.icon}</span>{section.title}</h2>
                                <dl class="detail-items">
                                    { for section.items.into_iter().map(|item| html! {
                                        <div class="detail-item" key={item.label}>
                                            <dt class="muted">{item.label}</dt>
                                            <dd>{item.value}</dd>
                                        </div>
                                    })}
                                </dl>
                            </div>
                        })}

                        if let Some(data) = data {
                            <div class="gradient-card detail-section">
                                <h2><span class="icon text-success">{"✅"}</span>{"Key Obligations"}</h2>
                                <ul class="obligations">
                                    { for data.key_obligations.iter().map(|o| html! {
                                        <li><span class="dot" />{o.clone()}</li>
                                    })}
                                </ul>
                            </div>

                            <div class="gradient-card detail-section risk-card">
                                <h2><span class="icon text-warning">{"⚠️"}</span>{"Risk Factors"}</h2>
                                <ul class="risks">
                                    { for data.risk_factors.iter().map(|r| html! {
                                        <li><span class="icon text-warning">{"⚠️"}</span>{r.clone()}</li>
                                    })}
                                </ul>
                            </div>
                        }
                    </div>

                    <aside class="detail-sidebar">
                        <div class="gradient-card">
                            <h3>{"Status Overview"}</h3>
                            <div class="sidebar-row">
                                <span class="muted">{"Processing Status"}</span>
                                <StatusBadge status={contract.status.as_str()} />
                            </div>
                            if let Some(score) = contract.confidence_score {
                                <div class="sidebar-row">
                                    <span class="muted">{"Confidence Score"}</span>
                                    <span class={classes!("badge", confidence_variant(score))}>
                                        {format!("{}%", score)}
                                    </span>
                                </div>
                            }
                            <div class="sidebar-row">
                                <span class="muted">{"Upload Date"}</span>
                                <span>{format_date(contract.upload_date)}</span>
                            </div>
                        </div>

                        <div class="gradient-card actions-card">
                            <h3>{"Actions"}</h3>
                            <button type="button" class="btn btn-outline btn-block">{"📄 Download PDF"}</button>
                            <button type="button" class="btn btn-outline btn-block">{"Export Analysis"}</button>
                            <button type="button" class="btn btn-outline btn-block">{"Share Contract"}</button>
                        </div>
                    </aside>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(sections: &'a [DetailSection], label: &str) -> &'a str {
        sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|i| i.label == label)
            .map(|i| i.value.as_str())
            .unwrap()
    }

    #[test]
    fn unknown_id_is_not_found() {
        let contracts = sample_contracts();
        assert_eq!(
            find_contract(&contracts, "999"),
            Err(AppError::ContractNotFound("999".to_string()))
        );
        assert!(find_contract(&[], "1").is_err());
    }

    #[test]
    fn known_id_resolves() {
        let contracts = sample_contracts();
        let contract = find_contract(&contracts, "1").unwrap();
        assert_eq!(contract.title, "Software License Agreement - TechCorp");
    }

    #[test]
    fn populated_contract_shows_extracted_values() {
        let contracts = sample_contracts();
        let sections = detail_sections(find_contract(&contracts, "1").unwrap());

        assert_eq!(sections.len(), 3);
        assert_eq!(value(&sections, "Contract Type"), "Software License Agreement");
        assert_eq!(value(&sections, "Start Date"), "2024-02-01");
        assert_eq!(value(&sections, "Upload Date"), "1/15/2024");
        assert_eq!(value(&sections, "Total Value"), "$250,000");
        assert_eq!(value(&sections, "SLA Details"), "99.9% uptime guarantee, 4-hour response time");
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let contracts = sample_contracts();
        let sections = detail_sections(find_contract(&contracts, "2").unwrap());

        assert_eq!(value(&sections, "Contract Type"), NOT_EXTRACTED);
        assert_eq!(value(&sections, "Payment Terms"), NOT_EXTRACTED);
        assert_eq!(value(&sections, "Total Value"), "$500,000");

        let mut bare = contracts[1].clone();
        bare.financial_value = None;
        let sections = detail_sections(&bare);
        assert_eq!(value(&sections, "Total Value"), NOT_SPECIFIED);
    }
}
