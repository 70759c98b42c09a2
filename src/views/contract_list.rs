use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ContractCard, Layout};
use crate::hooks::{use_contract_filter, use_contracts, StatusFilter};
use crate::models::ContractStatus;
use crate::router::Route;

/// Mensaje del estado vacío según haya filtro activo o no
pub fn empty_message(is_filtering: bool) -> &'static str {
    if is_filtering {
        "No contracts match your search criteria"
    } else {
        "No contracts uploaded yet"
    }
}

fn status_option_label(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "All Statuses",
        StatusFilter::Only(ContractStatus::Completed) => "Completed",
        StatusFilter::Only(ContractStatus::Processing) => "Processing",
        StatusFilter::Only(ContractStatus::Pending) => "Pending",
        StatusFilter::Only(ContractStatus::Error) => "Error",
    }
}

#[function_component(ContractListView)]
pub fn contract_list_view() -> Html {
    let contracts = use_contracts();
    let filter = use_contract_filter(contracts.contracts());
    let navigator = use_navigator();

    let on_open = Callback::from(move |id: String| {
        if let Some(nav) = &navigator {
            nav.push(&Route::Contract { id });
        }
    });

    let counts = filter.counts;
    let tiles = [
        (counts.all, "Total", "text-primary"),
        (counts.completed, "Completed", "text-success"),
        (counts.processing, "Processing", "text-primary"),
        (counts.pending, "Pending", "text-warning"),
        (counts.error, "Errors", "text-destructive"),
    ];

    let options: Vec<StatusFilter> = std::iter::once(StatusFilter::All)
        .chain([
            ContractStatus::Completed,
            ContractStatus::Processing,
            ContractStatus::Pending,
            ContractStatus::Error,
        ].map(StatusFilter::Only))
        .collect();

    html! {
        <Layout>
            <div class="contract-list">
                <div class="list-header">
                    <div>
                        <h1>{"Contract Management"}</h1>
                        <p class="muted">{"View and manage all your uploaded contracts"}</p>
                    </div>
                    <Link<Route> to={Route::Upload} classes="btn btn-primary glow-primary">
                        {"＋ Upload Contract"}
                    </Link<Route>>
                </div>

                <div class="status-tiles">
                    { for tiles.iter().map(|(count, label, class)| html! {
                        <div class="status-tile" key={*label}>
                            <div class={classes!("tile-value", *class)}>{*count}</div>
                            <div class="tile-label">{*label}</div>
                        </div>
                    })}
                </div>

                <div class="list-filters">
                    <div class="search-box">
                        <span class="icon">{"🔍"}</span>
                        <input
                            type="search"
                            placeholder="Search contracts by title or parties..."
                            value={filter.search.clone()}
                            oninput={filter.on_search.clone()}
                        />
                    </div>
                    <div class="status-select">
                        <span class="icon">{"⏷"}</span>
                        <select onchange={filter.on_status.clone()}>
                            { for options.iter().map(|option| html! {
                                <option
                                    value={option.as_str()}
                                    selected={*option == filter.status}
                                >
                                    {format!("{} ({})", status_option_label(*option), counts.for_filter(*option))}
                                </option>
                            })}
                        </select>
                    </div>
                </div>

                if filter.filtered.is_empty() {
                    <div class="empty-state">
                        <div class="muted">{empty_message(filter.is_filtering())}</div>
                        <Link<Route> to={Route::Upload} classes="btn btn-primary">
                            {"Upload Your First Contract"}
                        </Link<Route>>
                    </div>
                } else {
                    <div class="contract-grid">
                        { for filter.filtered.iter().enumerate().map(|(i, contract)| html! {
                            <ContractCard
                                key={contract.id.clone()}
                                contract={contract.clone()}
                                on_click={on_open.clone()}
                                class="animate-fade-in"
                                style={format!("animation-delay: {:.1}s", i as f64 * 0.1)}
                            />
                        })}
                    </div>
                }
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_depends_on_filters() {
        assert_eq!(empty_message(true), "No contracts match your search criteria");
        assert_eq!(empty_message(false), "No contracts uploaded yet");
    }

    #[test]
    fn option_labels_cover_every_filter() {
        assert_eq!(status_option_label(StatusFilter::All), "All Statuses");
        for status in ContractStatus::ALL {
            assert!(!status_option_label(StatusFilter::Only(status)).is_empty());
        }
    }
}
