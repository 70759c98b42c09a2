use yew::prelude::*;

use crate::components::{ProgressBar, StatusBadge};
use crate::models::Contract;
use crate::utils::{confidence_class, format_date};

#[derive(Properties, PartialEq, Clone)]
pub struct ContractCardProps {
    pub contract: Contract,
    #[prop_or_default]
    pub on_click: Option<Callback<String>>, // recibe el id del contrato
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>, // animation-delay en la lista
}

#[function_component(ContractCard)]
pub fn contract_card(props: &ContractCardProps) -> Html {
    let c = &props.contract;

    let card_classes = classes!(
        "contract-card",
        "card-hover",
        "gradient-card",
        props.on_click.is_some().then_some("clickable"),
        props.class.clone(),
    );

    let on_card_click = {
        let cb = props.on_click.clone();
        let id = c.id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(cb) = &cb { cb.emit(id.clone()); }
        })
    };

    html! {
        <div class={card_classes} onclick={on_card_click} style={props.style.clone()} data-id={c.id.clone()}>
            <div class="card-header">
                <div class="card-title-row">
                    <span class="icon">{"📄"}</span>
                    <h3 class="card-title">{c.title.clone()}</h3>
                </div>
                <StatusBadge status={c.status.as_str()} />
            </div>

            <div class="card-content">
                if let Some(progress) = c.visible_progress() {
                    <ProgressBar progress={progress} show_percentage=true />
                }

                <div class="card-facts">
                    <div class="card-fact">
                        <span class="icon">{"👥"}</span>
                        <span>{c.parties.join(", ")}</span>
                    </div>
                    <div class="card-fact">
                        <span class="icon">{"📅"}</span>
                        <span>{format_date(c.upload_date)}</span>
                    </div>
                    if let Some(value) = &c.financial_value {
                        <div class="card-fact">
                            <span class="icon">{"💲"}</span>
                            <span>{value.clone()}</span>
                        </div>
                    }
                </div>

                if let Some(score) = c.confidence_score {
                    <div class="card-confidence">
                        <span class="muted">{"Confidence"}</span>
                        <span class={classes!("confidence-value", confidence_class(score))}>
                            {format!("{}%", score)}
                        </span>
                    </div>
                }
            </div>
        </div>
    }
}
