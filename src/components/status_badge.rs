use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeConfig {
    pub label: &'static str,
    pub class: &'static str,
}

/// Tabla de estados. Sin entrada por defecto: un estado desconocido no tiene
/// configuración.
pub fn badge_config(status: &str) -> Option<BadgeConfig> {
    let (label, class) = match status {
        "pending" => ("Pending", "status-pending"),
        "processing" => ("Processing", "status-processing"),
        "completed" => ("Completed", "status-completed"),
        "error" => ("Error", "status-error"),
        _ => return None,
    };
    Some(BadgeConfig { label, class })
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBadgeProps {
    /// Estado en crudo (`ContractStatus::as_str()` o lo que venga)
    pub status: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Un estado desconocido se pinta como badge vacío sin clase de estado
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let config = badge_config(&props.status);
    if config.is_none() {
        log::warn!("⚠️ Estado sin badge: {}", props.status);
    }

    let classes = classes!(
        "status-badge",
        config.map(|c| c.class),
        props.class.clone(),
    );

    html! {
        <span class={classes} data-status={props.status.clone()}>
            {config.map(|c| c.label).unwrap_or_default()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContractStatus;

    #[test]
    fn every_status_has_a_badge() {
        for status in ContractStatus::ALL {
            let config = badge_config(status.as_str()).unwrap();
            assert_eq!(config.class, format!("status-{}", status.as_str()));
        }
        assert_eq!(badge_config("completed").unwrap().label, "Completed");
    }

    #[test]
    fn unknown_status_has_no_label() {
        assert_eq!(badge_config("archived"), None);
        assert_eq!(badge_config(""), None);
        assert_eq!(badge_config("Completed"), None);
    }
}
