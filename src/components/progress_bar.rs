use yew::prelude::*;

/// Etiqueta redondeada. El valor no se limita a 0-100.
pub fn percentage_label(progress: f64) -> String {
    // + 0.0 normaliza -0 a 0
    format!("{}%", progress.round() + 0.0)
}

pub fn fill_style(progress: f64) -> String {
    format!("width: {}%", progress)
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    pub progress: f64,
    #[prop_or(false)]
    pub show_percentage: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class={classes!("progress", props.class.clone())}>
            if props.show_percentage {
                <div class="progress-label">
                    <span>{"Processing"}</span>
                    <span>{percentage_label(props.progress)}</span>
                </div>
            }
            <div class="progress-bar">
                <div class="progress-fill" style={fill_style(props.progress)}>
                    <div class="progress-shine"></div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_rounds() {
        assert_eq!(percentage_label(65.0), "65%");
        assert_eq!(percentage_label(33.4), "33%");
        assert_eq!(percentage_label(99.5), "100%");
    }

    #[test]
    fn small_negatives_round_to_plain_zero() {
        assert_eq!(percentage_label(-0.4), "0%");
        assert_eq!(percentage_label(-0.0), "0%");
    }

    #[test]
    fn out_of_range_is_not_clamped() {
        assert_eq!(percentage_label(140.2), "140%");
        assert_eq!(fill_style(140.2), "width: 140.2%");
        assert_eq!(fill_style(-5.0), "width: -5%");
    }
}
