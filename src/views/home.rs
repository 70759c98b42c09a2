use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Layout;
use crate::router::Route;

const FEATURES: [(&str, &str, &str); 4] = [
    ("⬆️", "Smart Upload", "Drag and drop PDF contracts for instant processing"),
    ("📊", "AI Analysis", "Extract key terms, parties, and financial details automatically"),
    ("🛡️", "Risk Assessment", "Identify potential risks and compliance issues"),
    ("⚡", "Fast Processing", "Get results in seconds with high confidence scores"),
];

const STATS: [(&str, &str); 4] = [
    ("10K+", "Contracts Processed"),
    ("95%", "Accuracy Rate"),
    ("3s", "Average Processing Time"),
    ("24/7", "Uptime"),
];

fn delay_style(index: usize) -> String {
    format!("animation-delay: {:.1}s", 0.1 * index as f64)
}

#[function_component(HomeView)]
pub fn home_view() -> Html {
    html! {
        <Layout>
            <div class="home">
                <section class="hero">
                    <h1 class="hero-title animate-fade-in">{"Contract Intelligence"}</h1>
                    <h2 class="hero-subtitle animate-fade-in" style={delay_style(1)}>
                        {"Powered by Synchrone AI"}
                    </h2>
                    <p class="hero-lead animate-fade-in" style={delay_style(2)}>
                        {"Transform your contract analysis with AI-powered intelligence. Upload, analyze, and extract critical information from contracts in seconds."}
                    </p>
                    <div class="hero-actions animate-fade-in" style={delay_style(3)}>
                        <Link<Route> to={Route::Upload} classes="btn btn-primary btn-lg glow-primary">
                            {"⬆️ Upload Contract"}
                        </Link<Route>>
                        <Link<Route> to={Route::Contracts} classes="btn btn-outline btn-lg">
                            {"📄 View Contracts"}
                        </Link<Route>>
                    </div>
                </section>

                <section class="stats-grid">
                    { for STATS.iter().enumerate().map(|(i, (value, label))| html! {
                        <div class="stat-card gradient-card animate-scale-in" key={*label} style={delay_style(i)}>
                            <div class="stat-value">{*value}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    })}
                </section>

                <section class="features">
                    <div class="section-heading">
                        <h3>{"Powerful Features"}</h3>
                        <p class="muted">
                            {"Advanced AI capabilities designed to streamline your contract management workflow"}
                        </p>
                    </div>
                    <div class="features-grid">
                        { for FEATURES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <div class="feature-card card-hover gradient-card animate-slide-up" key={*title} style={delay_style(i)}>
                                <div class="feature-icon">{*icon}</div>
                                <h4>{*title}</h4>
                                <p class="muted">{*description}</p>
                            </div>
                        })}
                    </div>
                </section>

                <section class="cta">
                    <div class="cta-heading">
                        <span class="icon">{"👥"}</span>
                        <span>{"Ready to get started?"}</span>
                    </div>
                    <p class="muted">
                        {"Upload your first contract and experience the power of AI-driven contract analysis"}
                    </p>
                    <Link<Route> to={Route::Upload} classes="btn btn-primary btn-lg glow-primary animate-pulse-glow">
                        {"Start Analyzing Contracts"}
                    </Link<Route>>
                </section>
            </div>
        </Layout>
    }
}
