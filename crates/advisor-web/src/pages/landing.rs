//! Landing Page

use leptos::prelude::*;

const CTA_MESSAGE: &str =
    "Thank you for your interest! This would connect to the Moneyminder app in production.";

/// Show the static call-to-action notice; nothing is sent anywhere
fn show_cta_message() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(CTA_MESSAGE);
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <nav class="navbar">
                <span class="logo">"Moneyminder"</span>
                <ul class="nav-links">
                    <li><a href="#features">"Features"</a></li>
                    <li><a href="#how-it-works">"How it works"</a></li>
                    <li><a href="#get-started">"Get started"</a></li>
                </ul>
            </nav>

            <header class="hero">
                <div class="hero-content">
                    <h1>"Your AI finance copilot"</h1>
                    <p class="tagline">
                        "Split your income, see where your savings stand, and get investment ideas that match your risk appetite."
                    </p>
                    <div class="cta">
                        <a href="/advisor" class="btn btn-primary">"Try the Advisor"</a>
                        <button class="btn cta-button" on:click=move |_| show_cta_message()>
                            "Sign Up"
                        </button>
                    </div>
                </div>
            </header>

            <section id="features" class="features">
                <div class="feature-card">
                    <h3>"📊 Budget breakdown"</h3>
                    <p>"Apply the 50/30/20 rule to your monthly income in one click."</p>
                </div>
                <div class="feature-card">
                    <h3>"📈 Investment ideas"</h3>
                    <p>"Three suggestions for your risk tier, with yields and risk scores."</p>
                </div>
                <div class="feature-card">
                    <h3>"💡 Pro tips"</h3>
                    <p>"Practical advice based on how much of your income you keep."</p>
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2>"How it works"</h2>
                <ol>
                    <li>"Enter your monthly income and expenses."</li>
                    <li>"Pick a risk tolerance: Low, Medium or Bro Danger."</li>
                    <li>"Review your report, investment cards and charts."</li>
                </ol>
            </section>

            <section id="get-started" class="get-started">
                <h2>"Ready to take control of your money?"</h2>
                <button class="btn btn-primary cta-button" on:click=move |_| show_cta_message()>
                    "Get Started"
                </button>
            </section>
        </div>
    }
}
