//! Public landing page.

use leptos::prelude::*;

const STEPS: [(&str, &str, &str); 3] = [
    ("📚", "1. Subí tu PDF", "Sube los apuntes de tu clase en formato PDF"),
    ("🎯", "2. Personalizá", "Elegí la voz, duración y estilo que prefieras"),
    ("🎧", "3. Escuchá y estudiá", "Disfrutá tu podcast personalizado en cualquier momento"),
];

const FEATURES: [&str; 4] = [
    "🤖 IA para resumir contenido",
    "🎙️ Múltiples voces disponibles",
    "⏱️ Duración personalizable",
    "📱 Acceso desde cualquier dispositivo",
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <section class="home-page__hero">
                <h1>"🎧 StudyPodcast"</h1>
                <p class="home-page__lead">
                    "Convierte tus apuntes en podcasts para estudiar de forma más eficiente"
                </p>
                <p class="home-page__pitch">
                    "Subí tu PDF, elegí una voz y escuchá un resumen en minutos. Perfecto para repasar tus clases mientras caminás, viajás o hacés ejercicio."
                </p>
            </section>

            <section class="home-page__steps">
                {STEPS
                    .iter()
                    .map(|(icon, title, body)| {
                        view! {
                            <div class="home-page__step">
                                <div class="home-page__icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="home-page__cta">
                <h2>"¿Listo para empezar?"</h2>
                <div class="home-page__cta-links">
                    <a class="btn btn--primary" href="/register">"Crear Cuenta"</a>
                    <a class="btn btn--outline" href="/login">"Iniciar Sesión"</a>
                </div>
            </section>

            <section class="home-page__features">
                <h3>"✨ Características"</h3>
                <div class="home-page__feature-grid">
                    {FEATURES.iter().map(|f| view! { <div>{*f}</div> }).collect::<Vec<_>>()}
                </div>
            </section>
        </main>
    }
}
