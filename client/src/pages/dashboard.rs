//! Dashboard page: upload wizard plus the user's episode list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the voice catalog and
//! episodes on mount, then walks one document through upload → script review
//! → audio synthesis using the shared [`Wizard`]. Every request outcome is fed
//! back into the wizard, which owns the step rules and status messages.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use podcast::options::{self, MAX_TARGET_MINUTES, MIN_TARGET_MINUTES};
use podcast::{Wizard, WizardStep};

use crate::components::episode_item::EpisodeItem;
use crate::components::section_card::SectionCard;
use crate::state::auth::AuthState;
use crate::state::episodes::EpisodesState;
use crate::state::voices::VoicesState;

/// Browsers report an empty MIME type when they cannot guess one.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn normalize_mime(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Section ids of the current draft, in script order.
fn section_ids(wizard: &Wizard) -> Vec<i64> {
    wizard
        .script
        .as_ref()
        .map(|s| s.sections.iter().map(|sec| sec.id).collect())
        .unwrap_or_default()
}

/// Dashboard page. Redirects to `/login` when no token is stored.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    crate::util::auth::install_unauth_redirect(auth, use_navigate());

    let wizard = RwSignal::new(Wizard::default());
    let episodes = RwSignal::new(EpisodesState { loading: true, ..EpisodesState::default() });
    let voices = RwSignal::new(VoicesState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_voices().await;
        if let Err(e) = &result {
            log::warn!("voices fetch failed: {e}");
        }
        voices.update(|v| v.apply(result));
        refresh_episodes(episodes).await;
    });

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            let mime = file.type_();
            let accepted = wizard
                .try_update(|w| w.select_file(&file.name(), normalize_mime(&mime)))
                .unwrap_or(false);
            if !accepted {
                return;
            }
            leptos::task::spawn_local(async move {
                let result = crate::net::api::upload_file(&file).await;
                if let Err(e) = &result {
                    log::warn!("upload failed: {e}");
                }
                let Some(req) = wizard.try_update(|w| w.upload_finished(result)).flatten() else {
                    return;
                };
                let result = crate::net::api::generate_script(&req).await;
                if let Err(e) = &result {
                    log::warn!("script generation failed: {e}");
                }
                let (id, created_at) = crate::util::clock::draft_stamp();
                wizard.update(|w| w.script_finished(result, id, created_at));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_extract = move |_| {
        let Some(req) = wizard.with_untracked(Wizard::extract_request) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::extract_text(&req).await;
            if let Err(e) = &result {
                log::warn!("text extraction failed: {e}");
            }
            wizard.update(|w| w.extract_finished(result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
        }
    };

    let on_generate = move |_| {
        let Some(job) = wizard.try_update(Wizard::begin_synthesis).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::synthesize(&job).await.map(|_| ());
            if let Err(e) = &result {
                log::warn!("synthesis failed: {e}");
            }
            wizard.update(|w| w.synthesis_finished(result));
            refresh_episodes(episodes).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = job;
        }
    };

    let busy = move || wizard.with(Wizard::is_busy);

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.is_authenticated())
            fallback=move || {
                view! {
                    <main class="dashboard-page">
                        <p>{move || if auth.with(|a| a.loading) { "Cargando..." } else { "Redirigiendo al login..." }}</p>
                    </main>
                }
            }
        >
            <main class="dashboard-page">
                <h2>"Panel"</h2>
                <section class="dashboard-page__controls">
                    <label class="dashboard-page__field">
                        "Voz: "
                        <select
                            prop:value=move || wizard.with(|w| w.options.voice.clone().unwrap_or_default())
                            on:change=move |ev| {
                                let voice = event_target_value(&ev);
                                wizard.update(|w| w.options.set_voice(&voice));
                            }
                        >
                            <option value="">"Por defecto"</option>
                            {move || {
                                voices
                                    .get()
                                    .voices
                                    .into_iter()
                                    .map(|v| view! { <option value=v.clone()>{v.clone()}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="dashboard-page__field">
                        "Duración objetivo (min): "
                        <input
                            type="number"
                            min=MIN_TARGET_MINUTES.to_string()
                            max=MAX_TARGET_MINUTES.to_string()
                            prop:value=move || wizard.with(|w| w.options.target_minutes.to_string())
                            on:change=move |ev| {
                                let minutes = options::parse_minutes(&event_target_value(&ev));
                                wizard.update(|w| w.options.target_minutes = minutes);
                            }
                        />
                    </label>
                    <Show when=move || voices.with(|v| v.note.is_some())>
                        <p class="dashboard-page__note">{move || voices.with(|v| v.note.clone().unwrap_or_default())}</p>
                    </Show>

                    <div class="dashboard-page__panel">
                        <h3>"1) Subir archivo"</h3>
                        <input type="file" accept=options::ACCEPTED_UPLOAD disabled=busy on:change=on_file/>
                        <p class="dashboard-page__message">{move || wizard.with(|w| w.message.clone())}</p>
                        <Show when=move || wizard.with(|w| w.upload_id.is_some() && w.step != WizardStep::Idle)>
                            <button class="btn" disabled=busy on:click=on_extract>
                                "Ver texto extraído"
                            </button>
                        </Show>
                        <Show when=move || wizard.with(|w| w.extracted_text.is_some())>
                            <pre class="dashboard-page__extracted">
                                {move || wizard.with(|w| w.extracted_text.clone().unwrap_or_default())}
                            </pre>
                        </Show>
                    </div>

                    <Show when=move || wizard.with(Wizard::shows_script)>
                        <div class="dashboard-page__panel">
                            <h3>"2) Revisar y editar script por secciones"</h3>
                            <p>
                                <strong>"Título: "</strong>
                                {move || wizard.with(|w| w.script.as_ref().map(|s| s.title.clone()).unwrap_or_default())}
                            </p>
                            <p>
                                <strong>"Duración objetivo: "</strong>
                                {move || wizard.with(|w| w.script.as_ref().map_or(0, |s| s.target_minutes))}
                                " minutos"
                            </p>
                            <h4>"Secciones del Script:"</h4>
                            {move || {
                                wizard
                                    .with(section_ids)
                                    .into_iter()
                                    .map(|id| view! { <SectionCard section_id=id wizard=wizard/> })
                                    .collect::<Vec<_>>()
                            }}
                            <div class="dashboard-page__actions">
                                <button class="btn btn--primary" disabled=busy on:click=on_generate>
                                    "3) Generar audio"
                                </button>
                            </div>
                        </div>
                    </Show>
                </section>

                <h3 class="dashboard-page__episodes-title">"Tus episodios"</h3>
                <Show when=move || episodes.with(|e| e.error.is_some())>
                    <p class="dashboard-page__error">{move || episodes.with(|e| e.error.clone().unwrap_or_default())}</p>
                </Show>
                <Show
                    when=move || !episodes.with(|e| e.loading)
                    fallback=move || view! { <p>"Cargando episodios..."</p> }
                >
                    <ul class="dashboard-page__episodes">
                        {move || {
                            episodes
                                .get()
                                .items
                                .into_iter()
                                .map(|episode| view! { <EpisodeItem episode=episode/> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </main>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
async fn refresh_episodes(episodes: RwSignal<EpisodesState>) {
    episodes.update(|e| e.loading = true);
    let result = crate::net::api::fetch_episodes().await;
    if let Err(e) = &result {
        log::warn!("episode refresh failed: {e}");
    }
    episodes.update(|e| e.apply(result));
}
