//! Script section card with inline edit/save/cancel controls.
//!
//! DESIGN
//! ======
//! The card reads the section straight from the wizard signal by id, so a save
//! re-renders with the new content without the parent rebuilding the list.

use leptos::prelude::*;

use podcast::Wizard;

#[component]
pub fn SectionCard(section_id: i64, wizard: RwSignal<Wizard>) -> impl IntoView {
    let section = move || {
        wizard.with(|w| {
            w.script
                .as_ref()
                .and_then(|s| s.sections.iter().find(|sec| sec.id == section_id).cloned())
        })
    };
    let is_editing = move || wizard.with(|w| w.editing.as_ref().is_some_and(|e| e.section_id == section_id));
    let draft = move || {
        wizard.with(|w| w.editing.as_ref().map(|e| e.draft.clone()).unwrap_or_default())
    };
    let busy = move || wizard.with(Wizard::is_busy);

    view! {
        <div class="section-card">
            <h5 class="section-card__title">
                {move || section().map(|s| format!("{} ({} min)", s.title, s.estimated_duration)).unwrap_or_default()}
            </h5>
            <Show
                when=is_editing
                fallback=move || {
                    view! {
                        <div>
                            <p class="section-card__content">
                                {move || section().map(|s| s.content).unwrap_or_default()}
                            </p>
                            <button
                                class="btn"
                                disabled=busy
                                on:click=move |_| {
                                    wizard.update(|w| {
                                        w.start_edit(section_id);
                                    });
                                }
                            >
                                "Editar sección"
                            </button>
                        </div>
                    }
                }
            >
                <div>
                    <textarea
                        class="section-card__editor"
                        prop:value=draft
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            wizard.update(|w| w.set_draft(&text));
                        }
                    ></textarea>
                    <div class="section-card__actions">
                        <button
                            class="btn btn--primary"
                            on:click=move |_| {
                                wizard.update(|w| {
                                    w.save_edit();
                                });
                            }
                        >
                            "Guardar"
                        </button>
                        <button class="btn" on:click=move |_| wizard.update(Wizard::cancel_edit)>
                            "Cancelar"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
