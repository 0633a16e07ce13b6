//! Templates Modal Component
//!
//! Replaces the local board's columns with a starter layout.

use leptos::prelude::*;

use epitrello_core::templates::templates;

use crate::store::{store_set_columns, use_app_store};

#[component]
pub fn TemplatesModal(on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal templates-modal" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h3>"Start from a template"</h3>
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>"✕"</button>
                </header>
                <p class="modal-hint">"This replaces the columns of your local board."</p>
                <div class="template-list">
                    {templates().into_iter().map(|template| {
                        let columns = StoredValue::new(template.columns.clone());
                        view! {
                            <button
                                class="template-option"
                                on:click=move |_| {
                                    log::info!("[TEMPLATES] applying '{}'", template.key);
                                    store_set_columns(&store, columns.get_value());
                                    on_close.run(());
                                }
                            >
                                <span class="template-name">{template.name}</span>
                                <span class="template-description">{template.description}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
