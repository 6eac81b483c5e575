//! Settings page

use leptos::prelude::*;

use crate::icon::{Icon, IconGlyph};
use crate::mock_data::{settings_sections, THEME_SETTING_ID};
use crate::models::{SettingItem, SettingKind, SettingsSection};
use crate::store::{store_set_dark_mode, use_app_store, AppStateStoreFields};
use crate::theme::{self, ThemeChoice};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let has_changes = RwSignal::new(false);

    let save = move |_| {
        tracing::info!("settings saved");
        has_changes.set(false);
    };

    view! {
        <div class="page-header sticky">
            <div>
                <h1>"Settings"</h1>
                <p class="muted">"Manage your account settings and preferences"</p>
            </div>
            <Show when=move || has_changes.get()>
                <button type="button" class="btn primary" on:click=save>
                    <IconGlyph icon=Icon::Save />
                    "Save Changes"
                </button>
            </Show>
        </div>

        <div class="settings-sections">
            {settings_sections()
                .into_iter()
                .map(|section| view! { <SettingsCard section=section has_changes=has_changes /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn SettingsCard(section: SettingsSection, has_changes: RwSignal<bool>) -> impl IntoView {
    view! {
        <section class="card settings-card" id=section.id>
            <div class="card-header">
                <IconGlyph icon=section.icon />
                <div>
                    <h2>{section.name}</h2>
                    <p class="muted">{section.description}</p>
                </div>
            </div>
            <div class="settings-items">
                {section
                    .items
                    .into_iter()
                    .map(|item| view! { <SettingRow item=item has_changes=has_changes /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SettingRow(item: SettingItem, has_changes: RwSignal<bool>) -> impl IntoView {
    let mark_changed = move || has_changes.set(true);
    let label = item.label;

    let control = match item.kind {
        SettingKind::Text { input_type, value, disabled } => view! {
            <input
                type=input_type
                value=value
                disabled=disabled
                on:input=move |_| mark_changed()
            />
        }
        .into_any(),
        SettingKind::Switch(on) => {
            let checked = RwSignal::new(on);
            view! {
                <button
                    type="button"
                    role="switch"
                    class="switch"
                    class:on=move || checked.get()
                    aria-checked=move || checked.get().to_string()
                    on:click=move |_| {
                        checked.update(|c| *c = !*c);
                        mark_changed();
                    }
                >
                    <span class="switch-knob"></span>
                </button>
            }
            .into_any()
        }
        SettingKind::Select { .. } if item.id == THEME_SETTING_ID => {
            view! { <ThemeSelect has_changes=has_changes /> }.into_any()
        }
        SettingKind::Select { options, value } => view! {
            <select on:change=move |_| mark_changed()>
                {options
                    .into_iter()
                    .map(|opt| {
                        let selected = value == Some(opt);
                        view! { <option value=opt selected=selected>{opt}</option> }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        SettingKind::Button(action) => view! {
            <button
                type="button"
                class="btn"
                on:click=move |_| {
                    tracing::info!(setting = label, "settings action");
                    mark_changed();
                }
            >
                {action}
            </button>
        }
        .into_any(),
    };

    view! {
        <div class="setting-row">
            <label>{label}</label>
            {control}
        </div>
    }
}

/// Theme select bound to the store's dark flag
#[component]
fn ThemeSelect(has_changes: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let choice = RwSignal::new(ThemeChoice::from_flag(store.dark_mode().get_untracked()));

    let on_change = move |ev: web_sys::Event| {
        let Some(picked) = ThemeChoice::from_value(&event_target_value(&ev)) else {
            tracing::warn!("unknown theme choice");
            return;
        };
        choice.set(picked);
        has_changes.set(true);
        store_set_dark_mode(&store, picked.resolve(theme::system_prefers_dark()));
    };

    view! {
        <select prop:value=move || choice.get().value() on:change=on_change>
            {ThemeChoice::ALL
                .into_iter()
                .map(|c| view! { <option value=c.value()>{c.label()}</option> })
                .collect_view()}
        </select>
    }
}
