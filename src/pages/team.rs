//! Team page

use leptos::prelude::*;

use crate::icon::{Icon, IconGlyph};
use crate::mock_data;
use crate::models::Presence;

#[component]
pub fn TeamPage() -> impl IntoView {
    let team = mock_data::team();

    view! {
        <div class="page-header">
            <div>
                <h1>"Team Members"</h1>
                <p class="muted">"Manage your team and their roles in document processing"</p>
            </div>
            <button type="button" class="btn primary" on:click=|_| tracing::info!("add member requested")>
                <IconGlyph icon=Icon::Plus />
                "Add Member"
            </button>
        </div>

        <div class="card-grid">
            {team
                .into_iter()
                .map(|person| {
                    let presence = match person.presence {
                        Presence::Active => "presence active",
                        Presence::Away => "presence away",
                    };
                    view! {
                        <div class="card member-card">
                            <img class="avatar" src=person.image_url alt=person.name />
                            <div class="member-info">
                                <p class="row-title">{person.name}</p>
                                <p class="muted">{person.role}</p>
                                <p class="small">
                                    <IconGlyph icon=Icon::Mail />
                                    {person.email}
                                </p>
                                <p class="small">
                                    <IconGlyph icon=Icon::Phone />
                                    {person.phone}
                                </p>
                            </div>
                            <span class=presence></span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
