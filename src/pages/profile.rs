//! Profile page

use leptos::prelude::*;

use crate::icon::{Icon, IconGlyph};
use crate::mock_data::user_profile;
use crate::models::UserProfile;

/// Editable profile fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileField {
    Email,
    Phone,
    Company,
    Location,
    Position,
}

impl ProfileField {
    const ALL: [ProfileField; 5] = [
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Company,
        ProfileField::Location,
        ProfileField::Position,
    ];

    fn label(self) -> &'static str {
        match self {
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Company => "Company",
            ProfileField::Location => "Location",
            ProfileField::Position => "Position",
        }
    }

    fn icon(self) -> Icon {
        match self {
            ProfileField::Email => Icon::Mail,
            ProfileField::Phone => Icon::Phone,
            ProfileField::Company => Icon::Building,
            ProfileField::Location => Icon::MapPin,
            ProfileField::Position => Icon::Briefcase,
        }
    }

    fn get(self, profile: &UserProfile) -> &str {
        match self {
            ProfileField::Email => &profile.email,
            ProfileField::Phone => &profile.phone,
            ProfileField::Company => &profile.company,
            ProfileField::Location => &profile.location,
            ProfileField::Position => &profile.position,
        }
    }

    fn set(self, profile: &mut UserProfile, value: String) {
        let slot = match self {
            ProfileField::Email => &mut profile.email,
            ProfileField::Phone => &mut profile.phone,
            ProfileField::Company => &mut profile.company,
            ProfileField::Location => &mut profile.location,
            ProfileField::Position => &mut profile.position,
        };
        *slot = value;
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = RwSignal::new(user_profile());
    // Working copy while editing; committed on save
    let draft = RwSignal::new(user_profile());
    let editing = RwSignal::new(false);

    let on_primary = move |_| {
        if editing.get_untracked() {
            profile.set(draft.get_untracked());
            editing.set(false);
            tracing::info!("profile saved");
        } else {
            draft.set(profile.get_untracked());
            editing.set(true);
        }
    };

    view! {
        <section class="card">
            <div class="card-header spread">
                <div>
                    <h2>"Profile Information"</h2>
                    <p class="muted">"Personal details and application settings."</p>
                </div>
                <button type="button" class="btn primary" on:click=on_primary>
                    <Show when=move || editing.get() fallback=|| "Edit Profile">
                        <IconGlyph icon=Icon::Save />
                        "Save Changes"
                    </Show>
                </button>
            </div>

            <div class="profile-head">
                <img
                    class="avatar large"
                    src=move || profile.with(|p| p.avatar.clone())
                    alt=move || profile.with(|p| p.name.clone())
                />
                <div>
                    <h3>{move || profile.with(|p| p.name.clone())}</h3>
                    <p class="muted">{move || profile.with(|p| p.position.clone())}</p>
                </div>
            </div>

            <dl class="profile-grid">
                {ProfileField::ALL
                    .into_iter()
                    .map(|field| view! {
                        <div class="profile-field">
                            <dt>
                                <IconGlyph icon=field.icon() />
                                {field.label()}
                            </dt>
                            <Show
                                when=move || editing.get()
                                fallback=move || view! {
                                    <dd>{move || profile.with(|p| field.get(p).to_string())}</dd>
                                }
                            >
                                <input
                                    type="text"
                                    prop:value=move || draft.with(|p| field.get(p).to_string())
                                    on:input=move |ev| draft.update(|p| field.set(p, event_target_value(&ev)))
                                />
                            </Show>
                        </div>
                    })
                    .collect_view()}
            </dl>
        </section>

        <section class="card">
            <h2>"Recent Activity"</h2>
            <p class="muted">"No recent activity to display."</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessors() {
        let mut profile = user_profile();
        ProfileField::Location.set(&mut profile, "Austin, TX".to_string());
        assert_eq!(ProfileField::Location.get(&profile), "Austin, TX");
        assert_eq!(ProfileField::Email.get(&profile), "john.doe@company.com");
        assert_eq!(profile.name, "John Doe");
    }
}
