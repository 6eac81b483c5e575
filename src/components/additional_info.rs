//! Additional Project Info Form
//!
//! Second step of the upload flow. Edits the shared `AdditionalInfo` in place.

use leptos::prelude::*;

use crate::models::AdditionalInfo;

#[component]
pub fn AdditionalInfoForm(info: RwSignal<AdditionalInfo>) -> impl IntoView {
    view! {
        <section class="card additional-info">
            <h3>"Additional Information"</h3>
            <label class="field">
                <span>"Project Name"</span>
                <input
                    type="text"
                    prop:value=move || info.with(|i| i.project_name.clone())
                    on:input=move |ev| info.update(|i| i.project_name = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Project Description"</span>
                <textarea
                    rows="3"
                    prop:value=move || info.with(|i| i.project_description.clone())
                    on:input=move |ev| info.update(|i| i.project_description = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field">
                <span>"Expected Delivery Date"</span>
                <input
                    type="date"
                    prop:value=move || info.with(|i| i.expected_delivery_date.clone())
                    on:input=move |ev| info.update(|i| i.expected_delivery_date = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Budget"</span>
                <input
                    type="text"
                    placeholder="e.g., $50,000"
                    prop:value=move || info.with(|i| i.budget.clone())
                    on:input=move |ev| info.update(|i| i.budget = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Additional Instructions"</span>
                <textarea
                    rows="4"
                    placeholder="Any specific requirements or instructions..."
                    prop:value=move || info.with(|i| i.additional_instructions.clone())
                    on:input=move |ev| info.update(|i| i.additional_instructions = event_target_value(&ev))
                ></textarea>
            </label>
        </section>
    }
}
