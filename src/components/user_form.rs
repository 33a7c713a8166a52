//! User Form Component
//!
//! Create/edit overlay for a user. Field values live in the controller
//! draft so a failed save keeps what was typed.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::UserController;

#[component]
pub fn UserForm(
    store: Store<UserController>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let draft = Memo::new(move |_| store.with(|c| c.list.form.draft().cloned()).unwrap_or_default());
    let editing = Memo::new(move |_| store.with(|c| c.list.form.editing_id().is_some()));

    view! {
        <div class="form-overlay">
            <div class="form-container">
                <h2>{move || if editing.get() { "Edit User" } else { "Add New User" }}</h2>
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }>
                    <div class="form-group">
                        <label class="form-label" for="name">"Full Name"</label>
                        <input
                            class="form-input"
                            type="text"
                            id="name"
                            required
                            placeholder="Enter full name"
                            prop:value=move || draft.get().name
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store.update(|c| c.list.edit_draft(|d| d.name = value));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="username">"Username"</label>
                        <input
                            class="form-input"
                            type="text"
                            id="username"
                            required
                            placeholder="Enter username"
                            prop:value=move || draft.get().username
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store.update(|c| c.list.edit_draft(|d| d.username = value));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="email">"Email Address"</label>
                        <input
                            class="form-input"
                            type="email"
                            id="email"
                            required
                            placeholder="Enter email address"
                            prop:value=move || draft.get().email
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store.update(|c| c.list.edit_draft(|d| d.email = value));
                            }
                        />
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-success">
                            <i class="fi fi-rr-check"></i>
                            {move || if editing.get() { "Update User" } else { "Create User" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| store.update(|c| c.list.cancel_form())
                        >
                            <i class="fi fi-rr-cross"></i>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
