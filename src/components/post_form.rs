//! Post Form Component
//!
//! Create/edit overlay for a post with an author select.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::{PostController, PostControllerStoreFields};

#[component]
pub fn PostForm(
    store: Store<PostController>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let draft = Memo::new(move |_| store.with(|c| c.list.form.draft().cloned()).unwrap_or_default());
    let editing = Memo::new(move |_| store.with(|c| c.list.form.editing_id().is_some()));

    view! {
        <div class="form-overlay">
            <div class="form-container">
                <h2>{move || if editing.get() { "Edit Post" } else { "Add New Post" }}</h2>
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }>
                    <div class="form-group">
                        <label class="form-label" for="userId">"Author"</label>
                        <select
                            class="form-input"
                            id="userId"
                            required
                            prop:value=move || draft.get().user_id.to_string()
                            on:change=move |ev| {
                                // Options are rendered from numeric ids
                                if let Ok(user_id) = event_target_value(&ev).parse::<u32>() {
                                    store.update(|c| c.list.edit_draft(|d| d.user_id = user_id));
                                }
                            }
                        >
                            <For
                                each=move || store.authors().get()
                                key=|user| user.id
                                children=move |user| {
                                    let id = user.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || draft.get().user_id == id
                                        >
                                            {format!("{} ({})", user.name, user.username)}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="title">"Title"</label>
                        <input
                            class="form-input"
                            type="text"
                            id="title"
                            required
                            placeholder="Enter post title"
                            prop:value=move || draft.get().title
                            on:input=move |ev| {
                                let title = event_target_value(&ev);
                                store.update(|c| c.list.edit_draft(|d| d.title = title));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label class="form-label" for="body">"Content"</label>
                        <textarea
                            class="form-input form-textarea"
                            id="body"
                            rows="6"
                            placeholder="Write the post content"
                            prop:value=move || draft.get().body_text().to_string()
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                store.update(|c| c.list.edit_draft(|d| d.set_body_text(text)));
                            }
                        ></textarea>
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-success">
                            <i class="fi fi-rr-check"></i>
                            {move || if editing.get() { "Update Post" } else { "Create Post" }}
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
