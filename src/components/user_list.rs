//! User List Component
//!
//! Paginated user table with create/edit/delete and a shortcut to the
//! user's posts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{Gateway, HttpGateway};
use crate::components::{DeleteConfirmButton, ErrorBanner, PaginationBar, UserForm};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::UserController;
use crate::models::User;
use crate::routing::Route;

#[component]
pub fn UserList() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let gateway = expect_context::<HttpGateway>();
    let config = expect_context::<AppConfig>();
    let store = Store::new(UserController::new(config.users_per_page));

    // Load users on mount
    let load_gateway = gateway.clone();
    Effect::new(move |_| {
        let gateway = load_gateway.clone();
        store.update(|c| c.list.begin_load());
        spawn_local(async move {
            let result = Gateway::<User>::list(&gateway).await;
            store.try_update(|c| c.list.finish_load(result));
        });
    });

    let submit_gateway = gateway.clone();
    let on_submit = Callback::new(move |()| {
        let Some(submission) = store.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };
        let gateway = submit_gateway.clone();
        spawn_local(async move {
            let result = submission.send(&gateway).await;
            store.try_update(|c| c.list.finish_submit(submission, result));
        });
    });

    let on_delete = Callback::new(move |id: u32| {
        let gateway = gateway.clone();
        spawn_local(async move {
            let result = Gateway::<User>::delete(&gateway, id).await;
            store.try_update(|c| c.list.finish_delete(id, result));
        });
    });

    let is_loading = move || store.with(|c| c.list.is_loading());
    let is_empty = move || store.with(|c| c.list.items.is_empty());

    view! {
        <div class="user-list">
            <Show
                when=move || !is_loading()
                fallback=|| view! { <div class="loading">"Loading users..."</div> }
            >
                <div class="page-container">
                    <div class="page-header">
                        <div class="page-title-section">
                            <h1 class="page-title">
                                <i class="fi fi-rr-users"></i>
                                {move || store.with(|c| c.heading())}
                            </h1>
                        </div>
                        <div class="page-actions">
                            <button class="add-user-btn" on:click=move |_| store.update(|c| c.open_create())>
                                <i class="fi fi-rr-plus"></i>
                                "Create User"
                            </button>
                        </div>
                    </div>

                    <ErrorBanner
                        message=Signal::derive(move || store.with(|c| c.list.error.clone()))
                        on_dismiss=move |()| store.update(|c| c.list.dismiss_error())
                    />

                    <Show when=move || store.with(|c| c.list.form.is_open())>
                        <UserForm store=store on_submit=on_submit />
                    </Show>

                    <Show
                        when=move || !is_empty()
                        fallback=|| view! {
                            <div class="empty-state">
                                <i class="fi fi-rr-user-add"></i>
                                <h3>"No Users Found"</h3>
                                <p>"Add your first user to get started!"</p>
                            </div>
                        }
                    >
                        <div class="table-container">
                            <div class="table-header">
                                <h2 class="table-title">"Users"</h2>
                            </div>
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Name"</th>
                                        <th>"Username"</th>
                                        <th>"Email"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || store.with(|c| c.visible().to_vec())
                                        key=|user| (user.id, user.name.clone(), user.username.clone(), user.email.clone())
                                        children=move |user| {
                                            let id = user.id;
                                            view! {
                                                <tr>
                                                    <td><span class="user-id-badge">{id}</span></td>
                                                    <td><div class="user-name">{user.name}</div></td>
                                                    <td><div class="user-username">"@"{user.username}</div></td>
                                                    <td><div class="user-email">{user.email}</div></td>
                                                    <td>
                                                        <div class="user-actions">
                                                            <button
                                                                class="action-btn view-posts-btn"
                                                                title="View Posts"
                                                                on:click=move |_| ctx.navigate(Route::Posts { user_id: Some(id) })
                                                            >
                                                                <i class="fi fi-rr-document"></i>
                                                                <span>"View Posts"</span>
                                                            </button>
                                                            <button
                                                                class="action-btn edit-btn"
                                                                title="Edit User"
                                                                on:click=move |_| store.update(|c| c.list.open_edit(id))
                                                            >
                                                                <i class="fi fi-rr-edit"></i>
                                                                <span>"Edit"</span>
                                                            </button>
                                                            <DeleteConfirmButton
                                                                title="Delete User"
                                                                on_confirm=move |()| on_delete.run(id)
                                                            />
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>

                            <PaginationBar
                                markers=Signal::derive(move || store.with(|c| c.page_markers()))
                                current=Signal::derive(move || store.with(|c| c.list.pager.current()))
                                total=Signal::derive(move || store.with(|c| c.total_pages()))
                                on_select=move |page: usize| store.update(|c| {
                                    c.go_to_page(page);
                                })
                                on_previous=move |()| store.update(|c| {
                                    c.previous_page();
                                })
                                on_next=move |()| store.update(|c| {
                                    c.next_page();
                                })
                            />
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
