//! Post List Component
//!
//! Card grid of posts with author names, the `?userId=` filter and
//! compact pagination.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{Gateway, HttpGateway};
use crate::components::{DeleteConfirmButton, ErrorBanner, PaginationBar, PostForm};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::{fetch_posts_and_authors, PostController};
use crate::models::Post;
use crate::routing::Route;

#[component]
pub fn PostList() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let gateway = expect_context::<HttpGateway>();
    let config = expect_context::<AppConfig>();
    let store = Store::new(PostController::new(
        config.posts_per_page,
        ctx.route.get_untracked().user_filter(),
    ));

    // Users and posts together on mount
    let load_gateway = gateway.clone();
    Effect::new(move |_| {
        let gateway = load_gateway.clone();
        store.update(|c| c.begin_load());
        spawn_local(async move {
            let result = fetch_posts_and_authors(&gateway, &gateway).await;
            store.try_update(|c| c.finish_load(result));
        });
    });

    // Follow the URL filter without refetching
    Effect::new(move |_| {
        let filter = ctx.route.get().user_filter();
        store.update(|c| c.set_filter(filter));
    });

    let submit_gateway = gateway.clone();
    let on_submit = Callback::new(move |()| {
        let Some(submission) = store.with_untracked(|c| c.begin_submit()) else {
            return;
        };
        let gateway = submit_gateway.clone();
        spawn_local(async move {
            let result = submission.send(&gateway).await;
            store.try_update(|c| c.finish_submit(submission, result));
        });
    });

    let on_delete = Callback::new(move |id: u32| {
        let gateway = gateway.clone();
        spawn_local(async move {
            let result = Gateway::<Post>::delete(&gateway, id).await;
            store.try_update(|c| c.list.finish_delete(id, result));
        });
    });

    let on_select = Callback::new(move |page: usize| scroll_up_if(store.try_update(|c| c.go_to_page(page))));
    let on_previous = Callback::new(move |()| scroll_up_if(store.try_update(|c| c.previous_page())));
    let on_next = Callback::new(move |()| scroll_up_if(store.try_update(|c| c.next_page())));

    let is_loading = move || store.with(|c| c.list.is_loading());
    let filtered_author = move || store.with(|c| c.filter.map(|id| c.author_name(id)));

    view! {
        <div class="post-list">
            <Show
                when=move || !is_loading()
                fallback=|| view! { <div class="loading">"Loading posts..."</div> }
            >
                <div class="page-container">
                    <div class="page-header">
                        <div class="page-title-section">
                            <h1 class="page-title">
                                <i class="fi fi-rr-document"></i>
                                {move || store.with(|c| c.heading())}
                            </h1>
                            {move || filtered_author().map(|name| view! {
                                <div class="filter-info">
                                    <span class="filter-text">"Showing posts by: "<strong>{name}</strong></span>
                                    <button
                                        class="clear-filter-btn"
                                        on:click=move |_| {
                                            store.update(|c| c.clear_filter());
                                            ctx.replace(Route::Posts { user_id: None });
                                        }
                                    >
                                        <i class="fi fi-rr-cross-small"></i>
                                        "Show All Posts"
                                    </button>
                                </div>
                            })}
                        </div>
                        <div class="page-actions">
                            <button class="add-post-btn" on:click=move |_| store.update(|c| c.open_create())>
                                <i class="fi fi-rr-plus"></i>
                                "Create Post"
                            </button>
                        </div>
                    </div>

                    <ErrorBanner
                        message=Signal::derive(move || store.with(|c| c.list.error.clone()))
                        on_dismiss=move |()| store.update(|c| c.list.dismiss_error())
                    />

                    <Show when=move || store.with(|c| c.list.form.is_open())>
                        <PostForm store=store on_submit=on_submit />
                    </Show>

                    <Show
                        when=move || store.with(|c| c.filtered_len() > 0)
                        fallback=move || view! {
                            <div class="empty-state">
                                <i class="fi fi-rr-document-signed"></i>
                                <h3>"No Posts Found"</h3>
                                <p>{move || store.with(|c| c.empty_message())}</p>
                            </div>
                        }
                    >
                        <div class="posts-grid">
                            <For
                                each=move || store.with(|c| c.visible())
                                key=|post| (post.id, post.user_id, post.title.clone(), post.body.clone())
                                children=move |post| {
                                    let id = post.id;
                                    let author = store.with_untracked(|c| c.author_name(post.user_id));
                                    view! {
                                        <div class="post-card">
                                            <div class="post-header">
                                                <span class="post-id-badge">"#"{id}</span>
                                                <span class="post-author">
                                                    <i class="fi fi-rr-user"></i>
                                                    {author}
                                                </span>
                                            </div>
                                            <h3 class="post-title">{post.title}</h3>
                                            <p class="post-body">{post.body.unwrap_or_default()}</p>
                                            <div class="post-actions">
                                                <button
                                                    class="action-btn edit-btn"
                                                    title="Edit Post"
                                                    on:click=move |_| store.update(|c| c.list.open_edit(id))
                                                >
                                                    <i class="fi fi-rr-edit"></i>
                                                    <span>"Edit"</span>
                                                </button>
                                                <DeleteConfirmButton
                                                    title="Delete Post"
                                                    on_confirm=move |()| on_delete.run(id)
                                                />
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>

                        <PaginationBar
                            markers=Signal::derive(move || store.with(|c| c.page_markers()))
                            current=Signal::derive(move || store.with(|c| c.list.pager.current()))
                            total=Signal::derive(move || store.with(|c| c.total_pages()))
                            on_select=on_select
                            on_previous=on_previous
                            on_next=on_next
                        />
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Back to the top of the grid after a page change
fn scroll_up_if(turned: Option<bool>) {
    if turned == Some(true) {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }
}
