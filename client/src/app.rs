use crate::api::fetch_search;
use crate::artwork_grid::ArtworkGrid;
use crate::header::Header;
use crate::location;
use crate::similarity_list::SimilarityList;
use data::{SearchForm, SearchResponse, SearchState};
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let restored = SearchForm::from_share_query(&location::current_search());
    let auto_search = restored.can_auto_search();

    let form = RwSignal::new(restored);
    let (state, set_state) = signal(SearchState::Idle);
    let (debug_url, set_debug_url) = signal(None::<String>);

    let perform_search = move || {
        let current = form.get_untracked();
        let request = match current.to_request() {
            Ok(request) => request,
            Err(err) => {
                set_state.set(SearchState::Failed(err.to_string()));
                return;
            }
        };

        set_debug_url.set(Some(current.resolved_url(&request)));
        location::replace_search(&current.share_query());
        // Old results go away before the new answer arrives.
        set_state.set(SearchState::Loading);

        let base_url = current.base_url();
        let path = request.path();
        log!("Search {} -> {}", request.mode(), path);
        spawn_local(async move {
            let next = match fetch_search(base_url, path).await {
                Ok(response) => SearchState::Success(response),
                Err(message) => SearchState::Failed(message),
            };
            set_state.set(next);
        });
    };

    if auto_search {
        perform_search();
    }

    let loading = Signal::derive(move || state.with(SearchState::is_loading));

    view! {
        <div style="display: flex; flex-direction: column; min-height: 100vh; background-color: #161618; color: #eee;">
            <Header form=form on_submit=perform_search loading=loading />
            <main style="flex: 1; padding: 1rem;">
                <Show when=move || debug_url.with(Option::is_some) fallback=|| ()>
                    <p style="font-family: monospace; font-size: 0.8rem; color: #9a9aa8; word-break: break-all;">
                        "GET " {move || debug_url.get().unwrap_or_default()}
                    </p>
                </Show>
                {move || match state.get() {
                    SearchState::Idle => ().into_any(),
                    SearchState::Loading => view! { <p>"Searching..."</p> }.into_any(),
                    SearchState::Failed(message) => view! {
                        <p style="padding: 0.75rem; border-radius: 4px; background-color: #5c1f24; color: #ffd7d9;">
                            {message}
                        </p>
                    }
                    .into_any(),
                    SearchState::Success(SearchResponse::Items(page)) => {
                        view! { <ArtworkGrid page=page /> }.into_any()
                    }
                    SearchState::Success(SearchResponse::Scores(page)) => {
                        view! { <SimilarityList scores=page.similarity_scores /> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}
