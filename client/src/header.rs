use data::{SearchForm, SearchMode, DEFAULT_API_URL};
use leptos::prelude::*;

const INPUT_STYLE: &str = "
    padding: 0.3rem;
    font-size: 1rem;
    border-radius: 4px;
    border: none;
";

#[component]
pub fn Header(
    form: RwSignal<SearchForm>,
    on_submit: impl Fn() + Send + Sync + 'static + Copy,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let submit = move || {
        if !loading.get_untracked() {
            on_submit();
        }
    };
    let on_key_down = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    };

    let mode_inputs = move || match form.with(SearchForm::selected_mode) {
        SearchMode::Semantic => view! {
            <input
                type="search"
                placeholder="Describe an artwork..."
                prop:value=move || form.with(|f| f.query.clone())
                on:input=move |ev| form.update(|f| f.query = event_target_value(&ev))
                on:keydown=on_key_down
                style=format!("{INPUT_STYLE} width: 360px;")
            />
        }
        .into_any(),
        SearchMode::NearestNeighbor => view! {
            <input
                type="text"
                placeholder="Artwork ID"
                prop:value=move || form.with(|f| f.id.clone())
                on:input=move |ev| form.update(|f| f.id = event_target_value(&ev))
                on:keydown=on_key_down
                style=INPUT_STYLE
            />
        }
        .into_any(),
        SearchMode::Similarity => view! {
            <input
                type="text"
                placeholder="First artwork ID"
                prop:value=move || form.with(|f| f.id.clone())
                on:input=move |ev| form.update(|f| f.id = event_target_value(&ev))
                on:keydown=on_key_down
                style=INPUT_STYLE
            />
            <input
                type="text"
                placeholder="Second artwork ID"
                prop:value=move || form.with(|f| f.compare_id.clone())
                on:input=move |ev| form.update(|f| f.compare_id = event_target_value(&ev))
                on:keydown=on_key_down
                style=INPUT_STYLE
            />
        }
        .into_any(),
    };

    view! {
        <header style="
            background-color: #646472;
            color: white;
            padding: 0.5rem 1rem;
            display: flex;
            flex-wrap: wrap;
            align-items: center;
            gap: 0.75rem;
            font-size: 18px;
        ">
            <h1 style="font-size: 1.3rem; margin: 0 1rem 0 0;">"Artwork Search"</h1>
            <select
                prop:value=move || form.with(|f| f.mode.clone())
                on:change=move |ev| form.update(|f| f.mode = event_target_value(&ev))
                style=INPUT_STYLE
            >
                {SearchMode::ALL
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <option
                                value=mode.as_str()
                                selected=move || form.with(|f| f.selected_mode() == mode)
                            >
                                {mode.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {mode_inputs}
            <input
                type="url"
                placeholder=DEFAULT_API_URL
                prop:value=move || form.with(|f| f.api_url.clone())
                on:input=move |ev| form.update(|f| f.api_url = event_target_value(&ev))
                style=format!("{INPUT_STYLE} width: 260px;")
            />
            <button
                on:click=move |_| submit()
                disabled=move || loading.get()
                style="
                    padding: 0.3rem 0.75rem;
                    font-size: 1rem;
                    border-radius: 4px;
                    border: none;
                    background-color: #4caf50;
                    color: white;
                    cursor: pointer;
                "
            >
                {move || if loading.get() { "Searching..." } else { "Search" }}
            </button>
        </header>
    }
}
