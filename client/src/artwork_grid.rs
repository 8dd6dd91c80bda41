use crate::artwork_card::ArtworkCard;
use data::ItemsPage;
use leptos::control_flow::For;
use leptos::prelude::*;

#[component]
pub fn ArtworkGrid(page: ItemsPage) -> impl IntoView {
    let summary = match (page.count, page.total) {
        (Some(count), Some(total)) => format!("Showing {count} of {total}"),
        (Some(count), None) => format!("{count} results"),
        (None, Some(total)) => format!("{total} total"),
        (None, None) => format!("{} results", page.items.len()),
    };

    if page.items.is_empty() {
        return view! { <p>"No results"</p> }.into_any();
    }
    let items = page.keyed_items();

    view! {
        <p style="color: #9a9aa8;">{summary}</p>
        <div style="
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
            gap: 1rem;
            "
        >
            <For
                each=move || items.clone()
                key=|(index, _)| *index
                children=move |(_, artwork)| view! { <ArtworkCard artwork=artwork /> }
            />
        </div>
    }
    .into_any()
}
