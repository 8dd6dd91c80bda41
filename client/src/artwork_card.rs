use crate::artwork_modal::ArtworkModal;
use data::ArtworkResult;
use leptos::prelude::*;

#[component]
pub fn ArtworkCard(artwork: ArtworkResult) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let details = artwork.clone();

    let image = artwork.image_url().map(|src| {
        view! {
            <img
                src=src.to_string()
                alt="Artwork"
                style="
                    max-width: 100%;
                    max-height: 100%;
                    object-fit: contain;
                    display: block;
                "
            />
        }
    });
    let description = artwork
        .description()
        .unwrap_or("No description")
        .to_string();

    view! {
        <div
            on:click=move |_| set_is_open.set(true)
            style="
                border: 1px solid #ccc;
                border-radius: 8px;
                background-color: #646472;
                display: flex;
                flex-direction: column;
                overflow: hidden;
                cursor: pointer;
            "
        >
            <div style="
                height: 220px;
                display: flex;
                align-items: center;
                justify-content: center;
                overflow: hidden;
                background-color: #2a2a30;
            ">
                {image}
            </div>
            <div style="padding: 0.5rem; font-size: 0.85rem;">
                <strong>"#" {artwork.id_label()}</strong>
                <p style="margin: 0.25rem 0; max-height: 4.5em; overflow: hidden;">{description}</p>
                {artwork.distance.clone().map(|d| view! { <div>"Distance: " {d}</div> })}
                {artwork.embedding_type.clone().map(|t| view! { <div>"Embedding: " {t}</div> })}
                {artwork.model_name.clone().map(|m| view! { <div>"Model: " {m}</div> })}
            </div>
        </div>

        <Show when=move || is_open.get() fallback=|| ()>
            <ArtworkModal artwork=details.clone() on_close=move || set_is_open.set(false) />
        </Show>
    }
}
