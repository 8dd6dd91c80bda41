use data::ArtworkResult;
use leptos::prelude::*;
use web_sys::MouseEvent;

/// Full-screen overlay with the larger image and every field of the result,
/// including the raw vision analysis. Clicking the backdrop closes it.
#[component]
pub fn ArtworkModal(
    artwork: ArtworkResult,
    on_close: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    let image = artwork.image_url().map(|src| {
        view! {
            <img
                src=src.to_string()
                alt="Artwork"
                style="max-width: 100%; max-height: 60vh; object-fit: contain; display: block; margin: 0 auto;"
            />
        }
    });
    let generated_at = artwork.data.as_ref().and_then(|d| d.generated_at.clone());
    let vision_analysis = artwork
        .vision_analysis
        .as_ref()
        .and_then(|value| serde_json::to_string_pretty(value).ok());

    let field = |label: &'static str, value: Option<String>| {
        value.map(|value| {
            view! {
                <div>
                    <span style="color: #9a9aa8;">{label} ": "</span>
                    {value}
                </div>
            }
        })
    };

    view! {
        <div
            style="
                position: fixed;
                top: 0; left: 0; right: 0; bottom: 0;
                background-color: rgba(0,0,0,0.8);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 1000;
            "
            on:click=move |_| on_close()
        >
            <div
                style="
                    width: min(900px, 92vw);
                    max-height: 92vh;
                    overflow-y: auto;
                    background-color: #202026;
                    border-radius: 8px;
                    padding: 1rem;
                "
                on:click=move |ev: MouseEvent| ev.stop_propagation()
            >
                {image}
                <h2 style="font-size: 1.1rem;">"Artwork " {artwork.id_label()}</h2>
                <p>{artwork.description().map(str::to_string)}</p>
                {field("Distance", artwork.distance.clone())}
                {field("Embedding type", artwork.embedding_type.clone())}
                {field("Model", artwork.model_name.clone())}
                {field("Model ID", artwork.model_id.as_ref().map(ToString::to_string))}
                {field("Generated", generated_at)}
                {field("Created", artwork.created_at.clone())}
                {field("Updated", artwork.updated_at.clone())}
                {vision_analysis
                    .map(|json| {
                        view! {
                            <h3 style="font-size: 1rem;">"Vision analysis"</h3>
                            <pre style="white-space: pre-wrap; font-size: 0.8rem; background-color: #161618; padding: 0.5rem;">
                                {json}
                            </pre>
                        }
                    })}
            </div>
        </div>
    }
}
