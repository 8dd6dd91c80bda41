use data::SimilarityResult;
use leptos::prelude::*;

#[component]
pub fn SimilarityList(scores: Vec<SimilarityResult>) -> impl IntoView {
    if scores.is_empty() {
        return view! { <p>"No similarity scores"</p> }.into_any();
    }

    view! {
        <ul style="list-style: none; padding: 0; max-width: 640px;">
            {scores
                .into_iter()
                .map(|score| {
                    view! {
                        <li style="
                            display: flex;
                            justify-content: space-between;
                            padding: 0.5rem 0.75rem;
                            margin-bottom: 0.5rem;
                            border-radius: 4px;
                            background-color: #646472;
                        ">
                            <span>{score.pair_label()}</span>
                            <span>{score.embedding_type.unwrap_or_else(|| "unknown".to_string())}</span>
                            <strong>{format!("{:.4}", score.similarity_score)}</strong>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
