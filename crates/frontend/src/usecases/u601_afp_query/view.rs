use super::api;
use super::state::{QueryFormState, EXAMPLE_QUESTIONS};
use crate::shared::components::ui::{Button, Textarea};
use contracts::usecases::u601_afp_query::QueryResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn QueryWidget() -> impl IntoView {
    let state = RwSignal::new(QueryFormState::default());

    let is_loading = Signal::derive(move || state.with(QueryFormState::is_loading));
    let submit_disabled = Signal::derive(move || !state.with(QueryFormState::can_submit));
    let question = Signal::derive(move || state.with(|s| s.question.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Пустой вопрос или запрос в полёте: ничего не трогаем
        if !state.with_untracked(QueryFormState::can_submit) {
            return;
        }
        let Some(request) = state.try_update(QueryFormState::begin_submit).flatten() else {
            return;
        };

        log::debug!(
            "u601: submitting question ({} chars)",
            request.question.chars().count()
        );

        spawn_local(async move {
            let result = api::ask_question(&request).await;
            state.update(|s| s.complete(result));
        });
    };

    view! {
        <div class="chat-container">
            <form class="question-form" on:submit=on_submit>
                <div class="input-group">
                    <Textarea
                        value=question
                        on_input=Callback::new(move |text: String| state.update(|s| s.set_question(text)))
                        placeholder="Escribe tu pregunta sobre el cuarto retiro de AFP...".to_string()
                        class="question-input".to_string()
                        rows=3
                        disabled=is_loading
                    />
                    <Button
                        button_type="submit".to_string()
                        class="submit-button".to_string()
                        disabled=submit_disabled
                    >
                        {move || state.with(QueryFormState::submit_label)}
                    </Button>
                </div>
            </form>

            {move || state.with(|s| s.error.clone()).map(|msg| view! {
                <div class="error-message">
                    "❌ " {msg}
                </div>
            })}

            {move || state.with(|s| s.response.clone()).map(|resp| view! {
                <ResponseView response=resp />
            })}

            <div class="examples">
                <h3>"💡 Preguntas de ejemplo:"</h3>
                <div class="example-questions">
                    {EXAMPLE_QUESTIONS
                        .into_iter()
                        .map(|example| view! {
                            <Button
                                variant="secondary".to_string()
                                class="example-button".to_string()
                                disabled=is_loading
                                on_click=Callback::new(move |_: leptos::ev::MouseEvent| state.update(|s| s.select_example(example)))
                            >
                                {example}
                            </Button>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ResponseView(response: QueryResponse) -> impl IntoView {
    let lines: Vec<String> = response
        .answer_lines()
        .into_iter()
        .map(str::to_string)
        .collect();

    view! {
        <div class="response-container">
            <div class="question-display">
                <strong>"Tu pregunta:"</strong>
                " "
                {response.question}
            </div>
            <div class="answer-display">
                <strong>"Respuesta:"</strong>
                <div class="answer-content">
                    {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                </div>
                {response.source.map(|source| view! {
                    <div class="answer-source">
                        <small>"Fuente: " {source}</small>
                    </div>
                })}
            </div>
        </div>
    }
}
