use yew::prelude::*;

use crate::models::Placeholder;

#[derive(Properties, PartialEq)]
pub struct HomeViewProps {
    #[prop_or_default]
    pub placeholder: Option<Placeholder>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    html! {
        <div class="home">
            <h1>{"Home"}</h1>
            {
                if props.loading {
                    html! { <p class="loading">{"Loading..."}</p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(error) = &props.error {
                    html! { <p class="error">{format!("Error: {}", error)}</p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(placeholder) = &props.placeholder {
                    html! {
                        <div class="placeholder-card">
                            <h2>{placeholder.title.clone()}</h2>
                            <p>
                                {format!(
                                    "todo #{} by user {}, completed: {}",
                                    placeholder.id, placeholder.user_id, placeholder.completed
                                )}
                            </p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
