use yew::prelude::*;

use crate::components::{HomeView, NotFoundView};
use crate::routes::Route;
use crate::state::AppState;

#[derive(Properties, PartialEq)]
pub struct SwitcherProps {
    pub state: AppState,
    pub on_home: Callback<()>,
}

/// Select the view for the current route. The match is exhaustive over the
/// closed Route enum, with the NotFound sentinel mapped to its dedicated
/// fallback view.
#[function_component(Switcher)]
pub fn switcher(props: &SwitcherProps) -> Html {
    match &props.state.location.route {
        Route::Home => html! {
            <HomeView
                placeholder={props.state.placeholder.clone()}
                loading={props.state.loading}
                error={props.state.error.clone()}
            />
        },
        Route::NotFound => html! {
            <NotFoundView on_home={props.on_home.clone()} />
        },
    }
}
