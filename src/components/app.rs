use yew::prelude::*;

use crate::components::Switcher;
use crate::router::Router;
use crate::routes::Route;
use crate::state::AppStore;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub store: AppStore,
    pub router: Router,
}

/// Application shell: renders the view matching the current route inside a
/// constant container. Pure with respect to the location state; the only
/// store coupling is the re-render subscription.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let update = use_force_update();
    {
        let store = props.store.clone();
        use_effect_with((), move |_| {
            store.subscribe(move || update.force_update());
            || ()
        });
    }

    let state = props.store.get_state();

    let on_home = {
        let router = props.router.clone();
        Callback::from(move |_| router.navigate_to(&Route::Home))
    };

    html! {
        <div class={classes!(state.location.route.slug(), "app-container")}>
            <div class="content-container">
                <Switcher state={state.clone()} {on_home} />
            </div>
        </div>
    }
}
