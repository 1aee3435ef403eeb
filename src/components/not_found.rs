use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotFoundViewProps {
    pub on_home: Callback<()>,
}

#[function_component(NotFoundView)]
pub fn not_found_view(props: &NotFoundViewProps) -> Html {
    let home_click = {
        let cb = props.on_home.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This page does not exist."}</p>
            <button onclick={home_click}>{"Back to home"}</button>
        </div>
    }
}
