use yew::prelude::*;

use crate::components::background::AnimatedBackground;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub on_back: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let onclick = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div class="section">
            <AnimatedBackground />
            <div class="section-content narrow">
                <div class="panel">
                    <h2>{"Sección no encontrada"}</h2>
                    <p>{"La página que buscas no existe."}</p>
                    <button class="btn btn-dark" {onclick}>{"Volver"}</button>
                </div>
            </div>
        </div>
    }
}
