use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::{Catalog, Service};
use crate::components::{background::AnimatedBackground, typewriter::Typewriter};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub catalog: Rc<Catalog>,
    /// Receives the name of the service whose packages should be shown.
    pub on_view: Callback<String>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <div class="section">
            <AnimatedBackground />
            <div class="section-content">
                <h2 class="section-title">
                    <Typewriter text="Nuestros Servicios" />
                </h2>
                <div class="card-grid">
                    { for props.catalog.list_services().iter().enumerate().map(|(index, service)| {
                        render_service(index, service, &props.on_view)
                    }) }
                </div>
            </div>
        </div>
    }
}

fn render_service(index: usize, service: &Service, on_view: &Callback<String>) -> Html {
    let onclick = {
        let on_view = on_view.clone();
        let name = service.name.clone();
        Callback::from(move |_: MouseEvent| on_view.emit(name.clone()))
    };
    let features = service
        .highlighted_package()
        .map(|p| p.features.as_slice())
        .unwrap_or_default();

    html! {
        <div class="card" key={service.name.clone()} style={format!("animation-delay: {}ms;", index * 100)}>
            <h3 class="card-title">{&service.name}</h3>
            <ul class="feature-list">
                { for features.iter().map(|feature| html! {
                    <li><span class="bullet">{"•"}</span><span>{feature}</span></li>
                }) }
            </ul>
            <button class="btn btn-dark card-action" {onclick}>{"Ver Paquetes"}</button>
        </div>
    }
}
