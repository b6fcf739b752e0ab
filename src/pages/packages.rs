use yew::prelude::*;

use crate::catalog::{Package, Service, LOCKED_TIER_INDEX};
use crate::components::{background::AnimatedBackground, typewriter::Typewriter};

#[derive(Properties, PartialEq)]
pub struct PackagesProps {
    pub service: Service,
    /// Receives the chosen package name.
    pub on_select: Callback<String>,
    pub on_back: Callback<()>,
}

#[function_component(Packages)]
pub fn packages(props: &PackagesProps) -> Html {
    let service = &props.service;
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div class="section">
            <AnimatedBackground />
            <div class="section-content">
                <h2 class="section-title">
                    <Typewriter key={format!("{}-title", service.name)} text={service.name.clone()} />
                </h2>
                <div class="service-description">
                    <div>
                        <h4>{"¿Qué es?"}</h4>
                        <p>{&service.description.what}</p>
                    </div>
                    <div>
                        <h4>{"¿Cómo funciona?"}</h4>
                        <p>{&service.description.how}</p>
                    </div>
                    <div>
                        <h4>{"Beneficio"}</h4>
                        <p>{&service.description.benefit}</p>
                    </div>
                </div>
                <div class="card-grid">
                    { for service.packages.iter().enumerate().map(|(index, package)| {
                        render_package(index, package, &props.on_select)
                    }) }
                </div>
                <div class="section-footer">
                    <button class="btn btn-dark" onclick={on_back}>{"Volver a Servicios"}</button>
                </div>
            </div>
            <style>
                {r#"
                .service-description {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                    color: #e5e7eb;
                }
                .service-description h4 {
                    color: white;
                    font-size: 1.2rem;
                    margin-bottom: 0.5rem;
                }
                .lock {
                    margin-right: 0.5rem;
                }
                @media (max-width: 768px) {
                    .service-description {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

fn render_package(index: usize, package: &Package, on_select: &Callback<String>) -> Html {
    let onclick = {
        let on_select = on_select.clone();
        let name = package.name.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(name.clone()))
    };
    let locked = index >= LOCKED_TIER_INDEX;

    html! {
        <div class="card" key={package.name.clone()} style={format!("animation-delay: {}ms;", index * 100)}>
            <h3 class="card-title">{&package.name}</h3>
            <ul class="feature-list">
                { for package.features.iter().map(|feature| html! {
                    <li><span class="bullet">{"•"}</span><span>{feature}</span></li>
                }) }
            </ul>
            <button class="btn btn-dark card-action" {onclick}>
                if locked {
                    <span class="lock">{"🔒"}</span>{"Contactar"}
                } else {
                    {"Seleccionar"}
                }
            </button>
        </div>
    }
}
