use yew::prelude::*;

use crate::components::{background::AnimatedBackground, typewriter::Typewriter};

#[derive(Properties, PartialEq)]
pub struct IntroProps {
    pub on_start: Callback<()>,
}

#[function_component(Intro)]
pub fn intro(props: &IntroProps) -> Html {
    let onclick = {
        let on_start = props.on_start.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(()))
    };

    html! {
        <div class="section intro">
            <AnimatedBackground />
            <div class="section-content intro-content">
                <h1 class="intro-title">
                    <Typewriter key="intro-title" text="Bienvenido a IA en Clave" />
                </h1>
                <p class="intro-subtitle">
                    <Typewriter key="intro-subtitle" text="Descubre el poder de la IA para tu organización" delay={30} />
                </p>
                <button class="btn btn-light" {onclick}>
                    {"Comienza tu viaje"}
                    <span class="arrow">{"→"}</span>
                </button>
            </div>
            <style>
                {r#"
                .intro-content {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    min-height: 100vh;
                }
                .intro-title {
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: white;
                    margin-bottom: 1rem;
                    min-height: 4.5rem;
                }
                .intro-subtitle {
                    font-size: 1.5rem;
                    color: #e5e7eb;
                    margin-bottom: 2rem;
                    min-height: 2rem;
                }
                .intro .arrow {
                    margin-left: 0.5rem;
                    transition: transform 0.3s ease;
                }
                .intro .btn:hover .arrow {
                    transform: translateX(5px);
                }
                @media (max-width: 768px) {
                    .intro-title {
                        font-size: 2.25rem;
                    }
                    .intro-subtitle {
                        font-size: 1.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
