use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: AttrValue,
    /// Milliseconds between characters.
    #[prop_or(50)]
    pub delay: u32,
}

/// Reveals `text` one character at a time, starting over whenever the text changes.
#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let shown = use_state(|| 0usize);
    let total = props.text.chars().count();

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                shown.set(0);
                || ()
            },
            props.text.clone(),
        );
    }

    {
        let shown = shown.clone();
        // 0 stops the interval once everything is visible
        let millis = if *shown < total { props.delay } else { 0 };
        use_interval(
            move || {
                if *shown < total {
                    shown.set(*shown + 1);
                }
            },
            millis,
        );
    }

    let visible: String = props.text.chars().take(*shown).collect();

    html! {
        <span class="typewriter" aria-label={props.text.clone()}>{visible}</span>
    }
}
