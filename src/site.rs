use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{Catalog, View};
use crate::navigation::{HistoryEffect, NavAction, Navigation, SectionQuery};
use crate::pages::{
    contact::ContactForm, intro::Intro, not_found::NotFound, packages::Packages,
    services::Services,
};
use crate::Route;

/// Mirrors a transition into the browser history. The resulting location change
/// comes back through `NavAction::LocationChanged` and is a no-op there.
fn sync_history(navigator: &Navigator, effect: &HistoryEffect) {
    let result = match effect {
        HistoryEffect::None => return,
        HistoryEffect::Push(section) => navigator.push_with_query(
            &Route::Home,
            &SectionQuery {
                section: section.to_string(),
            },
        ),
        HistoryEffect::Replace(section) => navigator.replace_with_query(
            &Route::Home,
            &SectionQuery {
                section: section.to_string(),
            },
        ),
        HistoryEffect::Go(delta) => {
            navigator.go(*delta);
            Ok(())
        }
    };
    if let Err(e) = result {
        warn!("Could not update browser history: {:?}", e);
    }
}

#[function_component(Site)]
pub fn site() -> Html {
    let catalog = use_memo(|_| Catalog::builtin(), ());
    let nav = use_reducer(move || Navigation::new(catalog));
    let navigator = use_navigator();
    let location = use_location();

    // browser back/forward and reloads
    {
        let dispatcher = nav.dispatcher();
        let query = location
            .as_ref()
            .and_then(|l| l.query::<SectionQuery>().ok())
            .map(|q| q.section);
        use_effect_with_deps(
            move |query| {
                dispatcher.dispatch(NavAction::LocationChanged(query.clone()));
                || ()
            },
            query,
        );
    }

    // reducer -> browser
    {
        let revision = nav.revision();
        let nav = nav.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(navigator) = navigator.as_ref() {
                    sync_history(navigator, nav.effect());
                }
                || ()
            },
            revision,
        );
    }

    let dispatch = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |action: NavAction| dispatcher.dispatch(action))
    };

    let content = match nav.catalog().resolve(nav.current()) {
        Ok(View::Intro) => html! {
            <Intro on_start={dispatch.reform(|_: ()| NavAction::Start)} />
        },
        Ok(View::Services) => html! {
            <Services
                catalog={nav.catalog().clone()}
                on_view={dispatch.reform(NavAction::ViewPackages)}
            />
        },
        Ok(View::Packages(service)) => {
            let name = service.name.clone();
            html! {
                <Packages
                    service={service.clone()}
                    on_select={dispatch.reform(move |package: String| NavAction::SelectPackage {
                        service: name.clone(),
                        package,
                    })}
                    on_back={dispatch.reform(|_: ()| NavAction::Back)}
                />
            }
        }
        Ok(View::Contact) => html! {
            <ContactForm
                selected_package={nav.selected_package().unwrap_or_default().to_string()}
                on_back={dispatch.reform(|_: ()| NavAction::BackToServices)}
            />
        },
        Err(e) => {
            warn!("Nothing to render for {}: {}", nav.current(), e);
            html! { <NotFound on_back={dispatch.reform(|_: ()| NavAction::Back)} /> }
        }
    };

    html! {
        <div class="site">
            <div class="section-fade" key={nav.current().to_string()}>
                { content }
            </div>
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                    margin: 0;
                    padding: 0;
                }
                body {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    background: linear-gradient(to bottom, #dbeafe, #ffffff);
                    min-height: 100vh;
                }
                .section-fade {
                    animation: sectionFade 0.5s ease-out;
                }
                @keyframes sectionFade {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .section {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    overflow: hidden;
                }
                .section-content {
                    position: relative;
                    z-index: 10;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2rem 1rem;
                    display: flex;
                    flex-direction: column;
                    min-height: 100vh;
                }
                .section-content.narrow {
                    align-items: center;
                    justify-content: center;
                }
                .section-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    color: white;
                    margin-bottom: 3rem;
                    min-height: 3rem;
                }
                .section-footer {
                    margin-top: 3rem;
                    text-align: center;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    flex-grow: 1;
                }
                .card {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    background: white;
                    border-radius: 8px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    padding: 1.5rem;
                    opacity: 0;
                    animation: cardIn 0.5s ease-out forwards;
                }
                @keyframes cardIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .card-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .feature-list {
                    list-style: none;
                    flex-grow: 1;
                    font-size: 1.1rem;
                    margin-bottom: 1.5rem;
                }
                .feature-list li {
                    display: flex;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }
                .feature-list .bullet {
                    margin-right: 0.5rem;
                }
                .panel {
                    width: 100%;
                    max-width: 28rem;
                    background: white;
                    border-radius: 8px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    padding: 2rem;
                }
                .panel h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border: none;
                    border-radius: 6px;
                    padding: 0.75rem 1.5rem;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .btn:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .btn-dark {
                    background: black;
                    color: white;
                }
                .btn-dark:hover:not(:disabled) {
                    background: #1f2937;
                }
                .btn-light {
                    background: white;
                    color: #1e3a8a;
                }
                .btn-light:hover {
                    background: #e5e7eb;
                }
                .btn-primary {
                    width: 100%;
                    background: #3b82f6;
                    color: white;
                }
                .btn-primary:hover:not(:disabled) {
                    background: #2563eb;
                }
                .card-action {
                    width: 100%;
                }
                @media (max-width: 768px) {
                    .card-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
