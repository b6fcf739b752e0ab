use log::debug;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::background::AnimatedBackground;
use crate::config;
use crate::contact::{submit, EmailJs, EmailJsConfig, Field, FormState, SubmitError, Ticket};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// "<service> - <package>" label chosen on the packages screen.
    pub selected_package: AttrValue,
    pub on_back: Callback<()>,
}

pub enum Msg {
    Edit(Field, String),
    AcceptTerms(bool),
    Submit,
    Delivered(Ticket, Result<(), SubmitError>),
    Back,
}

pub struct ContactForm {
    form: FormState,
    email_config: EmailJsConfig,
}

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: FormState::new(ctx.props().selected_package.to_string()),
            email_config: config::email_config(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().selected_package != old_props.selected_package {
            self.form.reset(ctx.props().selected_package.to_string());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                self.form.set_field(field, value);
                true
            }
            Msg::AcceptTerms(accepted) => {
                self.form.set_accepted_terms(accepted);
                true
            }
            Msg::Submit => {
                match self.form.begin_submit(&self.email_config) {
                    Ok((ticket, snapshot)) => {
                        let email_config = self.email_config.clone();
                        let mailer = EmailJs::new(config::get_email_api_url());
                        ctx.link().send_future(async move {
                            let result = submit(&mailer, &email_config, &snapshot).await;
                            Msg::Delivered(ticket, result)
                        });
                    }
                    Err(e) => debug!("Submit refused: {}", e),
                }
                true
            }
            Msg::Delivered(ticket, result) => self.form.finish(ticket, result),
            Msg::Back => {
                ctx.props().on_back.emit(());
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.form.teardown();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let back = ctx.link().callback(|_: MouseEvent| Msg::Back);

        html! {
            <div class="section">
                <AnimatedBackground />
                <div class="section-content narrow">
                    <div class="panel">
                        if self.form.is_submitted() {
                            <div class="thanks">
                                <h2>{"¡Gracias por contactarnos!"}</h2>
                                <p>{"Hemos recibido tu mensaje. Nos pondremos en contacto contigo pronto."}</p>
                                <button class="btn btn-dark" onclick={back.clone()}>
                                    {"Volver a los servicios"}
                                </button>
                            </div>
                        } else {
                            { self.render_form(ctx) }
                        }
                    </div>
                    if !self.form.is_submitted() {
                        <button class="btn btn-dark back-button" onclick={back}>{"Volver a Servicios"}</button>
                    }
                </div>
                <style>
                    {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-form label {
                        display: block;
                        margin-bottom: 0.25rem;
                    }
                    .contact-form input[type="text"],
                    .contact-form input[type="email"],
                    .contact-form input[type="tel"],
                    .contact-form textarea {
                        width: 100%;
                        padding: 0.5rem;
                        border: 1px solid #d1d5db;
                        border-radius: 4px;
                        font: inherit;
                    }
                    .contact-form .terms {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.5rem;
                    }
                    .field-error {
                        color: #ef4444;
                        font-size: 0.875rem;
                        margin-top: 0.25rem;
                    }
                    .form-error {
                        color: #ef4444;
                        text-align: center;
                    }
                    .selected-package {
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .back-button {
                        margin-top: 2rem;
                    }
                    .thanks {
                        text-align: center;
                    }
                    .thanks p {
                        margin-bottom: 1.5rem;
                    }
                    "#}
                </style>
            </div>
        }
    }
}

impl ContactForm {
    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let submission = self.form.submission();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_terms = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::AcceptTerms(input.checked())
        });
        let on_message = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::Edit(Field::Message, input.value())
        });

        html! {
            <>
                <h2 class="panel-title">{"Contacto"}</h2>
                <p class="selected-package">
                    {"Paquete seleccionado: "}<strong>{&submission.selected_package}</strong>
                </p>
                <form class="contact-form" {onsubmit} novalidate=true>
                    { self.render_input(ctx, Field::Name, "text", "Nombre (obligatorio)") }
                    { self.render_input(ctx, Field::Email, "email", "Correo (obligatorio)") }
                    { self.render_input(ctx, Field::Phone, "tel", "Teléfono (opcional)") }
                    <div>
                        <label for="message">{"Mensaje (obligatorio)"}</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="4"
                            value={submission.message.clone()}
                            oninput={on_message}
                        />
                        { self.field_error(Field::Message) }
                    </div>
                    <div>
                        <label class="terms">
                            <input
                                type="checkbox"
                                name="accepted_terms"
                                checked={submission.accepted_terms}
                                onchange={on_terms}
                            />
                            <span>{"Acepto los términos y condiciones y la política de privacidad"}</span>
                        </label>
                        { self.field_error(Field::Terms) }
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={!self.form.can_submit()}>
                        { if self.form.is_sending() { "Enviando..." } else { "Enviar" } }
                    </button>
                    if self.form.submit_error() {
                        <p class="form-error">{"Inténtelo nuevamente, ocurrió un error."}</p>
                    }
                </form>
            </>
        }
    }

    fn render_input(&self, ctx: &Context<Self>, field: Field, kind: &'static str, label: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Edit(field, input.value())
        });

        html! {
            <div>
                <label for={field.key()}>{label}</label>
                <input
                    type={kind}
                    id={field.key()}
                    name={field.key()}
                    value={self.form.submission().value(field).to_string()}
                    {oninput}
                />
                { self.field_error(field) }
            </div>
        }
    }

    fn field_error(&self, field: Field) -> Html {
        match self.form.errors().message(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    }
}
