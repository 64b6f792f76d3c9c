//! Contact page with a simulated message form.
//!
//! The form never leaves the browser: submission waits a fixed delay, shows a
//! confirmation and clears the fields.

use leptos::prelude::*;

use crate::components::page_layout::PageLayout;
use crate::components::reveal::Reveal;
use crate::components::section_title::SectionTitle;
use crate::content::contact::{EMAIL, INTRO, LOCATION, RESPONSE_TIME, SENT_BODY, SENT_TITLE, SOCIAL_LINKS};
use crate::state::contact::ContactFormState;
use crate::util::reveal::RevealVariant;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form_state = RwSignal::new(ContactFormState::default());
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form_state.try_update(ContactFormState::begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let delay = std::time::Duration::from_millis(u64::from(crate::state::contact::SUBMIT_DELAY_MS));
            gloo_timers::future::sleep(delay).await;
            form_state.update(ContactFormState::complete);
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
            log::info!("contact form: simulated submission complete");
        });
    };

    view! {
        <PageLayout>
            <section class="section">
                <div class="container">
                    <SectionTitle
                        title="Let's Co-build Something"
                        subtitle="Have an idea? Want to collaborate? We'd love to hear from you. Reach out and let's explore the possibilities together."
                    />

                    <div class="contact">
                        <Reveal variant=RevealVariant::SlideRight class="contact__info">
                            <div>
                                <h3 class="contact__heading">"Get in Touch"</h3>
                                <p class="contact__intro">{INTRO}</p>
                            </div>

                            <div class="contact__details">
                                <ContactDetail icon="✉" label="Email">
                                    <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                                </ContactDetail>
                                <ContactDetail icon="⌖" label="Location">
                                    <p>{LOCATION}</p>
                                </ContactDetail>
                                <ContactDetail icon="⏱" label="Response Time">
                                    <p>{RESPONSE_TIME}</p>
                                </ContactDetail>
                            </div>

                            <div class="contact__social">
                                <p class="contact__label">"Connect with us"</p>
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a href=social.href class="contact__social-link" aria-label=social.label>
                                                <span class="contact__social-icon" aria-hidden="true">{social.icon}</span>
                                                <span>{social.handle}</span>
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </Reveal>

                        <Reveal variant=RevealVariant::SlideLeft class="contact__form-wrap">
                            <form class="contact-form" node_ref=form_ref on:submit=on_submit>
                                <div class="contact-form__row">
                                    <label class="contact-form__field">
                                        <span>"Name"</span>
                                        <input name="name" required placeholder="Your name"/>
                                    </label>
                                    <label class="contact-form__field">
                                        <span>"Email"</span>
                                        <input name="email" type="email" required placeholder="you@example.com"/>
                                    </label>
                                </div>
                                <label class="contact-form__field">
                                    <span>"Subject"</span>
                                    <input name="subject" required placeholder="What's this about?"/>
                                </label>
                                <label class="contact-form__field">
                                    <span>"Message"</span>
                                    <textarea
                                        name="message"
                                        required
                                        rows="6"
                                        placeholder="Tell us about your idea, project, or how we can help..."
                                    ></textarea>
                                </label>
                                <button
                                    type="submit"
                                    class="btn btn--primary btn--block"
                                    disabled=move || form_state.get().submitting
                                >
                                    {move || form_state.get().button_label()}
                                </button>
                            </form>
                        </Reveal>
                    </div>

                    <Show when=move || form_state.get().sent>
                        <div class="toast" role="status">
                            <p class="toast__title">{SENT_TITLE}</p>
                            <p class="toast__body">{SENT_BODY}</p>
                            <button
                                class="btn btn--ghost toast__close"
                                on:click=move |_| form_state.update(ContactFormState::dismiss)
                                aria-label="Dismiss"
                            >
                                "✕"
                            </button>
                        </div>
                    </Show>
                </div>
            </section>
        </PageLayout>
    }
}

#[component]
fn ContactDetail(icon: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="contact-detail">
            <span class="contact-detail__icon" aria-hidden="true">{icon}</span>
            <div>
                <p class="contact-detail__label">{label}</p>
                {children()}
            </div>
        </div>
    }
}
