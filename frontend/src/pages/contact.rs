use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealDirection};
use crate::config::CONTACT_RESET_MS;

/// Enquiry form contents. Submission stays local: nothing is sent anywhere.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    /// Copy of the form with the field called `field` replaced.
    pub fn with_field(&self, field: &str, value: String) -> Self {
        let mut next = self.clone();
        match field {
            "name" => next.name = value,
            "email" => next.email = value,
            "phone" => next.phone = value,
            "company" => next.company = value,
            "message" => next.message = value,
            other => log::warn!("Ignoring unknown contact field {:?}", other),
        }
        next
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub dark_mode: bool,
}

#[function_component]
pub fn Contact(props: &ContactProps) -> Html {
    let form = use_state(ContactForm::default);
    let submitted = use_state(|| false);
    let reset_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    reset_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let (name, value) = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                (input.name(), input.value())
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                (area.name(), area.value())
            } else {
                return;
            };
            form.set(form.with_field(&name, value));
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitted = submitted.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                return;
            }
            match serde_json::to_string(&*form) {
                Ok(payload) => log::info!("Contact form submitted locally: {}", payload),
                Err(e) => log::warn!("Failed to encode contact form: {}", e),
            }
            submitted.set(true);

            let form = form.clone();
            let submitted = submitted.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(CONTACT_RESET_MS, move || {
                submitted.set(false);
                form.set(ContactForm::default());
            }));
        })
    };

    let tone = if props.dark_mode { "contact-dark" } else { "contact-light" };
    let field = |name: &'static str, label: &'static str, kind: &'static str, value: &str, required: bool, placeholder: &'static str| {
        html! {
            <div class="form-field">
                <label for={name}>{label}{if required { " *" } else { "" }}</label>
                <input
                    id={name}
                    type={kind}
                    name={name}
                    value={value.to_string()}
                    oninput={on_input.clone()}
                    {required}
                    placeholder={placeholder}
                />
            </div>
        }
    };

    html! {
        <div class={classes!("page", "contact-page", tone)}>
            <section class="section section-alt">
                <div class="container">
                    <Reveal class="section-heading" direction={RevealDirection::Down}>
                        <h1>{"Contact Us"}</h1>
                        <p class="lead">{"Get in touch with our team to discuss your purification system requirements"}</p>
                    </Reveal>

                    <div class="grid grid-3 contact-cards">
                        <div class="card info-card">
                            <div class="icon-badge"><i class="fas fa-envelope"></i></div>
                            <h3>{"Email Us"}</h3>
                            <p>{"info@biospnhipurity.com"}</p>
                            <p>{"sales@biospnhipurity.com"}</p>
                        </div>
                        <div class="card info-card">
                            <div class="icon-badge"><i class="fas fa-phone"></i></div>
                            <h3>{"Call Us"}</h3>
                            <p>{"+91 XXX XXX XXXX"}</p>
                            <p class="muted">{"Mon-Fri: 9:00 AM - 6:00 PM IST"}</p>
                        </div>
                        <div class="card info-card">
                            <div class="icon-badge"><i class="fas fa-location-dot"></i></div>
                            <h3>{"Visit Us"}</h3>
                            <p>{"BIOSPN HiPurity Systems"}</p>
                            <p>{"India"}</p>
                        </div>
                    </div>

                    <div class="grid grid-2">
                        <div class="card form-card">
                            <h2>{"Send Us a Message"}</h2>
                            if *submitted {
                                <div class="form-success">
                                    <p class="form-success-title">{"Thank you for your message!"}</p>
                                    <p>{"We'll get back to you as soon as possible."}</p>
                                </div>
                            } else {
                                <form class="contact-form" onsubmit={on_submit}>
                                    { field("name", "Full Name", "text", &form.name, true, "John Doe") }
                                    { field("email", "Email Address", "email", &form.email, true, "john@example.com") }
                                    { field("phone", "Phone Number", "tel", &form.phone, false, "+91 XXX XXX XXXX") }
                                    { field("company", "Company Name", "text", &form.company, false, "Your Company") }
                                    <div class="form-field">
                                        <label for="message">{"Message *"}</label>
                                        <textarea
                                            id="message"
                                            name="message"
                                            rows="5"
                                            value={form.message.clone()}
                                            oninput={on_input.clone()}
                                            required=true
                                            placeholder="Tell us about your requirements..."
                                        />
                                    </div>
                                    <button type="submit" class="btn btn-primary btn-block">
                                        <span>{"Send Message"}</span>
                                        <i class="fas fa-paper-plane"></i>
                                    </button>
                                </form>
                            }
                        </div>

                        <div class="contact-side">
                            <div class="card map-card">
                                <h3>{"Our Location"}</h3>
                                <div class="map-frame">
                                    <iframe
                                        title="Google Maps Location"
                                        src="https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3782.2609283253696!2d73.85674631489408!3d18.52043098741841!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bc2c06a9f0c3d3f%3A0xafd6bb1e0b2e6c9!2sPune%2C%20Maharashtra!5e0!3m2!1sen!2sin!4v1234567890123"
                                        width="100%"
                                        height="100%"
                                        style="border: 0;"
                                        allowfullscreen=true
                                        loading="lazy"
                                    />
                                </div>
                            </div>
                            <div class="card hours-card">
                                <h3>{"Business Hours"}</h3>
                                <div class="hours-row"><span>{"Monday - Friday"}</span><span class="muted">{"9:00 AM - 6:00 PM"}</span></div>
                                <div class="hours-row"><span>{"Saturday"}</span><span class="muted">{"10:00 AM - 4:00 PM"}</span></div>
                                <div class="hours-row"><span>{"Sunday"}</span><span class="muted">{"Closed"}</span></div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::default()
            .with_field("name", "Asha Rao".into())
            .with_field("email", "asha@example.com".into())
            .with_field("message", "Need a 2 m3/h RO skid".into())
    }

    #[test]
    fn fields_update_by_name() {
        let form = filled().with_field("company", "Acme Pharma".into());
        assert_eq!(form.name, "Asha Rao");
        assert_eq!(form.company, "Acme Pharma");
        assert_eq!(form.phone, "");
    }

    #[test]
    fn unknown_field_is_ignored() {
        let form = filled();
        assert_eq!(form.with_field("fax", "123".into()), form);
    }

    #[test]
    fn required_fields_gate_completion() {
        assert!(filled().is_complete());
        assert!(!ContactForm::default().is_complete());
        assert!(!filled().with_field("email", "   ".into()).is_complete());
        assert!(filled().with_field("phone", "".into()).is_complete());
    }

    #[test]
    fn serializes_all_fields() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["name"], "Asha Rao");
        assert_eq!(json["company"], "");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
