//! Public Pages
//!
//! Marketing site, catalogue and the two public forms.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ContactArgs;
use crate::components::{
    CountdownBanner, EmptyState, FilePicker, Link, Loading, NotFoundCard, TextArea, TextField,
};
use crate::context::use_session;
use crate::countdown::CountdownKind;
use crate::forms::{require, FormBuilder};
use crate::hooks::use_remote;
use crate::models::{CatalogueCourse, PhysicalProgram, PublicMentor};
use crate::routes::Route;
use crate::session::home_for;
use crate::store::use_toasts;

/// Catalogue CTA target: straight to the dashboard when signed in
fn enroll_target(signed_in: Option<Route>) -> Route {
    signed_in.unwrap_or(Route::Register)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let mentors = use_remote(|api| async move { api.public_mentors().await }, "Could not load mentors.");

    let values = [
        ("Excellence", "We uphold the highest standards in all our training, mentorship, and support services."),
        ("Community", "We foster a strong sisterhood where women uplift each other and grow together."),
        ("Accessibility", "Our programs are designed to be inclusive, affordable, and easily accessible to all women."),
    ];

    view! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-content">
                    <h1>"Empowering Women, " <span class="highlight">"One Skill"</span> " at a Time"</h1>
                    <p>
                        "Yego SheCan uplifts underserved women through business training, mentorship, and access to digital markets."
                    </p>
                    <CountdownBanner kind=CountdownKind::Home />
                    <div class="hero-buttons">
                        <Link to=Route::Mentorship class="btn btn-primary">"Find a Mentor"</Link>
                        <Link to=Route::Courses class="btn btn-outline">"Explore Courses"</Link>
                    </div>
                </div>
            </section>

            <section class="about-section">
                <h2>"What We Do"</h2>
                <p>
                    "At Yego SheCan, we equip women with the knowledge and tools to build sustainable businesses. "
                    "From practical entrepreneurship training to mentorship and digital sales support, our holistic "
                    "approach ensures long-term impact and independence."
                </p>
            </section>

            <section class="values-section">
                {values
                    .into_iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="value-card">
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="mentors-section">
                <h2>"Meet Our Mentors"</h2>
                {move || {
                    if mentors.is_loading() {
                        return view! { <Loading /> }.into_any();
                    }
                    let list = mentors.value();
                    if list.is_empty() {
                        return view! { <EmptyState message="Our mentors will be introduced soon." /> }.into_any();
                    }
                    view! {
                        <div class="card-grid">
                            {list.into_iter().take(6).map(|mentor| view! { <MentorCard mentor=mentor /> }).collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </section>

            <section class="cta-section">
                <h2>"Ready to grow your business?"</h2>
                {move || {
                    let target = enroll_target(session.user().map(|user| home_for(&user.role)));
                    view! { <Link to=target class="btn btn-primary">"Get Started"</Link> }
                }}
            </section>
        </div>
    }
}

#[component]
fn MentorCard(mentor: PublicMentor) -> impl IntoView {
    let session = use_session();
    let image = mentor.image.as_deref().map(|path| session.asset_url(path));

    view! {
        <div class="card mentor-card">
            {image.map(|src| view! { <img class="card-image" src=src alt=mentor.name.clone() /> })}
            <h3>{mentor.name.clone()}</h3>
            <p class="muted">{mentor.expertise}</p>
            <p>{mentor.bio}</p>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let sections = [
        (
            "Our Mission",
            "To equip women with practical business skills, mentorship and market access so they can build sustainable livelihoods.",
        ),
        (
            "Our Vision",
            "A Rwanda where every woman has the knowledge and support to turn her ideas into thriving enterprises.",
        ),
        (
            "Who We Serve",
            "Women entrepreneurs and aspiring business owners, especially those in underserved communities.",
        ),
    ];

    view! {
        <div class="about-page">
            <section class="hero hero-small">
                <h1>"We believe every woman deserves the opportunity"</h1>
            </section>
            <section class="card-grid">
                {sections
                    .into_iter()
                    .map(|(title, text)| {
                        view! {
                            <div class="card">
                                <h2>{title}</h2>
                                <p>{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="cta-section">
                <Link to=Route::Contact class="btn btn-primary">"Get in touch"</Link>
            </section>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let args = ContactArgs {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            category: category.get_untracked(),
            message: message.get_untracked(),
        };
        let missing = require(&[
            ("your name", args.name.as_str()),
            ("your email", args.email.as_str()),
            ("a category", args.category.as_str()),
            ("your message", args.message.as_str()),
        ]);
        if let Err(err) = missing {
            toasts.error(err.to_string());
            return;
        }
        submitting.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.send_contact(&args).await {
                Ok(response) => {
                    toasts.success(response.message.unwrap_or_else(|| "Message sent successfully!".to_string()));
                    for field in [name, email, phone, category, message] {
                        let _ = field.try_set(String::new());
                    }
                }
                Err(err) => toasts.error(err.user_message("Failed to send message. Please try again.")),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="contact-page">
            <h2>"Get in " <span class="highlight">"Touch"</span></h2>
            <form class="card form-card" on:submit=on_submit>
                <TextField label="Name" value=name disabled=submitting required=true />
                <TextField label="Email" value=email input_type="email" disabled=submitting required=true />
                <TextField label="Phone" value=phone input_type="tel" disabled=submitting />
                <label class="form-field">
                    <span class="form-label">"Category"</span>
                    <select
                        class="form-input"
                        required=true
                        disabled=move || submitting.get()
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"What can we help you with? *"</option>
                        <option value="support">"Support"</option>
                        <option value="partnership">"Partnership"</option>
                        <option value="feedback">"Feedback"</option>
                        <option value="other">"Other"</option>
                    </select>
                </label>
                <TextArea label="Message" value=message disabled=submitting rows=5 />
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn CatalogueCoursesPage() -> impl IntoView {
    let session = use_session();
    let courses = use_remote(|api| async move { api.public_courses().await }, "Could not load courses.");

    let course_card = move |course: CatalogueCourse| {
        let image = course.image.as_deref().map(|path| session.asset_url(path));
        let target = enroll_target(session.user().map(|user| home_for(&user.role)));
        view! {
            <div class="card course-card">
                {image.map(|src| view! { <img class="card-image" src=src alt=course.title.clone() /> })}
                <div class="card-body">
                    <span class="badge badge-blue">{course.level.label().to_string()}</span>
                    <h3>{course.title.clone()}</h3>
                    <p>{course.description}</p>
                    <p class="muted">{format!("{} · {} lessons", course.duration, course.lessons)}</p>
                    <ul class="feature-list">
                        {course.features.into_iter().map(|feature| view! { <li>{feature}</li> }).collect_view()}
                    </ul>
                    <div class="card-footer">
                        <span class="price">{course.price}</span>
                        <Link to=target class="btn btn-primary">"Enroll"</Link>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <div class="courses-page">
            <section class="hero hero-small">
                <h1>"Empowering Women Entrepreneurs"</h1>
            </section>
            <section id="courses">
                <h2>"Courses"</h2>
                {move || {
                    if courses.is_loading() {
                        return view! { <Loading label="Loading courses..." /> }.into_any();
                    }
                    let list = courses.value();
                    if list.is_empty() {
                        return view! { <EmptyState message="No courses are available right now." /> }.into_any();
                    }
                    view! { <div class="card-grid">{list.into_iter().map(course_card).collect_view()}</div> }
                        .into_any()
                }}
            </section>
        </div>
    }
}

#[component]
pub fn PhysicalProgramsPage() -> impl IntoView {
    let session = use_session();
    let programs = use_remote(
        |api| async move { api.public_programs().await },
        "Could not load program information.",
    );

    let program_card = move |program: PhysicalProgram| {
        let image = program.image_url.as_deref().map(|path| session.asset_url(path));
        let target = match session.user() {
            Some(user) if !user.role.is_staff() => Route::LearnerPrograms,
            Some(user) => home_for(&user.role),
            None => Route::Register,
        };
        view! {
            <div class="card program-card">
                {image.map(|src| view! { <img class="card-image" src=src alt=program.title.clone() /> })}
                <div class="card-body">
                    <h3>{program.title.clone()}</h3>
                    <p>{program.description}</p>
                    <p class="muted">{format!("{} · {}", program.duration, program.location)}</p>
                    {program.schedule.map(|schedule| view! { <p class="muted">{schedule}</p> })}
                    <ul class="feature-list">
                        {program.skills.into_iter().map(|skill| view! { <li>{skill}</li> }).collect_view()}
                    </ul>
                    <Link to=target class="btn btn-primary">"Register to Enroll"</Link>
                </div>
            </div>
        }
    };

    view! {
        <div class="physical-page">
            <section class="hero hero-small">
                <h1>"Hands-on Workshops"</h1>
                <CountdownBanner kind=CountdownKind::Workshop />
            </section>
            <section class="prerequisites">
                <h2>"Program Prerequisites"</h2>
                <p>"Complete at least one online course before joining a physical program."</p>
            </section>
            <section id="programs">
                <h2>"Available Programs"</h2>
                {move || {
                    if programs.is_loading() {
                        return view! { <Loading label="Loading programs..." /> }.into_any();
                    }
                    let list = programs.value();
                    if list.is_empty() {
                        return view! { <EmptyState message="No programs are scheduled yet." /> }.into_any();
                    }
                    view! { <div class="card-grid">{list.into_iter().map(program_card).collect_view()}</div> }
                        .into_any()
                }}
            </section>
            <section class="cta-section">
                <h2>"Ready to Learn a New Skill?"</h2>
                <Link to=Route::Courses class="btn btn-secondary">"Start with Online Courses"</Link>
                <Link to=Route::Contact class="btn btn-outline">"Have Questions?"</Link>
            </section>
        </div>
    }
}

/// "Become a mentor" application with CV upload
#[component]
pub fn MentorshipPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let expertise = RwSignal::new(String::new());
    let education = RwSignal::new(String::new());
    let experience = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let cv = StoredValue::new_local(None::<web_sys::File>);
    let cv_name = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(file) = cv.get_value() else {
            toasts.error("Please upload your CV to submit the application.");
            return;
        };
        let payload = FormBuilder::multipart()
            .text("name", name.get_untracked())
            .text("email", email.get_untracked())
            .text("phone", phone.get_untracked())
            .text("expertise", expertise.get_untracked())
            .text("education", education.get_untracked())
            .text("experience", experience.get_untracked())
            .text("message", message.get_untracked())
            .file("cv", Some(file))
            .build();
        submitting.set(true);
        toasts.info("Submitting your application...");
        let api = session.api();
        spawn_local(async move {
            match api.apply_mentor(&payload).await {
                Ok(response) => {
                    toasts.success(response.message.unwrap_or_else(|| "Application submitted successfully!".to_string()));
                    for field in [name, email, phone, expertise, education, experience, message] {
                        let _ = field.try_set(String::new());
                    }
                    let _ = cv.try_update_value(|file| *file = None);
                    let _ = cv_name.try_set(None);
                }
                Err(err) => toasts.error(err.user_message("Failed to submit application. Please try again.")),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="mentorship-page">
            <section class="hero hero-small">
                <h1>"Grow Together Through Mentorship"</h1>
            </section>
            <section class="steps">
                <h2>"How Mentorship Works"</h2>
                <ol>
                    <li>"Apply with your background and CV."</li>
                    <li>"Our team reviews your application."</li>
                    <li>"Once approved, you are matched with learners."</li>
                </ol>
            </section>
            <section>
                <h2>"Request to Become a Mentor"</h2>
                <form class="card form-card" on:submit=on_submit>
                    <div class="form-row">
                        <TextField label="Full name" value=name disabled=submitting required=true />
                        <TextField label="Email" value=email input_type="email" disabled=submitting required=true />
                    </div>
                    <div class="form-row">
                        <TextField label="Phone" value=phone input_type="tel" disabled=submitting />
                        <TextField label="Area of expertise" value=expertise disabled=submitting required=true />
                    </div>
                    <TextField label="Education" value=education disabled=submitting />
                    <TextArea label="Experience" value=experience disabled=submitting />
                    <TextArea label="Why do you want to mentor?" value=message disabled=submitting />
                    <FilePicker
                        label="CV (PDF or Word)"
                        accept=".pdf,.doc,.docx"
                        file=cv
                        file_name=cv_name
                        disabled=submitting
                    />
                    <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting..." } else { "Submit Application" }}
                    </button>
                </form>
            </section>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <NotFoundCard
            title="Page Not Found"
            message="The page you are looking for does not exist."
            back_to=Route::Home
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enroll_target() {
        assert_eq!(enroll_target(None), Route::Register);
        assert_eq!(enroll_target(Some(Route::LearnerDashboard)), Route::LearnerDashboard);
    }
}
