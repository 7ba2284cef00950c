//! Profile Pages
//!
//! Shared profile editor; learners also get their certificates.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EmptyState, FilePicker, Link, Loading, TextArea, TextField};
use crate::context::use_session;
use crate::download::certificate_file_name;
use crate::forms::FormBuilder;
use crate::hooks::use_remote;
use crate::models::Certificate;
use crate::pages::shared::save_pdf;
use crate::routes::Route;
use crate::store::use_toasts;

#[component]
fn ProfileForm() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let user = session.user();
    let field = |pick: fn(&crate::models::User) -> Option<String>| {
        RwSignal::new(user.as_ref().and_then(pick).unwrap_or_default())
    };
    let username = field(|u| Some(u.username.clone()));
    let first_name = field(|u| Some(u.first_name.clone()));
    let last_name = field(|u| Some(u.last_name.clone()));
    let location = field(|u| u.location.clone());
    let bio = field(|u| u.bio.clone());
    let email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let picture = StoredValue::new_local(None::<web_sys::File>);
    let picture_name = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = FormBuilder::multipart()
            .text("username", username.get_untracked())
            .text("firstName", first_name.get_untracked())
            .text("lastName", last_name.get_untracked())
            .text("location", location.get_untracked())
            .text("bio", bio.get_untracked())
            .file("profilePicture", picture.get_value())
            .build();
        saving.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.update_profile(&payload).await {
                Ok(updated) => {
                    session.set_user(updated);
                    toasts.success("Profile updated successfully!");
                    let _ = picture.try_update_value(|file| *file = None);
                    let _ = picture_name.try_set(None);
                }
                Err(err) => session.report(&err, "Failed to update profile."),
            }
            let _ = saving.try_set(false);
        });
    };

    let avatar = move || {
        session
            .user()
            .and_then(|u| u.profile_picture_url)
            .filter(|path| !path.is_empty())
            .map(|path| view! { <img class="avatar avatar-large" src=session.asset_url(&path) alt="Profile picture" /> })
    };

    view! {
        <form class="card form-card profile-form" on:submit=on_submit>
            <div class="profile-header">
                {avatar}
                <span class="muted">{email}</span>
            </div>
            <FilePicker label="Profile picture" accept="image/*" file=picture file_name=picture_name disabled=saving />
            <TextField label="Username" value=username disabled=saving />
            <div class="form-row">
                <TextField label="First name" value=first_name disabled=saving />
                <TextField label="Last name" value=last_name disabled=saving />
            </div>
            <TextField label="Location" value=location disabled=saving />
            <TextArea label="Bio" value=bio disabled=saving />
            <button class="btn btn-primary" type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
            </button>
        </form>
    }
}

#[component]
pub fn AdminProfilePage() -> impl IntoView {
    view! {
        <section class="page">
            <div class="page-header">
                <h1 class="page-title">"Profile"</h1>
                <Link to=Route::ChangePassword class="btn btn-secondary">"Change Password"</Link>
            </div>
            <ProfileForm />
        </section>
    }
}

#[component]
pub fn LearnerProfilePage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let certificates =
        use_remote(|api| async move { api.my_certificates().await }, "Failed to load certificates.");
    let downloading = RwSignal::new(None::<u32>);

    let download = move |certificate: Certificate| {
        if downloading.get_untracked().is_some() {
            return;
        }
        let learner = session.user().map(|u| u.full_name()).unwrap_or_default();
        downloading.set(Some(certificate.id));
        let api = session.api();
        spawn_local(async move {
            match api.certificate_pdf(&learner, &certificate).await {
                Ok(bytes) => save_pdf(toasts, &bytes, &certificate_file_name(&certificate.course_name)),
                Err(err) => session.report(&err, "Failed to download certificate."),
            }
            let _ = downloading.try_set(None);
        });
    };

    view! {
        <section class="page">
            <h1 class="page-title">"My Profile"</h1>
            <ProfileForm />
            <div class="card">
                <h2>"My Certificates"</h2>
                {move || {
                    if certificates.is_loading() {
                        return view! { <Loading label="Loading certificates..." /> }.into_any();
                    }
                    let list = certificates.value();
                    if list.is_empty() {
                        return view! { <EmptyState message="Complete a course to earn your first certificate." /> }
                            .into_any();
                    }
                    view! {
                        <ul class="certificate-list">
                            {list
                                .into_iter()
                                .map(|certificate| {
                                    let id = certificate.id;
                                    let course = certificate.course_name.clone();
                                    let issued = certificate.issued_date.get(..10).unwrap_or(certificate.issued_date.as_str()).to_string();
                                    view! {
                                        <li class="certificate-item">
                                            <div>
                                                <strong>{course}</strong>
                                                <span class="muted">{format!("Issued {}", issued)}</span>
                                            </div>
                                            <button
                                                class="btn btn-secondary btn-small"
                                                disabled=move || downloading.get().is_some()
                                                on:click=move |_| download(certificate.clone())
                                            >
                                                {move || if downloading.get() == Some(id) { "Downloading..." } else { "Download" }}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </div>
        </section>
    }
}
