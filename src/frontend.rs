use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Element, FormData, HtmlElement, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, Range, ScrollBehavior,
    ScrollToOptions, Storage, SubmitEvent,
};
use yew::prelude::*;

use crate::site::{
    self, CardEvent, CardState, FormPhase, NavbarVisibility, RepoSummary, SiteConfig,
    SubmitRejection, Theme,
};

const THEME_KEY: &str = "theme";

const CODE_LINES: [&str; 8] = [
    "const developer = {",
    "  name: 'Sarvesh Raam T K',",
    "  focus: ['ML', 'Security', 'Web'],",
    "  location: 'Chennai, India',",
    "",
    "  currentlyLearning: 'Rust',",
    "  openToWork: true,",
    "};",
];

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_theme() -> Option<Theme> {
    let value = local_storage()?.get_item(THEME_KEY).ok().flatten()?;
    Theme::from_str(&value)
}

fn resolve_theme() -> Theme {
    read_stored_theme().unwrap_or_default()
}

fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn handle_anchor_click(event: &MouseEvent, href: &str, navbar_ref: &NodeRef) {
    let Some(fragment) = href.strip_prefix('#') else {
        return;
    };

    if fragment.is_empty() {
        event.prevent_default();
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    // Unknown fragment: let the browser's default navigation happen.
    let Some(target) = document.get_element_by_id(fragment) else {
        return;
    };

    event.prevent_default();
    let nav_height = navbar_ref
        .cast::<HtmlElement>()
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(0.0);
    scroll_to_element(&target, nav_height);
}

fn scroll_to_element(target: &Element, nav_height: f64) {
    let Some(window) = window() else {
        return;
    };

    let page_offset = window.page_y_offset().unwrap_or(0.0);
    let top = target.get_bounding_client_rect().top() + page_offset - nav_height;

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    config: SiteConfig,
    theme: Theme,
    on_toggle_theme: Callback<MouseEvent>,
    navbar_ref: NodeRef,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let visibility = use_state_eq(|| NavbarVisibility::Shown);
    let last_offset = use_mut_ref(|| 0.0f64);

    {
        let visibility = visibility.clone();
        let last_offset = last_offset.clone();
        let threshold = props.config.navbar_hide_threshold;
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut()>::new(move || {
                let Some(window) = window() else {
                    return;
                };
                let offset = window.page_y_offset().unwrap_or(0.0);
                let previous = *last_offset.borrow();
                visibility.set(NavbarVisibility::after_scroll(previous, offset, threshold));
                *last_offset.borrow_mut() = site::clamped_offset(offset);
            });

            if let Some(window) = window() {
                let _ = window
                    .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let anchor = |href: &'static str, label: &'static str| -> Html {
        let navbar_ref = props.navbar_ref.clone();
        let onclick =
            Callback::from(move |event: MouseEvent| handle_anchor_click(&event, href, &navbar_ref));
        html! {
            <a class="nav-link" href={href} onclick={onclick}>{label}</a>
        }
    };

    html! {
        <nav
            ref={props.navbar_ref.clone()}
            class={classes!("navbar", visibility.is_hidden().then_some("hidden"))}
        >
            <a class="nav-brand" href="#" onclick={{
                let navbar_ref = props.navbar_ref.clone();
                Callback::from(move |event: MouseEvent| handle_anchor_click(&event, "#", &navbar_ref))
            }}>
                {"SR"}
            </a>
            <div class="nav-links">
                { anchor("#about", "About") }
                { anchor("#projects", "Projects") }
                { anchor("#contact", "Contact") }
            </div>
            <button
                id="theme-toggle"
                class="theme-toggle"
                type="button"
                aria-label={props.theme.toggle_label()}
                aria-pressed={props.theme.pressed().to_string()}
                onclick={props.on_toggle_theme.clone()}
            >
                <span aria-hidden="true">{props.theme.icon()}</span>
            </button>
        </nav>
    }
}

#[derive(Clone, PartialEq)]
enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Properties, PartialEq)]
struct ContactFormProps {
    config: SiteConfig,
}

#[function_component(ContactForm)]
fn contact_form(props: &ContactFormProps) -> Html {
    let phase = use_state_eq(|| FormPhase::Idle);
    let status = use_state_eq(|| None::<(StatusKind, String)>);
    let form_ref = use_node_ref();

    let onsubmit = {
        let phase = phase.clone();
        let status = status.clone();
        let form_ref = form_ref.clone();
        let endpoint = props.config.contact_endpoint;
        let reset_ms = props.config.sent_reset_ms;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if *phase != FormPhase::Idle {
                return;
            }

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let Ok(fields) = FormData::new_with_form(&form) else {
                return;
            };

            phase.set(FormPhase::Sending);
            status.set(None);

            let phase = phase.clone();
            let status = status.clone();
            spawn_local(async move {
                let request = Request::post(endpoint)
                    .header("Accept", "application/json")
                    .body(fields);

                let sent = match request {
                    Ok(request) => request.send().await,
                    Err(_) => {
                        status.set(Some((StatusKind::Error, site::STATUS_OFFLINE.to_string())));
                        phase.set(FormPhase::Idle);
                        return;
                    }
                };

                match sent {
                    Ok(response) if response.ok() => {
                        form.reset();
                        phase.set(FormPhase::Sent);
                        status.set(Some((
                            StatusKind::Success,
                            site::STATUS_SUCCESS.to_string(),
                        )));

                        let phase = phase.clone();
                        Timeout::new(reset_ms, move || phase.set(FormPhase::Idle)).forget();
                    }
                    Ok(response) => {
                        let rejection = response.json::<SubmitRejection>().await.ok();
                        status.set(Some((
                            StatusKind::Error,
                            site::rejection_status_text(rejection.as_ref()),
                        )));
                        phase.set(FormPhase::Idle);
                    }
                    Err(_) => {
                        status.set(Some((StatusKind::Error, site::STATUS_OFFLINE.to_string())));
                        phase.set(FormPhase::Idle);
                    }
                }
            });
        })
    };

    let phase_value = *phase;
    let (status_class, status_text) = match &*status {
        Some((kind, text)) => (Some(kind.css_class()), text.clone()),
        None => (None, String::new()),
    };

    html! {
        <form
            id="contact-form"
            ref={form_ref}
            action={props.config.contact_endpoint}
            method="POST"
            onsubmit={onsubmit}
        >
            <label class="form-field">
                {"Name"}
                <input type="text" name="name" required={true} autocomplete="name" />
            </label>
            <label class="form-field">
                {"Email"}
                <input type="email" name="email" required={true} autocomplete="email" />
            </label>
            <label class="form-field">
                {"Message"}
                <textarea name="message" rows="5" required={true}></textarea>
            </label>
            <button
                class={classes!(
                    "btn-submit",
                    (phase_value == FormPhase::Sending).then_some("sending"),
                    (phase_value == FormPhase::Sent).then_some("sent"),
                )}
                type="submit"
                style={(!phase_value.accepts_input()).then_some("pointer-events: none;")}
            >
                <span class="btn-content">{phase_value.button_label()}</span>
            </button>
            <p id="form-status" class={classes!("form-status", status_class)} role="status">
                {status_text}
            </p>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct EditorCardProps {
    config: SiteConfig,
}

#[function_component(EditorCard)]
fn editor_card(props: &EditorCardProps) -> Html {
    let revealed = use_state_eq(|| false);
    let controls_enabled = use_state_eq(|| false);
    let card_state = use_state_eq(|| CardState::Normal);
    // Mirror of the current state readable from deferred timers without
    // capturing a stale handle.
    let live_state = use_mut_ref(|| CardState::Normal);
    let restore_mounted = use_state_eq(|| false);
    let restore_visible = use_state_eq(|| false);

    let card_ref = use_node_ref();
    let body_ref = use_node_ref();
    let cursor_ref = use_node_ref();

    // Reveal on first viewport intersection, then arm the controls once the
    // stagger has played out.
    {
        let card_ref = card_ref.clone();
        let revealed = revealed.clone();
        let controls_enabled = controls_enabled.clone();
        let stagger_ms = props.config.reveal_stagger_ms;
        let extra_ms = props.config.controls_attach_extra_ms;
        use_effect_with((), move |_| {
            let mut teardown_observer: Option<IntersectionObserver> = None;

            if let Some(element) = card_ref.cast::<Element>() {
                let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> =
                    Rc::new(RefCell::new(None));
                let observer_for_callback = observer_slot.clone();

                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, _: IntersectionObserver| {
                        let intersecting = entries.iter().any(|entry| {
                            entry
                                .dyn_ref::<IntersectionObserverEntry>()
                                .is_some_and(|entry| entry.is_intersecting())
                        });
                        if !intersecting {
                            return;
                        }

                        revealed.set(true);

                        let total_ms = stagger_ms * CODE_LINES.len() as u32 + extra_ms;
                        let controls_enabled = controls_enabled.clone();
                        Timeout::new(total_ms, move || controls_enabled.set(true)).forget();

                        // Fires once only.
                        if let Some(observer) = observer_for_callback.borrow_mut().take() {
                            observer.disconnect();
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(0.3));

                if let Ok(observer) = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    observer.observe(&element);
                    *observer_slot.borrow_mut() = Some(observer.clone());
                    teardown_observer = Some(observer);
                }

                callback.forget();
            }

            move || {
                if let Some(observer) = teardown_observer {
                    observer.disconnect();
                }
            }
        });
    }

    let dispatch = {
        let card_state = card_state.clone();
        let live_state = live_state.clone();
        let restore_mounted = restore_mounted.clone();
        let restore_visible = restore_visible.clone();
        let fade_in_ms = props.config.restore_fade_in_ms;
        let unmount_ms = props.config.restore_unmount_ms;
        Callback::from(move |event: CardEvent| {
            let next = live_state.borrow().apply(event);
            *live_state.borrow_mut() = next;
            card_state.set(next);

            if next.shows_restore() {
                restore_mounted.set(true);
                let restore_visible = restore_visible.clone();
                Timeout::new(fade_in_ms, move || restore_visible.set(true)).forget();
            } else {
                restore_visible.set(false);
                // The unmount is deferred past the fade; re-check the live
                // state so rapid re-closing keeps the control mounted.
                let live_state = live_state.clone();
                let restore_mounted = restore_mounted.clone();
                Timeout::new(unmount_ms, move || {
                    if !live_state.borrow().shows_restore() {
                        restore_mounted.set(false);
                    }
                })
                .forget();
            }
        })
    };

    let dot_handler = |event: CardEvent| -> Callback<MouseEvent> {
        let dispatch = dispatch.clone();
        let controls_enabled = controls_enabled.clone();
        Callback::from(move |mouse_event: MouseEvent| {
            mouse_event.stop_propagation();
            if *controls_enabled {
                dispatch.emit(event);
            }
        })
    };

    let on_close = dot_handler(CardEvent::Close);
    let on_minimize = dot_handler(CardEvent::Minimize);
    let on_maximize = dot_handler(CardEvent::Maximize);
    let on_restore = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(CardEvent::Restore))
    };

    // Caret overlay wiring: activity inside the body re-positions the block
    // cursor on the next animation frame; window scroll/resize re-sync it
    // directly.
    {
        let card_ref = card_ref.clone();
        let body_ref = body_ref.clone();
        let cursor_ref = cursor_ref.clone();
        let live_state = live_state.clone();
        let blur_hide_ms = props.config.caret_blur_hide_ms;
        use_effect_with((), move |_| {
            if let Some(body) = body_ref.cast::<HtmlElement>() {
                let update: Rc<dyn Fn()> = {
                    let card_ref = card_ref.clone();
                    let body_ref = body_ref.clone();
                    let cursor_ref = cursor_ref.clone();
                    let live_state = live_state.clone();
                    Rc::new(move || {
                        sync_caret_overlay(&card_ref, &body_ref, &cursor_ref, *live_state.borrow());
                    })
                };

                let deferred = {
                    let update = update.clone();
                    Closure::<dyn FnMut()>::new(move || {
                        let update = update.clone();
                        let frame = Closure::once_into_js(move || update());
                        if let Some(window) = window() {
                            let _ = window.request_animation_frame(frame.as_ref().unchecked_ref());
                        }
                    })
                };
                for event_name in [
                    "keyup", "keydown", "mousedown", "mouseup", "click", "input", "focus",
                ] {
                    let _ = body.add_event_listener_with_callback(
                        event_name,
                        deferred.as_ref().unchecked_ref(),
                    );
                }

                let direct = {
                    let update = update.clone();
                    Closure::<dyn FnMut()>::new(move || update())
                };
                if let Some(window) = window() {
                    let _ = window
                        .add_event_listener_with_callback("scroll", direct.as_ref().unchecked_ref());
                    let _ = window
                        .add_event_listener_with_callback("resize", direct.as_ref().unchecked_ref());
                }

                let on_blur = {
                    let body_ref = body_ref.clone();
                    let cursor_ref = cursor_ref.clone();
                    Closure::<dyn FnMut()>::new(move || {
                        let body_ref = body_ref.clone();
                        let cursor_ref = cursor_ref.clone();
                        Timeout::new(blur_hide_ms, move || {
                            let (Some(body), Some(cursor)) =
                                (body_ref.cast::<HtmlElement>(), cursor_ref.cast::<HtmlElement>())
                            else {
                                return;
                            };

                            let focus_left = window()
                                .and_then(|w| w.document())
                                .and_then(|d| d.active_element())
                                .map_or(true, |active| {
                                    let active_node: &web_sys::Node = active.as_ref();
                                    !body.contains(Some(active_node))
                                });
                            if focus_left {
                                let _ = cursor.style().set_property("display", "none");
                            }
                        })
                        .forget();
                    })
                };
                let _ = body
                    .add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());

                deferred.forget();
                direct.forget();
                on_blur.forget();
            }

            || ()
        });
    }

    // State changes hide or re-place the cursor immediately.
    {
        let card_ref = card_ref.clone();
        let body_ref = body_ref.clone();
        let cursor_ref = cursor_ref.clone();
        use_effect_with(*card_state, move |state| {
            sync_caret_overlay(&card_ref, &body_ref, &cursor_ref, *state);
            || ()
        });
    }

    let reduced_motion = prefers_reduced_motion();
    let stagger_ms = props.config.reveal_stagger_ms;
    let lines = CODE_LINES
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let delay_ms = if reduced_motion {
                0
            } else {
                index as u32 * stagger_ms
            };
            html! {
                <div
                    class={classes!("code-line", (*revealed).then_some("is-visible"))}
                    style={format!("transition-delay: {delay_ms}ms;")}
                >
                    <code>{*line}</code>
                </div>
            }
        })
        .collect::<Html>();

    let state = *card_state;
    html! {
        <div class={classes!("creative-card-wrapper", state.wrapper_class())}>
            <div
                ref={card_ref}
                class={classes!("about-creative-card", state.card_class())}
            >
                <div class="creative-card-header">
                    <div class="card-dots">
                        <span class="card-dot red" onclick={on_close}></span>
                        <span class="card-dot yellow" onclick={on_minimize}></span>
                        <span class="card-dot green" onclick={on_maximize}></span>
                    </div>
                    <span class="card-title">{"about_me.js"}</span>
                </div>
                <div ref={body_ref} class="creative-card-body" tabindex="0">
                    { lines }
                </div>
                <span ref={cursor_ref} class="card-block-cursor" aria-hidden="true">{"▋"}</span>
            </div>
            {
                restore_mounted.then(|| html! {
                    <button
                        type="button"
                        class={classes!("card-restore-btn", (*restore_visible).then_some("visible"))}
                        onclick={on_restore}
                    >
                        {"Reopen editor"}
                    </button>
                })
            }
        </div>
    }
}

fn sync_caret_overlay(
    card_ref: &NodeRef,
    body_ref: &NodeRef,
    cursor_ref: &NodeRef,
    state: CardState,
) {
    let (Some(card), Some(body), Some(cursor)) = (
        card_ref.cast::<HtmlElement>(),
        body_ref.cast::<HtmlElement>(),
        cursor_ref.cast::<HtmlElement>(),
    ) else {
        return;
    };

    if state.hides_caret() {
        let _ = cursor.style().set_property("display", "none");
        return;
    }

    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let selection = window.get_selection().ok().flatten();
    let selected_range = selection.as_ref().and_then(|selection| {
        let anchored_in_body = selection
            .anchor_node()
            .is_some_and(|node| body.contains(Some(&node)));
        if selection.range_count() > 0 && anchored_in_body {
            selection.get_range_at(0).ok()
        } else {
            None
        }
    });

    // Without a selection inside the body, the cursor sits at the end of the
    // content.
    let range = match selected_range {
        Some(range) => range,
        None => {
            let Ok(range) = document.create_range() else {
                return;
            };
            if range.select_node_contents(&body).is_err() {
                return;
            }
            range.collapse_with_to_start(false);
            range
        }
    };

    let Some((left, top)) = first_range_corner(&document, &range) else {
        let _ = cursor.style().set_property("display", "none");
        return;
    };

    let card_rect = card.get_bounding_client_rect();
    let style = cursor.style();
    let _ = style.set_property("left", &format!("{}px", left - card_rect.left()));
    let _ = style.set_property("top", &format!("{}px", top - card_rect.top()));
    let _ = style.set_property("display", "inline-block");
}

/// Top-left corner of the range's first client rect, inserting and removing a
/// zero-width marker when the range has no rects (empty lines).
fn first_range_corner(document: &web_sys::Document, range: &Range) -> Option<(f64, f64)> {
    if let Some(rects) = range.get_client_rects() {
        if rects.length() > 0 {
            let rect = rects.item(0)?;
            return Some((rect.left(), rect.top()));
        }
    }

    let marker = document.create_element("span").ok()?;
    let zero_width = document.create_text_node("\u{200b}");
    marker.append_child(&zero_width).ok()?;
    range.insert_node(&marker).ok()?;

    let rect = marker.get_bounding_client_rect();
    if let Some(parent) = marker.parent_node() {
        let _ = parent.remove_child(&marker);
    }

    Some((rect.left(), rect.top()))
}

#[derive(Clone, PartialEq)]
enum RepoFetch {
    Loading,
    Loaded(Vec<RepoSummary>),
    Failed,
}

#[derive(Properties, PartialEq)]
struct RepoListProps {
    config: SiteConfig,
}

#[function_component(RepoList)]
fn repo_list(props: &RepoListProps) -> Html {
    let repos = use_state_eq(|| RepoFetch::Loading);

    {
        let repos = repos.clone();
        let endpoint = props.config.repos_endpoint;
        let allow_list = props.config.repo_allow_list;
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_repo_list(endpoint).await {
                    Ok(fetched) => {
                        repos.set(RepoFetch::Loaded(site::select_repos(fetched, allow_list)));
                    }
                    Err(()) => repos.set(RepoFetch::Failed),
                }
            });
            || ()
        });
    }

    match &*repos {
        RepoFetch::Loading => html! {
            <p class="loading">{"Loading repositories..."}</p>
        },
        RepoFetch::Failed => html! {
            <div class="loading">
                {"Unable to load repositories. Please visit my "}
                <a
                    href={props.config.profile_url()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"GitHub profile"}
                </a>
                {" directly."}
            </div>
        },
        RepoFetch::Loaded(selected) if selected.is_empty() => html! {
            <p class="loading">{"No repositories found."}</p>
        },
        RepoFetch::Loaded(selected) => selected
            .iter()
            .enumerate()
            .map(|(index, repo)| repo_card(&props.config, index, repo))
            .collect(),
    }
}

async fn fetch_repo_list(endpoint: &str) -> Result<Vec<RepoSummary>, ()> {
    let response = Request::get(endpoint)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|_| ())?;

    if !response.ok() {
        return Err(());
    }

    response.json::<Vec<RepoSummary>>().await.map_err(|_| ())
}

fn repo_card(config: &SiteConfig, index: usize, repo: &RepoSummary) -> Html {
    let color = site::language_color(config.language_colors, repo.language.as_deref());
    let updated = site::repo_updated_label(&repo.updated_at);
    let description = repo
        .description
        .clone()
        .unwrap_or_else(|| site::REPO_NO_DESCRIPTION.to_string());

    let onclick = {
        let url = repo.html_url.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        })
    };

    html! {
        <div class="repo-expand-item" key={repo.name.clone()} onclick={onclick}>
            <div class="repo-title-bar">
                <span class="repo-num">{site::format_repo_index(index)}</span>
                <div class="repo-path">{"src/repos/"}<span>{repo.name.to_lowercase()}</span></div>
                <span class="expand-icon-plus">{"+"}</span>
            </div>
            <div class="repo-expand-content">
                <div class="repo-content-inner">
                    <div class="repo-line-numbers">{"1"}<br/>{"2"}<br/>{"3"}<br/>{"4"}</div>
                    <div class="repo-details">
                        <h3 class="repo-name-mini">{repo.name.clone()}</h3>
                        <p class="repo-description-mini">{description}</p>
                        <div class="repo-meta-mini">
                            {
                                repo.language.as_ref().map(|language| html! {
                                    <span class="repo-lang">
                                        <span
                                            class="lang-dot"
                                            style={format!("background-color: {color}")}
                                        ></span>
                                        {language.clone()}
                                    </span>
                                })
                            }
                            <span class="repo-date-mini">{updated}</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    config: SiteConfig,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <p class="copyright">
                { site::copyright_line(current_year(), props.config.owner_name) }
            </p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let theme = use_state_eq(resolve_theme);
    let navbar_ref = use_node_ref();

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            apply_theme(next);
            persist_theme(next);
            theme.set(next);
        })
    };

    html! {
        <>
            <Navbar
                config={props.config}
                theme={*theme}
                on_toggle_theme={on_toggle_theme}
                navbar_ref={navbar_ref}
            />
            <main>
                <section id="about" class="section-block">
                    <h2>{"About"}</h2>
                    <EditorCard config={props.config} />
                </section>
                <section id="projects" class="section-block">
                    <h2>{"Projects"}</h2>
                    <div id="github-repos" class="repo-list">
                        <RepoList config={props.config} />
                    </div>
                </section>
                <section id="contact" class="section-block">
                    <h2>{"Contact"}</h2>
                    <ContactForm config={props.config} />
                </section>
            </main>
            <Footer config={props.config} />
        </>
    }
}

pub fn run() {
    let config = SiteConfig::default();

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps { config },
    )
    .render();
}
