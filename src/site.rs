use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE_COLOR: &str = "#858585";
pub const REPO_NO_DESCRIPTION: &str = "No description available for this repository.";

pub const SUBMIT_IDLE_LABEL: &str = "Send Message";
pub const SUBMIT_SENDING_LABEL: &str = "Sending...";
pub const SUBMIT_SENT_LABEL: &str = "Message Sent! ✓";
pub const STATUS_SUCCESS: &str = "I will get back to you soon.";
pub const STATUS_REJECTED: &str = "Oops! There was a problem.";
pub const STATUS_OFFLINE: &str = "Oops! Problem connecting to server.";

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub owner_name: &'static str,
    pub github_username: &'static str,
    pub contact_endpoint: &'static str,
    pub repos_endpoint: &'static str,
    pub repo_allow_list: &'static [&'static str],
    pub language_colors: &'static [(&'static str, &'static str)],
    pub navbar_hide_threshold: f64,
    pub reveal_stagger_ms: u32,
    pub controls_attach_extra_ms: u32,
    pub sent_reset_ms: u32,
    pub restore_fade_in_ms: u32,
    pub restore_unmount_ms: u32,
    pub caret_blur_hide_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Sarvesh Raam T K",
            github_username: "sarveshraam55",
            contact_endpoint: "https://formspree.io/f/portfolio-contact",
            repos_endpoint: "/api/repos",
            repo_allow_list: &[
                "College-Scholarships-Financial-Aid",
                "Threat-Modeling-Project",
                "STOCK-PREDICTION",
                "Cat-vs.-Dog-Image-Classification-Using-SVM",
                "Hand-Gesture-Recognition-for-Human-Computer-Interaction",
                "TITANIC-CLASSIFICATION",
            ],
            language_colors: &[
                ("JavaScript", "#f1e05a"),
                ("Python", "#3572A5"),
                ("Java", "#b07219"),
                ("TypeScript", "#2b7489"),
                ("HTML", "#e34c26"),
                ("CSS", "#563d7c"),
                ("C++", "#f34b7d"),
                ("C", "#555555"),
                ("Go", "#00ADD8"),
                ("Rust", "#dea584"),
                ("PHP", "#4F5D95"),
                ("Ruby", "#701516"),
                ("Swift", "#ffac45"),
                ("Kotlin", "#F18E33"),
                ("Dart", "#00B4AB"),
                ("Shell", "#89e051"),
                ("Jupyter Notebook", "#DA5B0B"),
                ("Vue", "#41b883"),
                ("React", "#61dafb"),
            ],
            navbar_hide_threshold: 100.0,
            reveal_stagger_ms: 100,
            controls_attach_extra_ms: 300,
            sent_reset_ms: 3_500,
            restore_fade_in_ms: 10,
            restore_unmount_ms: 400,
            caret_blur_hide_ms: 50,
        }
    }
}

impl SiteConfig {
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.github_username)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavbarVisibility {
    Shown,
    Hidden,
}

impl NavbarVisibility {
    /// Decision for one scroll sample: the bar hides only while scrolling
    /// down past the threshold.
    pub fn after_scroll(previous: f64, current: f64, threshold: f64) -> Self {
        if current > previous && current > threshold {
            Self::Hidden
        } else {
            Self::Shown
        }
    }

    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }
}

/// Offsets are clamped at the top so rubber-band scrolling never records a
/// negative previous sample.
pub fn clamped_offset(offset: f64) -> f64 {
    if offset <= 0.0 {
        0.0
    } else {
        offset
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardState {
    Normal,
    Minimized,
    Fullscreen,
    Closed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardEvent {
    Close,
    Minimize,
    Maximize,
    Restore,
}

impl CardState {
    pub fn apply(self, event: CardEvent) -> Self {
        match event {
            CardEvent::Close => Self::Closed,
            CardEvent::Restore => {
                if self == Self::Closed {
                    Self::Normal
                } else {
                    self
                }
            }
            CardEvent::Minimize => {
                if self == Self::Minimized {
                    Self::Normal
                } else {
                    Self::Minimized
                }
            }
            CardEvent::Maximize => {
                if self == Self::Fullscreen {
                    Self::Normal
                } else {
                    Self::Fullscreen
                }
            }
        }
    }

    pub fn card_class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Minimized => Some("card-minimized"),
            Self::Fullscreen => Some("card-fullscreen"),
            Self::Closed => Some("card-closed"),
        }
    }

    pub fn wrapper_class(self) -> Option<&'static str> {
        if self == Self::Minimized {
            Some("wrapper-minimized")
        } else {
            None
        }
    }

    pub fn shows_restore(self) -> bool {
        self == Self::Closed
    }

    pub fn hides_caret(self) -> bool {
        matches!(self, Self::Closed | Self::Minimized)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormPhase {
    Idle,
    Sending,
    Sent,
}

impl FormPhase {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => SUBMIT_IDLE_LABEL,
            Self::Sending => SUBMIT_SENDING_LABEL,
            Self::Sent => SUBMIT_SENT_LABEL,
        }
    }

    pub fn accepts_input(self) -> bool {
        self == Self::Idle
    }
}

#[derive(Clone, Deserialize)]
pub struct SubmitRejection {
    #[serde(default)]
    pub errors: Vec<SubmitError>,
}

#[derive(Clone, Deserialize)]
pub struct SubmitError {
    pub message: String,
}

/// Status line for a non-ok submission response: structured messages joined
/// with ", ", otherwise the generic rejection text.
pub fn rejection_status_text(rejection: Option<&SubmitRejection>) -> String {
    match rejection {
        Some(rejection) if !rejection.errors.is_empty() => rejection
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => STATUS_REJECTED.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub updated_at: String,
    pub html_url: String,
}

/// Keeps non-fork, non-archived repositories named on the allow-list, ordered
/// by the list's sequence rather than API order.
pub fn select_repos(repos: Vec<RepoSummary>, allow_list: &[&str]) -> Vec<RepoSummary> {
    let mut kept: Vec<RepoSummary> = repos
        .into_iter()
        .filter(|repo| {
            !repo.fork && !repo.archived && allow_list.contains(&repo.name.as_str())
        })
        .collect();

    kept.sort_by_key(|repo| allow_list.iter().position(|name| *name == repo.name));
    kept
}

pub fn language_color<'a>(
    table: &'a [(&'a str, &'a str)],
    language: Option<&str>,
) -> &'a str {
    let Some(language) = language else {
        return DEFAULT_LANGUAGE_COLOR;
    };

    table
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

pub fn format_repo_index(index: usize) -> String {
    format!("{:02}", index + 1)
}

///// "Mon YYYY" from an ISO-8601 timestamp, e.g. "2024-05-12T10:04:00Z" →
/// "May 2024". Returns None for anything that does not lead with a date.
pub fn format_updated_month_year(iso_timestamp: &str) -> Option<String> {
    let (year, rest) = iso_timestamp.split_once('-')?;
    year.parse::<u16>().ok().filter(|_| year.len() == 4)?;

    let month_digits = rest.get(0..2)?;
    let month = month_digits.parse::<usize>().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }

    Some(format!("{} {year}", MONTHS_SHORT[month - 1]))
}

/// Date text for a repository card. The slot always renders, so malformed
/// timestamps fall back to the raw value instead of dropping the span.
pub fn repo_updated_label(iso_timestamp: &str) -> String {
    format_updated_month_year(iso_timestamp).unwrap_or_else(|| iso_timestamp.to_string())
}

pub fn copyright_line(year: u32, owner_name: &str) -> String {
    format!("Copyright © {year} {owner_name}. All Rights Reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> RepoSummary {
        RepoSummary {
            name: name.to_string(),
            fork: false,
            archived: false,
            description: None,
            language: None,
            updated_at: "2024-05-12T10:04:00Z".to_string(),
            html_url: format!("https://github.com/sarveshraam55/{name}"),
        }
    }

    #[test]
    fn toggling_theme_twice_round_trips() {
        let start = Theme::Dark;
        assert_eq!(start.toggled().toggled(), start);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_theme_is_rejected() {
        assert!(Theme::from_str("solarized").is_none());
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn navbar_hides_only_on_downward_scroll_past_threshold() {
        let samples = [0.0, 50.0, 150.0, 120.0, 200.0];
        let expected = [
            NavbarVisibility::Shown,
            NavbarVisibility::Shown,
            NavbarVisibility::Hidden,
            NavbarVisibility::Shown,
            NavbarVisibility::Hidden,
        ];

        let mut previous = 0.0;
        for (sample, want) in samples.iter().zip(expected) {
            let got = NavbarVisibility::after_scroll(previous, *sample, 100.0);
            assert_eq!(got, want, "sample {sample}");
            previous = clamped_offset(*sample);
        }
    }

    #[test]
    fn negative_offsets_clamp_to_zero() {
        assert_eq!(clamped_offset(-32.0), 0.0);
        assert_eq!(clamped_offset(0.0), 0.0);
        assert_eq!(clamped_offset(12.5), 12.5);
    }

    #[test]
    fn close_then_restore_returns_to_normal_without_residue() {
        let state = CardState::Normal
            .apply(CardEvent::Close)
            .apply(CardEvent::Restore);

        assert_eq!(state, CardState::Normal);
        assert_eq!(state.card_class(), None);
        assert_eq!(state.wrapper_class(), None);
    }

    #[test]
    fn minimize_and_maximize_toggle_against_normal() {
        assert_eq!(
            CardState::Normal.apply(CardEvent::Minimize),
            CardState::Minimized
        );
        assert_eq!(
            CardState::Minimized.apply(CardEvent::Minimize),
            CardState::Normal
        );
        assert_eq!(
            CardState::Normal.apply(CardEvent::Maximize),
            CardState::Fullscreen
        );
        assert_eq!(
            CardState::Fullscreen.apply(CardEvent::Maximize),
            CardState::Normal
        );
        // Switching directly between the two toggled states never stacks them.
        assert_eq!(
            CardState::Fullscreen.apply(CardEvent::Minimize),
            CardState::Minimized
        );
    }

    #[test]
    fn restore_is_a_no_op_outside_closed() {
        assert_eq!(
            CardState::Minimized.apply(CardEvent::Restore),
            CardState::Minimized
        );
        assert_eq!(CardState::Normal.apply(CardEvent::Restore), CardState::Normal);
    }

    #[test]
    fn rapid_toggling_keeps_restore_keyed_to_current_state() {
        // minimized → normal → minimized inside the hide-delay window: the
        // deferred unmount must consult the final state, which still has no
        // claim on the restore control.
        let state = CardState::Minimized
            .apply(CardEvent::Minimize)
            .apply(CardEvent::Minimize);
        assert!(!state.shows_restore());

        // closed → normal → closed: the control must stay mounted.
        let state = CardState::Closed
            .apply(CardEvent::Restore)
            .apply(CardEvent::Close);
        assert!(state.shows_restore());
    }

    #[test]
    fn caret_is_hidden_while_closed_or_minimized() {
        assert!(CardState::Closed.hides_caret());
        assert!(CardState::Minimized.hides_caret());
        assert!(!CardState::Normal.hides_caret());
        assert!(!CardState::Fullscreen.hides_caret());
    }

    #[test]
    fn form_button_label_tracks_phase() {
        assert_eq!(FormPhase::Idle.button_label(), SUBMIT_IDLE_LABEL);
        assert_eq!(FormPhase::Sending.button_label(), SUBMIT_SENDING_LABEL);
        assert_eq!(FormPhase::Sent.button_label(), SUBMIT_SENT_LABEL);
    }

    #[test]
    fn only_idle_form_accepts_input() {
        assert!(FormPhase::Idle.accepts_input());
        assert!(!FormPhase::Sending.accepts_input());
        assert!(!FormPhase::Sent.accepts_input());
    }

    #[test]
    fn sent_form_resets_to_idle_label() {
        let reset = FormPhase::Idle;
        assert_eq!(FormPhase::Sent.button_label(), SUBMIT_SENT_LABEL);
        assert_eq!(reset.button_label(), SUBMIT_IDLE_LABEL);
        assert!(reset.accepts_input());
    }

    #[test]
    fn rejection_text_joins_structured_messages() {
        let rejection = SubmitRejection {
            errors: vec![
                SubmitError {
                    message: "Bad email".to_string(),
                },
            ],
        };
        assert_eq!(rejection_status_text(Some(&rejection)), "Bad email");

        let rejection = SubmitRejection {
            errors: vec![
                SubmitError {
                    message: "Bad email".to_string(),
                },
                SubmitError {
                    message: "Missing name".to_string(),
                },
            ],
        };
        assert_eq!(
            rejection_status_text(Some(&rejection)),
            "Bad email, Missing name"
        );
    }

    #[test]
    fn rejection_text_falls_back_to_generic_message() {
        assert_eq!(rejection_status_text(None), STATUS_REJECTED);

        let empty = SubmitRejection { errors: Vec::new() };
        assert_eq!(rejection_status_text(Some(&empty)), STATUS_REJECTED);
    }

    #[test]
    fn select_repos_keeps_only_allow_listed_names() {
        let config = SiteConfig::default();
        let repos = vec![repo("Unlisted"), repo("STOCK-PREDICTION")];

        let selected = select_repos(repos, config.repo_allow_list);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "STOCK-PREDICTION");
    }

    #[test]
    fn select_repos_drops_forks_and_archived() {
        let mut forked = repo("STOCK-PREDICTION");
        forked.fork = true;
        let mut archived = repo("TITANIC-CLASSIFICATION");
        archived.archived = true;

        let config = SiteConfig::default();
        let selected = select_repos(vec![forked, archived], config.repo_allow_list);
        assert!(selected.is_empty());
    }

    #[test]
    fn select_repos_orders_by_allow_list_not_input() {
        let config = SiteConfig::default();
        let repos = vec![
            repo("TITANIC-CLASSIFICATION"),
            repo("College-Scholarships-Financial-Aid"),
            repo("STOCK-PREDICTION"),
        ];

        let selected = select_repos(repos, config.repo_allow_list);
        let names: Vec<&str> = selected.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "College-Scholarships-Financial-Aid",
                "STOCK-PREDICTION",
                "TITANIC-CLASSIFICATION",
            ]
        );
    }

    #[test]
    fn language_colors_resolve_with_gray_default() {
        let config = SiteConfig::default();
        assert_eq!(
            language_color(config.language_colors, Some("Python")),
            "#3572A5"
        );
        assert_eq!(
            language_color(config.language_colors, Some("COBOL")),
            DEFAULT_LANGUAGE_COLOR
        );
        assert_eq!(
            language_color(config.language_colors, None),
            DEFAULT_LANGUAGE_COLOR
        );
    }

    #[test]
    fn repo_indexes_render_two_digits() {
        assert_eq!(format_repo_index(0), "01");
        assert_eq!(format_repo_index(9), "10");
    }

    #[test]
    fn updated_dates_render_short_month_and_year() {
        assert_eq!(
            format_updated_month_year("2024-05-12T10:04:00Z").as_deref(),
            Some("May 2024")
        );
        assert_eq!(
            format_updated_month_year("2023-12-01T00:00:00Z").as_deref(),
            Some("Dec 2023")
        );
        assert_eq!(format_updated_month_year("not a date"), None);
        assert_eq!(format_updated_month_year("2024-13-01T00:00:00Z"), None);
    }

    #[test]
    fn updated_label_falls_back_to_raw_timestamp() {
        assert_eq!(repo_updated_label("2024-05-12T10:04:00Z"), "May 2024");
        assert_eq!(repo_updated_label("not a date"), "not a date");
    }

    #[test]
    fn copyright_line_contains_year_and_owner() {
        let config = SiteConfig::default();
        assert_eq!(
            copyright_line(2026, config.owner_name),
            "Copyright © 2026 Sarvesh Raam T K. All Rights Reserved."
        );
    }

    #[test]
    fn default_config_allow_list_has_six_entries() {
        let config = SiteConfig::default();
        assert_eq!(config.repo_allow_list.len(), 6);
        assert_eq!(config.navbar_hide_threshold, 100.0);
    }

    #[test]
    fn repo_summary_decodes_a_github_shaped_payload() {
        let raw = r#"{
            "name": "STOCK-PREDICTION",
            "fork": false,
            "archived": false,
            "description": null,
            "language": "Jupyter Notebook",
            "updated_at": "2024-05-12T10:04:00Z",
            "html_url": "https://github.com/sarveshraam55/STOCK-PREDICTION",
            "stargazers_count": 4
        }"#;

        let decoded: RepoSummary = serde_json::from_str(raw).expect("payload decodes");
        assert_eq!(decoded.language.as_deref(), Some("Jupyter Notebook"));
        assert!(decoded.description.is_none());
    }
}
