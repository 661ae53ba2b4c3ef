use chrono::{DateTime, Local};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::RecommendError;
use crate::song::Song;

pub const FETCH_FAILED_MESSAGE: &str =
    "음악을 추천받는 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

/// Preset themes offered before the first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum ThemeTag {
    #[strum(to_string = "비오는 창가")]
    RainyWindow,
    #[strum(to_string = "영국 브릿팝")]
    BritPop,
    #[strum(to_string = "일본 시티팝")]
    CityPop,
    #[strum(to_string = "뉴욕 재즈 바")]
    JazzBar,
    #[strum(to_string = "힙합 바이브")]
    HipHop,
    #[strum(to_string = "성수동 카페")]
    SeongsuCafe,
    #[strum(to_string = "한강 산책")]
    HanRiverWalk,
}

impl ThemeTag {
    pub fn all() -> Vec<ThemeTag> {
        ThemeTag::iter().collect()
    }
}

/// What the main area is showing. Only one can be true at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        theme: String,
    },
    Results {
        theme: String,
        songs: Vec<Song>,
        selected: usize,
        fetched_at: DateTime<Local>,
    },
    Error {
        message: String,
    },
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Notification {
    pub message: String,
    pub remaining_ticks: u8,
    pub is_error: bool,
}

impl Notification {
    pub fn info(msg: impl Into<String>) -> Self {
        Notification { message: msg.into(), remaining_ticks: 30, is_error: false }
    }
    pub fn error(msg: impl Into<String>) -> Self {
        Notification { message: msg.into(), remaining_ticks: 40, is_error: true }
    }
}

pub struct AppState {
    pub input: String,
    pub editing: bool,
    pub phase: Phase,
    pub has_searched: bool,
    pub last_theme: Option<String>,
    pub selected_tag: usize,
    pub notification: Option<Notification>,
    pub show_help: bool,
    pub should_quit: bool,
    pub eq_bars: [u8; 24],
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            input: String::new(),
            editing: true,
            phase: Phase::Idle,
            has_searched: false,
            last_theme: None,
            selected_tag: 0,
            notification: None,
            show_help: false,
            should_quit: false,
            eq_bars: [4, 6, 8, 5, 7, 9, 4, 6, 8, 5, 7, 6, 4, 8, 5, 7, 9, 3, 6, 8, 5, 7, 4, 6],
            tick: 0,
        }
    }
}

impl AppState {
    pub fn can_submit(&self) -> bool {
        !self.phase.is_loading() && !self.input.trim().is_empty()
    }

    /// Moves to `Loading` with the current input and returns the theme to fetch.
    /// Returns `None` (and changes nothing) for blank input or while loading.
    pub fn begin_search(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let theme = self.input.clone();
        debug!("phase -> Loading ({theme:?})");
        self.phase = Phase::Loading { theme: theme.clone() };
        self.editing = false;
        Some(theme)
    }

    /// Re-issues the last successful theme. Only valid from `Results`.
    pub fn begin_refresh(&mut self) -> Option<String> {
        if !matches!(self.phase, Phase::Results { .. }) {
            return None;
        }
        let theme = self.last_theme.clone()?;
        debug!("phase -> Loading (refresh {theme:?})");
        self.phase = Phase::Loading { theme: theme.clone() };
        Some(theme)
    }

    /// Applies the result of the in-flight request. Ignored unless loading.
    pub fn complete(&mut self, outcome: Result<Vec<Song>, RecommendError>) {
        let Phase::Loading { theme } = &self.phase else {
            debug!("dropping outcome that arrived outside Loading");
            return;
        };
        let theme = theme.clone();
        match outcome {
            Ok(songs) => {
                debug!("phase -> Results ({} songs)", songs.len());
                self.has_searched = true;
                self.last_theme = Some(theme.clone());
                self.phase = Phase::Results {
                    theme,
                    songs,
                    selected: 0,
                    fetched_at: Local::now(),
                };
            }
            Err(_) => {
                debug!("phase -> Error");
                self.phase = Phase::Error { message: FETCH_FAILED_MESSAGE.to_string() };
            }
        }
    }

    /// Starts over from a blank idle screen.
    pub fn reset(&mut self) {
        *self = AppState::default();
    }

    pub fn can_refresh(&self) -> bool {
        self.has_searched && matches!(self.phase, Phase::Results { .. })
    }

    pub fn songs(&self) -> &[Song] {
        match &self.phase {
            Phase::Results { songs, .. } => songs,
            _ => &[],
        }
    }

    pub fn selected_song(&self) -> Option<&Song> {
        match &self.phase {
            Phase::Results { songs, selected, .. } => songs.get(*selected),
            _ => None,
        }
    }

    /// Moves the card selection by `delta`, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if let Phase::Results { songs, selected, .. } = &mut self.phase {
            let max = songs.len().saturating_sub(1) as isize;
            *selected = (*selected as isize + delta).clamp(0, max) as usize;
        }
    }

    pub fn move_tag(&mut self, delta: isize) {
        let max = ThemeTag::all().len() as isize - 1;
        self.selected_tag = (self.selected_tag as isize + delta).clamp(0, max) as usize;
    }

    /// Copies a preset theme into the input. Does not submit.
    pub fn pick_tag(&mut self, index: usize) {
        if let Some(tag) = ThemeTag::all().get(index) {
            self.selected_tag = index;
            self.input = tag.to_string();
        }
    }

    pub fn set_notification(&mut self, n: Notification) {
        self.notification = Some(n);
    }

    pub fn tick_notification(&mut self) {
        if let Some(ref mut n) = self.notification {
            if n.remaining_ticks > 0 {
                n.remaining_ticks -= 1;
            } else {
                self.notification = None;
            }
        }
    }

    /// Bars bounce while a request is in flight and settle otherwise.
    pub fn update_eq_bars(&mut self) {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        self.tick += 1;
        if self.phase.is_loading() {
            for bar in self.eq_bars.iter_mut() {
                let delta: i8 = rng.gen_range(-3..=3);
                *bar = (*bar as i8 + delta).clamp(1, 12) as u8;
            }
        } else {
            for bar in self.eq_bars.iter_mut() {
                if *bar > 1 {
                    *bar -= 1;
                }
            }
        }
    }
}
