#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use unicode_width::UnicodeWidthStr;

    use crate::app::state::{AppState, Notification, Phase, ThemeTag, FETCH_FAILED_MESSAGE};
    use crate::app::App;
    use crate::config::{parse_mix, Config};
    use crate::error::RecommendError;
    use crate::events::{map_key_to_action, UserAction};
    use crate::gemini::{GeminiClient, GenerateContentRequest, GenerateContentResponse};
    use crate::recommend::prompt::{build_prompt, response_schema, MixPolicy};
    use crate::recommend::{parse_songs, RecommendationProvider};
    use crate::song::{rank_label, Song};
    use crate::ui::components::results::{grid_columns, vibe_heading};
    use crate::ui::components::song_card::truncate_to_width;

    // ── Fixtures ─────────────────────────────────────────────────────────────

    fn sample_songs(n: usize) -> Vec<Song> {
        (0..n)
            .map(|i| Song {
                title: format!("Track {i}"),
                artist: format!("Artist {i}"),
                reason: "Steady tempo for the ride".to_string(),
                country: Some(if i < 3 { "Korea" } else { "USA" }.to_string()),
                is_korean: i < 3,
            })
            .collect()
    }

    #[derive(Clone, Copy)]
    enum Reply {
        Songs(usize),
        Fail,
    }

    struct FakeProvider {
        calls: Arc<Mutex<Vec<String>>>,
        reply: Reply,
    }

    impl FakeProvider {
        fn new(reply: Reply) -> (Self, Arc<Mutex<Vec<String>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            (FakeProvider { calls: calls.clone(), reply }, calls)
        }
    }

    #[async_trait]
    impl RecommendationProvider for FakeProvider {
        async fn recommend(&self, theme: &str) -> Result<Vec<Song>, RecommendError> {
            self.calls.lock().unwrap().push(theme.to_string());
            match self.reply {
                Reply::Songs(n) => Ok(sample_songs(n)),
                Reply::Fail => Err(RecommendError::Provider { status: 503, body: "unavailable".into() }),
            }
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text<P: RecommendationProvider + 'static>(app: &mut App<P>, text: &str) {
        for c in text.chars() {
            app.handle_action(UserAction::Input(c));
        }
    }

    /// Screen text row by row. The filler cell after a wide glyph is dropped
    /// so Hangul reads back as it was written.
    fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| crate::ui::render(f, state)).unwrap();
        let mut screen = String::new();
        let mut skip = 0;
        for cell in terminal.backend().buffer().content() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = cell.symbol();
            screen.push_str(symbol);
            skip = symbol.width().saturating_sub(1);
        }
        screen
    }

    async fn finish_fetch<P: RecommendationProvider + 'static>(app: &mut App<P>) {
        let outcome = app.next_outcome().await.unwrap();
        app.apply_outcome(outcome);
    }

    // ── Song ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_video_search_url_encodes_artist_then_title() {
        let song = Song {
            title: "A".into(),
            artist: "B".into(),
            reason: String::new(),
            country: None,
            is_korean: false,
        };
        assert_eq!(song.video_search_url(), "https://www.youtube.com/results?search_query=B%20A");
    }

    #[test]
    fn test_video_search_url_korean() {
        let song = Song {
            title: "밤편지".into(),
            artist: "아이유".into(),
            reason: String::new(),
            country: None,
            is_korean: true,
        };
        let url = song.video_search_url();
        let query = url.strip_prefix("https://www.youtube.com/results?search_query=").unwrap();
        assert!(!query.contains(' '));
        assert_eq!(urlencoding::decode(query).unwrap(), "아이유 밤편지");
    }

    #[test]
    fn test_origin_badge() {
        let mut song = sample_songs(1).remove(0);
        assert_eq!(song.origin_badge(), "Korea");
        song.country = Some("  ".into());
        assert_eq!(song.origin_badge(), "국내");
        song.country = None;
        song.is_korean = false;
        assert_eq!(song.origin_badge(), "해외");
    }

    #[test]
    fn test_rank_label_is_one_based_and_padded() {
        assert_eq!(rank_label(0), "01");
        assert_eq!(rank_label(6), "07");
        assert_eq!(rank_label(11), "12");
    }

    // ── Payload parsing ──────────────────────────────────────────────────────

    #[test]
    fn test_parse_seven_songs_in_order() {
        let payload = json!({ "songs": sample_songs(7) }).to_string();
        let songs = parse_songs(&payload).unwrap();
        assert_eq!(songs, sample_songs(7));
    }

    #[test]
    fn test_parse_missing_songs_is_empty() {
        assert!(parse_songs("{}").unwrap().is_empty());
        assert!(parse_songs(r#"{"songs": null}"#).unwrap().is_empty());
        assert!(parse_songs("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_without_country() {
        let payload = r#"{"songs":[{"title":"T","artist":"A","reason":"R","isKorean":true}]}"#;
        let songs = parse_songs(payload).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].country, None);
        assert!(songs[0].is_korean);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(parse_songs("not json"), Err(RecommendError::MalformedPayload(_))));
        // isKorean is required
        let missing = r#"{"songs":[{"title":"T","artist":"A","reason":"R"}]}"#;
        assert!(matches!(parse_songs(missing), Err(RecommendError::MalformedPayload(_))));
        let wrong_type = r#"{"songs":[{"title":1,"artist":"A","reason":"R","isKorean":false}]}"#;
        assert!(parse_songs(wrong_type).is_err());
    }

    // ── Prompt & schema ──────────────────────────────────────────────────────

    #[test]
    fn test_prompt_embeds_theme_and_count() {
        let prompt = build_prompt("비오는 창가", MixPolicy::Global);
        assert!(prompt.contains("\"비오는 창가\""));
        assert!(prompt.contains("exactly 7 songs"));
        assert!(prompt.contains("2 or 3 Korean"));
        assert!(prompt.contains("in Korean"));
    }

    #[test]
    fn test_prompt_korean_focus_ratio() {
        let prompt = build_prompt("jazz", MixPolicy::KoreanFocus);
        assert!(prompt.contains("Constraint 1: 5 songs must be Korean"));
        assert!(prompt.contains("Constraint 2: 2 songs must be International"));
        assert!(!prompt.contains("Constraint 4"));
    }

    #[test]
    fn test_schema_country_only_for_global() {
        let global = response_schema(MixPolicy::Global);
        let items = &global["properties"]["songs"]["items"];
        assert_eq!(items["required"], json!(["title", "artist", "reason", "country", "isKorean"]));
        assert_eq!(items["properties"]["isKorean"]["type"], "BOOLEAN");
        assert_eq!(global["required"], json!(["songs"]));

        let focus = response_schema(MixPolicy::KoreanFocus);
        let items = &focus["properties"]["songs"]["items"];
        assert_eq!(items["required"], json!(["title", "artist", "reason", "isKorean"]));
        assert!(items["properties"].get("country").is_none());
    }

    // ── Config ───────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_mix() {
        assert_eq!(parse_mix("korean-focus"), MixPolicy::KoreanFocus);
        assert_eq!(parse_mix(" global "), MixPolicy::Global);
        assert_eq!(parse_mix("bogus"), MixPolicy::Global);
        assert_eq!(MixPolicy::KoreanFocus.to_string(), "korean-focus");
    }

    // ── Gemini wire format ───────────────────────────────────────────────────

    #[test]
    fn test_request_body_shape() {
        let schema = response_schema(MixPolicy::Global);
        let body = serde_json::to_value(GenerateContentRequest::json("hello", schema.clone())).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "{\"songs\":" }, { "text": "[]}" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(resp.text(), "{\"songs\":[]}");

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn test_generate_url() {
        let config = Config {
            api_key: String::new(),
            model: "gemini-3-flash-preview".into(),
            endpoint: "https://example.test/v1beta/".into(),
            mix: MixPolicy::Global,
        };
        let client = GeminiClient::new(&config);
        assert_eq!(
            client.generate_url(),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    // ── AppState transitions ─────────────────────────────────────────────────

    #[test]
    fn test_blank_theme_does_not_start_search() {
        let mut state = AppState::default();
        assert_eq!(state.begin_search(), None);
        state.input = "   \t ".into();
        assert!(!state.can_submit());
        assert_eq!(state.begin_search(), None);
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_begin_search_keeps_exact_input() {
        let mut state = AppState::default();
        state.input = " 비오는 창가 ".into();
        assert_eq!(state.begin_search().as_deref(), Some(" 비오는 창가 "));
        assert!(state.phase.is_loading());
        // submit is disabled while loading
        assert!(!state.can_submit());
        assert_eq!(state.begin_search(), None);
    }

    #[test]
    fn test_success_moves_to_results() {
        let mut state = AppState::default();
        state.input = "비오는 창가".into();
        state.begin_search();
        state.complete(Ok(sample_songs(7)));

        match &state.phase {
            Phase::Results { theme, songs, selected, .. } => {
                assert_eq!(theme, "비오는 창가");
                assert_eq!(songs, &sample_songs(7));
                assert_eq!(*selected, 0);
            }
            other => panic!("expected results, got {other:?}"),
        }
        assert!(state.has_searched);
        assert_eq!(state.last_theme.as_deref(), Some("비오는 창가"));
        assert!(vibe_heading("비오는 창가").contains("비오는 창가"));
    }

    #[test]
    fn test_failure_moves_to_error() {
        let mut state = AppState::default();
        state.input = "jazz".into();
        state.begin_search();
        state.complete(Err(RecommendError::Provider { status: 500, body: String::new() }));
        assert_eq!(state.phase, Phase::Error { message: FETCH_FAILED_MESSAGE.to_string() });
        assert!(!state.has_searched);
    }

    #[test]
    fn test_error_after_results_replaces_view() {
        let mut state = AppState::default();
        state.input = "jazz".into();
        state.begin_search();
        state.complete(Ok(sample_songs(7)));
        state.begin_search();
        state.complete(Err(RecommendError::Provider { status: 500, body: String::new() }));
        assert!(matches!(state.phase, Phase::Error { .. }));
        assert!(state.songs().is_empty());
        // has_searched never goes back
        assert!(state.has_searched);
    }

    #[test]
    fn test_outcome_outside_loading_is_ignored() {
        let mut state = AppState::default();
        state.complete(Ok(sample_songs(7)));
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.has_searched);
    }

    #[test]
    fn test_refresh_reuses_results_theme() {
        let mut state = AppState::default();
        assert_eq!(state.begin_refresh(), None);

        state.input = "city pop".into();
        state.begin_search();
        state.complete(Ok(sample_songs(7)));
        state.input = "something else".into();
        assert!(state.can_refresh());
        assert_eq!(state.begin_refresh().as_deref(), Some("city pop"));
        assert_eq!(state.phase, Phase::Loading { theme: "city pop".into() });
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut state = AppState::default();
        state.input = "jazz".into();
        state.begin_search();
        state.complete(Ok(sample_songs(2)));
        state.reset();
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.has_searched);
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = AppState::default();
        state.input = "jazz".into();
        state.begin_search();
        state.complete(Ok(sample_songs(7)));
        state.move_selection(-3);
        assert_eq!(state.selected_song().map(|s| s.title.as_str()), Some("Track 0"));
        state.move_selection(10);
        assert_eq!(state.selected_song().map(|s| s.title.as_str()), Some("Track 6"));
    }

    #[test]
    fn test_pick_tag_fills_input_only() {
        let mut state = AppState::default();
        state.pick_tag(0);
        assert_eq!(state.input, "비오는 창가");
        assert_eq!(state.phase, Phase::Idle);
        state.pick_tag(99);
        assert_eq!(state.input, "비오는 창가");
        assert_eq!(ThemeTag::all().len(), 7);
        assert_eq!(ThemeTag::HanRiverWalk.to_string(), "한강 산책");
    }

    #[test]
    fn test_notification_tick_decrements() {
        let mut state = AppState::default();
        state.set_notification(Notification::info("hello"));
        // remaining_ticks=30: takes 30 ticks to reach 0, then 1 more tick to clear
        for _ in 0..31 {
            state.tick_notification();
        }
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_eq_bars_bounded_while_loading() {
        let mut state = AppState::default();
        state.phase = Phase::Loading { theme: "x".into() };
        for _ in 0..50 {
            state.update_eq_bars();
        }
        for &bar in state.eq_bars.iter() {
            assert!((1..=12).contains(&bar), "bar value {bar} out of range [1, 12]");
        }
    }

    // ── Key mapping ──────────────────────────────────────────────────────────

    #[test]
    fn test_editing_keys_are_text() {
        assert_eq!(map_key_to_action(key(KeyCode::Char('q')), true), Some(UserAction::Input('q')));
        assert_eq!(map_key_to_action(key(KeyCode::Enter), true), Some(UserAction::Submit));
        assert_eq!(map_key_to_action(key(KeyCode::Esc), true), Some(UserAction::Back));
        let clear = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(map_key_to_action(clear, true), Some(UserAction::InputClear));
    }

    #[test]
    fn test_normal_mode_keys() {
        assert_eq!(map_key_to_action(key(KeyCode::Char('q')), false), Some(UserAction::Quit));
        assert_eq!(map_key_to_action(key(KeyCode::Char('3')), false), Some(UserAction::PickTag(2)));
        assert_eq!(map_key_to_action(key(KeyCode::Char('8')), false), None);
        assert_eq!(map_key_to_action(key(KeyCode::Char('r')), false), Some(UserAction::Refresh));
        assert_eq!(map_key_to_action(key(KeyCode::Char('R')), false), Some(UserAction::Retry));
        assert_eq!(map_key_to_action(key(KeyCode::Char('/')), false), Some(UserAction::FocusInput));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_to_action(ctrl_c, true), Some(UserAction::Quit));
        assert_eq!(map_key_to_action(ctrl_c, false), Some(UserAction::Quit));
    }

    // ── App + provider ───────────────────────────────────────────────────────

    #[test]
    fn test_provider_usable_as_trait_object() {
        let (fake, calls) = FakeProvider::new(Reply::Songs(7));
        let provider: Box<dyn RecommendationProvider> = Box::new(fake);
        let songs = tokio_test::block_on(provider.recommend("rain")).unwrap();
        assert_eq!(songs.len(), 7);
        assert_eq!(*calls.lock().unwrap(), vec!["rain".to_string()]);
    }

    #[tokio::test]
    async fn test_submit_calls_provider_once_and_shows_results() {
        let (fake, calls) = FakeProvider::new(Reply::Songs(7));
        let mut app = App::new(fake);
        type_text(&mut app, "비오는 창가");
        app.handle_action(UserAction::Submit);
        assert!(app.state.phase.is_loading());

        let outcome = app.next_outcome().await.unwrap();
        app.apply_outcome(outcome);

        assert_eq!(*calls.lock().unwrap(), vec!["비오는 창가".to_string()]);
        assert_eq!(app.state.songs().len(), 7);
        assert_eq!(app.state.songs()[6].title, "Track 6");
        assert!(matches!(&app.state.phase, Phase::Results { theme, .. } if theme == "비오는 창가"));
    }

    #[tokio::test]
    async fn test_whitespace_submit_makes_no_call() {
        let (fake, calls) = FakeProvider::new(Reply::Songs(7));
        let mut app = App::new(fake);
        type_text(&mut app, "   ");
        app.handle_action(UserAction::Submit);

        let waited = tokio::time::timeout(Duration::from_millis(50), app.next_outcome()).await;
        assert!(waited.is_err());
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(app.state.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_second_submit_while_loading_is_ignored() {
        let (fake, calls) = FakeProvider::new(Reply::Songs(7));
        let mut app = App::new(fake);
        type_text(&mut app, "jazz");
        app.handle_action(UserAction::Submit);
        app.handle_action(UserAction::Submit);

        let outcome = app.next_outcome().await.unwrap();
        app.apply_outcome(outcome);
        let waited = tokio::time::timeout(Duration::from_millis(50), app.next_outcome()).await;
        assert!(waited.is_err());
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_shows_error_then_retry_resets() {
        let (fake, _calls) = FakeProvider::new(Reply::Fail);
        let mut app = App::new(fake);
        type_text(&mut app, "jazz");
        app.handle_action(UserAction::Submit);
        let outcome = app.next_outcome().await.unwrap();
        app.apply_outcome(outcome);
        assert_eq!(app.state.phase, Phase::Error { message: FETCH_FAILED_MESSAGE.to_string() });

        app.handle_action(UserAction::Retry);
        assert_eq!(app.state.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_retry_is_refused_while_loading() {
        let (fake, _calls) = FakeProvider::new(Reply::Songs(7));
        let mut app = App::new(fake);
        type_text(&mut app, "jazz");
        app.handle_action(UserAction::Submit);
        app.handle_action(UserAction::Retry);
        assert!(app.state.phase.is_loading());

        let outcome = app.next_outcome().await.unwrap();
        app.apply_outcome(outcome);
        assert_eq!(app.state.songs().len(), 7);
    }

    #[tokio::test]
    async fn test_enter_on_idle_submits_typed_theme() {
        let (fake, calls) = FakeProvider::new(Reply::Songs(7));
        let mut app = App::new(fake);
        type_text(&mut app, "my own vibe");

        for code in [KeyCode::Esc, KeyCode::Enter] {
            let action = map_key_to_action(key(code), app.state.editing).unwrap();
            app.handle_action(action);
        }
        assert!(!app.state.editing);
        assert!(app.state.phase.is_loading());
        assert_eq!(app.state.input, "my own vibe");

        finish_fetch(&mut app).await;
        assert_eq!(*calls.lock().unwrap(), vec!["my own vibe".to_string()]);
        assert_eq!(app.state.input, "my own vibe");
    }

    #[tokio::test]
    async fn test_enter_on_results_opens_selected_link() {
        let (fake, _calls) = FakeProvider::new(Reply::Songs(7));
        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = opened.clone();
        let mut app = App::new(fake).with_opener(Box::new(move |url: &str| {
            sink.lock().unwrap().push(url.to_string());
            Ok(())
        }));
        type_text(&mut app, "jazz");
        app.handle_action(UserAction::Submit);
        finish_fetch(&mut app).await;

        app.handle_action(UserAction::NavigateDown);
        app.handle_action(UserAction::Select);

        assert_eq!(*opened.lock().unwrap(), vec![sample_songs(7)[1].video_search_url()]);
        let toast = app.state.notification.as_ref().unwrap();
        assert!(!toast.is_error);
        assert!(matches!(app.state.phase, Phase::Results { .. }));
    }

    #[tokio::test]
    async fn test_failed_link_open_shows_error_toast() {
        let (fake, _calls) = FakeProvider::new(Reply::Songs(7));
        let mut app = App::new(fake)
            .with_opener(Box::new(|_: &str| Err(std::io::Error::other("no browser"))));
        type_text(&mut app, "jazz");
        app.handle_action(UserAction::Submit);
        finish_fetch(&mut app).await;

        app.handle_action(UserAction::OpenLink);
        assert!(app.state.notification.as_ref().unwrap().is_error);
        assert!(matches!(app.state.phase, Phase::Results { .. }));
    }

    #[tokio::test]
    async fn test_enter_on_error_starts_over() {
        let (fake, calls) = FakeProvider::new(Reply::Fail);
        let mut app = App::new(fake);
        type_text(&mut app, "jazz");
        app.handle_action(UserAction::Submit);
        finish_fetch(&mut app).await;
        assert!(matches!(app.state.phase, Phase::Error { .. }));

        app.handle_action(UserAction::Select);
        assert_eq!(app.state.phase, Phase::Idle);
        assert!(app.state.input.is_empty());
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_enter_on_idle_with_blank_input_does_nothing() {
        let (fake, calls) = FakeProvider::new(Reply::Songs(7));
        let mut app = App::new(fake);
        type_text(&mut app, "   ");
        app.handle_action(UserAction::Back);
        app.handle_action(UserAction::Select);

        assert_eq!(app.state.phase, Phase::Idle);
        assert!(tokio::time::timeout(Duration::from_millis(50), app.next_outcome()).await.is_err());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_arrows_on_idle_pick_tags() {
        let (fake, calls) = FakeProvider::new(Reply::Songs(7));
        let mut app = App::new(fake);
        app.state.editing = false;
        app.handle_action(UserAction::NavigateRight);
        assert_eq!(app.state.input, "영국 브릿팝");
        app.handle_action(UserAction::PickTag(6));
        assert_eq!(app.state.input, "한강 산책");
        assert_eq!(app.state.phase, Phase::Idle);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_payload_shows_zero_cards() {
        let (fake, _calls) = FakeProvider::new(Reply::Songs(0));
        let mut app = App::new(fake);
        type_text(&mut app, "jazz");
        app.handle_action(UserAction::Submit);
        let outcome = app.next_outcome().await.unwrap();
        app.apply_outcome(outcome);
        assert!(matches!(app.state.phase, Phase::Results { .. }));
        assert!(app.state.songs().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_reissues_last_theme() {
        let (fake, calls) = FakeProvider::new(Reply::Songs(7));
        let mut app = App::new(fake);
        type_text(&mut app, "city pop");
        app.handle_action(UserAction::Submit);
        let outcome = app.next_outcome().await.unwrap();
        app.apply_outcome(outcome);

        app.handle_action(UserAction::Refresh);
        assert!(app.state.phase.is_loading());
        let outcome = app.next_outcome().await.unwrap();
        app.apply_outcome(outcome);

        assert_eq!(*calls.lock().unwrap(), vec!["city pop".to_string(), "city pop".to_string()]);
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    #[test]
    fn test_results_render_heading_and_cards() {
        let mut state = AppState::default();
        state.input = "rainy window".into();
        state.begin_search();
        state.complete(Ok(sample_songs(7)));
        state.editing = false;

        let screen = render_to_string(&state, 140, 40);
        assert!(screen.contains("VIBE: \"rainy window\""));
        assert_eq!(screen.matches("Stream Beat").count(), 7);
        assert!(screen.contains("Track 6"));
    }

    #[test]
    fn test_hangul_theme_renders_in_heading() {
        let mut state = AppState::default();
        state.input = "비오는 창가".into();
        state.begin_search();
        state.complete(Ok(sample_songs(7)));

        let screen = render_to_string(&state, 140, 40);
        assert!(screen.contains("VIBE: \"비오는 창가\""));
        assert_eq!(screen.matches("Stream Beat").count(), 7);
    }

    #[test]
    fn test_zero_song_subtitle_keeps_fixed_count() {
        let mut state = AppState::default();
        state.input = "jazz".into();
        state.begin_search();
        state.complete(Ok(Vec::new()));

        let screen = render_to_string(&state, 140, 40);
        assert!(screen.contains("7가지 선율입니다."));
        assert!(!screen.contains("0가지"));
        assert_eq!(screen.matches("Stream Beat").count(), 0);
    }

    #[test]
    fn test_error_and_idle_render() {
        let mut state = AppState::default();
        assert!(render_to_string(&state, 120, 30).contains("ELECTRIC"));

        state.phase = Phase::Error { message: FETCH_FAILED_MESSAGE.to_string() };
        assert!(render_to_string(&state, 120, 30).contains("CURATION FAILED."));
    }

    #[test]
    fn test_grid_columns_follow_width() {
        assert_eq!(grid_columns(20), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(140), 4);
        assert_eq!(grid_columns(400), 4);
    }

    #[test]
    fn test_truncate_to_width_counts_wide_chars() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        // each hangul syllable is two columns wide
        assert_eq!(truncate_to_width("비오는창가", 5), "비오…");
    }
}
