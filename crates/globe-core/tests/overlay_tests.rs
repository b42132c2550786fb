// Host-side tests for the detail overlay, decorative view-model and summary
// fallbacks.

use globe_core::*;
use instant::Instant;
use std::time::Duration;

fn album(images: usize, message: Option<&str>) -> Album {
    Album {
        id: "1".to_string(),
        author: "Ms. K".to_string(),
        avatar_url: String::new(),
        message: message.map(str::to_string),
        images: (0..images).map(|i| format!("img-{i}")).collect(),
        timestamp: String::new(),
        category: Category::Event,
    }
}

#[test]
fn album_without_images_shows_default() {
    let c = Carousel::for_album(&album(0, None));
    assert_eq!(c.len(), 1);
    assert!(!c.is_empty());
    assert_eq!(c.current(), DETAIL_DEFAULT_IMAGE_URL);
    assert!(!c.has_navigation());
}

#[test]
fn next_cycles_back_to_first() {
    for n in 1..=5 {
        let mut c = Carousel::for_album(&album(n, None));
        let first = c.current().to_string();
        for _ in 0..n {
            c.next();
        }
        assert_eq!(c.current(), first, "n = {n}");
        assert_eq!(c.index(), 0);
    }
}

#[test]
fn prev_wraps_to_last() {
    let mut c = Carousel::for_album(&album(3, None));
    c.prev();
    assert_eq!(c.index(), 2);
    assert_eq!(c.current(), "img-2");
    c.next();
    assert_eq!(c.index(), 0);
}

#[test]
fn opening_resets_carousel() {
    let mut o = DetailOverlay::default();
    o.open(0, &album(3, None));
    o.carousel_mut().next();
    o.open(1, &album(3, None));
    assert_eq!(o.carousel().index(), 0);
    assert_eq!(o.album_index(), Some(1));
}

#[test]
fn close_finishes_after_exit_transition() {
    let mut o = DetailOverlay::default();
    let t0 = Instant::now();
    assert!(!o.request_close(t0), "nothing to close yet");

    o.open(2, &album(1, Some("hi")));
    assert!(o.is_visible());
    assert!(o.request_close(t0));
    assert!(!o.is_visible());
    assert!(!o.request_close(t0), "already closing");

    assert!(!o.poll_closed(t0 + Duration::from_millis(100)));
    assert_eq!(o.album_index(), Some(2));
    assert!(o.poll_closed(t0 + Duration::from_millis(OVERLAY_EXIT_MS)));
    assert_eq!(o.album_index(), None);
    assert_eq!(o.phase(), OverlayPhase::Hidden);
    assert!(!o.poll_closed(t0 + Duration::from_secs(1)));
}

#[test]
fn globe_stays_paused_until_close_finishes() {
    let mut o = DetailOverlay::default();
    let mut g = GlobeState::default();
    let t0 = Instant::now();

    o.open(0, &album(2, None));
    assert!(!g.tick(o.album_index().is_some()));
    o.request_close(t0);
    assert!(!g.tick(o.album_index().is_some()), "paused during exit");

    assert!(o.poll_closed(t0 + Duration::from_millis(OVERLAY_EXIT_MS)));
    assert!(g.tick(o.album_index().is_some()));
    assert_eq!(g.rotation, AUTOPLAY_STEP_RAD);
}

#[test]
fn detail_card_applies_fallbacks() {
    let card = DetailCard::for_album(&album(1, None));
    assert_eq!(card.author, "Ms. K");
    assert_eq!(card.avatar_url, AVATAR_FALLBACK_URL);
    assert_eq!(card.timestamp, UNKNOWN_TIMESTAMP);
    assert_eq!(card.message, NO_MESSAGE_TEXT);
    assert!(!card.has_message);
    assert_eq!(card.category, "event");

    let card = DetailCard::for_album(&album(1, Some("Dance rehearsal!")));
    assert!(card.has_message);
    assert!(card.message.contains("Dance rehearsal!"));
}

#[test]
fn decor_pans_with_rotation() {
    let still = DecorFrame::at(0.0);
    assert_eq!(still.surface_pan_pct, 0.0);
    assert_eq!(still.cloud_spin_deg, 0.0);

    let half = DecorFrame::at(std::f32::consts::PI);
    assert!((half.surface_pan_pct + 50.0).abs() < 1e-3);
    assert!((half.cloud_pan_pct + 60.0).abs() < 1e-3);
    assert!((half.cloud_spin_deg - 198.0).abs() < 1e-2);
    assert!((half.ring_spin_deg - 180.0).abs() < 1e-3);
}

#[test]
fn ring_glyphs_are_evenly_spaced() {
    let glyphs = ring_glyphs("ABCD");
    assert_eq!(glyphs.len(), 4);
    assert_eq!(glyphs[1].ch, 'B');
    assert_eq!(glyphs[1].angle_deg, 90.0);
    assert_eq!(glyphs[3].angle_deg, 270.0);
    assert!(ring_glyphs("").is_empty());

    let ring = ring_glyphs(RING_TEXT);
    assert_eq!(ring.len(), RING_TEXT.chars().count());
}

#[test]
fn starfield_is_seeded_and_in_range() {
    let a = starfield(STAR_COUNT, STAR_SEED);
    let b = starfield(STAR_COUNT, STAR_SEED);
    assert_eq!(a, b);
    assert_eq!(a.len(), STAR_COUNT);
    for s in &a {
        assert!((0.0..100.0).contains(&s.left_pct));
        assert!((1.0..4.0).contains(&s.width_px));
        assert!((0.3..=1.0).contains(&s.opacity));
    }
}

struct Canned(Result<&'static str, &'static str>);

impl SummaryBackend for Canned {
    fn generate(&self, prompt: &str) -> Result<String, SummaryError> {
        assert!(prompt.contains("Joy Pulse"));
        self.0
            .map(str::to_string)
            .map_err(|e| SummaryError::Unavailable(e.to_string()))
    }
}

#[test]
fn summary_falls_back_without_key() {
    assert_eq!(summarize(None, &[]), MISSING_KEY_TEXT);
}

#[test]
fn summary_maps_failures_to_fixed_text() {
    let albums = vec![album(1, Some("Taco Tuesday"))];
    assert_eq!(summarize(Some(&Canned(Err("offline"))), &albums), FAILURE_TEXT);
    assert_eq!(summarize(Some(&Canned(Ok("  "))), &albums), EMPTY_REPLY_TEXT);
    assert_eq!(summarize(Some(&Canned(Ok("Joy!"))), &albums), "Joy!");
}

#[test]
fn prompt_lists_only_albums_with_messages() {
    let albums = vec![album(1, Some("Taco Tuesday")), album(2, None)];
    let digest = message_digest(&albums);
    assert_eq!(digest, "- \"Taco Tuesday\" by Ms. K");
    assert!(build_prompt(&albums).contains(&digest));
}
