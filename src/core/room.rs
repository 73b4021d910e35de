use crate::camera::{Camera, CameraRig};
use crate::constants::*;
use crate::core::balloons::Balloon;
use crate::core::build::{build_scene, SceneHandles};
use crate::core::effects::{BurstPool, Flame, SparklePool};
use crate::core::messages::{MessageDeck, MessagePage};
use crate::core::scene::{Hit, Interaction, Scene};
use crate::core::timers::{TimerKind, Timers};
use crate::input::DragTracker;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

/// Startup parameters for the room. Pool sizes are fixed for the page lifetime.
#[derive(Clone, Debug)]
pub struct RoomConfig {
    pub messages: Vec<String>,
    pub balloon_count: usize,
    pub candle_count: usize,
    pub burst_count: usize,
    pub sparkle_count: usize,
    pub star_count: usize,
    /// Text under the photo frame.
    pub photo_caption: String,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            messages: vec![
                "Thank you for being the light in my life. You make every day feel magical.".into(),
                "My favorite memories are the ones we create together. I cherish every laugh and every adventure.".into(),
                "My wish for you: endless joy, gentle days, and a heart that always feels loved.".into(),
            ],
            balloon_count: BALLOON_COUNT,
            candle_count: CANDLE_COUNT,
            burst_count: BURST_COUNT,
            sparkle_count: SPARKLE_COUNT,
            star_count: STAR_COUNT,
            photo_caption: "Our Memories".into(),
            seed: None,
        }
    }
}

/// One-way instructions for the DOM overlay bridge.
#[derive(Clone, Debug, PartialEq)]
pub enum UiCommand {
    ShowMessage,
    HideMessage,
    /// Take the hidden overlay out of layout once its fade has finished.
    CollapseMessage,
    MessagePage(MessagePage),
    ShowWish,
    HideWish,
    PlayMusic,
    SetMuted(bool),
    FadeLoadingScreen,
    HideLoadingScreen,
}

/// The whole interactive scene: graph, animation state and interaction flags.
///
/// Event handlers and the per-frame `advance` both mutate this in place; they
/// never run concurrently.
pub struct Room {
    pub scene: Scene,
    pub handles: SceneHandles,
    pub rig: CameraRig,
    pub balloons: Vec<Balloon>,
    pub flames: Vec<Flame>,
    pub burst: BurstPool,
    pub sparkles: SparklePool,
    pub deck: MessageDeck,
    pub timers: Timers,
    pub drag: DragTracker,
    pub candles_lit: bool,
    pub message_open: bool,
    pub release_in_progress: bool,
    pub wish_visible: bool,
    pub music_muted: bool,
    pub aspect: f32,
    pub(crate) rng: StdRng,
    ui: Vec<UiCommand>,
}

impl Room {
    pub fn new(config: RoomConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (mut scene, handles) = build_scene(&config, &mut rng);
        let balloons = handles
            .balloons
            .iter()
            .map(|&node| Balloon::new(node, &mut scene, &mut rng))
            .collect();
        let flames = handles.flames.iter().map(|&node| Flame::new(node)).collect();
        let burst = BurstPool::new(handles.burst_group, &handles.burst);
        let sparkles = SparklePool::new(handles.sparkle_group, &handles.sparkles);
        let deck = MessageDeck::new(config.messages);

        let mut timers = Timers::default();
        timers.schedule(TimerKind::FadeLoading, LOADING_FADE_DELAY_MS);

        let ui = vec![UiCommand::MessagePage(deck.page()), UiCommand::SetMuted(false)];

        Self {
            scene,
            handles,
            rig: CameraRig::default(),
            balloons,
            flames,
            burst,
            sparkles,
            deck,
            timers,
            drag: DragTracker::default(),
            candles_lit: true,
            message_open: false,
            release_in_progress: false,
            wish_visible: false,
            music_muted: false,
            aspect: 16.0 / 9.0,
            rng,
            ui,
        }
    }

    pub fn drain_ui(&mut self) -> Vec<UiCommand> {
        std::mem::take(&mut self.ui)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn camera(&self) -> Camera {
        self.rig.camera(self.aspect)
    }

    // ---------------- Picking ----------------

    pub fn pick(&self, ndc: Vec2) -> SmallVec<[Hit; 8]> {
        let (origin, dir) = self.camera().ray_through_ndc(ndc);
        self.scene.raycast(origin, dir)
    }

    /// Mouse click on the surface. Swallowed once after a drag gesture.
    pub fn click(&mut self, ndc: Vec2, now_ms: f64) {
        if self.drag.take_click_suppression() {
            log::debug!("[input] click suppressed after drag");
            return;
        }
        self.tap(ndc, now_ms);
    }

    /// Touch end or click that already passed drag filtering.
    pub fn tap(&mut self, ndc: Vec2, now_ms: f64) {
        let hits = self.pick(ndc);
        self.handle_hits(&hits, now_ms);
    }

    pub fn handle_hits(&mut self, hits: &[Hit], now_ms: f64) {
        if hits.is_empty() {
            return;
        }
        let hit_gift = hits.iter().any(|h| h.interaction == Interaction::Gift);
        let hit_cake = hits.iter().any(|h| h.interaction == Interaction::Cake);
        if hit_gift {
            self.trigger_gift(now_ms);
        }
        if hit_cake {
            self.toggle_candles(now_ms);
        }
    }

    // ---------------- Gift and message ----------------

    /// Zoom to the gift, throw confetti, start the music and queue the message.
    /// No-op while zooming or while the message is open.
    pub fn trigger_gift(&mut self, now_ms: f64) -> bool {
        if self.rig.is_zooming() || self.message_open {
            return false;
        }
        log::info!("[gift] opening");
        self.timers.cancel(TimerKind::ResumeOrbit);
        self.rig.auto_orbit = false;
        self.rig.begin_zoom(now_ms);

        let origin = self.scene.world_position(self.handles.gift);
        self.burst
            .trigger(&mut self.scene, origin, seconds(now_ms), &mut self.rng);

        self.ui.push(UiCommand::PlayMusic);
        self.timers
            .schedule(TimerKind::OpenMessage, now_ms + MESSAGE_OPEN_DELAY_MS);
        true
    }

    pub fn open_message(&mut self) -> bool {
        if self.message_open {
            return false;
        }
        self.message_open = true;
        self.timers.cancel(TimerKind::CollapseMessage);
        self.ui.push(UiCommand::ShowMessage);
        true
    }

    /// Hide the overlay and ease the camera back onto its orbit.
    pub fn close_message(&mut self, now_ms: f64) -> bool {
        if !self.message_open {
            return false;
        }
        self.message_open = false;
        self.ui.push(UiCommand::HideMessage);
        self.timers
            .schedule(TimerKind::CollapseMessage, now_ms + MESSAGE_COLLAPSE_DELAY_MS);
        self.rig.begin_return(now_ms);
        true
    }

    pub fn change_message(&mut self, direction: i32) -> bool {
        if !self.deck.change(direction) {
            return false;
        }
        self.ui.push(UiCommand::MessagePage(self.deck.page()));
        true
    }

    // ---------------- Cake ----------------

    pub fn toggle_candles(&mut self, now_ms: f64) {
        self.candles_lit = !self.candles_lit;
        log::info!("[cake] candles lit: {}", self.candles_lit);
        for flame in &mut self.flames {
            flame.set_lit(self.candles_lit);
        }
        self.sparkles
            .trigger(&mut self.scene, seconds(now_ms), &mut self.rng);
        self.wish_visible = true;
        self.ui.push(UiCommand::ShowWish);
        self.timers
            .schedule(TimerKind::HideWish, now_ms + WISH_VISIBLE_MS);
    }

    // ---------------- Balloons ----------------

    /// Let every floating balloon go. Ignored while a release is in flight.
    pub fn release_balloons(&mut self, now_ms: f64) -> bool {
        if self.release_in_progress {
            return false;
        }
        self.release_in_progress = true;
        let mut released = 0;
        for balloon in &mut self.balloons {
            if balloon.release(&mut self.rng) {
                released += 1;
            }
        }
        log::info!("[balloons] released {}", released);
        self.timers
            .schedule(TimerKind::ResetBalloons, now_ms + BALLOON_RESET_DELAY_MS);
        true
    }

    // ---------------- Music ----------------

    pub fn toggle_music(&mut self) {
        self.music_muted = !self.music_muted;
        self.ui.push(UiCommand::SetMuted(self.music_muted));
    }

    // ---------------- Orbit drag ----------------

    fn orbit_resumable(&self) -> bool {
        self.rig.is_orbiting() && !self.message_open
    }

    pub fn pointer_down(&mut self, x: f32) -> bool {
        if !self.orbit_resumable() {
            return false;
        }
        self.drag.press(x);
        self.rig.auto_orbit = false;
        self.timers.cancel(TimerKind::ResumeOrbit);
        true
    }

    pub fn pointer_move(&mut self, x: f32) {
        if let Some(dx) = self.drag.move_to(x) {
            if self.rig.is_orbiting() {
                self.rig.drag_by(dx);
            }
        }
    }

    pub fn pointer_up(&mut self, now_ms: f64) {
        if !self.drag.release() {
            return;
        }
        if self.orbit_resumable() {
            self.timers
                .schedule(TimerKind::ResumeOrbit, now_ms + ORBIT_RESUME_DELAY_MS);
        }
    }

    // ---------------- Deferred actions ----------------

    /// Run a fired timer. Actions whose target state can change while they
    /// wait re-check it here; a newer wish instead replaces the pending
    /// `HideWish` deadline when it is scheduled.
    pub fn on_timer(&mut self, kind: TimerKind, now_ms: f64) {
        log::debug!("[timer] {:?} fired at {:.0}ms", kind, now_ms);
        match kind {
            TimerKind::OpenMessage => {
                self.open_message();
            }
            TimerKind::CollapseMessage => {
                if !self.message_open {
                    self.ui.push(UiCommand::CollapseMessage);
                }
            }
            TimerKind::HideWish => {
                self.wish_visible = false;
                self.ui.push(UiCommand::HideWish);
            }
            TimerKind::ResetBalloons => {
                if self.release_in_progress {
                    for balloon in &mut self.balloons {
                        balloon.reset(&mut self.scene, &mut self.rng);
                    }
                    self.release_in_progress = false;
                }
            }
            TimerKind::ResumeOrbit => {
                if self.orbit_resumable() && !self.drag.active {
                    self.rig.auto_orbit = true;
                }
            }
            TimerKind::FadeLoading => {
                self.ui.push(UiCommand::FadeLoadingScreen);
                self.timers
                    .schedule(TimerKind::HideLoading, now_ms + LOADING_HIDE_DELAY_MS);
            }
            TimerKind::HideLoading => {
                self.ui.push(UiCommand::HideLoadingScreen);
            }
        }
    }
}

#[inline]
pub(crate) fn seconds(now_ms: f64) -> f32 {
    (now_ms / 1000.0) as f32
}
