//! The slider component: lifecycle, event routing and rendering.

use tracing::{debug, info, trace};

use crate::mvi::Reducer;

use super::bindings::BoundHandlers;
use super::gesture::{Gesture, GestureSource};
use super::host::{
    ClickTarget, EventSource, HostEvent, SliderHost, TimerId, Transition, TRANSITION_DURATION,
};
use super::intent::SliderIntent;
use super::options::{ResolvedOptions, SliderOptions};
use super::reducer::SliderReducer;
use super::state::SliderState;

const FULL_WIDTH_PERCENT: f64 = 100.0;

/// Listeners bound on every init, besides one per indicator.
const BASE_SOURCES: [EventSource; 9] = [
    EventSource::PrevButton,
    EventSource::NextButton,
    EventSource::Resize,
    EventSource::PointerDown,
    EventSource::TouchStart,
    EventSource::PointerUp,
    EventSource::PointerMove,
    EventSource::TouchEnd,
    EventSource::TouchMove,
];

/// A carousel mounted into a host container.
///
/// Constructed inert; nothing touches the host until [`Slider::init`].
/// Every operation before `init` or after [`Slider::destroy`] is a no-op.
/// Dropping an initialized slider destroys it.
pub struct Slider<H: SliderHost> {
    container: H,
    options: SliderOptions,
    config: ResolvedOptions,
    state: SliderState,
    bindings: BoundHandlers,
    auto_play: Option<TimerId>,
    initialized: bool,
}

impl<H: SliderHost> Slider<H> {
    pub fn new(container: H, options: SliderOptions) -> Self {
        Self {
            container,
            options,
            config: ResolvedOptions::default(),
            state: SliderState::default(),
            bindings: BoundHandlers::new(),
            auto_play: None,
            initialized: false,
        }
    }

    /// Bind to the container. A second call while initialized does nothing.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }

        self.config = self.options.resolve();
        self.state = SliderState::new(self.container.slide_len(), self.config.looping());

        self.container
            .set_slide_basis(FULL_WIDTH_PERCENT / self.config.slide_count() as f64);
        if self.config.show_indicators() {
            self.create_indicators();
        }
        self.paint();
        self.bind_listeners();

        if self.config.auto_play() {
            self.start_auto_play();
        }

        self.initialized = true;
        info!(
            slides = self.state.len,
            slide_count = self.config.slide_count(),
            auto_play = self.config.auto_play(),
            looping = self.config.looping(),
            "slider initialized"
        );
    }

    /// Release everything bound by `init` and unset the track offset.
    ///
    /// Content cleared from the indicator container is not restored.
    pub fn destroy(&mut self) {
        if !self.initialized {
            return;
        }

        self.bindings.release(&mut self.container);
        if self.config.show_indicators() {
            self.container.clear_indicators();
        }
        self.stop_auto_play();
        self.container.set_track_offset(None);
        self.state.drag = Default::default();

        self.initialized = false;
        info!("slider destroyed");
    }

    pub fn go_to_next(&mut self) {
        self.navigate(SliderIntent::Next);
    }

    pub fn go_to_prev(&mut self) {
        self.navigate(SliderIntent::Prev);
    }

    /// Jump to `index`. Indices outside the track are ignored.
    pub fn go_to_index(&mut self, index: usize) {
        self.navigate(SliderIntent::GoTo { index });
    }

    /// Redraw the track at the current index.
    pub fn render(&mut self) {
        if self.initialized {
            self.paint();
        }
    }

    /// Route one host event to the matching operation.
    ///
    /// Events whose listener was never bound (or was released) are dropped.
    pub fn handle_event(&mut self, event: &HostEvent) {
        if !self.initialized {
            return;
        }

        if let HostEvent::Interval(timer) = event {
            if self.auto_play == Some(*timer) {
                trace!(?timer, "auto-play tick");
                self.go_to_next();
            }
            return;
        }

        match event.source() {
            Some(source) if self.bindings.is_bound(source) => {}
            _ => return,
        }

        match event {
            HostEvent::Click(ClickTarget::Prev) => self.go_to_prev(),
            HostEvent::Click(ClickTarget::Next) => self.go_to_next(),
            HostEvent::Click(ClickTarget::Indicator(index)) => self.go_to_index(*index),
            HostEvent::Resize => self.render(),
            HostEvent::Pointer(pointer) => self.on_gesture(pointer),
            HostEvent::Touch(touch) => self.on_gesture(touch),
            HostEvent::Interval(_) => {}
        }
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Slides counted at the last `init`.
    pub fn slide_len(&self) -> usize {
        self.state.len
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_play.is_some()
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    /// Options as resolved by the last `init`.
    pub fn config(&self) -> &ResolvedOptions {
        &self.config
    }

    pub fn container(&self) -> &H {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut H {
        &mut self.container
    }

    fn navigate(&mut self, intent: SliderIntent) {
        if !self.initialized {
            return;
        }
        let before = self.state.current_index;
        self.dispatch(intent);
        debug!(from = before, to = self.state.current_index, ?intent, "slider navigated");
        self.paint();
    }

    fn dispatch(&mut self, intent: SliderIntent) {
        self.state = SliderReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    fn on_gesture(&mut self, source: &impl GestureSource) {
        match source.gesture() {
            Some(Gesture::Start { x }) => self.on_drag_start(x),
            Some(Gesture::Move { x }) => self.on_drag_move(x),
            Some(Gesture::End) => self.on_drag_end(),
            None => {}
        }
    }

    fn on_drag_start(&mut self, x: f64) {
        self.container.set_track_transition(Transition::None);
        let offset = self.container.rendered_offset();
        self.dispatch(SliderIntent::DragStart { x, offset });
        trace!(x, offset, "drag started");
    }

    fn on_drag_move(&mut self, x: f64) {
        if !self.state.is_dragging() {
            return;
        }
        self.dispatch(SliderIntent::DragMove { x });
        if let Some(offset) = self.state.live_offset() {
            self.container.set_track_offset(Some(offset));
        }
    }

    fn on_drag_end(&mut self) {
        if !self.state.is_dragging() {
            return;
        }
        let before = self.state.current_index;
        self.dispatch(SliderIntent::DragEnd {
            slide_width: self.slide_width(),
        });
        trace!(from = before, to = self.state.current_index, "drag released");
        self.paint();
    }

    fn slide_width(&self) -> f64 {
        self.container.viewport_width() / self.config.slide_count() as f64
    }

    /// Write the current state to the host. While a drag is live the track
    /// belongs to the pointer, so only the counter and indicators update.
    fn paint(&mut self) {
        if !self.state.is_dragging() {
            let offset = -(self.state.current_index as f64) * self.slide_width();
            self.container
                .set_track_transition(Transition::EaseOut(TRANSITION_DURATION));
            self.container.set_track_offset(Some(offset));
        }

        if self.config.show_indicators() {
            for index in 0..self.state.len {
                self.container
                    .set_indicator_active(index, index == self.state.current_index);
            }
        }

        self.container.set_counter_text(&self.state.counter_text());
    }

    fn create_indicators(&mut self) {
        self.container.clear_indicators();
        for index in 0..self.state.len {
            self.container
                .append_indicator(index == self.state.current_index);
        }
    }

    fn bind_listeners(&mut self) {
        for source in BASE_SOURCES {
            self.bindings.bind(&mut self.container, source);
        }
        if self.config.show_indicators() {
            for index in 0..self.state.len {
                self.bindings
                    .bind(&mut self.container, EventSource::Indicator(index));
            }
        }
    }

    fn start_auto_play(&mut self) {
        let timer = self
            .container
            .start_interval(self.config.auto_play_interval());
        self.auto_play = Some(timer);
    }

    fn stop_auto_play(&mut self) {
        if let Some(timer) = self.auto_play.take() {
            self.container.clear_interval(timer);
        }
    }
}

impl<H: SliderHost> Drop for Slider<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<H: SliderHost + std::fmt::Debug> std::fmt::Debug for Slider<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("container", &self.container)
            .field("state", &self.state)
            .field("config", &self.config)
            .field("auto_play", &self.auto_play)
            .field("initialized", &self.initialized)
            .finish()
    }
}
