//! Model-View-Intent (MVI) primitives.
//!
//! Slider state changes flow in one direction:
//!
//! ```text
//! HostEvent ──→ Intent ──→ Reducer ──→ State ──→ SliderHost
//!    ↑                                              │
//!    └──────────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything needed to render one slider
//! - **Intent**: a navigation request or a gesture step
//! - **Reducer**: pure function from (state, intent) to the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
