mod autocomplete_events;
mod autocomplete_render;
mod autocomplete_state;
mod highlight;

pub use autocomplete_render::{clear_button_area, render_dropdown, render_input};
pub use autocomplete_state::{AutocompleteState, WidgetOutcome};
pub use highlight::{QueryEmphasis, Segment};
