pub mod flow;
pub mod map_view;
pub mod prediction_modal;

pub use map_view::MapView;
pub use prediction_modal::PredictionModal;
