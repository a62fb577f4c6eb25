pub mod canvas;
pub mod layer_control;
pub mod legend;
pub mod popup;
