pub mod fill;
pub mod scale_texture;
pub mod t_figure;
