pub mod camera;
pub mod scene;
pub mod canvas;
pub mod controls;
pub mod hud;
pub mod lfsim_vis3d;
