pub mod advisor;
pub mod box_view;
pub mod cabinet;
pub mod confirm;
pub mod helpers;
pub mod home;
pub mod labels_view;
pub mod photo_editor;
pub mod search_view;
pub mod settings_view;
pub mod shelf_view;
pub mod status_bar;
pub mod tools;
