pub mod ai_chat;
pub mod brand_title;
pub mod fields;
pub mod loading;
pub mod modal;
pub mod navbar;
pub mod page;
pub mod redirect;
pub mod route_view;
pub mod stat_card;
pub mod tabs;

pub use ai_chat::AiChat;
pub use brand_title::BrandTitle;
pub use fields::{Detail, TextArea, TextField};
pub use loading::Loading;
pub use modal::Modal;
pub use navbar::Navbar;
pub use page::Page;
pub use redirect::Redirect;
pub use route_view::RouteView;
pub use stat_card::StatCard;
pub use tabs::TabButton;
