pub mod exhibition_detail;
pub mod gallery;
pub mod login;
pub mod not_found;

pub use exhibition_detail::ExhibitionDetailPage;
pub use gallery::GalleryPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
