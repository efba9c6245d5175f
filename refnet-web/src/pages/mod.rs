//! Page components, one per business screen.

pub mod dashboard;
pub mod earnings;
pub mod landing;
pub mod login;
pub mod network;
pub mod pins;
pub mod profile;
pub mod register;
pub mod withdraw;
pub mod withdraw_requests;

pub use dashboard::DashboardPage;
pub use earnings::EarningsPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use network::NetworkPage;
pub use pins::PinsPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use withdraw::WithdrawPage;
pub use withdraw_requests::WithdrawRequestsPage;
