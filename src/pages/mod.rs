//! Page objects: one wrapper per UI screen
//!
//! Each screen object owns a [`BasePage`] by composition and exposes the
//! fixed workflow of that screen. Locators live here and nowhere else.

pub mod accounts_overview;
pub mod base;
pub mod bill_pay;
pub mod login;
pub mod navigation;
pub mod open_account;
pub mod registration;
pub mod transfer_funds;

pub use accounts_overview::AccountsOverviewPage;
pub use base::BasePage;
pub use bill_pay::BillPayPage;
pub use login::LoginPage;
pub use navigation::{MenuItem, NavigationMenu};
pub use open_account::{AccountType, OpenAccountPage};
pub use registration::RegistrationPage;
pub use transfer_funds::TransferFundsPage;
