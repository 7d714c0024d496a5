pub mod models;
pub mod book;
pub mod manager;
pub mod summary;
pub mod finance;

pub use models::{Order, OrderDraft, OrderId, OrderStatus, PaymentStatus};
pub use book::OrderBook;
pub use manager::{OrderError, OrderManager};
pub use summary::SummaryTemplate;
pub use finance::DashboardStats;
