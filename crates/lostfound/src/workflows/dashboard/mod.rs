//! Administrator dashboard: counters, recent activity, the consistent claim listing, the
//! feedback inbox and the account roster. Every read recomputes from the stores; nothing is
//! cached.

pub mod recent;
pub mod router;
pub mod service;
pub mod stats;

pub use recent::{recent_claims, recent_items, RecentItem, RECENT_LIMIT};
pub use router::dashboard_router;
pub use service::AdminDashboard;
pub use stats::{DashboardStats, Totals};
